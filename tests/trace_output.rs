use rust_decimal_macros::dec;
use tipcalc::prelude::*;

#[test]
fn test_trace_serialization() {
    let calc = TipCalculator::new(&TipConfig::default()).unwrap();
    let breakdown = calc.calculate(&TipInput::new(33, 15, true).unwrap());

    let json = serde_json::to_string(&breakdown).unwrap();
    println!("Serialized JSON: {}", json);

    assert!(json.contains(r#""operation":"initial""#));
    assert!(json.contains(r#""operation":"rate""#));
    assert!(json.contains(r#""operation":"ceiling""#));
    assert!(json.contains(r#""formatted":"$5.00""#));
    assert!(json.contains(r#""rounded":true"#));

    let back: TipBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(back.tip, dec!(5));
}

#[test]
fn test_explain_lists_every_step() {
    let calc = TipCalculator::new(&TipConfig::default()).unwrap();
    let breakdown = calc.calculate(&TipInput::new(33, 15, true).unwrap());
    let text = breakdown.explain();
    println!("{}", text);

    assert!(text.contains("Bill amount"));
    assert!(text.contains("4.95"));
    assert!(text.contains("Rounded up"));
    assert!(text.trim_end().ends_with("Tip: $5.00"));
    assert_eq!(breakdown.to_string(), "Tip: $5.00");
}

#[test]
fn test_explain_without_rounding_has_no_ceiling_step() {
    let calc = TipCalculator::new(&TipConfig::default()).unwrap();
    let breakdown = calc.calculate(&TipInput::new(33, 15, false).unwrap());
    assert!(!breakdown.explain().contains("Rounded up"));
    assert!(!breakdown.rounded);
}

#[test]
fn test_schema_describes_breakdown() {
    let schema = schemars::schema_for!(TipBreakdown);
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("raw_tip"));
    assert!(json.contains("bill_amount"));
}
