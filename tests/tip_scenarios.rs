use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tipcalc::prelude::*;

fn us_calculator() -> TipCalculator {
    TipCalculator::new(&TipConfig::default()).expect("en-US formatter")
}

#[test]
fn test_documented_scenarios() {
    let calc = us_calculator();

    assert_eq!(calc.calculate_tip(dec!(100), dec!(15), false), "$15.00");
    assert_eq!(calc.calculate_tip(dec!(100), dec!(15), true), "$15.00");
    assert_eq!(calc.calculate_tip(dec!(33), dec!(15), true), "$5.00");
    assert_eq!(calc.calculate_tip(dec!(33), dec!(15), false), "$4.95");
    assert_eq!(calc.calculate_tip(dec!(50), dec!(20), false), "$10.00");
    assert_eq!(calc.calculate_tip(dec!(50), dec!(20), true), "$10.00");
    assert_eq!(calc.calculate_tip(dec!(50), dec!(18), true), "$9.00");
}

#[test]
fn test_empty_amount_text_is_zero_tip() {
    let calc = us_calculator();
    let breakdown = calc.calculate_text("", "15", false);
    assert_eq!(breakdown.input.bill_amount, Decimal::ZERO);
    assert_eq!(breakdown.formatted, "$0.00");
}

#[test]
fn test_zero_boundaries() {
    let calc = us_calculator();
    for round_up in [false, true] {
        assert_eq!(calc.calculate_tip(Decimal::ZERO, dec!(20), round_up), "$0.00");
        assert_eq!(calc.calculate_tip(dec!(120), Decimal::ZERO, round_up), "$0.00");
    }
}

#[test]
fn test_unrounded_matches_formatted_product() {
    let calc = us_calculator();
    let formatter = IcuCurrencyFormatter::try_new(TipLocale::EnUS).unwrap();

    let amounts = [dec!(0.99), dec!(12.34), dec!(87.5), dec!(1999.99)];
    let percents = [dec!(0), dec!(7.5), dec!(15), dec!(18), dec!(22.25)];
    for amount in amounts {
        for percent in percents {
            let expected = formatter.format_currency(percent / dec!(100) * amount);
            assert_eq!(calc.calculate_tip(amount, percent, false), expected);
        }
    }
}

#[test]
fn test_round_up_is_whole_unit_ceiling() {
    let calc = us_calculator();
    let amounts = [dec!(0.99), dec!(12.34), dec!(87.5), dec!(1999.99)];
    let percents = [dec!(7.5), dec!(15), dec!(18), dec!(22.25)];
    for amount in amounts {
        for percent in percents {
            let breakdown = calc.calculate(&TipInput::new(amount, percent, true).unwrap());
            let ceiling = (percent / dec!(100) * amount).ceil();
            assert_eq!(breakdown.tip, ceiling);
            assert_eq!(breakdown.tip.fract(), Decimal::ZERO);
            assert!(breakdown.formatted.ends_with(".00"), "{}", breakdown.formatted);
        }
    }
}

#[test]
fn test_idempotent() {
    let calc = us_calculator();
    let first = calc.calculate_tip(dec!(47.20), dec!(17.5), true);
    let second = calc.calculate_tip(dec!(47.20), dec!(17.5), true);
    assert_eq!(first, second);

    let a = calc.calculate_text("47.20", "17.5", false);
    let b = calc.calculate_text("47.20", "17.5", false);
    assert_eq!(a, b);
}

#[test]
fn test_free_function_uses_en_us() {
    assert_eq!(calculate_tip(dec!(33), dec!(15), true), "$5.00");
    assert_eq!(calculate_tip(dec!(1000), dec!(20), false), "$200.00");
}

#[test]
fn test_default_percent_path() {
    let calc = us_calculator();
    let input = TipInput::with_default_percent(dec!(40)).unwrap();
    assert_eq!(calc.calculate(&input).formatted, "$6.00");
}

#[test]
fn test_locale_specific_output() {
    let fr = TipCalculator::new(&TipConfig::default().with_locale(TipLocale::FrFR)).unwrap();
    let tip = fr.calculate_tip(dec!(33), dec!(15), false);
    assert!(tip.starts_with("4,95"), "{}", tip);
    assert!(tip.ends_with('€'), "{}", tip);

    let ja = TipCalculator::new(&TipConfig::default().with_locale(TipLocale::JaJP)).unwrap();
    assert_eq!(ja.calculate_tip(dec!(3300), dec!(15), false), "￥495");
    assert_eq!(ja.locale(), TipLocale::JaJP);
}

#[test]
fn test_negative_bill_is_not_rejected() {
    let calc = us_calculator();
    assert_eq!(calc.calculate_text("-40", "10", false).formatted, "-$4.00");
}

#[test]
fn test_extreme_inputs_saturate_instead_of_panicking() {
    let calc = us_calculator();
    let max = "$79,228,162,514,264,337,593,543,950,335.00";

    assert_eq!(calc.calculate_text("1e20", "1e20", false).formatted, max);
    assert_eq!(calc.calculate_text("79228162514264337593543950335", "1000", false).formatted, max);
    assert_eq!(calc.calculate_text("79228162514264337593543950335", "100", true).formatted, max);
    assert_eq!(
        calc.calculate_text("79228162514264337593543950335", "-1000", false).formatted,
        format!("-{}", max)
    );
    // Out-of-range text parses to zero.
    assert_eq!(calc.calculate_text("1e40", "15", false).formatted, "$0.00");
}
