//! Property-based tests for the accumulator and the display formatter

#![allow(clippy::unwrap_used)]

use keycalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate a single digit token
fn digit_strategy() -> impl Strategy<Value = String> {
    (0u8..=9u8).prop_map(|d| d.to_string())
}

/// Generate a digit or decimal-point token
fn keypad_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => digit_strategy(),
        1 => Just(".".to_string()),
    ]
}

/// Generate any operation
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

/// Generate any key on the keypad
fn key_strategy() -> impl Strategy<Value = Key> {
    prop::sample::select(Key::keypad())
}

/// Digits with at most one decimal point
fn literal_strategy() -> impl Strategy<Value = String> {
    ("[0-9]{1,9}", proptest::option::of("[0-9]{0,6}")).prop_map(|(int, frac)| match frac {
        Some(frac) => format!("{int}.{frac}"),
        None => int,
    })
}

fn typed(tokens: &[String]) -> Accumulator {
    let mut calc = Accumulator::new();
    for token in tokens {
        calc.append_digit(token);
    }
    calc
}

// ===== Input accumulation =====

proptest! {
    /// Digits accumulate in order
    #[test]
    fn prop_digits_accumulate_in_order(digits in prop::collection::vec(digit_strategy(), 0..20)) {
        let calc = typed(&digits);
        prop_assert_eq!(calc.current_operand(), digits.concat());
    }

    /// No key sequence ever produces a second decimal point in typed input
    #[test]
    fn prop_at_most_one_decimal_point(tokens in prop::collection::vec(keypad_token_strategy(), 0..30)) {
        let calc = typed(&tokens);
        prop_assert!(calc.current_operand().matches('.').count() <= 1);
    }

    /// Only the first decimal point is kept
    #[test]
    fn prop_first_decimal_point_wins(tokens in prop::collection::vec(keypad_token_strategy(), 0..30)) {
        let calc = typed(&tokens);
        let mut expected = String::new();
        for token in &tokens {
            if token != "." || !expected.contains('.') {
                expected.push_str(token);
            }
        }
        prop_assert_eq!(calc.current_operand(), expected);
    }

    /// Choosing an operation with nothing typed changes nothing
    #[test]
    fn prop_operator_on_empty_is_noop(op in operation_strategy()) {
        let mut calc = Accumulator::new();
        calc.choose_operation(op);
        prop_assert_eq!(calc.operation(), None);
        prop_assert_eq!(calc.render(), DisplayLines::default());
    }

    /// compute with nothing pending changes nothing
    #[test]
    fn prop_compute_without_operation_is_noop(literal in literal_strategy()) {
        let mut calc = Accumulator::new();
        calc.append_digit(&literal);
        let before = calc.render();
        calc.compute();
        prop_assert_eq!(calc.current_operand(), literal.as_str());
        prop_assert_eq!(calc.render(), before);
        prop_assert!(!calc.result_displayed());
    }
}

// ===== Computation =====

proptest! {
    /// A completed expression leaves the numeric result and a trail
    #[test]
    fn prop_compute_matches_operation(
        a in literal_strategy(),
        b in literal_strategy(),
        op in operation_strategy(),
    ) {
        let mut calc = Accumulator::new();
        calc.append_digit(&a);
        calc.choose_operation(op);
        calc.append_digit(&b);
        calc.compute();

        let lhs: f64 = a.parse().unwrap();
        let rhs: f64 = b.parse().unwrap();
        let expected = op.apply(lhs, rhs);
        let actual: f64 = match calc.current_operand() {
            "Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            "NaN" => f64::NAN,
            text => text.parse().unwrap(),
        };

        if expected.is_nan() {
            prop_assert!(actual.is_nan());
        } else {
            prop_assert_eq!(actual, expected);
        }
        prop_assert_eq!(calc.operation(), None);
        prop_assert!(calc.result_displayed());
        let trail = calc.previous_operand();
        let op_infix = format!(" {op} ");
        prop_assert!(trail.ends_with('='));
        prop_assert!(trail.contains(&op_infix));
    }

    /// The next digit after a result starts a new operand
    #[test]
    fn prop_digit_after_result_starts_fresh(
        a in literal_strategy(),
        b in literal_strategy(),
        op in operation_strategy(),
        digit in digit_strategy(),
    ) {
        let mut calc = Accumulator::new();
        calc.append_digit(&a);
        calc.choose_operation(op);
        calc.append_digit(&b);
        calc.compute();
        calc.append_digit(&digit);

        prop_assert_eq!(calc.current_operand(), digit.as_str());
        prop_assert_eq!(calc.previous_operand(), "");
        prop_assert_eq!(calc.operation(), None);
    }

    /// Chains evaluate strictly left to right
    #[test]
    fn prop_chain_is_left_to_right(
        a in 1u32..1000,
        b in 1u32..1000,
        c in 1u32..1000,
        first in operation_strategy(),
        second in operation_strategy(),
    ) {
        let mut calc = Accumulator::new();
        calc.append_digit(&a.to_string());
        calc.choose_operation(first);
        calc.append_digit(&b.to_string());
        calc.choose_operation(second);
        calc.append_digit(&c.to_string());
        calc.compute();

        let intermediate = first.apply(f64::from(a), f64::from(b));
        let expected = second.apply(intermediate, f64::from(c));
        let rendered = keycalc::core::operand::number_text(expected);
        prop_assert_eq!(calc.current_operand(), rendered.as_str());
    }
}

// ===== Rendering and keys =====

proptest! {
    /// Formatting drops only grouping separators from the integer part
    #[test]
    fn prop_format_strips_back_to_literal(literal in literal_strategy()) {
        let formatted = format_text(&literal);
        let stripped = formatted.replace(',', "");
        let normalized = match literal.split_once('.') {
            Some((int, frac)) => format!("{}.{frac}", without_leading_zeros(int)),
            None => without_leading_zeros(&literal),
        };
        prop_assert_eq!(stripped, normalized);
    }

    /// Integer groups hold exactly three digits after the first
    #[test]
    fn prop_groups_of_three(n in 0u64..u64::from(u32::MAX) * 1000) {
        let formatted = format_value(n as f64);
        let groups: Vec<&str> = formatted.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Pressing a key is the same as calling the operation it names
    #[test]
    fn prop_press_matches_direct_call(
        prefix in prop::collection::vec(key_strategy(), 0..12),
        key in key_strategy(),
    ) {
        let mut pressed = Accumulator::new();
        let mut direct = Accumulator::new();
        for k in &prefix {
            pressed.press(*k);
            direct.press(*k);
        }

        let lines = pressed.press(key);
        match key {
            Key::Digit(c) => direct.append_digit(&c.to_string()),
            Key::Operator(op) => direct.choose_operation(op),
            Key::Equals => direct.compute(),
            Key::Clear => direct.clear(),
            Key::Delete => direct.delete_last_char(),
        }

        prop_assert_eq!(lines, direct.render());
        prop_assert_eq!(pressed.current_operand(), direct.current_operand());
        prop_assert_eq!(pressed.previous_operand(), direct.previous_operand());
        prop_assert_eq!(pressed.result_displayed(), direct.result_displayed());
    }

    /// Rendering never mutates
    #[test]
    fn prop_render_is_pure(keys in prop::collection::vec(key_strategy(), 0..20)) {
        let mut calc = Accumulator::new();
        for key in keys {
            calc.press(key);
        }
        let flag = calc.result_displayed();
        let first = calc.render();
        prop_assert_eq!(calc.render(), first);
        prop_assert_eq!(calc.result_displayed(), flag);
    }
}

fn without_leading_zeros(digits: &str) -> String {
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}
