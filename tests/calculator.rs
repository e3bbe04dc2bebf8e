use std::ops::ControlFlow;

use srpn::Session;

/// Feeds each line to a fresh session and returns everything written to the
/// output, together with the exit status if a fatal error ended the session.
fn eval_lines(lines: &[&str]) -> (String, Option<i32>) {
    eval_lines_with(Session::new(), lines)
}

fn eval_lines_with(mut session: Session, lines: &[&str]) -> (String, Option<i32>) {
    let mut out = Vec::new();

    for line in lines {
        match session.eval_line(line, &mut out)
                     .expect("writing to a Vec cannot fail")
        {
            ControlFlow::Continue(()) => {},
            ControlFlow::Break(status) => {
                return (String::from_utf8(out).expect("output is ASCII"), Some(status));
            },
        }
    }

    (String::from_utf8(out).expect("output is ASCII"), None)
}

fn assert_output(lines: &[&str], expected: &str) {
    let (output, status) = eval_lines(lines);
    assert_eq!(output, expected);
    assert_eq!(status, None, "session ended fatally but was expected to continue");
}

fn assert_fatal(lines: &[&str], expected: &str, expected_status: i32) {
    let (output, status) = eval_lines(lines);
    assert_eq!(output, expected);
    assert_eq!(status, Some(expected_status));
}

#[test]
fn subtraction_orders_operands() {
    assert_output(&["5 3 - ="], "2\n");
}

#[test]
fn minus_after_space_negates() {
    assert_output(&["5 -3 + ="], "2\n");
}

#[test]
fn minus_after_digit_subtracts() {
    assert_output(&["5-3 ="], "Stack underflow.\n3\n");
}

#[test]
fn double_minus_after_digit_negates() {
    assert_output(&["5--3 + ="], "Stack underflow.\n2\n");
}

#[test]
fn stack_persists_across_lines() {
    assert_output(&["1", "2", "+ ="], "3\n");
}

#[test]
fn print_stack_bottom_to_top() {
    assert_output(&["1 2 3 d"], "1\n2\n3\n");
}

#[test]
fn fresh_stack_dump_prints_sentinel() {
    assert_output(&["d"], "-2147483648\n");
}

#[test]
fn print_top_fails_until_first_push() {
    assert_output(&["=", "d =", "1 ="],
                  "Stack Empty\n-2147483648\nStack Empty\n1\n");
}

#[test]
fn underflow_on_single_operand() {
    assert_output(&["+"], "Stack underflow.\n");
    assert_output(&["9 +"], "Stack underflow.\n");
}

#[test]
fn overflow_leaves_stack_unchanged() {
    let pushes = (1..=24).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");

    let mut expected = String::from("Stack overflow.\n");
    for n in 1..=23 {
        expected.push_str(&format!("{n}\n"));
    }

    assert_output(&[&pushes, "d"], &expected);
}

#[test]
fn stack_depth_matches_push_count() {
    let mut session = Session::new();
    let mut out = Vec::new();

    assert!(session.stack().is_fresh());
    let _ = session.eval_line("1 2 3 4 5", &mut out).unwrap();

    assert!(!session.stack().is_fresh());
    assert_eq!(session.stack().depth(), 5);
    assert_eq!(session.stack().values(), [1, 2, 3, 4, 5]);
}

#[test]
fn division_by_zero_is_recoverable() {
    assert_output(&["2 0 /", "+ ="], "Divide by 0\n2\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output(&["-7 2 / ="], "-3\n");
    assert_output(&["7 -2 / ="], "-3\n");
}

#[test]
fn min_dividend_by_negative_one_saturates() {
    assert_output(&["-2147483648 -1 / ="], "2147483647\n");
}

#[test]
fn zero_modulus_is_fatal() {
    assert_fatal(&["2 0 %"], "Divide by 0\n", 136);
}

#[test]
fn zero_modulus_stops_remaining_tokens() {
    assert_fatal(&["2 0 % 5 ="], "Divide by 0\n", 136);
}

#[test]
fn modulus_takes_divisor_sign() {
    assert_output(&["-5 3 % ="], "1\n");
    assert_output(&["5 -3 % ="], "-1\n");
}

#[test]
fn addition_saturates() {
    assert_output(&["2147483647 1 + ="], "2147483647\n");
}

#[test]
fn subtraction_saturates() {
    assert_output(&["-2147483648 1 - ="], "-2147483648\n");
}

#[test]
fn multiplication_saturates() {
    assert_output(&["65536 65536 * ="], "2147483647\n");
}

#[test]
fn literal_saturates() {
    assert_output(&["9999999999 ="], "2147483647\n");
    assert_output(&["-9999999999 ="], "-2147483648\n");
}

#[test]
fn exponentiation() {
    assert_output(&["2 10 ^ ="], "1024\n");
}

#[test]
fn exponentiation_saturates() {
    assert_output(&["2 40 ^ ="], "2147483647\n");
}

#[test]
fn negative_base_with_odd_exponent() {
    assert_output(&["-2 3 ^ ="], "-8\n");
}

#[test]
fn zero_exponent_yields_one() {
    assert_output(&["5 0 ^ ="], "1\n");
    assert_output(&["0 0 ^ ="], "1\n");
}

#[test]
fn negative_exponent_is_recoverable() {
    assert_output(&["2 -1 ^", "d"], "Negative power.\n2\n-1\n");
}

#[test]
fn comment_markers_require_flanking_spaces() {
    assert_output(&["1 #comment# 2 + ="], "2\n");
}

#[test]
fn spaced_comment_is_stripped() {
    assert_output(&["1 # comment # 2 + ="], "3\n");
}

#[test]
fn unmatched_marker_suppresses_next_line() {
    assert_output(&["1 # 2", "3 # 4 + ="], "5\n");
}

#[test]
fn comment_state_persists_across_lines() {
    assert_output(&["1 #", "2", "# 3 ="], "3\n");
}

#[test]
fn hash_without_flanking_spaces_becomes_zero_operand() {
    assert_output(&["5# + ="], "5\n");
}

#[test]
fn unknown_characters_degrade_to_zero_operands() {
    assert_output(&["x ="], "0\n");
    assert_output(&["\t ="], "0\n");
}

#[test]
fn random_draws_are_deterministic_per_seed() {
    let (first, _) = eval_lines_with(Session::with_seed(7), &["r r r d"]);
    let (second, _) = eval_lines_with(Session::with_seed(7), &["r r r d"]);
    assert_eq!(first, second);

    let values: Vec<i64> = first.lines()
                                .map(|line| line.parse().expect("draws are integers"))
                                .collect();
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|&v| (0..=i64::from(i32::MAX)).contains(&v)));
}

#[test]
fn random_push_respects_the_stack_bound() {
    let pushes = (1..=23).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
    let line = format!("{pushes} r");

    assert_output(&[&line], "Stack overflow.\n");
}
