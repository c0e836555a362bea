use super::*;
use crate::entity::fields::{PLANE_AGE, PLANE_MODEL};
use proptest::prelude::*;
use std::io::Cursor;

fn script(lines: &[String]) -> Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}

proptest! {
    #[test]
    fn first_valid_int_wins(
        bad in prop::collection::vec(10_000i64..1_000_000, 0..5),
        good in 0i64..=9999,
    ) {
        let mut lines: Vec<String> = bad.iter().map(ToString::to_string).collect();
        lines.push(good.to_string());
        let mut p = Prompter::new(script(&lines), Vec::new());
        prop_assert_eq!(p.read_int("Age: ", &PLANE_AGE).unwrap(), good);

        let out = String::from_utf8(p.into_parts().1).unwrap();
        prop_assert_eq!(out.matches("Please re-enter.").count(), bad.len());
    }

    #[test]
    fn retry_limit_is_exact(limit in 1u32..6) {
        let lines: Vec<String> = (0..10).map(|_| "x".to_string()).collect();
        let mut p = Prompter::new(script(&lines), Vec::new()).with_max_attempts(Some(limit));
        match p.read_int("Age: ", &PLANE_AGE) {
            Err(Error::RetriesExhausted { attempts, .. }) => prop_assert_eq!(attempts, limit),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn text_within_limit_is_returned_trimmed(model in "[A-Za-z0-9]{1,64}") {
        let mut p = Prompter::new(script(&[format!("  {model} ")]), Vec::new());
        prop_assert_eq!(p.read_text("Model: ", &PLANE_MODEL).unwrap(), model);
    }

    #[test]
    fn yes_no_only_accepts_y_or_n(answer in "[a-zA-Z]{0,3}") {
        let expected = match answer.to_ascii_lowercase().as_str() {
            "y" => Some(true),
            "n" => Some(false),
            _ => None,
        };
        prop_assert_eq!(parse_yes_no(&answer), expected);
    }
}
