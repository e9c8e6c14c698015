use proptest::prelude::*;
use urls2md::transform;

/// Lines that are neither URL lines nor section breaks.
fn passthrough_line() -> impl Strategy<Value = String> {
    "[^\n]{0,40}".prop_filter("not a URL line or section break", |line| {
        let trimmed = line.trim_matches(|c: char| c == '\u{feff}' || c.is_whitespace());
        !trimmed.starts_with("http") && trimmed != "#"
    })
}

/// Lines in the shape the tool is meant to consume.
fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        passthrough_line(),
        Just("#".to_string()),
        ("[a-z]{1,12}", "~?[A-Za-z ]{0,20}")
            .prop_map(|(host, title)| format!("https://{host}.com \"{title}\"")),
        "[a-z]{1,12}".prop_map(|host| format!("https://{host}.com no description")),
    ]
}

proptest! {
    #[test]
    fn passthrough_lines_are_preserved(lines in prop::collection::vec(passthrough_line(), 0..20)) {
        let content = lines.join("\n");
        prop_assert_eq!(transform(&content), content);
    }

    #[test]
    fn output_is_a_fixed_point(lines in prop::collection::vec(source_line(), 0..20)) {
        let once = transform(&lines.join("\n"));
        prop_assert_eq!(transform(&once), once);
    }
}
