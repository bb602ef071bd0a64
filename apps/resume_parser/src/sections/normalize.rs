use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n|\r)+").expect("valid line-break regex"));

/// Collapses every run of line breaks into a single `\n` and trims the whole text.
/// Individual lines are left as-is; extractors trim them.
pub fn normalize(raw: &str) -> String {
    LINE_BREAK_RUN.replace_all(raw, "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n  \n"), "");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(normalize("Jane Doe\n\n\nEducation\r\n\r\nMIT"), "Jane Doe\nEducation\nMIT");
    }

    #[test]
    fn test_keeps_inner_line_whitespace() {
        assert_eq!(normalize("  Skills  \n  Rust  "), "Skills  \n  Rust");
    }

    #[test]
    fn test_idempotent_and_no_double_breaks() {
        let inputs = [
            "a\n\nb",
            "\n\n\nx\n \ny\n\n",
            "line\r\n\r\n\r\nline",
            "  spaced \n\n  out  ",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
            assert!(!once.contains("\n\n"), "double break in {once:?}");
        }
    }
}
