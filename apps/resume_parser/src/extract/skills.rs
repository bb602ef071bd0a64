/// Splits a list-style section into its non-blank lines, trimmed, in order.
/// Used for skills and the other one-item-per-line sections.
pub fn extract_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
