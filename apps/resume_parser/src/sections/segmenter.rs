use crate::models::{SectionKind, SectionResult};
use crate::sections::registry::{find_other_header, match_section_start};

/// A section located in the resume text, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSlice<'a> {
    NotFound,
    Empty,
    Found(&'a str),
}

impl<'a> SectionSlice<'a> {
    /// Runs `extract` on found text; absence carries over unchanged.
    pub fn map<T>(self, extract: impl FnOnce(&'a str) -> T) -> SectionResult<T> {
        match self {
            SectionSlice::NotFound => SectionResult::NotFound,
            SectionSlice::Empty => SectionResult::Empty,
            SectionSlice::Found(text) => SectionResult::Parsed(extract(text)),
        }
    }
}

/// Slices the text between the first `kind` header and the earliest following
/// header of any other kind.
///
/// The end boundary is a plain substring search, so a header word used in
/// running text of the section (e.g. "references" in a skills line) ends the
/// section there.
pub fn extract_section(kind: SectionKind, text: &str) -> SectionSlice<'_> {
    let Some(header) = match_section_start(kind, text) else {
        return SectionSlice::NotFound;
    };
    let start = header.end;
    let end = find_other_header(kind, text, start).unwrap_or(text.len());

    let body = text[start..end].trim();
    if body.is_empty() {
        SectionSlice::Empty
    } else {
        SectionSlice::Found(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\nEducation\nStanford\n2020\nSkills\nPython";

    #[test]
    fn test_education_stops_at_skills() {
        assert_eq!(
            extract_section(SectionKind::Education, SAMPLE),
            SectionSlice::Found("Stanford\n2020")
        );
    }

    #[test]
    fn test_skills_runs_to_end_of_text() {
        assert_eq!(
            extract_section(SectionKind::Skills, SAMPLE),
            SectionSlice::Found("Python")
        );
    }

    #[test]
    fn test_missing_kind_is_not_found_regardless_of_others() {
        assert_eq!(
            extract_section(SectionKind::Experience, SAMPLE),
            SectionSlice::NotFound
        );
        assert_eq!(
            extract_section(SectionKind::Languages, SAMPLE),
            SectionSlice::NotFound
        );
    }

    #[test]
    fn test_header_followed_directly_by_other_header_is_empty() {
        let text = "Skills\nEducation\nMIT";
        assert_eq!(extract_section(SectionKind::Skills, text), SectionSlice::Empty);
    }

    #[test]
    fn test_header_with_only_whitespace_is_empty() {
        assert_eq!(
            extract_section(SectionKind::References, "Jane Doe\nReferences:   "),
            SectionSlice::Empty
        );
    }

    #[test]
    fn test_earliest_other_header_wins() {
        let text = "Experience\nAcme Corp\nHobbies\nChess\nEducation\nMIT";
        assert_eq!(
            extract_section(SectionKind::Experience, text),
            SectionSlice::Found("Acme Corp")
        );
    }

    #[test]
    fn test_mid_sentence_header_word_truncates() {
        let text = "Skills\nRust\nStrong references on request\nGo";
        assert_eq!(
            extract_section(SectionKind::Skills, text),
            SectionSlice::Found("Rust\nStrong")
        );
    }

    #[test]
    fn test_first_header_occurrence_is_used() {
        let text = "Skills\nRust\nEducation\nMIT\nSkills\nGo";
        assert_eq!(
            extract_section(SectionKind::Skills, text),
            SectionSlice::Found("Rust")
        );
    }

    #[test]
    fn test_header_with_colon_and_inline_content() {
        let text = "Languages: English, Tagalog\nReferences\nAvailable";
        assert_eq!(
            extract_section(SectionKind::Languages, text),
            SectionSlice::Found("English, Tagalog")
        );
    }

    #[test]
    fn test_map_preserves_absence() {
        let found = SectionSlice::Found("a\nb").map(|t| t.lines().count());
        assert_eq!(found, SectionResult::Parsed(2));
        assert_eq!(SectionSlice::Empty.map(|t| t.len()), SectionResult::Empty);
        assert_eq!(SectionSlice::NotFound.map(|t| t.len()), SectionResult::NotFound);
    }
}
