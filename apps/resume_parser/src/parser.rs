//! Resume aggregator: normalizes the text, extracts contact details from the
//! whole document, then segments and extracts each section in a fixed order.
//!
//! A missing or empty section never aborts the parse; only reading the input
//! file can fail.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, info_span, trace};
use uuid::Uuid;

use crate::config::ParserConfig;
use crate::document::reader_for_path;
use crate::errors::ParseError;
use crate::extract::{extract_education, extract_experience, extract_lines, PersonalInfoExtractor};
use crate::models::{ParsedResume, SectionKind, SectionResult};
use crate::sections::{extract_section, normalize, SectionSlice};

/// A parsed resume together with the normalized text it was parsed from.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeDocument {
    session_id: Uuid,
    #[serde(skip)]
    text: String,
    #[serde(flatten)]
    parsed: ParsedResume,
}

impl ResumeDocument {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parsed(&self) -> &ParsedResume {
        &self.parsed
    }

    pub fn into_parsed(self) -> ParsedResume {
        self.parsed
    }

    /// Indented JSON; non-ASCII characters are written as-is.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.parsed)
    }
}

/// Stateless between calls; one instance can parse any number of resumes,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    config: ParserConfig,
    personal: PersonalInfoExtractor,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl ResumeParser {
    pub fn new(config: ParserConfig) -> Self {
        let personal = PersonalInfoExtractor::new(&config);
        Self { config, personal }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, raw_text: &str) -> ParsedResume {
        self.parse_document(raw_text).into_parsed()
    }

    pub fn parse_document(&self, raw_text: &str) -> ResumeDocument {
        let session_id = Uuid::new_v4();
        let span = info_span!("parse_resume", session = %session_id);
        let _guard = span.enter();

        let text = normalize(raw_text);
        let parsed = self.parse_normalized(&text);

        ResumeDocument {
            session_id,
            text,
            parsed,
        }
    }

    /// Reads `path` with the reader for its extension and parses the result.
    pub fn parse_file(&self, path: &Path) -> Result<ResumeDocument, ParseError> {
        info!(path = %path.display(), "Parsing resume file");
        let reader = reader_for_path(path)?;
        let content = reader.read(path)?;
        Ok(self.parse_document(&content.flatten()))
    }

    fn parse_normalized(&self, text: &str) -> ParsedResume {
        let personal_info = self.personal.extract(text);
        debug!(
            has_name = personal_info.full_name.is_some(),
            emails = personal_info.emails.len(),
            has_phone = personal_info.phone_number.is_some(),
            links = personal_info.links.len(),
            "personal info extracted"
        );

        let employment_details = self.section(SectionKind::Experience, text).map(extract_experience);
        let education_details = self.section(SectionKind::Education, text).map(extract_education);
        let skills = self.section(SectionKind::Skills, text).map(extract_lines);
        let certifications = self.section(SectionKind::Certifications, text).map(extract_lines);
        let languages = self.section(SectionKind::Languages, text).map(extract_lines);
        let additional_info = self.section(SectionKind::Additional, text).map(extract_lines);
        let references = self.section(SectionKind::References, text).map(extract_lines);

        let parsed = ParsedResume {
            personal_info,
            employment_details,
            education_details,
            skills,
            certifications,
            languages,
            additional_info,
            references,
        };
        info!(sections_found = count_found(&parsed), "Resume parsed");
        parsed
    }

    fn section<'a>(&self, kind: SectionKind, text: &'a str) -> SectionSlice<'a> {
        let slice = extract_section(kind, text);
        match slice {
            SectionSlice::NotFound => debug!(section = kind.as_str(), "section not found"),
            SectionSlice::Empty => debug!(section = kind.as_str(), "section found but empty"),
            SectionSlice::Found(body) => {
                debug!(section = kind.as_str(), bytes = body.len(), "section extracted");
                if self.config.log_sections {
                    trace!(section = kind.as_str(), "{body}");
                }
            }
        }
        slice
    }
}

fn count_found(parsed: &ParsedResume) -> usize {
    fn found<T>(r: &SectionResult<T>) -> usize {
        usize::from(r.is_found())
    }
    found(&parsed.employment_details)
        + found(&parsed.education_details)
        + found(&parsed.skills)
        + found(&parsed.certifications)
        + found(&parsed.languages)
        + found(&parsed.additional_info)
        + found(&parsed.references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationEntry;

    const RESUME: &str = "\
Jane A. Doe
jane@x.com | +63 917 123 4567 | github.com/janedoe


Work Experience
Acme Corp
Backend Engineer
2020 - Present

Education
Stanford University
B.S. Computer Science
2016-2020
MIT
Ph.D Physics
2021

Skills
Rust

Python
SQL
Languages
English
Filipino
";

    fn parser() -> ResumeParser {
        ResumeParser::default()
    }

    #[test]
    fn test_full_resume() {
        let parsed = parser().parse(RESUME);

        assert_eq!(parsed.personal_info.full_name.as_deref(), Some("Jane A. Doe"));
        assert_eq!(parsed.personal_info.emails, vec!["jane@x.com"]);
        assert_eq!(parsed.personal_info.phone_number.as_deref(), Some("+63 917 123 4567"));
        assert_eq!(parsed.personal_info.links, vec!["github.com/janedoe"]);

        let experience = parsed.employment_details.parsed().unwrap();
        assert_eq!(experience.raw_text, "Acme Corp\nBackend Engineer\n2020 - Present");

        assert_eq!(
            parsed.education_details,
            SectionResult::Parsed(vec![
                EducationEntry {
                    institution: "Stanford University".to_string(),
                    degree: Some("B.S. Computer Science".to_string()),
                    date: Some("2016-2020".to_string()),
                },
                EducationEntry {
                    institution: "MIT".to_string(),
                    degree: Some("Ph.D Physics".to_string()),
                    date: Some("2021".to_string()),
                },
            ])
        );
        assert_eq!(
            parsed.skills,
            SectionResult::Parsed(vec!["Rust".to_string(), "Python".to_string(), "SQL".to_string()])
        );
        assert_eq!(
            parsed.languages,
            SectionResult::Parsed(vec!["English".to_string(), "Filipino".to_string()])
        );
        assert_eq!(parsed.certifications, SectionResult::NotFound);
        assert_eq!(parsed.references, SectionResult::NotFound);
    }

    #[test]
    fn test_missing_sections_do_not_abort() {
        let parsed = parser().parse("John Smith\njohn@example.com\nSkills\nGo");
        assert_eq!(parsed.personal_info.full_name.as_deref(), Some("John Smith"));
        assert_eq!(parsed.employment_details, SectionResult::NotFound);
        assert_eq!(parsed.education_details, SectionResult::NotFound);
        assert_eq!(parsed.skills, SectionResult::Parsed(vec!["Go".to_string()]));
    }

    #[test]
    fn test_empty_section_is_distinct_from_not_found() {
        let parsed = parser().parse("Education\nSkills\nRust");
        assert_eq!(parsed.education_details, SectionResult::Empty);
        assert_eq!(parsed.employment_details, SectionResult::NotFound);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parser().parse("");
        assert_eq!(parsed, ParsedResume::default());
    }

    #[test]
    fn test_document_keeps_normalized_text() {
        let doc = parser().parse_document("\n\nSkills\n\n\nRust\n\n");
        assert_eq!(doc.text(), "Skills\nRust");
        assert_eq!(doc.parsed().skills, SectionResult::Parsed(vec!["Rust".to_string()]));
    }

    #[test]
    fn test_json_view_is_pretty_and_keeps_unicode() {
        let doc = parser().parse_document("José Niño\nSkills\nGestión de proyectos");
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("Gestión de proyectos"));
        assert!(json.contains("\n  \"skills\": {"));
        assert!(json.contains("\"status\": \"not_found\""));
        assert!(!json.contains("session_id"));
    }

    #[test]
    fn test_parse_file_unsupported_extension() {
        let err = parser().parse_file(Path::new("resume.txt")).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_file_missing_docx() {
        let dir = tempfile::tempdir().unwrap();
        let err = parser().parse_file(&dir.path().join("gone.docx")).unwrap_err();
        assert!(matches!(err, ParseError::FileNotFound(_)));
    }

    #[test]
    fn test_parse_file_docx_with_table_and_textbox() {
        use std::io::Write;

        let p = |t: &str| format!(r#"<w:p><w:r><w:t xml:space="preserve">{t}</w:t></w:r></w:p>"#);
        let body = format!(
            "{name}{edu}<w:tbl><w:tr><w:tc>{inst}</w:tc><w:tc>{year}</w:tc></w:tr></w:tbl>{skills}{rust}\
             <w:p><w:r><w:txbxContent>{mail}</w:txbxContent></w:r></w:p>",
            name = p("Maria Clara Santos"),
            edu = p("Education"),
            inst = p("University of the Philippines"),
            year = p("2019"),
            skills = p("Skills"),
            rust = p("Rust"),
            mail = p("maria@up.edu.ph"),
        );
        let xml = format!(
            r#"<?xml version="1.0"?><w:document xmlns:w="urn:w"><w:body>{body}</w:body></w:document>"#
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maria.docx");
        let mut zip = zip::ZipWriter::new(std::fs::File::create(&path).unwrap());
        zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();

        let doc = parser().parse_file(&path).unwrap();
        assert_eq!(
            doc.text(),
            "Maria Clara Santos\nEducation\nSkills\nRust\nUniversity of the Philippines\n2019\nTexts in Shapes:\nmaria@up.edu.ph"
        );
        let parsed = doc.parsed();
        assert_eq!(parsed.personal_info.full_name.as_deref(), Some("Maria Clara Santos"));
        assert_eq!(parsed.personal_info.emails, vec!["maria@up.edu.ph"]);
        assert_eq!(parsed.education_details, SectionResult::Empty);
    }
}
