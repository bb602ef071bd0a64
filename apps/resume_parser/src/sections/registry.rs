//! Section header registry: static synonym lists per `SectionKind` and the
//! matchers compiled from them.
//!
//! Matchers are built once and shared across parses.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SectionKind;

/// Header synonyms per kind, in registry order. Matching is case-insensitive.
const SECTION_HEADERS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::PersonalInfo,
        &[
            "personal information",
            "personal details",
            "personal data",
            "contact information",
            "contact details",
        ],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "background work experience",
            "employment history",
            "work history",
        ],
    ),
    (
        SectionKind::Education,
        &[
            "education",
            "academic background",
            "educational background",
            "academic qualifications",
        ],
    ),
    (
        SectionKind::Skills,
        &[
            "skills",
            "technical skills",
            "key skills",
            "core competencies",
            "skill set",
        ],
    ),
    (
        SectionKind::Certifications,
        &[
            "certifications",
            "certificates",
            "licenses and certifications",
        ],
    ),
    (
        SectionKind::Languages,
        &["languages", "language proficiency"],
    ),
    (
        SectionKind::Additional,
        &["additional information", "interests", "hobbies", "awards"],
    ),
    (SectionKind::References, &["references", "referees"]),
];

/// A located section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// The header text as written in the document (without the leading newline or trailing delimiter).
    pub header: &'a str,
    /// Byte offset immediately after the header and its delimiter.
    pub end: usize,
}

struct KindMatchers {
    /// Line-anchored header: `(^|\n)<synonym>(\n|:|\s+)`.
    start: Regex,
    /// Unanchored alternation over every other kind's synonyms.
    boundary: Option<Regex>,
}

static MATCHERS: Lazy<HashMap<SectionKind, KindMatchers>> = Lazy::new(|| {
    SectionKind::ALL
        .into_iter()
        .map(|kind| {
            let matchers = KindMatchers {
                start: build_start_matcher(headers_for(kind)),
                boundary: build_boundary_matcher(&all_other_headers(kind)),
            };
            (kind, matchers)
        })
        .collect()
});

/// Ordered header synonyms for `kind`.
pub fn headers_for(kind: SectionKind) -> &'static [&'static str] {
    SECTION_HEADERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, headers)| *headers)
        .unwrap_or(&[])
}

/// Every synonym of every kind except `kind`, in registry order. Duplicates are kept.
pub fn all_other_headers(kind: SectionKind) -> Vec<&'static str> {
    SECTION_HEADERS
        .iter()
        .filter(|(k, _)| *k != kind)
        .flat_map(|(_, headers)| headers.iter().copied())
        .collect()
}

/// Finds the first line-leading header for `kind` in `text`.
pub fn match_section_start(kind: SectionKind, text: &str) -> Option<HeaderMatch<'_>> {
    let caps = MATCHERS.get(&kind)?.start.captures(text)?;
    let whole = caps.get(0)?;
    let header = caps.name("header")?;
    Some(HeaderMatch {
        header: header.as_str(),
        end: whole.end(),
    })
}

/// Byte offset of the earliest case-insensitive occurrence of any other kind's
/// header at or after `from`. Plain substring search, not line-anchored.
pub fn find_other_header(kind: SectionKind, text: &str, from: usize) -> Option<usize> {
    let boundary = MATCHERS.get(&kind)?.boundary.as_ref()?;
    if from > text.len() || !text.is_char_boundary(from) {
        return None;
    }
    boundary.find_at(text, from).map(|m| m.start())
}

fn build_start_matcher(headers: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = headers.to_vec();
    // Longest first so "work experience" beats "experience" at the same line start.
    sorted.sort_by_key(|h| std::cmp::Reverse(h.len()));
    let alternation = sorted
        .iter()
        .map(|h| synonym_pattern(h))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(?:^|\n)(?P<header>{alternation})(?:\n|:|\s+)"))
        .expect("escaped header synonyms form a valid regex")
}

fn build_boundary_matcher(headers: &[&str]) -> Option<Regex> {
    if headers.is_empty() {
        return None;
    }
    let alternation = headers
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");
    Some(Regex::new(&format!("(?i)(?:{alternation})")).expect("escaped headers form a valid regex"))
}

/// Escapes one synonym, letting its internal spaces match any run of spaces or tabs.
fn synonym_pattern(header: &str) -> String {
    header
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[ \t]+")
}
