use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::EducationEntry;

static INSTITUTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|academy|school|learning[ \t]+center)")
        .expect("valid institution regex")
});

/// Bare acronym lines such as "MIT" or "UCLA".
static ACRONYM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,8}$").expect("valid acronym regex"));

/// Uppercase tokens that show up alone on education lines but never name a school.
const NON_INSTITUTION_ACRONYMS: &[&str] = &[
    "GPA", "CGPA", "QPA", "GWA", "CPA", "CFA", "CMA", "GED", "SAT", "ACT", "GRE", "GMAT", "TOEFL",
    "IELTS", "USA", "US", "UK", "UAE", "EU", "PH", "NA", "TBD", "STEM",
];

static DIPLOMA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)diploma").expect("valid diploma regex"));

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:19|20)\d{2}\b|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?[ \t]+\d{2,4}\b|\b\d{1,2}/\d{4}\b",
    )
    .expect("valid date regex")
});

static DEGREE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:b\.?s\.?c?|m\.?s\.?c?|b\.?a|m\.?a|mba|ph\.?d)\b|bachelor|master|associate|certification|diploma)",
    )
    .expect("valid degree regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Institution,
    Date,
    Degree,
    Other,
}

/// Classification order is fixed: institution, then date, then degree.
fn classify(line: &str) -> LineKind {
    if is_institution(line) {
        LineKind::Institution
    } else if DATE_PATTERN.is_match(line) {
        LineKind::Date
    } else if DEGREE_PATTERN.is_match(line) {
        LineKind::Degree
    } else {
        LineKind::Other
    }
}

fn is_institution(line: &str) -> bool {
    if DIPLOMA_PATTERN.is_match(line) {
        return false;
    }
    INSTITUTION_PATTERN.is_match(line) || is_institution_acronym(line)
}

fn is_institution_acronym(line: &str) -> bool {
    ACRONYM_PATTERN.is_match(line)
        && !DEGREE_PATTERN.is_match(line)
        && !NON_INSTITUTION_ACRONYMS.contains(&line)
}

/// Groups education lines into entries.
///
/// An institution line opens an entry. Date lines set the date of the latest
/// entry (last wins); degree lines set its degree only if still unset (first
/// wins). Lines before the first institution are dropped.
pub fn extract_education(section: &str) -> Vec<EducationEntry> {
    let mut entries: Vec<EducationEntry> = Vec::new();

    for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify(line) {
            LineKind::Institution => entries.push(EducationEntry::new(line)),
            LineKind::Date => {
                if let Some(current) = entries.last_mut() {
                    current.date = Some(line.to_string());
                }
            }
            LineKind::Degree => {
                if let Some(current) = entries.last_mut() {
                    if current.degree.is_none() {
                        current.degree = Some(line.to_string());
                    }
                }
            }
            LineKind::Other => {}
        }
    }

    entries
}
