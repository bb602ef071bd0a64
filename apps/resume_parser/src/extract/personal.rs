//! Contact-detail extraction over the whole normalized document.
//!
//! Contact data often sits above the first section header, so this runs on
//! the full text rather than a segmented section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParserConfig;
use crate::models::PersonalInfo;

/// 2–6 capitalized tokens on one line, first and last a bare word; inner
/// tokens may be initials ("A.").
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z'-]+(?:[ \t]+(?:[A-Z][a-zA-Z'-]+|[A-Z]\.)){0,4}[ \t]+[A-Z][a-zA-Z'-]+\b")
        .expect("valid name regex")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").expect("valid email regex")
});

/// Optional country code, optional (area) code, then 3–4 / 3–4 / 3–4 digit groups.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,2}[ \t]?)?(?:\(?\d{2,4}\)?[ \t-]?)?\(?\d{3,4}\)?[ \t-]?\d{3,4}[ \t-]?\d{3,4}")
        .expect("valid phone regex")
});

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?[a-zA-Z0-9-]+\.[a-z]{2,6}(?:/\S*)?")
        .expect("valid link regex")
});

/// Extracts contact details. Holds the compiled link filter for one parser instance.
#[derive(Debug, Clone)]
pub struct PersonalInfoExtractor {
    filter_words: Option<Regex>,
    filter_window: usize,
}

impl PersonalInfoExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        let alternation = config
            .link_filter_words
            .iter()
            .map(|w| {
                w.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join("|");
        let filter_words = if alternation.is_empty() {
            None
        } else {
            Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
        };
        Self {
            filter_words,
            filter_window: config.link_filter_window,
        }
    }

    pub fn extract(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            full_name: extract_full_name(text),
            emails: extract_emails(text),
            phone_number: extract_phone_number(text),
            links: self.extract_links(text),
        }
    }

    /// Link-shaped tokens in document order, repeats included, minus those
    /// whose first occurrence follows a filter word ("at stanford.edu",
    /// "offered by coursera.org").
    pub fn extract_links(&self, text: &str) -> Vec<String> {
        find_link_candidates(text)
            .into_iter()
            .filter(|candidate| !self.is_filtered(text, candidate))
            .map(String::from)
            .collect()
    }

    /// Every copy of a link is judged by the context of its first occurrence.
    fn is_filtered(&self, text: &str, link: &str) -> bool {
        let Some(filter) = &self.filter_words else {
            return false;
        };
        if self.filter_window == 0 {
            return false;
        }
        let Some(first) = text.find(link) else {
            return false;
        };
        let preceding = &text[..first];
        let window_start = preceding
            .char_indices()
            .rev()
            .nth(self.filter_window - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        filter.is_match(&preceding[window_start..])
    }
}

pub fn extract_full_name(text: &str) -> Option<String> {
    NAME_PATTERN
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}

/// All email addresses, deduplicated in first-seen order.
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut emails: Vec<String> = Vec::new();
    for m in EMAIL_PATTERN.find_iter(text) {
        let email = m.as_str();
        if !emails.iter().any(|e| e == email) {
            emails.push(email.to_string());
        }
    }
    emails
}

pub fn extract_phone_number(text: &str) -> Option<String> {
    PHONE_PATTERN
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}

/// Link-shaped matches not glued to a preceding word character, `.` or `@`.
/// A rejected start is retried one character later, so `jane@x.com` yields
/// nothing rather than `x.com`.
fn find_link_candidates(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let Some(m) = LINK_PATTERN.find_at(text, pos) else {
            break;
        };
        let glued = text[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '@');
        if glued {
            pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            continue;
        }
        found.push(m.as_str());
        pos = m.end().max(m.start() + 1);
    }
    found
}
