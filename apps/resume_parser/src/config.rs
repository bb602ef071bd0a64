use anyhow::{Context, Result};

/// Parser configuration. Passed into `ResumeParser::new`; nothing is read from
/// the environment after construction.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub rust_log: String,
    /// Number of characters before a link's first occurrence that are scanned for filter words.
    pub link_filter_window: usize,
    /// Words that mark a domain as an affiliation rather than a contact link ("at stanford.edu").
    pub link_filter_words: Vec<String>,
    /// Emit segmented section text at trace level.
    pub log_sections: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            link_filter_window: 30,
            link_filter_words: vec!["at".to_string(), "offered by".to_string(), "on".to_string()],
            log_sections: false,
        }
    }
}

impl ParserConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(ParserConfig {
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            link_filter_window: match std::env::var("RESUME_LINK_FILTER_WINDOW") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("RESUME_LINK_FILTER_WINDOW must be a non-negative integer")?,
                Err(_) => defaults.link_filter_window,
            },
            link_filter_words: match std::env::var("RESUME_LINK_FILTER_WORDS") {
                Ok(v) => parse_word_list(&v),
                Err(_) => defaults.link_filter_words,
            },
            log_sections: match std::env::var("RESUME_LOG_SECTIONS") {
                Ok(v) => parse_bool(&v)
                    .with_context(|| format!("RESUME_LOG_SECTIONS must be a boolean, got '{v}'"))?,
                Err(_) => defaults.log_sections,
            },
        })
    }
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_words() {
        let config = ParserConfig::default();
        assert_eq!(config.link_filter_window, 30);
        assert_eq!(config.link_filter_words, vec!["at", "offered by", "on"]);
        assert!(!config.log_sections);
    }

    #[test]
    fn test_word_list_trims_and_lowercases() {
        assert_eq!(
            parse_word_list(" At, Offered By ,,on "),
            vec!["at", "offered by", "on"]
        );
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" 1 ").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
