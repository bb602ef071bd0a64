use serde::{Deserialize, Serialize};

/// Resume section categories, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
    Additional,
    References,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::PersonalInfo,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::Languages,
        SectionKind::Additional,
        SectionKind::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "personal_info",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
            SectionKind::Additional => "additional",
            SectionKind::References => "references",
        }
    }
}

/// Outcome of segmenting and extracting one section.
/// `NotFound`: no header for the kind. `Empty`: header present, nothing before the next section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SectionResult<T> {
    NotFound,
    Empty,
    Parsed(T),
}

impl<T> SectionResult<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            SectionResult::Parsed(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, SectionResult::NotFound)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: Option<String>,
    pub date: Option<String>,
}

impl EducationEntry {
    pub fn new(institution: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            degree: None,
            date: None,
        }
    }
}

/// Segmented experience text. Structured employment records are not extracted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub personal_info: PersonalInfo,
    pub employment_details: SectionResult<ExperienceSection>,
    pub education_details: SectionResult<Vec<EducationEntry>>,
    pub skills: SectionResult<Vec<String>>,
    pub certifications: SectionResult<Vec<String>>,
    pub languages: SectionResult<Vec<String>>,
    pub additional_info: SectionResult<Vec<String>>,
    pub references: SectionResult<Vec<String>>,
}

impl Default for ParsedResume {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            employment_details: SectionResult::NotFound,
            education_details: SectionResult::NotFound,
            skills: SectionResult::NotFound,
            certifications: SectionResult::NotFound,
            languages: SectionResult::NotFound,
            additional_info: SectionResult::NotFound,
            references: SectionResult::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_result_not_found_serializes_as_status() {
        let r: SectionResult<Vec<String>> = SectionResult::NotFound;
        assert_eq!(serde_json::to_value(&r).unwrap(), json!({"status": "not_found"}));
    }

    #[test]
    fn test_section_result_parsed_carries_value() {
        let r = SectionResult::Parsed(vec!["Rust".to_string()]);
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"status": "parsed", "value": ["Rust"]})
        );
    }

    #[test]
    fn test_section_result_deserializes_empty() {
        let r: SectionResult<Vec<String>> = serde_json::from_str(r#"{"status":"empty"}"#).unwrap();
        assert_eq!(r, SectionResult::Empty);
        assert!(r.is_found());
        assert!(r.parsed().is_none());
    }

    #[test]
    fn test_personal_info_omits_absent_fields() {
        let info = PersonalInfo {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"full_name": "Jane Doe"})
        );
    }

    #[test]
    fn test_section_kind_serde_matches_as_str() {
        for kind in SectionKind::ALL {
            let v = serde_json::to_value(kind).unwrap();
            assert_eq!(v, json!(kind.as_str()));
        }
    }
}
