use tracing::debug;

use crate::models::ExperienceSection;

/// Keeps the segmented experience text as-is.
///
/// TODO: split into per-employer records (company, role, dates) once a line
/// heuristic for role/company ordering is settled.
pub fn extract_experience(section: &str) -> ExperienceSection {
    debug!(
        lines = section.lines().count(),
        "experience section segmented; structured records not extracted"
    );
    ExperienceSection {
        raw_text: section.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_preserved() {
        let section = "Acme Corp\nSoftware Engineer\n2019 - Present";
        assert_eq!(extract_experience(section).raw_text, section);
    }
}
