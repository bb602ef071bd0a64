pub mod resume;

pub use resume::{
    EducationEntry, ExperienceSection, ParsedResume, PersonalInfo, SectionKind, SectionResult,
};
