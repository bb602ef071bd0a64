//! Per-section field extractors. Each one is a pure function of the section text.

pub mod education;
pub mod experience;
pub mod personal;
pub mod skills;

pub use education::extract_education;
pub use experience::extract_experience;
pub use personal::PersonalInfoExtractor;
pub use skills::extract_lines;
