//! Resume section segmentation and field extraction.
//!
//! Text comes in either as a string or as a `.docx`/`.pdf` file; out comes a
//! [`ParsedResume`] where every section slot says whether its header was
//! missing, present but empty, or parsed.

pub mod config;
pub mod document;
pub mod errors;
pub mod extract;
pub mod models;
pub mod parser;
pub mod sections;

pub use config::ParserConfig;
pub use document::{reader_for_path, DocumentContent, DocumentFormat, DocumentReader};
pub use errors::ParseError;
pub use models::{
    EducationEntry, ExperienceSection, ParsedResume, PersonalInfo, SectionKind, SectionResult,
};
pub use parser::{ResumeDocument, ResumeParser};
