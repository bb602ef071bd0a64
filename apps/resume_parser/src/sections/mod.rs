//! Section segmentation: text normalization, the header synonym registry, and
//! header-to-header slicing of the normalized resume text.

pub mod normalize;
pub mod registry;
pub mod segmenter;

pub use normalize::normalize;
pub use registry::{all_other_headers, find_other_header, headers_for, match_section_start, HeaderMatch};
pub use segmenter::{extract_section, SectionSlice};
