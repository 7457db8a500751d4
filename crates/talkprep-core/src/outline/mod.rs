//! Outline domain module.
//!
//! The outline is the hub artifact: scripts, slide decks, and Q&A
//! preparation are all derived from (configuration, outline) and refer back
//! only via shared section ids.
//!
//! # Module Structure
//!
//! - `model`: outline domain models (`Outline`, `Section`, `SectionType`)
//! - `builder`: template-based and coarse outline construction
//! - `validate`: timing validation and improvement heuristics
//! - `render`: markdown reporting surface

mod builder;
mod model;
mod render;
mod validate;

pub use builder::{build_outline_from_template, create_outline_template, estimate_slide_count};
pub use model::{Outline, Section, SectionType};
pub use render::outline_to_markdown;
pub use validate::{suggest_outline_improvements, validate_outline_timing, TimingValidation};
