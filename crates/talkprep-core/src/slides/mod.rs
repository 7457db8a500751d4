//! Slide deck domain module.
//!
//! # Module Structure
//!
//! - `model`: deck domain models (`SlideDeck`, `Slide`, `SlideLayout`)
//! - `builder`: deck construction from an outline
//! - `export`: markdown / JSON / HTML export surfaces
//! - `validate`: deck-quality validation

mod builder;
mod export;
mod model;
mod validate;

pub use builder::build_slide_deck;
pub use export::{
    export_slide_deck, ExportFormat, ExportOptions, ExportResult, SlideDeckExport, SlideExport,
};
pub use model::{DeckMetadata, Slide, SlideDeck, SlideLayout, SlideQuote, DECK_FORMAT_VERSION};
pub use validate::{validate_slide_deck, DeckValidation};
