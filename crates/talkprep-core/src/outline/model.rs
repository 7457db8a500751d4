//! Outline domain models.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The role a section plays within the talk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SectionType {
    Intro,
    Main,
    Conclusion,
    Qa,
    Transition,
}

/// One labeled, timed unit of an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Positional id (`section-<index>`), stable across derived artifacts.
    pub id: String,
    pub title: String,
    pub duration_minutes: u32,
    /// Position in the outline; matches the list index.
    pub order: u32,
    pub section_type: SectionType,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsections: Option<Vec<Section>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Section {
    /// Creates a section with no key points, subsections, or notes.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: u32,
        order: u32,
        section_type: SectionType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            order,
            section_type,
            key_points: Vec::new(),
            subsections: None,
            notes: None,
        }
    }
}

/// An ordered section breakdown with per-section time allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub total_duration_minutes: u32,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
}

impl Outline {
    /// Sum of allocated section minutes.
    ///
    /// May differ from `total_duration_minutes` by a small rounding
    /// remainder; the builder does not redistribute it.
    pub fn allocated_minutes(&self) -> u32 {
        self.sections.iter().map(|s| s.duration_minutes).sum()
    }

    /// Finds a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sections of a given type, in order.
    pub fn sections_of_type(&self, section_type: SectionType) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.section_type == section_type)
            .collect()
    }

    /// Whether the outline ends with a Q&A block.
    pub fn has_qa(&self) -> bool {
        self.sections
            .iter()
            .any(|s| s.section_type == SectionType::Qa)
    }
}
