//! Section and subsection content blocks.

use super::{Image, Table};
use serde::{Deserialize, Serialize};

/// Editable content carried by a section or a subsection.
///
/// Sections and subsections have the same shape apart from nesting, so
/// both levels share this struct and every editing operation behaves
/// identically at either level once its target is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionBody {
    /// Heading text.
    #[serde(default)]
    pub heading: String,

    /// Free-form prose.
    #[serde(default)]
    pub content: String,

    /// Captioned images, in insertion order.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Formula entries, each a LaTeX expression or plain text, opaque here.
    #[serde(default)]
    pub formulas: Vec<String>,

    /// Fixed-shape tables.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl SectionBody {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one of the text fields.
    pub fn set_field(&mut self, field: SectionField, value: impl Into<String>) {
        match field {
            SectionField::Heading => self.heading = value.into(),
            SectionField::Content => self.content = value.into(),
        }
    }

    /// Check whether nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.heading.is_empty()
            && self.content.is_empty()
            && self.images.is_empty()
            && self.formulas.is_empty()
            && self.tables.is_empty()
    }
}

/// A subsection: the same editable block, one level down. Subsections do
/// not nest further.
pub type Subsection = SectionBody;

/// A top-level section: an editable block plus its subsections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// The section's own content.
    #[serde(flatten)]
    pub body: SectionBody,

    /// Nested subsections, exactly one level deep.
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// Create an empty section with no subsections.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Selector for the two directly editable text fields of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    /// The heading text.
    Heading,
    /// The prose content.
    Content,
}

/// Addresses either a section or one of its subsections.
///
/// Collection operations (formulas, tables, images) take a `Target` and
/// resolve it once into a single block reference, so section-level and
/// subsection-level edits run through the same code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The section at this position.
    Section(usize),
    /// The subsection at `(section, subsection)`.
    Subsection(usize, usize),
}

impl Target {
    /// The index of the section this target lives in.
    pub fn section_index(&self) -> usize {
        match *self {
            Target::Section(index) => index,
            Target::Subsection(index, _) => index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_section_is_empty() {
        let section = Section::new();
        assert!(section.body.is_empty());
        assert!(section.subsections.is_empty());
    }

    #[test]
    fn test_set_field() {
        let mut body = SectionBody::new();
        body.set_field(SectionField::Heading, "Introduction");
        body.set_field(SectionField::Content, "Motivation goes here.");
        assert_eq!(body.heading, "Introduction");
        assert_eq!(body.content, "Motivation goes here.");
    }

    #[test]
    fn test_section_wire_shape_is_flat() {
        let mut section = Section::new();
        section.body.heading = "Results".to_string();
        section.subsections.push(Subsection::new());

        let json = serde_json::to_value(&section).unwrap();
        // The body flattens into the section object itself.
        assert_eq!(json["heading"], "Results");
        assert!(json["subsections"].is_array());
        // Subsections carry no nested "subsections" key.
        assert!(json["subsections"][0].get("subsections").is_none());
    }

    #[test]
    fn test_target_section_index() {
        assert_eq!(Target::Section(3).section_index(), 3);
        assert_eq!(Target::Subsection(2, 5).section_index(), 2);
    }
}
