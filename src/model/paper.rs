//! The paper root and its editing operations.

use super::{Image, Section, SectionBody, SectionField, Table, Target};
use crate::error::{ensure_index, Error, IndexKind, Result};
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Selector for the paper's flat text lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    /// Author names.
    Authors,
    /// Institutions or organizations.
    Affiliations,
    /// Contact email addresses.
    Emails,
    /// Keyword entries.
    Keywords,
    /// Bibliography entries.
    References,
    /// Appendix blocks.
    Appendix,
}

/// The root content tree submitted to the generation service.
///
/// A paper is exclusively owned by one wizard session: it is created
/// empty, mutated through the operations below, serialized for submission,
/// and discarded. Every operation is atomic: indices are validated before
/// anything is written, so a failed call leaves the tree untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    #[serde(default)]
    pub title: String,

    /// Author names, in byline order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Author affiliations.
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// Contact email addresses.
    #[serde(default)]
    pub emails: Vec<String>,

    /// Abstract text.
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,

    /// Keywords.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Body sections, in document order.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Bibliography entries.
    #[serde(default)]
    pub references: Vec<String>,

    /// Appendix blocks.
    #[serde(default)]
    pub appendix: Vec<String>,
}

impl Paper {
    /// Create a new empty paper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check whether the metadata step is complete: a title, at least one
    /// non-blank author, and an abstract.
    pub fn metadata_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && self.authors.iter().any(|a| !a.trim().is_empty())
            && !self.abstract_text.trim().is_empty()
    }

    /// Validate the paper before submitting it for generation.
    pub fn validate_for_generation(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.abstract_text.trim().is_empty() {
            return Err(Error::Validation(
                "title and abstract are required".to_string(),
            ));
        }
        Ok(())
    }

    // ==================== Sections ====================

    /// Append an empty section.
    pub fn add_section(&mut self) {
        self.sections.push(Section::new());
    }

    /// Remove the section at `index`. Later sections shift down by one,
    /// so cached indices are invalid after this call.
    pub fn remove_section(&mut self, index: usize) -> Result<()> {
        ensure_index(IndexKind::Section, index, self.sections.len())?;
        self.sections.remove(index);
        Ok(())
    }

    /// Replace the heading or content of the section at `index`.
    pub fn update_section(
        &mut self,
        index: usize,
        field: SectionField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.section_mut(index)?.body.set_field(field, value);
        Ok(())
    }

    /// Append an empty subsection to the section at `section`.
    pub fn add_subsection(&mut self, section: usize) -> Result<()> {
        self.section_mut(section)?
            .subsections
            .push(SectionBody::new());
        Ok(())
    }

    /// Remove the subsection at `(section, subsection)`.
    pub fn remove_subsection(&mut self, section: usize, subsection: usize) -> Result<()> {
        let parent = self.section_mut(section)?;
        ensure_index(IndexKind::Subsection, subsection, parent.subsections.len())?;
        parent.subsections.remove(subsection);
        Ok(())
    }

    /// Replace the heading or content of the subsection at
    /// `(section, subsection)`.
    pub fn update_subsection(
        &mut self,
        section: usize,
        subsection: usize,
        field: SectionField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.body_mut(Target::Subsection(section, subsection))?
            .set_field(field, value);
        Ok(())
    }

    // ==================== Formulas ====================

    /// Append an empty formula entry to the target block.
    pub fn add_formula(&mut self, target: Target) -> Result<()> {
        self.body_mut(target)?.formulas.push(String::new());
        Ok(())
    }

    /// Replace the formula at `index` in the target block.
    pub fn update_formula(
        &mut self,
        target: Target,
        index: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let body = self.body_mut(target)?;
        ensure_index(IndexKind::Formula, index, body.formulas.len())?;
        body.formulas[index] = value.into();
        Ok(())
    }

    /// Remove the formula at `index` from the target block. Later
    /// formulas shift down.
    pub fn remove_formula(&mut self, target: Target, index: usize) -> Result<()> {
        let body = self.body_mut(target)?;
        ensure_index(IndexKind::Formula, index, body.formulas.len())?;
        body.formulas.remove(index);
        Ok(())
    }

    // ==================== Tables ====================

    /// Create a `rows x cols` grid of empty cells and append it to the
    /// target block. Fails with [`Error::InvalidDimension`] before
    /// anything is appended if either count is zero.
    pub fn add_table(&mut self, target: Target, rows: usize, cols: usize) -> Result<()> {
        // Target indices are validated before the dimension check.
        let body = self.body_mut(target)?;
        let table = Table::new(rows, cols)?;
        body.tables.push(table);
        Ok(())
    }

    /// Replace one cell of the table at `table_index` in the target block.
    pub fn update_table_cell(
        &mut self,
        target: Target,
        table_index: usize,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let body = self.body_mut(target)?;
        ensure_index(IndexKind::Table, table_index, body.tables.len())?;
        body.tables[table_index].set_cell(row, col, value)
    }

    /// Remove the table at `table_index` from the target block.
    pub fn remove_table(&mut self, target: Target, table_index: usize) -> Result<()> {
        let body = self.body_mut(target)?;
        ensure_index(IndexKind::Table, table_index, body.tables.len())?;
        body.tables.remove(table_index);
        Ok(())
    }

    // ==================== Images ====================

    /// Append an image entry recording an already-uploaded reference path
    /// and its caption. The upload itself happens at the image store; this
    /// only records the result.
    pub fn add_image(
        &mut self,
        target: Target,
        path: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<()> {
        self.body_mut(target)?.images.push(Image::new(path, caption));
        Ok(())
    }

    /// Remove the image at `index` from the target block. Later images
    /// shift down.
    pub fn remove_image(&mut self, target: Target, index: usize) -> Result<()> {
        let body = self.body_mut(target)?;
        ensure_index(IndexKind::Image, index, body.images.len())?;
        body.images.remove(index);
        Ok(())
    }

    // ==================== Metadata lists ====================

    /// Borrow one of the flat text lists.
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Authors => &self.authors,
            ListField::Affiliations => &self.affiliations,
            ListField::Emails => &self.emails,
            ListField::Keywords => &self.keywords,
            ListField::References => &self.references,
            ListField::Appendix => &self.appendix,
        }
    }

    /// Append an empty entry to one of the flat text lists.
    pub fn add_list_entry(&mut self, field: ListField) {
        self.list_mut(field).push(String::new());
    }

    /// Replace the entry at `index` in one of the flat text lists.
    pub fn update_list_entry(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let list = self.list_mut(field);
        ensure_index(IndexKind::Entry, index, list.len())?;
        list[index] = value.into();
        Ok(())
    }

    /// Remove the entry at `index` from one of the flat text lists.
    pub fn remove_list_entry(&mut self, field: ListField, index: usize) -> Result<()> {
        let list = self.list_mut(field);
        ensure_index(IndexKind::Entry, index, list.len())?;
        list.remove(index);
        Ok(())
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Authors => &mut self.authors,
            ListField::Affiliations => &mut self.affiliations,
            ListField::Emails => &mut self.emails,
            ListField::Keywords => &mut self.keywords,
            ListField::References => &mut self.references,
            ListField::Appendix => &mut self.appendix,
        }
    }

    // ==================== Addressing ====================

    /// Borrow the section at `index`.
    pub fn section(&self, index: usize) -> Result<&Section> {
        ensure_index(IndexKind::Section, index, self.sections.len())?;
        Ok(&self.sections[index])
    }

    /// Borrow the block a target addresses.
    pub fn body(&self, target: Target) -> Result<&SectionBody> {
        match target {
            Target::Section(index) => Ok(&self.section(index)?.body),
            Target::Subsection(index, sub) => {
                let section = self.section(index)?;
                ensure_index(IndexKind::Subsection, sub, section.subsections.len())?;
                Ok(&section.subsections[sub])
            }
        }
    }

    /// Resolve a target into a single mutable block reference.
    ///
    /// The section index is validated before the subsection index is
    /// even read, so a stale outer index can never turn into a nested
    /// dereference.
    pub fn body_mut(&mut self, target: Target) -> Result<&mut SectionBody> {
        match target {
            Target::Section(index) => Ok(&mut self.section_mut(index)?.body),
            Target::Subsection(index, sub) => {
                let section = self.section_mut(index)?;
                ensure_index(IndexKind::Subsection, sub, section.subsections.len())?;
                Ok(&mut section.subsections[sub])
            }
        }
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section> {
        ensure_index(IndexKind::Section, index, self.sections.len())?;
        Ok(&mut self.sections[index])
    }

    // ==================== Serialization ====================

    /// Serialize the paper to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };
        result.map_err(Error::from)
    }

    /// Deserialize a paper from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }
}
