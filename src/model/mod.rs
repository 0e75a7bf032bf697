//! Paper content model.
//!
//! This module defines the in-memory tree edited by the wizard: a `Paper`
//! root holding metadata lists and an ordered sequence of sections, each
//! carrying prose plus formulas, tables, and captioned images, nested at
//! most one subsection level deep. The model serializes to the exact JSON
//! shape consumed by the generation service.

mod image;
mod paper;
mod section;
mod table;

pub use image::Image;
pub use paper::{JsonFormat, ListField, Paper};
pub use section::{Section, SectionBody, SectionField, Subsection, Target};
pub use table::Table;
