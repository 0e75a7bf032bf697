//! # paperforge
//!
//! Structured authoring toolkit for IEEE-style papers.
//!
//! This library maintains the in-memory content tree behind a multi-step
//! paper wizard (metadata, sections with subsections/formulas/tables/
//! images, references, appendix) and talks to the backend services that
//! do the heavy lifting: document generation, image storage, quality
//! analysis, and authentication.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paperforge::{ApiClient, SectionField, Target, Wizard};
//!
//! # async fn run() -> paperforge::Result<()> {
//! let mut wizard = Wizard::new();
//! let paper = wizard.paper_mut();
//! paper.title = "A Study of Things".to_string();
//! paper.authors.push("A. Author".to_string());
//! paper.abstract_text = "We study things.".to_string();
//!
//! paper.add_section();
//! paper.update_section(0, SectionField::Heading, "Introduction")?;
//! paper.add_formula(Target::Section(0))?;
//!
//! let client = ApiClient::new();
//! let docx = client.generate(wizard.paper()).await?;
//! std::fs::write("paper.docx", docx)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Positional editing**: every collection is addressed by index, with
//!   fail-fast bounds checks and atomic operations
//! - **One nesting level**: sections hold subsections; subsections do not
//!   nest further
//! - **Typed service boundary**: async clients for generation, image
//!   upload, quality reports, and auth
//! - **Session bookkeeping**: token expiry reading and warning windows

pub mod client;
pub mod detect;
pub mod error;
pub mod model;
pub mod session;
pub mod wizard;

// Re-export commonly used types
pub use client::{
    ApiClient, AuthResponse, AuthSession, ClientOptions, OverallStatus, QualityReport,
    ReportStatistics, DEFAULT_BASE_URL,
};
pub use detect::{ensure_docx, has_docx_extension, is_docx_bytes};
pub use error::{Error, IndexKind, Result};
pub use model::{
    Image, JsonFormat, ListField, Paper, Section, SectionBody, SectionField, Subsection, Table,
    Target,
};
pub use session::{is_token_expired, session_state, time_remaining, token_expiry, SessionState};
pub use wizard::{Step, UploadOutcome, UploadTicket, Wizard};

use std::path::Path;

/// Load a paper from a JSON file.
///
/// # Example
///
/// ```no_run
/// use paperforge::load_paper;
///
/// let paper = load_paper("paper.json").unwrap();
/// println!("Sections: {}", paper.section_count());
/// ```
pub fn load_paper<P: AsRef<Path>>(path: P) -> Result<Paper> {
    let json = std::fs::read_to_string(path)?;
    Paper::from_json(&json)
}

/// Save a paper to a JSON file.
pub fn save_paper<P: AsRef<Path>>(paper: &Paper, path: P, format: JsonFormat) -> Result<()> {
    let json = paper.to_json(format)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.json");

        let mut paper = Paper::new();
        paper.title = "Round Trip".to_string();
        paper.add_section();
        paper
            .add_image(Target::Section(0), "uploads/fig.png", "Figure 1")
            .unwrap();

        save_paper(&paper, &path, JsonFormat::Pretty).unwrap();
        let loaded = load_paper(&path).unwrap();
        assert_eq!(loaded, paper);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_paper("/nonexistent/paper.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(load_paper(&path), Err(Error::Serialize(_))));
    }
}
