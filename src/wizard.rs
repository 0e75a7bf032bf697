//! Linear wizard flow for assembling a paper.
//!
//! The wizard walks four steps (metadata, sections, references, generate),
//! owns the paper being edited, and brokers image-upload results so a
//! result that lands after the paper was discarded is dropped instead of
//! being applied to a rebuilt tree.

use crate::error::{Error, Result};
use crate::model::{Paper, Target};

/// A wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Title, authors, abstract, keywords.
    #[default]
    Metadata,
    /// Sections, subsections, formulas, tables, images.
    Sections,
    /// References and appendix.
    References,
    /// Review and submit.
    Generate,
}

impl Step {
    /// 1-based position of this step.
    pub fn number(&self) -> u8 {
        match self {
            Step::Metadata => 1,
            Step::Sections => 2,
            Step::References => 3,
            Step::Generate => 4,
        }
    }

    /// Total number of steps.
    pub const TOTAL: u8 = 4;

    /// Display label for this step.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Metadata => "Metadata",
            Step::Sections => "Sections",
            Step::References => "References",
            Step::Generate => "Generate",
        }
    }
}

/// Handle for an in-flight image upload.
///
/// Issued before the upload starts; [`Wizard::commit_image`] only applies
/// the result if the paper the ticket was issued against still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    epoch: u64,
    target: Target,
}

impl UploadTicket {
    /// The block this upload is destined for.
    pub fn target(&self) -> Target {
        self.target
    }
}

/// Outcome of committing an upload result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The image was recorded on the target block.
    Attached,
    /// The paper was discarded while the upload was outstanding; the
    /// result was dropped.
    Stale,
}

/// The wizard session: one paper, one current step.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    paper: Paper,
    step: Step,
    epoch: u64,
}

impl Wizard {
    /// Start a new wizard session with an empty paper.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Borrow the paper.
    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    /// Borrow the paper mutably for editing operations.
    pub fn paper_mut(&mut self) -> &mut Paper {
        &mut self.paper
    }

    /// Completion percentage shown alongside the step indicator.
    pub fn progress_percent(&self) -> u8 {
        (self.step.number() as u32 * 100 / Step::TOTAL as u32) as u8
    }

    /// Advance to the next step.
    ///
    /// Leaving the metadata step requires a title, at least one non-blank
    /// author, and an abstract; at the final step this is a no-op.
    pub fn next(&mut self) -> Result<Step> {
        self.step = match self.step {
            Step::Metadata => {
                if !self.paper.metadata_complete() {
                    return Err(Error::StepIncomplete(
                        "a title, at least one author, and an abstract are required".to_string(),
                    ));
                }
                Step::Sections
            }
            Step::Sections => Step::References,
            Step::References => Step::Generate,
            Step::Generate => Step::Generate,
        };
        Ok(self.step)
    }

    /// Go back one step. At the first step this is a no-op.
    pub fn previous(&mut self) -> Step {
        self.step = match self.step {
            Step::Metadata | Step::Sections => Step::Metadata,
            Step::References => Step::Sections,
            Step::Generate => Step::References,
        };
        self.step
    }

    /// Discard the paper and start over at the first step.
    ///
    /// Any outstanding upload tickets become stale.
    pub fn reset(&mut self) {
        self.paper = Paper::new();
        self.step = Step::Metadata;
        self.epoch += 1;
    }

    /// Issue a ticket for an image upload destined for `target`.
    ///
    /// Other editing operations remain available while the upload is
    /// outstanding.
    pub fn upload_ticket(&self, target: Target) -> UploadTicket {
        UploadTicket {
            epoch: self.epoch,
            target,
        }
    }

    /// Record a completed upload on the block its ticket addresses.
    ///
    /// Returns [`UploadOutcome::Stale`] without touching the paper if the
    /// session was reset after the ticket was issued. If the target block
    /// was removed in the meantime the ticket's index no longer resolves
    /// and the call fails with [`Error::IndexOutOfRange`] rather than
    /// attaching the image to whichever block now occupies that position.
    pub fn commit_image(
        &mut self,
        ticket: UploadTicket,
        path: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<UploadOutcome> {
        if ticket.epoch != self.epoch {
            log::warn!("dropping upload result from a discarded session");
            return Ok(UploadOutcome::Stale);
        }
        self.paper.add_image(ticket.target, path, caption)?;
        Ok(UploadOutcome::Attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn complete_metadata(wizard: &mut Wizard) {
        let paper = wizard.paper_mut();
        paper.title = "A Title".to_string();
        paper.authors = vec!["A. Author".to_string()];
        paper.abstract_text = "An abstract.".to_string();
    }

    #[test]
    fn test_next_blocked_until_metadata_complete() {
        let mut wizard = Wizard::new();
        assert!(matches!(wizard.next(), Err(Error::StepIncomplete(_))));
        assert_eq!(wizard.step(), Step::Metadata);

        complete_metadata(&mut wizard);
        assert_eq!(wizard.next().unwrap(), Step::Sections);
    }

    #[test]
    fn test_forward_and_back_navigation() {
        let mut wizard = Wizard::new();
        complete_metadata(&mut wizard);

        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), Step::References);

        assert_eq!(wizard.previous(), Step::Sections);
        assert_eq!(wizard.previous(), Step::Metadata);
        // Saturates at the first step.
        assert_eq!(wizard.previous(), Step::Metadata);
    }

    #[test]
    fn test_generate_is_terminal() {
        let mut wizard = Wizard::new();
        complete_metadata(&mut wizard);
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), Step::Generate);
        assert_eq!(wizard.next().unwrap(), Step::Generate);
    }

    #[test]
    fn test_progress_percent() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.progress_percent(), 25);
        complete_metadata(&mut wizard);
        wizard.next().unwrap();
        assert_eq!(wizard.progress_percent(), 50);
    }

    #[test]
    fn test_commit_image_attaches() {
        let mut wizard = Wizard::new();
        wizard.paper_mut().add_section();

        let ticket = wizard.upload_ticket(Target::Section(0));
        let outcome = wizard
            .commit_image(ticket, "uploads/fig.png", "A figure")
            .unwrap();
        assert_eq!(outcome, UploadOutcome::Attached);
        assert_eq!(wizard.paper().sections[0].body.images.len(), 1);
    }

    #[test]
    fn test_commit_image_after_reset_is_dropped() {
        let mut wizard = Wizard::new();
        wizard.paper_mut().add_section();
        let ticket = wizard.upload_ticket(Target::Section(0));

        wizard.reset();
        wizard.paper_mut().add_section();

        let outcome = wizard.commit_image(ticket, "uploads/fig.png", "").unwrap();
        assert_eq!(outcome, UploadOutcome::Stale);
        assert!(wizard.paper().sections[0].body.images.is_empty());
    }

    #[test]
    fn test_commit_image_rejects_removed_target() {
        let mut wizard = Wizard::new();
        wizard.paper_mut().add_section();
        let ticket = wizard.upload_ticket(Target::Section(0));

        wizard.paper_mut().remove_section(0).unwrap();
        assert!(matches!(
            wizard.commit_image(ticket, "uploads/fig.png", ""),
            Err(Error::IndexOutOfRange { .. })
        ));
    }
}
