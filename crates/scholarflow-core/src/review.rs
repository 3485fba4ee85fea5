//! Executive editor review view state

use crate::config::DisplayConfig;
use crate::error::{Result, ViewError};
use crate::evaluation::SummaryLength;
use crate::manuscript::{Manuscript, ManuscriptId};
use crate::navigation::Route;
use crate::notice::{Notice, Outcome};

/// Comment capture before a rejection is confirmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectDialog {
    pub comments: String,
}

impl RejectDialog {
    pub fn has_comments(&self) -> bool {
        !self.comments.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptReview {
    pub manuscript_id: ManuscriptId,
    summary: SummaryLength,
    show_evaluation: bool,
    reject_dialog: Option<RejectDialog>,
}

impl ManuscriptReview {
    pub fn new(manuscript: &Manuscript, display: &DisplayConfig) -> Self {
        let summary = SummaryLength::from_key(&display.default_summary).unwrap_or_default();
        Self {
            manuscript_id: manuscript.id.clone(),
            summary,
            show_evaluation: false,
            reject_dialog: None,
        }
    }

    /// The one visible summary variant
    pub fn summary(&self) -> SummaryLength {
        self.summary
    }

    pub fn select_summary(&mut self, length: SummaryLength) {
        self.summary = length;
    }

    pub fn next_summary(&mut self) {
        self.summary = self.summary.next();
    }

    pub fn prev_summary(&mut self) {
        self.summary = self.summary.prev();
    }

    pub fn evaluation_open(&self) -> bool {
        self.show_evaluation
    }

    pub fn open_evaluation(&mut self) {
        self.show_evaluation = true;
    }

    pub fn close_evaluation(&mut self) {
        self.show_evaluation = false;
    }

    pub fn reject_dialog(&self) -> Option<&RejectDialog> {
        self.reject_dialog.as_ref()
    }

    pub fn open_reject(&mut self) {
        self.reject_dialog = Some(RejectDialog::default());
    }

    /// Discard the dialog and any captured comments
    pub fn cancel_reject(&mut self) {
        self.reject_dialog = None;
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) -> Result<()> {
        let dialog = self
            .reject_dialog
            .as_mut()
            .ok_or(ViewError::NoDialog("reject"))?;
        dialog.comments = comments.into();
        Ok(())
    }

    /// Accept for peer review, then go to the post-EE worklist
    pub fn accept(&self) -> Outcome {
        tracing::info!(manuscript = %self.manuscript_id, "Accepted for peer review");
        Outcome::notify_then(
            Notice::success(
                "Manuscript accepted for peer review",
                "The manuscript has been sent to the Editorial Office for reviewer assignment.",
            ),
            Route::PostEeWorklist,
        )
    }

    /// Confirm the open reject dialog. Blank comments are refused.
    pub fn confirm_reject(&mut self) -> Result<Outcome> {
        let dialog = self
            .reject_dialog
            .as_ref()
            .ok_or(ViewError::NoDialog("reject"))?;
        if !dialog.has_comments() {
            return Err(ViewError::MissingComments.into());
        }
        tracing::info!(
            manuscript = %self.manuscript_id,
            comment_len = dialog.comments.trim().len(),
            "Returned to author"
        );
        self.reject_dialog = None;
        Ok(Outcome::notify_then(
            Notice::info(
                "Manuscript returned to author",
                "Comments have been sent to the Editorial Office.",
            ),
            Route::PostEeWorklist,
        ))
    }
}
