//! Peer reviewer assignment view state
//!
//! One [`ReviewerSlot`] per reviewer, keyed by id in candidate order. The
//! slot carries both selection membership and the invite status overlay;
//! the reviewer records in the sample data are never touched.

use indexmap::IndexMap;

use crate::config::WorkflowConfig;
use crate::email::{reviewer_invitation, EmailDraft};
use crate::error::{Result, ViewError};
use crate::manuscript::{Manuscript, ManuscriptId};
use crate::navigation::{Navigation, Route};
use crate::notice::{Notice, Outcome};
use crate::people::{InviteStatus, Reviewer, ReviewerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewerSlot {
    pub selected: bool,
    pub invite_status: InviteStatus,
    /// Member of the top recommended slice
    pub recommended: bool,
}

impl ReviewerSlot {
    /// Invite and Replace are offered on selected, recommended reviewers
    /// that have not accepted
    pub fn actions_offered(&self) -> bool {
        self.recommended && self.selected && self.invite_status != InviteStatus::Accepted
    }

    /// The Invite button is hidden while an invitation is out
    pub fn invite_offered(&self) -> bool {
        self.actions_offered() && self.invite_status != InviteStatus::Sent
    }
}

/// Invitation preview awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteDialog {
    pub reviewer_id: ReviewerId,
    pub reviewer_name: String,
    pub email: EmailDraft,
}

/// Reason capture awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceDialog {
    pub reviewer_id: ReviewerId,
    pub reviewer_name: String,
    pub reason: String,
}

/// Footer counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewerCounts {
    pub selected: usize,
    pub accepted: usize,
    pub invites_sent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerAssignment {
    pub manuscript_id: ManuscriptId,
    slots: IndexMap<ReviewerId, ReviewerSlot>,
    invite_dialog: Option<InviteDialog>,
    replace_dialog: Option<ReplaceDialog>,
}

impl ReviewerAssignment {
    /// The first `top_reviewer_count` candidates form the recommended set
    /// and start selected; the rest are alternates.
    pub fn new(manuscript: &Manuscript, reviewers: &[Reviewer], workflow: &WorkflowConfig) -> Self {
        let slots = reviewers
            .iter()
            .enumerate()
            .map(|(index, reviewer)| {
                let recommended = index < workflow.top_reviewer_count;
                (
                    reviewer.id.clone(),
                    ReviewerSlot {
                        selected: recommended,
                        invite_status: reviewer.invite_status,
                        recommended,
                    },
                )
            })
            .collect();
        Self {
            manuscript_id: manuscript.id.clone(),
            slots,
            invite_dialog: None,
            replace_dialog: None,
        }
    }

    pub fn slot(&self, id: &ReviewerId) -> Option<&ReviewerSlot> {
        self.slots.get(id)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&ReviewerId, &ReviewerSlot)> {
        self.slots.iter()
    }

    pub fn recommended_ids(&self) -> Vec<&ReviewerId> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.recommended)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn alternate_ids(&self) -> Vec<&ReviewerId> {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.recommended)
            .map(|(id, _)| id)
            .collect()
    }

    /// Selected ids in candidate order
    pub fn selected_ids(&self) -> Vec<&ReviewerId> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Flip selection membership. Returns the new state; unknown ids are
    /// ignored.
    pub fn toggle(&mut self, id: &ReviewerId) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) => {
                slot.selected = !slot.selected;
                slot.selected
            }
            None => false,
        }
    }

    pub fn counts(&self) -> ReviewerCounts {
        let slots = || self.slots.values();
        ReviewerCounts {
            selected: slots().filter(|s| s.selected).count(),
            accepted: slots()
                .filter(|s| s.invite_status == InviteStatus::Accepted)
                .count(),
            invites_sent: slots()
                .filter(|s| s.invite_status == InviteStatus::Sent)
                .count(),
        }
    }

    /// Shared guard for Invite and Replace; `refuse` builds the error for
    /// a reviewer the actions are not offered on
    fn check_actions(
        &self,
        id: &ReviewerId,
        refuse: impl Fn(&str) -> ViewError,
    ) -> std::result::Result<(), ViewError> {
        let slot = self
            .slots
            .get(id)
            .ok_or_else(|| ViewError::NotSelected(id.to_string()))?;
        if !slot.selected {
            return Err(ViewError::NotSelected(id.to_string()));
        }
        if !slot.recommended {
            return Err(refuse("not a recommended reviewer"));
        }
        if slot.invite_status == InviteStatus::Accepted {
            return Err(refuse("already accepted"));
        }
        Ok(())
    }

    fn check_invitable(&self, id: &ReviewerId) -> std::result::Result<(), ViewError> {
        self.check_actions(id, |reason| ViewError::InviteNotAllowed {
            id: id.to_string(),
            reason: reason.to_string(),
        })
    }

    pub fn invite_dialog(&self) -> Option<&InviteDialog> {
        self.invite_dialog.as_ref()
    }

    /// Compose the invitation preview for `reviewer`
    pub fn open_invite(
        &mut self,
        reviewer: &Reviewer,
        manuscript: &Manuscript,
        workflow: &WorkflowConfig,
    ) -> Result<&InviteDialog> {
        self.check_invitable(&reviewer.id)?;
        let dialog = self.invite_dialog.insert(InviteDialog {
            reviewer_id: reviewer.id.clone(),
            reviewer_name: reviewer.name.clone(),
            email: reviewer_invitation(reviewer, manuscript, workflow),
        });
        Ok(&*dialog)
    }

    pub fn cancel_invite(&mut self) {
        self.invite_dialog = None;
    }

    /// Send the previewed invitation: the reviewer's status becomes `sent`
    pub fn send_invite(&mut self) -> Result<Outcome> {
        let dialog = self
            .invite_dialog
            .take()
            .ok_or(ViewError::NoDialog("invite"))?;
        if let Some(slot) = self.slots.get_mut(&dialog.reviewer_id) {
            slot.invite_status = InviteStatus::Sent;
        }
        tracing::info!(
            manuscript = %self.manuscript_id,
            reviewer = %dialog.reviewer_id,
            "Invitation sent"
        );
        Ok(Outcome::notify(Notice::success(
            "Invitation sent",
            format!("Email sent to {}", dialog.reviewer_name),
        )))
    }

    pub fn replace_dialog(&self) -> Option<&ReplaceDialog> {
        self.replace_dialog.as_ref()
    }

    pub fn open_replace(&mut self, reviewer: &Reviewer) -> Result<()> {
        self.check_actions(&reviewer.id, |reason| ViewError::ReplaceNotAllowed {
            id: reviewer.id.to_string(),
            reason: reason.to_string(),
        })?;
        self.replace_dialog = Some(ReplaceDialog {
            reviewer_id: reviewer.id.clone(),
            reviewer_name: reviewer.name.clone(),
            reason: String::new(),
        });
        Ok(())
    }

    pub fn set_replace_reason(&mut self, reason: impl Into<String>) -> Result<()> {
        let dialog = self
            .replace_dialog
            .as_mut()
            .ok_or(ViewError::NoDialog("replace"))?;
        dialog.reason = reason.into();
        Ok(())
    }

    pub fn cancel_replace(&mut self) {
        self.replace_dialog = None;
    }

    /// Drop the reviewer from the selection. The candidate stays in the
    /// pool; the captured reason is discarded.
    pub fn confirm_replace(&mut self) -> Result<Outcome> {
        let dialog = self
            .replace_dialog
            .take()
            .ok_or(ViewError::NoDialog("replace"))?;
        if let Some(slot) = self.slots.get_mut(&dialog.reviewer_id) {
            slot.selected = false;
        }
        tracing::info!(
            manuscript = %self.manuscript_id,
            reviewer = %dialog.reviewer_id,
            has_reason = !dialog.reason.trim().is_empty(),
            "Reviewer replaced"
        );
        Ok(Outcome::notify(Notice::info(
            "Reviewer replaced",
            format!("{} has been removed from selection.", dialog.reviewer_name),
        )))
    }

    /// Finish and return to the editorial worklist. No check that anyone
    /// accepted.
    pub fn complete(&self) -> Outcome {
        tracing::info!(
            manuscript = %self.manuscript_id,
            selected = self.counts().selected,
            "Reviewer assignment completed"
        );
        Outcome::navigate(Navigation::to(Route::Worklist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScholarflowError;
    use crate::sample::sample_data;

    fn open() -> ReviewerAssignment {
        let data = sample_data();
        ReviewerAssignment::new(&data.manuscripts[0], &data.reviewers, &WorkflowConfig::default())
    }

    fn reviewer(id: &str) -> &'static Reviewer {
        sample_data().reviewer_or_first(&ReviewerId::new(id)).unwrap()
    }

    #[test]
    fn test_top_slice_starts_selected() {
        let state = open();
        assert_eq!(state.recommended_ids().len(), 5);
        assert_eq!(state.alternate_ids().len(), 3);
        assert_eq!(state.selected_ids(), state.recommended_ids());
    }

    #[test]
    fn test_initial_counts() {
        let counts = open().counts();
        assert_eq!(counts.selected, 5);
        assert_eq!(counts.accepted, 1);
        assert_eq!(counts.invites_sent, 1);
    }

    #[test]
    fn test_invite_pending_reviewer_becomes_sent() {
        let data = sample_data();
        let mut state = open();
        let garcia = reviewer("R-003");
        assert!(state.slot(&garcia.id).unwrap().invite_offered());

        let dialog = state
            .open_invite(garcia, &data.manuscripts[0], &WorkflowConfig::default())
            .unwrap();
        assert_eq!(dialog.email.to, garcia.email);

        let outcome = state.send_invite().unwrap();
        assert!(outcome.navigation.is_none());
        let slot = state.slot(&garcia.id).unwrap();
        assert_eq!(slot.invite_status, InviteStatus::Sent);
        assert!(!slot.invite_offered());
        assert!(slot.actions_offered());
        assert_eq!(garcia.invite_status, InviteStatus::Pending);
    }

    #[test]
    fn test_accepted_reviewer_cannot_be_invited() {
        let data = sample_data();
        let mut state = open();
        let accepted = reviewer("R-001");
        assert!(!state.slot(&accepted.id).unwrap().actions_offered());
        let err = state
            .open_invite(accepted, &data.manuscripts[0], &WorkflowConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ScholarflowError::View(ViewError::InviteNotAllowed { .. })
        ));
    }

    #[test]
    fn test_replace_deselects_without_touching_record() {
        let mut state = open();
        let target = reviewer("R-004");
        state.open_replace(target).unwrap();
        state.set_replace_reason("Conflict of interest").unwrap();
        let outcome = state.confirm_replace().unwrap();

        assert_eq!(outcome.notice.unwrap().title, "Reviewer replaced");
        let slot = state.slot(&target.id).unwrap();
        assert!(!slot.selected);
        assert!(slot.recommended);
        assert!(state.replace_dialog().is_none());
        assert_eq!(state.counts().selected, 4);
        assert_eq!(sample_data().reviewers.len(), 8);
    }

    #[test]
    fn test_accepted_reviewer_cannot_be_replaced() {
        let mut state = open();
        let accepted = reviewer("R-001");
        let err = state.open_replace(accepted).unwrap_err();
        assert!(matches!(
            err,
            ScholarflowError::View(ViewError::ReplaceNotAllowed { .. })
        ));
        assert!(state.replace_dialog().is_none());
        assert!(state.slot(&accepted.id).unwrap().selected);
    }

    #[test]
    fn test_alternate_cannot_be_replaced() {
        let mut state = open();
        let alternate = reviewer("R-006");
        assert!(state.toggle(&alternate.id));
        let err = state.open_replace(alternate).unwrap_err();
        assert!(matches!(
            err,
            ScholarflowError::View(ViewError::ReplaceNotAllowed { .. })
        ));
        assert!(state.slot(&alternate.id).unwrap().selected);
    }

    #[test]
    fn test_unselected_reviewer_cannot_be_replaced() {
        let mut state = open();
        let target = reviewer("R-004");
        state.toggle(&target.id);
        assert!(matches!(
            state.open_replace(target),
            Err(ScholarflowError::View(ViewError::NotSelected(_)))
        ));
    }

    #[test]
    fn test_send_without_dialog() {
        let mut state = open();
        assert!(matches!(
            state.send_invite(),
            Err(ScholarflowError::View(ViewError::NoDialog("invite")))
        ));
    }

    #[test]
    fn test_complete_goes_to_worklist() {
        let outcome = open().complete();
        assert!(outcome.notice.is_none());
        assert_eq!(outcome.navigation.unwrap().route, Route::Worklist);
    }
}
