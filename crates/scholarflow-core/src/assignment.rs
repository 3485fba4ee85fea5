//! Editor assignment view state
//!
//! One executive editor (radio) and any number of associate editors
//! (checkboxes). Selections live here, never in the sample data.

use indexmap::IndexSet;

use crate::error::{Result, ViewError};
use crate::manuscript::{Manuscript, ManuscriptId};
use crate::navigation::Route;
use crate::notice::{Notice, Outcome};
use crate::people::EditorId;
use crate::sample::SampleData;

/// Banner shown above the candidate lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentBanner {
    Automatic,
    Manual,
}

impl AssignmentBanner {
    pub fn title(&self) -> &'static str {
        match self {
            AssignmentBanner::Automatic => "Automatic Assignment",
            AssignmentBanner::Manual => "Manual Selection Required",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AssignmentBanner::Automatic => {
                "Editors were pre-selected from a high-confidence expertise match. \
                 Review the selection and confirm."
            }
            AssignmentBanner::Manual => {
                "No high-confidence match was found. Select one Executive Editor \
                 and at least one Associate Editor."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorAssignment {
    pub manuscript_id: ManuscriptId,
    auto_assignment: bool,
    executives: IndexSet<EditorId>,
    associates: IndexSet<EditorId>,
    selected_ee: Option<EditorId>,
    selected_aes: IndexSet<EditorId>,
}

impl EditorAssignment {
    /// Open the view for `manuscript`. Auto-assignment eligible manuscripts
    /// start with the first executive editor and every auto-assigned
    /// associate editor selected.
    pub fn new(manuscript: &Manuscript, data: &SampleData) -> Self {
        let mut state = Self {
            manuscript_id: manuscript.id.clone(),
            auto_assignment: manuscript.auto_assignment,
            executives: data.executive_editors.iter().map(|e| e.id.clone()).collect(),
            associates: data.associate_editors.iter().map(|e| e.id.clone()).collect(),
            selected_ee: None,
            selected_aes: IndexSet::new(),
        };

        if manuscript.auto_assignment {
            state.selected_ee = data.executive_editors.first().map(|e| e.id.clone());
            state.selected_aes = data
                .associate_editors
                .iter()
                .filter(|e| e.auto_assigned)
                .map(|e| e.id.clone())
                .collect();
            tracing::debug!(
                manuscript = %manuscript.id,
                aes = state.selected_aes.len(),
                "Pre-selected editors"
            );
        }

        state
    }

    pub fn banner(&self) -> AssignmentBanner {
        if self.auto_assignment {
            AssignmentBanner::Automatic
        } else {
            AssignmentBanner::Manual
        }
    }

    pub fn selected_executive(&self) -> Option<&EditorId> {
        self.selected_ee.as_ref()
    }

    pub fn selected_associates(&self) -> impl Iterator<Item = &EditorId> {
        self.selected_aes.iter()
    }

    pub fn is_executive_selected(&self, id: &EditorId) -> bool {
        self.selected_ee.as_ref() == Some(id)
    }

    pub fn is_associate_selected(&self, id: &EditorId) -> bool {
        self.selected_aes.contains(id)
    }

    /// Radio semantics: replaces any previous executive editor
    pub fn select_executive(&mut self, id: EditorId) -> Result<()> {
        if !self.executives.contains(&id) {
            return Err(ViewError::NotACandidate {
                id: id.to_string(),
                role: "executive editor",
            }
            .into());
        }
        self.selected_ee = Some(id);
        Ok(())
    }

    /// Checkbox semantics. Returns whether the editor is now selected.
    pub fn toggle_associate(&mut self, id: EditorId) -> Result<bool> {
        if !self.associates.contains(&id) {
            return Err(ViewError::NotACandidate {
                id: id.to_string(),
                role: "associate editor",
            }
            .into());
        }
        if self.selected_aes.shift_remove(&id) {
            Ok(false)
        } else {
            self.selected_aes.insert(id);
            Ok(true)
        }
    }

    /// (executive editors, associate editors) selected, for the footer
    pub fn selection_counts(&self) -> (usize, usize) {
        (usize::from(self.selected_ee.is_some()), self.selected_aes.len())
    }

    /// Exactly one executive editor and at least one associate editor
    pub fn can_confirm(&self) -> bool {
        self.selected_ee.is_some() && !self.selected_aes.is_empty()
    }

    /// Confirm the assignment. Nothing is persisted; the outcome reports
    /// success and returns to the EE workspace.
    pub fn confirm(&self) -> Result<Outcome> {
        if !self.can_confirm() {
            return Err(ViewError::IncompleteAssignment.into());
        }
        tracing::info!(
            manuscript = %self.manuscript_id,
            ee = ?self.selected_ee,
            aes = self.selected_aes.len(),
            "Editors assigned"
        );
        Ok(Outcome::notify_then(
            Notice::success(
                "Editors assigned successfully",
                format!("{} has been assigned to the selected editors.", self.manuscript_id),
            ),
            Route::EeWorkspace,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScholarflowError;
    use crate::sample::sample_data;

    fn open(id: &str) -> EditorAssignment {
        let data = sample_data();
        let ms = data.manuscript_or_first(&ManuscriptId::new(id)).unwrap();
        EditorAssignment::new(ms, data)
    }

    #[test]
    fn test_auto_assignment_preselects() {
        let state = open("MS-2024-001");
        assert_eq!(state.banner(), AssignmentBanner::Automatic);
        assert_eq!(state.selected_executive(), Some(&EditorId::new("EE-001")));
        let aes: Vec<_> = state.selected_associates().map(|e| e.as_str()).collect();
        assert_eq!(aes, ["AE-001", "AE-002"]);
        assert!(state.can_confirm());
    }

    #[test]
    fn test_manual_selection_starts_empty() {
        let state = open("MS-2024-002");
        assert_eq!(state.banner(), AssignmentBanner::Manual);
        assert_eq!(state.selection_counts(), (0, 0));
        assert!(!state.can_confirm());
    }

    #[test]
    fn test_confirm_toggles_with_selection() {
        let mut state = open("MS-2024-004");
        state.select_executive(EditorId::new("EE-002")).unwrap();
        assert!(!state.can_confirm());

        assert!(state.toggle_associate(EditorId::new("AE-003")).unwrap());
        assert!(state.can_confirm());

        assert!(!state.toggle_associate(EditorId::new("AE-003")).unwrap());
        assert!(!state.can_confirm());
    }

    #[test]
    fn test_executive_is_radio() {
        let mut state = open("MS-2024-004");
        state.select_executive(EditorId::new("EE-001")).unwrap();
        state.select_executive(EditorId::new("EE-003")).unwrap();
        assert!(state.is_executive_selected(&EditorId::new("EE-003")));
        assert!(!state.is_executive_selected(&EditorId::new("EE-001")));
        assert_eq!(state.selection_counts().0, 1);
    }

    #[test]
    fn test_only_candidates_can_be_selected() {
        let mut state = open("MS-2024-004");
        // An associate editor is not an executive candidate
        assert!(matches!(
            state.select_executive(EditorId::new("AE-001")),
            Err(ScholarflowError::View(ViewError::NotACandidate { .. }))
        ));
        assert!(state.select_executive(EditorId::new("EE-999")).is_err());
        assert!(state.toggle_associate(EditorId::new("EE-001")).is_err());
        assert_eq!(state.selection_counts(), (0, 0));

        state.toggle_associate(EditorId::new("AE-001")).unwrap();
        assert!(!state.can_confirm());
    }

    #[test]
    fn test_confirm_outcome() {
        let outcome = open("MS-2024-001").confirm().unwrap();
        let notice = outcome.notice.unwrap();
        assert_eq!(notice.title, "Editors assigned successfully");
        assert_eq!(outcome.navigation.unwrap().route, Route::EeWorkspace);
    }

    #[test]
    fn test_incomplete_confirm_is_an_error() {
        let err = open("MS-2024-002").confirm().unwrap_err();
        assert!(matches!(
            err,
            ScholarflowError::View(ViewError::IncompleteAssignment)
        ));
    }
}
