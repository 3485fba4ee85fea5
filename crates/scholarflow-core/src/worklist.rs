//! Worklist projections
//!
//! Grouping of the read-only manuscript collections for the editorial
//! worklist, the post-EE worklist and the EE workspace. Groups borrow from
//! the source slice and keep its order.

use indexmap::IndexMap;

use crate::manuscript::{Manuscript, ManuscriptStatus, Urgency};
use crate::navigation::{Navigation, Route};
use crate::screening::Tone;

/// Partition by status. Every manuscript lands in exactly one group; groups
/// appear in first-seen order and keep source order inside.
pub fn partition_by_status(
    manuscripts: &[Manuscript],
) -> IndexMap<ManuscriptStatus, Vec<&Manuscript>> {
    let mut groups: IndexMap<ManuscriptStatus, Vec<&Manuscript>> = IndexMap::new();
    for ms in manuscripts {
        groups.entry(ms.status).or_default().push(ms);
    }
    groups
}

/// Group by journal name, first-seen journal order, source order inside
pub fn group_by_journal(manuscripts: &[Manuscript]) -> IndexMap<&str, Vec<&Manuscript>> {
    let mut groups: IndexMap<&str, Vec<&Manuscript>> = IndexMap::new();
    for ms in manuscripts {
        groups.entry(ms.journal.as_str()).or_default().push(ms);
    }
    groups
}

/// The one action a worklist row offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Open editor assignment
    AssignEditors,
    /// Open peer reviewer assignment
    AssignReviewers,
    /// Open the EE review screen
    Review,
    None,
}

impl PrimaryAction {
    /// Action for a worklist row. `show_assign` is off for sections whose
    /// rows must not offer editor assignment.
    pub fn for_worklist(manuscript: &Manuscript, show_assign: bool) -> Self {
        match manuscript.status {
            ManuscriptStatus::Ready if show_assign => PrimaryAction::AssignEditors,
            ManuscriptStatus::ReadyForPeerReview => PrimaryAction::AssignReviewers,
            _ => PrimaryAction::None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            PrimaryAction::AssignEditors => Some("Assign Executive & Associate Editors"),
            PrimaryAction::AssignReviewers => Some("Assign Peer Reviewers"),
            PrimaryAction::Review => Some("Review"),
            PrimaryAction::None => None,
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            PrimaryAction::AssignEditors => Some(Route::EditorAssignment),
            PrimaryAction::AssignReviewers => Some(Route::ReviewerAssignment),
            PrimaryAction::Review => Some(Route::ManuscriptReview),
            PrimaryAction::None => None,
        }
    }

    /// Navigation carrying the manuscript's id
    pub fn navigation(&self, manuscript: &Manuscript) -> Option<Navigation> {
        self.route()
            .map(|route| Navigation::with_manuscript(route, manuscript.id.clone()))
    }
}

/// A titled group of rows on a worklist screen
#[derive(Debug, Clone)]
pub struct WorklistSection<'a> {
    pub title: &'static str,
    pub tone: Tone,
    pub manuscripts: Vec<&'a Manuscript>,
    pub show_assign: bool,
}

impl<'a> WorklistSection<'a> {
    pub fn action_for(&self, manuscript: &Manuscript) -> PrimaryAction {
        PrimaryAction::for_worklist(manuscript, self.show_assign)
    }
}

/// Header counts of the editorial worklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorklistSummary {
    pub total: usize,
    pub ready: usize,
    pub sent_back: usize,
}

/// Editorial office worklist: ready vs sent back
#[derive(Debug, Clone)]
pub struct EditorialWorklist<'a> {
    pub ready: Vec<&'a Manuscript>,
    pub sent_back: Vec<&'a Manuscript>,
    /// Statuses this screen has no section for
    pub other: Vec<&'a Manuscript>,
}

impl<'a> EditorialWorklist<'a> {
    pub fn build(manuscripts: &'a [Manuscript]) -> Self {
        let mut worklist = Self {
            ready: Vec::new(),
            sent_back: Vec::new(),
            other: Vec::new(),
        };
        for ms in manuscripts {
            match ms.status {
                ManuscriptStatus::Ready => worklist.ready.push(ms),
                ManuscriptStatus::SentBack => worklist.sent_back.push(ms),
                _ => worklist.other.push(ms),
            }
        }
        worklist
    }

    pub fn summary(&self) -> WorklistSummary {
        WorklistSummary {
            total: self.ready.len() + self.sent_back.len() + self.other.len(),
            ready: self.ready.len(),
            sent_back: self.sent_back.len(),
        }
    }

    /// Sections in display order. The sent-back section is omitted when
    /// empty; the ready section is always shown.
    pub fn sections(&self) -> Vec<WorklistSection<'a>> {
        let mut sections = Vec::new();
        if !self.sent_back.is_empty() {
            sections.push(WorklistSection {
                title: "Sent Back to Author",
                tone: Tone::Destructive,
                manuscripts: self.sent_back.clone(),
                show_assign: false,
            });
        }
        sections.push(WorklistSection {
            title: "Ready to Progress",
            tone: Tone::Success,
            manuscripts: self.ready.clone(),
            show_assign: true,
        });
        sections
    }
}

/// Status overrides applied to the first manuscripts for the post-EE view
pub const POST_EE_STATUSES: [ManuscriptStatus; 6] = [
    ManuscriptStatus::ReadyForPeerReview,
    ManuscriptStatus::ReadyForPeerReview,
    ManuscriptStatus::PendingReview,
    ManuscriptStatus::ReadyForPeerReview,
    ManuscriptStatus::PendingReview,
    ManuscriptStatus::PendingReview,
];

/// Derived copies of the editorial manuscripts as they stand after EE
/// review. The source collection is untouched.
pub fn post_ee_projection(manuscripts: &[Manuscript]) -> Vec<Manuscript> {
    manuscripts
        .iter()
        .zip(POST_EE_STATUSES)
        .map(|(ms, status)| ms.clone().with_status(status))
        .collect()
}

/// Header counts of the post-EE worklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostEeSummary {
    pub total_active: usize,
    pub ready_for_reviewers: usize,
    pub pending_ee_review: usize,
    pub in_peer_review: usize,
}

/// Post-EE worklist: ready for peer review vs pending EE review
#[derive(Debug, Clone)]
pub struct PostEeWorklist<'a> {
    pub ready_for_peer_review: Vec<&'a Manuscript>,
    pub pending_review: Vec<&'a Manuscript>,
    pub other: Vec<&'a Manuscript>,
}

impl<'a> PostEeWorklist<'a> {
    /// Build from the projected collection (see [`post_ee_projection`])
    pub fn build(projected: &'a [Manuscript]) -> Self {
        let mut worklist = Self {
            ready_for_peer_review: Vec::new(),
            pending_review: Vec::new(),
            other: Vec::new(),
        };
        for ms in projected {
            match ms.status {
                ManuscriptStatus::ReadyForPeerReview => worklist.ready_for_peer_review.push(ms),
                ManuscriptStatus::PendingReview => worklist.pending_review.push(ms),
                _ => worklist.other.push(ms),
            }
        }
        worklist
    }

    pub fn summary(&self) -> PostEeSummary {
        PostEeSummary {
            total_active: self.ready_for_peer_review.len()
                + self.pending_review.len()
                + self.other.len(),
            ready_for_reviewers: self.ready_for_peer_review.len(),
            pending_ee_review: self.pending_review.len(),
            in_peer_review: self
                .other
                .iter()
                .filter(|m| m.status == ManuscriptStatus::InReview)
                .count(),
        }
    }

    /// Sections in display order; empty sections are omitted
    pub fn sections(&self) -> Vec<WorklistSection<'a>> {
        let mut sections = Vec::new();
        if !self.ready_for_peer_review.is_empty() {
            sections.push(WorklistSection {
                title: "Ready for Peer Reviewer Assignment",
                tone: Tone::Accent,
                manuscripts: self.ready_for_peer_review.clone(),
                show_assign: true,
            });
        }
        if !self.pending_review.is_empty() {
            sections.push(WorklistSection {
                title: "Pending Executive Editor Review",
                tone: Tone::Warning,
                manuscripts: self.pending_review.clone(),
                show_assign: false,
            });
        }
        sections
    }
}

/// Header counts of the EE workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EeWorkspaceSummary {
    pub total_assigned: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub active_journals: usize,
}

/// EE workspace: assigned manuscripts grouped by journal
#[derive(Debug, Clone)]
pub struct EeWorkspace<'a> {
    pub groups: IndexMap<&'a str, Vec<&'a Manuscript>>,
}

impl<'a> EeWorkspace<'a> {
    pub fn build(manuscripts: &'a [Manuscript]) -> Self {
        Self {
            groups: group_by_journal(manuscripts),
        }
    }

    pub fn summary(&self) -> EeWorkspaceSummary {
        let rows = || self.groups.values().flatten();
        EeWorkspaceSummary {
            total_assigned: rows().count(),
            high_priority: rows().filter(|m| m.urgency == Some(Urgency::High)).count(),
            medium_priority: rows()
                .filter(|m| m.urgency == Some(Urgency::Medium))
                .count(),
            active_journals: self.groups.len(),
        }
    }

    /// Rows in display order (journal by journal)
    pub fn rows(&self) -> Vec<&'a Manuscript> {
        self.groups.values().flatten().copied().collect()
    }
}
