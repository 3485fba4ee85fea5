//! ScholarFlow Core - Editorial manuscript workflow model
//!
//! This crate provides the model and view state behind the scholarflow
//! editorial workflow front end:
//!
//! - **Manuscript**: Submissions, pre-screening checks, sent-back notices and urgency
//! - **People**: Executive/associate editor candidates and peer reviewers
//! - **Evaluation**: Five-dimension AI evaluation, score bands and summaries
//! - **Screening**: Failed-gate derivation, status/urgency badges, stoplights
//! - **Sample**: The read-only sample data set every view reads from
//! - **Worklist**: Status partitions, journal grouping, summaries and row actions
//! - **Assignment/Review/Reviewers**: Per-view selection and dialog state
//! - **Router**: Route + navigation context to fresh view state
//! - **Config**: Workflow constants and display thresholds
//!
//! # Workflow
//!
//! ```text
//! Worklist → Editor Assignment → EE Workspace → Manuscript Review
//!     ↑                                               ↓
//!     └──── Reviewer Assignment ← Post-EE Worklist ←──┘
//! ```
//!
//! Nothing is persisted. Terminal actions return an [`Outcome`]: a notice
//! to show, then a navigation to apply.

pub mod assignment;
pub mod config;
pub mod email;
pub mod error;
pub mod evaluation;
pub mod manuscript;
pub mod navigation;
pub mod notice;
pub mod people;
pub mod review;
pub mod reviewers;
pub mod router;
pub mod sample;
pub mod screening;
pub mod worklist;

pub use assignment::{AssignmentBanner, EditorAssignment};
pub use config::{DisplayConfig, ScholarflowConfig, WorkflowConfig};
pub use email::EmailDraft;
pub use error::{ConfigError, FixtureError, Result, ScholarflowError, ViewError};
pub use evaluation::{
    AiEvaluation, AiSummaries, DimensionScore, EvaluationDimension, ScoreBand, SummaryLength,
};
pub use manuscript::{
    CheckStatus, Manuscript, ManuscriptId, ManuscriptStatus, PreScreeningCheck, SentBackNotice,
    Urgency,
};
pub use navigation::{Navigation, NavigationContext, Route};
pub use notice::{Notice, NoticeLevel, Outcome};
pub use people::{Editor, EditorId, InviteStatus, Reviewer, ReviewerId};
pub use review::{ManuscriptReview, RejectDialog};
pub use reviewers::{ReviewerAssignment, ReviewerCounts, ReviewerSlot};
pub use router::{Router, ViewState};
pub use sample::{sample_data, SampleData};
pub use screening::{Badge, Stoplight, Tone};
pub use worklist::{
    EditorialWorklist, EeWorkspace, PostEeWorklist, PrimaryAction, WorklistSection,
};

/// Returns the version of scholarflow-core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow_loop() {
        let config = ScholarflowConfig::default();
        let data = sample_data();
        let router = Router::new(data, &config);

        let worklist = EditorialWorklist::build(&data.manuscripts);
        let row = worklist.ready[0];
        let nav = PrimaryAction::for_worklist(row, true)
            .navigation(row)
            .unwrap();

        let ViewState::EditorAssignment(assignment) = router.open(&nav) else {
            panic!("expected editor assignment");
        };
        let outcome = assignment.confirm().unwrap();
        assert_eq!(router.open(&outcome.navigation.unwrap()), ViewState::EeWorkspace);

        let review_nav = Navigation::with_manuscript(Route::ManuscriptReview, row.id.clone());
        let ViewState::ManuscriptReview(review) = router.open(&review_nav) else {
            panic!("expected manuscript review");
        };
        let outcome = review.accept();
        let ViewState::PostEeWorklist(projected) = router.open(&outcome.navigation.unwrap()) else {
            panic!("expected post-EE worklist");
        };
        assert_eq!(projected[0].status, ManuscriptStatus::ReadyForPeerReview);
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
