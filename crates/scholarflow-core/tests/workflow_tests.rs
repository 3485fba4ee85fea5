//! Workflow integration tests
//!
//! Routing, view actions and file loading through the public API.

use std::io::Write;

use rstest::rstest;
use scholarflow_core::screening::{status_badge, urgency_badge};
use scholarflow_core::{
    sample_data, EditorAssignment, EditorId, FixtureError, InviteStatus, ManuscriptId,
    ManuscriptStatus, Navigation, NoticeLevel, ReviewerAssignment, ReviewerId, Route, Router,
    SampleData, ScholarflowConfig, ScholarflowError, Tone, Urgency, ViewError, ViewState,
};
use tempfile::{NamedTempFile, TempDir};

fn router_with<'a>(config: &'a ScholarflowConfig) -> Router<'a> {
    Router::new(sample_data(), config)
}

// === Routing ===

#[rstest]
#[case("/", Route::Worklist)]
#[case("/editor-assignment", Route::EditorAssignment)]
#[case("/ee-workspace", Route::EeWorkspace)]
#[case("/manuscript-review", Route::ManuscriptReview)]
#[case("/post-ee-worklist", Route::PostEeWorklist)]
#[case("/peer-reviewer-assignment", Route::ReviewerAssignment)]
#[case("/reports", Route::NotFound("/reports".to_string()))]
fn test_paths_open_matching_view(#[case] path: &str, #[case] expected: Route) {
    let config = ScholarflowConfig::default();
    assert_eq!(router_with(&config).open_path(path).route(), expected);
}

#[rstest]
#[case(Route::EditorAssignment, Some(Route::Worklist))]
#[case(Route::ManuscriptReview, Some(Route::EeWorkspace))]
#[case(Route::ReviewerAssignment, Some(Route::PostEeWorklist))]
#[case(Route::Worklist, None)]
fn test_back_targets(#[case] route: Route, #[case] back: Option<Route>) {
    assert_eq!(route.back(), back);
}

#[rstest]
#[case(ManuscriptStatus::Ready, "Ready to Progress", Tone::Success)]
#[case(ManuscriptStatus::SentBack, "Sent Back to Author", Tone::Destructive)]
#[case(ManuscriptStatus::PendingReview, "Pending Review", Tone::Warning)]
#[case(ManuscriptStatus::ReadyForPeerReview, "Ready for Peer Review", Tone::Accent)]
#[case(ManuscriptStatus::InReview, "In Review", Tone::Primary)]
fn test_status_badges(#[case] status: ManuscriptStatus, #[case] label: &str, #[case] tone: Tone) {
    let badge = status_badge(status);
    assert_eq!(badge.label, label);
    assert_eq!(badge.tone, tone);
}

#[rstest]
#[case(None, "Low", false)]
#[case(Some(Urgency::Low), "Low", false)]
#[case(Some(Urgency::Medium), "Medium", false)]
#[case(Some(Urgency::High), "High", true)]
fn test_urgency_badges(#[case] urgency: Option<Urgency>, #[case] label: &str, #[case] alert: bool) {
    let badge = urgency_badge(urgency);
    assert_eq!(badge.label, label);
    assert_eq!(badge.alert, alert);
}

// === Editor assignment ===

#[rstest]
#[case("MS-2024-001", true)]
#[case("MS-2024-002", false)]
#[case("MS-2024-004", false)]
#[case("MS-2024-006", false)]
fn test_preselection_only_for_eligible(#[case] id: &str, #[case] preselected: bool) {
    let config = ScholarflowConfig::default();
    let nav = Navigation::with_manuscript(Route::EditorAssignment, ManuscriptId::new(id));
    let ViewState::EditorAssignment(state) = router_with(&config).open(&nav) else {
        panic!("expected editor assignment");
    };
    assert_eq!(state.can_confirm(), preselected);
    assert_eq!(state.selected_executive().is_some(), preselected);
}

#[test]
fn test_lower_threshold_widens_auto_assignment() {
    let mut config = ScholarflowConfig::default();
    config.workflow.auto_assign_threshold = 80;
    let data = SampleData::builtin(&config);
    let ms = data
        .manuscript_or_first(&ManuscriptId::new("MS-2024-002"))
        .unwrap();
    let state = EditorAssignment::new(ms, &data);
    assert!(state.can_confirm());
}

#[test]
fn test_confirm_disabled_until_complete() {
    let data = sample_data();
    let ms = data
        .manuscript_or_first(&ManuscriptId::new("MS-2024-002"))
        .unwrap();
    let mut state = EditorAssignment::new(ms, data);

    assert!(matches!(
        state.confirm(),
        Err(ScholarflowError::View(ViewError::IncompleteAssignment))
    ));
    state.toggle_associate(EditorId::new("AE-004")).unwrap();
    assert!(!state.can_confirm());
    state.select_executive(EditorId::new("EE-002")).unwrap();
    assert!(state.can_confirm());

    let outcome = state.confirm().unwrap();
    assert_eq!(outcome.notice.unwrap().level, NoticeLevel::Success);
    assert_eq!(outcome.navigation.unwrap().route, Route::EeWorkspace);
}

// === Reviewer assignment ===

#[test]
fn test_invite_then_replace() {
    let config = ScholarflowConfig::default();
    let data = sample_data();
    let ms = &data.manuscripts[0];
    let mut state = ReviewerAssignment::new(ms, &data.reviewers, &config.workflow);

    let pending = data
        .reviewer_or_first(&ReviewerId::new("R-005"))
        .unwrap();
    state.open_invite(pending, ms, &config.workflow).unwrap();
    state.send_invite().unwrap();
    assert_eq!(
        state.slot(&pending.id).unwrap().invite_status,
        InviteStatus::Sent
    );
    assert_eq!(state.counts().invites_sent, 2);

    state.open_replace(pending).unwrap();
    state.confirm_replace().unwrap();
    let slot = state.slot(&pending.id).unwrap();
    assert!(!slot.selected);
    assert_eq!(slot.invite_status, InviteStatus::Sent);
    assert_eq!(pending.invite_status, InviteStatus::Pending);
}

#[test]
fn test_alternates_are_not_invitable() {
    let config = ScholarflowConfig::default();
    let data = sample_data();
    let ms = &data.manuscripts[0];
    let mut state = ReviewerAssignment::new(ms, &data.reviewers, &config.workflow);

    let alternate = data
        .reviewer_or_first(&ReviewerId::new("R-006"))
        .unwrap();
    assert!(state.toggle(&alternate.id));
    assert!(!state.slot(&alternate.id).unwrap().invite_offered());
    assert!(state.open_invite(alternate, ms, &config.workflow).is_err());
}

#[test]
fn test_declined_reviewer_can_be_reinvited() {
    let mut config = ScholarflowConfig::default();
    config.workflow.top_reviewer_count = 8;
    let data = sample_data();
    let ms = &data.manuscripts[0];
    let mut state = ReviewerAssignment::new(ms, &data.reviewers, &config.workflow);

    let declined = data
        .reviewer_or_first(&ReviewerId::new("R-007"))
        .unwrap();
    assert_eq!(declined.invite_status, InviteStatus::Declined);
    assert!(state.slot(&declined.id).unwrap().invite_offered());
    state.open_invite(declined, ms, &config.workflow).unwrap();
    state.send_invite().unwrap();
    assert_eq!(
        state.slot(&declined.id).unwrap().invite_status,
        InviteStatus::Sent
    );
}

#[test]
fn test_replace_refused_for_accepted_and_alternates() {
    let config = ScholarflowConfig::default();
    let data = sample_data();
    let ms = &data.manuscripts[0];
    let mut state = ReviewerAssignment::new(ms, &data.reviewers, &config.workflow);

    let accepted = data
        .reviewer_or_first(&ReviewerId::new("R-001"))
        .unwrap();
    assert!(state.open_replace(accepted).is_err());
    assert!(state.slot(&accepted.id).unwrap().selected);

    let alternate = data
        .reviewer_or_first(&ReviewerId::new("R-006"))
        .unwrap();
    state.toggle(&alternate.id);
    assert!(matches!(
        state.open_replace(alternate),
        Err(ScholarflowError::View(ViewError::ReplaceNotAllowed { .. }))
    ));
    assert!(state.replace_dialog().is_none());
}

// === File loading ===

#[test]
fn test_config_from_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[workflow]\nauto_assign_threshold = 85\ntop_reviewer_count = 3\n\n[display]\ndefault_summary = \"10min\""
    )
    .unwrap();

    let config = ScholarflowConfig::from_path(file.path()).unwrap();
    assert_eq!(config.workflow.auto_assign_threshold, 85);
    assert_eq!(config.workflow.top_reviewer_count, 3);
    assert_eq!(config.workflow.default_manuscript_id, "MS-2024-001");
    assert_eq!(config.display.default_summary, "10min");
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nscore_high_threshold = 70\nscore_medium_threshold = 80").unwrap();
    assert!(matches!(
        ScholarflowConfig::from_path(file.path()),
        Err(ScholarflowError::Config(_))
    ));
}

#[test]
fn test_sample_data_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");
    std::fs::write(&path, sample_data().to_json().unwrap()).unwrap();

    let loaded = SampleData::from_path(&path, &ScholarflowConfig::default()).unwrap();
    assert_eq!(&loaded, sample_data());
}

#[test]
fn test_sample_data_file_invariants_checked() {
    let mut data = sample_data().clone();
    data.manuscripts[0].authors.clear();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, data.to_json().unwrap()).unwrap();

    let err = SampleData::from_path(&path, &ScholarflowConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ScholarflowError::Fixture(FixtureError::NoAuthors(id)) if id == "MS-2024-001"
    ));
}

#[test]
fn test_missing_data_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = SampleData::from_path(dir.path().join("absent.json"), &ScholarflowConfig::default())
        .unwrap_err();
    assert!(matches!(err, ScholarflowError::Io(_)));
}
