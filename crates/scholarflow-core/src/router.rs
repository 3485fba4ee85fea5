//! Route resolution into per-view state
//!
//! Every navigation builds a fresh [`ViewState`] from the read-only sample
//! data. Selections made in a previous view are not carried over.

use crate::assignment::EditorAssignment;
use crate::config::ScholarflowConfig;
use crate::manuscript::Manuscript;
use crate::navigation::{Navigation, Route};
use crate::review::ManuscriptReview;
use crate::reviewers::ReviewerAssignment;
use crate::sample::SampleData;
use crate::worklist::post_ee_projection;

/// State of the view currently on screen
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Worklist,
    EditorAssignment(EditorAssignment),
    EeWorkspace,
    ManuscriptReview(ManuscriptReview),
    /// Derived copies of the first manuscripts with post-review statuses
    PostEeWorklist(Vec<Manuscript>),
    ReviewerAssignment(ReviewerAssignment),
    NotFound(String),
}

impl ViewState {
    pub fn route(&self) -> Route {
        match self {
            ViewState::Worklist => Route::Worklist,
            ViewState::EditorAssignment(_) => Route::EditorAssignment,
            ViewState::EeWorkspace => Route::EeWorkspace,
            ViewState::ManuscriptReview(_) => Route::ManuscriptReview,
            ViewState::PostEeWorklist(_) => Route::PostEeWorklist,
            ViewState::ReviewerAssignment(_) => Route::ReviewerAssignment,
            ViewState::NotFound(path) => Route::NotFound(path.clone()),
        }
    }
}

/// Builds view state for navigations against one data set
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    data: &'a SampleData,
    config: &'a ScholarflowConfig,
}

impl<'a> Router<'a> {
    pub fn new(data: &'a SampleData, config: &'a ScholarflowConfig) -> Self {
        Self { data, config }
    }

    /// Resolve `navigation`. Views that need a manuscript read the id from
    /// the context, or the configured default; an unknown id falls back to
    /// the first manuscript of the relevant collection.
    pub fn open(&self, navigation: &Navigation) -> ViewState {
        let id = navigation
            .context
            .manuscript_id_or(&self.config.workflow.default_manuscript_id);
        tracing::debug!(route = %navigation.route, manuscript = %id, "Opening view");

        let state = match &navigation.route {
            Route::Worklist => Some(ViewState::Worklist),
            Route::EeWorkspace => Some(ViewState::EeWorkspace),
            Route::PostEeWorklist => Some(ViewState::PostEeWorklist(post_ee_projection(
                &self.data.manuscripts,
            ))),
            Route::EditorAssignment => self
                .data
                .manuscript_or_first(&id)
                .map(|ms| ViewState::EditorAssignment(EditorAssignment::new(ms, self.data))),
            Route::ManuscriptReview => self.data.ee_manuscript_or_first(&id).map(|ms| {
                ViewState::ManuscriptReview(ManuscriptReview::new(ms, &self.config.display))
            }),
            Route::ReviewerAssignment => self.data.manuscript_or_first(&id).map(|ms| {
                ViewState::ReviewerAssignment(ReviewerAssignment::new(
                    ms,
                    &self.data.reviewers,
                    &self.config.workflow,
                ))
            }),
            Route::NotFound(path) => {
                tracing::warn!("No route for {}", path);
                Some(ViewState::NotFound(path.clone()))
            }
        };

        state.unwrap_or_else(|| {
            tracing::warn!("No manuscripts available for {}", navigation.route);
            ViewState::NotFound(navigation.route.path().to_string())
        })
    }

    /// Resolve a path with no navigation context
    pub fn open_path(&self, path: &str) -> ViewState {
        self.open(&Navigation::to(Route::from_path(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manuscript::ManuscriptId;
    use crate::sample::sample_data;

    #[test]
    fn test_context_picks_manuscript() {
        let config = ScholarflowConfig::default();
        let router = Router::new(sample_data(), &config);
        let nav = Navigation::with_manuscript(Route::EditorAssignment, "MS-2024-004".into());
        match router.open(&nav) {
            ViewState::EditorAssignment(state) => {
                assert_eq!(state.manuscript_id, ManuscriptId::new("MS-2024-004"));
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_sidebar_uses_default_manuscript() {
        let config = ScholarflowConfig::default();
        let router = Router::new(sample_data(), &config);
        match router.open_path("/manuscript-review") {
            ViewState::ManuscriptReview(state) => {
                assert_eq!(state.manuscript_id.as_str(), "MS-2024-001");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let config = ScholarflowConfig::default();
        let router = Router::new(sample_data(), &config);
        let nav = Navigation::with_manuscript(Route::ManuscriptReview, "MS-1999-999".into());
        match router.open(&nav) {
            ViewState::ManuscriptReview(state) => {
                assert_eq!(state.manuscript_id.as_str(), "MS-2024-001");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_not_found_and_route_round_trip() {
        let config = ScholarflowConfig::default();
        let router = Router::new(sample_data(), &config);
        let state = router.open_path("/nowhere");
        assert_eq!(state, ViewState::NotFound("/nowhere".to_string()));
        for route in Route::SIDEBAR {
            assert_eq!(router.open(&Navigation::to(route.clone())).route(), route);
        }
    }
}
