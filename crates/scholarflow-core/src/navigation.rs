//! Routes and navigation context
//!
//! Views hand a manuscript identifier to the next view through
//! [`NavigationContext`]; it is never encoded in the path. A view opened
//! without context (sidebar, start-up) falls back to the configured default
//! manuscript.

use serde::{Deserialize, Serialize};

use crate::manuscript::ManuscriptId;

/// Navigable routes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/` editorial office worklist
    Worklist,
    /// `/editor-assignment`
    EditorAssignment,
    /// `/ee-workspace`
    EeWorkspace,
    /// `/manuscript-review`
    ManuscriptReview,
    /// `/post-ee-worklist`
    PostEeWorklist,
    /// `/peer-reviewer-assignment`
    ReviewerAssignment,
    /// Any other path
    NotFound(String),
}

impl Route {
    /// Routes listed in the sidebar, in order
    pub const SIDEBAR: [Route; 6] = [
        Route::Worklist,
        Route::EditorAssignment,
        Route::EeWorkspace,
        Route::ManuscriptReview,
        Route::PostEeWorklist,
        Route::ReviewerAssignment,
    ];

    /// Resolve a path; unknown paths map to [`Route::NotFound`]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => Route::Worklist,
            "/editor-assignment" => Route::EditorAssignment,
            "/ee-workspace" => Route::EeWorkspace,
            "/manuscript-review" => Route::ManuscriptReview,
            "/post-ee-worklist" => Route::PostEeWorklist,
            "/peer-reviewer-assignment" => Route::ReviewerAssignment,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Worklist => "/",
            Route::EditorAssignment => "/editor-assignment",
            Route::EeWorkspace => "/ee-workspace",
            Route::ManuscriptReview => "/manuscript-review",
            Route::PostEeWorklist => "/post-ee-worklist",
            Route::ReviewerAssignment => "/peer-reviewer-assignment",
            Route::NotFound(path) => path,
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Worklist => "Editorial Worklist",
            Route::EditorAssignment => "Editor Assignment",
            Route::EeWorkspace => "EE Workspace",
            Route::ManuscriptReview => "Manuscript Review",
            Route::PostEeWorklist => "Post-EE Worklist",
            Route::ReviewerAssignment => "Reviewer Assignment",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Where the view's back affordance leads
    pub fn back(&self) -> Option<Route> {
        match self {
            Route::EditorAssignment => Some(Route::Worklist),
            Route::ManuscriptReview => Some(Route::EeWorkspace),
            Route::ReviewerAssignment => Some(Route::PostEeWorklist),
            Route::NotFound(_) => Some(Route::Worklist),
            _ => None,
        }
    }

    /// Whether the view reads a manuscript from the navigation context
    pub fn takes_manuscript(&self) -> bool {
        matches!(
            self,
            Route::EditorAssignment | Route::ManuscriptReview | Route::ReviewerAssignment
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Transient state carried with a navigation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub manuscript_id: Option<ManuscriptId>,
}

impl NavigationContext {
    /// The carried manuscript id, or `default` when there is none
    pub fn manuscript_id_or(&self, default: &str) -> ManuscriptId {
        self.manuscript_id
            .clone()
            .unwrap_or_else(|| ManuscriptId::new(default))
    }
}

/// A navigation request: target route plus context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: Route,
    pub context: NavigationContext,
}

impl Navigation {
    /// Navigate without context
    pub fn to(route: Route) -> Self {
        Self {
            route,
            context: NavigationContext::default(),
        }
    }

    /// Navigate carrying a manuscript id
    pub fn with_manuscript(route: Route, id: ManuscriptId) -> Self {
        Self {
            route,
            context: NavigationContext {
                manuscript_id: Some(id),
            },
        }
    }
}
