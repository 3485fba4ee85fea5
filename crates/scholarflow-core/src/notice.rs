//! Notices and action outcomes
//!
//! A notice is a cosmetic acknowledgement of a local state change. Terminal
//! view actions return an [`Outcome`]: the notice is raised first, then the
//! navigation is applied.

use crate::navigation::{Navigation, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} - {}", self.title, self.description)
        }
    }
}

/// Result of a view action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub navigation: Option<Navigation>,
}

impl Outcome {
    /// Local change only: notice, no navigation
    pub fn notify(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            navigation: None,
        }
    }

    /// Notify, then navigate
    pub fn notify_then(notice: Notice, route: Route) -> Self {
        Self {
            notice: Some(notice),
            navigation: Some(Navigation::to(route)),
        }
    }

    /// Navigate without a notice
    pub fn navigate(navigation: Navigation) -> Self {
        Self {
            notice: None,
            navigation: Some(navigation),
        }
    }
}
