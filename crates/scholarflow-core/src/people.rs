//! Editors and peer reviewers
//!
//! [`Editor`] covers both executive and associate editor candidates; the
//! role is decided by which sample collection the record lives in.

use serde::{Deserialize, Serialize};

/// Identifier of an editor (e.g. `EE-001`, `AE-003`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorId(pub String);

impl EditorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EditorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EditorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a peer reviewer (e.g. `R-001`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewerId(pub String);

impl ReviewerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReviewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReviewerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Executive or associate editor candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub id: EditorId,
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub expertise: Vec<String>,
    /// Match score against the manuscript, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_reason: Option<String>,
    /// Manuscripts currently handled
    pub workload: u32,
    /// Manuscripts handled historically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_handling: Option<u32>,
    #[serde(default)]
    pub auto_assigned: bool,
}

impl Editor {
    pub fn new(
        id: impl Into<EditorId>,
        name: impl Into<String>,
        email: impl Into<String>,
        affiliation: impl Into<String>,
        expertise: &[&str],
        workload: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            affiliation: affiliation.into(),
            expertise: expertise.iter().map(|e| e.to_string()).collect(),
            match_percentage: None,
            match_reason: None,
            workload,
            past_handling: None,
            auto_assigned: false,
        }
    }

    pub fn with_match(mut self, percentage: u8, reason: impl Into<String>) -> Self {
        self.match_percentage = Some(percentage);
        self.match_reason = Some(reason.into());
        self
    }

    pub fn with_history(mut self, handled: u32) -> Self {
        self.past_handling = Some(handled);
        self
    }

    pub fn auto_assigned(mut self) -> Self {
        self.auto_assigned = true;
        self
    }

    /// Initials shown in the workspace header ("Sarah Chen" -> "SC")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Progress of a review invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    /// Not yet invited
    #[default]
    Pending,
    /// Invitation email sent
    Sent,
    /// Reviewer agreed to review
    Accepted,
    /// Reviewer declined
    Declined,
}

impl InviteStatus {
    pub fn name(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "Pending",
            InviteStatus::Sent => "Invite Sent",
            InviteStatus::Accepted => "Accepted",
            InviteStatus::Declined => "Declined",
        }
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Peer reviewer candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: ReviewerId,
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub expertise: Vec<String>,
    /// Match score against the manuscript, 0-100
    pub match_percentage: u8,
    pub match_reason: String,
    pub workload: u32,
    pub past_reviews: u32,
    /// Free text, e.g. "18 days avg"
    pub average_review_speed: String,
    pub conflicts_checked: bool,
    #[serde(default)]
    pub invite_status: InviteStatus,
}

impl Reviewer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<ReviewerId>,
        name: impl Into<String>,
        email: impl Into<String>,
        affiliation: impl Into<String>,
        expertise: &[&str],
        match_percentage: u8,
        match_reason: impl Into<String>,
        workload: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            affiliation: affiliation.into(),
            expertise: expertise.iter().map(|e| e.to_string()).collect(),
            match_percentage,
            match_reason: match_reason.into(),
            workload,
            past_reviews: 0,
            average_review_speed: String::new(),
            conflicts_checked: true,
            invite_status: InviteStatus::Pending,
        }
    }

    pub fn with_history(mut self, past_reviews: u32, average_speed: impl Into<String>) -> Self {
        self.past_reviews = past_reviews;
        self.average_review_speed = average_speed.into();
        self
    }

    pub fn with_invite_status(mut self, status: InviteStatus) -> Self {
        self.invite_status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let editor = Editor::new("EE-1", "Sarah M. Chen", "s@x.org", "MIT", &[], 3);
        assert_eq!(editor.initials(), "SMC");
    }

    #[test]
    fn test_invite_status_default_and_wire_name() {
        assert_eq!(InviteStatus::default(), InviteStatus::Pending);
        let json = serde_json::to_string(&InviteStatus::Accepted).unwrap();
        assert_eq!(json, "\"accepted\"");
    }

    #[test]
    fn test_reviewer_missing_invite_status_is_pending() {
        let json = r#"{
            "id": "R-9", "name": "N", "email": "n@x.org", "affiliation": "A",
            "expertise": ["x"], "match_percentage": 80, "match_reason": "r",
            "workload": 1, "past_reviews": 2, "average_review_speed": "10 days",
            "conflicts_checked": true
        }"#;
        let reviewer: Reviewer = serde_json::from_str(json).unwrap();
        assert_eq!(reviewer.invite_status, InviteStatus::Pending);
        assert_eq!(reviewer.id.as_str(), "R-9");
    }
}
