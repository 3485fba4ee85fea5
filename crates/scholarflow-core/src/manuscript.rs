//! Manuscript domain model
//!
//! A manuscript is a submission moving through pre-screening, executive
//! editor review and peer reviewer assignment. Its `status` decides which
//! worklist group it lands in and which action the views offer for it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::people::EditorId;

/// Identifier of a manuscript (e.g. `MS-2024-001`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManuscriptId(pub String);

impl ManuscriptId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ManuscriptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ManuscriptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Workflow status of a manuscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManuscriptStatus {
    /// Passed pre-screening, waiting for editor assignment
    Ready,
    /// Failed a pre-screening gate and was returned to the author
    SentBack,
    /// Waiting on the executive editor's decision
    PendingReview,
    /// Accepted by the executive editor, waiting for reviewers
    ReadyForPeerReview,
    /// Out with peer reviewers
    InReview,
}

impl ManuscriptStatus {
    /// All statuses in workflow order
    pub const ALL: [ManuscriptStatus; 5] = [
        ManuscriptStatus::Ready,
        ManuscriptStatus::SentBack,
        ManuscriptStatus::PendingReview,
        ManuscriptStatus::ReadyForPeerReview,
        ManuscriptStatus::InReview,
    ];

    /// Wire name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ManuscriptStatus::Ready => "ready",
            ManuscriptStatus::SentBack => "sent-back",
            ManuscriptStatus::PendingReview => "pending-review",
            ManuscriptStatus::ReadyForPeerReview => "ready-for-peer-review",
            ManuscriptStatus::InReview => "in-review",
        }
    }

    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ManuscriptStatus::Ready => "Ready to Progress",
            ManuscriptStatus::SentBack => "Sent Back to Author",
            ManuscriptStatus::PendingReview => "Pending Review",
            ManuscriptStatus::ReadyForPeerReview => "Ready for Peer Review",
            ManuscriptStatus::InReview => "In Review",
        }
    }
}

impl std::fmt::Display for ManuscriptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single pre-screening check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Fail => "fail",
        }
    }
}

/// A pre-screening gate result (plagiarism, scope, formatting, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreScreeningCheck {
    /// Check name, unique within a manuscript
    pub name: String,
    pub status: CheckStatus,
    /// Score in 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl PreScreeningCheck {
    pub fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
            score: None,
            details: None,
        }
    }

    pub fn pass(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Pass)
    }

    pub fn warning(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Warning)
    }

    pub fn fail(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Fail)
    }

    pub fn with_score(mut self, score: u8) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

/// Why a manuscript was returned to its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentBackNotice {
    /// Name of the failed gate (e.g. "Plagiarism Check")
    pub reason: String,
    pub details: String,
}

impl SentBackNotice {
    pub fn new(reason: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            details: details.into(),
        }
    }
}

/// Decision urgency for the executive editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn name(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A submitted manuscript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manuscript {
    pub id: ManuscriptId,
    pub title: String,
    /// Ordered author list, never empty
    pub authors: Vec<String>,
    pub submission_date: NaiveDate,
    pub status: ManuscriptStatus,
    pub journal: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub checks: Vec<PreScreeningCheck>,
    /// Present iff `status == SentBack`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_back: Option<SentBackNotice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_ee: Option<EditorId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_aes: Vec<EditorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_deadline: Option<NaiveDate>,
    /// Best executive editor match score from the matching service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_match_confidence: Option<u8>,
    /// Whether editors are pre-selected on the assignment screen.
    /// Derived from `editor_match_confidence` when the sample data is built.
    #[serde(default)]
    pub auto_assignment: bool,
}

impl Manuscript {
    /// Create a manuscript with status `Ready` and no checks
    pub fn new(
        id: impl Into<ManuscriptId>,
        title: impl Into<String>,
        authors: Vec<String>,
        submission_date: NaiveDate,
        journal: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors,
            submission_date,
            status: ManuscriptStatus::Ready,
            journal: journal.into(),
            abstract_text: String::new(),
            keywords: Vec::new(),
            checks: Vec::new(),
            sent_back: None,
            assigned_ee: None,
            assigned_aes: Vec::new(),
            urgency: None,
            decision_deadline: None,
            editor_match_confidence: None,
            auto_assignment: false,
        }
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_check(mut self, check: PreScreeningCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_checks(mut self, checks: Vec<PreScreeningCheck>) -> Self {
        self.checks = checks;
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency, deadline: NaiveDate) -> Self {
        self.urgency = Some(urgency);
        self.decision_deadline = Some(deadline);
        self
    }

    pub fn with_match_confidence(mut self, confidence: u8) -> Self {
        self.editor_match_confidence = Some(confidence);
        self
    }

    /// Mark the manuscript as returned to its author
    pub fn sent_back(mut self, reason: impl Into<String>, details: impl Into<String>) -> Self {
        self.status = ManuscriptStatus::SentBack;
        self.sent_back = Some(SentBackNotice::new(reason, details));
        self
    }

    /// Copy with a different status.
    ///
    /// Moving to any status other than `SentBack` drops the rejection notice.
    /// Use [`Manuscript::sent_back`] to return a manuscript to its author.
    pub fn with_status(mut self, status: ManuscriptStatus) -> Self {
        self.status = status;
        if status != ManuscriptStatus::SentBack {
            self.sent_back = None;
        }
        self
    }

    /// First author, the addressee of author correspondence
    pub fn corresponding_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or_default()
    }

    /// Urgency shown in the EE workspace; missing urgency displays as low
    pub fn display_urgency(&self) -> Urgency {
        self.urgency.unwrap_or_default()
    }

    /// "A, B +3" style author preview
    pub fn author_preview(&self, shown: usize) -> String {
        let mut preview = self
            .authors
            .iter()
            .take(shown)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if self.authors.len() > shown {
            preview.push_str(&format!(" +{}", self.authors.len() - shown));
        }
        preview
    }

    pub fn keyword_preview(&self, shown: usize) -> String {
        self.keywords
            .iter()
            .take(shown)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Manuscript {
        Manuscript::new(
            "MS-1",
            "A title",
            vec!["Ada".into(), "Grace".into(), "Alan".into(), "Edsger".into()],
            date(2024, 1, 15),
            "Journal of Tests",
        )
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&ManuscriptStatus::ReadyForPeerReview).unwrap();
        assert_eq!(json, "\"ready-for-peer-review\"");
        let parsed: ManuscriptStatus = serde_json::from_str("\"sent-back\"").unwrap();
        assert_eq!(parsed, ManuscriptStatus::SentBack);
        for status in ManuscriptStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_with_status_clears_notice() {
        let ms = sample().sent_back("Plagiarism Check", "42% overlap");
        assert_eq!(ms.status, ManuscriptStatus::SentBack);
        assert!(ms.sent_back.is_some());

        let promoted = ms.with_status(ManuscriptStatus::PendingReview);
        assert_eq!(promoted.status, ManuscriptStatus::PendingReview);
        assert!(promoted.sent_back.is_none());
    }

    #[test]
    fn test_author_preview() {
        let ms = sample();
        assert_eq!(ms.author_preview(2), "Ada, Grace +2");
        assert_eq!(ms.author_preview(4), "Ada, Grace, Alan, Edsger");
        assert_eq!(ms.corresponding_author(), "Ada");
    }

    #[test]
    fn test_missing_urgency_displays_low() {
        let ms = sample();
        assert_eq!(ms.display_urgency(), Urgency::Low);
        let ms = ms.with_urgency(Urgency::High, date(2024, 2, 1));
        assert_eq!(ms.display_urgency(), Urgency::High);
    }

    #[test]
    fn test_abstract_serializes_as_abstract() {
        let ms = sample().with_abstract("Short abstract");
        let value = serde_json::to_value(&ms).unwrap();
        assert_eq!(value["abstract"], "Short abstract");
        assert!(value.get("sent_back").is_none());
    }
}
