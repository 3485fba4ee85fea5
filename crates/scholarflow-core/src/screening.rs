//! Pre-screening derivation and badges
//!
//! Pure functions from a manuscript's checks and status to what the views
//! show: the failed gate, the status badge, stoplight indicators and the
//! urgency badge.

use crate::manuscript::{CheckStatus, Manuscript, ManuscriptStatus, PreScreeningCheck, Urgency};

/// Semantic colour of a badge or indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Destructive,
    Accent,
    Primary,
    Muted,
}

/// Label plus tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
    /// Draw an alert marker next to the label
    pub alert: bool,
}

/// Badge for a manuscript status
pub fn status_badge(status: ManuscriptStatus) -> Badge {
    let tone = match status {
        ManuscriptStatus::Ready => Tone::Success,
        ManuscriptStatus::SentBack => Tone::Destructive,
        ManuscriptStatus::PendingReview => Tone::Warning,
        ManuscriptStatus::ReadyForPeerReview => Tone::Accent,
        ManuscriptStatus::InReview => Tone::Primary,
    };
    Badge {
        label: status.name(),
        tone,
        alert: false,
    }
}

/// Badge for an EE workspace row. Missing urgency shows as low.
pub fn urgency_badge(urgency: Option<Urgency>) -> Badge {
    let urgency = urgency.unwrap_or_default();
    let tone = match urgency {
        Urgency::High => Tone::Destructive,
        Urgency::Medium => Tone::Warning,
        Urgency::Low => Tone::Muted,
    };
    Badge {
        label: urgency.name(),
        tone,
        alert: urgency == Urgency::High,
    }
}

/// First check with status `fail`, if any
pub fn first_failed_check(checks: &[PreScreeningCheck]) -> Option<&PreScreeningCheck> {
    checks.iter().find(|c| c.is_failed())
}

/// Whether any gate failed
pub fn has_failed_gate(checks: &[PreScreeningCheck]) -> bool {
    first_failed_check(checks).is_some()
}

pub fn check_tone(status: CheckStatus) -> Tone {
    match status {
        CheckStatus::Pass => Tone::Success,
        CheckStatus::Warning => Tone::Warning,
        CheckStatus::Fail => Tone::Destructive,
    }
}

/// Compact pass/warning/fail indicator for a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stoplight {
    pub glyph: &'static str,
    pub tone: Tone,
    /// "NN%" when the check carries a score
    pub score: Option<String>,
}

pub fn stoplight(check: &PreScreeningCheck) -> Stoplight {
    let glyph = match check.status {
        CheckStatus::Pass => "✔",
        CheckStatus::Warning => "!",
        CheckStatus::Fail => "✘",
    };
    Stoplight {
        glyph,
        tone: check_tone(check.status),
        score: check.score.map(|s| format!("{s}%")),
    }
}

/// Gate-specific follow-up shown with a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionExtra {
    /// Link to the publication the submission overlaps with
    SimilarPublication(&'static str),
    /// Journals the author could submit to instead
    RecommendedJournals(&'static [&'static str]),
    None,
}

pub const PLAGIARISM_GATE: &str = "Plagiarism Check";
pub const SCOPE_GATE: &str = "Journal Scope";

const SIMILAR_PUBLICATION: &str = "Smart Grid Integration Strategies (IEEE, 2023)";
const RECOMMENDED_JOURNALS: &[&str] = &[
    "Journal of Social Media Studies",
    "Media & Communication Quarterly",
    "Digital Sociology Review",
];

impl RejectionExtra {
    pub fn for_reason(reason: &str) -> Self {
        match reason {
            PLAGIARISM_GATE => RejectionExtra::SimilarPublication(SIMILAR_PUBLICATION),
            SCOPE_GATE => RejectionExtra::RecommendedJournals(RECOMMENDED_JOURNALS),
            _ => RejectionExtra::None,
        }
    }
}

/// What the worklist shows in place of the assign action for a rejected
/// submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionDetail<'a> {
    pub reason: &'a str,
    pub details: &'a str,
    pub failed_check: Option<&'a PreScreeningCheck>,
    pub extra: RejectionExtra,
}

/// Rejection detail for a manuscript.
///
/// Uses the stored notice when the manuscript was sent back, otherwise the
/// first failing check. `None` when every gate passed.
pub fn rejection_detail(manuscript: &Manuscript) -> Option<RejectionDetail<'_>> {
    let failed_check = first_failed_check(&manuscript.checks);
    let (reason, details) = match (&manuscript.sent_back, failed_check) {
        (Some(notice), _) => (notice.reason.as_str(), notice.details.as_str()),
        (None, Some(check)) => (
            check.name.as_str(),
            check.details.as_deref().unwrap_or_default(),
        ),
        (None, None) => return None,
    };

    Some(RejectionDetail {
        reason,
        details,
        failed_check,
        extra: RejectionExtra::for_reason(reason),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn manuscript(checks: Vec<PreScreeningCheck>) -> Manuscript {
        let mut ms = Manuscript::new(
            "MS-T",
            "T",
            vec!["A".into()],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "J",
        );
        ms.checks = checks;
        ms
    }

    #[test]
    fn test_first_failed_check_picks_first() {
        let checks = vec![
            PreScreeningCheck::pass("Formatting"),
            PreScreeningCheck::fail("Plagiarism Check").with_score(38),
            PreScreeningCheck::fail("Journal Scope"),
        ];
        let failed = first_failed_check(&checks).unwrap();
        assert_eq!(failed.name, "Plagiarism Check");
        assert!(has_failed_gate(&checks));
    }

    #[test]
    fn test_no_failed_gate() {
        let checks = vec![
            PreScreeningCheck::pass("Formatting"),
            PreScreeningCheck::warning("Ethics Statement"),
        ];
        assert!(first_failed_check(&checks).is_none());
        assert!(rejection_detail(&manuscript(checks)).is_none());
    }

    #[test]
    fn test_rejection_detail_prefers_notice() {
        let ms = manuscript(vec![PreScreeningCheck::fail("Journal Scope")
            .with_details("Outside scope")])
        .sent_back(SCOPE_GATE, "Focus is social media marketing");
        let detail = rejection_detail(&ms).unwrap();
        assert_eq!(detail.reason, "Journal Scope");
        assert_eq!(detail.details, "Focus is social media marketing");
        assert!(matches!(detail.extra, RejectionExtra::RecommendedJournals(j) if j.len() == 3));
    }

    #[test]
    fn test_rejection_detail_from_failed_check() {
        let ms = manuscript(vec![PreScreeningCheck::fail(PLAGIARISM_GATE)
            .with_details("42% similarity")]);
        let detail = rejection_detail(&ms).unwrap();
        assert_eq!(detail.details, "42% similarity");
        assert!(matches!(detail.extra, RejectionExtra::SimilarPublication(_)));
    }

    #[test]
    fn test_badges() {
        let badge = status_badge(ManuscriptStatus::SentBack);
        assert_eq!(badge.label, "Sent Back to Author");
        assert_eq!(badge.tone, Tone::Destructive);
        assert_eq!(status_badge(ManuscriptStatus::InReview).tone, Tone::Primary);

        let urgency = urgency_badge(None);
        assert_eq!(urgency.label, "Low");
        assert!(!urgency.alert);
        assert!(urgency_badge(Some(Urgency::High)).alert);
    }

    #[test]
    fn test_stoplight_score() {
        let light = stoplight(&PreScreeningCheck::warning("Language").with_score(72));
        assert_eq!(light.tone, Tone::Warning);
        assert_eq!(light.score.as_deref(), Some("72%"));
        assert!(stoplight(&PreScreeningCheck::pass("Format")).score.is_none());
    }
}
