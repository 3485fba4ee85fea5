//! Automated manuscript evaluation and summaries
//!
//! Both are canned sample output; nothing here scores a manuscript.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// Score and rationale for one evaluation dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// 0-100
    pub score: u8,
    pub rationale: String,
}

impl DimensionScore {
    pub fn new(score: u8, rationale: impl Into<String>) -> Self {
        Self {
            score,
            rationale: rationale.into(),
        }
    }
}

/// The five evaluation dimensions, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationDimension {
    JournalFit,
    ScholarlyMerit,
    Originality,
    TechnicalIntegrity,
    RiskSensitivity,
}

impl EvaluationDimension {
    pub const ALL: [EvaluationDimension; 5] = [
        EvaluationDimension::JournalFit,
        EvaluationDimension::ScholarlyMerit,
        EvaluationDimension::Originality,
        EvaluationDimension::TechnicalIntegrity,
        EvaluationDimension::RiskSensitivity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EvaluationDimension::JournalFit => "Journal Fit & Scope",
            EvaluationDimension::ScholarlyMerit => "Scholarly Merit",
            EvaluationDimension::Originality => "Originality",
            EvaluationDimension::TechnicalIntegrity => "Technical Integrity",
            EvaluationDimension::RiskSensitivity => "Risk & Sensitivity",
        }
    }
}

/// Five-dimension AI evaluation shown in the review modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiEvaluation {
    pub journal_fit: DimensionScore,
    pub scholarly_merit: DimensionScore,
    pub originality: DimensionScore,
    pub technical_integrity: DimensionScore,
    pub risk_sensitivity: DimensionScore,
}

impl AiEvaluation {
    pub fn dimension(&self, dimension: EvaluationDimension) -> &DimensionScore {
        match dimension {
            EvaluationDimension::JournalFit => &self.journal_fit,
            EvaluationDimension::ScholarlyMerit => &self.scholarly_merit,
            EvaluationDimension::Originality => &self.originality,
            EvaluationDimension::TechnicalIntegrity => &self.technical_integrity,
            EvaluationDimension::RiskSensitivity => &self.risk_sensitivity,
        }
    }

    /// Dimensions with their scores in display order
    pub fn entries(&self) -> impl Iterator<Item = (EvaluationDimension, &DimensionScore)> {
        EvaluationDimension::ALL
            .into_iter()
            .map(move |d| (d, self.dimension(d)))
    }
}

/// Colour band for an evaluation score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn for_score(score: u8, display: &DisplayConfig) -> Self {
        if score >= display.score_high_threshold {
            ScoreBand::High
        } else if score >= display.score_medium_threshold {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

/// Length variants of the generated summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryLength {
    #[default]
    FiveMinute,
    TenMinute,
    FifteenMinute,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [
        SummaryLength::FiveMinute,
        SummaryLength::TenMinute,
        SummaryLength::FifteenMinute,
    ];

    /// Tab key ("5min", "10min", "15min")
    pub fn key(&self) -> &'static str {
        match self {
            SummaryLength::FiveMinute => "5min",
            SummaryLength::TenMinute => "10min",
            SummaryLength::FifteenMinute => "15min",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SummaryLength::FiveMinute => "5-min read",
            SummaryLength::TenMinute => "10-min read",
            SummaryLength::FifteenMinute => "15-min read",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Next tab, wrapping
    pub fn next(&self) -> Self {
        match self {
            SummaryLength::FiveMinute => SummaryLength::TenMinute,
            SummaryLength::TenMinute => SummaryLength::FifteenMinute,
            SummaryLength::FifteenMinute => SummaryLength::FiveMinute,
        }
    }

    /// Previous tab, wrapping
    pub fn prev(&self) -> Self {
        match self {
            SummaryLength::FiveMinute => SummaryLength::FifteenMinute,
            SummaryLength::TenMinute => SummaryLength::FiveMinute,
            SummaryLength::FifteenMinute => SummaryLength::TenMinute,
        }
    }
}

/// The three generated summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSummaries {
    pub five_minute: String,
    pub ten_minute: String,
    pub fifteen_minute: String,
}

impl AiSummaries {
    pub fn get(&self, length: SummaryLength) -> &str {
        match length {
            SummaryLength::FiveMinute => &self.five_minute,
            SummaryLength::TenMinute => &self.ten_minute,
            SummaryLength::FifteenMinute => &self.fifteen_minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        let display = DisplayConfig::default();
        assert_eq!(ScoreBand::for_score(95, &display), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(90, &display), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(89, &display), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(75, &display), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(74, &display), ScoreBand::Low);
    }

    #[test]
    fn test_summary_tabs_cycle() {
        let mut length = SummaryLength::default();
        assert_eq!(length.key(), "5min");
        for _ in 0..3 {
            length = length.next();
        }
        assert_eq!(length, SummaryLength::FiveMinute);
        assert_eq!(length.prev(), SummaryLength::FifteenMinute);
        assert_eq!(SummaryLength::from_key("10min"), Some(SummaryLength::TenMinute));
        assert_eq!(SummaryLength::from_key("20min"), None);
    }
}
