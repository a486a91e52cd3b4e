//! Introspection reports produced by the ranking model.

use std::fmt;

use serde::Serialize;

/// Coarse importance band of a configured weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightImportance {
    Critical,
    VeryHigh,
    High,
    Medium,
    Low,
}

impl WeightImportance {
    pub fn from_weight(weight: f64) -> Self {
        if weight >= 6.0 {
            Self::Critical
        } else if weight >= 4.0 {
            Self::VeryHigh
        } else if weight >= 2.0 {
            Self::High
        } else if weight >= 1.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One configured weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    pub feature: String,
    pub weight: f64,
    pub importance: WeightImportance,
}

/// All configured weights, sorted by weight descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelExplanation {
    pub weights: Vec<WeightEntry>,
}

impl fmt::Display for ModelExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<30} | Weight", "Feature")?;
        writeln!(f, "{}", "-".repeat(51))?;
        for entry in &self.weights {
            writeln!(
                f,
                "{:<30} | {:.2} ({})",
                entry.feature,
                entry.weight,
                entry.importance.label()
            )?;
        }
        writeln!(f, "{}", "-".repeat(51))?;
        writeln!(f, "Total features: {}", self.weights.len())?;
        write!(f, "Score range: 0-100")
    }
}

/// Weight × value contribution of a single feature to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Top contributors behind one candidate's final score, largest absolute
/// contribution first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionExplanation {
    pub final_score: f64,
    pub contributions: Vec<FeatureContribution>,
}

impl fmt::Display for PredictionExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final score: {:.2} / 100", self.final_score)?;
        writeln!(
            f,
            "{:<25} | {:>8} | {:>8} | {:>10}",
            "Feature", "Value", "Weight", "Contrib."
        )?;
        writeln!(f, "{}", "-".repeat(61))?;
        for c in &self.contributions {
            writeln!(
                f,
                "{:<25} | {:>8.3} | {:>8.2} | {:>10.3}",
                c.feature, c.value, c.weight, c.contribution
            )?;
        }
        Ok(())
    }
}
