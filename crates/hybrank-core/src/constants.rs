/// hybrank version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spread below which a min-max normalization is considered degenerate.
pub const MIN_NORMALIZATION_SPREAD: f64 = 0.001;

/// Value emitted by a degenerate min-max normalization.
pub const DEGENERATE_NORMALIZED_VALUE: f64 = 0.5;

/// Divisor applied to the linear score before the logistic squash.
pub const SIGMOID_TEMPERATURE: f64 = 10.0;

/// Upper bound of the final ranking score.
pub const MAX_RANKING_SCORE: f64 = 100.0;

/// Number of contributors surfaced by a prediction explanation.
pub const EXPLANATION_TOP_N: usize = 10;
