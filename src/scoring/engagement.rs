use serde::{Deserialize, Serialize};
use serde_json::Value;

const COMMENT_WEIGHT: f64 = 2.0;
const SCORE_DIVISOR: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementScore(f64);

impl EngagementScore {
    pub fn value(self) -> f64 {
        self.0
    }
}

pub fn compute_engagement(likes: u64, comments: u64) -> EngagementScore {
    EngagementScore((likes as f64 + comments as f64 * COMMENT_WEIGHT) / SCORE_DIVISOR)
}

/// Parses a user-entered count leniently.
pub fn coerce_count(raw: &str) -> u64 {
    raw.trim().parse::<f64>().map(count_from_f64).unwrap_or(0)
}

pub fn coerce_value(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .unwrap_or_else(|| number.as_f64().map(count_from_f64).unwrap_or(0)),
        Some(Value::String(raw)) => coerce_count(raw),
        _ => 0,
    }
}

fn count_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}
