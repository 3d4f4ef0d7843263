pub mod api;
pub mod config;
pub mod scoring;
pub mod server;
pub mod tables;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::scoring::{
    compose_insight_with, compute_engagement, EngagementScore, Prediction, TimingLabel,
    ViewPredictor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsInput {
    pub likes: u64,
    pub comments: u64,
}

impl Default for MetricsInput {
    fn default() -> Self {
        Self {
            likes: 1_000,
            comments: 50,
        }
    }
}

impl MetricsInput {
    pub fn new(likes: u64, comments: u64) -> Self {
        Self { likes, comments }
    }

    pub fn engagement(&self) -> EngagementScore {
        compute_engagement(self.likes, self.comments)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextInput {
    pub category_id: Option<u32>,
    pub publish_hour: u8,
    pub day_of_week: u8,
}

impl Default for ContextInput {
    fn default() -> Self {
        Self {
            category_id: Some(1),
            publish_hour: 14,
            day_of_week: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub metrics: MetricsInput,
    pub context: ContextInput,
    pub engagement: EngagementScore,
    pub category_name: String,
    pub category_boost: f64,
    pub weekday_name: String,
    pub prediction: Prediction,
    pub timing: TimingLabel,
    pub insight: String,
}

pub fn estimate<R: Rng + ?Sized>(
    predictor: &ViewPredictor,
    metrics: MetricsInput,
    context: ContextInput,
    rng: &mut R,
) -> Estimate {
    let engagement = metrics.engagement();
    let prediction = predictor.predict(&metrics, engagement, &context, rng);

    let tables = predictor.tables();
    let category_name = tables.category_name(context.category_id).to_string();
    let timing = predictor
        .timing()
        .classify(context.publish_hour, context.day_of_week);
    let insight = compose_insight_with(
        predictor.timing(),
        prediction.value,
        engagement,
        &category_name,
        context.publish_hour,
        context.day_of_week,
    );

    Estimate {
        metrics,
        context,
        engagement,
        category_boost: predictor.category_boost(context.category_id),
        weekday_name: tables.weekday_name(context.day_of_week).to_string(),
        category_name,
        prediction,
        timing,
        insight,
    }
}

pub fn prediction_rng(seed: Option<&str>) -> StdRng {
    match seed.map(str::trim).filter(|seed| !seed.is_empty()) {
        Some(seed) => StdRng::seed_from_u64(stable_hash64(seed)),
        None => StdRng::from_entropy(),
    }
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub fn format_hour(hour: u8) -> String {
    format!("{}:00", hour)
}
