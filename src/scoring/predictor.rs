use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PredictorConfig;
use crate::scoring::{EngagementScore, TimingWindow};
use crate::tables::ReferenceTables;
use crate::{format_number, ContextInput, MetricsInput};

const RANGE_LOW: f64 = 0.7;
const RANGE_HIGH: f64 = 1.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionWeights {
    pub likes: f64,
    pub comments: f64,
    pub engagement: f64,
    pub jitter_max: f64,
}

impl Default for PredictionWeights {
    fn default() -> Self {
        Self {
            likes: 1.8,
            comments: 12.0,
            engagement: 20.0,
            jitter_max: 1500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub value: u64,
    pub lower_bound: u64,
    pub upper_bound: u64,
}

impl Prediction {
    pub fn from_value(value: u64) -> Self {
        let value_f = value as f64;
        Self {
            value,
            lower_bound: (value_f * RANGE_LOW).round() as u64,
            upper_bound: (value_f * RANGE_HIGH).round() as u64,
        }
    }

    pub fn range_text(&self) -> String {
        format!(
            "Estimated range: {} – {} views under similar conditions.",
            format_number(self.lower_bound),
            format_number(self.upper_bound)
        )
    }
}

#[derive(Debug, Clone)]
pub struct ViewPredictor {
    weights: PredictionWeights,
    timing: TimingWindow,
    tables: ReferenceTables,
}

impl Default for ViewPredictor {
    fn default() -> Self {
        Self::new(
            PredictionWeights::default(),
            TimingWindow::default(),
            ReferenceTables::default(),
        )
    }
}

impl ViewPredictor {
    pub fn new(
        weights: PredictionWeights,
        timing: TimingWindow,
        tables: ReferenceTables,
    ) -> Self {
        Self {
            weights,
            timing,
            tables,
        }
    }

    pub fn from_config(config: &PredictorConfig) -> Self {
        Self::new(
            config.prediction.clone(),
            config.timing.clone(),
            config.tables.clone(),
        )
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn timing(&self) -> &TimingWindow {
        &self.timing
    }

    pub fn category_boost(&self, category_id: Option<u32>) -> f64 {
        self.tables
            .category_boost(self.tables.category_name(category_id))
    }

    pub fn expected_views(
        &self,
        metrics: &MetricsInput,
        score: EngagementScore,
        context: &ContextInput,
    ) -> f64 {
        let base = metrics.likes as f64 * self.weights.likes
            + metrics.comments as f64 * self.weights.comments
            + score.value() * self.weights.engagement;

        base * self.category_boost(context.category_id)
            * self.timing.hour_boost(context.publish_hour)
            * self.timing.day_boost(context.day_of_week)
    }

    pub fn predict<R: Rng + ?Sized>(
        &self,
        metrics: &MetricsInput,
        score: EngagementScore,
        context: &ContextInput,
        rng: &mut R,
    ) -> Prediction {
        let raw = self.expected_views(metrics, score, context) + self.draw_jitter(rng);
        Prediction::from_value(clamp_views(raw))
    }

    fn draw_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let jitter_max = self.weights.jitter_max;
        if jitter_max.is_finite() && jitter_max > 0.0 {
            rng.gen_range(0.0..jitter_max)
        } else {
            0.0
        }
    }
}

pub fn compute_prediction<R: Rng + ?Sized>(
    metrics: &MetricsInput,
    score: EngagementScore,
    context: &ContextInput,
    rng: &mut R,
) -> Prediction {
    ViewPredictor::default().predict(metrics, score, context, rng)
}

fn clamp_views(raw: f64) -> u64 {
    let rounded = raw.round();
    if rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}
