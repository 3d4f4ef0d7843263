pub mod engagement;
pub mod insight;
pub mod predictor;
pub mod timing;

pub use engagement::{coerce_count, coerce_value, compute_engagement, EngagementScore};
pub use insight::{compose_insight, compose_insight_with, EngagementTier};
pub use predictor::{compute_prediction, Prediction, PredictionWeights, ViewPredictor};
pub use timing::{classify_timing, TimingLabel, TimingWindow};
