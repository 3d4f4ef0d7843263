use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::{coerce_value, EngagementScore, TimingLabel};
use crate::tables::ReferenceTables;
use crate::{format_float, format_hour, format_number, ContextInput, Estimate, MetricsInput};

#[derive(Debug, Default, Deserialize)]
pub struct ApiEngagementRequest {
    pub likes: Option<Value>,
    pub comments: Option<Value>,
}

impl ApiEngagementRequest {
    pub fn into_metrics(self) -> MetricsInput {
        MetricsInput::new(
            coerce_value(self.likes.as_ref()),
            coerce_value(self.comments.as_ref()),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ApiEngagementResponse {
    pub engagement: EngagementScore,
    pub formatted: String,
}

impl ApiEngagementResponse {
    pub fn from_score(engagement: EngagementScore) -> Self {
        Self {
            engagement,
            formatted: format_float(engagement.value(), 2),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiPredictionRequest {
    pub likes: Option<Value>,
    pub comments: Option<Value>,
    pub category_id: Option<Value>,
    pub publish_hour: Option<Value>,
    pub day_of_week: Option<Value>,
    pub seed: Option<Value>,
}

impl ApiPredictionRequest {
    pub fn into_input(self) -> Result<(MetricsInput, ContextInput, Option<String>), String> {
        let seed = coerce_seed(self.seed)?;
        let metrics = MetricsInput::new(
            coerce_value(self.likes.as_ref()),
            coerce_value(self.comments.as_ref()),
        );

        let publish_hour = coerce_value(self.publish_hour.as_ref());
        if publish_hour > 23 {
            return Err(format!("invalid publish_hour (0-23): {}", publish_hour));
        }
        let day_of_week = coerce_value(self.day_of_week.as_ref());
        if day_of_week > 6 {
            return Err(format!("invalid day_of_week (0-6): {}", day_of_week));
        }

        let context = ContextInput {
            category_id: coerce_category(self.category_id.as_ref()),
            publish_hour: publish_hour as u8,
            day_of_week: day_of_week as u8,
        };
        Ok((metrics, context, seed))
    }
}

fn coerce_seed(value: Option<Value>) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Ok(Some(raw)),
        // numbers hash by their JSON text, so 42 and "42" seed the same draw
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(format!("invalid seed (string or number): {}", other)),
    }
}

fn coerce_category(value: Option<&Value>) -> Option<u32> {
    let id = match value {
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(raw)) => raw.trim().parse::<u64>().ok(),
        _ => None,
    };
    id.and_then(|id| u32::try_from(id).ok())
}

#[derive(Debug, Serialize)]
pub struct ApiSummary {
    pub likes: String,
    pub comments: String,
    pub engagement: String,
    pub category: String,
    pub hour: String,
    pub day: String,
}

#[derive(Debug, Serialize)]
pub struct ApiPredictionResponse {
    pub engagement: EngagementScore,
    pub category_name: String,
    pub category_boost: f64,
    pub weekday_name: String,
    pub prediction: u64,
    pub lower_bound: u64,
    pub upper_bound: u64,
    pub range_text: String,
    pub timing: TimingLabel,
    pub insight: String,
    pub summary: ApiSummary,
}

impl ApiPredictionResponse {
    pub fn from_estimate(estimate: Estimate) -> Self {
        let summary = ApiSummary {
            likes: format_number(estimate.metrics.likes),
            comments: format_number(estimate.metrics.comments),
            engagement: format_float(estimate.engagement.value(), 2),
            category: estimate.category_name.clone(),
            hour: format_hour(estimate.context.publish_hour),
            day: estimate.weekday_name.clone(),
        };

        Self {
            engagement: estimate.engagement,
            category_name: estimate.category_name,
            category_boost: estimate.category_boost,
            weekday_name: estimate.weekday_name,
            prediction: estimate.prediction.value,
            lower_bound: estimate.prediction.lower_bound,
            upper_bound: estimate.prediction.upper_bound,
            range_text: estimate.prediction.range_text(),
            timing: estimate.timing,
            insight: estimate.insight,
            summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiCategory {
    pub id: u32,
    pub name: String,
    pub boost: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiWeekday {
    pub index: u8,
    pub name: String,
}

pub fn category_options(tables: &ReferenceTables) -> Vec<ApiCategory> {
    tables
        .categories()
        .map(|(id, name)| ApiCategory {
            id,
            name: name.to_string(),
            boost: tables.category_boost(name),
        })
        .collect()
}

pub fn weekday_options(tables: &ReferenceTables) -> Vec<ApiWeekday> {
    tables
        .weekdays()
        .map(|(index, name)| ApiWeekday {
            index,
            name: name.to_string(),
        })
        .collect()
}
