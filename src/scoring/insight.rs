use crate::format_number;
use crate::scoring::{EngagementScore, TimingWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementTier {
    Strong,
    Healthy,
    Low,
}

impl EngagementTier {
    pub fn from_score(score: EngagementScore) -> Self {
        let value = score.value();
        if value >= 40.0 {
            EngagementTier::Strong
        } else if value >= 15.0 {
            EngagementTier::Healthy
        } else {
            EngagementTier::Low
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            EngagementTier::Strong => {
                "Your engagement level is extremely strong — consider using this format again if it performs well. "
            }
            EngagementTier::Healthy => {
                "Engagement looks healthy. Focus on a strong hook and clear thumbnail to fully leverage it. "
            }
            EngagementTier::Low => {
                "Engagement is on the lower side. Try improving your title, thumbnail, and call-to-action to boost likes and comments. "
            }
        }
    }
}

fn timing_sentence(is_peak: bool, is_weekend: bool) -> &'static str {
    match (is_peak, is_weekend) {
        (true, true) => {
            "Posting during the afternoon on a weekend gives you a powerful timing advantage."
        }
        (true, false) => {
            "Your posting time lands in a good engagement window; this will help early momentum."
        }
        (false, true) => {
            "Weekends are generally more forgiving, but try experimenting with afternoon time slots."
        }
        (false, false) => {
            "Consider testing afternoon slots (2–5 PM) and comparing performance across weekdays."
        }
    }
}

pub fn compose_insight(
    prediction: u64,
    score: EngagementScore,
    category_name: &str,
    publish_hour: u8,
    day_of_week: u8,
) -> String {
    compose_insight_with(
        &TimingWindow::default(),
        prediction,
        score,
        category_name,
        publish_hour,
        day_of_week,
    )
}

pub fn compose_insight_with(
    window: &TimingWindow,
    prediction: u64,
    score: EngagementScore,
    category_name: &str,
    publish_hour: u8,
    day_of_week: u8,
) -> String {
    let mut insight = format!(
        "This setup could earn around {} views for a {} video. ",
        format_number(prediction),
        category_name
    );
    insight.push_str(EngagementTier::from_score(score).sentence());
    insight.push_str(timing_sentence(
        window.is_peak(publish_hour),
        window.is_weekend(day_of_week),
    ));
    insight
}
