use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingLabel {
    #[serde(rename = "Strong boost")]
    StrongBoost,
    #[serde(rename = "Moderate boost")]
    ModerateBoost,
    #[serde(rename = "Slight boost")]
    SlightBoost,
    #[serde(rename = "Neutral")]
    Neutral,
}

impl TimingLabel {
    pub fn from_flags(is_peak: bool, is_weekend: bool) -> Self {
        match (is_peak, is_weekend) {
            (true, true) => TimingLabel::StrongBoost,
            (true, false) => TimingLabel::ModerateBoost,
            (false, true) => TimingLabel::SlightBoost,
            (false, false) => TimingLabel::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimingLabel::StrongBoost => "Strong boost",
            TimingLabel::ModerateBoost => "Moderate boost",
            TimingLabel::SlightBoost => "Slight boost",
            TimingLabel::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingWindow {
    pub peak_start: u8,
    pub peak_end: u8,
    pub weekend_start: u8,
    pub peak_boost: f64,
    pub off_peak_boost: f64,
    pub weekend_boost: f64,
}

impl Default for TimingWindow {
    fn default() -> Self {
        Self {
            peak_start: 14,
            peak_end: 17,
            weekend_start: 5,
            peak_boost: 1.2,
            off_peak_boost: 0.9,
            weekend_boost: 1.15,
        }
    }
}

impl TimingWindow {
    pub fn is_peak(&self, publish_hour: u8) -> bool {
        (self.peak_start..=self.peak_end).contains(&publish_hour)
    }

    pub fn is_weekend(&self, day_of_week: u8) -> bool {
        day_of_week >= self.weekend_start
    }

    pub fn hour_boost(&self, publish_hour: u8) -> f64 {
        if self.is_peak(publish_hour) {
            self.peak_boost
        } else {
            self.off_peak_boost
        }
    }

    pub fn day_boost(&self, day_of_week: u8) -> f64 {
        if self.is_weekend(day_of_week) {
            self.weekend_boost
        } else {
            1.0
        }
    }

    pub fn classify(&self, publish_hour: u8, day_of_week: u8) -> TimingLabel {
        TimingLabel::from_flags(self.is_peak(publish_hour), self.is_weekend(day_of_week))
    }
}

pub fn classify_timing(publish_hour: u8, day_of_week: u8) -> TimingLabel {
    TimingWindow::default().classify(publish_hour, day_of_week)
}
