use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNKNOWN: &str = "Unknown";

const NEUTRAL_BOOST: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: u32,
    pub name: String,
}

/// Lookups never fail. A missing category id resolves to [`UNKNOWN`], and a name
/// with no boost entry (including [`UNKNOWN`] itself) resolves to a neutral 1.0,
/// so an absent id and an unrecognised one share the same fallback path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    pub weekdays: Vec<String>,
    pub boosts: BTreeMap<String, f64>,
    pub categories: Vec<CategoryEntry>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        let categories = [
            (1, "Film & Animation"),
            (10, "Music"),
            (17, "Sports"),
            (20, "Gaming"),
            (22, "People & Blogs"),
            (23, "Comedy"),
            (24, "Entertainment"),
            (25, "News & Politics"),
            (27, "Education"),
            (28, "Science & Technology"),
        ];
        let boosts = [
            ("Music", 1.25),
            ("Entertainment", 1.18),
            ("Gaming", 1.15),
            ("People & Blogs", 1.05),
            ("Education", 0.9),
            ("Science & Technology", 0.92),
            ("Sports", 1.12),
            ("Comedy", 1.1),
            ("Film & Animation", 1.15),
            ("News & Politics", 0.82),
        ];
        let weekdays = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];

        Self {
            weekdays: weekdays.iter().map(|name| name.to_string()).collect(),
            boosts: boosts
                .iter()
                .map(|(name, boost)| (name.to_string(), *boost))
                .collect(),
            categories: categories
                .iter()
                .map(|(id, name)| CategoryEntry {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

impl ReferenceTables {
    pub fn category_name(&self, category_id: Option<u32>) -> &str {
        category_id
            .and_then(|id| self.categories.iter().find(|entry| entry.id == id))
            .map(|entry| entry.name.as_str())
            .unwrap_or(UNKNOWN)
    }

    pub fn category_boost(&self, category_name: &str) -> f64 {
        self.boosts
            .get(category_name)
            .copied()
            .filter(|boost| boost.is_finite() && *boost >= 0.0)
            .unwrap_or(NEUTRAL_BOOST)
    }

    pub fn weekday_name(&self, index: u8) -> &str {
        self.weekdays
            .get(index as usize)
            .map(String::as_str)
            .unwrap_or(UNKNOWN)
    }

    pub fn weekday_short_name(&self, index: u8) -> &str {
        match self.weekdays.get(index as usize) {
            Some(name) => match name.char_indices().nth(3) {
                Some((end, _)) => &name[..end],
                None => name,
            },
            None => UNKNOWN,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (u32, &str)> {
        self.categories
            .iter()
            .map(|entry| (entry.id, entry.name.as_str()))
    }

    pub fn weekdays(&self) -> impl Iterator<Item = (u8, &str)> {
        self.weekdays
            .iter()
            .enumerate()
            .map_while(|(index, name)| Some((u8::try_from(index).ok()?, name.as_str())))
    }
}
