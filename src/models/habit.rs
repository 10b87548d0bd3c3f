use serde::{Deserialize, Serialize};

/// A named, user-owned activity being tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A habit together with how many log entries it has, for the list view.
#[derive(Debug, Serialize)]
pub struct HabitWithCount {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub log_count: u32,
}
