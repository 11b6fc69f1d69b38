use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub running_time_minutes: Option<i64>,
    pub created_at: String,
}

/// A single showing of a movie in a theater.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: i64,
    pub movie_id: i64,
    pub starts_at: String,
    pub theater: Option<String>,
    pub created_at: String,
}
