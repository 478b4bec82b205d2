//! Entity types served by the mock stores, mirroring the JSON fixture shape
//! (camelCase fields).

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::store::Entity;

/// One completed session's result. Created at completion confirmation and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub id: String,
    pub puzzle_id: String,
    pub player_name: String,
    /// Completion time in seconds.
    pub time: u64,
    pub points: u64,
    /// Completion date, `YYYY-MM-DD`.
    pub date: String,
}

impl Entity for Score {
    const KIND: &'static str = "score";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Aggregate per-player stats, read-only display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default)]
    pub id: String,
    pub player_name: String,
    pub current_streak: u32,
    pub total_completed: u32,
}

impl Entity for Progress {
    const KIND: &'static str = "progress";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Daily challenge banner data, read-only display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    #[serde(default)]
    pub id: String,
    pub date: String,
    pub participants: u64,
    pub top_score: u64,
}

impl Entity for DailyChallenge {
    const KIND: &'static str = "daily challenge";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// The leaderboard view: scores by points descending, truncated.
pub fn top_scores(mut rows: Vec<Score>, limit: usize) -> Vec<Score> {
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows.truncate(limit);
    rows
}

/// Today's date as `YYYY-MM-DD` (UTC), stamped onto new scores.
pub(crate) fn today_stamp() -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .format(&fmt)
        .unwrap_or_else(|_| String::from("unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(points: u64) -> Score {
        Score {
            id: String::new(),
            puzzle_id: "1".into(),
            player_name: "P".into(),
            time: 0,
            points,
            date: "2024-01-01".into(),
        }
    }

    #[test]
    fn top_scores_sorts_descending_and_truncates() {
        let rows = vec![score(100), score(900), score(500)];
        let top = top_scores(rows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].points, 900);
        assert_eq!(top[1].points, 500);
    }

    #[test]
    fn date_stamp_shape() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[7], b'-');
    }

    #[test]
    fn score_serializes_camel_case() {
        let json = serde_json::to_string(&score(42)).unwrap();
        assert!(json.contains("\"playerName\""));
        assert!(json.contains("\"puzzleId\""));
    }
}
