use serde::{Deserialize, Serialize};

/// Decoded payload of a successful call, together with how many attempts
/// the retry loop spent to obtain it.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub attempts: u32,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub twitch_name: String,
    pub discord_id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub username: String,
    #[serde(default)]
    pub twitch_name: Option<String>,
    #[serde(default)]
    pub discord_id: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub rating_deviation: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub total_players: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUser {
    pub username: String,
    pub deleted_at: String,
}

/// Body of `POST /matches`. Score validation (winner beats loser) belongs
/// to the caller; the client forwards what it is given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub winner: String,
    pub loser: String,
    pub winner_score: u32,
    pub loser_score: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDelta {
    pub username: String,
    pub rating_before: f64,
    pub rating_after: f64,
    pub rating_change: f64,
    pub rank_before: u32,
    pub rank_after: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Score {
    pub winner: u32,
    pub loser: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedMatch {
    pub match_id: u64,
    pub winner: PlayerDelta,
    pub loser: PlayerDelta,
    pub score: Score,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: u64,
    #[serde(default)]
    pub match_number: Option<u64>,
    pub date: String,
    pub winner: String,
    pub loser: String,
    pub winner_score: u32,
    pub loser_score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_players: Option<u64>,
    #[serde(default)]
    pub total_matches: Option<u64>,
    #[serde(default)]
    pub has_next: Option<bool>,
    #[serde(default)]
    pub has_previous: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MatchPage {
    pub matches: Vec<MatchSummary>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderEntry {
    pub rank: u32,
    pub username: String,
    pub rating: f64,
    pub rating_deviation: f64,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LadderPage {
    pub players: Vec<LadderEntry>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsUser {
    pub username: String,
    pub rank: u32,
    pub total_players: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub current: f64,
    pub deviation: f64,
    #[serde(default)]
    pub trend: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub total_matches: Option<u64>,
    pub win_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecentForm {
    #[serde(default)]
    pub last5: Option<String>,
    #[serde(default)]
    pub last10: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Streak {
    pub count: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Streaks {
    pub current: Streak,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RatingPoint {
    pub rating: f64,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user: StatsUser,
    pub rating: RatingSummary,
    pub record: RecordSummary,
    pub recent_form: RecentForm,
    pub streaks: Streaks,
    #[serde(default)]
    pub rating_history: Vec<RatingPoint>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recalculation {
    pub matches_processed: u64,
    pub total_matches: u64,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Result of `DELETE /matches/{id}`: the removed match plus the rating
/// recalculation the backend ran over the remaining history.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDeletion {
    pub deleted_match: MatchSummary,
    pub recalculation: Recalculation,
}
