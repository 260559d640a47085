//! `ladder-http` is an async HTTP client for the CutBot ladder/ranking
//! REST API.
//!
//! The crate wraps the backend's `{success, data}` envelope endpoints with
//! typed operations — [`LadderClient::create_user`],
//! [`LadderClient::record_match`], [`LadderClient::ladder`] and friends —
//! and runs every call through an exponential-backoff retry loop that
//! retries transient failures (5xx, timeouts, connection errors) and
//! propagates client errors (4xx) immediately.

mod client;
mod decode;
mod error;
mod options;
mod request;
mod types;
mod wire;

pub use client::LadderClient;
pub use error::LadderError;
pub use options::ClientOptions;
pub use request::{Method, Request};
pub use types::{
    ApiResponse, DeletedUser, LadderEntry, LadderPage, MatchDeletion, MatchPage, MatchSummary,
    NewMatch, NewUser, Pagination, Player, PlayerDelta, RatingPoint, RatingSummary, Recalculation,
    RecentForm, RecordSummary, RecordedMatch, Score, StatsUser, Streak, Streaks, UserStats,
};

pub type Result<T> = std::result::Result<T, LadderError>;
