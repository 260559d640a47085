use std::fmt;
use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    decode::{decode_envelope, decode_error_parts},
    types::{
        ApiResponse, DeletedUser, LadderPage, MatchDeletion, MatchPage, NewMatch, NewUser, Player,
        RecordedMatch, UserStats,
    },
    ClientOptions, LadderError, Request, Result,
};

#[derive(Clone)]
/// HTTP client for the ladder/ranking REST API.
///
/// One instance per process, constructed at startup and passed to every
/// caller. Cloning is cheap and shares the underlying connection pool;
/// each in-flight call runs its own independent retry loop.
pub struct LadderClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    options: ClientOptions,
}

impl fmt::Debug for LadderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LadderClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

/// One failed attempt inside the retry loop. Client errors (4xx) never
/// reach this type; they return immediately.
enum Failure {
    Status { status: u16, body: String },
    Transport(reqwest::Error),
}

impl LadderClient {
    /// Creates a client from a base URL and an API key.
    ///
    /// The key is sent as `Authorization: Bearer <key>`; a key already
    /// carrying the `Bearer ` prefix is used as-is.
    pub fn new(base_url: impl Into<String>, api_key: impl AsRef<str>) -> Self {
        let authorization = normalize_bearer_authorization(api_key.as_ref());
        Self::new_raw_auth(base_url, authorization)
    }

    /// Creates a client with a full raw authorization header value.
    ///
    /// Example: `"Bearer <token>"` or any custom scheme.
    pub fn new_raw_auth(base_url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: authorization.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `LADDER_API_BASE_URL` — API base URL
    ///   (e.g. `https://ladder.example.net/api/v1`)
    /// - `LADDER_API_KEY` — API key (Bearer prefix optional)
    /// - `LADDER_API_TIMEOUT_MS` — optional per-request timeout override
    ///
    /// Returns an error if a required variable is missing or empty, or the
    /// timeout override does not parse.
    pub fn from_env() -> std::result::Result<Self, String> {
        let base_url = std::env::var("LADDER_API_BASE_URL")
            .map_err(|_| "missing LADDER_API_BASE_URL environment variable".to_owned())?;
        let api_key = std::env::var("LADDER_API_KEY")
            .map_err(|_| "missing LADDER_API_KEY environment variable".to_owned())?;
        if base_url.trim().is_empty() {
            return Err("LADDER_API_BASE_URL is set but empty".to_owned());
        }
        if api_key.trim().is_empty() {
            return Err("LADDER_API_KEY is set but empty".to_owned());
        }

        let mut client = Self::new(base_url, api_key);
        if let Ok(raw) = std::env::var("LADDER_API_TIMEOUT_MS") {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("LADDER_API_TIMEOUT_MS is not a number: '{raw}'"))?;
            client.options.timeout_ms = timeout_ms;
        }
        Ok(client)
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Registers a new user on the ladder.
    ///
    /// Retried like every other call, with no idempotency key; a retry
    /// after a slow-but-applied attempt can surface a duplicate-user
    /// error from the backend.
    pub async fn create_user(&self, user: &NewUser) -> Result<Player> {
        Ok(self.send(Request::post("/users", user)?).await?.data)
    }

    /// Fetches one user by username.
    pub async fn user(&self, username: &str) -> Result<Player> {
        Ok(self
            .send(Request::get(format!("/users/{username}")))
            .await?
            .data)
    }

    /// Removes a user from the ladder.
    pub async fn delete_user(&self, username: &str) -> Result<DeletedUser> {
        Ok(self
            .send(Request::delete(format!("/users/{username}")))
            .await?
            .data)
    }

    /// Lists all registered users (autocomplete source).
    pub async fn users(&self) -> Result<Vec<Player>> {
        Ok(self.send(Request::get("/users")).await?.data)
    }

    /// Records a match result; the backend updates both ratings.
    ///
    /// Score validation (winner beats loser, distinct players) is the
    /// caller's job. Retried with no idempotency key — after exhausted
    /// retries the match may or may not have been recorded server-side,
    /// so do not blindly re-issue.
    pub async fn record_match(&self, report: &NewMatch) -> Result<RecordedMatch> {
        Ok(self.send(Request::post("/matches", report)?).await?.data)
    }

    /// Fetches one user's match history, paginated.
    pub async fn match_history(&self, username: &str, page: u32, limit: u32) -> Result<MatchPage> {
        Ok(self
            .send(
                Request::get(format!("/matches/{username}"))
                    .query("page", page)
                    .query("limit", limit),
            )
            .await?
            .data)
    }

    /// Fetches recent matches across all users, paginated.
    pub async fn matches(&self, page: u32, limit: u32) -> Result<MatchPage> {
        Ok(self
            .send(Request::get("/matches").query("page", page).query("limit", limit))
            .await?
            .data)
    }

    /// Deletes a match by id; the backend recalculates ratings over the
    /// remaining history.
    pub async fn delete_match(&self, id: u64) -> Result<MatchDeletion> {
        Ok(self
            .send(Request::delete(format!("/matches/{id}")))
            .await?
            .data)
    }

    /// Fetches one page of ladder standings.
    pub async fn ladder(&self, page: u32, limit: u32) -> Result<LadderPage> {
        Ok(self
            .send(Request::get("/ladder").query("page", page).query("limit", limit))
            .await?
            .data)
    }

    /// Fetches aggregate statistics for one user.
    pub async fn user_stats(&self, username: &str) -> Result<UserStats> {
        Ok(self
            .send(Request::get(format!("/stats/{username}")))
            .await?
            .data)
    }

    /// Sends one request through the retry loop and decodes the response
    /// envelope. Every convenience operation delegates here.
    ///
    /// Classification: a 4xx status returns [`LadderError::Api`] after a
    /// single attempt; 5xx and transport failures are retried with
    /// exponential backoff until `max_attempts` total attempts are spent,
    /// then surface as [`LadderError::Server`] / [`LadderError::Transport`]
    /// carrying the attempt count. A 2xx body that does not decode is
    /// [`LadderError::Decode`] and is not retried.
    pub async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<ApiResponse<T>> {
        let (body, attempts) = self.dispatch_with_retry(&request).await?;
        let data = decode_envelope(&body)?;
        Ok(ApiResponse { data, attempts })
    }

    async fn dispatch_with_retry(&self, request: &Request) -> Result<(String, u32)> {
        let url = self.endpoint_url(request.path());
        let max_attempts = self.options.max_attempts.max(1);
        // Completed (failed) attempts so far.
        let mut attempt = 0u32;

        loop {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "{:?} {} (attempt {}/{})",
                request.method(),
                request.path(),
                attempt + 1,
                max_attempts
            );

            let mut builder = self
                .http
                .request(request.method().into(), &url)
                .header(header::AUTHORIZATION, &self.token)
                .header(header::CONTENT_TYPE, "application/json")
                .timeout(Duration::from_millis(self.options.timeout_ms));
            if !request.query_pairs().is_empty() {
                builder = builder.query(request.query_pairs());
            }
            if let Some(body) = request.body() {
                builder = builder.json(body);
            }

            let failure = match builder.send().await {
                Ok(response) => {
                    let status = response.status();
                    match response.text().await {
                        Ok(body) if status.is_success() => return Ok((body, attempt + 1)),
                        Ok(body) if status.is_client_error() => {
                            let (message, code) = decode_error_parts(status.as_u16(), &body);
                            return Err(LadderError::Api {
                                status: status.as_u16(),
                                message,
                                code,
                            });
                        }
                        Ok(body) => Failure::Status {
                            status: status.as_u16(),
                            body,
                        },
                        // Headers arrived but the body never completed.
                        Err(err) => Failure::Transport(err),
                    }
                }
                Err(err) => Failure::Transport(err),
            };

            if attempt + 1 < max_attempts {
                self.wait_before_retry(attempt).await;
                attempt += 1;
                continue;
            }

            return Err(match failure {
                Failure::Status { status, body } => LadderError::Server {
                    status,
                    attempts: attempt + 1,
                    body,
                },
                Failure::Transport(source) => LadderError::Transport {
                    attempts: attempt + 1,
                    source,
                },
            });
        }
    }

    /// Sleeps before the next attempt: `base_delay_ms * 2^retries` so the
    /// waits run base, 2x, 4x, ... The sleep suspends only this call;
    /// concurrent calls keep making progress.
    async fn wait_before_retry(&self, retries: u32) {
        let exp = retries.min(16);
        let multiplier = 1u64 << exp;
        let delay_ms = self.options.base_delay_ms.saturating_mul(multiplier);

        #[cfg(feature = "tracing")]
        tracing::warn!("api call failed, retrying in {} ms", delay_ms);

        sleep(Duration::from_millis(delay_ms)).await;
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn normalize_bearer_authorization(token: &str) -> String {
    let trimmed = token.trim();
    let prefix = trimmed.get(..7);
    if prefix.is_some_and(|value| value.eq_ignore_ascii_case("bearer ")) {
        trimmed.to_owned()
    } else {
        format!("Bearer {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_bearer_authorization, LadderClient};

    #[test]
    fn normalize_bearer_adds_prefix_when_missing() {
        assert_eq!(
            normalize_bearer_authorization("abc123"),
            "Bearer abc123".to_owned()
        );
    }

    #[test]
    fn normalize_bearer_keeps_existing_prefix() {
        assert_eq!(
            normalize_bearer_authorization("bEaReR abc123"),
            "bEaReR abc123".to_owned()
        );
    }

    #[test]
    fn debug_redacts_authorization_value() {
        let client = LadderClient::new_raw_auth("https://ladder.example.net/api/v1", "secret-token");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let client = LadderClient::new("https://ladder.example.net/api/v1/", "key");
        assert_eq!(
            client.endpoint_url("/users/kit"),
            "https://ladder.example.net/api/v1/users/kit"
        );
    }
}
