use std::time::{SystemTime, UNIX_EPOCH};

use ladder_http::{LadderClient, NewMatch, NewUser};

fn load_live_credentials() -> Result<(String, String), String> {
    let base_url = std::env::var("LADDER_API_BASE_URL")
        .map_err(|_| "LADDER_API_BASE_URL is required for live tests".to_owned())?;
    let api_key = std::env::var("LADDER_API_KEY")
        .map_err(|_| "LADDER_API_KEY is required for live tests".to_owned())?;
    Ok((base_url, api_key))
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock must be after epoch")
        .as_millis()
}

#[tokio::test]
async fn live_user_and_match_roundtrip() {
    let (base_url, api_key) = match load_live_credentials() {
        Ok(values) => values,
        Err(_) => {
            eprintln!("skipping live test: LADDER_API_BASE_URL / LADDER_API_KEY not set");
            return;
        }
    };

    let api = LadderClient::new(base_url, api_key);
    let suffix = unique_suffix();
    let winner_name = format!("live_winner_{suffix}");
    let loser_name = format!("live_loser_{suffix}");

    let winner = api
        .create_user(&NewUser {
            username: winner_name.clone(),
            twitch_name: format!("{winner_name}_ttv"),
            discord_id: "999999999999999999".to_owned(),
        })
        .await
        .expect("winner creation must succeed");
    assert_eq!(winner.username, winner_name);
    assert_eq!(winner.rating, 1500.0);

    api.create_user(&NewUser {
        username: loser_name.clone(),
        twitch_name: format!("{loser_name}_ttv"),
        discord_id: "888888888888888888".to_owned(),
    })
    .await
    .expect("loser creation must succeed");

    let fetched = api
        .user(&winner_name)
        .await
        .expect("user lookup must succeed");
    assert!(fetched.rank.is_some());

    let recorded = api
        .record_match(&NewMatch {
            winner: winner_name.clone(),
            loser: loser_name.clone(),
            winner_score: 10,
            loser_score: 3,
        })
        .await
        .expect("match recording must succeed");
    assert!(recorded.winner.rating_after > recorded.winner.rating_before);
    assert!(recorded.loser.rating_after < recorded.loser.rating_before);

    let history = api
        .match_history(&winner_name, 1, 10)
        .await
        .expect("history fetch must succeed");
    assert!(!history.matches.is_empty());

    let ladder = api.ladder(1, 25).await.expect("ladder fetch must succeed");
    assert_eq!(ladder.pagination.page, 1);

    let stats = api
        .user_stats(&winner_name)
        .await
        .expect("stats fetch must succeed");
    assert_eq!(stats.user.username, winner_name);
    assert_eq!(stats.record.wins, 1);

    // Best-effort cleanup; a failure here must not mask the assertions
    // above.
    let _ = api.delete_user(&winner_name).await;
    let _ = api.delete_user(&loser_name).await;
}
