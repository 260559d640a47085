use ladder_http::{LadderClient, NewMatch, NewUser};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api = LadderClient::from_env().map_err(anyhow::Error::msg)?;

    for (username, discord_id) in [("demo_kit", "111111111111111111"), ("demo_mio", "222222222222222222")] {
        let player = api
            .create_user(&NewUser {
                username: username.to_owned(),
                twitch_name: format!("{username}_ttv"),
                discord_id: discord_id.to_owned(),
            })
            .await?;
        println!("created {} at rating {}", player.username, player.rating);
    }

    let recorded = api
        .record_match(&NewMatch {
            winner: "demo_kit".to_owned(),
            loser: "demo_mio".to_owned(),
            winner_score: 10,
            loser_score: 7,
        })
        .await?;

    println!(
        "match {}: {} {:+.1} -> #{}, {} {:+.1} -> #{}",
        recorded.match_id,
        recorded.winner.username,
        recorded.winner.rating_change,
        recorded.winner.rank_after,
        recorded.loser.username,
        recorded.loser.rating_change,
        recorded.loser.rank_after
    );

    Ok(())
}
