use ladder_http::LadderClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api = LadderClient::from_env().map_err(anyhow::Error::msg)?;

    let page = api.ladder(1, 25).await?;
    println!(
        "page {} of {} ({} players)",
        page.pagination.page,
        page.pagination.total_pages,
        page.pagination.total_players.unwrap_or_default()
    );
    for player in page.players {
        println!(
            "#{:>2} {:<16} {:>4.0} {}-{}",
            player.rank, player.username, player.rating, player.wins, player.losses
        );
    }

    Ok(())
}
