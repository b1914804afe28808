use trello_client::trello::client::Client;
use trello_client::trello::filter::{BoardFilter, CardFilter};
use trello_client::trello::httptransport::HttpTransport;
use trello_client::trello::member::Member;
use trello_client::trello::resource::Resource;

use crate::config::Secrets;

pub async fn run(client: &Client<HttpTransport>, secrets: &Secrets) -> Result<(), String> {
    println!("Scenario: relationships");

    let member = Member::find(client, &secrets.sample_username)
        .await
        .map_err(|e| e.to_string())?;

    let boards = member
        .boards(client, Some(BoardFilter::Open))
        .await
        .map_err(|e| e.to_string())?;
    println!("Open boards: {}", boards.len());

    if let Some(first) = boards.first() {
        let names = first
            .attributes()
            .keys()
            .cloned()
            .collect::<Vec<&str>>();
        println!("Board attributes: {}", names.join(", "));
    }

    let cards = member
        .cards(client, Some(CardFilter::Open))
        .await
        .map_err(|e| e.to_string())?;
    println!("Open cards: {}", cards.len());

    Ok(())
}
