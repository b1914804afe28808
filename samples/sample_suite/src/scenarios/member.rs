use trello_client::trello::client::Client;
use trello_client::trello::httptransport::HttpTransport;
use trello_client::trello::member::{AvatarSize, Member};

use crate::config::Secrets;

pub async fn run(client: &Client<HttpTransport>, secrets: &Secrets) -> Result<(), String> {
    println!("Scenario: member");

    let member = Member::find(client, &secrets.sample_username)
        .await
        .map_err(|e| e.to_string())?;
    println!(
        "Member {} ({})",
        member.username().unwrap_or_default(),
        member.full_name().unwrap_or_default()
    );

    if let Some(url) = member.avatar_url(AvatarSize::Small) {
        println!("Avatar: {}", url);
    }

    Ok(())
}
