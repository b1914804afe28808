use trello_client::auth::credentials::verify_credentials;
use trello_client::config::ClientConfig;
use trello_client::trello::client::Client;
use trello_client::trello::filter::{BoardFilter, CardFilter};
use trello_client::trello::httptransport::HttpTransport;
use trello_client::trello::member::Member;

use trello_client_integration_tests::config::load_secrets;

fn create_client() -> Result<(Client<HttpTransport>, String), String> {
    let secrets = load_secrets()?;

    let config = ClientConfig {
        key: secrets.key,
        token: secrets.token,
        ..ClientConfig::default()
    };

    let client = Client::from_config(&config).map_err(|e| e.to_string())?;
    Ok((client, secrets.username))
}

#[tokio::test]
#[ignore = "requires secrets.json with live Trello credentials"]
async fn member_smoke() -> Result<(), String> {
    let (client, username) = create_client()?;

    let me = verify_credentials(&client).await.map_err(|e| e.to_string())?;
    assert!(me.id().is_some());

    let member = Member::find(&client, &username)
        .await
        .map_err(|e| e.to_string())?;
    assert_eq!(member.username(), Some(username.as_str()));

    Ok(())
}

#[tokio::test]
#[ignore = "requires secrets.json with live Trello credentials"]
async fn relationship_smoke() -> Result<(), String> {
    let (client, username) = create_client()?;

    let member = Member::find(&client, &username)
        .await
        .map_err(|e| e.to_string())?;

    let boards = member
        .boards(&client, Some(BoardFilter::Open))
        .await
        .map_err(|e| e.to_string())?;
    assert!(
        boards.iter().all(|board| board.closed() != Some(true)),
        "Expected only open boards"
    );

    member
        .cards(&client, Some(CardFilter::All))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
