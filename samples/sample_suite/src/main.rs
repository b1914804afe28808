mod config;
mod scenarios;

use trello_client::config::ClientConfig;
use trello_client::trello::client::Client;

use config::load_secrets;

#[tokio::main]
async fn main() -> Result<(), String> {
    let secrets = load_secrets()?;

    let config = ClientConfig {
        key: secrets.key.clone(),
        token: secrets.token.clone(),
        ..ClientConfig::default()
    };

    let client = Client::from_config(&config).map_err(|e| e.to_string())?;

    scenarios::member::run(&client, &secrets).await?;
    scenarios::relationships::run(&client, &secrets).await?;

    Ok(())
}
