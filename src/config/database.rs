use crate::config::settings::Settings;
use mongodb::Client;
use tracing::info;

/// Builds the client. Connections are opened lazily, per query.
pub async fn connect_to_mongodb(settings: &Settings) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(&settings.mongo_uri).await?;

    info!("MongoDB client ready");
    Ok(client)
}
