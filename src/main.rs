use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use swbox_leaderboard_api::config::cors::configure_cors;
use swbox_leaderboard_api::config::database::connect_to_mongodb;
use swbox_leaderboard_api::config::routes::configure_routes;
use swbox_leaderboard_api::config::settings::Settings;
use swbox_leaderboard_api::repositories::player_repository::MongoPlayerStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().map_err(std::io::Error::other)?;
    let address = settings.server_address();
    let mongodb_client = connect_to_mongodb(&settings)
        .await
        .map_err(std::io::Error::other)?;
    let store = web::Data::new(MongoPlayerStore::new(mongodb_client));

    info!(%address, "server is running");

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .app_data(store.clone())
            .configure(configure_routes::<MongoPlayerStore>)
    })
    .bind(address)?
    .run()
    .await
}
