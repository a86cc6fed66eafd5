use crate::constants::{COLL_NAME, DB_NAME};
use crate::errors::ApiError;
use crate::models::player::PlayerRecord;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use std::future::Future;
use tracing::debug;

/// Read access to the externally populated player collection.
///
/// Every call hands back owned records, so callers may reorder them freely.
pub trait PlayerStore: Send + Sync + 'static {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<PlayerRecord>, ApiError>>;

    fn fetch_by_id(&self, id: &str)
        -> impl Future<Output = Result<Option<PlayerRecord>, ApiError>>;
}

#[derive(Clone, Debug)]
pub struct MongoPlayerStore {
    client: Client,
}

impl MongoPlayerStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn get_collection(&self) -> Collection<PlayerRecord> {
        self.client.database(DB_NAME).collection(COLL_NAME)
    }
}

// The Mongo `_id` is not part of the API.
fn hide_object_id() -> Document {
    doc! { "_id": 0 }
}

// Each query checks a pooled connection out of the client and returns it when
// the operation or its cursor is dropped, whether or not it succeeded.
impl PlayerStore for MongoPlayerStore {
    async fn fetch_all(&self) -> Result<Vec<PlayerRecord>, ApiError> {
        let mut cursor = self
            .get_collection()
            .find(doc! {})
            .projection(hide_object_id())
            .await?;
        let mut players = Vec::new();

        while let Some(player) = cursor.try_next().await? {
            players.push(player);
        }

        debug!(count = players.len(), "fetched player documents");
        Ok(players)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<PlayerRecord>, ApiError> {
        let player = self
            .get_collection()
            .find_one(doc! { "id": id })
            .projection(hide_object_id())
            .await?;

        debug!(id, found = player.is_some(), "looked up player document");
        Ok(player)
    }
}
