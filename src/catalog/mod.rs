use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{debug, trace};

use crate::entity::{album, lyric, track, video};

pub mod db;

pub mod migration;

pub mod types;

pub use db::{Connector, UrlConnector};
pub use types::{AlbumListing, Created, NewEntity, TrackSummary};

/// The catalog operations, run over one borrowed connection.
pub struct Catalog<'c> {
    db: &'c DatabaseConnection,
}

impl<'c> Catalog<'c> {
    pub fn new(db: &'c DatabaseConnection) -> Self {
        Catalog { db }
    }

    /// All albums, newest first, each with its tracks in id order.
    ///
    /// One LEFT JOIN query; albums without tracks come back with no tracks
    /// rather than a placeholder.
    pub async fn albums(&self) -> Result<Vec<AlbumListing>, DbErr> {
        let rows = album::Entity::find()
            .find_also_related(track::Entity)
            .order_by_desc(album::Column::CreatedAt)
            .order_by_desc(album::Column::Id)
            .order_by_asc(track::Column::Id)
            .all(self.db)
            .await?;
        debug!("albums: {} joined rows", rows.len());
        Ok(group_tracks(rows))
    }

    pub async fn videos(&self) -> Result<Vec<video::Model>, DbErr> {
        video::Entity::find()
            .order_by_desc(video::Column::CreatedAt)
            .order_by_desc(video::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn lyrics(&self) -> Result<Vec<lyric::Model>, DbErr> {
        lyric::Entity::find()
            .order_by_desc(lyric::Column::CreatedAt)
            .order_by_desc(lyric::Column::Id)
            .all(self.db)
            .await
    }

    /// Inserts one row and commits, returning the id the store assigned.
    pub async fn create(&self, new: NewEntity) -> Result<Created, DbErr> {
        let txn = self.db.begin().await?;
        let id = match new {
            NewEntity::Album(album) => {
                trace!("inserting album {:?}", album.title);
                album::Entity::insert(album::ActiveModel::from(album))
                    .exec(&txn)
                    .await?
                    .last_insert_id
            }
            NewEntity::Track(track) => {
                trace!("inserting track {:?} (album {:?})", track.title, track.album_id);
                track::Entity::insert(track::ActiveModel::from(track))
                    .exec(&txn)
                    .await?
                    .last_insert_id
            }
            NewEntity::Video(video) => {
                trace!("inserting video {:?}", video.title);
                video::Entity::insert(video::ActiveModel::from(video))
                    .exec(&txn)
                    .await?
                    .last_insert_id
            }
            NewEntity::Lyric(lyric) => {
                trace!("inserting lyric {:?}", lyric.title);
                lyric::Entity::insert(lyric::ActiveModel::from(lyric))
                    .exec(&txn)
                    .await?
                    .last_insert_id
            }
        };
        txn.commit().await?;
        Ok(Created::new(id))
    }
}

// rows arrive ordered by album, so each album's rows are contiguous
fn group_tracks(rows: Vec<(album::Model, Option<track::Model>)>) -> Vec<AlbumListing> {
    let mut listings: Vec<AlbumListing> = Vec::new();
    for (album, track) in rows {
        let same_album = listings
            .last()
            .is_some_and(|last| last.album.id == album.id);
        if !same_album {
            listings.push(AlbumListing {
                album,
                tracks: Vec::new(),
            });
        }
        if let (Some(track), Some(last)) = (track, listings.last_mut()) {
            last.tracks.push(track.into());
        }
    }
    listings
}
