use sea_orm::ActiveValue as AV;
use serde::{Deserialize, Serialize};

use crate::{
    entity::{album, lyric, track, video},
    util::lenient,
};

/// An album row together with its tracks, as listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumListing {
    #[serde(flatten)]
    pub album: album::Model,
    pub tracks: Vec<TrackSummary>,
}

/// The part of a track that is nested under its album.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub id: i32,
    pub title: String,
    pub audio_url: String,
    pub duration: Option<f64>,
}

impl From<track::Model> for TrackSummary {
    fn from(track: track::Model) -> Self {
        TrackSummary {
            id: track.id,
            title: track.title,
            audio_url: track.audio_url,
            duration: track.duration,
        }
    }
}

/// Body of a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Created {
    pub id: i32,
    pub success: bool,
}

impl Created {
    pub fn new(id: i32) -> Self {
        Created { id, success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTrack {
    #[serde(default, deserialize_with = "lenient")]
    pub album_id: Option<i32>,
    pub title: String,
    pub audio_url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewVideo {
    pub title: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewLyric {
    pub title: String,
    pub text: String,
}

/// One row to insert, already shaped for its table.
#[derive(Debug, Clone, PartialEq)]
pub enum NewEntity {
    Album(NewAlbum),
    Track(NewTrack),
    Video(NewVideo),
    Lyric(NewLyric),
}

impl From<NewAlbum> for album::ActiveModel {
    fn from(new: NewAlbum) -> Self {
        album::ActiveModel {
            title: AV::Set(new.title),
            year: AV::Set(new.year),
            cover_url: AV::Set(new.cover_url),
            ..Default::default()
        }
    }
}

impl From<NewTrack> for track::ActiveModel {
    fn from(new: NewTrack) -> Self {
        track::ActiveModel {
            album_id: AV::Set(new.album_id),
            title: AV::Set(new.title),
            audio_url: AV::Set(new.audio_url),
            duration: AV::Set(new.duration),
            ..Default::default()
        }
    }
}

impl From<NewVideo> for video::ActiveModel {
    fn from(new: NewVideo) -> Self {
        video::ActiveModel {
            title: AV::Set(new.title),
            video_url: AV::Set(new.video_url),
            thumbnail_url: AV::Set(new.thumbnail_url),
            duration: AV::Set(new.duration),
            ..Default::default()
        }
    }
}

impl From<NewLyric> for lyric::ActiveModel {
    fn from(new: NewLyric) -> Self {
        lyric::ActiveModel {
            title: AV::Set(new.title),
            text: AV::Set(new.text),
            ..Default::default()
        }
    }
}
