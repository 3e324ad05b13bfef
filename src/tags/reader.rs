//! Reading embedded metadata out of audio files.
//!
//! The rest of the crate only sees [`TrackTags`], a flat record of optional
//! fields, through the [`TagReader`] trait. [`LoftyTagReader`] is the real
//! implementation; tests swap in a mock.

use crate::tags::ReadError;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};
use std::path::Path;

/// Tag values and stream info extracted from one audio file.
///
/// Every field is optional at this stage; deciding which ones are mandatory
/// happens when the tags are turned into a catalog record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTags {
    pub album_artist: Option<String>,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub genres: Vec<String>,
    pub composers: Vec<String>,
    pub track_number: Option<u32>,
    pub track_total: Option<u32>,
    pub disc_number: Option<u32>,
    pub disc_total: Option<u32>,
    pub duration_secs: f64,
}

impl TrackTags {
    /// The artist a file is grouped under: album artist if tagged, else the
    /// first track artist.
    pub fn grouping_artist(&self) -> Option<&str> {
        self.album_artist
            .as_deref()
            .or_else(|| self.artists.first().map(String::as_str))
    }
}

/// Source of [`TrackTags`] for a path on disk.
#[cfg_attr(test, mockall::automock)]
pub trait TagReader {
    fn read(&self, path: &Path) -> Result<TrackTags, ReadError>;
}

/// [`TagReader`] backed by the `lofty` crate.
///
/// Files are probed by content, so a mislabelled extension still parses as
/// long as the container itself is supported.
#[derive(Debug, Default)]
pub struct LoftyTagReader;

impl LoftyTagReader {
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for LoftyTagReader {
    fn read(&self, path: &Path) -> Result<TrackTags, ReadError> {
        let tagged = Probe::open(path)?.guess_file_type()?.read()?;
        let duration_secs = tagged.properties().duration().as_secs_f64();

        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or(ReadError::NoTags)?;

        let mut tags = tags_from_lofty(tag);
        tags.duration_secs = duration_secs;
        Ok(tags)
    }
}

fn tags_from_lofty(tag: &Tag) -> TrackTags {
    TrackTags {
        album_artist: first_string(tag, &ItemKey::AlbumArtist),
        artists: all_strings(tag, &ItemKey::TrackArtist),
        album: first_string(tag, &ItemKey::AlbumTitle),
        title: first_string(tag, &ItemKey::TrackTitle),
        date: first_string(tag, &ItemKey::RecordingDate)
            .or_else(|| first_string(tag, &ItemKey::Year)),
        genres: all_strings(tag, &ItemKey::Genre),
        composers: all_strings(tag, &ItemKey::Composer),
        track_number: tag.track(),
        track_total: tag.track_total(),
        disc_number: tag.disk(),
        disc_total: tag.disk_total(),
        duration_secs: 0.0,
    }
}

/// First non-blank value stored under `key`, exactly as tagged.
fn first_string(tag: &Tag, key: &ItemKey) -> Option<String> {
    tag.get_strings(key)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn all_strings(tag: &Tag, key: &ItemKey) -> Vec<String> {
    tag.get_strings(key)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}
