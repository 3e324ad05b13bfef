use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// The whole library, keyed by grouping artist.
///
/// Artists are kept in insertion order. The order is only meaningful for
/// the alphabetical sampling mode and for the shuffled compact output.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<(String, Artist)>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Artist {
    pub albums: Vec<Album>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Album {
    pub title: String,
    pub date: ReleaseDate,
    pub songs: Vec<Song>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tracks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composers: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Song {
    pub artists: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
    pub title: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<String>,
}

/// Album release date as tagged. An untagged date is written as `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseDate {
    Known(String),
    Unknown,
}

impl From<Option<String>> for ReleaseDate {
    fn from(date: Option<String>) -> Self {
        date.map_or(ReleaseDate::Unknown, ReleaseDate::Known)
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReleaseDate::Known(date) => serializer.serialize_str(date),
            ReleaseDate::Unknown => serializer.serialize_i64(-1),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Artist> {
        self.index.get(name).map(|&i| &self.artists[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Artist names in their current order.
    pub fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn artists_mut(&mut self) -> impl Iterator<Item = &mut Artist> {
        self.artists.iter_mut().map(|(_, artist)| artist)
    }

    pub(crate) fn albums_mut(&mut self) -> impl Iterator<Item = &mut Album> {
        self.artists_mut().flat_map(|artist| artist.albums.iter_mut())
    }

    pub fn album_count(&self) -> usize {
        self.artists.iter().map(|(_, a)| a.albums.len()).sum()
    }

    pub fn song_count(&self) -> usize {
        self.artists
            .iter()
            .flat_map(|(_, a)| a.albums.iter())
            .map(|album| album.songs.len())
            .sum()
    }

    /// Returns the artist stored under `name`, appending an empty one first
    /// if it is not there yet. Callers must give a new artist an album before
    /// handing the catalog back out.
    pub(crate) fn artist_entry(&mut self, name: &str) -> &mut Artist {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.artists.push((name.to_string(), Artist::default()));
                let i = self.artists.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.artists[i].1
    }

    /// Takes the artists out in their current order, leaving the catalog empty.
    pub(crate) fn take_entries(&mut self) -> Vec<(String, Artist)> {
        self.index.clear();
        std::mem::take(&mut self.artists)
    }

    /// Rebuilds the catalog from an ordered list of artists.
    pub(crate) fn from_entries(entries: Vec<(String, Artist)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        Self {
            artists: entries,
            index,
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.artists.iter().map(|(name, artist)| (name, artist)))
    }
}

impl Album {
    pub fn has_song(&self, title: &str) -> bool {
        self.songs.iter().any(|song| song.title == title)
    }
}
