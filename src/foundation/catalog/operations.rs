//! Folding parsed files into the catalog.

use crate::foundation::catalog::{Album, Catalog, IngestError, ReleaseDate, Song};
use crate::foundation::utils::format_duration;
use crate::tags::TrackTags;
use std::path::Path;

/// How the catalog accepts new artists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogMode {
    /// Every well-formed file is ingested.
    #[default]
    Full,
    /// A file is dropped when any artist already in the catalog starts with
    /// the same lowercase character as its grouping artist. The result
    /// depends on ingestion order, and an artist that is already present
    /// blocks its own later files too.
    Alphabetical,
}

/// What happened to a record handed to [`ingest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Added,
    Duplicate,
    SkippedByLetter,
}

/// A file's tags after checking that everything mandatory is present.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub grouping_artist: String,
    pub artists: Vec<String>,
    pub album: String,
    pub title: String,
    pub track_number: u32,
    pub date: Option<String>,
    pub genres: Vec<String>,
    pub composers: Vec<String>,
    pub track_total: Option<u32>,
    pub disc_number: Option<u32>,
    pub disc_total: Option<u32>,
    pub duration: String,
    pub filepath: String,
}

impl TrackRecord {
    /// Validates `tags` read from `path`.
    ///
    /// Nothing is written to the catalog until a record exists, so a
    /// rejected file never leaves behind an empty artist or album.
    pub fn from_tags(path: &Path, tags: TrackTags) -> Result<Self, IngestError> {
        let grouping_artist = tags
            .grouping_artist()
            .ok_or(IngestError::MissingArtist)?
            .to_string();
        if tags.artists.is_empty() {
            return Err(IngestError::MissingTrackArtist);
        }
        let album = tags.album.ok_or(IngestError::MissingAlbum)?;
        let title = tags.title.ok_or(IngestError::MissingTitle)?;
        let track_number = tags.track_number.ok_or(IngestError::MissingTrackNumber)?;

        Ok(Self {
            grouping_artist,
            artists: tags.artists,
            album,
            title,
            track_number,
            date: tags.date,
            genres: tags.genres,
            composers: tags.composers,
            track_total: tags.track_total,
            disc_number: tags.disc_number,
            disc_total: tags.disc_total,
            duration: format_duration(tags.duration_secs),
            filepath: path.to_string_lossy().into_owned(),
        })
    }
}

/// Folds one record into the catalog.
///
/// Albums are matched by exact title within the artist and songs by exact
/// title within the album. The first album seen for a title keeps its
/// album-level fields, and a repeated song title is dropped.
pub fn ingest(catalog: &mut Catalog, record: TrackRecord, mode: CatalogMode) -> IngestOutcome {
    if mode == CatalogMode::Alphabetical && letter_taken(catalog, &record.grouping_artist) {
        return IngestOutcome::SkippedByLetter;
    }

    let artist = catalog.artist_entry(&record.grouping_artist);

    let album = match artist.albums.iter().position(|a| a.title == record.album) {
        Some(i) => &mut artist.albums[i],
        None => {
            artist.albums.push(new_album(&record));
            let last = artist.albums.len() - 1;
            &mut artist.albums[last]
        }
    };

    if album.has_song(&record.title) {
        return IngestOutcome::Duplicate;
    }

    album.songs.push(Song {
        artists: record.artists,
        track_number: Some(record.track_number),
        title: record.title,
        duration: record.duration,
        filepath: Some(record.filepath),
        disc_number: record.disc_number.map(|n| n.to_string()),
    });
    IngestOutcome::Added
}

fn new_album(record: &TrackRecord) -> Album {
    Album {
        title: record.album.clone(),
        date: ReleaseDate::from(record.date.clone()),
        songs: Vec::new(),
        total_tracks: record.track_total,
        total_discs: record.disc_total,
        genres: non_empty(&record.genres),
        composers: non_empty(&record.composers),
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

/// Whether some artist key already starts with the candidate's first
/// lowercase character.
fn letter_taken(catalog: &Catalog, artist: &str) -> bool {
    let Some(first) = artist.to_lowercase().chars().next() else {
        return false;
    };
    catalog
        .artist_names()
        .any(|name| name.to_lowercase().starts_with(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(artist: &str, album: &str, title: &str, track: u32) -> TrackTags {
        TrackTags {
            artists: vec![artist.to_string()],
            album: Some(album.to_string()),
            title: Some(title.to_string()),
            track_number: Some(track),
            duration_secs: 179.4,
            ..Default::default()
        }
    }

    fn record(tags: TrackTags) -> TrackRecord {
        TrackRecord::from_tags(Path::new("./music/file.flac"), tags).unwrap()
    }

    #[test]
    fn test_from_tags_requires_artist() {
        let mut t = tags("X", "Album", "Song", 1);
        t.artists.clear();
        let result = TrackRecord::from_tags(Path::new("a.flac"), t);
        assert_eq!(result, Err(IngestError::MissingArtist));
    }

    #[test]
    fn test_from_tags_album_artist_without_track_artist() {
        let mut t = tags("X", "Album", "Song", 1);
        t.artists.clear();
        t.album_artist = Some("Band".to_string());
        let result = TrackRecord::from_tags(Path::new("a.flac"), t);
        assert_eq!(result, Err(IngestError::MissingTrackArtist));
    }

    #[test]
    fn test_from_tags_requires_album_title_and_track() {
        let mut t = tags("X", "Album", "Song", 1);
        t.album = None;
        assert_eq!(
            TrackRecord::from_tags(Path::new("a.flac"), t),
            Err(IngestError::MissingAlbum)
        );

        let mut t = tags("X", "Album", "Song", 1);
        t.title = None;
        assert_eq!(
            TrackRecord::from_tags(Path::new("a.flac"), t),
            Err(IngestError::MissingTitle)
        );

        let mut t = tags("X", "Album", "Song", 1);
        t.track_number = None;
        assert_eq!(
            TrackRecord::from_tags(Path::new("a.flac"), t),
            Err(IngestError::MissingTrackNumber)
        );
    }

    #[test]
    fn test_from_tags_formats_duration_and_path() {
        let r = record(tags("X", "Album", "Song", 1));
        assert_eq!(r.duration, "00:02:59");
        assert_eq!(r.filepath, "./music/file.flac");
        assert_eq!(r.grouping_artist, "X");
    }

    #[test]
    fn test_ingest_groups_songs_into_one_album() {
        let mut catalog = Catalog::new();
        ingest(&mut catalog, record(tags("Y", "X", "First", 1)), CatalogMode::Full);
        ingest(&mut catalog, record(tags("Y", "X", "Second", 2)), CatalogMode::Full);

        let artist = catalog.get("Y").unwrap();
        assert_eq!(artist.albums.len(), 1);
        let titles: Vec<_> = artist.albums[0].songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_ingest_groups_by_album_artist() {
        let mut catalog = Catalog::new();
        let mut t = tags("Guest", "Split", "Song", 1);
        t.album_artist = Some("Host".to_string());
        ingest(&mut catalog, record(t), CatalogMode::Full);

        assert!(catalog.contains("Host"));
        assert!(!catalog.contains("Guest"));
        assert_eq!(catalog.get("Host").unwrap().albums[0].songs[0].artists, vec!["Guest"]);
    }

    #[test]
    fn test_ingest_drops_duplicate_song() {
        let mut catalog = Catalog::new();
        let first = ingest(&mut catalog, record(tags("Y", "X", "Same", 1)), CatalogMode::Full);
        let second = ingest(&mut catalog, record(tags("Y", "X", "Same", 7)), CatalogMode::Full);

        assert_eq!(first, IngestOutcome::Added);
        assert_eq!(second, IngestOutcome::Duplicate);
        let songs = &catalog.get("Y").unwrap().albums[0].songs;
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].track_number, Some(1));
    }

    #[test]
    fn test_ingest_titles_are_case_sensitive() {
        let mut catalog = Catalog::new();
        ingest(&mut catalog, record(tags("Y", "Album", "Song", 1)), CatalogMode::Full);
        ingest(&mut catalog, record(tags("Y", "album", "song", 1)), CatalogMode::Full);

        let albums = &catalog.get("Y").unwrap().albums;
        assert_eq!(albums.len(), 2);
    }

    #[test]
    fn test_first_album_keeps_its_fields() {
        let mut catalog = Catalog::new();
        let mut first = tags("Y", "X", "One", 1);
        first.date = Some("1999".to_string());
        first.genres = vec!["Rock".to_string()];
        let mut second = tags("Y", "X", "Two", 2);
        second.date = Some("2005".to_string());
        second.track_total = Some(12);

        ingest(&mut catalog, record(first), CatalogMode::Full);
        ingest(&mut catalog, record(second), CatalogMode::Full);

        let album = &catalog.get("Y").unwrap().albums[0];
        assert_eq!(album.date, ReleaseDate::Known("1999".to_string()));
        assert_eq!(album.genres, Some(vec!["Rock".to_string()]));
        assert_eq!(album.total_tracks, None);
    }

    #[test]
    fn test_new_album_optional_fields() {
        let mut catalog = Catalog::new();
        let mut t = tags("Y", "X", "One", 1);
        t.track_total = Some(10);
        t.disc_total = Some(2);
        t.disc_number = Some(1);
        t.composers = vec!["Bach".to_string()];
        ingest(&mut catalog, record(t), CatalogMode::Full);

        let album = &catalog.get("Y").unwrap().albums[0];
        assert_eq!(album.date, ReleaseDate::Unknown);
        assert_eq!(album.total_tracks, Some(10));
        assert_eq!(album.total_discs, Some(2));
        assert_eq!(album.composers, Some(vec!["Bach".to_string()]));
        assert_eq!(album.genres, None);
        assert_eq!(album.songs[0].disc_number.as_deref(), Some("1"));
    }

    #[test]
    fn test_alphabetical_mode_one_artist_per_letter() {
        let mut catalog = Catalog::new();
        let outcomes: Vec<_> = ["Abba", "Acorn", "Beta"]
            .iter()
            .map(|name| {
                ingest(
                    &mut catalog,
                    record(tags(name, "Album", "Song", 1)),
                    CatalogMode::Alphabetical,
                )
            })
            .collect();

        assert_eq!(
            outcomes,
            vec![
                IngestOutcome::Added,
                IngestOutcome::SkippedByLetter,
                IngestOutcome::Added
            ]
        );
        assert_eq!(catalog.artist_names().collect::<Vec<_>>(), vec!["Abba", "Beta"]);
    }

    #[test]
    fn test_alphabetical_mode_ignores_case() {
        let mut catalog = Catalog::new();
        ingest(&mut catalog, record(tags("abba", "A", "S", 1)), CatalogMode::Alphabetical);
        let outcome =
            ingest(&mut catalog, record(tags("ACORN", "A", "S", 1)), CatalogMode::Alphabetical);
        assert_eq!(outcome, IngestOutcome::SkippedByLetter);
    }

    #[test]
    fn test_alphabetical_mode_blocks_same_artist() {
        let mut catalog = Catalog::new();
        ingest(&mut catalog, record(tags("Abba", "A", "One", 1)), CatalogMode::Alphabetical);
        let outcome =
            ingest(&mut catalog, record(tags("Abba", "A", "Two", 2)), CatalogMode::Alphabetical);

        assert_eq!(outcome, IngestOutcome::SkippedByLetter);
        assert_eq!(catalog.song_count(), 1);
    }

    #[test]
    fn test_ingest_never_leaves_empty_containers() {
        let mut catalog = Catalog::new();
        for mode in [CatalogMode::Alphabetical, CatalogMode::Full] {
            for (artist, album, title) in [
                ("Abba", "Gold", "SOS"),
                ("Acorn", "Trees", "Oak"),
                ("Abba", "Gold", "SOS"),
                ("Beta", "Max", "Tape"),
            ] {
                ingest(&mut catalog, record(tags(artist, album, title, 1)), mode);
            }
        }

        assert_eq!(catalog.len(), 3);
        for name in ["Abba", "Acorn", "Beta"] {
            let artist = catalog.get(name).unwrap();
            assert!(!artist.albums.is_empty(), "{} has no albums", name);
            assert!(artist.albums.iter().all(|album| !album.songs.is_empty()));
        }
    }
}
