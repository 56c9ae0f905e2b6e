use std::path::{Path, PathBuf};

/// A single playable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub location: String,
}

/// A titled, ordered collection of tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    pub artist: String,
    /// Artwork filename, relative to the artwork directory.
    pub artwork: String,
    pub tracks: Vec<Track>,
}

/// Stable handle to one track of the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrackRef {
    pub album: usize,
    pub track: usize,
}

impl TrackRef {
    pub fn new(album: usize, track: usize) -> Self {
        Self { album, track }
    }
}

/// All albums, in declared order, plus the directory relative paths resolve against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: Vec<Album>,
    base_dir: PathBuf,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums,
            base_dir: PathBuf::new(),
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    pub fn track(&self, r: TrackRef) -> Option<&Track> {
        self.albums.get(r.album)?.tracks.get(r.track)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `path` against the catalog directory unless it is already absolute.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Filesystem location of a track's audio file.
    pub fn track_path(&self, track: &Track) -> PathBuf {
        self.resolve(&track.location)
    }
}
