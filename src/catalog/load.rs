use std::fs;
use std::path::Path;

use crate::error::CatalogError;

use super::model::{Album, Catalog, Track};

/// Sequential reader over catalog lines that remembers the current line number.
struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
            line: 0,
        }
    }

    /// Next text field. Only the line terminator is stripped.
    fn field(&mut self, expected: &'static str) -> Result<String, CatalogError> {
        self.line += 1;
        match self.inner.next() {
            Some(l) => Ok(l.strip_suffix('\r').unwrap_or(l).to_string()),
            None => Err(CatalogError::Truncated {
                line: self.line,
                expected,
            }),
        }
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, CatalogError> {
        let raw = self.field(expected)?;
        raw.trim()
            .parse::<usize>()
            .map_err(|_| CatalogError::InvalidCount {
                line: self.line,
                found: raw,
            })
    }
}

/// Parse catalog text into a `Catalog`.
///
/// Reads exactly the declared counts; anything after the last album is ignored.
/// Declared counts are never used to pre-allocate, so a huge count on short
/// text ends in `Truncated`.
pub fn parse(text: &str) -> Result<Catalog, CatalogError> {
    let mut lines = Lines::new(text);
    let album_count = lines.count("album count")?;

    let mut albums = Vec::new();
    for _ in 0..album_count {
        let title = lines.field("album title")?;
        let artist = lines.field("album artist")?;
        let artwork = lines.field("artwork filename")?;
        let track_count = lines.count("track count")?;

        let mut tracks = Vec::new();
        for _ in 0..track_count {
            let name = lines.field("track name")?;
            let location = lines.field("track location")?;
            tracks.push(Track { name, location });
        }

        albums.push(Album {
            title,
            artist,
            artwork,
            tracks,
        });
    }

    Ok(Catalog::new(albums))
}

/// Read and parse the catalog file at `path`.
///
/// The returned catalog resolves relative locations against the file's directory.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(parse(&text)?.with_base_dir(base_dir))
}
