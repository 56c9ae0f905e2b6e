//! Album artwork, decoded once and rendered as half-block cells.
//!
//! Each terminal cell shows two image pixels: the upper one as the
//! foreground of `▀`, the lower one as its background.

use std::collections::HashMap;
use std::path::PathBuf;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

enum Entry {
    /// Missing or undecodable; never retried.
    Missing,
    Loaded {
        image: DynamicImage,
        rendered: HashMap<(u16, u16), Vec<Line<'static>>>,
    },
}

/// Per-asset cache keyed by the catalog's artwork reference.
pub struct ArtworkCache {
    dir: PathBuf,
    entries: HashMap<String, Entry>,
}

impl ArtworkCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            entries: HashMap::new(),
        }
    }

    /// Rendered lines for `name` scaled to `width` x `height` cells, or `None`
    /// when the artwork cannot be shown.
    pub fn lines(&mut self, name: &str, width: u16, height: u16) -> Option<&[Line<'static>]> {
        if width == 0 || height == 0 {
            return None;
        }
        if !self.entries.contains_key(name) {
            let entry = self.load(name);
            self.entries.insert(name.to_string(), entry);
        }
        match self.entries.get_mut(name)? {
            Entry::Missing => None,
            Entry::Loaded { image, rendered } => Some(
                rendered
                    .entry((width, height))
                    .or_insert_with(|| half_blocks(image, width, height))
                    .as_slice(),
            ),
        }
    }

    fn load(&self, name: &str) -> Entry {
        let path = self.dir.join(name);
        match image::open(&path) {
            Ok(image) => {
                log::debug!("loaded artwork {}", path.display());
                Entry::Loaded {
                    image,
                    rendered: HashMap::new(),
                }
            }
            Err(e) => {
                log::warn!("artwork unavailable {}: {e}", path.display());
                Entry::Missing
            }
        }
    }
}

fn rgb(img: &RgbImage, x: u32, y: u32) -> Color {
    let p = img.get_pixel(x, y);
    Color::Rgb(p[0], p[1], p[2])
}

fn half_blocks(image: &DynamicImage, width: u16, height: u16) -> Vec<Line<'static>> {
    let w = u32::from(width);
    let h = u32::from(height) * 2;
    let scaled = image.resize_exact(w, h, FilterType::Triangle).to_rgb8();

    (0..h)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..w)
                .map(|x| {
                    Span::styled(
                        "▀",
                        Style::default()
                            .fg(rgb(&scaled, x, y))
                            .bg(rgb(&scaled, x, y + 1)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
