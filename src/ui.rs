//! UI rendering for the album shelf.
//!
//! Everything is painted at the fixed positions in `crate::layout`, so the
//! input dispatcher can hit-test against exactly what is on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::{App, SessionState};
use crate::artwork::ArtworkCache;
use crate::config::UiSettings;
use crate::layout::{self, CANVAS, Hit};

const CONTROLS: &str =
    "[h/l ←/→] albums | [j/k ↑/↓] tracks | [click] select/play | [r] repeat | [q] quit";

const HOVER: Color = Color::DarkGray;

/// Render the whole shelf for the current `app` state.
pub fn draw(frame: &mut Frame, app: &App, artwork: &mut ArtworkCache, ui: &UiSettings) {
    let area = frame.area();
    if area.width < CANVAS.width || area.height < CANVAS.height {
        draw_too_small(frame, area);
        return;
    }

    let canvas = Block::default()
        .borders(Borders::ALL)
        .title(ui.title.as_str())
        .title_alignment(Alignment::Center);
    frame.render_widget(canvas, CANVAS);

    draw_album_strip(frame, app, artwork);
    draw_track_list(frame, app);
    draw_now_playing(frame, app, artwork);
    draw_repeat_button(frame, app);
    draw_progress(frame, app);

    if let Some(msg) = &app.status {
        let status = Paragraph::new(msg.as_str()).fg(Color::Red);
        frame.render_widget(status, layout::STATUS_LINE);
    }
    frame.render_widget(Paragraph::new(CONTROLS).dim(), layout::CONTROLS_LINE);
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: need {}x{}, have {}x{}",
        CANVAS.width, CANVAS.height, area.width, area.height
    );
    let p = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(p, area);
}

/// A small bordered button, reversed while hovered and dimmed when inert.
fn button(label: &str, hovered: bool, active: bool) -> Paragraph<'_> {
    let mut style = Style::default();
    if !active {
        style = style.add_modifier(Modifier::DIM);
    } else if hovered {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL))
}

fn placeholder(frame: &mut Frame, area: Rect, color: Color) {
    let top = area.height.saturating_sub(1) / 2;
    let mut text: Vec<Line> = (0..top).map(|_| Line::default()).collect();
    text.push(Line::from("no artwork"));
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(color).fg(Color::White));
    frame.render_widget(p, area);
}

/// Artwork into `area`, or a colored "no artwork" block.
fn draw_art(frame: &mut Frame, area: Rect, artwork: &mut ArtworkCache, name: &str, fallback: Color) {
    match artwork.lines(name, area.width, area.height) {
        Some(lines) => frame.render_widget(Paragraph::new(lines.to_vec()), area),
        None => placeholder(frame, area, fallback),
    }
}

fn draw_album_strip(frame: &mut Frame, app: &App, artwork: &mut ArtworkCache) {
    let g = &app.geometry;
    let shown = app.visible_albums();
    let can_left = app.start_album > 0;
    let can_right = shown.end < app.catalog.len();

    frame.render_widget(
        button("◀", app.is_hovered(Hit::ScrollLeft), can_left),
        layout::SCROLL_LEFT,
    );
    frame.render_widget(
        button("▶", app.is_hovered(Hit::ScrollRight), can_right),
        layout::SCROLL_RIGHT,
    );

    if app.catalog.is_empty() {
        let p = Paragraph::new("The catalog has no albums.")
            .alignment(Alignment::Center)
            .dim();
        frame.render_widget(p, g.album_caption(1));
        return;
    }

    for (slot, index) in shown.enumerate() {
        let Some(album) = app.catalog.album(index) else {
            continue;
        };
        let tile = g.album_tile(slot);
        let selected = app.current_album == Some(index);
        let hovered = app.is_hovered(Hit::Album(slot));

        let art_area = if hovered || selected {
            let color = if selected { Color::Yellow } else { HOVER };
            let frame_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            let inner = frame_block.inner(tile);
            frame.render_widget(frame_block, tile);
            inner
        } else {
            tile
        };
        draw_art(frame, art_area, artwork, &album.artwork, Color::Blue);

        let mut title = Style::default().add_modifier(Modifier::BOLD);
        if selected {
            title = title.fg(Color::Yellow);
        }
        let caption = Line::from(vec![
            Span::styled(album.title.as_str(), title),
            Span::raw(" · "),
            Span::styled(album.artist.as_str(), Style::default().dim()),
        ]);
        frame.render_widget(
            Paragraph::new(caption).alignment(Alignment::Center),
            g.album_caption(slot),
        );
    }
}

fn draw_track_list(frame: &mut Frame, app: &App) {
    let g = &app.geometry;
    let Some(album) = app.current_album() else {
        frame.render_widget(
            Paragraph::new("Select an album").dim(),
            layout::TRACK_HEADER,
        );
        return;
    };

    let header = Line::from(vec![
        Span::raw("Tracks: "),
        Span::styled(album.title.as_str(), Style::default().bold()),
        Span::raw(format!(" ({})", album.tracks.len())),
    ]);
    frame.render_widget(Paragraph::new(header), layout::TRACK_HEADER);

    for (row, index) in app.visible_tracks().enumerate() {
        let Some(track) = album.tracks.get(index) else {
            continue;
        };
        let mut style = Style::default();
        if app.current_track == Some(index) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if app.is_hovered(Hit::Track(row)) {
            style = style.bg(HOVER);
        }
        let text = format!("{:>2}. {}", index + 1, track.name);
        frame.render_widget(Paragraph::new(text).style(style), g.track_row(row));
    }

    if app.tracks_overflow() {
        let arrow = |label: &'static str, hit: Hit, active: bool| {
            let mut style = if active {
                Style::default()
            } else {
                Style::default().dim()
            };
            if active && app.is_hovered(hit) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
        };
        let shown = app.visible_tracks();
        frame.render_widget(
            arrow("▲", Hit::TracksUp, app.start_track > 0),
            g.tracks_up(),
        );
        frame.render_widget(
            arrow("▼", Hit::TracksDown, shown.end < album.tracks.len()),
            g.tracks_down(),
        );
    }
}

fn session_label(session: SessionState) -> &'static str {
    match session {
        SessionState::Idle => "Stopped",
        SessionState::Playing => "Playing",
        SessionState::Finished => "Finished",
        SessionState::Failed => "Failed",
    }
}

fn draw_now_playing(frame: &mut Frame, app: &App, artwork: &mut ArtworkCache) {
    let Some((_, album, track)) = app.now_playing() else {
        let p = Paragraph::new("Nothing is playing").dim();
        frame.render_widget(p, layout::NOW_PLAYING_INFO);
        placeholder(frame, layout::NOW_PLAYING_ART, Color::DarkGray);
        return;
    };

    draw_art(
        frame,
        layout::NOW_PLAYING_ART,
        artwork,
        &album.artwork,
        Color::DarkGray,
    );

    let info = vec![
        Line::from(Span::styled(track.name.as_str(), Style::default().bold())),
        Line::from(format!("Artist: {}", album.artist)),
        Line::from(format!("Album: {}", album.title)),
        Line::from(session_label(app.session).dim()),
    ];
    frame.render_widget(Paragraph::new(info), layout::NOW_PLAYING_INFO);
}

fn draw_repeat_button(frame: &mut Frame, app: &App) {
    let label = if app.repeat { "Repeat: ON" } else { "Repeat: OFF" };
    let mut p = button(label, app.is_hovered(Hit::Repeat), true);
    if app.repeat {
        p = p.fg(Color::Green);
    }
    frame.render_widget(p, layout::REPEAT_BUTTON);
}

fn draw_progress(frame: &mut Frame, app: &App) {
    if app.last_played.is_none() || app.session == SessionState::Failed {
        return;
    }
    let ratio = f64::from(app.progress.clamp(0.0, 1.0));
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .use_unicode(true);
    frame.render_widget(gauge, layout::PROGRESS_BAR);
}

#[cfg(test)]
mod tests;
