//! UI rendering functions for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::player::PlaybackState;
use crate::surface::Controls;
use crate::types::format_duration;

use super::state::App;

/// Draw the UI.
pub fn draw(frame: &mut Frame, app: &mut App, state: &PlaybackState, progress: u64) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Catalog + now playing
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Controls
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_header(frame, app, state, chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_catalog(frame, app, state, content_chunks[0]);
    draw_now_playing(frame, state, content_chunks[1]);
    draw_progress(frame, state, progress, chunks[2]);
    draw_controls(frame, app, state, chunks[3]);
    draw_footer(frame, chunks[4]);

    if let Some(error) = &app.error_message {
        draw_error_popup(frame, error);
    }

    if app.show_help {
        draw_help_modal(frame, app);
    }
}

fn draw_header(frame: &mut Frame, app: &App, state: &PlaybackState, area: Rect) {
    let flag = |on: bool, label: &'static str| {
        if on {
            Span::styled(format!("[{}]", label), Style::default().fg(Color::Green))
        } else {
            Span::raw("")
        }
    };

    let mut spans = vec![
        Span::styled(
            "Now playing",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        flag(state.is_shuffling, "shuffle"),
        Span::raw(" "),
        flag(state.is_looping, "repeat"),
    ];

    if let Some(status) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_catalog(frame: &mut Frame, app: &mut App, state: &PlaybackState, area: Rect) {
    let playing_url = state.current_episode().map(|e| e.url.as_str());

    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .map(|e| {
            if Some(e.url.as_str()) == playing_url {
                ListItem::new(format!("♪ {}", e.to_display()))
                    .style(Style::default().fg(Color::Green))
            } else {
                ListItem::new(format!("  {}", e.to_display()))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Episodes"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.catalog_list_state);
}

fn draw_now_playing(frame: &mut Frame, state: &PlaybackState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Player");

    let Some(episode) = state.current_episode() else {
        let empty = Paragraph::new("Select a podcast to listen")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            episode.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(episode.members.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("Cover: {}", episode.thumbnail),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(
                "Episode {} of {}",
                state.active_index + 1,
                state.episode_queue.len()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}

fn draw_progress(frame: &mut Frame, state: &PlaybackState, progress: u64, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(area);

    let duration = state.current_episode().map_or(0, |e| e.duration);
    let ratio = if duration == 0 {
        0.0
    } else {
        (progress as f64 / duration as f64).clamp(0.0, 1.0)
    };

    let elapsed = Paragraph::new(format_duration(progress))
        .block(Block::default().borders(Borders::ALL));
    let total = Paragraph::new(format_duration(duration))
        .block(Block::default().borders(Borders::ALL));

    let gauge_style = if state.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).bg(Color::Magenta)
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(gauge_style)
        .label("")
        .ratio(ratio);

    frame.render_widget(elapsed, chunks[0]);
    frame.render_widget(gauge, chunks[1]);
    frame.render_widget(total, chunks[2]);
}

/// First key bound to a command, for button labels.
fn key_label(binding: &[String]) -> &str {
    binding.first().map_or("-", |s| s.as_str())
}

fn draw_controls(frame: &mut Frame, app: &App, state: &PlaybackState, area: Rect) {
    let controls = Controls::for_state(state);
    let kb = &app.keybindings;

    let button = |label: String, enabled: bool, active: bool| {
        let style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(label, style)
    };

    let play_label = if state.is_playing { "Pause" } else { "Play" };

    let row = Line::from(vec![
        button(
            format!("[{}] Shuffle", key_label(&kb.shuffle)),
            controls.shuffle,
            state.is_shuffling,
        ),
        Span::raw("   "),
        button(
            format!("[{}] Previous", key_label(&kb.previous)),
            controls.previous,
            false,
        ),
        Span::raw("   "),
        button(
            format!("[{}] {}", key_label(&kb.toggle_play), play_label),
            controls.play,
            false,
        ),
        Span::raw("   "),
        button(
            format!("[{}] Next", key_label(&kb.next)),
            controls.next,
            false,
        ),
        Span::raw("   "),
        button(
            format!("[{}] Repeat", key_label(&kb.repeat)),
            controls.repeat,
            state.is_looping,
        ),
    ]);

    let widget = Paragraph::new(row).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(
        "[↑↓] navigate  [Enter] play  [a] play from here  [←→] seek  [?] help  [q] quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_error_popup(frame: &mut Frame, error: &str) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, area);
}

fn draw_help_modal(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let kb = &app.keybindings;
    let entry = |binding: &[String], what: &str| format!("  {:<12}{}\n", binding.join(" / "), what);

    let content = format!(
        "Catalog\n───────\n{}{}{}{}\nPlayback\n────────\n{}{}{}{}{}{}{}\n{}  Ctrl+C      Force quit\n\nPress ? to close",
        entry(&kb.up, "Move up"),
        entry(&kb.down, "Move down"),
        entry(&kb.play, "Play selected episode"),
        entry(&kb.play_all, "Play all from selected"),
        entry(&kb.toggle_play, "Play / pause"),
        entry(&kb.next, "Next episode"),
        entry(&kb.previous, "Previous episode"),
        entry(&kb.shuffle, "Toggle shuffle"),
        entry(&kb.repeat, "Toggle repeat"),
        entry(&kb.seek_forward, "Seek forward"),
        entry(&kb.seek_backward, "Seek backward"),
        entry(&kb.quit, "Quit"),
    );

    let help_text = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help_text, area);
}

/// Helper function to create a centered rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
