//! UI rendering for the live session screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::duration::format_hms;
use crate::study::TimerState;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Layout: header, timer, module list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Timer
            Constraint::Min(0),    // Module list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_modules(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = format!(" swot ({} modules) ", app.modules.len());

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the live timer panel.
fn render_timer(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let state = app.timer_state();

    let color = match state {
        TimerState::Running => Color::Green,
        TimerState::Paused => Color::Yellow,
        TimerState::Idle => Color::DarkGray,
    };

    let title = app
        .selected_module()
        .map_or_else(|| " no module ".to_string(), |name| format!(" {name} "));

    let lines = vec![
        Line::from(Span::styled(
            app.timer_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.to_string(),
            Style::default().fg(color),
        )),
    ];

    let timer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(timer, area);
}

/// Render the module list.
fn render_modules(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .modules
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let is_selected = i == app.selected;
            let (sessions, seconds) = app.module_row(name);

            let spans = vec![
                Span::styled(
                    name.clone(),
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  {sessions} session{}", if sessions == 1 { "" } else { "s" }),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", format_hms(seconds)),
                    Style::default().fg(Color::Cyan),
                ),
            ];

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" modules ")
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("j/k:select | Space:start/pause | e:end | u:undo | x:remove | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
