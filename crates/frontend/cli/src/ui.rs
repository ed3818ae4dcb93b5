//! UI rendering for the entrance widget.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use raffle_frontend_core::EntranceView;

use crate::messages::MessageLog;
use crate::terminal::Tui;

/// Everything the render pass needs, borrowed from the app.
pub struct RenderContext<'a> {
    pub view: &'a EntranceView,
    pub messages: &'a MessageLog,
    pub network: &'a str,
    pub pending_entries: usize,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(3),
            ])
            .split(frame.area());

        render_header(frame, chunks[0], ctx);
        render_enter_button(frame, chunks[1], ctx);
        render_status(frame, chunks[2], ctx);
        render_messages(frame, chunks[3], ctx);
    })?;

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let (conn_text, conn_color) = if ctx.view.is_connected() {
        ("connected", Color::LightGreen)
    } else {
        ("disconnected", Color::Red)
    };

    let text = vec![Line::from(vec![
        Span::raw("Network: "),
        Span::styled(ctx.network, Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(conn_text, Style::default().fg(conn_color)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Raffle"));

    frame.render_widget(paragraph, area);
}

fn render_enter_button(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut spans = vec![Span::styled(
        "[ Enter Raffle ]",
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  press Enter or 'e', 'q' quits"));
    if ctx.pending_entries > 0 {
        spans.push(Span::styled(
            format!("  ({} pending)", ctx.pending_entries),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let text = vec![
        Line::from(Span::styled(
            ctx.view.winner_line(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::raw(format!("Players: {}", ctx.view.num_players()))),
    ];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Status"));

    frame.render_widget(paragraph, area);
}

fn render_messages(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let text: Vec<Line> = if ctx.messages.is_empty() {
        vec![Line::from(Span::styled(
            "No activity yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        ctx.messages
            .iter()
            .map(|m| Line::from(Span::raw(m.to_string())))
            .collect()
    };

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
