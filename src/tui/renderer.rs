//! Rendering functions for the board.

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::board::{Notice, Severity};
use crate::models::{Candidate, InterviewStep};

use super::state::Selection;
use super::theme::Theme;

/// Everything one frame needs, detached from the mutable app state.
pub struct BoardView {
    pub position_name: String,
    pub steps: Vec<InterviewStep>,
    pub grouped: HashMap<String, Vec<Candidate>>,
    pub notice: Option<Notice>,
    pub selection: Selection,
    /// Candidate id held by the drag session, if any.
    pub held: Option<i64>,
}

/// Render a full frame: header, notice bar, columns, footer.
pub fn render_board(frame: &mut Frame, view: &BoardView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_notice_bar(frame, chunks[1], &view.notice);
    render_columns(frame, chunks[2], view);
    render_footer(frame, chunks[3], view.held.is_some());
}

fn render_header(frame: &mut Frame, area: Rect, view: &BoardView) {
    let total: usize = view.grouped.values().map(Vec::len).sum();
    let line = Line::from(vec![
        Span::styled(format!(" {} ", view.position_name), Theme::header()),
        Span::styled(format!("\u{2502} {total} candidates"), Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_notice_bar(frame: &mut Frame, area: Rect, notice: &Option<Notice>) {
    let line = match notice {
        Some(notice) => {
            let (glyph, style) = match notice.severity {
                Severity::Success => ("\u{2713}", Theme::success()),
                Severity::Error => ("\u{2715}", Theme::error()),
            };
            Line::from(Span::styled(format!(" {glyph} {}", notice.message), style))
        }
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// One column per known step, in `order_index` order. Buckets keyed by
/// anything else are never drawn; a candidate with an unknown stage
/// name is invisible here.
fn render_columns(frame: &mut Frame, area: Rect, view: &BoardView) {
    if view.steps.is_empty() {
        let empty = Paragraph::new(Span::styled(" (no interview steps)", Theme::dimmed()));
        frame.render_widget(empty, area);
        return;
    }

    let constraints: Vec<Constraint> = view
        .steps
        .iter()
        .map(|_| Constraint::Ratio(1, view.steps.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    static EMPTY: Vec<Candidate> = Vec::new();
    for (index, step) in view.steps.iter().enumerate() {
        let cards = view.grouped.get(&step.name).unwrap_or(&EMPTY);
        let is_cursor = index == view.selection.column;
        render_column(
            frame,
            columns[index],
            step,
            cards,
            is_cursor.then_some(view.selection.card),
            is_cursor && view.held.is_some(),
            view.held,
        );
    }
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    step: &InterviewStep,
    cards: &[Candidate],
    cursor: Option<usize>,
    is_drop_target: bool,
    held: Option<i64>,
) {
    let border_style = if is_drop_target {
        Theme::target_border()
    } else if cursor.is_some() {
        Theme::header()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(format!(" {} ({}) ", step.name, cards.len()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cards.is_empty() {
        let empty = Paragraph::new(Span::styled("(no candidates)", Theme::dimmed()));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(cards.len() * 3);
    for (index, card) in cards.iter().enumerate() {
        let name_style = if held == Some(card.id) {
            Theme::held_card()
        } else if cursor == Some(index) {
            Theme::selected_card()
        } else {
            Default::default()
        };

        lines.push(Line::from(Span::styled(card.full_name.clone(), name_style)));
        lines.push(Line::from(Span::styled(
            score_dots(card.average_score),
            Theme::score(),
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, area: Rect, holding: bool) {
    let line = if holding {
        Line::from(vec![
            Span::styled(" \u{2190}\u{2192}", Theme::header()),
            Span::raw(" target \u{2502} "),
            Span::styled("enter", Theme::header()),
            Span::raw(" drop \u{2502} "),
            Span::styled("esc", Theme::header()),
            Span::raw(" cancel"),
        ])
    } else {
        Line::from(vec![
            Span::styled(" \u{2190}\u{2192}\u{2191}\u{2193}", Theme::header()),
            Span::raw(" select \u{2502} "),
            Span::styled("enter", Theme::header()),
            Span::raw(" pick up \u{2502} "),
            Span::styled("r", Theme::header()),
            Span::raw(" reload \u{2502} "),
            Span::styled("x", Theme::header()),
            Span::raw(" dismiss \u{2502} "),
            Span::styled("q", Theme::header()),
            Span::raw(" quit"),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Five-dot score indicator, filled to the rounded average.
pub fn score_dots(average_score: f64) -> String {
    let filled = (average_score.round().clamp(0.0, 5.0)) as usize;
    let mut dots = String::new();
    for _ in 0..filled {
        dots.push('\u{25CF}');
    }
    for _ in filled..5 {
        dots.push('\u{25CB}');
    }
    dots
}
