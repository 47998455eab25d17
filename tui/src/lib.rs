//! TUI rendering for the coin toss simulator using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use toss_engine::{
    App, CoinFrame, DialogKind, Face, Focus, Offset, PLACEHOLDER_FACE, SessionSummary,
};

/// Rows taken by the coin box, borders included.
pub const COIN_HEIGHT: u16 = 3;

const INPUT_HEIGHT: u16 = 3;
const RESULTS_HEIGHT: u16 = 5;
const MIN_DIALOG_WIDTH: u16 = 30;
const DISMISS_HINT: &str = "Enter/Esc close";
const SCROLL_HINT: &str = "  Up/Down scroll";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),              // Title
            Constraint::Length(INPUT_HEIGHT),   // Flip count
            Constraint::Min(COIN_HEIGHT + 2),   // Coin stage
            Constraint::Length(RESULTS_HEIGHT), // Results
            Constraint::Length(1),              // Buttons
            Constraint::Length(1),              // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette, &glyphs);
    draw_input(frame, app, chunks[1], &palette);
    draw_stage(frame, app, chunks[2], &palette);
    draw_results(frame, app.summary(), chunks[3], &palette);
    draw_buttons(frame, app, chunks[4], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[5], &palette, &glyphs);

    if app.dialog().is_some() {
        draw_dialog(frame, app, &palette, &glyphs);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", glyphs.coin), styles::title(palette)),
        Span::styled("Coin Toss Simulator", styles::title(palette)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let focused = app.focus() == Focus::Input && app.dialog().is_none();
    let border_style = if focused {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.bg_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            " Number of flips ",
            Style::default().fg(palette.text_primary),
        ))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);

    let text = app.input().text();
    let content = if text.is_empty() && !focused {
        Span::styled("e.g. 10", Style::default().fg(palette.text_muted))
    } else {
        Span::styled(text.to_string(), Style::default().fg(palette.text_primary))
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused && inner.width > 0 {
        let before_cursor: String = text.chars().take(app.input().cursor()).collect();
        let column = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(column)
            .min(inner.x + inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn draw_stage(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_stage));
    let stage = block.inner(area);
    frame.render_widget(block, area);

    let (coin, idle) = match app.coin_frame() {
        Some(coin) => (*coin, false),
        None => (CoinFrame::landed(PLACEHOLDER_FACE), true),
    };

    let label = coin.face.label();
    let width = coin_width(coin.face);
    let rect = coin_rect(stage, width, COIN_HEIGHT, coin.offset);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let face_color = if idle {
        palette.text_muted
    } else {
        palette.face(coin.face)
    };
    let border_color = if coin.settled && !idle {
        face_color
    } else {
        palette.bg_border
    };

    let widget = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(face_color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(widget, rect);
}

/// Width of the coin box for `face`: label, one cell of padding each side, borders.
#[must_use]
pub fn coin_width(face: Face) -> u16 {
    u16::try_from(face.label().width()).unwrap_or(u16::MAX) + 4
}

/// Place a `width` x `height` coin at the centre of `stage`, shifted by `offset`.
///
/// The result is clamped so the coin never leaves the stage.
#[must_use]
pub fn coin_rect(stage: Rect, width: u16, height: u16, offset: Offset) -> Rect {
    let width = width.min(stage.width);
    let height = height.min(stage.height);

    let min_x = i32::from(stage.x);
    let min_y = i32::from(stage.y);
    let max_x = min_x + i32::from(stage.width - width);
    let max_y = min_y + i32::from(stage.height - height);

    let x = min_x + i32::from((stage.width - width) / 2) + i32::from(offset.dx);
    let y = min_y + i32::from((stage.height - height) / 2) + i32::from(offset.dy);

    Rect {
        x: x.clamp(min_x, max_x) as u16,
        y: y.clamp(min_y, max_y) as u16,
        width,
        height,
    }
}

fn draw_results(frame: &mut Frame, summary: Option<&SessionSummary>, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(
            " Results ",
            Style::default().fg(palette.text_primary),
        ))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));

    let lines = match summary {
        Some(summary) => {
            let [total, heads, tails] = summary.lines();
            vec![
                Line::from(Span::styled(
                    total,
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(heads, Style::default().fg(palette.heads))),
                Line::from(Span::styled(tails, Style::default().fg(palette.tails))),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No tosses yet.",
            Style::default().fg(palette.text_muted),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_buttons(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = Vec::new();
    for focus in [Focus::Toss, Focus::History, Focus::Exit] {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        let focused = app.focus() == focus;
        let marker = if focused { glyphs.focus } else { " " };
        let style = if focus == Focus::Exit {
            styles::exit_button(palette, focused)
        } else {
            styles::button(palette, focused)
        };
        spans.push(Span::styled(
            format!("[{marker} {} ]", focus.label()),
            style,
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (state_text, state_style) = match app.progress() {
        Some(progress) => (
            format!(" TOSSING {}/{} ", progress.completed, progress.total),
            styles::state_tossing(palette),
        ),
        None => (" READY ".to_string(), styles::state_ready(palette)),
    };

    let mut spans = vec![
        Span::styled(state_text, state_style),
        Span::raw(" "),
    ];

    if let Some(notice) = app.notice() {
        spans.push(Span::styled(
            notice.to_string(),
            Style::default().fg(palette.danger),
        ));
    } else {
        let hints = [
            ("Tab", "focus"),
            ("Enter", "activate"),
            ("F2", "history"),
            ("Ctrl+C", "quit"),
        ];
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    format!(" {} ", glyphs.separator),
                    styles::key_hint(palette),
                ));
            }
            spans.push(Span::styled(key, styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_dialog(frame: &mut Frame, app: &mut App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let Some(dialog) = app.dialog() else {
        return;
    };

    let (glyph, accent) = match dialog.kind() {
        DialogKind::Error => (glyphs.error, palette.error),
        DialogKind::Info => (glyphs.history, palette.primary),
    };
    let title = format!(" {glyph} {} ", dialog.title());

    // Borders, a spacer, and the dismiss hint.
    let body_len = dialog.lines().len();
    let height = u16::try_from(body_len)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.height.saturating_sub(2));
    let body_rows = usize::from(height.saturating_sub(4));
    let scrollable = body_len > body_rows;

    let content_width = dialog
        .lines()
        .iter()
        .map(|line| line.width())
        .chain([title.width()])
        .chain(scrollable.then_some(DISMISS_HINT.width() + SCROLL_HINT.width()))
        .max()
        .unwrap_or(0);
    let max_width = area.width.saturating_sub(4);
    let width = (u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(6))
        .max(MIN_DIALOG_WIDTH)
        .min(max_width);
    if width == 0 || height == 0 {
        return;
    }

    app.update_dialog_viewport(body_rows);
    let Some(dialog) = app.dialog() else {
        return;
    };

    let base = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };
    let rect = match app.modal_effect() {
        Some(effect) => apply_modal_effect(effect, base, area),
        None => base,
    };

    let visible = dialog.visible_lines();
    let mut lines: Vec<Line> = visible
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(palette.text_primary),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    let mut hint = vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled("/", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" close", styles::key_hint(palette)),
    ];
    if dialog.is_scrollable() {
        hint.push(Span::styled("  ", styles::key_hint(palette)));
        hint.push(Span::styled("Up/Down", styles::key_highlight(palette)));
        hint.push(Span::styled(" scroll", styles::key_hint(palette)));
    }
    lines.push(Line::from(hint));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(palette.bg_panel));
    if dialog.is_scrollable() {
        // "more" indicator: which lines are in view out of how many.
        let first = dialog.scroll_offset() + 1;
        let last = dialog.scroll_offset() + visible.len();
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {first}-{last}/{body_len} "),
                styles::key_hint(palette),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        rect,
    );
}
