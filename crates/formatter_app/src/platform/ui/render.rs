use formatter_core::{AppViewModel, Segment, ServiceStatus, TrustedMarkup};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::AppLayout;

pub fn draw(frame: &mut Frame, view: &AppViewModel) {
    let layout = AppLayout::new(frame.area());

    frame.render_widget(Paragraph::new(TITLE).bold().centered(), layout.title);

    let input = if view.input.is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER).dark_gray()
    } else {
        Paragraph::new(view.input.as_str())
    };
    frame.render_widget(input.block(Block::bordered().title(INPUT_TITLE)), layout.input);
    frame.set_cursor_position(cursor_position(layout.input, &view.input));

    frame.render_widget(Paragraph::new(SUBMIT_HINT).centered(), layout.submit);

    let mut output = Paragraph::new(markup_lines(&view.markup))
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(OUTPUT_TITLE));
    if view.is_error {
        output = output.fg(ERROR_COLOR);
    }
    frame.render_widget(output, layout.output);

    if view.copy_available {
        frame.render_widget(Paragraph::new(copy_line(view)).centered(), layout.copy);
    }

    frame.render_widget(Paragraph::new(status_text(view)).dark_gray(), layout.status);
}

/// Terminal rendition of trusted markup: strong spans in bold, one line per break.
pub fn markup_lines(markup: &TrustedMarkup) -> Vec<Line<'static>> {
    markup
        .lines()
        .map(|segments| Line::from(segments.iter().map(segment_span).collect::<Vec<_>>()))
        .collect()
}

fn segment_span(segment: &Segment) -> Span<'static> {
    match segment {
        Segment::Text(text) => Span::raw(text.clone()),
        Segment::Strong(text) => {
            Span::styled(text.clone(), Style::new().add_modifier(Modifier::BOLD))
        }
        Segment::LineBreak => Span::raw(""),
    }
}

fn copy_line(view: &AppViewModel) -> Line<'static> {
    let mut spans = vec![Span::raw(COPY_LABEL)];
    if view.acknowledged {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(COPIED_LABEL, Style::new().fg(COPIED_COLOR)));
    }
    Line::from(spans)
}

fn status_text(view: &AppViewModel) -> String {
    let service = match view.service {
        ServiceStatus::Unknown => "unknown",
        ServiceStatus::Checking => "checking",
        ServiceStatus::Online => "online",
        ServiceStatus::Unreachable => "unreachable",
    };
    format!(
        "Service: {} | In flight: {} | {}",
        service, view.in_flight, KEY_HELP
    )
}

fn cursor_position(area: Rect, input: &str) -> Position {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.width.saturating_sub(2);
    Position::new(area.x + 1 + typed.min(max_x), area.y + 1)
}
