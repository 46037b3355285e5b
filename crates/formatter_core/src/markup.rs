//! Inline markup for the output region: `**bold**` spans and line breaks.
//!
//! The result is trusted markup. Text is never escaped, so a
//! [`TrustedMarkup`] can only be obtained from the core's own
//! [`DisplayState`], which holds either fixed strings or text returned by
//! the extraction service.

use crate::DisplayState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Strong(String),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedMarkup {
    segments: Vec<Segment>,
}

impl TrustedMarkup {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments grouped by line; a trailing line break yields an empty last line.
    pub fn lines(&self) -> impl Iterator<Item = &[Segment]> {
        self.segments
            .split(|segment| *segment == Segment::LineBreak)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Strong(text) => {
                    html.push_str("<strong>");
                    html.push_str(text);
                    html.push_str("</strong>");
                }
                Segment::LineBreak => html.push_str("<br/>"),
            }
        }
        html
    }
}

pub(crate) fn render(display: &DisplayState) -> TrustedMarkup {
    render_text(display.as_str())
}

fn render_text(text: &str) -> TrustedMarkup {
    let mut segments = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            segments.push(Segment::LineBreak);
        }
        emphasize_line(line, &mut segments);
    }
    TrustedMarkup { segments }
}

// Emphasis never spans a line break; an opening `**` without a closing pair stays literal.
fn emphasize_line(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let inner = &rest[open + 2..];
        let Some(close) = inner.find("**") else {
            break;
        };
        push_text(out, &rest[..open]);
        out.push(Segment::Strong(inner[..close].to_string()));
        rest = &inner[close + 2..];
    }
    push_text(out, rest);
}

fn push_text(out: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        out.push(Segment::Text(text.to_string()));
    }
}
