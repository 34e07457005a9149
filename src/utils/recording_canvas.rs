//! Canvas implementation that records drawing calls, for tests and previews

use crate::traits::*;

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        content: String,
        x: f64,
        y: f64,
        size: f64,
        weight: FontWeight,
        color: Color,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        thickness: f64,
    },
}

/// One recorded page
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

/// Canvas that keeps every call in memory
///
/// Text width is estimated as half the font size per character, which is
/// close enough to a proportional font for layout checks.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pages: Vec<RecordedPage>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    /// All text drawn on a page, in drawing order
    pub fn texts(&self, page: usize) -> Vec<String> {
        self.pages
            .get(page)
            .map(|p| {
                p.ops
                    .iter()
                    .filter_map(|op| match op {
                        DrawOp::Text { content, .. } => Some(content.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn record(&mut self, op: DrawOp) {
        // calls before the first new_page land on an unsized page
        if self.pages.is_empty() {
            self.pages.push(RecordedPage {
                width: 0.0,
                height: 0.0,
                ops: Vec::new(),
            });
        }
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn new_page(&mut self, width: f64, height: f64) -> PageHandle {
        self.pages.push(RecordedPage {
            width,
            height,
            ops: Vec::new(),
        });
        PageHandle(self.pages.len() - 1)
    }

    fn draw_text(&mut self, content: &str, x: f64, y: f64, size: f64, weight: FontWeight, color: Color) {
        self.record(DrawOp::Text {
            content: content.to_string(),
            x,
            y,
            size,
            weight,
            color,
        });
    }

    fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    ) {
        self.record(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            stroke_width,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f64) {
        self.record(DrawOp::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn measure_text_width(&self, content: &str, size: f64) -> f64 {
        content.chars().count() as f64 * size * 0.5
    }
}
