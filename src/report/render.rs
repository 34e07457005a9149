//! Drawing laid-out report pages onto a canvas

use bigdecimal::BigDecimal;

use crate::report::config::{ColumnSet, PageConfig};
use crate::report::paginate::ReportPage;
use crate::report::rows::ReportRow;
use crate::traits::*;

const HEADER_FILL: Color = Color::rgb(0.85, 0.78, 0.55);
const STRIPE_FILL: Color = Color::rgb(0.96, 0.95, 0.91);
const RULE_COLOR: Color = Color::rgb(0.45, 0.45, 0.45);
const POSITIVE_BALANCE: Color = Color::rgb(0.0, 0.45, 0.2);
const NEGATIVE_BALANCE: Color = Color::rgb(0.75, 0.1, 0.1);

/// Title block printed at the top of every page
#[derive(Debug, Clone, PartialEq)]
pub struct ReportHeading {
    pub title: String,
    pub subtitle: Option<String>,
}

impl ReportHeading {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Color of a balance cell
pub fn balance_color(value: &BigDecimal) -> Color {
    if *value < BigDecimal::from(0) {
        NEGATIVE_BALANCE
    } else {
        POSITIVE_BALANCE
    }
}

/// Draw every page of a report, returning the created page handles
pub fn render_report<R, C>(
    canvas: &mut C,
    heading: &ReportHeading,
    pages: &[ReportPage<R>],
    columns: &ColumnSet,
    config: &PageConfig,
) -> Vec<PageHandle>
where
    R: ReportRow,
    C: Canvas,
{
    pages
        .iter()
        .map(|page| render_page(canvas, heading, page, columns, config))
        .collect()
}

fn render_page<R, C>(
    canvas: &mut C,
    heading: &ReportHeading,
    page: &ReportPage<R>,
    columns: &ColumnSet,
    config: &PageConfig,
) -> PageHandle
where
    R: ReportRow,
    C: Canvas,
{
    let handle = canvas.new_page(config.page_width, config.page_height);
    let left = config.margin_left;
    let table_width = page.table_width();

    let title_baseline = config.page_height - config.margin_top - config.title_font_size;
    canvas.draw_text(
        &heading.title,
        left,
        title_baseline,
        config.title_font_size,
        FontWeight::Bold,
        Color::BLACK,
    );
    if let Some(subtitle) = &heading.subtitle {
        canvas.draw_text(
            subtitle,
            left,
            title_baseline - config.title_font_size * 1.4,
            config.font_size,
            FontWeight::Regular,
            Color::BLACK,
        );
    }

    let header = page.header_band;
    canvas.draw_rect(
        left,
        header.bottom(),
        table_width,
        header.height,
        Some(HEADER_FILL),
        None,
        0.0,
    );
    let header_baseline = text_baseline(header.bottom(), header.height, config.font_size);
    for (index, column) in columns.columns.iter().enumerate() {
        draw_cell(
            canvas,
            page,
            index,
            column.title(),
            column.is_numeric(),
            header_baseline,
            config,
            FontWeight::Bold,
            Color::BLACK,
        );
    }
    canvas.draw_line(
        Point::new(left, header.bottom()),
        Point::new(left + table_width, header.bottom()),
        RULE_COLOR,
        0.5,
    );

    for (row_index, row) in page.rows.iter().enumerate() {
        let Some(band) = page.row_band(row_index) else {
            continue;
        };
        if page.is_striped(row_index) {
            canvas.draw_rect(
                left,
                band.bottom(),
                table_width,
                band.height,
                Some(STRIPE_FILL),
                None,
                0.0,
            );
        }

        let weight = if row.is_emphasized() {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        };
        let baseline = text_baseline(band.bottom(), band.height, config.font_size);
        for (index, column) in columns.columns.iter().enumerate() {
            let text = row.cell(*column);
            if text.is_empty() {
                continue;
            }
            let color = row.balance_value(*column).map(balance_color).unwrap_or(Color::BLACK);
            draw_cell(
                canvas,
                page,
                index,
                &text,
                column.is_numeric(),
                baseline,
                config,
                weight,
                color,
            );
        }
    }

    if let Some(last_band) = page.row_band(page.rows.len().saturating_sub(1)) {
        canvas.draw_line(
            Point::new(left, last_band.bottom()),
            Point::new(left + table_width, last_band.bottom()),
            RULE_COLOR,
            0.5,
        );
    }

    let footer = format!("Page {} of {}", page.page_number, page.total_pages);
    let footer_width = canvas.measure_text_width(&footer, config.font_size);
    canvas.draw_text(
        &footer,
        config.page_width - config.margin_right - footer_width,
        config.margin_bottom,
        config.font_size,
        FontWeight::Regular,
        Color::BLACK,
    );

    handle
}

/// Baseline that vertically centers text of `size` inside a band
fn text_baseline(bottom: f64, height: f64, size: f64) -> f64 {
    bottom + (height - size) / 2.0 + size * 0.2
}

#[allow(clippy::too_many_arguments)]
fn draw_cell<R, C: Canvas>(
    canvas: &mut C,
    page: &ReportPage<R>,
    index: usize,
    text: &str,
    align_right: bool,
    baseline: f64,
    config: &PageConfig,
    weight: FontWeight,
    color: Color,
) {
    let (Some(&left), Some(&width)) = (page.column_offsets.get(index), page.column_widths.get(index))
    else {
        return;
    };
    let available = (width - 2.0 * config.cell_padding).max(0.0);
    let text = fit_text(canvas, text, available, config.font_size);
    let x = if align_right {
        left + width - config.cell_padding - canvas.measure_text_width(&text, config.font_size)
    } else {
        left + config.cell_padding
    };
    canvas.draw_text(&text, x, baseline, config.font_size, weight, color);
}

/// Shorten text with a trailing ellipsis until it fits the width
fn fit_text<C: Canvas>(canvas: &C, text: &str, width: f64, size: f64) -> String {
    if canvas.measure_text_width(text, size) <= width {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().collect::<String>() + "...";
        if canvas.measure_text_width(&candidate, size) <= width {
            return candidate;
        }
    }
    String::new()
}
