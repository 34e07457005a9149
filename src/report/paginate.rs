//! Splitting report rows into fixed-capacity pages

use serde::{Deserialize, Serialize};

use crate::report::config::{ColumnSet, PageConfig};
use crate::types::*;

/// Rows of a report grouped by where they may be printed
///
/// Leading rows appear only on the first page. The trailing block appears
/// once, complete, on the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSections<R> {
    pub leading: Vec<R>,
    pub body: Vec<R>,
    pub trailing: Vec<R>,
}

impl<R> RowSections<R> {
    pub fn new(leading: Vec<R>, body: Vec<R>, trailing: Vec<R>) -> Self {
        Self {
            leading,
            body,
            trailing,
        }
    }

    pub fn body_only(body: Vec<R>) -> Self {
        Self::new(Vec::new(), body, Vec::new())
    }

    /// Total number of rows across all sections
    pub fn len(&self) -> usize {
        self.leading.len() + self.body.len() + self.trailing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A horizontal band of the page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub top: f64,
    pub height: f64,
}

impl Band {
    pub fn bottom(&self) -> f64 {
        self.top - self.height
    }
}

/// One laid-out page of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage<R> {
    /// 1-based page number
    pub page_number: usize,
    pub total_pages: usize,
    pub rows: Vec<R>,
    pub column_widths: Vec<f64>,
    /// Left edge of each column
    pub column_offsets: Vec<f64>,
    pub header_band: Band,
    /// Top edge of each row, decreasing down the page
    pub row_offsets: Vec<f64>,
    pub row_height: f64,
}

impl<R> ReportPage<R> {
    pub fn is_first(&self) -> bool {
        self.page_number == 1
    }

    pub fn is_last(&self) -> bool {
        self.page_number == self.total_pages
    }

    /// Zebra striping by row parity, restarting on every page
    pub fn is_striped(&self, index: usize) -> bool {
        index % 2 == 1
    }

    /// Band occupied by the row at `index`
    pub fn row_band(&self, index: usize) -> Option<Band> {
        self.row_offsets.get(index).map(|&top| Band {
            top,
            height: self.row_height,
        })
    }

    pub fn table_width(&self) -> f64 {
        self.column_widths.iter().sum()
    }
}

/// Split report rows into pages and compute each page's geometry
///
/// The configuration is validated before any row is placed. Pages are filled
/// in order; when the trailing block does not fit after the last body rows
/// it moves to a page of its own. A report without rows still yields one
/// empty page so its header can be printed.
pub fn paginate<R>(
    sections: RowSections<R>,
    config: &PageConfig,
    columns: &ColumnSet,
) -> LedgerResult<Vec<ReportPage<R>>> {
    config.validate()?;
    let capacity = config.rows_per_page()?;

    if sections.leading.len() > capacity || sections.trailing.len() > capacity {
        return Err(LedgerError::PageTooSmall {
            usable_height: config.usable_height(),
            row_height: config.row_height,
        });
    }

    let row_count = sections.len();
    let RowSections {
        leading,
        body,
        trailing,
    } = sections;

    let mut chunks: Vec<Vec<R>> = Vec::new();
    let mut current: Vec<R> = Vec::new();

    for row in leading.into_iter().chain(body) {
        if current.len() == capacity {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(row);
    }

    if !trailing.is_empty() {
        if current.len() + trailing.len() > capacity {
            tracing::debug!(
                "Trailing rows do not fit after {} rows, moving them to a new page",
                current.len()
            );
            chunks.push(std::mem::take(&mut current));
        }
        current.extend(trailing);
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }

    let column_widths = columns.column_widths(config.table_width(), config.width_distribution);
    let column_offsets: Vec<f64> = column_widths
        .iter()
        .scan(config.margin_left, |x, width| {
            let left = *x;
            *x += width;
            Some(left)
        })
        .collect();
    let header_band = Band {
        top: config.header_top(),
        height: config.header_height,
    };

    let total_pages = chunks.len();
    tracing::debug!(
        "Paginated {} rows into {} pages of {} rows",
        row_count,
        total_pages,
        capacity
    );

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(index, rows)| {
            let row_offsets = (0..rows.len())
                .map(|i| header_band.bottom() - i as f64 * config.row_height)
                .collect();
            ReportPage {
                page_number: index + 1,
                total_pages,
                rows,
                column_widths: column_widths.clone(),
                column_offsets: column_offsets.clone(),
                header_band,
                row_offsets,
                row_height: config.row_height,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_capacity(rows: usize) -> PageConfig {
        let defaults = PageConfig::default();
        let fixed = defaults.margin_top
            + defaults.margin_bottom
            + defaults.title_height
            + defaults.header_height
            + defaults.footer_height;
        PageConfig {
            page_height: fixed + rows as f64 * defaults.row_height,
            ..defaults
        }
    }

    #[test]
    fn test_opening_and_closing_stay_on_first_and_last_page() {
        let config = config_with_capacity(20);
        let sections = RowSections::new(
            vec!["opening".to_string()],
            (1..=37).map(|i| format!("tx{}", i)).collect(),
            vec!["closing".to_string(), "totals".to_string()],
        );

        let pages = paginate(sections, &config, &ColumnSet::statement(true)).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].total_pages, 2);
        assert_eq!(pages[0].rows.len(), 20);
        assert_eq!(pages[0].rows[0], "opening");
        assert_eq!(pages[0].rows[19], "tx19");
        assert_eq!(pages[1].rows.len(), 20);
        assert_eq!(pages[1].rows[0], "tx20");
        assert_eq!(pages[1].rows[17], "tx37");
        assert_eq!(pages[1].rows[18], "closing");
        assert_eq!(pages[1].rows[19], "totals");
    }

    #[test]
    fn test_trailing_block_is_not_split() {
        let config = config_with_capacity(10);
        let sections = RowSections::new(
            vec![0],
            (1..=9).collect(),
            vec![100, 101],
        );

        let pages = paginate(sections, &config, &ColumnSet::statement(true)).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].rows.len(), 10);
        assert_eq!(pages[1].rows, vec![100, 101]);
        assert!(pages[1].is_last());
    }

    #[test]
    fn test_empty_report_has_one_page() {
        let pages = paginate(
            RowSections::<u32>::body_only(Vec::new()),
            &PageConfig::default(),
            &ColumnSet::statement(true),
        )
        .unwrap();

        assert_eq!(pages.len(), 1);
        assert!(pages[0].rows.is_empty());
        assert_eq!(pages[0].total_pages, 1);
    }

    #[test]
    fn test_page_too_small_fails_before_layout() {
        let config = PageConfig {
            row_height: 1000.0,
            ..PageConfig::default()
        };
        let result = paginate(
            RowSections::body_only(vec![1, 2, 3]),
            &config,
            &ColumnSet::statement(true),
        );
        assert!(matches!(result, Err(LedgerError::PageTooSmall { .. })));
    }

    #[test]
    fn test_trailing_block_larger_than_page() {
        let config = config_with_capacity(1);
        let result = paginate(
            RowSections::new(Vec::new(), vec![1], vec![2, 3]),
            &config,
            &ColumnSet::statement(true),
        );
        assert!(matches!(result, Err(LedgerError::PageTooSmall { .. })));
    }

    #[test]
    fn test_geometry() {
        let config = PageConfig::default();
        let columns = ColumnSet::statement(true);
        let pages = paginate(RowSections::body_only(vec![1, 2, 3]), &config, &columns).unwrap();
        let page = &pages[0];

        assert!((page.table_width() - config.table_width()).abs() < 1e-9);
        assert_eq!(page.column_offsets[0], config.margin_left);
        assert_eq!(
            page.column_offsets[1],
            config.margin_left + page.column_widths[0]
        );
        assert_eq!(page.header_band.top, config.header_top());
        assert_eq!(page.row_offsets[0], config.header_bottom());
        assert_eq!(page.row_offsets[1], config.header_bottom() - config.row_height);
        assert!(page.row_offsets.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(!page.is_striped(0));
        assert!(page.is_striped(1));
        assert_eq!(page.row_band(2).unwrap().bottom(), page.row_offsets[2] - config.row_height);
    }

    #[test]
    fn test_tall_page_with_tiny_rows() {
        let config = PageConfig {
            page_height: 1e15,
            row_height: 0.001,
            ..PageConfig::default()
        };
        assert!(config.validate().is_ok());

        let pages = paginate(
            RowSections::body_only(vec![1, 2, 3]),
            &config,
            &ColumnSet::statement(true),
        )
        .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_stripes_reset_per_page() {
        let config = config_with_capacity(3);
        let pages = paginate(
            RowSections::body_only((0..5).collect::<Vec<u32>>()),
            &config,
            &ColumnSet::statement(true),
        )
        .unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].rows, vec![3, 4]);
        assert!(!pages[1].is_striped(0));
    }
}
