//! Page geometry and column layout for printed statements

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Geometry of a printed report page, in page units
///
/// Defaults describe an A4 landscape page. Every field can be overridden
/// from YAML, and missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    #[serde(default = "default_margin")]
    pub margin_top: f64,
    #[serde(default = "default_margin")]
    pub margin_bottom: f64,
    #[serde(default = "default_margin")]
    pub margin_left: f64,
    #[serde(default = "default_margin")]
    pub margin_right: f64,
    /// Band above the table holding the report title
    #[serde(default = "default_title_height")]
    pub title_height: f64,
    /// Column header band
    #[serde(default = "default_header_height")]
    pub header_height: f64,
    /// Band below the table holding the page counter
    #[serde(default = "default_footer_height")]
    pub footer_height: f64,
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    /// Horizontal padding inside each cell
    #[serde(default = "default_cell_padding")]
    pub cell_padding: f64,
    #[serde(default)]
    pub width_distribution: WidthDistribution,
}

fn default_page_width() -> f64 {
    841.89
}

fn default_page_height() -> f64 {
    595.28
}

fn default_margin() -> f64 {
    30.0
}

fn default_title_height() -> f64 {
    50.0
}

fn default_header_height() -> f64 {
    24.0
}

fn default_footer_height() -> f64 {
    20.0
}

fn default_row_height() -> f64 {
    18.0
}

fn default_font_size() -> f64 {
    8.0
}

fn default_title_font_size() -> f64 {
    14.0
}

fn default_cell_padding() -> f64 {
    4.0
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
            margin_top: default_margin(),
            margin_bottom: default_margin(),
            margin_left: default_margin(),
            margin_right: default_margin(),
            title_height: default_title_height(),
            header_height: default_header_height(),
            footer_height: default_footer_height(),
            row_height: default_row_height(),
            font_size: default_font_size(),
            title_font_size: default_title_font_size(),
            cell_padding: default_cell_padding(),
            width_distribution: WidthDistribution::default(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> LedgerResult<Self> {
        let config: PageConfig =
            serde_yaml::from_str(yaml).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Width available to the table
    pub fn table_width(&self) -> f64 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Height left for table rows once margins and fixed bands are taken
    pub fn usable_height(&self) -> f64 {
        self.page_height
            - self.margin_top
            - self.margin_bottom
            - self.title_height
            - self.header_height
            - self.footer_height
    }

    /// Top edge of the column header band
    pub fn header_top(&self) -> f64 {
        self.page_height - self.margin_top - self.title_height
    }

    /// Bottom edge of the column header band, where the first row starts
    pub fn header_bottom(&self) -> f64 {
        self.header_top() - self.header_height
    }

    /// Number of rows that fit on one page
    pub fn rows_per_page(&self) -> LedgerResult<usize> {
        let usable_height = self.usable_height();
        let rows = (usable_height / self.row_height).floor();
        if !rows.is_finite() || rows < 1.0 {
            return Err(LedgerError::PageTooSmall {
                usable_height,
                row_height: self.row_height,
            });
        }
        Ok(rows as usize)
    }

    /// Check the geometry before any rows are laid out
    pub fn validate(&self) -> LedgerResult<()> {
        let dimensions = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("row_height", self.row_height),
            ("font_size", self.font_size),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(LedgerError::InvalidPageConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let bands = [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
            ("title_height", self.title_height),
            ("header_height", self.header_height),
            ("footer_height", self.footer_height),
            ("cell_padding", self.cell_padding),
        ];
        for (name, value) in bands {
            if !value.is_finite() || value < 0.0 {
                return Err(LedgerError::InvalidPageConfig(format!(
                    "{} cannot be negative, got {}",
                    name, value
                )));
            }
        }

        if self.table_width() <= 0.0 {
            return Err(LedgerError::InvalidPageConfig(
                "Horizontal margins leave no room for the table".to_string(),
            ));
        }

        if let WidthDistribution::FavorDescription { weight } = self.width_distribution {
            if !weight.is_finite() || weight < 1.0 {
                return Err(LedgerError::InvalidPageConfig(format!(
                    "Description weight must be at least 1, got {}",
                    weight
                )));
            }
        }

        self.rows_per_page().map(|_| ())
    }
}

/// How spare table width is shared between columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WidthDistribution {
    /// Every column gets the same extra width
    Even,
    /// Text columns get `weight` shares, every other column one share
    FavorDescription { weight: f64 },
}

impl Default for WidthDistribution {
    fn default() -> Self {
        WidthDistribution::FavorDescription { weight: 2.0 }
    }
}

/// Columns that can appear in a printed report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Date,
    VoucherType,
    Description,
    GoldDebit,
    GoldCredit,
    GoldBalance,
    MonetaryDebit,
    MonetaryCredit,
    MonetaryBalance,
    SequenceNumber,
    AccountName,
    TransactionCount,
}

impl Column {
    pub fn title(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::VoucherType => "Type",
            Column::Description => "Description",
            Column::GoldDebit => "Gold Debit",
            Column::GoldCredit => "Gold Credit",
            Column::GoldBalance => "Gold Balance",
            Column::MonetaryDebit => "KWD Debit",
            Column::MonetaryCredit => "KWD Credit",
            Column::MonetaryBalance => "KWD Balance",
            Column::SequenceNumber => "No.",
            Column::AccountName => "Account",
            Column::TransactionCount => "Transactions",
        }
    }

    /// Width tuned for the column's expected content
    pub fn base_width(&self) -> f64 {
        match self {
            Column::Date => 60.0,
            Column::VoucherType => 40.0,
            Column::Description => 140.0,
            Column::GoldDebit | Column::GoldCredit | Column::GoldBalance => 70.0,
            Column::MonetaryDebit | Column::MonetaryCredit | Column::MonetaryBalance => 70.0,
            Column::SequenceNumber => 35.0,
            Column::AccountName => 180.0,
            Column::TransactionCount => 70.0,
        }
    }

    /// Right-aligned numeric column
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Column::Date | Column::VoucherType | Column::Description | Column::AccountName
        )
    }

    /// Column whose cells are colored by sign
    pub fn is_balance(&self) -> bool {
        matches!(self, Column::GoldBalance | Column::MonetaryBalance)
    }

    /// Free-text column that takes the larger share of spare width
    pub fn is_description(&self) -> bool {
        matches!(self, Column::Description | Column::AccountName)
    }
}

/// Ordered columns of one report surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    pub columns: Vec<Column>,
}

impl ColumnSet {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns of a running-balance statement
    pub fn statement(shows_monetary: bool) -> Self {
        let mut columns = vec![
            Column::Date,
            Column::VoucherType,
            Column::Description,
            Column::GoldDebit,
            Column::GoldCredit,
            Column::GoldBalance,
        ];
        if shows_monetary {
            columns.extend([
                Column::MonetaryDebit,
                Column::MonetaryCredit,
                Column::MonetaryBalance,
            ]);
        }
        Self::new(columns)
    }

    /// Columns of a per-account balance summary
    pub fn balance_summary(shows_monetary: bool) -> Self {
        let mut columns = vec![
            Column::SequenceNumber,
            Column::AccountName,
            Column::TransactionCount,
            Column::GoldBalance,
        ];
        if shows_monetary {
            columns.push(Column::MonetaryBalance);
        }
        Self::new(columns)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn base_widths(&self) -> Vec<f64> {
        self.columns.iter().map(Column::base_width).collect()
    }

    /// Widths stretched to fill the table
    ///
    /// Widths never go below their base values; when the base widths already
    /// exceed the table width they are returned unchanged.
    pub fn column_widths(&self, table_width: f64, distribution: WidthDistribution) -> Vec<f64> {
        let mut widths = self.base_widths();
        let missing = table_width - widths.iter().sum::<f64>();
        if missing <= 0.0 || widths.is_empty() {
            return widths;
        }

        let shares: Vec<f64> = self
            .columns
            .iter()
            .map(|column| match distribution {
                WidthDistribution::Even => 1.0,
                WidthDistribution::FavorDescription { weight } if column.is_description() => {
                    weight
                }
                WidthDistribution::FavorDescription { .. } => 1.0,
            })
            .collect();
        let total_shares: f64 = shares.iter().sum();

        for (width, share) in widths.iter_mut().zip(&shares) {
            *width += missing * share / total_shares;
        }
        widths
    }
}
