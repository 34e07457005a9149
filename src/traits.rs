//! Traits for the storage and drawing seams
//!
//! The ledger core never talks to a database or a PDF library directly.
//! Vouchers and accounts arrive through [`VoucherSource`], and finished pages
//! leave through [`Canvas`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Read access to stored accounts and vouchers
///
/// Implement this for whatever backend holds the firm's books (SQL, a
/// document store, in-memory for tests). Returned vouchers may be in any
/// order, but vouchers sharing a date must keep their insertion order.
#[async_trait]
pub trait VoucherSource: Send + Sync {
    /// Get an account by ID
    async fn get_account(&self, account_id: &str) -> LedgerResult<Option<Account>>;

    /// List accounts of one category, ordered by sequence number
    async fn list_accounts(&self, account_type: AccountType) -> LedgerResult<Vec<Account>>;

    /// List every voucher booked against an account
    async fn get_account_vouchers(&self, account_id: &str) -> LedgerResult<Vec<Voucher>>;

    /// List every voucher booked against any of the given accounts
    ///
    /// Vouchers from different accounts must come back interleaved in their
    /// global insertion order, not grouped per account.
    async fn get_vouchers_for_accounts(&self, account_ids: &[String]) -> LedgerResult<Vec<Voucher>>;
}

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A point in page units, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Handle to a page created by a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageHandle(pub usize);

/// Drawing surface for printable reports
///
/// All drawing calls target the page most recently returned by
/// [`Canvas::new_page`].
pub trait Canvas {
    /// Start a new page of the given size
    fn new_page(&mut self, width: f64, height: f64) -> PageHandle;

    /// Draw text with its baseline starting at `(x, y)`
    fn draw_text(&mut self, content: &str, x: f64, y: f64, size: f64, weight: FontWeight, color: Color);

    /// Draw a rectangle whose bottom-left corner is `(x, y)`
    #[allow(clippy::too_many_arguments)]
    fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    );

    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f64);

    /// Width the text would occupy at the given font size
    fn measure_text_width(&self, content: &str, size: f64) -> f64;
}
