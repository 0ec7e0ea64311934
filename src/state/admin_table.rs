//! Search / filter / detail-pin state for the admin product table.

#[cfg(test)]
#[path = "admin_table_test.rs"]
mod admin_table_test;

use crate::types::Product;

/// Number of columns in the table; the empty-state row spans all of them.
pub const COLUMN_COUNT: u32 = 6;

pub const COLUMN_HEADERS: [&str; COLUMN_COUNT as usize] =
    ["PRODUCT", "CATEGORY", "PRICE", "STOCK", "STATUS", "ACTIONS"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminTableState {
    pub search_text: String,
    /// Filter panel toggle; purely visual, never narrows the rows.
    pub filter_open: bool,
    /// Row pinned for the detail modal.
    pub viewing: Option<Product>,
}

impl AdminTableState {
    pub fn toggle_filter(&mut self) {
        self.filter_open = !self.filter_open;
    }

    pub fn view(&mut self, product: Product) {
        self.viewing = Some(product);
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }
}

/// Products whose name contains `query`, case-insensitively, in input order.
///
/// An empty query matches everything.
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// What the table body renders for a filtered row set.
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody<'a> {
    /// A single "No products found." row.
    Empty,
    Rows(Vec<&'a Product>),
}

impl<'a> TableBody<'a> {
    pub fn from_filtered(rows: Vec<&'a Product>) -> Self {
        if rows.is_empty() { Self::Empty } else { Self::Rows(rows) }
    }
}

/// BEM modifier class for a status label badge.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Active" => "status-badge status-badge--active",
        "Low Stock" => "status-badge status-badge--low-stock",
        "Out of Stock" => "status-badge status-badge--out-of-stock",
        _ => "status-badge status-badge--unknown",
    }
}
