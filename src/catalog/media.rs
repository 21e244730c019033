use tracing::warn;

/// Shared page-count and price bookkeeping for catalog items.
///
/// The setters own validation: a rejected assignment is logged and the
/// previous value kept, so a record never holds a zero page count or a
/// negative price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaDetails {
    page_count: u32,
    price: f64,
}

impl MediaDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page count. Zero is rejected.
    pub fn set_page_count(&mut self, count: u32) {
        if count == 0 {
            warn!(count, "Page count must be positive, keeping previous value");
            return;
        }
        self.page_count = count;
    }

    /// Sets the price. Negative or non-finite amounts are rejected.
    pub fn set_price(&mut self, amount: f64) {
        if !amount.is_finite() || amount < 0.0 {
            warn!(amount, "Price must be non-negative, keeping previous value");
            return;
        }
        self.price = amount;
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
