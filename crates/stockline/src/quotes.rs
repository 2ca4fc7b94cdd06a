//! Quote snapshot handed to the dashboard for rendering.
//!
//! Prices are not fetched here; a snapshot only carries the symbols the
//! profile tracks, in display order.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub ticker: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSnapshot {
    pub quotes: Vec<Quote>,
}

impl QuoteSnapshot {
    pub fn from_tickers(tickers: &[String]) -> Self {
        Self {
            quotes: tickers
                .iter()
                .map(|ticker| Quote {
                    ticker: ticker.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
