//! The quote refresh cycle.
//!
//! [`QuoteRefresher`] owns the refresh timer, runs the quote program and
//! publishes its output to a [`DisplaySink`]. At most one timer is pending at
//! any time.

pub mod handler;
pub mod traits;
pub mod types;

pub use handler::QuoteRefresher;
pub use traits::DisplaySink;
pub use types::{RefreshConfig, RefresherStatus};
