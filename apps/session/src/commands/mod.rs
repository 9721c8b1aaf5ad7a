//! # Session Commands
//!
//! Everything the view layer can ask the session to do.
//!
//! ## Command Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fn command(state: &mut XState, .., raw: &str) -> XResponse             │
//! │                                                                         │
//! │  • Takes exactly the state it needs, borrowed from the Session          │
//! │  • Takes raw field text; numeric parsing is clamped in procure-core     │
//! │  • Returns the full view payload, so the view never computes anything   │
//! │  • Result<_, ApiError> only where an argument can be malformed or a     │
//! │    submission can be incomplete                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - `order` - order form items, summary fields, submission
//! - `order_number` - generator inputs and the shared order number
//! - `card` - virtual credit card request
//! - `catalog` - expense category lookup
//! - `config` - read-only configuration
//! - `tab` - active tab

pub mod card;
pub mod catalog;
pub mod config;
pub mod order;
pub mod order_number;
pub mod tab;

use chrono::{NaiveDate, Utc};

/// Today's date for order numbers.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
