//! # procure-core: Pure Business Logic for the Procurement Forms
//!
//! This crate holds everything the order form, the virtual credit card form
//! and the order number generator compute. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Procurement Forms Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Forms (view layer)                   │   │
//! │  │   Order Form ──► Credit Card Form ──► Order Number Generator    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw field edits                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/session (commands)                      │   │
//! │  │    add_item, update_item, set_tax_rate, generate_number, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ procure-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────────┐        │   │
//! │  │   │  money  │ │  items  │ │  totals  │ │ order_number │        │   │
//! │  │   │  Money  │ │LineItem │ │ Totals   │ │ Scheme A / B │        │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └──────────────┘        │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────────┐        │   │
//! │  │   │  order  │ │  card   │ │ expense  │ │  validation  │        │   │
//! │  │   │Snapshot │ │ Request │ │Categories│ │ clamp/require│        │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └──────────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type over exact decimals
//! - [`types`] - Percentages, discount terms, small enums
//! - [`items`] - Line items and the add/update/remove operations
//! - [`totals`] - The order totals engine
//! - [`order`] - Order form details and the submission snapshot
//! - [`card`] - Virtual credit card request
//! - [`order_number`] - Order number generation (sequence and unique schemes)
//! - [`expense`] - Static expense category table
//! - [`validation`] - Clamping parsers and required-field checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use procure_core::items::{ItemField, LineItems};
//! use procure_core::totals::{recompute, Adjustments};
//!
//! let items = LineItems::new();
//! let id = items.first().id();
//! let items = items.update_item(id, ItemField::Quantity, "2");
//! let items = items.update_item(id, ItemField::UnitPrice, "12.98");
//!
//! let totals = recompute(&items, &Adjustments::default());
//! assert_eq!(totals.subtotal.to_string(), "25.96");
//! assert_eq!(totals.gross_total.to_string(), "30.89");
//! ```

pub mod card;
pub mod error;
pub mod expense;
pub mod items;
pub mod money;
pub mod order;
pub mod order_number;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use card::{CardRequest, CardRequestSnapshot};
pub use error::{CoreError, CoreResult, ValidationError, ValidationErrors};
pub use expense::{expense_categories, find_category, search_categories, ExpenseCategory};
pub use items::{ItemField, LineItem, LineItemId, LineItems};
pub use money::Money;
pub use order::{sample_order, OrderDetails, OrderSnapshot};
pub use order_number::{
    DepartmentCode, Initials, OrderNumber, OrderNumberGenerator, Scheme, Sequence,
};
pub use totals::{recompute, Adjustments, DisplayTotals, OrderTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default VAT rate in percent (German standard rate).
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 19;

/// Department code used in order numbers unless configured otherwise.
pub const DEFAULT_DEPARTMENT: &str = "THA";

/// Exact length of a unique (scheme B) order number.
pub const UNIQUE_ORDER_NUMBER_LEN: usize = 25;

/// Upper bound for a virtual credit card purchase, in euros.
///
/// Amounts above the limit are flagged, not rejected.
pub const CARD_AMOUNT_LIMIT: i64 = 5000;
