//! # Line Items
//!
//! The item list of the order form and its three operations.
//!
//! ## Item List Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  LineItems::new() ──► [ empty item (qty 1, price 0) ]                   │
//! │        │                                                                │
//! │        ├── add_item() ─────► appends a fresh empty item                 │
//! │        │                                                                │
//! │        ├── update_item() ──► rebuilds ONE item, recomputes its total,   │
//! │        │                     every other item stays the same Arc        │
//! │        │                                                                │
//! │        └── remove_item() ──► drops an item, unless it is the last one   │
//! │                                                                         │
//! │  Every operation returns a new list; the input is never mutated.        │
//! │  The list never becomes empty.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{bound_amount, clamp_amount, clamp_quantity, MAX_QUANTITY};

// =============================================================================
// Line Item Id
// =============================================================================

/// Opaque, unique line item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemId(#[ts(type = "string")] Uuid);

impl LineItemId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        LineItemId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(LineItemId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id".to_string(),
                reason: "must be a valid UUID".to_string(),
            })
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchasable entry on an order.
///
/// ## Invariant
/// `line_total == quantity × unit_price` at all times. The fields are private
/// and every way of changing quantity or price goes through a method that
/// recomputes the total.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    id: LineItemId,
    article_number: Option<String>,
    description: String,
    quantity: u32,
    unit_price: Money,
    line_total: Money,
}

impl LineItem {
    /// A blank row: quantity 1, price 0.
    pub fn empty() -> Self {
        Self::new("", 1, Money::zero())
    }

    /// Creates an item with a fresh id. Quantity and price are brought into
    /// the same ranges form input is clamped to.
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        let quantity = quantity.clamp(1, MAX_QUANTITY);
        let unit_price = bound_amount(unit_price);
        LineItem {
            id: LineItemId::new(),
            article_number: None,
            description: description.into(),
            quantity,
            unit_price,
            line_total: unit_price.multiply_quantity(quantity),
        }
    }

    /// Sets the supplier's article number.
    pub fn with_article_number(mut self, article_number: impl Into<String>) -> Self {
        self.article_number = Some(article_number.into());
        self
    }

    #[inline]
    pub fn id(&self) -> LineItemId {
        self.id
    }

    pub fn article_number(&self) -> Option<&str> {
        self.article_number.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// `quantity × unit_price`, exact.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.line_total
    }

    /// Applies one raw field edit, returning the rebuilt item.
    fn with_field(&self, field: ItemField, raw: &str) -> LineItem {
        let mut item = self.clone();
        match field {
            ItemField::Quantity => item.quantity = clamp_quantity(raw),
            ItemField::UnitPrice => item.unit_price = clamp_amount(raw),
            ItemField::Description => item.description = raw.to_string(),
            ItemField::ArticleNumber => item.article_number = Some(raw.to_string()),
        }
        if field.affects_total() {
            item.line_total = item.unit_price.multiply_quantity(item.quantity);
        }
        item
    }
}

// =============================================================================
// Item Field
// =============================================================================

/// Editable fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Quantity,
    UnitPrice,
    Description,
    ArticleNumber,
}

impl ItemField {
    /// Quantity and price feed `line_total`; text fields do not.
    #[inline]
    pub fn affects_total(&self) -> bool {
        matches!(self, ItemField::Quantity | ItemField::UnitPrice)
    }
}

impl FromStr for ItemField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(ItemField::Quantity),
            "unitPrice" | "unit_price" => Ok(ItemField::UnitPrice),
            "description" => Ok(ItemField::Description),
            "articleNumber" | "article_number" | "artikelnummer" => Ok(ItemField::ArticleNumber),
            other => Err(ValidationError::InvalidFormat {
                field: "field".to_string(),
                reason: format!("unknown line item field '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// The ordered, never-empty item list of an order.
///
/// Items are shared through `Arc`, so an update allocates one new item and
/// leaves all others pointer-identical. A view layer can diff rows with
/// `Arc::ptr_eq`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItems(Vec<Arc<LineItem>>);

impl LineItems {
    /// A list holding exactly one empty item.
    pub fn new() -> Self {
        LineItems(vec![Arc::new(LineItem::empty())])
    }

    /// Builds a list from existing items. An empty input yields one empty item.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let items: Vec<Arc<LineItem>> = items.into_iter().map(Arc::new).collect();
        if items.is_empty() {
            return Self::new();
        }
        LineItems(items)
    }

    /// Number of items (always ≥ 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.0.iter().map(|item| item.as_ref())
    }

    /// The shared item handles, for pointer comparisons.
    pub fn as_slice(&self) -> &[Arc<LineItem>] {
        &self.0
    }

    /// The first item. The list is never empty.
    pub fn first(&self) -> &LineItem {
        &self.0[0]
    }

    /// The most recently appended item.
    pub fn last(&self) -> &LineItem {
        &self.0[self.0.len() - 1]
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: LineItemId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of all line totals, unrounded.
    pub fn subtotal(&self) -> Money {
        self.iter().map(LineItem::line_total).sum()
    }

    /// Owned copies of all items, for snapshots.
    pub fn to_vec(&self) -> Vec<LineItem> {
        self.iter().cloned().collect()
    }

    /// Appends a fresh empty item.
    pub fn add_item(&self) -> LineItems {
        let mut items = self.0.clone();
        items.push(Arc::new(LineItem::empty()));
        LineItems(items)
    }

    /// Removes the item with `id`.
    ///
    /// Returns the list unchanged when `id` is unknown or when it is the only
    /// item left.
    pub fn remove_item(&self, id: LineItemId) -> LineItems {
        if self.0.len() <= 1 {
            return self.clone();
        }
        LineItems(
            self.0
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        )
    }

    /// Applies a raw field edit to the item with `id`.
    ///
    /// Quantity and unit price are clamped (see
    /// [`crate::validation::clamp_quantity`] and
    /// [`crate::validation::clamp_amount`]); text fields are stored verbatim.
    /// An unknown `id` returns the list unchanged.
    pub fn update_item(&self, id: LineItemId, field: ItemField, raw: &str) -> LineItems {
        LineItems(
            self.0
                .iter()
                .map(|item| {
                    if item.id == id {
                        Arc::new(item.with_field(field, raw))
                    } else {
                        Arc::clone(item)
                    }
                })
                .collect(),
        )
    }
}

impl Default for LineItems {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
