//! # Expense Category Commands
//!
//! Read-only lookup in the static category table. The order form's cost
//! type field stays free text; these commands only back the picker.

use tracing::debug;

use procure_core::{find_category, search_categories, ExpenseCategory};

use crate::error::ApiError;

/// Lists categories, optionally filtered by a search term.
pub fn list_expense_categories(query: Option<&str>) -> Vec<ExpenseCategory> {
    debug!(?query, "list_expense_categories command");
    search_categories(query.unwrap_or_default())
        .copied()
        .collect()
}

/// Gets one category by code.
pub fn get_expense_category(code: &str) -> Result<ExpenseCategory, ApiError> {
    debug!(code = %code, "get_expense_category command");
    find_category(code)
        .copied()
        .ok_or_else(|| ApiError::not_found("Expense category", code))
}
