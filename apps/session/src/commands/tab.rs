//! # Tab Commands

use tracing::debug;

use crate::error::ApiError;
use crate::state::Tab;

/// Switches the active tab. Form state of the other tabs is kept.
pub fn select_tab(active: &mut Tab, tab: &str) -> Result<Tab, ApiError> {
    debug!(tab = %tab, "select_tab command");
    *active = tab.parse()?;
    Ok(*active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tab() {
        let mut active = Tab::default();
        assert_eq!(select_tab(&mut active, "number").unwrap(), Tab::OrderNumber);

        assert!(select_tab(&mut active, "nowhere").is_err());
        assert_eq!(active, Tab::OrderNumber);
    }
}
