//! Active tab of the forms shell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use procure_core::ValidationError;

/// The three tabs of the ordering system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Order,
    CreditCard,
    OrderNumber,
}

impl Tab {
    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Order => "Bestellung",
            Tab::CreditCard => "Virtuelle Kreditkarte",
            Tab::OrderNumber => "Bestellnummer",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "order" | "bestellung" => Ok(Tab::Order),
            "card" | "credit-card" | "kreditkarte" => Ok(Tab::CreditCard),
            "number" | "order-number" | "bestellnummer" => Ok(Tab::OrderNumber),
            other => Err(ValidationError::InvalidFormat {
                field: "tab".to_string(),
                reason: format!("unknown tab '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parsing() {
        assert_eq!("card".parse::<Tab>().unwrap(), Tab::CreditCard);
        assert_eq!("Order-Number".parse::<Tab>().unwrap(), Tab::OrderNumber);
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(Tab::default(), Tab::Order);
    }
}
