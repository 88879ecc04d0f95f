//! # Validation Module
//!
//! Rules a line item must pass before it may enter the cart.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (shopcart-api)                                │
//! │  └── Body must be JSON with unitPrice and quantity of the right type   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Lenient: name must be present and non-empty                       │
//! │  └── Strict:  + unitPrice finite and >= 0, quantity >= 0               │
//! │                                                                         │
//! │  Either layer failing yields the same 400 response.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lenient policy is the default: negative prices and quantities are
//! accepted. Independently of the policy, [`crate::CartService`] refuses an
//! item whose addition would make the cart total non-finite.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validation Policy
// =============================================================================

/// How thoroughly added items are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Only the name is checked.
    #[default]
    Lenient,

    /// Name, price and quantity are all checked.
    Strict,
}

impl ValidationPolicy {
    /// Validates a candidate line item under this policy.
    pub fn validate(&self, item: &LineItem) -> ValidationResult<()> {
        validate_name(&item.name)?;

        if *self == ValidationPolicy::Strict {
            validate_unit_price(item.unit_price)?;
            validate_quantity(item.quantity)?;
        }

        Ok(())
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Lenient => write!(f, "lenient"),
            ValidationPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(ValidationPolicy::Lenient),
            "strict" => Ok(ValidationPolicy::Strict),
            other => Err(format!(
                "Unknown validation policy: '{}'. Valid options: lenient, strict",
                other
            )),
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
///
/// Whitespace is not trimmed: `" "` is a valid name.
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::validate_name;
///
/// assert!(validate_name("Product1").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (no NaN or infinity)
/// - Must be non-negative (zero is a free item)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unitPrice".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// Zero is accepted; it contributes nothing to the total.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
