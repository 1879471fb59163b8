use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Catalog Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
}

/// Anything that can be listed in a picker.
pub trait PickerOption {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
}

impl PickerOption for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl PickerOption for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Order Types
// ============================================================================

/// Table identifier as handed over by the caller. Either form is accepted and
/// forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableNumber::Number(n) => write!(f, "{}", n),
            TableNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TableNumber {
    fn from(n: i64) -> Self {
        TableNumber::Number(n)
    }
}

impl From<String> for TableNumber {
    fn from(s: String) -> Self {
        TableNumber::Text(s)
    }
}

impl From<&str> for TableNumber {
    fn from(s: &str) -> Self {
        TableNumber::Text(s.to_string())
    }
}

/// Entry contract of the order screen, forwarded as-is to the finish screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRoute {
    pub number: TableNumber,
    pub order_id: String,
}

impl OrderRoute {
    pub fn new(number: impl Into<TableNumber>, order_id: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            order_id: order_id.into(),
        }
    }
}

/// One acknowledged entry of the in-progress order.
///
/// `amount` keeps the quantity exactly as it was typed; only the outbound
/// request carries the numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub order_id: String,
    pub product_id: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// Writes the amount the way a JavaScript client would: integral values
/// without a fraction, non-finite values as `null`.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if !amount.is_finite() {
        serializer.serialize_none()
    } else if amount.fract() == 0.0 && amount.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemResponse {
    pub id: String,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Tests
// ============================================================================
