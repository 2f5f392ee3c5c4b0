//! Core data types for car records.
//!
//! The wire format is the playground server's: camelCase keys, a
//! year-derived `dayOfCommission` date string, and `fuelUse` zeroed for
//! electric cars. [`Car`] is a record as read from the server (id included);
//! [`CarDraft`] is the id-less payload sent on create. Servers in the wild
//! omit or null fields freely, so everything except the id deserializes
//! leniently.

use serde::{Deserialize, Serialize};

/// A car record held by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    /// Commission date as `"YYYY-MM-DD"`; this client always writes
    /// `"{year}-01-01"`.
    #[serde(default)]
    pub day_of_commission: Option<String>,
    /// Liters per 100 km. `Some(0.0)` for electric cars, `None` when the
    /// server holds no figure.
    #[serde(default)]
    pub fuel_use: Option<f64>,
    #[serde(default)]
    pub electric: bool,
    #[serde(default)]
    pub owner: String,
}

impl Car {
    pub fn from_draft(id: i64, draft: &CarDraft) -> Self {
        Self {
            id,
            brand: draft.brand.clone(),
            model: draft.model.clone(),
            day_of_commission: draft.day_of_commission.clone(),
            fuel_use: Some(draft.fuel_use),
            electric: draft.electric,
            owner: draft.owner.clone(),
        }
    }

    /// Commissioning year, if the record carries a parseable date.
    pub fn year(&self) -> Option<i32> {
        self.day_of_commission.as_deref().and_then(commission_year)
    }
}

/// A car record without a server id, as sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub day_of_commission: Option<String>,
    pub fuel_use: f64,
    pub electric: bool,
    pub owner: String,
}

/// Builds the commission date string from a year.
pub fn day_of_commission_from_year(year: i32) -> String {
    format!("{}-01-01", year)
}

/// Extracts the year from a `"YYYY-MM-DD"` commission date.
pub fn commission_year(date: &str) -> Option<i32> {
    date.get(..4)?.parse().ok()
}
