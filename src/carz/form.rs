//! # Form Field Extraction
//!
//! Bridges command-line field flags and [`CarDraft`] payloads, the same job
//! the original web form did. The rules carried over:
//!
//! - Consumption accepts a comma decimal separator (`"5,5"` parses as 5.5)
//!   and is echoed back with one (`5.5` prints as `"5,5"`).
//! - The electric flag disables consumption: whatever value was supplied or
//!   prefilled, an electric draft always carries `fuelUse: 0`.
//! - An absent consumption on a non-electric car falls back to `0`; an
//!   unparseable one becomes NaN and is rejected by the validator, so a bad
//!   value is reported in the validator's rule order rather than here.
//! - Edit works by prefill-and-override: the fetched record fills the form,
//!   the provided flags replace individual fields, and the commission date
//!   is rebuilt as `"{year}-01-01"` from whichever year survives.

use crate::model::{commission_year, day_of_commission_from_year, Car, CarDraft};

/// Form state for add and edit. `None` means "field not filled in": empty
/// for add, keep-existing for edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub consumption: Option<String>,
    pub electric: Option<bool>,
    pub owner: Option<String>,
}

impl CarForm {
    /// Fills a form from an existing record, as the edit screen did.
    /// Consumption is only prefilled for non-electric cars (the input was
    /// disabled and blanked for electric ones).
    pub fn prefill(car: &Car) -> Self {
        let consumption = if car.electric {
            None
        } else {
            car.fuel_use.map(format_consumption)
        };
        Self {
            brand: Some(car.brand.clone()),
            model: Some(car.model.clone()),
            year: car.day_of_commission.as_deref().and_then(commission_year),
            consumption,
            electric: Some(car.electric),
            owner: Some(car.owner.clone()),
        }
    }

    /// Overlays `overrides` on this form; a provided field wins, an absent
    /// one keeps the current value.
    pub fn merged_with(self, overrides: CarForm) -> Self {
        Self {
            brand: overrides.brand.or(self.brand),
            model: overrides.model.or(self.model),
            year: overrides.year.or(self.year),
            consumption: overrides.consumption.or(self.consumption),
            electric: overrides.electric.or(self.electric),
            owner: overrides.owner.or(self.owner),
        }
    }

    /// Extracts the draft payload from the form fields.
    pub fn into_draft(self) -> CarDraft {
        let electric = self.electric.unwrap_or(false);
        let fuel_use = if electric {
            0.0
        } else {
            match self.consumption.as_deref() {
                Some(s) if !s.is_empty() => parse_consumption(s),
                _ => 0.0,
            }
        };

        CarDraft {
            brand: self.brand.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            day_of_commission: self.year.map(day_of_commission_from_year),
            fuel_use,
            electric,
            owner: self.owner.unwrap_or_default(),
        }
    }
}

/// Parses a consumption figure, accepting `,` as the decimal separator.
/// Unparseable input yields NaN for the validator to reject.
pub fn parse_consumption(s: &str) -> f64 {
    s.trim().replace(',', ".").parse().unwrap_or(f64::NAN)
}

/// Formats a consumption figure with a comma decimal separator, matching
/// what the form accepts.
pub fn format_consumption(value: f64) -> String {
    format!("{}", value).replace('.', ",")
}
