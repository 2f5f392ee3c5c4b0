//! Draft validation: field presence and range checks, applied in a fixed
//! order with the first failing rule reported.

use crate::error::{CarzError, Result};
use crate::model::{commission_year, CarDraft};
use chrono::{Datelike, Utc};

/// No car predates the Benz Patent-Motorwagen.
pub const EARLIEST_YEAR: i32 = 1886;

/// Checks a draft before it is sent to the server. Returns the first
/// violated rule as a validation error.
pub fn validate_draft(draft: &CarDraft) -> Result<()> {
    let current_year = Utc::now().year();

    if draft.brand.is_empty() || draft.model.is_empty() {
        return fail("The brand and model are required.");
    }

    let year = draft.day_of_commission.as_deref().and_then(commission_year);
    match year {
        Some(y) if (EARLIEST_YEAR..=current_year).contains(&y) => {}
        _ => {
            return fail(format!(
                "Enter a valid commissioning year ({} to {}).",
                EARLIEST_YEAR, current_year
            ))
        }
    }

    if draft.owner.is_empty() {
        return fail("The owner is required.");
    }

    if !draft.electric && draft.fuel_use.is_nan() {
        return fail("For a non-electric car the fuel consumption must be a number.");
    }

    if draft.fuel_use < 0.0 {
        return fail("The fuel consumption cannot be negative.");
    }

    Ok(())
}

fn fail(message: impl Into<String>) -> Result<()> {
    Err(CarzError::Validation(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::CarForm;

    fn valid_form() -> CarForm {
        CarForm {
            brand: Some("Toyota".into()),
            model: Some("Corolla".into()),
            year: Some(2018),
            consumption: Some("6,1".into()),
            electric: Some(false),
            owner: Some("Teszt Elek".into()),
        }
    }

    fn message(form: CarForm) -> String {
        validate_draft(&form.into_draft()).unwrap_err().to_string()
    }

    #[test]
    fn accepts_a_complete_draft() {
        assert!(validate_draft(&valid_form().into_draft()).is_ok());
    }

    #[test]
    fn rejects_missing_brand_or_model_first() {
        let mut form = valid_form();
        form.brand = None;
        // Even with a second violation present, the brand/model rule wins.
        form.owner = None;
        assert_eq!(message(form), "The brand and model are required.");
    }

    #[test]
    fn rejects_missing_year() {
        let mut form = valid_form();
        form.year = None;
        assert!(message(form).starts_with("Enter a valid commissioning year"));
    }

    #[test]
    fn rejects_pre_automobile_years() {
        let mut form = valid_form();
        form.year = Some(1885);
        assert!(message(form).starts_with("Enter a valid commissioning year"));
    }

    #[test]
    fn rejects_future_years() {
        let mut form = valid_form();
        form.year = Some(Utc::now().year() + 1);
        assert!(message(form).starts_with("Enter a valid commissioning year"));
    }

    #[test]
    fn accepts_the_boundary_years() {
        let mut form = valid_form();
        form.year = Some(EARLIEST_YEAR);
        assert!(validate_draft(&form.clone().into_draft()).is_ok());
        form.year = Some(Utc::now().year());
        assert!(validate_draft(&form.into_draft()).is_ok());
    }

    #[test]
    fn rejects_missing_owner() {
        let mut form = valid_form();
        form.owner = None;
        assert_eq!(message(form), "The owner is required.");
    }

    #[test]
    fn rejects_unparseable_consumption_for_petrol_cars() {
        let mut form = valid_form();
        form.consumption = Some("sok".into());
        assert_eq!(
            message(form),
            "For a non-electric car the fuel consumption must be a number."
        );
    }

    #[test]
    fn electric_cars_skip_the_consumption_rule() {
        let mut form = valid_form();
        form.electric = Some(true);
        form.consumption = Some("sok".into());
        assert!(validate_draft(&form.into_draft()).is_ok());
    }

    #[test]
    fn rejects_negative_consumption() {
        let mut form = valid_form();
        form.consumption = Some("-1,5".into());
        assert_eq!(message(form), "The fuel consumption cannot be negative.");
    }

    #[test]
    fn empty_consumption_passes_as_zero() {
        // The original form treated an empty consumption input as 0.
        let mut form = valid_form();
        form.consumption = None;
        assert!(validate_draft(&form.into_draft()).is_ok());
    }
}
