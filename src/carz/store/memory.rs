use super::CarStore;
use crate::error::{CarzError, Result};
use crate::model::{Car, CarDraft};

/// In-memory simulation of the registry server, for testing.
/// Assigns ids sequentially and keeps records in insertion order, the way
/// the server returns them.
#[derive(Default)]
pub struct InMemoryStore {
    cars: Vec<Car>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarStore for InMemoryStore {
    fn list_cars(&self) -> Result<Vec<Car>> {
        Ok(self.cars.clone())
    }

    fn get_car(&self, id: i64) -> Result<Car> {
        self.cars
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CarzError::CarNotFound(id))
    }

    fn create_car(&mut self, draft: &CarDraft) -> Result<Option<Car>> {
        self.next_id += 1;
        let car = Car::from_draft(self.next_id, draft);
        self.cars.push(car.clone());
        Ok(Some(car))
    }

    fn update_car(&mut self, id: i64, draft: &CarDraft) -> Result<Option<Car>> {
        let slot = self
            .cars
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CarzError::CarNotFound(id))?;
        *slot = Car::from_draft(id, draft);
        Ok(Some(slot.clone()))
    }

    fn delete_car(&mut self, id: i64) -> Result<()> {
        let position = self
            .cars
            .iter()
            .position(|c| c.id == id)
            .ok_or(CarzError::CarNotFound(id))?;
        self.cars.remove(position);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::day_of_commission_from_year;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_car(mut self, brand: &str, model: &str, year: i32, owner: &str) -> Self {
            let draft = CarDraft {
                brand: brand.to_string(),
                model: model.to_string(),
                day_of_commission: Some(day_of_commission_from_year(year)),
                fuel_use: 6.5,
                electric: false,
                owner: owner.to_string(),
            };
            self.store.create_car(&draft).unwrap();
            self
        }

        pub fn with_electric_car(
            mut self,
            brand: &str,
            model: &str,
            year: i32,
            owner: &str,
        ) -> Self {
            let draft = CarDraft {
                brand: brand.to_string(),
                model: model.to_string(),
                day_of_commission: Some(day_of_commission_from_year(year)),
                fuel_use: 0.0,
                electric: true,
                owner: owner.to_string(),
            };
            self.store.create_car(&draft).unwrap();
            self
        }

        pub fn with_cars(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = CarDraft {
                    brand: format!("Brand {}", i + 1),
                    model: format!("Model {}", i + 1),
                    day_of_commission: Some(day_of_commission_from_year(2000 + i as i32)),
                    fuel_use: 6.0,
                    electric: false,
                    owner: format!("Owner {}", i + 1),
                };
                self.store.create_car(&draft).unwrap();
            }
            self
        }
    }
}
