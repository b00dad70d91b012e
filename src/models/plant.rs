use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use serde::Serialize;
use utoipa::ToSchema;

use crate::logic::growth::growth_for;

/// Initial growth state of a new plant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlantOptions {
    pub height: u32,
    pub watered: bool,
    pub sunlight_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    name: String,
    height: u32,
    watered: bool,
    /// Sunlight accumulated since the last grow cycle.
    sunlight_hours: u32,
}

impl Plant {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, PlantOptions::default())
    }

    pub fn with_options(name: impl Into<String>, options: PlantOptions) -> Self {
        Self {
            name: name.into(),
            height: options.height,
            watered: options.watered,
            sunlight_hours: options.sunlight_hours,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_watered(&self) -> bool {
        self.watered
    }

    pub fn sunlight_hours(&self) -> u32 {
        self.sunlight_hours
    }

    pub fn water(&mut self) {
        self.watered = true;
    }

    pub fn give_sunlight(&mut self, hours: u32) {
        self.sunlight_hours = self.sunlight_hours.saturating_add(hours);
    }

    /// Runs one grow cycle and returns how much the plant grew.
    ///
    /// The cycle consumes its inputs: water and sunlight are reset even when
    /// the plant did not grow.
    pub fn grow(&mut self) -> u32 {
        let growth = growth_for(self.watered, self.sunlight_hours);
        debug!(
            "{} grows by {growth} (watered: {}, sunlight: {}h)",
            self.name, self.watered, self.sunlight_hours
        );
        self.height = self.height.saturating_add(growth);
        self.watered = false;
        self.sunlight_hours = 0;
        growth
    }
}

/// Shared handle to a plant.
///
/// Clones point at the same plant, so a garden plot holding a handle sees
/// every change made through any other clone.
#[derive(Debug, Clone)]
pub struct SharedPlant(Arc<RwLock<Plant>>);

impl SharedPlant {
    pub fn new(plant: Plant) -> Self {
        Self(Arc::new(RwLock::new(plant)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Plant> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Plant> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Plant {
        self.read().clone()
    }

    /// True when both handles refer to the same plant (not merely an equal one).
    pub fn ptr_eq(&self, other: &SharedPlant) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn name(&self) -> String {
        self.read().name().to_owned()
    }

    pub fn height(&self) -> u32 {
        self.read().height()
    }

    pub fn is_watered(&self) -> bool {
        self.read().is_watered()
    }

    pub fn sunlight_hours(&self) -> u32 {
        self.read().sunlight_hours()
    }

    pub fn water(&self) {
        self.write().water();
    }

    pub fn give_sunlight(&self, hours: u32) {
        self.write().give_sunlight(hours);
    }

    pub fn grow(&self) -> u32 {
        self.write().grow()
    }
}

impl From<Plant> for SharedPlant {
    fn from(plant: Plant) -> Self {
        Self::new(plant)
    }
}
