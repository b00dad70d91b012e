use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::garden::GardenPlot;

/// Process-wide application state: the single in-memory garden plot.
#[derive(Debug, Default)]
pub struct AppState {
    plot: RwLock<GardenPlot>,
}

impl AppState {
    pub fn plot(&self) -> RwLockReadGuard<'_, GardenPlot> {
        self.plot.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn plot_mut(&self) -> RwLockWriteGuard<'_, GardenPlot> {
        self.plot.write().unwrap_or_else(PoisonError::into_inner)
    }
}
