use log::debug;

use crate::models::plant::{Plant, SharedPlant};

/// An ordered, append-only collection of plants.
///
/// Entries are shared handles: the plot observes changes made through any
/// other handle to the same plant. The same plant may be added more than once.
#[derive(Debug, Clone, Default)]
pub struct GardenPlot {
    plants: Vec<SharedPlant>,
}

impl GardenPlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_plant(&mut self, plant: SharedPlant) {
        self.plants.push(plant);
    }

    /// Wraps `plant` in a handle, adds it and returns the handle.
    pub fn plant(&mut self, plant: Plant) -> SharedPlant {
        let handle = SharedPlant::new(plant);
        self.add_plant(handle.clone());
        handle
    }

    pub fn plants(&self) -> &[SharedPlant] {
        &self.plants
    }

    pub fn get(&self, index: usize) -> Option<&SharedPlant> {
        self.plants.get(index)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Position and handle of the tallest plant; ties go to the first one added.
    pub fn tallest_entry(&self) -> Option<(usize, &SharedPlant)> {
        let mut best: Option<(usize, u32)> = None;
        for (index, plant) in self.plants.iter().enumerate() {
            let height = plant.height();
            match best {
                Some((_, best_height)) if best_height >= height => {}
                _ => best = Some((index, height)),
            }
        }
        best.map(|(index, _)| (index, &self.plants[index]))
    }

    /// The tallest plant, or `None` when the plot is empty.
    pub fn tallest_plant(&self) -> Option<SharedPlant> {
        self.tallest_entry().map(|(_, plant)| plant.clone())
    }

    /// True when every plant is watered, including when there are none.
    pub fn all_watered(&self) -> bool {
        self.plants.iter().all(SharedPlant::is_watered)
    }

    /// Runs one grow cycle on every entry, in insertion order, and returns the total growth.
    pub fn grow_all(&self) -> u32 {
        let total = self
            .plants
            .iter()
            .fold(0u32, |total, plant| total.saturating_add(plant.grow()));
        debug!("Plot of {} plant(s) grew by {total}", self.plants.len());
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plant::PlantOptions;

    fn plant_of_height(name: &str, height: u32) -> Plant {
        Plant::with_options(
            name,
            PlantOptions {
                height,
                ..PlantOptions::default()
            },
        )
    }

    fn names(plot: &GardenPlot) -> Vec<String> {
        plot.plants().iter().map(SharedPlant::name).collect()
    }

    #[test]
    fn test_new_plot_is_empty() {
        let plot = GardenPlot::new();
        assert!(plot.is_empty());
        assert_eq!(plot.len(), 0);
    }

    #[test]
    fn test_add_plant_preserves_order() {
        let mut plot = GardenPlot::new();
        plot.plant(Plant::new("Tomato"));
        plot.plant(Plant::new("Carrot"));
        plot.plant(Plant::new("Basil"));
        assert_eq!(names(&plot), ["Tomato", "Carrot", "Basil"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut plot = GardenPlot::new();
        let tomato = SharedPlant::new(Plant::new("Tomato"));
        plot.add_plant(tomato.clone());
        plot.add_plant(tomato.clone());
        assert_eq!(plot.len(), 2, "Adding the same plant twice must keep both entries");
        assert!(plot.plants()[0].ptr_eq(&plot.plants()[1]));
    }

    #[test]
    fn test_tallest_plant_empty_is_none() {
        let plot = GardenPlot::new();
        assert!(plot.tallest_plant().is_none(), "An empty plot has no tallest plant");
    }

    #[test]
    fn test_tallest_plant_picks_max_height() {
        let mut plot = GardenPlot::new();
        plot.plant(plant_of_height("Carrot", 2));
        let tomato = plot.plant(plant_of_height("Tomato", 5));
        let tallest = plot.tallest_plant().expect("plot is not empty");
        assert!(tallest.ptr_eq(&tomato), "Tomato (5) must be taller than carrot (2)");
    }

    #[test]
    fn test_tallest_plant_tie_goes_to_first() {
        let mut plot = GardenPlot::new();
        plot.plant(plant_of_height("Radish", 1));
        let first = plot.plant(plant_of_height("Leek", 4));
        plot.plant(plant_of_height("Celery", 4));
        let (index, tallest) = plot.tallest_entry().expect("plot is not empty");
        assert_eq!(index, 1);
        assert!(
            tallest.ptr_eq(&first),
            "On a tie the first plant added must win, got {}",
            tallest.name()
        );
    }

    #[test]
    fn test_tallest_plant_follows_outside_mutation() {
        let mut plot = GardenPlot::new();
        plot.plant(plant_of_height("Carrot", 2));
        let basil = plot.plant(plant_of_height("Basil", 1));
        basil.water();
        basil.give_sunlight(6);
        basil.grow();
        basil.water();
        basil.grow();
        assert_eq!(basil.height(), 4);
        let tallest = plot.tallest_plant().expect("plot is not empty");
        assert_eq!(tallest.name(), "Basil", "Growth through the handle must be seen by the plot");
    }

    #[test]
    fn test_all_watered_empty_is_true() {
        assert!(GardenPlot::new().all_watered(), "An empty plot is vacuously all watered");
    }

    #[test]
    fn test_all_watered_false_with_one_dry_plant() {
        let mut plot = GardenPlot::new();
        let tomato = plot.plant(Plant::new("Tomato"));
        plot.plant(Plant::new("Carrot"));
        tomato.water();
        assert!(!plot.all_watered(), "Carrot is dry so the plot is not all watered");
    }

    #[test]
    fn test_all_watered_true_when_every_plant_watered() {
        let mut plot = GardenPlot::new();
        for name in ["Tomato", "Carrot"] {
            plot.plant(Plant::new(name)).water();
        }
        assert!(plot.all_watered());
    }

    #[test]
    fn test_grow_all_totals_growth() {
        let mut plot = GardenPlot::new();
        let tomato = plot.plant(Plant::new("Tomato"));
        let carrot = plot.plant(Plant::new("Carrot"));
        plot.plant(Plant::new("Leek"));
        tomato.water();
        tomato.give_sunlight(4);
        carrot.water();
        assert_eq!(plot.grow_all(), 3, "Tomato (+2) + carrot (+1) + leek (0) = 3");
        assert!(!plot.plants().iter().any(SharedPlant::is_watered));
    }

    #[test]
    fn test_grow_all_duplicate_grows_once() {
        let mut plot = GardenPlot::new();
        let tomato = SharedPlant::new(Plant::new("Tomato"));
        plot.add_plant(tomato.clone());
        plot.add_plant(tomato.clone());
        tomato.water();
        assert_eq!(plot.grow_all(), 1, "Second cycle sees the reset state");
        assert_eq!(tomato.height(), 1);
    }
}
