use garden_plot::{
    logic::growth::FULL_SUN_HOURS,
    models::{
        garden::GardenPlot,
        plant::{Plant, PlantOptions, SharedPlant},
    },
};

fn plant(name: &str, height: u32) -> SharedPlant {
    Plant::with_options(
        name,
        PlantOptions {
            height,
            ..PlantOptions::default()
        },
    )
    .into()
}

/// Waters the plant, gives it `hours` of sunlight and runs one grow cycle.
fn tend(plant: &SharedPlant, hours: u32) -> u32 {
    plant.water();
    plant.give_sunlight(hours);
    plant.grow()
}

fn assert_plant_state(plant: &SharedPlant, height: u32, watered: bool, sunlight_hours: u32) {
    let state = plant.snapshot();
    assert_eq!(
        state.height(),
        height,
        "{} should be {height} tall, got {}",
        state.name(),
        state.height()
    );
    assert_eq!(
        state.is_watered(),
        watered,
        "{} should {}be watered",
        state.name(),
        if watered { "" } else { "not " }
    );
    assert_eq!(
        state.sunlight_hours(),
        sunlight_hours,
        "{} should have {sunlight_hours}h of sunlight, got {}h",
        state.name(),
        state.sunlight_hours()
    );
}

// ---------------------------------------------------------------------------
// Scenario 1: a carrot through one full cycle
// ---------------------------------------------------------------------------
#[test]
fn scenario_carrot_full_cycle() {
    let carrot = plant("Carrot", 2);
    let growth = tend(&carrot, 4);
    assert_eq!(growth, 2);
    assert_plant_state(&carrot, 4, false, 0);
}

// ---------------------------------------------------------------------------
// Scenario 2: growth amount depends on the sunlight threshold
// ---------------------------------------------------------------------------
#[test]
fn scenario_growth_by_sunlight() {
    for hours in 0..=FULL_SUN_HOURS + 3 {
        let basil = plant("Basil", 10);
        let expected = if hours >= FULL_SUN_HOURS { 2 } else { 1 };
        tend(&basil, hours);
        assert_eq!(
            basil.height(),
            10 + expected,
            "With {hours}h of sun a watered plant must grow by {expected}"
        );
        assert_plant_state(&basil, 10 + expected, false, 0);
    }
}

// ---------------------------------------------------------------------------
// Scenario 3: a dry plant never grows, whatever the sunlight
// ---------------------------------------------------------------------------
#[test]
fn scenario_dry_plant_never_grows() {
    let leek = plant("Leek", 3);
    for hours in [0, 2, FULL_SUN_HOURS, 24] {
        leek.give_sunlight(hours);
        assert_eq!(leek.grow(), 0, "Unwatered leek must not grow with {hours}h of sun");
        assert_plant_state(&leek, 3, false, 0);
    }
}

// ---------------------------------------------------------------------------
// Scenario 4: only the tomato is watered
// ---------------------------------------------------------------------------
#[test]
fn scenario_only_tomato_watered() {
    let mut plot = GardenPlot::new();
    let tomato = plant("Tomato", 0);
    let carrot = plant("Carrot", 0);
    plot.add_plant(tomato.clone());
    plot.add_plant(carrot.clone());

    tomato.water();
    assert!(
        !plot.all_watered(),
        "Carrot is dry, so the plot must not report all plants watered"
    );

    carrot.water();
    assert!(plot.all_watered(), "Both plants watered, the plot must agree");
}

// ---------------------------------------------------------------------------
// Scenario 5: the plot observes plants grown elsewhere
// ---------------------------------------------------------------------------
#[test]
fn scenario_tallest_after_a_season() {
    let mut plot = GardenPlot::new();
    assert!(plot.tallest_plant().is_none(), "A new plot has no tallest plant");
    assert!(plot.all_watered(), "A new plot is vacuously all watered");

    let carrot = plant("Carrot", 2);
    let tomato = plant("Tomato", 5);
    plot.add_plant(carrot.clone());
    plot.add_plant(tomato.clone());
    let tallest = plot.tallest_plant().expect("plot has plants");
    assert!(tallest.ptr_eq(&tomato), "Tomato (5) must be taller than carrot (2)");

    // Two sunny cycles for the carrot and nothing for the tomato.
    tend(&carrot, 6);
    tend(&carrot, 6);
    assert_plant_state(&carrot, 6, false, 0);
    let tallest = plot.tallest_plant().expect("plot has plants");
    assert_eq!(
        tallest.name(),
        "Carrot",
        "Carrot grew to 6 outside the plot, the plot must see it"
    );
}

// ---------------------------------------------------------------------------
// Scenario 6: one grow cycle over the whole plot
// ---------------------------------------------------------------------------
#[test]
fn scenario_grow_whole_plot() {
    let mut plot = GardenPlot::new();
    let tomato = plot.plant(Plant::new("Tomato"));
    let carrot = plot.plant(Plant::new("Carrot"));
    let radish = plot.plant(Plant::new("Radish"));

    tomato.water();
    tomato.give_sunlight(FULL_SUN_HOURS);
    carrot.water();
    radish.give_sunlight(FULL_SUN_HOURS);

    assert_eq!(plot.grow_all(), 3);
    assert_plant_state(&tomato, 2, false, 0);
    assert_plant_state(&carrot, 1, false, 0);
    assert_plant_state(&radish, 0, false, 0);
}
