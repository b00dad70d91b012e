/// Sunlight hours a watered plant needs in one cycle to get the full growth bonus.
pub const FULL_SUN_HOURS: u32 = 4;
pub const WATERED_GROWTH: u32 = 1;
pub const FULL_SUN_GROWTH: u32 = 2;

/// Height gained by one grow cycle.
/// Water is mandatory: without it sunlight is wasted and the plant does not grow.
pub fn growth_for(watered: bool, sunlight_hours: u32) -> u32 {
    match (watered, sunlight_hours >= FULL_SUN_HOURS) {
        (true, true) => FULL_SUN_GROWTH,
        (true, false) => WATERED_GROWTH,
        (false, _) => 0,
    }
}
