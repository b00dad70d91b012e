pub mod plants;
pub mod plot;
