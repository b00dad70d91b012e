pub mod garden;
pub mod plant;
pub mod request;
