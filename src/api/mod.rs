pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
