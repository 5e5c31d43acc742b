pub mod handlers;
pub mod routes;
mod services;

pub use routes::routes;
