pub mod handlers;
pub mod manifest;
pub mod middleware;
pub mod ranking;
pub mod routes;

pub use routes::create_router;
