mod health;
mod notes;

pub use health::health_routes;
pub use notes::notes_routes;
