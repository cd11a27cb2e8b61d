pub mod routes;
pub mod server;

mod assets;
mod error;

pub use error::{Result, WebError};
pub use server::{app, start_server, AppState};
