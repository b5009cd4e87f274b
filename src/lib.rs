pub mod api;
pub mod config;
pub mod events;
pub mod models;
pub mod services;

pub use api::*;
pub use config::*;
pub use events::*;
pub use models::*;
pub use services::*;
