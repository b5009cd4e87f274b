pub mod dto;
pub mod error;
pub mod gateway;

pub use error::*;
pub use gateway::*;
