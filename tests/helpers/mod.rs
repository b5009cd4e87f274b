#![allow(unused_imports)]
pub mod events;
pub mod gateway;
pub mod notifications;

pub use events::*;
pub use gateway::*;
pub use notifications::*;
