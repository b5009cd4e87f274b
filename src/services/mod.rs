pub mod navbar;
pub mod page;
pub mod portal;
pub mod read_state;

pub use navbar::*;
pub use page::*;
pub use portal::*;
pub use read_state::*;
