pub mod error;
pub mod events;
pub mod id;
pub mod result;

pub use error::*;
pub use events::*;
pub use id::*;
pub use result::*;
