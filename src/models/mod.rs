pub mod health;
pub mod ready;
pub mod message;
pub mod error;

pub use health::*;
pub use ready::*;
pub use message::*;
pub use error::*;
