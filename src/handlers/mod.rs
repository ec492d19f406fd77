pub mod health;
pub mod message;
pub mod fallback;

pub use health::*;
pub use message::*;
pub use fallback::*;
