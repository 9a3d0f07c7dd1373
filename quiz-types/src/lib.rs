pub mod game;
pub mod messages;

// Re-export all types
pub use game::*;
pub use messages::*;
