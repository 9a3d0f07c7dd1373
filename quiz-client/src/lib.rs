pub mod countdown;
pub mod leaderboard;
pub mod net;
pub mod nickname;
pub mod session;

// Re-export main components
pub use countdown::*;
pub use leaderboard::*;
pub use net::*;
pub use nickname::*;
pub use session::*;
