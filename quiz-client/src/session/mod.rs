pub mod host;
pub mod player;

pub use host::{HostAction, HostEffect, HostSession, HostStatus, RoundControls};
pub use player::{PlayerAction, PlayerEffect, PlayerScreen, PlayerSession, PlayerStatus};
