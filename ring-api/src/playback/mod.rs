//! Playback control
//!
//! - [`resolver`]: maps (path, platform) to the external player command
//! - [`coordinator`]: single-slot admission control and background launch

pub mod coordinator;
pub mod resolver;

pub use coordinator::{PlaybackCoordinator, Player};
pub use resolver::{resolve, PlaybackCommand, Platform};
