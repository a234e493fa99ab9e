//! # media_engine Component
//!
//! The player's top-level facade: opens a source, wires the codec/render/
//! output components the other crates provide into one
//! [`mediacore_media_pipeline::PlaybackController`], and exposes the
//! transport controls a UI layer drives (spec §3/§4.9).
//!
//! # Examples
//!
//! ```no_run
//! use mediacore_media_engine::{Player, PlayerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut player = Player::new(PlayerConfig::default());
//! player.open("file:///movie.mp4")?;
//! player.play()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod engine;
mod types;

pub use engine::Player;
pub use types::PlayerConfig;
