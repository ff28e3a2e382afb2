#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod edge;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
mod ui;

#[cfg(feature = "std")]
pub use cli::{parse_move, Session};
pub use common::*;
pub use config::*;
pub use edge::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use ui::{render, MatchView};
