//! Procedural headphones: part meshes, their hierarchy and the rig animating it.

mod assembly;
mod config;
mod error;
pub mod parts;
mod rig;

pub use assembly::*;
pub use config::*;
pub use error::*;
pub use rig::*;
