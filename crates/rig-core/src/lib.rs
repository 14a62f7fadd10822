//! Platform-neutral core of the hub journey page.
//!
//! The web front-end feeds a raw scroll offset into [`ScrollRig::update`]
//! once per animation frame, renders the returned [`SceneFrame`], and lets
//! the overlay react through the registered progress handler.

pub mod config;
pub mod constants;
pub mod filter;
pub mod publisher;
pub mod rig;
pub mod scene;
pub mod sections;

pub use config::*;
pub use constants::*;
pub use filter::*;
pub use publisher::*;
pub use rig::*;
pub use scene::*;
pub use sections::*;
