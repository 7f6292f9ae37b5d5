//! Host-side collaborators for the interpreter core
//!
//! Everything the core treats as external lives here: the logical/physical
//! key mapping tables, the plane-to-RGBA frame compositor, and the
//! file-backed persistent flag store.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod flags;
mod frame;
mod keymap;

pub use flags::FlagFile;
pub use frame::Compositor;
pub use keymap::{Key, Keymap};
