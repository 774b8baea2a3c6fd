//! src/ui.rs
//!
//! Layout tree used to compose each frame.

pub mod node;

pub use node::{Node, Surface, group, leaf};
