//! Terminal host: crossterm input, raw mode guard and frame rendering.

pub mod events;
pub mod raw;
pub mod render;
