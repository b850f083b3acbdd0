//! UI components.

pub mod fireworks;
