//! Input handling
//!
//! The engine's only input source is the device orientation sensor; see
//! [`motion`].

pub mod motion;
