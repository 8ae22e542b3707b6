//! # Core Engine Module
//!
//! Shared configuration for the motion and collision subsystems.

pub mod config;

pub use config::{
    CollisionConfig,
    Config,
    ConfigError,
    ConfigFormat,
    EngineConfig,
    MotionConfig,
};
