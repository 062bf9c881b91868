//! # Keyglow Types
//!
//! This crate provides the fundamental type definitions and data structures
//! used in keyglow.
//!
//! ## Modules
//!
//! - [`color`] - HSV/RGB color values and the stock per-layer underglow colors
//! - [`indicator`] - Per-layer indicator states (off, color, discrete LED flags)
//! - [`led_indicator`] - Host lock-key indicator state and operations
//!
//! ## Integration with the keyglow ecosystem
//!
//! - **keyglow**: the engine uses these types for its events, configuration
//!   and driver surface
//! - split-keyboard transports serialize the wire-crossing types with
//!   `serde`/`postcard`

#![no_std]

pub mod color;
pub mod indicator;
pub mod led_indicator;
