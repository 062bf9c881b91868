//! # keyglow
//!
//! Layer-indicator engine for keyboard firmware: keeps a board's LED/RGB
//! indicators in sync with the active keymap layer and the host's lock-key
//! state, with an auto-off sleep timer on the base layer.
//!
//! The layer-resolution engine publishes a [`event::LayerChangeEvent`] once
//! per distinct resolved-layer transition, and the host transport publishes
//! [`event::LedIndicatorEvent`]s carrying the lock-key bitfield. A
//! [`controller::layer_indicator::LayerIndicatorController`] subscribes to
//! both and drives an [`driver::IndicatorDriver`]:
//!
//! ```rust,ignore
//! use keyglow::config::{LayerIndicatorConfig, FIVE_LAYER_UNDERGLOW};
//! use keyglow::controller::layer_indicator::LayerIndicatorController;
//! use keyglow::driver::PwmRgb;
//!
//! let config = LayerIndicatorConfig {
//!     map: FIVE_LAYER_UNDERGLOW,
//!     ..Default::default()
//! };
//! let mut indicator = LayerIndicatorController::new(PwmRgb::new(r, g, b), config);
//! // Hand `indicator.run()` to the executor next to the other firmware tasks.
//! ```
//!
//! Boards with dedicated lock LEDs additionally run one
//! [`controller::lock_led::LockLedController`] per pin; boards where the
//! lock LEDs and the layer flags share hardware run a single controller over
//! a [`driver::LedBank`], and the later write wins.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]
#![allow(async_fn_in_trait)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod defer;
pub mod driver;
pub mod event;

pub use keyglow_types as types;

/// Mutex flavor behind the static event channels.
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
