//! Display-side plumbing for the Dodeka watchface
//!
//! This crate provides:
//! - `Screen`: a character buffer for the watchface layout
//! - `DisplayBackend` trait for the platform rendering layer
//! - `BatteryIcon`: charge-percentage to bitmap-index mapping
//!
//! The core engine produces formatted strings; this crate collects them
//! between ticks and pushes them to whichever backend the platform
//! implements. Pixel drawing, fonts, and layer management stay on the
//! platform side.

#![no_std]

pub mod backend;
pub mod battery;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, TextRegion};
pub use battery::BatteryIcon;
pub use screen::Screen;
