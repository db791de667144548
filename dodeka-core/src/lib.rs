//! Board-agnostic core logic for the Dodeka dozenal watchface
//!
//! This crate contains all watchface logic that does not depend on the
//! platform it runs on:
//!
//! - Dozenal (base-12) numeral codec and display lookup tables
//! - Time, date, and temperature formatters
//! - User settings and their persistence interface
//! - The event engine driven by minute ticks and companion messages
//!
//! The host event loop, pixel rendering, flash driver, and message
//! transport are collaborators behind traits or plain data.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod dozenal;
pub mod format;
pub mod settings;
pub mod watchface;
