//! Pallet chargeable-weight wizard library
//!
//! A three-step terminal wizard: pick a standard pallet footprint (UK or
//! EU), enter `height,weight` pairs, and read off each pallet's chargeable
//! freight weight plus the running total.

pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod parser;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, WizardState, WizardStep};
pub use error::{Result, WizardError};
pub use input::InputBuffer;
pub use types::{Pallet, PalletTemplate, PalletType, VOLUMETRIC_DIVISOR, WeightBasis};
