//! Step-specific input parsing
//!
//! Turns the raw text-input buffer contents into validated domain values.
//! Each wizard step has one entry point; both fail fast with a recoverable
//! [`WizardError`] so the controller can re-prompt.

use crate::error::{Result, WizardError};
use crate::types::{Pallet, PalletTemplate};

/// Parse the step-1 pallet type choice.
///
/// Input is trimmed and matched case-insensitively against the catalog.
pub fn parse_type_choice(raw: &str) -> Result<PalletTemplate> {
    PalletTemplate::lookup(raw).ok_or(WizardError::InvalidPalletType)
}

/// Parse a step-2 batch of `height,weight` tokens.
///
/// Tokens are separated by runs of spaces and/or semicolons; empty tokens
/// are discarded. Each token splits on its first comma into a height field
/// and a weight field, both parsed as finite decimal numbers.
///
/// The batch is all-or-nothing: the first bad token fails the whole input
/// and no pallets are produced. Per-token error priority is
/// [`WizardError::MalformedPair`], then [`WizardError::InvalidHeight`],
/// then [`WizardError::InvalidWeight`].
pub fn parse_dimension_batch(raw: &str, template: &PalletTemplate) -> Result<Vec<Pallet>> {
    let mut pallets = Vec::new();

    for token in raw.split([' ', ';']).filter(|t| !t.is_empty()) {
        let (height, weight) = token
            .trim()
            .split_once(',')
            .ok_or(WizardError::MalformedPair)?;
        let height = parse_finite(height).ok_or(WizardError::InvalidHeight)?;
        let weight = parse_finite(weight).ok_or(WizardError::InvalidWeight)?;
        pallets.push(Pallet::from_template(template, height, weight));
    }

    Ok(pallets)
}

/// Parse a decimal field, rejecting the non-finite spellings `f64` accepts.
fn parse_finite(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
