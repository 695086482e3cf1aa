//! Wizard state definitions
//!
//! Contains the step state machine and the single mutable state instance
//! owned by the event loop.

use tracing::{debug, info};

use crate::error::WizardError;
use crate::input::InputBuffer;
use crate::parser;
use crate::types::{Pallet, PalletTemplate};

/// Wizard step for the chargeable-weight workflow.
///
/// The wizard progresses through these steps linearly. Steps only advance
/// forward; there is no way back.
///
/// # State Transitions
///
/// ```text
/// SelectType -> EnterDimensions -> ShowResults
/// ```
///
/// # Invariants
///
/// - Cannot reach `EnterDimensions` without a selected template
/// - Cannot reach `ShowResults` without at least one parsed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Step 1: choose the UK or EU pallet footprint.
    #[default]
    SelectType,
    /// Step 2: enter one or more `height,weight` pairs.
    EnterDimensions,
    /// Step 3: per-pallet breakdown and total chargeable weight.
    ShowResults,
}

impl WizardStep {
    /// Get the next step in the wizard sequence.
    ///
    /// Returns `None` at the final step.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::SelectType => Some(Self::EnterDimensions),
            Self::EnterDimensions => Some(Self::ShowResults),
            Self::ShowResults => None,
        }
    }

    /// Get the step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::SelectType => 1,
            Self::EnterDimensions => 2,
            Self::ShowResults => 3,
        }
    }

    /// Get the display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::SelectType => "Select Pallet Type",
            Self::EnterDimensions => "Enter Pallet Details",
            Self::ShowResults => "Calculation Results",
        }
    }
}

/// Complete wizard state.
///
/// Created once at startup and owned exclusively by the event loop; no
/// other component holds or mutates it.
#[derive(Debug, Default)]
pub struct WizardState {
    /// Current wizard step
    pub step: WizardStep,
    /// Live text-input buffer
    pub input: InputBuffer,
    /// Selected footprint template, set once step 1 succeeds
    pub selected: Option<PalletTemplate>,
    /// Accumulated pallets in entry order, append-only
    pub pallets: Vec<Pallet>,
    /// Last input error, displayed once then taken by the controller
    pub last_error: Option<WizardError>,
}

impl WizardState {
    /// Create the initial state: step 1, empty buffer, no template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a confirm (Enter) for the current step.
    ///
    /// On a parse failure the wizard stays on the current step, records the
    /// error, and leaves the buffer untouched so the user can edit it. A
    /// failing step-2 batch appends zero pallets.
    pub fn confirm(&mut self) {
        match self.step {
            WizardStep::SelectType => match parser::parse_type_choice(self.input.value()) {
                Ok(template) => {
                    info!("selected {} pallet template", template.pallet_type);
                    self.selected = Some(template);
                    self.input.clear();
                    self.advance();
                }
                Err(err) => self.fail(err),
            },
            WizardStep::EnterDimensions => {
                let Some(template) = self.selected else {
                    // Unreachable by construction; step 2 requires a selection.
                    return;
                };
                match parser::parse_dimension_batch(self.input.value(), &template) {
                    Ok(batch) => {
                        info!("parsed {} pallet(s)", batch.len());
                        self.pallets.extend(batch);
                        self.advance();
                    }
                    Err(err) => self.fail(err),
                }
            }
            // No further steps; only the quit signal leaves this state.
            WizardStep::ShowResults => {}
        }
    }

    /// Take the last error for one-shot display.
    ///
    /// The renderer stays pure; the controller calls this right after the
    /// post-event draw so the message shows exactly once.
    pub fn take_error(&mut self) -> Option<WizardError> {
        self.last_error.take()
    }

    /// Sum of chargeable weights over all accumulated pallets.
    pub fn total_chargeable_weight(&self) -> f64 {
        self.pallets.iter().map(Pallet::chargeable_weight).sum()
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            debug!("step {} -> step {}", self.step.step_number(), next.step_number());
            self.step = next;
        }
    }

    fn fail(&mut self, err: WizardError) {
        debug!("input rejected on step {}: {}", self.step.step_number(), err);
        self.last_error = Some(err);
    }
}
