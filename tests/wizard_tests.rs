//! Tests for wizard state transitions and rendering
//!
//! These tests verify:
//! - WizardState default initialization
//! - Forward-only step transitions
//! - All-or-nothing pallet accumulation
//! - One-shot error display
//! - Rendered screen text for each step

use palletui::app::{WizardState, WizardStep};
use palletui::error::WizardError;
use palletui::types::PalletType;
use palletui::ui;

fn type_str(state: &mut WizardState, s: &str) {
    for c in s.chars() {
        state.input.insert(c);
    }
}

/// Drive a fresh wizard through step 1 with the given type code.
fn wizard_at_step_2(code: &str) -> WizardState {
    let mut state = WizardState::new();
    type_str(&mut state, code);
    state.confirm();
    assert_eq!(state.step, WizardStep::EnterDimensions);
    state
}

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn test_initial_state() {
    let state = WizardState::new();
    assert_eq!(state.step, WizardStep::SelectType);
    assert_eq!(state.input.value(), "");
    assert!(state.selected.is_none());
    assert!(state.pallets.is_empty());
    assert!(state.last_error.is_none());
}

#[test]
fn test_step_metadata() {
    assert_eq!(WizardStep::SelectType.step_number(), 1);
    assert_eq!(WizardStep::EnterDimensions.step_number(), 2);
    assert_eq!(WizardStep::ShowResults.step_number(), 3);

    assert_eq!(WizardStep::SelectType.next(), Some(WizardStep::EnterDimensions));
    assert_eq!(WizardStep::EnterDimensions.next(), Some(WizardStep::ShowResults));
    assert_eq!(WizardStep::ShowResults.next(), None);

    assert_eq!(WizardStep::SelectType.title(), "Select Pallet Type");
}

// =============================================================================
// Step transitions
// =============================================================================

#[test]
fn test_lowercase_choice_selects_template() {
    let state = wizard_at_step_2("uk");
    let template = state.selected.unwrap();
    assert_eq!(template.pallet_type, PalletType::Uk);
    assert_eq!(template.length_cm, 120.0);
    assert_eq!(template.width_cm, 100.0);
    // Buffer cleared after a successful step 1
    assert_eq!(state.input.value(), "");
}

#[test]
fn test_invalid_choice_stays_on_step_1_with_buffer_intact() {
    let mut state = WizardState::new();
    type_str(&mut state, "usa");
    state.confirm();

    assert_eq!(state.step, WizardStep::SelectType);
    assert!(state.selected.is_none());
    assert_eq!(state.input.value(), "usa");
    assert!(matches!(
        state.last_error,
        Some(WizardError::InvalidPalletType)
    ));
}

#[test]
fn test_invalid_then_valid_advances_exactly_once() {
    let mut state = WizardState::new();
    type_str(&mut state, "usa");
    state.confirm();
    assert_eq!(state.step, WizardStep::SelectType);

    // Correct the buffer and retry
    state.input.clear();
    type_str(&mut state, "eu");
    state.confirm();
    assert_eq!(state.step, WizardStep::EnterDimensions);

    // A second confirm with dimension text must not skip ahead twice
    type_str(&mut state, "150,350");
    state.confirm();
    assert_eq!(state.step, WizardStep::ShowResults);
}

#[test]
fn test_steps_never_regress() {
    let mut state = wizard_at_step_2("eu");
    type_str(&mut state, "150,350");
    state.confirm();
    assert_eq!(state.step, WizardStep::ShowResults);

    // Further confirms are no-ops at the terminal step
    state.confirm();
    state.confirm();
    assert_eq!(state.step, WizardStep::ShowResults);
    assert_eq!(state.pallets.len(), 1);
}

// =============================================================================
// Pallet accumulation
// =============================================================================

#[test]
fn test_batch_appends_all_pallets_in_order() {
    let mut state = wizard_at_step_2("eu");
    type_str(&mut state, "150,350 160,400");
    state.confirm();

    assert_eq!(state.pallets.len(), 2);
    assert_eq!(state.pallets[0].height_cm, 150.0);
    assert_eq!(state.pallets[0].weight_kg, 350.0);
    assert_eq!(state.pallets[1].height_cm, 160.0);
    assert_eq!(state.pallets[1].weight_kg, 400.0);
    // Both copy the EU footprint
    for pallet in &state.pallets {
        assert_eq!(pallet.length_cm, 120.0);
        assert_eq!(pallet.width_cm, 80.0);
    }
    assert_eq!(state.total_chargeable_weight(), 750.0);
}

#[test]
fn test_failing_batch_appends_zero_pallets() {
    let mut state = wizard_at_step_2("eu");
    type_str(&mut state, "150 160,400");
    state.confirm();

    assert_eq!(state.step, WizardStep::EnterDimensions);
    assert!(state.pallets.is_empty());
    assert_eq!(state.input.value(), "150 160,400");
    assert!(matches!(state.last_error, Some(WizardError::MalformedPair)));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_select_screen_lists_both_templates() {
    let state = WizardState::new();
    let text = ui::view(&state);
    assert!(text.contains("Select pallet type (UK/EU):"));
    assert!(text.contains("UK: 120cm x 100cm"));
    assert!(text.contains("EU: 120cm x 80cm"));
    assert!(text.contains("> "));
}

#[test]
fn test_dimensions_screen_shows_selection_and_example() {
    let mut state = wizard_at_step_2("eu");
    type_str(&mut state, "150,3");
    let text = ui::view(&state);
    assert!(text.contains("Selected EU pallet"));
    assert!(text.contains("Example: 150,350 160,400 or 150,350;160,400"));
    assert!(text.contains("> 150,3"));
}

#[test]
fn test_results_screen_formatting() {
    let mut state = wizard_at_step_2("eu");
    type_str(&mut state, "150,350 160,400");
    state.confirm();

    let text = ui::view(&state);
    assert!(text.starts_with("Calculation Results:\n\n"));
    assert!(text.contains("Pallet 1:\n  Dimensions: 120cm x 80cm x 150cm\n"));
    assert!(text.contains("  Actual Weight: 350.00 kg\n"));
    assert!(text.contains("  Volumetric Weight: 240.00 kg\n"));
    assert!(text.contains("  Chargeable Weight: 350.00 kg (Actual Weight)\n"));
    assert!(text.contains("Pallet 2:\n  Dimensions: 120cm x 80cm x 160cm\n"));
    assert!(text.contains("  Volumetric Weight: 256.00 kg\n"));
    assert!(text.contains("  Chargeable Weight: 400.00 kg (Actual Weight)\n"));
    assert!(text.contains("Total Chargeable Weight: 750.00 kg\n"));
    assert!(text.contains("Press Ctrl+C to exit"));
}

#[test]
fn test_results_label_volumetric_when_bulkier() {
    let mut state = wizard_at_step_2("uk");
    type_str(&mut state, "100,50");
    state.confirm();

    let text = ui::view(&state);
    // (120 * 100 * 100) / 6000 = 200 beats the 50 kg actual weight
    assert!(text.contains("  Volumetric Weight: 200.00 kg\n"));
    assert!(text.contains("  Chargeable Weight: 200.00 kg (Volumetric Weight)\n"));
    assert!(text.contains("Total Chargeable Weight: 200.00 kg\n"));
}

#[test]
fn test_view_is_idempotent() {
    let mut state = WizardState::new();
    type_str(&mut state, "nope");
    state.confirm();
    assert_eq!(ui::view(&state), ui::view(&state));
}

#[test]
fn test_error_renders_once_then_is_taken() {
    let mut state = WizardState::new();
    type_str(&mut state, "nope");
    state.confirm();

    let text = ui::view(&state);
    assert!(text.starts_with("Error: invalid pallet type\nPlease try again\n"));

    // The controller takes the error right after the draw.
    assert!(matches!(
        state.take_error(),
        Some(WizardError::InvalidPalletType)
    ));
    let text = ui::view(&state);
    assert!(!text.contains("Error:"));
    assert!(state.last_error.is_none());
}
