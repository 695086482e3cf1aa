//! User interface rendering module
//!
//! The screen text is produced by the pure [`view`] function so it can be
//! tested without a terminal; [`draw`] wraps it in a themed ratatui
//! paragraph. Rendering never mutates state: the controller takes the
//! displayed error after each draw.

use ratatui::Frame;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{WizardState, WizardStep};
use crate::theme::Styles;
use crate::types::PalletTemplate;

/// Render the wizard state to its display text.
///
/// Idempotent: calling it repeatedly with the same state produces
/// identical output.
pub fn view(state: &WizardState) -> String {
    let mut s = String::new();

    if let Some(err) = &state.last_error {
        s.push_str(&format!("Error: {}\n", err));
        s.push_str("Please try again\n");
    }

    match state.step {
        WizardStep::SelectType => {
            s.push_str("Select pallet type (UK/EU):\n");
            for template in PalletTemplate::catalog() {
                s.push_str(&format!(
                    "{}: {:.0}cm x {:.0}cm\n",
                    template.pallet_type, template.length_cm, template.width_cm
                ));
            }
            s.push_str(&input_line(state));
        }
        WizardStep::EnterDimensions => {
            if let Some(template) = &state.selected {
                s.push_str(&format!("Selected {} pallet\n", template.pallet_type));
            }
            s.push_str("Enter pallet details (height,weight) separated by spaces or semicolons:\n");
            s.push_str("Example: 150,350 160,400 or 150,350;160,400\n");
            s.push_str(&input_line(state));
        }
        WizardStep::ShowResults => {
            s.push_str("Calculation Results:\n\n");
            for (i, pallet) in state.pallets.iter().enumerate() {
                s.push_str(&format!("Pallet {}:\n", i + 1));
                s.push_str(&format!(
                    "  Dimensions: {:.0}cm x {:.0}cm x {:.0}cm\n",
                    pallet.length_cm, pallet.width_cm, pallet.height_cm
                ));
                s.push_str(&format!("  Actual Weight: {:.2} kg\n", pallet.weight_kg));
                s.push_str(&format!(
                    "  Volumetric Weight: {:.2} kg\n",
                    pallet.volumetric_weight()
                ));
                s.push_str(&format!(
                    "  Chargeable Weight: {:.2} kg ({})\n\n",
                    pallet.chargeable_weight(),
                    pallet.weight_basis()
                ));
            }
            s.push_str(&format!(
                "Total Chargeable Weight: {:.2} kg\n",
                state.total_chargeable_weight()
            ));
            s.push_str("\nPress Ctrl+C to exit");
        }
    }

    s
}

fn input_line(state: &WizardState) -> String {
    format!("> {}", state.input.value())
}

/// Draw the wizard screen into a ratatui frame.
pub fn draw(frame: &mut Frame, state: &WizardState) {
    // Error lines (if present) come first in the view text.
    let error_lines = if state.last_error.is_some() { 2 } else { 0 };

    let lines: Vec<Line> = view(state)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i < error_lines {
                Line::styled(line.to_string(), Styles::error())
            } else {
                Line::raw(line.to_string())
            }
        })
        .collect();

    let title = format!(
        " Pallet Chargeable Weight | Step {} of 3: {} ",
        state.step.step_number(),
        state.step.title()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(title)
        .title_style(Styles::title());

    let paragraph = Paragraph::new(lines).block(block).style(Styles::body());
    frame.render_widget(paragraph, frame.area());
}
