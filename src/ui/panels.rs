use eframe::egui::{self, RichText, Ui};

use crate::state::{ACTIONS, UserAction, ViewerState};

const BUTTON_SIZE: [f32; 2] = [100.0, 28.0];

// ---------------------------------------------------------------------------
// Top bar – caption with statistics
// ---------------------------------------------------------------------------

/// Render the shared caption: column name, difference statistics and position.
pub fn caption_bar(ui: &mut Ui, state: &ViewerState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.view().caption());
        ui.label(format!(
            "{} / {}   ·   {} vs {}",
            state.cursor() + 1,
            state.column_count(),
            state.dataset.first.label,
            state.dataset.second.label
        ));
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – navigation buttons
// ---------------------------------------------------------------------------

/// Render the Previous / Next / Quit buttons, centred. Returns the clicked action.
pub fn nav_bar(ui: &mut Ui) -> Option<UserAction> {
    let mut clicked = None;

    ui.horizontal(|ui: &mut Ui| {
        let spacing = ui.spacing().item_spacing.x;
        let total = ACTIONS.len() as f32 * (BUTTON_SIZE[0] + spacing) - spacing;
        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

        for (action, label, _) in ACTIONS {
            let button = egui::Button::new(RichText::new(label).size(15.0));
            if ui.add_sized(BUTTON_SIZE, button).clicked() {
                clicked = Some(action);
            }
        }
    });

    clicked
}

// ---------------------------------------------------------------------------
// Keyboard shortcuts
// ---------------------------------------------------------------------------

/// Arrow keys page through columns; Escape or Q quits.
pub fn shortcut_action(ctx: &egui::Context) -> Option<UserAction> {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowLeft) {
            Some(UserAction::Previous)
        } else if i.key_pressed(egui::Key::ArrowRight) {
            Some(UserAction::Next)
        } else if i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q) {
            Some(UserAction::Quit)
        } else {
            None
        }
    })
}
