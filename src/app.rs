use eframe::egui;

use crate::color::TraceColors;
use crate::data::model::ComparisonDataset;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CsvCompareApp {
    pub state: ViewerState,
    colors: TraceColors,
}

impl CsvCompareApp {
    /// `None` if there is no column to show.
    pub fn new(dataset: ComparisonDataset) -> Option<Self> {
        Some(Self {
            state: ViewerState::new(dataset)?,
            colors: TraceColors::default(),
        })
    }
}

impl eframe::App for CsvCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Shortcuts are read before drawing so this frame shows their effect.
        if let Some(action) = panels::shortcut_action(ctx) {
            self.state.dispatch(action);
        }

        // ---- Top panel: caption ----
        egui::TopBottomPanel::top("caption_bar").show(ctx, |ui| {
            panels::caption_bar(ui, &self.state);
        });

        // ---- Bottom panel: navigation ----
        let clicked = egui::TopBottomPanel::bottom("nav_bar")
            .min_height(44.0)
            .show(ctx, |ui| panels::nav_bar(ui))
            .inner;

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::comparison_plots(ui, &self.state, &self.colors);
        });

        if let Some(action) = clicked {
            self.state.dispatch(action);
            ctx.request_repaint();
        }

        if self.state.is_closed() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
