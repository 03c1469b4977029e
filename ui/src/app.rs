use egui::{CentralPanel, Frame, ScrollArea};

use crate::pages;
use crate::state::StudioState;
use crate::utils::colors::SCREEN_BACKGROUND;

pub struct QrStudioApp {
    state: StudioState,
}

impl QrStudioApp {
    /// Called once before the first frame.
    pub fn new(state: StudioState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StudioState {
        &mut self.state
    }
}

impl eframe::App for QrStudioApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).fill(SCREEN_BACKGROUND))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    pages::studio_page(&mut self.state, ui);
                });
            });
    }
}
