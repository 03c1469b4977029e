//! The single QR studio page.
//!
//! Top to bottom: code color swatches, background color swatches, the
//! preview, the share button and the text field.

use egui::{Align, Layout, Response, TextEdit, Ui};
use qrstudio_business::{BACKGROUND_COLORS, CODE_COLORS};

use crate::state::StudioState;
use crate::widgets;

/// Renders the studio page and keeps the QR image in sync with the inputs.
pub fn studio_page(state: &mut StudioState, ui: &mut Ui) -> Response {
    state.sync();

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(16.0);

        ui.label("Select QR Code Color:");
        widgets::color_selector(ui, &CODE_COLORS, &mut state.code_color);

        ui.add_space(16.0);

        ui.label("Select Background Color:");
        widgets::color_selector(ui, &BACKGROUND_COLORS, &mut state.background_color);

        ui.add_space(24.0);

        // Inputs may have changed above; refresh before drawing the preview.
        state.sync();
        widgets::qr_preview(ui, &mut state.preview, &state.compute);

        ui.add_space(12.0);

        if widgets::share_button(ui).clicked() {
            state.share();
        }

        ui.add_space(20.0);
        ui.add(
            TextEdit::singleline(&mut state.text)
                .hint_text("Enter any Text")
                .desired_width(f32::INFINITY),
        );
    })
    .response
}
