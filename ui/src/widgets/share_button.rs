use egui::{Response, Ui};

pub const SHARE_BUTTON_LABEL: &str = "Share QR Code";

/// The share button. Sharing itself is done by the caller on click.
pub fn share_button(ui: &mut Ui) -> Response {
    ui.button(SHARE_BUTTON_LABEL)
}
