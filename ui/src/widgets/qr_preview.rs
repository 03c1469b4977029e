//! Bordered preview of the generated QR code.
//!
//! The texture is uploaded once per compute revision. When the compute
//! has no image the frame stays empty.

use egui::{Context, Frame, Image, Stroke, TextureHandle, TextureOptions, Ui, Vec2};
use qrstudio_business::QrCompute;

use crate::utils::colors::BORDER_COLOR;
use crate::utils::image_data::to_color_image;

/// Displayed size of the preview, independent of the image resolution.
pub const PREVIEW_SIZE: f32 = 200.0;

/// Texture cache for the QR preview.
#[derive(Default)]
pub struct QrPreview {
    texture: Option<TextureHandle>,
    revision: Option<u64>,
}

impl std::fmt::Debug for QrPreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrPreview")
            .field("has_texture", &self.texture.is_some())
            .field("revision", &self.revision)
            .finish()
    }
}

impl QrPreview {
    /// Uploads the compute's image if it changed since the last call.
    pub fn refresh(&mut self, ctx: &Context, compute: &QrCompute) {
        if self.revision == Some(compute.revision()) {
            return;
        }
        self.revision = Some(compute.revision());
        self.texture = compute.image().map(|image| {
            ctx.load_texture("qr_code", to_color_image(image), TextureOptions::NEAREST)
        });
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Compute revision the texture was built from.
    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}

/// Draws the preview frame and, if available, the QR code inside it.
pub fn qr_preview(ui: &mut Ui, preview: &mut QrPreview, compute: &QrCompute) {
    preview.refresh(ui.ctx(), compute);

    Frame::NONE
        .stroke(Stroke::new(1.0, BORDER_COLOR))
        .corner_radius(1.0)
        .show(ui, |ui| {
            ui.set_min_size(Vec2::splat(PREVIEW_SIZE));
            if let Some(texture) = preview.texture() {
                ui.add(Image::from_texture(texture).fit_to_exact_size(Vec2::splat(PREVIEW_SIZE)))
                    .on_hover_text("QR Code");
            }
        });
}

#[cfg(test)]
mod tests {
    use qrstudio_business::QrInputs;

    use super::*;

    #[test]
    fn test_refresh_uploads_once_per_revision() {
        let ctx = Context::default();
        let mut compute = QrCompute::default();
        let mut preview = QrPreview::default();

        compute.sync(&QrInputs {
            text: "HELLO".to_owned(),
            ..QrInputs::default()
        });
        preview.refresh(&ctx, &compute);
        let first = preview.texture().map(TextureHandle::id);
        assert!(first.is_some());

        preview.refresh(&ctx, &compute);
        assert_eq!(preview.texture().map(TextureHandle::id), first);
        assert_eq!(preview.revision(), Some(1));
    }

    #[test]
    fn test_refresh_clears_texture_without_image() {
        let ctx = Context::default();
        let mut compute = QrCompute::default();
        let mut preview = QrPreview::default();

        compute.sync(&QrInputs {
            text: "HELLO".to_owned(),
            ..QrInputs::default()
        });
        preview.refresh(&ctx, &compute);
        compute.sync(&QrInputs::default());
        preview.refresh(&ctx, &compute);

        assert!(preview.texture().is_none());
    }
}
