use qrstudio_business::{
    BACKGROUND_COLORS, CODE_COLORS, ColorOption, QrCompute, QrInputs, ShareDispatcher,
    ShareExporter, StudioConfig, share_bitmap,
};

use crate::widgets::QrPreview;

/// The studio screen state.
///
/// Holds the user's inputs, the memoized QR image derived from them, and
/// the collaborators used to share it.
pub struct StudioState {
    /// Text to encode.
    pub text: String,
    pub code_color: ColorOption,
    pub background_color: ColorOption,
    /// Source resolution of the generated image.
    pub size: u32,
    pub compute: QrCompute,
    pub preview: QrPreview,
    exporter: ShareExporter,
    dispatcher: Box<dyn ShareDispatcher>,
}

impl StudioState {
    pub fn new(config: &StudioConfig, dispatcher: Box<dyn ShareDispatcher>) -> Self {
        Self {
            text: String::new(),
            code_color: CODE_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            size: config.size,
            compute: QrCompute::default(),
            preview: QrPreview::default(),
            exporter: ShareExporter::from_config(config),
            dispatcher,
        }
    }

    pub fn inputs(&self) -> QrInputs {
        QrInputs {
            text: self.text.clone(),
            code_color: self.code_color,
            background_color: self.background_color,
            size: self.size,
        }
    }

    /// Brings the QR image up to date with the current inputs.
    pub fn sync(&mut self) -> bool {
        let inputs = self.inputs();
        self.compute.sync(&inputs)
    }

    /// Shares the current image. Does nothing when there is no image.
    pub fn share(&self) -> bool {
        let Some(image) = self.compute.image() else {
            log::debug!("Share requested without a QR image");
            return false;
        };
        share_bitmap(&self.exporter, image, self.dispatcher.as_ref())
    }

    pub fn exporter(&self) -> &ShareExporter {
        &self.exporter
    }
}

impl std::fmt::Debug for StudioState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioState")
            .field("text", &self.text)
            .field("code_color", &self.code_color.label)
            .field("background_color", &self.background_color.label)
            .field("size", &self.size)
            .field("revision", &self.compute.revision())
            .finish_non_exhaustive()
    }
}
