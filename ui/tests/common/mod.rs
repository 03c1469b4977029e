use egui_kittest::Harness;
use qrstudio_business::{RecordingDispatcher, StudioConfig};
use qrstudio_ui::pages::studio_page;
use qrstudio_ui::{QrStudioApp, StudioState};
use tempfile::TempDir;

pub struct TestCtx<'a, T = StudioState> {
    _cache: TempDir,
    dispatcher: RecordingDispatcher,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    pub fn dispatcher(&self) -> &RecordingDispatcher {
        &self.dispatcher
    }
}

impl<'a> TestCtx<'a, StudioState> {
    #[allow(unused)]
    pub fn new() -> Self {
        Self::with_dispatcher(RecordingDispatcher::new())
    }

    #[allow(unused)]
    pub fn with_dispatcher(dispatcher: RecordingDispatcher) -> Self {
        let (cache, state) = setup_state(&dispatcher);
        let harness = Harness::new_ui_state(
            |ui, state: &mut StudioState| {
                studio_page(state, ui);
            },
            state,
        );

        Self {
            _cache: cache,
            dispatcher,
            harness,
        }
    }

    /// Sets the text as if typed and lets the page catch up.
    #[allow(unused)]
    pub fn type_text(&mut self, text: &str) {
        self.harness.state_mut().text = text.to_owned();
        self.harness.step();
    }
}

impl<'a> TestCtx<'a, QrStudioApp> {
    /// Runs the whole eframe app rather than the bare page.
    #[allow(unused)]
    pub fn new_app() -> Self {
        let dispatcher = RecordingDispatcher::new();
        let (cache, state) = setup_state(&dispatcher);
        let app = QrStudioApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _cache: cache,
            dispatcher,
            harness,
        }
    }
}

fn setup_state(dispatcher: &RecordingDispatcher) -> (TempDir, StudioState) {
    let _ = env_logger::builder().is_test(true).try_init();

    let cache = tempfile::tempdir().expect("tempdir");
    let state = StudioState::new(
        &StudioConfig::new(cache.path()),
        Box::new(dispatcher.clone()),
    );
    (cache, state)
}
