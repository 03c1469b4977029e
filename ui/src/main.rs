#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrstudio_business::StudioConfig;
use qrstudio_share::ClipboardDispatcher;
use qrstudio_ui::{QrStudioApp, StudioState};

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // egui_winit logs an error whenever the clipboard holds non-text content,
    // which is exactly what sharing a QR code leaves there.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = StudioConfig::from_env().unwrap_or_else(|e| {
        log::warn!("Ignoring environment configuration: {e}");
        StudioConfig::default()
    });
    log::info!(
        "Starting QR Studio size={} cache_dir={}",
        config.size,
        config.cache_dir.display()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("QR Studio")
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Studio",
        native_options,
        Box::new(move |_cc| {
            let dispatcher = ClipboardDispatcher::<qrstudio_share::SystemClipboard>::default();
            let state = StudioState::new(&config, Box::new(dispatcher));
            Ok(Box::new(QrStudioApp::new(state)))
        }),
    )
}
