#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window

use std::panic;

use eframe::NativeOptions;
use fundboard::run_app;
use fundboard::data::PAGE_META;

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("PANIC:\n{}\nBacktrace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("fundboard"), my_code_level)
        .init();

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title(PAGE_META.title),
        ..Default::default()
    };

    eframe::run_native(
        PAGE_META.title,
        options,
        Box::new(|cc| Ok(Box::new(run_app(cc)))),
    )
}
