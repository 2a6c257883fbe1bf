#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]
mod appview;
mod color;
mod export;
mod figure;
mod icons;
mod keybinds;
mod plot_settings;
mod projection;
mod ui;

use crate::ui::StereoApp;

use std::process;

fn main() -> eframe::Result {
    let app = match StereoApp::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to load built-in icons: {e}");
            process::exit(1);
        },
    };
    eframe::run_native("stereors", Default::default(), Box::new(|_cc| Ok(Box::new(app))))
}
