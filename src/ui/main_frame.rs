use crate::appview::{AppState, ViewMode};
use crate::export;
use crate::icons::{BuiltinIcons, IconError};
use crate::keybinds::{Action, KeyBindings};
use crate::plot_settings::PlotSettings;
use crate::ui::{err_text, ok_text};

use egui::FontFamily;
use std::fs;
use std::io::Write;
use std::path::Path;

pub struct StereoApp {
    pub settings: PlotSettings,
    pub view: ViewMode,
    drawn_view: Option<ViewMode>,
    pub show_settings: bool,
    pub keybinds: KeyBindings,
    pub awaiting_rebind: Option<Action>,
    folder_texture: Option<egui::TextureHandle>,
    export_status: Option<Result<String, String>>,
}

impl StereoApp {
    pub fn new() -> Result<Self, IconError> {
        let keybinds = KeyBindings::load_from_file("keybinds.json").unwrap_or_default();
        let settings = PlotSettings::new(&BuiltinIcons)?;
        let view = match load_app_state(Path::new("app_state.json")) {
            Ok(state) => {
                println!("Reload app state");
                state.view
            },
            Err(_) => ViewMode::default(),
        };
        Ok(Self {
            settings,
            view,
            drawn_view: None,
            show_settings: false,
            keybinds,
            awaiting_rebind: None,
            folder_texture: None,
            export_status: None,
        })
    }

    pub fn to_app_state(&self) -> AppState {
        AppState { view: self.view }
    }

    /// Rebuilds the figure for the active view through the matching layout
    /// factory. A bad canvas color leaves the figure cleared and is reported
    /// next to the color field in the settings panel.
    pub fn redraw_plot(&mut self) {
        let result = match self.view {
            ViewMode::Stereonet => self.settings.get_stereonet().map(|_| ()),
            ViewMode::StereoRose => self.settings.get_stereo_rose().map(|_| ()),
            ViewMode::RoseDiagram => self.settings.get_rose_diagram().map(|_| ()),
            ViewMode::Paleostress => self.settings.get_pt_view().map(|_| ()),
        };
        if let Err(e) = result {
            eprintln!("Could not rebuild figure: {e}");
        }
        self.drawn_view = Some(self.view);
    }

    fn do_export(&mut self) {
        let path = "stereors_export.png";
        let dpi = self.settings.get_fig().dpi().max(1);
        match export::export_png(&self.settings, path, dpi * 8, dpi * 6) {
            Ok(()) => {
                println!("Exported figure to {path}");
                self.export_status = Some(Ok(format!("Saved {path}")));
            },
            Err(e) => {
                eprintln!("Export failed: {e}");
                self.export_status = Some(Err(format!("Export failed: {e}")));
            },
        }
    }

    fn handle_keybinds(&mut self, ctx: &egui::Context) {
        // Rebinding and text entry both swallow plain key presses.
        if self.awaiting_rebind.is_some() || ctx.wants_keyboard_input() {
            return;
        }
        let mut export = false;
        ctx.input(|i| {
            if self.keybinds.action_triggered(Action::ShowStereonet, i) {
                self.view = ViewMode::Stereonet;
            }
            if self.keybinds.action_triggered(Action::ShowStereoRose, i) {
                self.view = ViewMode::StereoRose;
            }
            if self.keybinds.action_triggered(Action::ShowRoseDiagram, i) {
                self.view = ViewMode::RoseDiagram;
            }
            if self.keybinds.action_triggered(Action::ShowPaleostress, i) {
                self.view = ViewMode::Paleostress;
            }
            if self.keybinds.action_triggered(Action::ToggleGrid, i) {
                let draw = !self.settings.get_draw_grid();
                self.settings.set_draw_grid(draw);
            }
            if self.keybinds.action_triggered(Action::ToggleLegend, i) {
                let draw = !self.settings.get_draw_legend();
                self.settings.set_draw_legend(draw);
            }
            if self.keybinds.action_triggered(Action::ToggleShowSettings, i) {
                self.show_settings = !self.show_settings;
            }
            if self.keybinds.action_triggered(Action::ExportImage, i) {
                export = true;
            }
        });
        if export {
            self.do_export();
        }
    }
}

impl eframe::App for StereoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keybinds(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            for (_text_style, font_id) in ui.style_mut().text_styles.iter_mut() {
                font_id.family = FontFamily::Monospace;
            }
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
                ui.add_space(16.0);

                if self.show_settings {
                    ui.toggle_value(&mut self.show_settings, "Hide settings");
                } else {
                    ui.toggle_value(&mut self.show_settings, "Show settings");
                }
                ui.add_space(16.0);

                if self.folder_texture.is_none() {
                    self.folder_texture = Some(ctx.load_texture(
                        "folder_icon",
                        self.settings.get_folder_icon().clone(),
                        egui::TextureOptions::LINEAR,
                    ));
                }
                let export_clicked = match &self.folder_texture {
                    Some(texture) => ui
                        .add(egui::Button::image_and_text(egui::Image::new(texture), "Export PNG"))
                        .clicked(),
                    None => ui.button("Export PNG").clicked(),
                };
                if export_clicked {
                    self.do_export();
                }
                if let Some(status) = &self.export_status {
                    match status {
                        Ok(msg) => ui.label(ok_text(msg)),
                        Err(msg) => ui.label(err_text(msg)),
                    };
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::RIGHT), |ui| {
                    ui.label(format!("Current view: {}", self.view));
                });
            });
        });

        if self.show_settings {
            self.settings_ui(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.selectable_value(&mut self.view, ViewMode::Stereonet, "Stereonet");
                ui.selectable_value(&mut self.view, ViewMode::StereoRose, "Stereonet and Rose");
                ui.selectable_value(&mut self.view, ViewMode::RoseDiagram, "Rose Diagram");
                ui.selectable_value(&mut self.view, ViewMode::Paleostress, "Paleostress");
            });
            ui.separator();

            if self.drawn_view != Some(self.view) {
                self.redraw_plot();
            }
            self.plot_ui(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let path = Path::new("app_state.json");
        let _ = save_app_state(self, path);
    }
}

pub fn load_app_state(path: &Path) -> Result<AppState, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    let state: AppState = serde_json::from_str(&data)?;
    Ok(state)
}

pub fn save_app_state(app: &StereoApp, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let state = app.to_app_state();
    let json = serde_json::to_string_pretty(&state)?;
    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_survives_save_and_load() {
        let mut app = StereoApp::new().unwrap();
        app.view = ViewMode::Paleostress;

        let path = std::env::temp_dir().join("stereors_app_state_test.json");
        save_app_state(&app, &path).unwrap();
        let state = load_app_state(&path).unwrap();
        assert_eq!(state.view, ViewMode::Paleostress);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_redraw_tracks_active_view() {
        let mut app = StereoApp::new().unwrap();
        app.view = ViewMode::StereoRose;
        app.redraw_plot();
        assert_eq!(app.settings.get_fig().len(), 2);

        app.view = ViewMode::RoseDiagram;
        app.redraw_plot();
        assert_eq!(app.settings.get_fig().len(), 1);
    }
}
