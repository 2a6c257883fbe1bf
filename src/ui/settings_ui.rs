use crate::color::{parse_hex, to_hex_rgb};
use crate::keybinds::Action;
use crate::projection::ProjectionKind;
use crate::ui::main_frame::StereoApp;
use crate::ui::{err_text, warn_text};

use egui::ScrollArea;

impl StereoApp {
    pub fn settings_ui(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("Settings panel").show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.projection_settings_ui(ui);
                self.grid_settings_ui(ui);
                self.figure_settings_ui(ui);
                ui.separator();
                self.keybinding_settings_ui(ui);
            });
        });
    }

    fn projection_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Stereonet");

            let mut kind = self.settings.get_projection();
            let mut changed = false;
            egui::ComboBox::from_label("Projection")
                .selected_text(kind.to_string())
                .show_ui(ui, |ui| {
                    changed |= ui
                        .selectable_value(
                            &mut kind,
                            ProjectionKind::EqualArea,
                            ProjectionKind::EqualArea.to_string(),
                        )
                        .changed();
                    changed |= ui
                        .selectable_value(
                            &mut kind,
                            ProjectionKind::EqualAngle,
                            ProjectionKind::EqualAngle.to_string(),
                        )
                        .changed();
                });
            // Attached stereonet regions record their projection, so a flag
            // change has to rebuild the layout.
            if changed {
                self.settings.set_equal_area_projection(kind == ProjectionKind::EqualArea);
                self.redraw_plot();
            }

            let mut show_north = self.settings.get_show_north();
            if ui.checkbox(&mut show_north, "Show north symbol").changed() {
                self.settings.set_show_north(show_north);
            }
            let mut show_cross = self.settings.get_show_center_cross();
            if ui.checkbox(&mut show_cross, "Show center cross").changed() {
                self.settings.set_show_center_cross(show_cross);
            }
        });
    }

    fn grid_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Grid");

            let mut draw_grid = self.settings.get_draw_grid();
            if ui.checkbox(&mut draw_grid, "Draw grid").changed() {
                self.settings.set_draw_grid(draw_grid);
            }

            egui::Grid::new("grid_settings").min_col_width(100.).show(ui, |ui| {
                ui.label("Minor spacing");
                let mut minor = self.settings.get_minor_grid_spacing();
                if ui.add(egui::DragValue::new(&mut minor).speed(0.5).range(0.5..=45.0)).changed() {
                    self.settings.set_minor_grid_spacing(minor);
                }
                ui.end_row();

                ui.label("Major spacing");
                let mut major = self.settings.get_major_grid_spacing();
                if ui.add(egui::DragValue::new(&mut major).speed(1).range(1.0..=90.0)).changed() {
                    self.settings.set_major_grid_spacing(major);
                }
                ui.end_row();

                ui.label("Cutoff latitude");
                let mut cutoff = self.settings.get_grid_cutoff_lat();
                if ui.add(egui::DragValue::new(&mut cutoff).speed(1).range(0.0..=90.0)).changed() {
                    self.settings.set_grid_cutoff_lat(cutoff);
                }
                ui.end_row();

                ui.label("Line width");
                let mut width = self.settings.get_grid_width();
                if ui.add(egui::DragValue::new(&mut width).speed(0.1).range(0.1..=5.0)).changed() {
                    self.settings.set_grid_width(width);
                }
                ui.end_row();

                ui.label("Line style");
                let current = self.settings.get_grid_linestyle().to_string();
                egui::ComboBox::from_id_salt("grid_linestyle").selected_text(&current).show_ui(
                    ui,
                    |ui| {
                        for token in ["-", "--", ":", "-."] {
                            if ui.selectable_label(current == token, token).clicked() {
                                self.settings.set_grid_linestyle(token);
                            }
                        }
                    },
                );
                ui.end_row();

                ui.label("Grid color");
                let mut color =
                    parse_hex(self.settings.get_grid_color()).unwrap_or(egui::Color32::GRAY);
                if ui.color_edit_button_srgba(&mut color).changed() {
                    self.settings.set_grid_color(&to_hex_rgb(color));
                }
                ui.end_row();
            });

            if self.settings.get_minor_grid_spacing() > self.settings.get_major_grid_spacing() {
                ui.label(warn_text("Minor spacing exceeds major spacing"));
            }
        });
    }

    fn figure_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Figure");
            egui::Grid::new("figure_settings").min_col_width(100.).show(ui, |ui| {
                ui.label("Canvas color");
                match self.settings.get_canvas_rgba() {
                    Ok(mut color) => {
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            self.settings.set_canvas_color(&to_hex_rgb(color));
                            self.redraw_plot();
                        }
                    },
                    Err(e) => {
                        ui.label(err_text(&e.to_string()));
                    },
                }
                ui.end_row();

                ui.label("Canvas hex");
                let mut hex = self.settings.get_canvas_color().to_string();
                if ui.text_edit_singleline(&mut hex).changed() {
                    self.settings.set_canvas_color(&hex);
                    self.redraw_plot();
                }
                ui.end_row();

                ui.label("Pixel density");
                let mut density = self.settings.get_pixel_density();
                if ui.add(egui::DragValue::new(&mut density).speed(1).range(10.0..=300.0)).changed() {
                    self.settings.set_pixel_density(density);
                    self.redraw_plot();
                }
                ui.end_row();

                ui.label("Legend");
                let mut legend = self.settings.get_draw_legend();
                if ui.checkbox(&mut legend, "Draw legend").changed() {
                    self.settings.set_draw_legend(legend);
                }
                ui.end_row();
            });
        });
    }

    fn keybinding_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Keybinds");
            ui.label("Press rebind and hit key to set keybind");
            ui.label("Esc to cancel");
            egui::Grid::new("keybinds").show(ui, |ui| {
                for action in [
                    Action::ShowStereonet,
                    Action::ShowStereoRose,
                    Action::ShowRoseDiagram,
                    Action::ShowPaleostress,
                    Action::ToggleGrid,
                    Action::ToggleLegend,
                    Action::ToggleShowSettings,
                    Action::ExportImage,
                ] {
                    let mut rebind_text = "Rebind";
                    if let Some(pending) = self.awaiting_rebind {
                        if pending == action {
                            rebind_text = "Press key to rebind";
                        }
                    }
                    ui.label(format!("{}:", action));
                    if let Some(key) = self.keybinds.key_for(action) {
                        ui.label(key.name());
                    } else {
                        ui.label("Unbound");
                    }

                    if ui.button(rebind_text).clicked() {
                        self.awaiting_rebind = Some(action);
                    }
                    if self.keybinds.key_for(action).is_some() && ui.button("Unbind").clicked() {
                        self.keybinds.remove(&action);
                        self.keybinds.save_to_file("keybinds.json").ok();
                        self.awaiting_rebind = None;
                    }
                    ui.end_row();
                }
            });
        });

        if let Some(action) = self.awaiting_rebind {
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.awaiting_rebind = None;
            } else if let Some(key) = ui.input(|i| {
                i.raw.events.iter().find_map(|event| {
                    if let egui::Event::Key { key, pressed: true, .. } = event {
                        if *key != egui::Key::Escape {
                            Some(*key)
                        } else {
                            None
                        }
                    } else {
                        None
                    }
                })
            }) {
                self.keybinds.set(action, key);
                self.keybinds.save_to_file("keybinds.json").ok();
                self.awaiting_rebind = None;
            }
        }
    }
}
