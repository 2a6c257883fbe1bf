use crate::color::parse_hex;
use crate::figure::AxesKind;
use crate::projection::{graticule_steps, ProjectionKind, StereonetTransform};
use crate::ui::main_frame::StereoApp;

use egui::{Color32, Stroke, UiBuilder};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Text};

/// Maps the stored matplotlib-style linestyle token onto a plot line style.
/// Unknown tokens fall back to solid.
pub fn line_style(token: &str) -> LineStyle {
    match token {
        "-" => LineStyle::Solid,
        "--" => LineStyle::Dashed { length: 10.0 },
        ":" => LineStyle::Dotted { spacing: 4.0 },
        "-." => LineStyle::Dashed { length: 5.0 },
        _ => LineStyle::Solid,
    }
}

fn circle_points(radius: f64) -> Vec<[f64; 2]> {
    (0..=180)
        .map(|i| {
            let t = f64::from(i) * std::f64::consts::TAU / 180.0;
            [radius * t.sin(), radius * t.cos()]
        })
        .collect()
}

impl StereoApp {
    /// Draws every region of the current figure into the central panel. The
    /// figure is only borrowed here; layout changes go through the factories.
    pub fn plot_ui(&self, ui: &mut egui::Ui) {
        let fig = self.settings.get_fig();
        if fig.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No layout drawn, check the canvas color");
            });
            return;
        }

        let outer = ui.available_rect_before_wrap();
        ui.painter().rect_filled(outer, 0.0, fig.face_color());

        for (idx, axes) in fig.axes().iter().enumerate() {
            let frac = axes.rect();
            let rect = egui::Rect::from_min_max(
                outer.lerp_inside(frac.min.to_vec2()),
                outer.lerp_inside(frac.max.to_vec2()),
            );
            let mut region = ui.new_child(UiBuilder::new().max_rect(rect.shrink(4.0)));
            match axes.kind() {
                AxesKind::Stereonet(kind) => self.stereonet_region(&mut region, idx, kind),
                AxesKind::NorthPolar => self.rose_region(&mut region, idx),
                AxesKind::EqualAspect => self.aspect_region(&mut region, idx),
            }
        }
    }

    fn stereonet_region(&self, ui: &mut egui::Ui, idx: usize, kind: ProjectionKind) {
        // The region renders the projection it was attached with, not the
        // current flag; the settings panel rebuilds the layout on a change.
        let tf = StereonetTransform::new(kind, 0.0, 0.0, self.settings.get_pixel_density());
        let rim = tf.rim_radius();
        let grid_color = parse_hex(self.settings.get_grid_color()).unwrap_or(Color32::GRAY);
        let style = line_style(self.settings.get_grid_linestyle());
        let frame_color = ui.visuals().text_color();

        let mut lines: Vec<Line> = Vec::new();
        if self.settings.get_draw_grid() {
            let cutoff = self.settings.get_grid_cutoff_lat().to_radians();
            let passes: [(f64, f32); 2] = [
                (self.settings.get_minor_grid_spacing(), 0.6),
                (self.settings.get_major_grid_spacing(), 1.0),
            ];
            for (spacing, scale) in passes {
                let stroke = Stroke::new(self.settings.get_grid_width() * scale, grid_color);
                for step in graticule_steps(spacing) {
                    let meridian: Vec<[f64; 2]> = tf
                        .meridian_points(step.to_radians(), cutoff)
                        .into_iter()
                        .map(|p| [p[0] / rim, p[1] / rim])
                        .collect();
                    lines.push(Line::new("", PlotPoints::from(meridian)).stroke(stroke).style(style));

                    let parallel: Vec<[f64; 2]> = tf
                        .parallel_points(step.to_radians())
                        .into_iter()
                        .map(|p| [p[0] / rim, p[1] / rim])
                        .collect();
                    lines.push(Line::new("", PlotPoints::from(parallel)).stroke(stroke).style(style));
                }
            }
        }

        lines.push(
            Line::new("", PlotPoints::from(circle_points(1.0))).stroke(Stroke::new(1.0, frame_color)),
        );
        if self.settings.get_show_center_cross() {
            let cross = Stroke::new(1.0, frame_color);
            lines.push(Line::new("", PlotPoints::from(vec![[-0.02, 0.0], [0.02, 0.0]])).stroke(cross));
            lines.push(Line::new("", PlotPoints::from(vec![[0.0, -0.02], [0.0, 0.02]])).stroke(cross));
        }

        let mut plot = Plot::new(format!("stereonet_plot_{idx}"))
            .width(ui.available_width())
            .height(ui.available_height())
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(-1.15)
            .include_x(1.15)
            .include_y(-1.15)
            .include_y(1.15);
        if self.settings.get_draw_legend() {
            plot = plot.legend(Legend::default());
        }

        let show_north = self.settings.get_show_north();
        let response = plot.show(ui, |plot_ui| {
            for line in lines {
                plot_ui.line(line);
            }
            if show_north {
                plot_ui.text(Text::new(
                    "",
                    PlotPoint::new(0.0, 1.08),
                    egui::RichText::new("N").size(16.0),
                ));
            }
            plot_ui.pointer_coordinate()
        });

        if let Some(pos) = response.inner {
            if pos.x.hypot(pos.y) <= 1.0 {
                let [lon, lat] = tf.inverted().transform(pos.x * rim, pos.y * rim);
                response.response.on_hover_text(format!(
                    "lon {:.1}°, lat {:.1}°",
                    lon.to_degrees(),
                    lat.to_degrees()
                ));
            }
        }
    }

    fn rose_region(&self, ui: &mut egui::Ui, idx: usize) {
        let grid_color = parse_hex(self.settings.get_grid_color()).unwrap_or(Color32::GRAY);
        let style = line_style(self.settings.get_grid_linestyle());
        let frame_color = ui.visuals().text_color();
        let stroke = Stroke::new(self.settings.get_grid_width().max(0.2), grid_color);

        let mut lines: Vec<Line> = Vec::new();
        for k in 1..5 {
            let ring = circle_points(f64::from(k) / 5.0);
            lines.push(Line::new("", PlotPoints::from(ring)).stroke(stroke).style(style));
        }

        let spacing = self.settings.get_major_grid_spacing().max(0.5);
        let mut azimuth = 0.0;
        while azimuth < 360.0 {
            let az = f64::to_radians(azimuth);
            lines.push(
                Line::new("", PlotPoints::from(vec![[0.0, 0.0], [az.sin(), az.cos()]]))
                    .stroke(stroke)
                    .style(style),
            );
            azimuth += spacing;
        }

        lines.push(
            Line::new("", PlotPoints::from(circle_points(1.0))).stroke(Stroke::new(1.0, frame_color)),
        );

        let mut plot = Plot::new(format!("rose_plot_{idx}"))
            .width(ui.available_width())
            .height(ui.available_height())
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(-1.15)
            .include_x(1.15)
            .include_y(-1.15)
            .include_y(1.15);
        if self.settings.get_draw_legend() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for line in lines {
                plot_ui.line(line);
            }
            // The rose frame is always north up.
            plot_ui.text(Text::new(
                "",
                PlotPoint::new(0.0, 1.08),
                egui::RichText::new("N").size(16.0),
            ));
        });
    }

    fn aspect_region(&self, ui: &mut egui::Ui, idx: usize) {
        let mut plot = Plot::new(format!("aspect_plot_{idx}"))
            .width(ui.available_width())
            .height(ui.available_height())
            .data_aspect(1.0)
            .show_grid(self.settings.get_draw_grid())
            .include_x(0.0)
            .include_x(1.0)
            .include_y(0.0)
            .include_y(1.0);
        if self.settings.get_draw_legend() {
            plot = plot.legend(Legend::default());
        }
        plot.show(ui, |_plot_ui| {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_tokens() {
        assert_eq!(line_style("-"), LineStyle::Solid);
        assert_eq!(line_style("--"), LineStyle::Dashed { length: 10.0 });
        assert_eq!(line_style(":"), LineStyle::Dotted { spacing: 4.0 });
        assert_eq!(line_style("-."), LineStyle::Dashed { length: 5.0 });
        assert_eq!(line_style("weird"), LineStyle::Solid);
    }

    #[test]
    fn test_circle_points_start_north() {
        let pts = circle_points(1.0);
        assert_eq!(pts.len(), 181);
        assert!((pts[0][0]).abs() < 1e-12);
        assert!((pts[0][1] - 1.0).abs() < 1e-12);
        for p in &pts {
            assert!((p[0].hypot(p[1]) - 1.0).abs() < 1e-9);
        }
    }
}
