use crate::color::{parse_hex, ParseColorError};
use crate::figure::AxesKind;
use crate::plot_settings::PlotSettings;
use crate::projection::{graticule_steps, StereonetTransform};

use plotters::prelude::*;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("{0}")]
    Color(#[from] ParseColorError),
    #[error("draw error: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Draw(e.to_string())
}

/// Writes the current figure layout as a PNG: canvas background, one framed
/// panel per attached region, graticule and polar frames per region kind.
/// Plotted data stays on screen; the export mirrors the empty nets the way
/// the display widget draws them.
pub fn export_png(
    settings: &PlotSettings,
    path: &str,
    width: u32,
    height: u32,
) -> Result<(), ExportError> {
    let face = settings.get_canvas_rgba()?;
    let grid = parse_hex(settings.get_grid_color())?;
    let grid_rgb = RGBColor(grid.r(), grid.g(), grid.b());
    let major_w = (settings.get_grid_width().round() as u32).max(1);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&RGBColor(face.r(), face.g(), face.b())).map_err(draw_err)?;

    for axes in settings.get_fig().axes() {
        let frac = axes.rect();
        let rx = f64::from(frac.min.x) * f64::from(width);
        let ry = f64::from(frac.min.y) * f64::from(height);
        let rw = f64::from(frac.width()) * f64::from(width);
        let rh = f64::from(frac.height()) * f64::from(height);

        let inset = 0.05 * rw.min(rh);
        let cx = (rx + rw / 2.0) as i32;
        let cy = (ry + rh / 2.0) as i32;
        let radius = (rw.min(rh) / 2.0 - inset).max(1.0);

        match axes.kind() {
            AxesKind::Stereonet(kind) => {
                let tf = StereonetTransform::new(kind, 0.0, 0.0, settings.get_pixel_density());
                let rim = tf.rim_radius();
                let to_px = |p: [f64; 2]| {
                    ((f64::from(cx) + p[0] / rim * radius) as i32,
                     (f64::from(cy) - p[1] / rim * radius) as i32)
                };

                root.draw(&Circle::new((cx, cy), radius as i32, WHITE.filled()))
                    .map_err(draw_err)?;

                if settings.get_draw_grid() {
                    let cutoff = settings.get_grid_cutoff_lat().to_radians();
                    let passes = [
                        (settings.get_minor_grid_spacing(), 1),
                        (settings.get_major_grid_spacing(), major_w),
                    ];
                    for (spacing, stroke) in passes {
                        let style = grid_rgb.stroke_width(stroke);
                        for step in graticule_steps(spacing) {
                            let meridian: Vec<(i32, i32)> = tf
                                .meridian_points(step.to_radians(), cutoff)
                                .into_iter()
                                .map(|p| to_px(p))
                                .collect();
                            root.draw(&PathElement::new(meridian, style)).map_err(draw_err)?;

                            let parallel: Vec<(i32, i32)> = tf
                                .parallel_points(step.to_radians())
                                .into_iter()
                                .map(|p| to_px(p))
                                .collect();
                            root.draw(&PathElement::new(parallel, style)).map_err(draw_err)?;
                        }
                    }
                }

                if settings.get_show_center_cross() {
                    let arm = (0.02 * radius).max(2.0) as i32;
                    root.draw(&PathElement::new(
                        vec![(cx - arm, cy), (cx + arm, cy)],
                        BLACK.stroke_width(1),
                    ))
                    .map_err(draw_err)?;
                    root.draw(&PathElement::new(
                        vec![(cx, cy - arm), (cx, cy + arm)],
                        BLACK.stroke_width(1),
                    ))
                    .map_err(draw_err)?;
                }

                if settings.get_show_north() {
                    root.draw(&Text::new(
                        "N",
                        (cx - 5, cy - radius as i32 - 18),
                        ("sans-serif", 16).into_font().color(&BLACK),
                    ))
                    .map_err(draw_err)?;
                }

                root.draw(&Circle::new((cx, cy), radius as i32, BLACK.stroke_width(1)))
                    .map_err(draw_err)?;
            },
            AxesKind::NorthPolar => {
                root.draw(&Circle::new((cx, cy), radius as i32, WHITE.filled()))
                    .map_err(draw_err)?;

                for k in 1..5 {
                    let ring = (radius * f64::from(k) / 5.0) as i32;
                    root.draw(&Circle::new((cx, cy), ring, grid_rgb.stroke_width(1)))
                        .map_err(draw_err)?;
                }

                let spacing = settings.get_major_grid_spacing().max(0.5);
                let mut azimuth = 0.0;
                while azimuth < 360.0 {
                    let az = f64::to_radians(azimuth);
                    let tip = (
                        (f64::from(cx) + az.sin() * radius) as i32,
                        (f64::from(cy) - az.cos() * radius) as i32,
                    );
                    root.draw(&PathElement::new(vec![(cx, cy), tip], grid_rgb.stroke_width(1)))
                        .map_err(draw_err)?;
                    azimuth += spacing;
                }

                root.draw(&Text::new(
                    "N",
                    (cx - 5, cy - radius as i32 - 18),
                    ("sans-serif", 16).into_font().color(&BLACK),
                ))
                .map_err(draw_err)?;

                root.draw(&Circle::new((cx, cy), radius as i32, BLACK.stroke_width(1)))
                    .map_err(draw_err)?;
            },
            AxesKind::EqualAspect => {
                let corners = [
                    ((rx + inset) as i32, (ry + inset) as i32),
                    ((rx + rw - inset) as i32, (ry + rh - inset) as i32),
                ];
                root.draw(&Rectangle::new(corners, WHITE.filled())).map_err(draw_err)?;
                root.draw(&Rectangle::new(corners, BLACK.stroke_width(1))).map_err(draw_err)?;
            },
        }
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::BuiltinIcons;

    #[test]
    fn test_export_writes_png() {
        let mut settings = PlotSettings::new(&BuiltinIcons).unwrap();
        settings.get_pt_view().unwrap();

        let path = std::env::temp_dir().join("stereors_export_test.png");
        let path = path.to_str().unwrap();
        export_png(&settings, path, 400, 240).unwrap();

        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_export_rejects_bad_canvas_color() {
        let mut settings = PlotSettings::new(&BuiltinIcons).unwrap();
        settings.get_stereonet().unwrap();
        settings.set_canvas_color("nope");

        let path = std::env::temp_dir().join("stereors_export_bad_color.png");
        let err = export_png(&settings, path.to_str().unwrap(), 100, 100).unwrap_err();
        assert!(matches!(err, ExportError::Color(_)));
    }
}
