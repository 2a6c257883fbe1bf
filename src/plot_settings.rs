use crate::color::{parse_hex, ParseColorError};
use crate::figure::{AxesId, AxesKind, Figure, GridSpec};
use crate::icons::{IconError, IconProvider};
use crate::projection::{InvertedStereonetTransform, ProjectionKind, StereonetTransform};
use egui::{Color32, ColorImage};

/// User-facing display preferences plus the figure-layout factory. One
/// instance lives for the whole session, owned by the main window; the
/// settings panel mutates it field by field and the display widget borrows
/// the figure it maintains.
pub struct PlotSettings {
    draw_grid: bool,
    equal_area_projection: bool,
    minor_grid_spacing: f64,
    major_grid_spacing: f64,
    grid_cutoff_lat: f64,
    show_north: bool,
    show_center_cross: bool,
    pixel_density: u32,
    grid_linestyle: String,
    grid_color: String,
    grid_width: f32,
    draw_legend: bool,
    canvas_color: String,
    fig: Figure,
    folder_icon: ColorImage,
}

impl PlotSettings {
    pub fn new(icons: &dyn IconProvider) -> Result<Self, IconError> {
        let folder_icon = icons.lookup("folder", 16)?;
        Ok(Self {
            draw_grid: true,
            equal_area_projection: true,
            minor_grid_spacing: 2.0,
            major_grid_spacing: 10.0,
            grid_cutoff_lat: 80.0,
            show_north: false,
            show_center_cross: false,
            pixel_density: 75,
            grid_linestyle: String::from("--"),
            grid_color: String::from("#787878"),
            grid_width: 0.4,
            draw_legend: true,
            canvas_color: String::from("#bfbfbf"),
            fig: Figure::new(75),
            folder_icon,
        })
    }

    /* =================== Field access =================== */

    pub fn get_draw_grid(&self) -> bool {
        self.draw_grid
    }
    pub fn set_draw_grid(&mut self, draw: bool) {
        self.draw_grid = draw;
    }

    pub fn get_equal_area_projection(&self) -> bool {
        self.equal_area_projection
    }
    pub fn set_equal_area_projection(&mut self, equal_area: bool) {
        self.equal_area_projection = equal_area;
    }

    pub fn get_minor_grid_spacing(&self) -> f64 {
        self.minor_grid_spacing
    }
    pub fn set_minor_grid_spacing(&mut self, spacing: f64) {
        self.minor_grid_spacing = spacing;
    }

    pub fn get_major_grid_spacing(&self) -> f64 {
        self.major_grid_spacing
    }
    pub fn set_major_grid_spacing(&mut self, spacing: f64) {
        self.major_grid_spacing = spacing;
    }

    pub fn get_grid_cutoff_lat(&self) -> f64 {
        self.grid_cutoff_lat
    }
    pub fn set_grid_cutoff_lat(&mut self, lat: f64) {
        self.grid_cutoff_lat = lat;
    }

    pub fn get_show_north(&self) -> bool {
        self.show_north
    }
    pub fn set_show_north(&mut self, show: bool) {
        self.show_north = show;
    }

    pub fn get_show_center_cross(&self) -> bool {
        self.show_center_cross
    }
    pub fn set_show_center_cross(&mut self, show: bool) {
        self.show_center_cross = show;
    }

    pub fn get_pixel_density(&self) -> u32 {
        self.pixel_density
    }
    pub fn set_pixel_density(&mut self, density: u32) {
        self.pixel_density = density;
    }

    pub fn get_grid_linestyle(&self) -> &str {
        &self.grid_linestyle
    }
    pub fn set_grid_linestyle(&mut self, linestyle: &str) {
        self.grid_linestyle = linestyle.to_string();
    }

    pub fn get_grid_color(&self) -> &str {
        &self.grid_color
    }
    pub fn set_grid_color(&mut self, color: &str) {
        self.grid_color = color.to_string();
    }

    pub fn get_grid_width(&self) -> f32 {
        self.grid_width
    }
    pub fn set_grid_width(&mut self, width: f32) {
        self.grid_width = width;
    }

    pub fn get_draw_legend(&self) -> bool {
        self.draw_legend
    }
    pub fn set_draw_legend(&mut self, draw: bool) {
        self.draw_legend = draw;
    }

    pub fn get_canvas_color(&self) -> &str {
        &self.canvas_color
    }
    pub fn set_canvas_color(&mut self, color: &str) {
        self.canvas_color = color.to_string();
    }

    /// The stored canvas color as the toolkit color value, for the color
    /// picker in the settings panel.
    pub fn get_canvas_rgba(&self) -> Result<Color32, ParseColorError> {
        parse_hex(&self.canvas_color)
    }

    pub fn get_folder_icon(&self) -> &ColorImage {
        &self.folder_icon
    }

    /* =================== Projection selection =================== */

    pub fn get_projection(&self) -> ProjectionKind {
        if self.equal_area_projection {
            ProjectionKind::EqualArea
        } else {
            ProjectionKind::EqualAngle
        }
    }

    // Transforms are built fresh on every call so a changed flag or density
    // can never hand out a stale pair.
    pub fn get_transform(&self) -> StereonetTransform {
        StereonetTransform::new(self.get_projection(), 0.0, 0.0, self.pixel_density)
    }

    pub fn get_inverse_transform(&self) -> InvertedStereonetTransform {
        InvertedStereonetTransform::new(self.get_projection(), 0.0, 0.0, self.pixel_density)
    }

    /* =================== Figure layouts =================== */

    pub fn get_fig(&self) -> &Figure {
        &self.fig
    }

    fn reset_figure(&mut self) -> Result<(), ParseColorError> {
        self.fig.clear();
        let face = parse_hex(&self.canvas_color)?;
        self.fig.set_face_color(face);
        self.fig.set_dpi(self.pixel_density);
        Ok(())
    }

    /// Single stereonet filling the whole figure.
    pub fn get_stereonet(&mut self) -> Result<AxesId, ParseColorError> {
        self.reset_figure()?;
        let gs = GridSpec::new(1, 1);
        let stereo =
            self.fig.add_subplot(gs.subplot_spec((0, 0), 1, 1), AxesKind::Stereonet(self.get_projection()));
        Ok(stereo)
    }

    /// Stereonet on the left, rose diagram on the right.
    pub fn get_stereo_rose(&mut self) -> Result<(AxesId, AxesId), ParseColorError> {
        self.reset_figure()?;
        let gs = GridSpec::new(1, 2);
        let stereo =
            self.fig.add_subplot(gs.subplot_spec((0, 0), 1, 1), AxesKind::Stereonet(self.get_projection()));
        let rose = self.fig.add_subplot(gs.subplot_spec((0, 1), 1, 1), AxesKind::NorthPolar);
        Ok((stereo, rose))
    }

    /// Single rose diagram filling the whole figure.
    pub fn get_rose_diagram(&mut self) -> Result<AxesId, ParseColorError> {
        self.reset_figure()?;
        let gs = GridSpec::new(1, 1);
        let rose = self.fig.add_subplot(gs.subplot_spec((0, 0), 1, 1), AxesKind::NorthPolar);
        Ok(rose)
    }

    /// Paleostress triptych: a big stereonet spanning the left, fluctuation
    /// and Mohr-circle panels stacked on the right.
    pub fn get_pt_view(&mut self) -> Result<(AxesId, AxesId, AxesId), ParseColorError> {
        self.reset_figure()?;
        let gs = GridSpec::new(2, 5);
        let stereo =
            self.fig.add_subplot(gs.subplot_spec((0, 0), 2, 3), AxesKind::Stereonet(self.get_projection()));
        let fluc = self.fig.add_subplot(gs.subplot_spec((0, 3), 1, 2), AxesKind::EqualAspect);
        let mohr = self.fig.add_subplot(gs.subplot_spec((1, 3), 1, 2), AxesKind::EqualAspect);
        Ok((stereo, fluc, mohr))
    }
}
