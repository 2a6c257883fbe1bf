use crate::projection::ProjectionKind;
use egui::{pos2, vec2, Color32, Rect};

/// What a sub-plot region is meant to draw: a stereonet under one of the two
/// azimuthal projections, a north-up polar frame for rose diagrams, or a plain
/// equal-aspect frame (fluctuation and Mohr-circle panels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxesKind {
    Stereonet(ProjectionKind),
    NorthPolar,
    EqualAspect,
}

/// Handle to one region of the figure. Valid until the next `Figure::clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(usize);

impl AxesId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Rectangular partition of the figure, rows by columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one row and one column");
        Self { rows, cols }
    }

    /// Carves a span of cells out of the grid. Spans that reach outside the
    /// grid are a programmer error.
    pub fn subplot_spec(&self, (row, col): (usize, usize), rowspan: usize, colspan: usize) -> SubplotSpec {
        assert!(rowspan > 0 && colspan > 0, "subplot span must cover at least one cell");
        assert!(
            row + rowspan <= self.rows && col + colspan <= self.cols,
            "subplot span ({row},{col})+{rowspan}x{colspan} outside {}x{} grid",
            self.rows,
            self.cols
        );
        SubplotSpec { grid: *self, row, col, rowspan, colspan }
    }
}

/// One span of grid cells, position in fractions of the figure with the
/// origin at the top left (row-major, like the grid itself).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubplotSpec {
    grid: GridSpec,
    row: usize,
    col: usize,
    rowspan: usize,
    colspan: usize,
}

impl SubplotSpec {
    pub fn rect(&self) -> Rect {
        let w = 1.0 / self.grid.cols as f32;
        let h = 1.0 / self.grid.rows as f32;
        Rect::from_min_size(
            pos2(self.col as f32 * w, self.row as f32 * h),
            vec2(self.colspan as f32 * w, self.rowspan as f32 * h),
        )
    }
}

/// One attached sub-plot region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    kind: AxesKind,
    rect: Rect,
}

impl Axes {
    pub fn kind(&self) -> AxesKind {
        self.kind
    }

    /// Fractional position inside the figure, origin top left.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The one drawable figure the application owns. Layout factories reset it in
/// place with `clear` and repopulate it; the value itself lives as long as
/// the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    dpi: u32,
    face_color: Color32,
    axes: Vec<Axes>,
}

impl Figure {
    pub fn new(dpi: u32) -> Self {
        Self { dpi, face_color: Color32::WHITE, axes: Vec::new() }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn set_dpi(&mut self, dpi: u32) {
        self.dpi = dpi;
    }

    pub fn face_color(&self) -> Color32 {
        self.face_color
    }

    pub fn set_face_color(&mut self, color: Color32) {
        self.face_color = color;
    }

    /// Drops every attached region. Previously returned handles go stale.
    pub fn clear(&mut self) {
        self.axes.clear();
    }

    pub fn add_subplot(&mut self, spec: SubplotSpec, kind: AxesKind) -> AxesId {
        self.axes.push(Axes { kind, rect: spec.rect() });
        AxesId(self.axes.len() - 1)
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn get(&self, id: AxesId) -> Option<&Axes> {
        self.axes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}
