use std::f64::consts::{FRAC_PI_2, SQRT_2};
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseProjectionError(String);

impl fmt::Display for ParseProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseProjectionError {}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    #[default]
    EqualArea,
    EqualAngle,
}

// Display trait for nicer labels in the ComboBox
impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProjectionKind::EqualArea => write!(f, "Equal Area (Schmidt)"),
            ProjectionKind::EqualAngle => write!(f, "Equal Angle (Wulff)"),
        }
    }
}

impl FromStr for ProjectionKind {
    type Err = ParseProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "equal_area_stereonet" => Ok(ProjectionKind::EqualArea),
            "equal_angle_stereonet" => Ok(ProjectionKind::EqualAngle),
            "schmidt" => Ok(ProjectionKind::EqualArea),
            "wulff" => Ok(ProjectionKind::EqualAngle),
            other => Err(ParseProjectionError(format!("Invalid projection: {other}"))),
        }
    }
}

impl ProjectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionKind::EqualArea => "equal_area_stereonet",
            ProjectionKind::EqualAngle => "equal_angle_stereonet",
        }
    }
}

/// Forward azimuthal projection from (longitude, latitude) in radians to net
/// x/y. Lambert equal-area for Schmidt nets, stereographic for Wulff nets,
/// both after Snyder's formulas. The resolution is the number of interpolation
/// steps used when sampling graticule arcs, not a point-math scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereonetTransform {
    kind: ProjectionKind,
    center_lon: f64,
    center_lat: f64,
    resolution: u32,
}

impl StereonetTransform {
    pub fn new(kind: ProjectionKind, center_lon: f64, center_lat: f64, resolution: u32) -> Self {
        Self { kind, center_lon, center_lat, resolution }
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Radius of the primitive circle in net coordinates.
    pub fn rim_radius(&self) -> f64 {
        match self.kind {
            ProjectionKind::EqualArea => SQRT_2,
            ProjectionKind::EqualAngle => 2.0,
        }
    }

    pub fn transform(&self, lon: f64, lat: f64) -> [f64; 2] {
        let (sin_lat1, cos_lat1) = self.center_lat.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_dlon, cos_dlon) = (lon - self.center_lon).sin_cos();

        let mut inner = 1.0 + sin_lat1 * sin_lat + cos_lat1 * cos_lat * cos_dlon;
        // Zero at the antipode of the center; keep k finite there.
        if inner == 0.0 {
            inner = 1e-15;
        }
        let k = match self.kind {
            ProjectionKind::EqualArea => (2.0 / inner).sqrt(),
            ProjectionKind::EqualAngle => 2.0 / inner,
        };
        let x = k * cos_lat * sin_dlon;
        let y = k * (cos_lat1 * sin_lat - sin_lat1 * cos_lat * cos_dlon);
        [x, y]
    }

    pub fn inverted(&self) -> InvertedStereonetTransform {
        InvertedStereonetTransform {
            kind: self.kind,
            center_lon: self.center_lon,
            center_lat: self.center_lat,
            resolution: self.resolution,
        }
    }

    /// Samples the meridian at `lon` between latitudes -cutoff and +cutoff,
    /// `resolution` steps, as net x/y points.
    pub fn meridian_points(&self, lon: f64, cutoff: f64) -> Vec<[f64; 2]> {
        let steps = self.resolution.max(1);
        let start = -cutoff;
        let span = 2.0 * cutoff;
        (0..=steps)
            .map(|i| {
                let lat = start + span * f64::from(i) / f64::from(steps);
                self.transform(lon, lat)
            })
            .collect()
    }

    /// Samples the parallel at `lat` across the full hemisphere width,
    /// `resolution` steps, as net x/y points.
    pub fn parallel_points(&self, lat: f64) -> Vec<[f64; 2]> {
        let steps = self.resolution.max(1);
        (0..=steps)
            .map(|i| {
                let lon = -FRAC_PI_2 + std::f64::consts::PI * f64::from(i) / f64::from(steps);
                self.transform(lon, lat)
            })
            .collect()
    }
}

/// Graticule line positions in degrees for one hemisphere: every multiple of
/// `spacing_deg` strictly inside (-90, 90), zero included. The floor on the
/// spacing keeps a degenerate value from flooding the scene with lines.
pub fn graticule_steps(spacing_deg: f64) -> Vec<f64> {
    let spacing = spacing_deg.max(0.5);
    let mut steps = vec![0.0];
    let mut k = 1.0;
    while k * spacing < 90.0 {
        steps.push(k * spacing);
        steps.push(-k * spacing);
        k += 1.0;
    }
    steps.sort_by(|a, b| a.total_cmp(b));
    steps
}

/// Inverse of [`StereonetTransform`]: net x/y back to (longitude, latitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvertedStereonetTransform {
    kind: ProjectionKind,
    center_lon: f64,
    center_lat: f64,
    resolution: u32,
}

impl InvertedStereonetTransform {
    pub fn new(kind: ProjectionKind, center_lon: f64, center_lat: f64, resolution: u32) -> Self {
        Self { kind, center_lon, center_lat, resolution }
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn transform(&self, x: f64, y: f64) -> [f64; 2] {
        // The radius floor keeps the center of the net invertible.
        let rho = x.hypot(y).max(1e-9);
        let c = match self.kind {
            ProjectionKind::EqualArea => 2.0 * (rho / 2.0).asin(),
            ProjectionKind::EqualAngle => 2.0 * (rho / 2.0).atan(),
        };
        let (sin_c, cos_c) = c.sin_cos();
        let (sin_lat1, cos_lat1) = self.center_lat.sin_cos();

        let lat = (cos_c * sin_lat1 + y * sin_c * cos_lat1 / rho).asin();
        let lon = self.center_lon
            + (x * sin_c).atan2(rho * cos_lat1 * cos_c - y * sin_lat1 * sin_c);
        [lon, lat]
    }

    pub fn inverted(&self) -> StereonetTransform {
        StereonetTransform {
            kind: self.kind,
            center_lon: self.center_lon,
            center_lat: self.center_lat,
            resolution: self.resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_tokens() {
        assert_eq!(ProjectionKind::EqualArea.as_str(), "equal_area_stereonet");
        assert_eq!(ProjectionKind::EqualAngle.as_str(), "equal_angle_stereonet");
        assert_eq!(
            "equal_area_stereonet".parse::<ProjectionKind>().unwrap(),
            ProjectionKind::EqualArea
        );
        assert_eq!(
            "equal_angle_stereonet".parse::<ProjectionKind>().unwrap(),
            ProjectionKind::EqualAngle
        );
    }

    #[test]
    fn test_projection_aliases() {
        assert_eq!("schmidt".parse::<ProjectionKind>().unwrap(), ProjectionKind::EqualArea);
        assert_eq!("Wulff".parse::<ProjectionKind>().unwrap(), ProjectionKind::EqualAngle);
        assert!("mercator".parse::<ProjectionKind>().is_err());
    }

    #[test]
    fn test_round_trip_equal_area() {
        let fwd = StereonetTransform::new(ProjectionKind::EqualArea, 0.0, 0.0, 75);
        let inv = fwd.inverted();
        assert_eq!(fwd.kind(), ProjectionKind::EqualArea);
        assert_eq!(inv.kind(), ProjectionKind::EqualArea);

        let [x, y] = fwd.transform(0.5, 0.5);
        let [lon, lat] = inv.transform(x, y);
        assert!((lon - 0.5).abs() < 1e-9);
        assert!((lat - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_equal_angle() {
        let fwd = StereonetTransform::new(ProjectionKind::EqualAngle, 0.0, 0.0, 75);
        let inv = fwd.inverted();

        let [x, y] = fwd.transform(0.5, 0.5);
        let [lon, lat] = inv.transform(x, y);
        assert!((lon - 0.5).abs() < 1e-9);
        assert!((lat - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_center_maps_to_origin() {
        let fwd = StereonetTransform::new(ProjectionKind::EqualArea, 0.0, 0.0, 75);
        let [x, y] = fwd.transform(0.0, 0.0);
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_antipode_stays_finite() {
        let fwd = StereonetTransform::new(ProjectionKind::EqualArea, 0.0, 0.0, 75);
        let [x, y] = fwd.transform(std::f64::consts::PI, 0.0);
        assert!(x.is_finite());
        assert!(y.is_finite());
    }

    #[test]
    fn test_rim_radius() {
        let ea = StereonetTransform::new(ProjectionKind::EqualArea, 0.0, 0.0, 75);
        let eang = StereonetTransform::new(ProjectionKind::EqualAngle, 0.0, 0.0, 75);
        assert!((ea.rim_radius() - SQRT_2).abs() < 1e-12);
        assert!((eang.rim_radius() - 2.0).abs() < 1e-12);

        // A point 90 degrees from the center lands exactly on the rim.
        let [x, y] = ea.transform(FRAC_PI_2, 0.0);
        assert!((x.hypot(y) - ea.rim_radius()).abs() < 1e-9);
    }

    #[test]
    fn test_meridian_sampling() {
        let cutoff = 80.0_f64.to_radians();
        let fwd = StereonetTransform::new(ProjectionKind::EqualArea, 0.0, 0.0, 75);
        let pts = fwd.meridian_points(0.2, cutoff);
        assert_eq!(pts.len(), 76);
        let rim = fwd.rim_radius();
        for [x, y] in &pts {
            assert!(x.hypot(*y) <= rim + 1e-9);
        }
    }

    #[test]
    fn test_parallel_sampling() {
        let fwd = StereonetTransform::new(ProjectionKind::EqualArea, 0.0, 0.0, 2);
        let pts = fwd.parallel_points(0.0);
        assert_eq!(pts.len(), 3);
        // The equator passes through the net center.
        assert!(pts[1][0].abs() < 1e-12);
        assert!(pts[1][1].abs() < 1e-12);
    }

    #[test]
    fn test_double_inversion_is_identity() {
        let fwd = StereonetTransform::new(ProjectionKind::EqualAngle, 0.0, 0.0, 75);
        assert_eq!(fwd.inverted().inverted(), fwd);
    }

    #[test]
    fn test_graticule_steps() {
        let steps = graticule_steps(10.0);
        assert_eq!(steps.len(), 17);
        assert_eq!(steps[0], -80.0);
        assert_eq!(steps[8], 0.0);
        assert_eq!(steps[16], 80.0);
        assert!(steps.iter().all(|s| s.abs() < 90.0));
    }

    #[test]
    fn test_graticule_steps_floor_degenerate_spacing() {
        let steps = graticule_steps(0.0);
        assert!(!steps.is_empty());
        assert!(steps.len() < 400);
    }
}
