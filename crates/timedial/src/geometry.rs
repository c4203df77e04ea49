use crate::dial::{FULL_TURN, QUARTER_TURN};
use bento::Month;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// Distance of the month labels from the dial centre.
pub const LABEL_RADIUS: f64 = 170.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen box of the dial, as reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A detached surface reports an empty or garbage box.
    pub fn is_usable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Screen point at `clock_angle` degrees (clockwise from straight up) and
    /// `radius` from the centre.
    pub fn point_at(&self, clock_angle: f64, radius: f64) -> Point {
        let c = self.center();
        let rad = clock_angle.to_radians();
        Point::new(c.x + radius * rad.sin(), c.y - radius * rad.cos())
    }
}

/// Clockwise angle from straight up, in `[0, 360)`, for an offset from the
/// dial centre in screen coordinates (y grows downwards).
pub fn clock_angle(dx: f64, dy: f64) -> f64 {
    // atan2 measures from the +x axis; the dial measures from -y
    let angle = dy.atan2(dx).to_degrees() + QUARTER_TURN;
    if angle < 0.0 { angle + FULL_TURN } else { angle }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelGeometry {
    pub month: Month,
    /// Offset of the label centre from the dial centre.
    pub offset: Point,
    pub selected: bool,
}

impl LabelGeometry {
    pub fn calculate(month: Month, selected: Month, radius: f64) -> Self {
        let rad = (month.dial_angle() - QUARTER_TURN).to_radians();
        Self {
            month,
            offset: Point::new(rad.cos() * radius, rad.sin() * radius),
            selected: month == selected,
        }
    }

    /// All twelve labels in dial order.
    pub fn face(selected: Month, radius: f64) -> Vec<Self> {
        (0..Month::COUNT)
            .map(|i| Self::calculate(Month::from_index(i), selected, radius))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn angle_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(FULL_TURN);
        d.min(FULL_TURN - d)
    }

    #[test]
    fn test_cardinal_directions() {
        assert!(angle_distance(clock_angle(0.0, -10.0), 0.0) < EPS);
        assert!((clock_angle(10.0, 0.0) - 90.0).abs() < EPS);
        assert!((clock_angle(0.0, 10.0) - 180.0).abs() < EPS);
        assert!((clock_angle(-10.0, 0.0) - 270.0).abs() < EPS);
    }

    #[test]
    fn test_clock_angle_is_normalized() {
        for (dx, dy) in [(-1.0, -1.0), (-1.0, -0.0), (-3.0, 0.5), (1.0, -1.0)] {
            let angle = clock_angle(dx, dy);
            assert!((0.0..FULL_TURN).contains(&angle), "{angle}");
        }
        assert!((clock_angle(-1.0, -1.0) - 315.0).abs() < EPS);
    }

    #[test]
    fn test_point_at_inverts_clock_angle() {
        let bounds = Bounds::new(100.0, 50.0, 400.0, 400.0);
        let center = bounds.center();
        for angle in [0.5, 30.0, 95.0, 181.0, 344.0] {
            let p = bounds.point_at(angle, 150.0);
            let back = clock_angle(p.x - center.x, p.y - center.y);
            assert!(angle_distance(back, angle) < 1e-6, "{angle} -> {back}");
        }
    }

    #[test]
    fn test_bounds_usability() {
        assert!(Bounds::new(0.0, 0.0, 300.0, 300.0).is_usable());
        assert!(!Bounds::default().is_usable());
        assert!(!Bounds::new(f64::NAN, 0.0, 300.0, 300.0).is_usable());
        assert!(!Bounds::new(0.0, 0.0, -1.0, 300.0).is_usable());
    }

    #[test]
    fn test_label_positions() {
        let face = LabelGeometry::face(Month::Jan, LABEL_RADIUS);
        assert_eq!(face.len(), 12);

        let dec = face[0];
        assert_eq!(dec.month, Month::Dec);
        assert!(dec.offset.x.abs() < EPS);
        assert!((dec.offset.y + LABEL_RADIUS).abs() < EPS);

        let mar = face[3];
        assert!((mar.offset.x - LABEL_RADIUS).abs() < EPS);
        assert!(mar.offset.y.abs() < EPS);

        assert_eq!(face.iter().filter(|l| l.selected).count(), 1);
        assert!(face[1].selected);
    }
}
