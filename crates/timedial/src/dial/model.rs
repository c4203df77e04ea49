use crate::dial::session::{PointerHub, Subscription};
use crate::dial::{FULL_TURN, INITIAL_MONTH, SLOT_COUNT, SNAP_STEP};
use crate::geometry::{self, Bounds, Point};
use bento::Month;

/// Folds any angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can land exactly on the modulus for tiny negative inputs
    if a >= FULL_TURN { 0.0 } else { a }
}

/// Nearest month position, halves rounding up. Lands on 360 for angles just
/// below a full turn.
pub fn snap_angle(angle: f64) -> f64 {
    (angle / SNAP_STEP).round() * SNAP_STEP
}

pub fn month_for_angle(angle: f64) -> Month {
    let slot = (normalize_angle(angle) / SNAP_STEP).round() as usize;
    Month::from_index(slot % SLOT_COUNT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialAction {
    pub should_redraw: bool,
    /// Set when the selected month changed.
    pub committed: Option<Month>,
}

impl DialAction {
    pub fn new(should_redraw: bool, committed: Option<Month>) -> Self {
        Self {
            should_redraw,
            committed,
        }
    }
}

/// Rotation and drag state of the dial hand.
///
/// Outside a drag the angle is always one of the twelve month positions and
/// matches [`DialController::month`]. During a drag the angle follows the
/// pointer freely and the month tracks it live.
#[derive(Debug)]
pub struct DialController {
    angle: f64,
    month: Month,
    dragging: bool,
    hub: PointerHub,
    subscription: Option<Subscription>,
}

impl DialController {
    pub fn new(hub: PointerHub) -> Self {
        Self::with_month(hub, INITIAL_MONTH)
    }

    pub fn with_month(hub: PointerHub, month: Month) -> Self {
        Self {
            angle: month.dial_angle(),
            month,
            dragging: false,
            hub,
            subscription: None,
        }
    }

    /// Current hand rotation in degrees, clockwise from straight up.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }

    pub fn begin_drag(&mut self) -> DialAction {
        if self.dragging {
            return DialAction::default();
        }
        self.dragging = true;
        self.subscription = Some(self.hub.subscribe());
        log::debug!("drag started at {:.1}°", self.angle);
        DialAction::new(true, None)
    }

    /// Follows the pointer. Ignored outside a drag and when the dial has no
    /// usable on-screen box.
    pub fn pointer_moved(&mut self, position: Point, bounds: Option<Bounds>) -> DialAction {
        if !self.dragging {
            return DialAction::default();
        }
        let Some(bounds) = bounds.filter(Bounds::is_usable) else {
            log::trace!("dropping pointer move without dial geometry");
            return DialAction::default();
        };

        let center = bounds.center();
        let angle = geometry::clock_angle(position.x - center.x, position.y - center.y);
        if !angle.is_finite() {
            log::trace!("dropping pointer move at {:?}", position);
            return DialAction::default();
        }

        self.angle = angle;
        let committed = self.commit(month_for_angle(angle));
        DialAction::new(true, committed)
    }

    /// Releases the hand: snaps to the nearest month and commits it.
    pub fn end_drag(&mut self) -> DialAction {
        if !self.dragging {
            return DialAction::default();
        }
        self.dragging = false;
        self.subscription = None;

        self.angle = normalize_angle(snap_angle(self.angle));
        let committed = self.commit(month_for_angle(self.angle));
        log::debug!("drag released at {:.0}° ({})", self.angle, self.month);
        DialAction::new(true, committed)
    }

    /// Surface is going away. A live drag is released like a pointer-up so
    /// the hand never stays between months.
    pub fn teardown(&mut self) -> DialAction {
        self.end_drag()
    }

    fn commit(&mut self, month: Month) -> Option<Month> {
        if month == self.month {
            return None;
        }
        log::debug!("month {} -> {}", self.month, month);
        self.month = month;
        Some(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::PointerChannel;

    fn dial_bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 400.0, 400.0)
    }

    fn drag_to(dial: &mut DialController, angle: f64) -> DialAction {
        let bounds = dial_bounds();
        dial.pointer_moved(bounds.point_at(angle, 150.0), Some(bounds))
    }

    #[test]
    fn test_month_for_snapped_angles() {
        assert_eq!(month_for_angle(0.0), Month::Dec);
        assert_eq!(month_for_angle(30.0), Month::Jan);
        assert_eq!(month_for_angle(90.0), Month::Mar);
        assert_eq!(month_for_angle(330.0), Month::Nov);
        assert_eq!(month_for_angle(360.0), Month::Dec);
        for i in 0..SLOT_COUNT {
            assert_eq!(month_for_angle(i as f64 * SNAP_STEP).index(), i);
        }
    }

    #[test]
    fn test_snap_rounds_half_up() {
        assert_eq!(snap_angle(14.9), 0.0);
        assert_eq!(snap_angle(15.0), 30.0);
        assert_eq!(snap_angle(44.9), 30.0);
        assert_eq!(snap_angle(45.0), 60.0);
        assert_eq!(snap_angle(350.0), 360.0);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(-30.0), 330.0);
        assert_eq!(normalize_angle(390.0), 30.0);
        assert_eq!(normalize_angle(-1e-20), 0.0);
    }

    #[test]
    fn test_initial_state() {
        let dial = DialController::new(PointerHub::new());
        assert_eq!(dial.angle(), 30.0);
        assert_eq!(dial.month(), Month::Jan);
        assert!(!dial.is_dragging());
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut dial = DialController::new(PointerHub::new());
        let action = drag_to(&mut dial, 200.0);
        assert_eq!(action, DialAction::default());
        assert_eq!(dial.angle(), 30.0);
    }

    #[test]
    fn test_move_without_geometry_is_ignored() {
        let mut dial = DialController::new(PointerHub::new());
        dial.begin_drag();
        assert_eq!(
            dial.pointer_moved(Point::new(10.0, 10.0), None),
            DialAction::default()
        );
        assert_eq!(
            dial.pointer_moved(Point::new(10.0, 10.0), Some(Bounds::default())),
            DialAction::default()
        );
        assert_eq!(dial.angle(), 30.0);
        assert_eq!(dial.month(), Month::Jan);
    }

    #[test]
    fn test_live_month_follows_pointer() {
        let mut dial = DialController::new(PointerHub::new());
        dial.begin_drag();

        let action = drag_to(&mut dial, 40.0);
        assert!(action.should_redraw);
        assert_eq!(action.committed, None);
        assert!((dial.angle() - 40.0).abs() < 1e-6);

        let action = drag_to(&mut dial, 95.0);
        assert_eq!(action.committed, Some(Month::Mar));
        assert_eq!(dial.month(), Month::Mar);
        assert!((dial.angle() - 95.0).abs() < 1e-6);
    }

    #[test]
    fn test_release_snaps_and_commits() {
        for angle in [15.5, 20.0, 30.0, 44.9] {
            let mut dial = DialController::with_month(PointerHub::new(), Month::Jun);
            dial.begin_drag();
            drag_to(&mut dial, angle);
            dial.end_drag();
            assert_eq!(dial.angle(), 30.0, "{angle}");
            assert_eq!(dial.month(), Month::Jan, "{angle}");
        }
    }

    #[test]
    fn test_release_wraps_to_december() {
        for angle in [345.5, 352.0, 359.9, 0.5, 14.9] {
            let mut dial = DialController::new(PointerHub::new());
            dial.begin_drag();
            drag_to(&mut dial, angle);
            dial.end_drag();
            assert_eq!(dial.angle(), 0.0, "{angle}");
            assert_eq!(dial.month(), Month::Dec, "{angle}");
        }
    }

    #[test]
    fn test_release_without_movement_keeps_month() {
        let mut dial = DialController::new(PointerHub::new());
        dial.begin_drag();
        let action = dial.end_drag();
        assert!(action.should_redraw);
        assert_eq!(action.committed, None);
        assert_eq!(dial.angle(), 30.0);
        assert_eq!(dial.month(), Month::Jan);
    }

    #[test]
    fn test_released_hand_rests_on_a_month() {
        let mut dial = DialController::new(PointerHub::new());
        for angle in [3.0, 47.0, 101.5, 179.99, 222.0, 301.0, 358.0] {
            dial.begin_drag();
            drag_to(&mut dial, angle);
            dial.end_drag();
            let a = dial.angle();
            assert!((0.0..360.0).contains(&a));
            assert_eq!(a % SNAP_STEP, 0.0);
            assert_eq!(dial.month().index(), (a / SNAP_STEP) as usize % SLOT_COUNT);
        }
    }

    #[test]
    fn test_listeners_installed_once_per_drag() {
        let hub = PointerHub::new();
        let mut dial = DialController::new(hub.clone());

        for _ in 0..3 {
            dial.begin_drag();
            dial.begin_drag();
            assert_eq!(hub.listener_count(PointerChannel::Move), 1);
            assert_eq!(hub.listener_count(PointerChannel::Up), 1);
            dial.end_drag();
            assert_eq!(hub.listener_count(PointerChannel::Move), 0);
            assert_eq!(hub.listener_count(PointerChannel::Up), 0);
        }
    }

    #[test]
    fn test_dropping_dial_mid_drag_uninstalls_listeners() {
        let hub = PointerHub::new();
        let mut dial = DialController::new(hub.clone());
        dial.begin_drag();
        drop(dial);
        assert!(!hub.is_listening(PointerChannel::Move));
    }

    #[test]
    fn test_teardown_releases_drag() {
        let hub = PointerHub::new();
        let mut dial = DialController::new(hub.clone());
        dial.begin_drag();
        drag_to(&mut dial, 128.0);
        let action = dial.teardown();
        assert!(action.should_redraw);
        assert!(!dial.is_dragging());
        assert_eq!(dial.month(), Month::Apr);
        assert_eq!(dial.angle(), 120.0);
        assert!(!hub.is_listening(PointerChannel::Up));
    }
}
