pub mod model;
pub mod session;

pub use model::{DialAction, DialController, month_for_angle, normalize_angle, snap_angle};
pub use session::{ListenerId, PointerChannel, PointerHub, Subscription};

use bento::{DEGREES_PER_MONTH, Month};

pub const SLOT_COUNT: usize = 12;
pub const SNAP_STEP: f64 = DEGREES_PER_MONTH;
pub const FULL_TURN: f64 = 360.0;
pub const QUARTER_TURN: f64 = 90.0;
pub const INITIAL_MONTH: Month = Month::Jan;
