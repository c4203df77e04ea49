//! Month-driven content for the timeline card grid: the seasonal palette,
//! the per-month layout and the card text.

mod macros;

pub mod content;
pub mod layout;
pub mod month;
pub mod season;
pub mod years;

pub use content::{CardDescriptor, MonthView, ThemeRecord, generate, generate_index};
pub use layout::{LayoutTemplate, Span};
pub use month::{DEGREES_PER_MONTH, Month, MonthError};
pub use season::{GlowColor, HexColor, SeasonalTheme};
pub use years::{YEARS, YearError, YearPicker};
