use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumCount, EnumIter, EnumString};
use thiserror::Error;

/// Angular distance between two neighbouring months on the dial face.
pub const DEGREES_PER_MONTH: f64 = 30.0;

/// A month in dial order. The dial's zero position is December, so the
/// discriminants run DEC = 0, JAN = 1, ... NOV = 11.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    EnumCount,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    #[strum(to_string = "DEC", serialize = "December", serialize = "0")]
    Dec,
    #[strum(to_string = "JAN", serialize = "January", serialize = "1")]
    Jan,
    #[strum(to_string = "FEB", serialize = "February", serialize = "2")]
    Feb,
    #[strum(to_string = "MAR", serialize = "March", serialize = "3")]
    Mar,
    #[strum(to_string = "APR", serialize = "April", serialize = "4")]
    Apr,
    #[strum(to_string = "MAY", serialize = "5")]
    May,
    #[strum(to_string = "JUN", serialize = "June", serialize = "6")]
    Jun,
    #[strum(to_string = "JUL", serialize = "July", serialize = "7")]
    Jul,
    #[strum(to_string = "AUG", serialize = "August", serialize = "8")]
    Aug,
    #[strum(to_string = "SEP", serialize = "September", serialize = "9")]
    Sep,
    #[strum(to_string = "OCT", serialize = "October", serialize = "10")]
    Oct,
    #[strum(to_string = "NOV", serialize = "November", serialize = "11")]
    Nov,
}

const ALL: [Month; Month::COUNT] = [
    Month::Dec,
    Month::Jan,
    Month::Feb,
    Month::Mar,
    Month::Apr,
    Month::May,
    Month::Jun,
    Month::Jul,
    Month::Aug,
    Month::Sep,
    Month::Oct,
    Month::Nov,
];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MonthError {
    #[error("month index {0} is outside the dial (0..=11)")]
    InvalidIndex(usize),
}

impl Month {
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Wraps around the dial, so 12 is December again.
    pub fn from_index(idx: usize) -> Self {
        ALL[idx % Self::COUNT]
    }

    pub fn dial_angle(&self) -> f64 {
        self.index() as f64 * DEGREES_PER_MONTH
    }
}

impl TryFrom<usize> for Month {
    type Error = MonthError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        ALL.get(idx).copied().ok_or(MonthError::InvalidIndex(idx))
    }
}
