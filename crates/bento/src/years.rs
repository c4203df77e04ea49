use thiserror::Error;

/// Years offered by the year menu. Purely cosmetic; the selected year never
/// influences the month grid.
pub const YEARS: [u16; 6] = [2025, 2020, 2015, 2010, 2005, 2000];

pub const DEFAULT_YEAR: u16 = YEARS[0];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum YearError {
    #[error("year {0} is not in the year menu")]
    Unknown(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPicker {
    selected: u16,
    open: bool,
}

impl Default for YearPicker {
    fn default() -> Self {
        Self {
            selected: DEFAULT_YEAR,
            open: false,
        }
    }
}

impl YearPicker {
    pub fn new(year: u16) -> Self {
        let mut picker = Self::default();
        if let Err(e) = picker.select(year) {
            log::warn!("{}; starting at {}", e, DEFAULT_YEAR);
        }
        picker
    }

    pub fn selected(&self) -> u16 {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks `year` and closes the menu. Unknown years leave the picker as is.
    pub fn select(&mut self, year: u16) -> Result<(), YearError> {
        if !YEARS.contains(&year) {
            return Err(YearError::Unknown(year));
        }
        self.selected = year;
        self.open = false;
        Ok(())
    }
}
