use crate::month::Month;
use serde::Serialize;
use strum::EnumCount;

/// The card grid is four columns wide; spans are laid out against that.
pub const GRID_COLUMNS: u8 = 4;

/// Cards shown per month, in dial order. Fixed, not random.
pub const CARD_COUNT_PATTERN: [usize; Month::COUNT] = [1, 3, 2, 5, 4, 2, 1, 4, 3, 5, 1, 3];

pub const FALLBACK_CARD_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub col: u8,
    pub row: u8,
}

impl Span {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub fn area(&self) -> u32 {
        u32::from(self.col) * u32::from(self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTemplate {
    pub card_count: usize,
    pub spans: &'static [Span],
}

pub static TEMPLATES: [LayoutTemplate; 5] = [
    LayoutTemplate {
        card_count: 1,
        spans: &[Span::new(4, 4)],
    },
    LayoutTemplate {
        card_count: 2,
        spans: &[Span::new(2, 4), Span::new(2, 4)],
    },
    LayoutTemplate {
        card_count: 3,
        spans: &[Span::new(2, 2), Span::new(2, 2), Span::new(4, 2)],
    },
    LayoutTemplate {
        card_count: 4,
        spans: &[
            Span::new(2, 2),
            Span::new(2, 2),
            Span::new(2, 2),
            Span::new(2, 2),
        ],
    },
    LayoutTemplate {
        card_count: 5,
        spans: &[
            Span::new(2, 2),
            Span::new(2, 2),
            Span::new(2, 1),
            Span::new(1, 1),
            Span::new(1, 1),
        ],
    },
];

impl LayoutTemplate {
    /// Looks up the template for `count` cards. Counts without a template get
    /// the three-card layout.
    pub fn for_count(count: usize) -> &'static LayoutTemplate {
        TEMPLATES
            .iter()
            .find(|t| t.card_count == count)
            .unwrap_or_else(|| {
                log::warn!(
                    "no layout for {} cards, using the {}-card layout",
                    count,
                    FALLBACK_CARD_COUNT
                );
                &TEMPLATES[FALLBACK_CARD_COUNT - 1]
            })
    }

    pub fn for_month(month: Month) -> &'static LayoutTemplate {
        Self::for_count(card_count(month))
    }

    /// Grid cells covered. Informational only; layouts are not validated
    /// against the grid.
    pub fn area(&self) -> u32 {
        self.spans.iter().map(Span::area).sum()
    }
}

pub fn card_count(month: Month) -> usize {
    CARD_COUNT_PATTERN[month.index()]
}
