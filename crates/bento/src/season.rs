use crate::month::Month;
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// `#rrggbb`, as consumed by gradient renderers.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct HexColor(String);

crate::impl_string_newtype!(HexColor);

impl From<Srgb<u8>> for HexColor {
    fn from(c: Srgb<u8>) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue))
    }
}

/// Bare `r, g, b` triple, meant to be spliced into an `rgba(...)` expression.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct GlowColor(String);

crate::impl_string_newtype!(GlowColor);

impl From<Srgb<u8>> for GlowColor {
    fn from(c: Srgb<u8>) -> Self {
        Self(format!("{}, {}, {}", c.red, c.green, c.blue))
    }
}

type Rgb8 = (u8, u8, u8);

// Winter: DEC JAN FEB, spring: MAR APR MAY, summer: JUN JUL AUG, fall: SEP OCT NOV
const GRADIENTS: [[Rgb8; 3]; Month::COUNT] = [
    [(0x1a, 0x1a, 0x3e), (0x2d, 0x1b, 0x4e), (0x4a, 0x14, 0x8c)],
    [(0x0d, 0x1b, 0x2a), (0x1b, 0x26, 0x3b), (0x41, 0x5a, 0x77)],
    [(0x1a, 0x23, 0x7e), (0x28, 0x35, 0x93), (0x39, 0x49, 0xab)],
    [(0x1b, 0x5e, 0x20), (0x2e, 0x7d, 0x32), (0x4c, 0xaf, 0x50)],
    [(0x33, 0x69, 0x1e), (0x55, 0x8b, 0x2f), (0x7c, 0xb3, 0x42)],
    [(0x82, 0x77, 0x17), (0x9e, 0x9d, 0x24), (0xc5, 0xca, 0x33)],
    [(0xe6, 0x51, 0x00), (0xff, 0x6f, 0x00), (0xff, 0xa7, 0x26)],
    [(0xbf, 0x36, 0x0c), (0xd8, 0x43, 0x15), (0xff, 0x6f, 0x00)],
    [(0xe6, 0x51, 0x00), (0xf5, 0x7c, 0x00), (0xff, 0xb7, 0x4d)],
    [(0xb7, 0x1c, 0x1c), (0xc6, 0x28, 0x28), (0xd3, 0x2f, 0x2f)],
    [(0xd8, 0x43, 0x15), (0xe6, 0x4a, 0x19), (0xff, 0x57, 0x22)],
    [(0x8b, 0x00, 0x00), (0xa5, 0x2a, 0x2a), (0xcd, 0x5c, 0x5c)],
];

const GLOWS: [Rgb8; Month::COUNT] = [
    (26, 26, 62),   // deep blue
    (13, 27, 42),   // dark blue
    (26, 35, 126),  // indigo
    (27, 94, 32),   // green
    (51, 105, 30),  // light green
    (130, 119, 23), // yellow-green
    (230, 81, 0),   // orange
    (191, 54, 12),  // deep orange
    (230, 81, 0),   // orange
    (183, 28, 28),  // red
    (216, 67, 21),  // orange-red
    (139, 0, 0),    // dark red
];

fn srgb((r, g, b): Rgb8) -> Srgb<u8> {
    Srgb::new(r, g, b)
}

/// Palette for the ambient background and the card glow of one month.
/// Adjacent months are not blended; switching months swaps the whole theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "ThemeProps")]
pub struct SeasonalTheme {
    pub stops: [Srgb<u8>; 3],
    pub glow: Srgb<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProps {
    pub color_stops: [HexColor; 3],
    pub glow_color: GlowColor,
}

impl From<SeasonalTheme> for ThemeProps {
    fn from(theme: SeasonalTheme) -> Self {
        Self {
            color_stops: theme.stops.map(HexColor::from),
            glow_color: GlowColor::from(theme.glow),
        }
    }
}

impl SeasonalTheme {
    pub fn for_month(month: Month) -> Self {
        let i = month.index();
        Self {
            stops: GRADIENTS[i].map(srgb),
            glow: srgb(GLOWS[i]),
        }
    }

    pub fn for_index(idx: usize) -> Self {
        match Month::try_from(idx) {
            Ok(month) => Self::for_month(month),
            Err(e) => {
                log::warn!("{}; using the {} palette", e, Month::Jan);
                Self::for_month(Month::Jan)
            }
        }
    }

    pub fn stop_hex(&self) -> [HexColor; 3] {
        self.stops.map(HexColor::from)
    }

    pub fn glow_rgb(&self) -> GlowColor {
        GlowColor::from(self.glow)
    }
}
