use crate::geometry::{Bounds, Point};
use bento::MonthView;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notifications coming from the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialEvent {
    /// Pointer pressed on the hand.
    PointerDown,
    PointerMove {
        position: Point,
        #[serde(default)]
        bounds: Option<Bounds>,
    },
    PointerUp,
    ToggleYearMenu,
    SelectYear {
        year: u16,
    },
    Teardown,
}

impl DialEvent {
    /// Move/up notifications only reach the dial through a drag listener.
    pub fn is_drag_tracking(&self) -> bool {
        matches!(self, Self::PointerMove { .. } | Self::PointerUp)
    }
}

/// What the rendering layer has to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DialUpdate {
    Rotation(f64),
    Month(MonthView),
    Year(u16),
    YearMenu(bool),
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads one event per line; blank lines and `#` comments are skipped.
pub fn parse_script(script: &str) -> Result<Vec<DialEvent>, ScriptError> {
    script
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str(text).map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}
