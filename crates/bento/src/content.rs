use crate::layout::{LayoutTemplate, Span};
use crate::month::Month;
use crate::season::{HexColor, SeasonalTheme};
use palette::Srgb;
use serde::Serialize;
use strum::EnumCount;

/// What a month is "about"; feeds the card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRecord {
    pub project: &'static str,
    pub metric: &'static str,
    pub extra: &'static str,
    pub milestone: &'static str,
}

const fn record(
    project: &'static str,
    metric: &'static str,
    extra: &'static str,
    milestone: &'static str,
) -> ThemeRecord {
    ThemeRecord {
        project,
        metric,
        extra,
        milestone,
    }
}

pub const THEMES: [ThemeRecord; Month::COUNT] = [
    record("Infrastructure", "Uptime: 99.9%", "Security Audit", "System Upgrade"),
    record("User Experience", "NPS Score: 85", "A/B Testing", "Design System"),
    record("Performance", "Load Time: 1.2s", "CDN Optimization", "Caching Layer"),
    record("Mobile Launch", "Downloads: 10K", "App Store Featured", "Beta Release"),
    record("API Gateway", "Throughput: +40%", "Rate Limiting", "Version 2.0"),
    record("Analytics", "MAU: 50K", "Dashboard v3", "Real-time Metrics"),
    record("Localization", "Languages: 12", "EMEA Expansion", "Translation API"),
    record("AI Features", "Accuracy: 94%", "ML Pipeline", "Model Training"),
    record("DevOps", "Deploy Time: 5min", "CI/CD Upgrade", "Auto-scaling"),
    record("Content CMS", "Articles: 500+", "SEO Boost", "Editor v2"),
    record("Payments", "Revenue: +25%", "Stripe Integration", "Multi-currency"),
    record("Marketplace", "Vendors: 150", "Commission Model", "API Access"),
];

impl ThemeRecord {
    pub fn for_month(month: Month) -> &'static ThemeRecord {
        &THEMES[month.index()]
    }
}

const CARD_BACKGROUND: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);

pub fn card_background() -> HexColor {
    let (r, g, b) = CARD_BACKGROUND;
    HexColor::from(Srgb::new(r, g, b))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    pub title: String,
    pub description: String,
    pub label: String,
    pub col_span: u8,
    pub row_span: u8,
    #[serde(rename = "color")]
    pub background: HexColor,
}

impl CardDescriptor {
    pub fn span(&self) -> Span {
        Span::new(self.col_span, self.row_span)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ContentSlot {
    title: String,
    description: String,
    label: &'static str,
}

impl ContentSlot {
    fn new(title: impl Into<String>, description: impl Into<String>, label: &'static str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            label,
        }
    }
}

const POOL_SIZE: usize = 5;

pub fn progress_percent(month: Month) -> usize {
    80 + (month.index() * 3) % 20
}

fn content_pool(month: Month, theme: &ThemeRecord) -> [ContentSlot; POOL_SIZE] {
    [
        ContentSlot::new(
            format!("{} - {}", month, theme.project),
            "Focus area for this month",
            "Initiative",
        ),
        ContentSlot::new("Key Metric", theme.metric, "Performance"),
        ContentSlot::new(
            "Progress",
            format!("{}% Complete", progress_percent(month)),
            "Status",
        ),
        ContentSlot::new(theme.extra, "Additional deliverable", "Milestone"),
        ContentSlot::new(theme.milestone, "Major achievement", "Achievement"),
    ]
}

/// Everything the card grid and the ambient background need for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    pub month: Month,
    pub theme: SeasonalTheme,
    pub cards: Vec<CardDescriptor>,
}

/// Builds the theme and the card list for `month`.
///
/// Pure: the same month always yields the same view.
pub fn generate(month: Month) -> MonthView {
    let template = LayoutTemplate::for_month(month);
    let pool = content_pool(month, ThemeRecord::for_month(month));
    let background = card_background();

    let cards: Vec<CardDescriptor> = template
        .spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let slot = &pool[i % POOL_SIZE];
            CardDescriptor {
                title: slot.title.clone(),
                description: slot.description.clone(),
                label: slot.label.to_string(),
                col_span: span.col,
                row_span: span.row,
                background: background.clone(),
            }
        })
        .collect();

    log::debug!("generated {} cards for {}", cards.len(), month);

    MonthView {
        month,
        theme: SeasonalTheme::for_month(month),
        cards,
    }
}

/// Like [`generate`], for a raw dial index. Indices off the dial resolve to
/// January for every lookup.
pub fn generate_index(idx: usize) -> MonthView {
    match Month::try_from(idx) {
        Ok(month) => generate(month),
        Err(e) => {
            log::warn!("{}; showing {}", e, Month::Jan);
            generate(Month::Jan)
        }
    }
}
