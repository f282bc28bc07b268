use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::policies::anchor::Anchor;

/// Offset past which the navigation bar turns solid.
pub const NAV_SOLID_THRESHOLD: f64 = 50.0;
/// Fraction of the viewport height treated as "at the top".
pub const TOP_REGION_RATIO: f64 = 0.3;
/// Distance from the document end treated as "near the bottom".
pub const BOTTOM_MARGIN: f64 = 100.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct ViewportMetrics {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ViewportMetrics {
    /// All three values finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        [self.scroll_offset, self.viewport_height, self.document_height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavBarStyle {
    Transparent,
    Solid,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScrollArrow {
    Hidden,
    Down,
    Up,
}

/// What activating the arrow does. Both use smooth scrolling.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAction {
    ScrollToAnchor(Anchor),
    ScrollToTop,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct ScrollState {
    pub nav_bar: NavBarStyle,
    pub arrow: ScrollArrow,
    pub arrow_action: Option<ScrollAction>,
}

impl NavBarStyle {
    pub fn at(scroll_offset: f64) -> Self {
        if scroll_offset > NAV_SOLID_THRESHOLD {
            NavBarStyle::Solid
        } else {
            NavBarStyle::Transparent
        }
    }
}

impl ScrollArrow {
    /// Near-bottom wins over at-top, so a short page shows the up arrow.
    pub fn at(metrics: &ViewportMetrics) -> Self {
        let at_top = metrics.scroll_offset < metrics.viewport_height * TOP_REGION_RATIO;
        let near_bottom = metrics.scroll_offset + metrics.viewport_height
            >= metrics.document_height - BOTTOM_MARGIN;

        if near_bottom {
            ScrollArrow::Up
        } else if at_top {
            ScrollArrow::Down
        } else {
            ScrollArrow::Hidden
        }
    }

    pub fn action(&self) -> Option<ScrollAction> {
        match self {
            ScrollArrow::Hidden => None,
            ScrollArrow::Down => Some(ScrollAction::ScrollToAnchor(Anchor::About)),
            ScrollArrow::Up => Some(ScrollAction::ScrollToTop),
        }
    }
}

impl ScrollState {
    /// Recomputed from scratch on every scroll event; no history is kept.
    pub fn from_metrics(metrics: &ViewportMetrics) -> Self {
        let arrow = ScrollArrow::at(metrics);
        Self {
            nav_bar: NavBarStyle::at(metrics.scroll_offset),
            arrow,
            arrow_action: arrow.action(),
        }
    }
}
