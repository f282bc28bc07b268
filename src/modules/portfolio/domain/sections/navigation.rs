use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::PortfolioConfig;
use crate::portfolio::domain::policies::{Anchor, ResumeLink};

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: Anchor,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NavigationView {
    pub brand_name: String,
    pub initials: String,
    pub items: Vec<NavItem>,
    pub resume: ResumeLink,
}

pub fn render(config: &PortfolioConfig) -> NavigationView {
    NavigationView {
        brand_name: config.personal.name.clone(),
        initials: config.personal.normalized_initials(),
        items: Anchor::ALL
            .iter()
            .map(|anchor| NavItem {
                label: anchor.label(),
                anchor: *anchor,
            })
            .collect(),
        resume: ResumeLink::from(&config.resume),
    }
}
