use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::PortfolioConfig;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct IconLink {
    pub rel: &'static str,
    pub sizes: Option<&'static str>,
    pub href: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub icons: Vec<IconLink>,
}

const ICON_SLOTS: [(&str, Option<&str>); 4] = [
    ("icon", Some("16x16")),
    ("icon", Some("32x32")),
    ("apple-touch-icon", Some("180x180")),
    ("shortcut icon", None),
];

/// `favicon_href` is `None` when no favicon could be drawn; the page then
/// simply carries no icon links.
pub fn render(config: &PortfolioConfig, favicon_href: Option<&str>) -> PageMeta {
    let icons = favicon_href
        .map(|href| {
            ICON_SLOTS
                .iter()
                .map(|(rel, sizes)| IconLink {
                    rel: *rel,
                    sizes: *sizes,
                    href: href.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    PageMeta {
        title: format!("Portfolio - {}", config.personal.name),
        description: format!("{} Portfolio", config.personal.title),
        icons,
    }
}
