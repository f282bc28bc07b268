use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::{PortfolioConfig, Publication, PublicationType};
use crate::portfolio::domain::policies::{is_set, ExternalLink, SectionVisibility};

/// Placeholder URL that means "no link yet".
const PLACEHOLDER_URL: &str = "#";

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VenueLine {
    pub label: &'static str,
    pub name: String,
    /// Trailing details in display order, e.g. volume then `pp. 1-15`.
    pub details: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PublicationCard {
    pub title: String,
    pub kind: PublicationType,
    pub kind_label: &'static str,
    pub year: String,
    pub authors: String,
    pub journal: Option<VenueLine>,
    pub conference: Option<VenueLine>,
    pub summary: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub link: Option<ExternalLink>,
    pub doi: Option<String>,
    pub glyph: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PublicationsView {
    pub entries: Vec<PublicationCard>,
    pub count_label: String,
}

pub fn render(
    config: &PortfolioConfig,
    visibility: &SectionVisibility,
) -> Option<PublicationsView> {
    if !visibility.publications {
        return None;
    }
    let publications = config.publications.as_deref()?;

    let count = publications.len();
    Some(PublicationsView {
        entries: publications.iter().map(publication_card).collect(),
        count_label: format!(
            "{} Publication{}",
            count,
            if count == 1 { "" } else { "s" }
        ),
    })
}

fn set(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| is_set(Some(v.as_str())))
}

fn pages(publication: &Publication) -> Option<String> {
    set(&publication.pages).map(|p| format!("pp. {}", p))
}

fn publication_card(publication: &Publication) -> PublicationCard {
    // Journal and conference are independent: either, both or neither show.
    let journal = set(&publication.journal).map(|name| VenueLine {
        label: "Journal",
        name,
        details: [set(&publication.volume), pages(publication)]
            .into_iter()
            .flatten()
            .collect(),
    });

    let conference = set(&publication.conference).map(|name| VenueLine {
        label: "Conference",
        name,
        details: [set(&publication.location), pages(publication)]
            .into_iter()
            .flatten()
            .collect(),
    });

    let link = publication
        .url
        .as_deref()
        .filter(|url| is_set(Some(*url)) && *url != PLACEHOLDER_URL)
        .map(|url| ExternalLink::new(url, "View Publication"));

    let glyph = match publication.kind {
        PublicationType::JournalArticle => "📄",
        _ => "📚",
    };

    PublicationCard {
        title: publication.title.clone(),
        kind: publication.kind,
        kind_label: publication.kind.label(),
        year: publication.year.clone(),
        authors: publication.authors.join(", "),
        journal,
        conference,
        summary: set(&publication.summary),
        keywords: publication.keywords.clone().filter(|k| !k.is_empty()),
        link,
        doi: set(&publication.doi),
        glyph,
    }
}
