use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::PortfolioConfig;
use crate::portfolio::domain::policies::SectionVisibility;

use super::about::AboutView;
use super::contact::ContactView;
use super::experience::ExperienceView;
use super::footer::FooterView;
use super::hero::HeroView;
use super::meta::PageMeta;
use super::navigation::NavigationView;
use super::projects::ProjectsView;
use super::publications::PublicationsView;
use super::{about, contact, experience, footer, hero, meta, navigation, projects, publications};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Navigation,
    Hero,
    About,
    Experience,
    Publications,
    Projects,
    Contact,
    Footer,
}

/// Inputs that do not come from the portfolio itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub year: i32,
    pub favicon_href: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PageLayout {
    pub meta: PageMeta,
    /// Visible sections in page order.
    pub sections: Vec<SectionKind>,
    pub navigation: NavigationView,
    pub hero: HeroView,
    pub about: AboutView,
    pub experience: Option<ExperienceView>,
    pub publications: Option<PublicationsView>,
    pub projects: ProjectsView,
    pub contact: ContactView,
    pub footer: FooterView,
}

pub fn compose_page(
    config: &PortfolioConfig,
    visibility: &SectionVisibility,
    ctx: &RenderContext,
) -> PageLayout {
    let experience = experience::render(config, visibility);
    let publications = publications::render(config, visibility);

    let sections = [
        (SectionKind::Navigation, true),
        (SectionKind::Hero, true),
        (SectionKind::About, true),
        (SectionKind::Experience, experience.is_some()),
        (SectionKind::Publications, publications.is_some()),
        (SectionKind::Projects, true),
        (SectionKind::Contact, true),
        (SectionKind::Footer, true),
    ]
    .into_iter()
    .filter_map(|(kind, shown)| shown.then_some(kind))
    .collect();

    PageLayout {
        meta: meta::render(config, ctx.favicon_href.as_deref()),
        sections,
        navigation: navigation::render(config),
        hero: hero::render(config),
        about: about::render(config, visibility),
        experience,
        publications,
        projects: projects::render(config),
        contact: contact::render(config),
        footer: footer::render(config, ctx.year),
    }
}
