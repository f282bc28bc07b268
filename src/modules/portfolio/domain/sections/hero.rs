use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::PortfolioConfig;
use crate::portfolio::domain::policies::{Anchor, ResumeLink};

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CallToAction {
    pub label: &'static str,
    pub anchor: Anchor,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HeroView {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: String,
    pub initials: String,
    pub resume: ResumeLink,
    pub actions: Vec<CallToAction>,
}

pub fn render(config: &PortfolioConfig) -> HeroView {
    let personal = &config.personal;
    HeroView {
        name: personal.name.clone(),
        title: personal.title.clone(),
        bio: personal.bio.clone(),
        profile_image: personal.profile_image.clone(),
        initials: personal.normalized_initials(),
        resume: ResumeLink::from(&config.resume),
        actions: vec![
            CallToAction {
                label: "View My Work",
                anchor: Anchor::Projects,
            },
            CallToAction {
                label: "Get In Touch",
                anchor: Anchor::Contact,
            },
        ],
    }
}
