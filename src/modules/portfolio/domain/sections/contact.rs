use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::{PortfolioConfig, SocialLinks};
use crate::portfolio::domain::policies::is_set;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Github,
    Linkedin,
    Twitter,
    Email,
    Website,
    Youtube,
    Medium,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContactView {
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub available_for_work: bool,
    pub response_time: String,
    pub social: Vec<SocialLink>,
}

pub fn render(config: &PortfolioConfig) -> ContactView {
    let contact = &config.contact;
    ContactView {
        email: contact.email.clone(),
        phone: contact.phone.clone().filter(|p| is_set(Some(p.as_str()))),
        location: contact.location.clone(),
        available_for_work: contact.available_for_work,
        response_time: contact.response_time.clone(),
        social: social_links(&config.social),
    }
}

fn social_links(social: &SocialLinks) -> Vec<SocialLink> {
    [
        (SocialNetwork::Github, Some(&social.github)),
        (SocialNetwork::Linkedin, Some(&social.linkedin)),
        (SocialNetwork::Twitter, Some(&social.twitter)),
        (SocialNetwork::Email, Some(&social.email)),
        (SocialNetwork::Website, social.website.as_ref()),
        (SocialNetwork::Youtube, social.youtube.as_ref()),
        (SocialNetwork::Medium, social.medium.as_ref()),
    ]
    .into_iter()
    .filter_map(|(network, href)| {
        href.filter(|h| is_set(Some(h.as_str())))
            .map(|h| SocialLink {
                network,
                href: h.clone(),
            })
    })
    .collect()
}
