use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::ResumeConfig;

pub const NO_OPENER_NO_REFERRER: &str = "noopener noreferrer";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    SameTab,
    NewTab,
}

/// An outbound link opened in a new tab. The href is passed through verbatim.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ExternalLink {
    pub href: String,
    pub label: String,
    pub target: LinkTarget,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            target: LinkTarget::NewTab,
            rel: NO_OPENER_NO_REFERRER,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResumeAction {
    View,
    Download,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ResumeLink {
    pub href: String,
    pub target: LinkTarget,
    pub rel: Option<&'static str>,
    pub download_name: Option<String>,
    pub action: ResumeAction,
    pub label: &'static str,
}

impl From<&ResumeConfig> for ResumeLink {
    /// External resumes open in a new tab and are never force-downloaded,
    /// so `filename` only matters for local files.
    fn from(resume: &ResumeConfig) -> Self {
        if resume.external {
            Self {
                href: resume.url.clone(),
                target: LinkTarget::NewTab,
                rel: Some(NO_OPENER_NO_REFERRER),
                download_name: None,
                action: ResumeAction::View,
                label: "View Resume",
            }
        } else {
            Self {
                href: resume.url.clone(),
                target: LinkTarget::SameTab,
                rel: None,
                download_name: resume.filename.clone(),
                action: ResumeAction::Download,
                label: "Download Resume",
            }
        }
    }
}
