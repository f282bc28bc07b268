use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::{PortfolioConfig, Project};
use crate::portfolio::domain::policies::{is_set, partition_projects};

/// Featured cards show at most this many highlights.
pub const MAX_HIGHLIGHTS: usize = 3;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProjectLinks {
    pub demo_url: String,
    pub code_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FeaturedProjectCard {
    pub title: String,
    pub body: String,
    pub highlights: Option<Vec<String>>,
    pub tech: Vec<String>,
    pub image: String,
    pub links: ProjectLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub links: ProjectLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProjectsView {
    pub featured: Vec<FeaturedProjectCard>,
    pub other: Vec<ProjectCard>,
}

/// The section is always rendered; an empty list gives two empty groups.
pub fn render(config: &PortfolioConfig) -> ProjectsView {
    let partition = partition_projects(&config.projects);
    ProjectsView {
        featured: partition.featured.into_iter().map(featured_card).collect(),
        other: partition.other.into_iter().map(project_card).collect(),
    }
}

fn links(project: &Project) -> ProjectLinks {
    ProjectLinks {
        demo_url: project.demo_url.clone(),
        code_url: project.code_url.clone(),
    }
}

fn featured_card(project: &Project) -> FeaturedProjectCard {
    let body = project
        .long_description
        .as_deref()
        .filter(|d| is_set(Some(*d)))
        .unwrap_or(&project.description)
        .to_string();

    let highlights = project
        .highlights
        .as_deref()
        .filter(|h| !h.is_empty())
        .map(|h| h.iter().take(MAX_HIGHLIGHTS).cloned().collect());

    FeaturedProjectCard {
        title: project.title.clone(),
        body,
        highlights,
        tech: project.tech.clone(),
        image: project.image.clone(),
        links: links(project),
    }
}

fn project_card(project: &Project) -> ProjectCard {
    ProjectCard {
        title: project.title.clone(),
        description: project.description.clone(),
        tech: project.tech.clone(),
        links: links(project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::portfolio_fixtures::{minimal_config, project};

    #[test]
    fn no_projects_still_renders_empty_groups() {
        let view = render(&minimal_config());

        assert!(view.featured.is_empty());
        assert!(view.other.is_empty());
    }

    #[test]
    fn projects_split_into_featured_and_other() {
        let mut config = minimal_config();
        config.projects = vec![
            project("a", true),
            project("b", false),
            project("c", true),
        ];

        let view = render(&config);

        let featured: Vec<&str> = view.featured.iter().map(|p| p.title.as_str()).collect();
        let other: Vec<&str> = view.other.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(featured, vec!["a", "c"]);
        assert_eq!(other, vec!["b"]);
    }

    #[test]
    fn featured_body_prefers_long_description() {
        let mut with_long = project("long", true);
        with_long.long_description = Some("The long story.".to_string());
        let short = project("short", true);

        let mut config = minimal_config();
        config.projects = vec![with_long, short];

        let view = render(&config);

        assert_eq!(view.featured[0].body, "The long story.");
        assert_eq!(view.featured[1].body, "short description");
    }

    #[test]
    fn highlights_are_capped_and_empty_ones_dropped() {
        let mut many = project("many", true);
        many.highlights = Some((1..=5).map(|i| format!("h{}", i)).collect());
        let mut none = project("none", true);
        none.highlights = Some(vec![]);

        let mut config = minimal_config();
        config.projects = vec![many, none];

        let view = render(&config);

        assert_eq!(
            view.featured[0].highlights.as_deref(),
            Some(&["h1".to_string(), "h2".to_string(), "h3".to_string()][..])
        );
        assert!(view.featured[1].highlights.is_none());
    }

    #[test]
    fn urls_pass_through_verbatim() {
        let mut config = minimal_config();
        config.projects = vec![project("x", false)];

        let view = render(&config);

        assert_eq!(view.other[0].links.demo_url, "https://demo.test/x");
        assert_eq!(view.other[0].links.code_url, "https://code.test/x");
    }
}
