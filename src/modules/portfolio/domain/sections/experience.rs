use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::{Certification, PortfolioConfig, WorkExperience};
use crate::portfolio::domain::policies::{is_set, ExternalLink, SectionVisibility};

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ExperienceStats {
    pub years_of_experience: String,
    pub projects_completed: String,
    pub skills_areas: String,
    pub organizations: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TimelineEntry {
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub description: String,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    /// False for the last entry: the timeline line stops there.
    pub has_connector: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CertificationCard {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: Option<String>,
    pub verification: Option<ExternalLink>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ExperienceView {
    pub stats: Option<ExperienceStats>,
    pub timeline: Vec<TimelineEntry>,
    pub certifications: Option<Vec<CertificationCard>>,
}

/// `None` when there is no experience. Stats and certifications live under
/// the same gate and disappear with it.
pub fn render(config: &PortfolioConfig, visibility: &SectionVisibility) -> Option<ExperienceView> {
    if !visibility.experience {
        return None;
    }

    let stats = config
        .summary
        .as_ref()
        .filter(|_| visibility.experience_stats)
        .and_then(|summary| {
            Some(ExperienceStats {
                years_of_experience: summary.years_of_experience.clone()?,
                projects_completed: summary.projects_completed.clone(),
                skills_areas: summary.skills_areas.clone(),
                organizations: config.experience.len(),
            })
        });

    let last = config.experience.len().saturating_sub(1);
    let timeline = config
        .experience
        .iter()
        .enumerate()
        .map(|(i, exp)| timeline_entry(exp, i != last))
        .collect();

    let certifications = visibility
        .experience_certifications
        .then(|| config.certifications.iter().map(certification_card).collect());

    Some(ExperienceView {
        stats,
        timeline,
        certifications,
    })
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}

fn timeline_entry(exp: &WorkExperience, has_connector: bool) -> TimelineEntry {
    TimelineEntry {
        position: exp.position.clone(),
        company: exp.company.clone(),
        location: exp.location.clone(),
        duration: exp.duration.clone(),
        description: exp.description.clone(),
        achievements: non_empty(&exp.achievements),
        technologies: non_empty(&exp.technologies),
        has_connector,
    }
}

fn certification_card(cert: &Certification) -> CertificationCard {
    CertificationCard {
        name: cert.name.clone(),
        issuer: cert.issuer.clone(),
        date: cert.date.clone(),
        credential_id: cert.credential_id.clone().filter(|id| is_set(Some(id.as_str()))),
        verification: cert
            .verification_url
            .as_deref()
            .filter(|url| is_set(Some(*url)))
            .map(|url| ExternalLink::new(url, "Verify Certificate")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::policies::LinkTarget;
    use crate::tests::support::portfolio_fixtures::{
        certification, experience, minimal_config, summary,
    };

    fn render_of(config: &PortfolioConfig) -> Option<ExperienceView> {
        render(config, &SectionVisibility::of(config))
    }

    #[test]
    fn nothing_renders_without_experience_even_with_certifications() {
        let mut config = minimal_config();
        config.certifications = vec![certification("CKA", Some("https://verify.test"))];
        config.summary = Some(summary("4"));

        assert!(render_of(&config).is_none());
    }

    #[test]
    fn stats_count_organizations() {
        let mut config = minimal_config();
        config.experience = vec![experience("Acme"), experience("Initech")];
        config.summary = Some(summary("4"));

        let stats = render_of(&config).unwrap().stats.unwrap();

        assert_eq!(stats.organizations, 2);
        assert_eq!(stats.years_of_experience, "4");
        assert_eq!(stats.projects_completed, "10+");
    }

    #[test]
    fn stats_hidden_without_summary() {
        let mut config = minimal_config();
        config.experience = vec![experience("Acme")];

        let view = render_of(&config).unwrap();

        assert!(view.stats.is_none());
        assert!(view.certifications.is_none());
    }

    #[test]
    fn last_timeline_entry_has_no_connector() {
        let mut config = minimal_config();
        config.experience = vec![experience("A"), experience("B"), experience("C")];

        let timeline = render_of(&config).unwrap().timeline;

        let connectors: Vec<bool> = timeline.iter().map(|e| e.has_connector).collect();
        assert_eq!(connectors, vec![true, true, false]);
        assert_eq!(timeline[0].company, "A");
    }

    #[test]
    fn empty_lists_inside_an_entry_are_omitted() {
        let mut config = minimal_config();
        let mut exp = experience("Acme");
        exp.achievements.clear();
        config.experience = vec![exp];

        let view = render_of(&config).unwrap();
        let entry = &view.timeline[0];

        assert!(entry.achievements.is_none());
        assert_eq!(entry.technologies.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn certification_verification_opens_new_tab() {
        let mut config = minimal_config();
        config.experience = vec![experience("Acme")];
        config.certifications = vec![
            certification("CKA", Some("https://verify.test/cka")),
            certification("AWS", None),
        ];

        let certs = render_of(&config).unwrap().certifications.unwrap();

        let link = certs[0].verification.as_ref().unwrap();
        assert_eq!(link.href, "https://verify.test/cka");
        assert_eq!(link.target, LinkTarget::NewTab);
        assert!(certs[1].verification.is_none());
        assert_eq!(certs[1].credential_id.as_deref(), Some("ID-AWS"));
    }
}
