use crate::portfolio::domain::entities::PortfolioConfig;

/// A list-shaped field is present iff it exists and is non-empty.
pub fn has_items<T>(items: Option<&[T]>) -> bool {
    items.is_some_and(|items| !items.is_empty())
}

/// True when `value` is set to something other than whitespace.
pub fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Per-section visibility decisions for one configuration.
///
/// Experience, its stats block and its certifications block share one gate:
/// when there is no experience none of them are shown, even if
/// certifications exist on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub about_skills: bool,
    pub about_summary: bool,
    pub about_education: bool,
    pub experience: bool,
    pub experience_stats: bool,
    pub experience_certifications: bool,
    pub publications: bool,
}

impl SectionVisibility {
    pub fn of(config: &PortfolioConfig) -> Self {
        let has_summary = has_summary(config);
        let experience = has_items(Some(config.experience.as_slice()));

        Self {
            about_skills: has_items(Some(config.skills.as_slice())),
            about_summary: has_summary,
            about_education: has_items(Some(config.education.as_slice())),
            experience,
            experience_stats: experience && has_summary,
            experience_certifications: experience
                && has_items(Some(config.certifications.as_slice())),
            publications: has_items(config.publications.as_deref()),
        }
    }
}

fn has_summary(config: &PortfolioConfig) -> bool {
    config
        .summary
        .as_ref()
        .is_some_and(|s| is_set(s.years_of_experience.as_deref()))
}
