use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::{Education, PortfolioConfig, ProfessionalSummary, Skill};
use crate::portfolio::domain::policies::{group_skills, is_set, IconMode, SectionVisibility};

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SummaryParagraph {
    pub years_of_experience: String,
    pub projects_completed: String,
    pub skills_areas: String,
    pub industry_focus: Vec<String>,
    pub text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct EducationEntry {
    pub heading: String,
    pub institution_line: String,
    pub location: String,
    pub cgpa: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SkillIcon {
    pub mode: IconMode,
    pub value: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SkillChip {
    pub name: String,
    pub icon: SkillIcon,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SkillGroupView {
    pub category: String,
    pub skills: Vec<SkillChip>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AboutView {
    pub bio: Option<String>,
    pub summary: Option<SummaryParagraph>,
    pub education: Option<Vec<EducationEntry>>,
    pub skill_groups: Option<Vec<SkillGroupView>>,
}

pub fn render(config: &PortfolioConfig, visibility: &SectionVisibility) -> AboutView {
    let bio = is_set(Some(config.personal.bio.as_str())).then(|| config.personal.bio.clone());

    let summary = config
        .summary
        .as_ref()
        .filter(|_| visibility.about_summary)
        .and_then(summary_paragraph);

    let education = visibility
        .about_education
        .then(|| config.education.iter().map(education_entry).collect());

    let skill_groups = visibility.about_skills.then(|| {
        group_skills(&config.skills)
            .into_iter()
            .map(|group| SkillGroupView {
                category: group.category.to_string(),
                skills: group.skills.into_iter().map(skill_chip).collect(),
            })
            .collect()
    });

    AboutView {
        bio,
        summary,
        education,
        skill_groups,
    }
}

fn summary_paragraph(summary: &ProfessionalSummary) -> Option<SummaryParagraph> {
    let years = summary.years_of_experience.as_deref()?;

    let mut text = format!(
        "With {} years of professional experience, I've completed {} projects and developed expertise in {} areas.",
        years, summary.projects_completed, summary.skills_areas
    );
    if !summary.industry_focus.is_empty() {
        text.push_str(&format!(
            " I specialize in {} sectors.",
            summary.industry_focus.join(", ")
        ));
    }

    Some(SummaryParagraph {
        years_of_experience: years.to_string(),
        projects_completed: summary.projects_completed.clone(),
        skills_areas: summary.skills_areas.clone(),
        industry_focus: summary.industry_focus.clone(),
        text,
    })
}

fn education_entry(edu: &Education) -> EducationEntry {
    EducationEntry {
        heading: format!("{} in {}", edu.degree, edu.field),
        institution_line: format!("{} • {}", edu.institution, edu.duration),
        location: edu.location.clone(),
        cgpa: edu.cgpa.clone().filter(|c| is_set(Some(c.as_str()))),
    }
}

fn skill_chip(skill: &Skill) -> SkillChip {
    SkillChip {
        name: skill.name.clone(),
        icon: SkillIcon {
            mode: IconMode::classify(&skill.icon),
            value: skill.icon.clone(),
        },
    }
}
