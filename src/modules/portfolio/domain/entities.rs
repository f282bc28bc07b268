use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The whole portfolio, read once at startup and shared read-only by every
/// section renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub publications: Option<Vec<Publication>>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub social: SocialLinks,
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: Option<ProfessionalSummary>,
    pub resume: ResumeConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    pub bio: String,
    pub profile_image: String,
    pub initials: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Icon-font classes (`"fab fa-react"`) or literal text such as an emoji.
    pub icon: String,
    /// Free-form grouping key, compared case-sensitively.
    pub category: String,
    /// Proficiency 0..=100. Carried through, never rendered.
    #[serde(default)]
    pub level: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub cgpa: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum PublicationType {
    #[serde(rename = "Journal Article")]
    JournalArticle,
    #[serde(rename = "Conference Paper")]
    ConferencePaper,
    #[serde(rename = "Workshop Paper")]
    WorkshopPaper,
    #[serde(rename = "Book Chapter")]
    BookChapter,
}

impl PublicationType {
    pub fn label(&self) -> &'static str {
        match self {
            PublicationType::JournalArticle => "Journal Article",
            PublicationType::ConferencePaper => "Conference Paper",
            PublicationType::WorkshopPaper => "Workshop Paper",
            PublicationType::BookChapter => "Book Chapter",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    pub year: String,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    pub image: String,
    pub demo_url: String,
    pub code_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub verification_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    pub available_for_work: bool,
    pub response_time: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalSummary {
    #[serde(default)]
    pub years_of_experience: Option<String>,
    pub projects_completed: String,
    pub skills_areas: String,
    #[serde(default)]
    pub team_lead_experience: bool,
    #[serde(default)]
    pub remote_work_experience: bool,
    #[serde(default)]
    pub industry_focus: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeConfig {
    pub url: String,
    /// Download name, only honoured for local (non-external) resumes.
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub external: bool,
}

impl PersonalInfo {
    /// Uppercased, at most two characters. Used by the logo and favicon.
    pub fn normalized_initials(&self) -> String {
        self.initials.trim().to_uppercase().chars().take(2).collect()
    }
}
