use crate::portfolio::domain::entities::{
    Certification, ContactInfo, Education, PersonalInfo, PortfolioConfig, ProfessionalSummary,
    Project, Publication, PublicationType, ResumeConfig, Skill, SocialLinks, WorkExperience,
};

/// A portfolio with personal info only: every list empty, no summary and no
/// publications.
pub fn minimal_config() -> PortfolioConfig {
    PortfolioConfig {
        personal: PersonalInfo {
            name: "Jane Doe".to_string(),
            title: "Software Engineer".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            location: "Remote".to_string(),
            bio: "Builds things.".to_string(),
            profile_image: "/images/profile.jpg".to_string(),
            initials: "jd".to_string(),
        },
        skills: vec![],
        experience: vec![],
        education: vec![],
        publications: None,
        projects: vec![],
        certifications: vec![],
        social: SocialLinks {
            github: "https://github.com/janedoe".to_string(),
            linkedin: "https://linkedin.com/in/janedoe".to_string(),
            twitter: "https://twitter.com/janedoe".to_string(),
            email: "mailto:jane@example.com".to_string(),
            website: None,
            youtube: None,
            medium: None,
        },
        contact: ContactInfo {
            email: "jane@example.com".to_string(),
            phone: None,
            location: "Remote".to_string(),
            available_for_work: true,
            response_time: "24 hours".to_string(),
        },
        summary: None,
        resume: ResumeConfig {
            url: "/resume.pdf".to_string(),
            filename: Some("Jane_Doe_Resume.pdf".to_string()),
            external: false,
        },
    }
}

pub fn skill(name: &str, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        icon: "⭐".to_string(),
        category: category.to_string(),
        level: None,
    }
}

pub fn experience(company: &str) -> WorkExperience {
    WorkExperience {
        company: company.to_string(),
        position: "Engineer".to_string(),
        duration: "2020 - Present".to_string(),
        location: "Remote".to_string(),
        description: format!("Built systems at {}.", company),
        achievements: vec!["Shipped v1".to_string(), "Cut latency in half".to_string()],
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
    }
}

pub fn education(degree: &str, cgpa: Option<&str>) -> Education {
    Education {
        degree: degree.to_string(),
        field: "Computer Science".to_string(),
        institution: "State University".to_string(),
        duration: "2018 - 2022".to_string(),
        location: "Springfield".to_string(),
        cgpa: cgpa.map(str::to_string),
    }
}

pub fn certification(name: &str, verification_url: Option<&str>) -> Certification {
    Certification {
        name: name.to_string(),
        issuer: "Cert Authority".to_string(),
        date: "2024".to_string(),
        credential_id: Some(format!("ID-{}", name)),
        verification_url: verification_url.map(str::to_string),
    }
}

pub fn summary(years: &str) -> ProfessionalSummary {
    ProfessionalSummary {
        years_of_experience: Some(years.to_string()),
        projects_completed: "10+".to_string(),
        skills_areas: "15+".to_string(),
        team_lead_experience: false,
        remote_work_experience: true,
        industry_focus: vec![],
    }
}

pub fn project(title: &str, featured: bool) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{} description", title),
        long_description: None,
        tech: vec!["Rust".to_string()],
        image: format!("/images/{}.png", title),
        demo_url: format!("https://demo.test/{}", title),
        code_url: format!("https://code.test/{}", title),
        featured,
        highlights: None,
    }
}

pub fn publication_in_journal(title: &str) -> Publication {
    Publication {
        title: title.to_string(),
        authors: vec!["Jane Doe".to_string(), "John Roe".to_string()],
        journal: Some("Journal of Systems".to_string()),
        conference: None,
        year: "2023".to_string(),
        volume: Some("Vol. 3".to_string()),
        pages: Some("1-15".to_string()),
        location: None,
        doi: Some("10.1234/js.1".to_string()),
        kind: PublicationType::JournalArticle,
        summary: Some("We study systems.".to_string()),
        url: Some("https://doi.org/10.1234/js.1".to_string()),
        keywords: Some(vec!["systems".to_string(), "rust".to_string()]),
    }
}
