use crate::portfolio::domain::entities::Project;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPartition<'a> {
    pub featured: Vec<&'a Project>,
    pub other: Vec<&'a Project>,
}

/// Splits projects on `featured`, keeping input order within each side.
pub fn partition_projects(projects: &[Project]) -> ProjectPartition<'_> {
    let (featured, other) = projects.iter().partition(|p| p.featured);
    ProjectPartition { featured, other }
}
