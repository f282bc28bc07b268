pub mod anchor;
pub mod icon;
pub mod links;
pub mod project_partition;
pub mod scroll;
pub mod skill_grouping;
pub mod visibility;

pub use anchor::Anchor;
pub use icon::IconMode;
pub use links::{ExternalLink, LinkTarget, ResumeAction, ResumeLink};
pub use project_partition::{partition_projects, ProjectPartition};
pub use scroll::{NavBarStyle, ScrollAction, ScrollArrow, ScrollState, ViewportMetrics};
pub use skill_grouping::{group_skills, SkillGroup};
pub use visibility::{has_items, is_set, SectionVisibility};
