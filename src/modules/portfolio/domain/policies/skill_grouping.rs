use std::collections::HashMap;

use crate::portfolio::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Groups skills by exact `category`, categories in first-seen order and
/// skills in input order inside each group. Single pass.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();

    for skill in skills {
        let slot = *index.entry(skill.category.as_str()).or_insert_with(|| {
            groups.push(SkillGroup {
                category: skill.category.as_str(),
                skills: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].skills.push(skill);
    }

    groups
}
