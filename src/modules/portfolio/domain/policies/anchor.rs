use serde::Serialize;
use utoipa::ToSchema;

/// Named in-page targets. The serialized form is the element id.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    About,
    Experience,
    Publications,
    Projects,
    Contact,
}

impl Anchor {
    /// Menu order.
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Experience,
        Anchor::Publications,
        Anchor::Projects,
        Anchor::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Publications => "publications",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Experience => "Experience",
            Anchor::Publications => "Publications",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }
}
