//! One pure renderer per page section. Each takes the read-only
//! configuration (plus the visibility decisions where a gate applies) and
//! returns a serializable view; `page::compose_page` stitches them together.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod meta;
pub mod navigation;
pub mod page;
pub mod projects;
pub mod publications;

pub use page::{compose_page, PageLayout, RenderContext, SectionKind};
