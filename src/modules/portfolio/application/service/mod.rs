pub mod get_brand_mark_service;
pub mod get_page_layout_service;
pub mod resolve_scroll_state_service;

pub use get_brand_mark_service::GetBrandMarkService;
pub use get_page_layout_service::GetPageLayoutService;
pub use resolve_scroll_state_service::ResolveScrollStateService;
