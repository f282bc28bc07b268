mod get_brand_mark;
mod get_page_layout;
mod resolve_scroll_state;

pub use get_brand_mark::{GetBrandMarkError, GetBrandMarkUseCase, BRAND_MARK_SIZES};
pub use get_page_layout::{GetPageLayoutError, GetPageLayoutUseCase};
pub use resolve_scroll_state::{ResolveScrollStateError, ResolveScrollStateUseCase};
