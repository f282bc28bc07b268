mod get_brand_mark;
mod get_page_layout;
mod resolve_scroll_state;

pub use get_brand_mark::*;
pub use get_page_layout::*;
pub use resolve_scroll_state::*;
