pub mod brand_mark_renderer;
pub mod portfolio_query;

pub use brand_mark_renderer::{BrandMark, BrandMarkKind, BrandMarkRenderer, UnknownBrandMark};
pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
