pub mod portfolio_file_loader;
pub mod static_portfolio_query;
pub mod svg_brand_mark_renderer;

pub use portfolio_file_loader::{load_portfolio, parse_portfolio, PortfolioLoadError};
pub use static_portfolio_query::StaticPortfolioQuery;
pub use svg_brand_mark_renderer::SvgBrandMarkRenderer;
