use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::entities::PortfolioConfig;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FooterView {
    pub copyright: String,
}

pub fn render(config: &PortfolioConfig, year: i32) -> FooterView {
    FooterView {
        copyright: format!("© {} {}. All rights reserved.", year, config.personal.name),
    }
}
