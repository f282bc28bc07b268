// src/modules/portfolio/application/ports/outgoing/brand_mark_renderer.rs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BrandMarkKind {
    /// Full mark shown in the navigation bar.
    Logo,
    /// Simplified mark for browser tabs and home-screen icons.
    Favicon,
}

impl BrandMarkKind {
    pub fn default_size(&self) -> u32 {
        match self {
            BrandMarkKind::Logo => 40,
            BrandMarkKind::Favicon => 32,
        }
    }
}

impl fmt::Display for BrandMarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandMarkKind::Logo => write!(f, "logo"),
            BrandMarkKind::Favicon => write!(f, "favicon"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown brand mark: {0}")]
pub struct UnknownBrandMark(pub String);

impl FromStr for BrandMarkKind {
    type Err = UnknownBrandMark;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo" => Ok(BrandMarkKind::Logo),
            "favicon" => Ok(BrandMarkKind::Favicon),
            other => Err(UnknownBrandMark(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandMark {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Drawing surface for the initials-based marks. Returns `None` when
/// nothing can be drawn; callers treat that as a no-op.
pub trait BrandMarkRenderer: Send + Sync {
    fn draw(&self, kind: BrandMarkKind, initials: &str, size: u32) -> Option<BrandMark>;
}
