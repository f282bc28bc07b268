use crate::portfolio::application::ports::outgoing::{BrandMark, BrandMarkKind, BrandMarkRenderer};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const GRADIENT_STOPS: &str = r##"<stop offset="0%" stop-color="#3B82F6"/><stop offset="50%" stop-color="#8B5CF6"/><stop offset="100%" stop-color="#EC4899"/>"##;
const FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";

/// Draws the initials marks as standalone SVG documents on a 100x100
/// view box scaled to the requested size.
#[derive(Debug, Default, Clone)]
pub struct SvgBrandMarkRenderer;

impl SvgBrandMarkRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl BrandMarkRenderer for SvgBrandMarkRenderer {
    fn draw(&self, kind: BrandMarkKind, initials: &str, size: u32) -> Option<BrandMark> {
        if initials.trim().is_empty() {
            return None;
        }

        let text = escape_xml(initials);
        let single = initials.chars().count() == 1;
        let svg = match kind {
            BrandMarkKind::Logo => logo_svg(&text, single, size),
            BrandMarkKind::Favicon => favicon_svg(&text, single, size),
        };

        Some(BrandMark {
            content_type: SVG_CONTENT_TYPE,
            bytes: svg.into_bytes(),
        })
    }
}

fn logo_svg(text: &str, single: bool, size: u32) -> String {
    let spacing = if single { "0" } else { "-1px" };
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100">"#,
            r#"<defs>"#,
            r#"<linearGradient id="logoGradient" x1="0%" y1="0%" x2="100%" y2="100%">{stops}</linearGradient>"#,
            r##"<linearGradient id="textGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#FFFFFF"/><stop offset="100%" stop-color="#F1F5F9"/></linearGradient>"##,
            r#"<filter id="innerShadow"><feGaussianBlur in="SourceGraphic" stdDeviation="1"/><feOffset dx="1" dy="1" result="offset"/></filter>"#,
            r#"</defs>"#,
            r#"<circle cx="50" cy="50" r="48" fill="url(#logoGradient)" stroke="rgba(255, 255, 255, 0.2)" stroke-width="1" filter="url(#innerShadow)"/>"#,
            r#"<circle cx="50" cy="50" r="44" fill="none" stroke="rgba(255, 255, 255, 0.1)" stroke-width="1"/>"#,
            r#"<text x="50" y="50" text-anchor="middle" dominant-baseline="central" font-size="32" font-weight="700" font-family="{font}" fill="url(#textGradient)" letter-spacing="{spacing}">{text}</text>"#,
            r#"<circle cx="42" cy="42" r="8" fill="rgba(255, 255, 255, 0.2)"/>"#,
            r#"</svg>"#
        ),
        size = size,
        stops = GRADIENT_STOPS,
        font = FONT_FAMILY,
        spacing = spacing,
        text = text,
    )
}

fn favicon_svg(text: &str, single: bool, size: u32) -> String {
    let spacing = if single { "0" } else { "-2px" };
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100">"#,
            r#"<defs><linearGradient id="faviconGradient" x1="0%" y1="0%" x2="100%" y2="100%">{stops}</linearGradient></defs>"#,
            r#"<circle cx="50" cy="50" r="48" fill="url(#faviconGradient)"/>"#,
            r#"<text x="50" y="50" text-anchor="middle" dominant-baseline="central" font-size="36" font-weight="800" font-family="{font}" fill="white" letter-spacing="{spacing}">{text}</text>"#,
            r#"</svg>"#
        ),
        size = size,
        stops = GRADIENT_STOPS,
        font = FONT_FAMILY,
        spacing = spacing,
        text = text,
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
