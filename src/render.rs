#![deny(clippy::unwrap_used)]

use askama::Template;
use byte_unit::{Byte, UnitType};

use crate::{
    assets,
    content::{Block, PageContent, PageSection},
    errors::AppError,
    static_files, Settings,
};

pub struct RenderedPage {
    pub html: String,
    /// Problems the reader of the page is told about, e.g. a missing style sheet.
    pub warnings: Vec<String>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    settings: &'a Settings,
    content: &'a PageContent,
    base_css: &'a str,
    stylesheet: &'a str,
    icon_href: Option<String>,
    warnings: &'a [String],
}

impl PageTemplate<'_> {
    fn section_image(&self, section: &PageSection) -> Option<String> {
        section.image.as_deref().and_then(|file| self.image_src(file))
    }

    /// Missing images yield `None` so that no `<img>` markup is emitted.
    fn image_src(&self, file: &str) -> Option<String> {
        assets::image_data_uri(&self.settings.image_path(file))
    }
}

#[derive(Template)]
#[template(path = "favicon.svg")]
struct FaviconTemplate<'a> {
    icon: &'a str,
}

fn favicon_href(icon: &str) -> Result<String, askama::Error> {
    let svg = FaviconTemplate { icon }.render()?;
    Ok(format!(
        "data:image/svg+xml,{}",
        urlencoding::encode(svg.trim_end())
    ))
}

/// Renders the whole page. Assets are read from disk on every call so that the
/// output always reflects the files currently in the deployment root.
pub fn render_page(settings: &Settings, content: &PageContent) -> Result<RenderedPage, AppError> {
    let mut warnings = Vec::new();

    let stylesheet = assets::load_text(&settings.stylesheet_path());
    warnings.extend(stylesheet.warning);

    let icon_href = content.icon.as_deref().map(favicon_href).transpose().map_err(|err| {
        tracing::error!("Cannot render page icon: {}", err);
        AppError::ServerError
    })?;

    let template = PageTemplate {
        settings,
        content,
        base_css: static_files::get("base.css").unwrap_or_default(),
        stylesheet: &stylesheet.contents,
        icon_href,
        warnings: &warnings,
    };
    let html = template.render().map_err(|err| {
        tracing::error!("Cannot render page: {}", err);
        AppError::ServerError
    })?;

    tracing::info!(
        "Rendered page ({:.1})",
        Byte::from_u64(html.len() as u64).get_appropriate_unit(UnitType::Decimal)
    );

    Ok(RenderedPage { html, warnings })
}
