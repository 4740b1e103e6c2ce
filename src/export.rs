#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::{render, PageContent, Settings};

/// Renders the page once and writes it to `output`, or to stdout when `output` is `-`.
pub fn write_page(settings: &Settings, content: &PageContent, output: &Path) -> Result<()> {
    if output.as_os_str() == "-" {
        let stdout = std::io::stdout();
        return write_page_to(settings, content, &mut stdout.lock())
            .context("Cannot write page to stdout");
    }

    let mut file = std::fs::File::create(output)
        .with_context(|| format!("Cannot create {}", output.display()))?;
    write_page_to(settings, content, &mut file)
        .with_context(|| format!("Cannot write {}", output.display()))?;
    tracing::info!("Wrote page to {}", output.display());
    Ok(())
}

fn write_page_to(settings: &Settings, content: &PageContent, writer: &mut impl Write) -> Result<()> {
    let page = render::render_page(settings, content)?;
    writer.write_all(page.html.as_bytes())?;
    writer.flush()?;
    Ok(())
}
