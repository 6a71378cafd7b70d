use anyhow::{Context, Result};

/// Performs the action for a chosen record
pub trait Opener {
    fn open(&self, target: &str) -> Result<()>;
}

/// Opens URLs in the user's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl Opener for BrowserOpener {
    fn open(&self, target: &str) -> Result<()> {
        open_url(target)
    }
}

/// Open a URL in the user's default browser
///
/// # Arguments
/// * `url` - The URL to open (e.g., GitHub PR URL)
///
/// # Errors
/// Returns error if the URL is blank or the browser cannot be opened
pub fn open_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        anyhow::bail!("Refusing to open an empty URL");
    }
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
