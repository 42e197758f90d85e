use anyhow::{Result, bail};
use tracing::debug;

use crate::overlay::PLACEHOLDER_LINK;

/// Hand a store link to the system browser. Blank and placeholder links are
/// refused before anything is spawned.
pub fn open_link(href: &str) -> Result<()> {
    let href = href.trim();
    if href.is_empty() || href == PLACEHOLDER_LINK {
        bail!("book has no purchase link");
    }
    debug!(href, "Opening store link");
    open::that(href)?;
    Ok(())
}
