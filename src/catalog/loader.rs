// SPDX-License-Identifier: MPL-2.0
//! Catalog loading from embedded assets or a directory.
//!
//! The crate ships its UI message catalogs as TOML files under
//! `assets/locales/`, one file per locale, embedded into the binary. The
//! filename stem is the locale code (`de-DE.toml` holds the `de-DE`
//! messages). Sites that source messages from a CMS export can load a
//! directory with the same layout instead.

use crate::catalog::{MessageCatalog, MissingKeyMode};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Loads the embedded message catalogs shipped with the crate.
pub fn load_embedded(default_code: &str, mode: MissingKeyMode) -> Result<MessageCatalog> {
    let mut catalog = MessageCatalog::new(default_code, mode);
    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(code) = filename.strip_suffix(".toml") {
            if let Some(content) = Asset::get(filename) {
                let text = String::from_utf8_lossy(content.data.as_ref());
                let table: toml::Table = toml::from_str(&text)?;
                catalog.insert_locale(code, &table)?;
            }
        }
    }
    ensure_default_present(&catalog, default_code)?;
    Ok(catalog)
}

/// Loads message catalogs from every `*.toml` file in `dir`.
///
/// Same layout as the embedded assets: the filename stem is the locale code.
/// Non-TOML files are ignored.
pub fn load_from_dir(dir: &Path, default_code: &str, mode: MissingKeyMode) -> Result<MessageCatalog> {
    let mut catalog = MessageCatalog::new(default_code, mode);
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let code = match locale_code_of(&path) {
            Some(code) => code,
            None => continue,
        };
        let text = fs::read_to_string(&path)?;
        let table: toml::Table = toml::from_str(&text)?;
        catalog.insert_locale(&code, &table)?;
    }
    ensure_default_present(&catalog, default_code)?;
    Ok(catalog)
}

fn locale_code_of(path: &Path) -> Option<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
        return None;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

/// A catalog without its own fallback target cannot honor the two-lookup
/// resolution rule; refuse it at load time.
fn ensure_default_present(catalog: &MessageCatalog, default_code: &str) -> Result<()> {
    if catalog.has_locale(default_code) {
        Ok(())
    } else {
        Err(Error::Catalog(format!(
            "no catalog loaded for default locale '{}'",
            default_code
        )))
    }
}
