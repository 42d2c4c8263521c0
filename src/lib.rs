// SPDX-License-Identifier: MPL-2.0
//! `docsite_i18n` is the localization core of a multi-locale documentation
//! site.
//!
//! It turns one canonical content tree into a locale-specific navigation
//! tree, resolves per-locale UI strings with graceful fallback to the
//! default locale, and splits inline `**bold**` markup into renderable
//! segments. Rendering, routing, and content loading live outside this
//! crate; they hand in a locale code and data, and get back localized
//! values.
//!
//! # Example
//!
//! ```
//! use docsite_i18n::catalog::{MessageCatalog, MissingKeyMode};
//! use docsite_i18n::locale::LocaleRegistry;
//! use docsite_i18n::richtext::segment;
//! use docsite_i18n::tree::{localize, ContentNode, TranslationTable};
//!
//! let registry = LocaleRegistry::site_default();
//! let locale = registry.resolve("de-DE");
//!
//! let tree = ContentNode::folder(
//!     "docs",
//!     "Documentation",
//!     "docs",
//!     vec![ContentNode::page("intro", "Introduction", "intro")],
//! );
//! let mut translations = TranslationTable::new();
//! translations.insert("intro", "de-DE", "Einführung");
//! let localized = localize(&tree, locale, &translations);
//! assert_eq!(localized.children[0].title, "Einführung");
//!
//! let mut catalog = MessageCatalog::new("en", MissingKeyMode::Strict);
//! catalog.insert_message("en", "misc.notice", "See the **official** docs.");
//! let message = catalog.resolve("misc.notice", locale).unwrap();
//! let segments = segment(&message);
//! assert!(segments[1].emphasized);
//! ```

#![doc(html_root_url = "https://docs.rs/docsite_i18n/0.1.0")]

pub mod catalog;
pub mod error;
pub mod locale;
pub mod richtext;
pub mod tree;

pub use error::{Error, Result};
