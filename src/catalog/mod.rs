// SPDX-License-Identifier: MPL-2.0
//! Per-locale UI message catalogs with dotted-key lookup and fallback.
//!
//! Each locale owns a flat map from dotted key paths (e.g.
//! `misc.officialDocumentationNotice.title`) to message strings. Catalogs are
//! authored as nested TOML tables and collapsed to dotted paths at load time.
//! Resolution tries the requested locale, then the default locale, and then
//! either fails ([`MissingKeyMode::Strict`]) or returns the literal key path
//! ([`MissingKeyMode::Lenient`]) — never a mix of both.

pub mod loader;

use crate::error::{Error, Result};
use crate::locale::Locale;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Policy for keys missing from both the requested and the default locale.
///
/// `Strict` surfaces an explicit error so authoring gaps are caught during
/// content review. `Lenient` substitutes the literal key path, which keeps a
/// development build rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyMode {
    #[default]
    Strict,
    Lenient,
}

/// A resolved subtree of messages, shaped like the authored nesting.
///
/// Serializes as a plain nested mapping of leaf strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageNode {
    Leaf(String),
    Branch(BTreeMap<String, MessageNode>),
}

impl MessageNode {
    /// Walks a dotted path below this node.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&MessageNode> {
        let mut node = self;
        for part in path.split('.') {
            match node {
                MessageNode::Branch(children) => node = children.get(part)?,
                MessageNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// Returns the message text if this node is a leaf.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            MessageNode::Leaf(text) => Some(text),
            MessageNode::Branch(_) => None,
        }
    }
}

/// Immutable-after-load message store for every registered locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locales: HashMap<String, BTreeMap<String, String>>,
    default_code: String,
    mode: MissingKeyMode,
}

impl MessageCatalog {
    /// Creates an empty catalog whose fallback target is `default_code`.
    #[must_use]
    pub fn new(default_code: impl Into<String>, mode: MissingKeyMode) -> Self {
        Self {
            locales: HashMap::new(),
            default_code: default_code.into(),
            mode,
        }
    }

    /// Returns the configured missing-key policy.
    #[must_use]
    pub fn mode(&self) -> MissingKeyMode {
        self.mode
    }

    /// Returns `true` if messages were loaded for `code`.
    #[must_use]
    pub fn has_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Adds a locale's messages from nested TOML tables, collapsing the
    /// nesting to dotted key paths. Fails if a leaf is not a string.
    pub fn insert_locale(&mut self, code: &str, table: &toml::Table) -> Result<()> {
        let mut flat = BTreeMap::new();
        flatten_into(&mut flat, "", table)?;
        self.locales.entry(code.to_string()).or_default().extend(flat);
        Ok(())
    }

    /// Adds a single message under a dotted key path.
    pub fn insert_message(
        &mut self,
        code: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.locales
            .entry(code.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Resolves `key` for `locale`: requested locale first, then the default
    /// locale, then the missing-key policy. At most two lookups.
    pub fn resolve(&self, key: &str, locale: &Locale) -> Result<String> {
        if let Some(value) = self.lookup(locale.code(), key) {
            return Ok(value.to_string());
        }
        if locale.code() != self.default_code {
            if let Some(value) = self.lookup(&self.default_code, key) {
                return Ok(value.to_string());
            }
        }
        match self.mode {
            MissingKeyMode::Lenient => Ok(key.to_string()),
            MissingKeyMode::Strict => Err(Error::MissingMessage {
                key: key.to_string(),
                locales: self.attempted(locale),
            }),
        }
    }

    /// Resolves every leaf below `prefix` into a nested mapping, applying
    /// the same per-leaf fallback as [`resolve`](Self::resolve): the union
    /// of keys from the requested and default locales, with the requested
    /// locale's value winning per leaf.
    ///
    /// An empty result follows the missing-key policy, since it means the
    /// whole namespace is absent from both locales.
    pub fn resolve_namespace(&self, prefix: &str, locale: &Locale) -> Result<MessageNode> {
        let needle = format!("{}.", prefix);
        let mut root = BTreeMap::new();

        // Default locale first so the requested locale overwrites per leaf.
        let mut codes = vec![self.default_code.as_str()];
        if locale.code() != self.default_code {
            codes.push(locale.code());
        }
        for code in codes {
            if let Some(messages) = self.locales.get(code) {
                for (key, value) in messages {
                    if let Some(rest) = key.strip_prefix(&needle) {
                        insert_leaf(&mut root, rest, value.clone());
                    }
                }
            }
        }

        if root.is_empty() {
            return match self.mode {
                MissingKeyMode::Lenient => Ok(MessageNode::Branch(root)),
                MissingKeyMode::Strict => Err(Error::MissingMessage {
                    key: prefix.to_string(),
                    locales: self.attempted(locale),
                }),
            };
        }
        Ok(MessageNode::Branch(root))
    }

    fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.locales
            .get(code)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    fn attempted(&self, locale: &Locale) -> Vec<String> {
        let mut locales = vec![locale.code().to_string()];
        if locale.code() != self.default_code {
            locales.push(self.default_code.clone());
        }
        locales
    }
}

fn flatten_into(flat: &mut BTreeMap<String, String>, prefix: &str, table: &toml::Table) -> Result<()> {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::String(text) => {
                flat.insert(path, text.clone());
            }
            toml::Value::Table(nested) => flatten_into(flat, &path, nested)?,
            _ => {
                return Err(Error::Catalog(format!(
                    "message '{}' must be a string",
                    path
                )))
            }
        }
    }
    Ok(())
}

fn insert_leaf(branch: &mut BTreeMap<String, MessageNode>, path: &str, value: String) {
    match path.split_once('.') {
        None => {
            branch.insert(path.to_string(), MessageNode::Leaf(value));
        }
        Some((head, rest)) => {
            let entry = branch
                .entry(head.to_string())
                .or_insert_with(|| MessageNode::Branch(BTreeMap::new()));
            if !matches!(entry, MessageNode::Branch(_)) {
                // Shape disagreement between locales; the deeper key wins.
                *entry = MessageNode::Branch(BTreeMap::new());
            }
            if let MessageNode::Branch(children) = entry {
                insert_leaf(children, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleRegistry;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new(&["en", "fr-FR", "de-DE"], "en").unwrap()
    }

    fn sample_catalog(mode: MissingKeyMode) -> MessageCatalog {
        let mut catalog = MessageCatalog::new("en", mode);
        catalog.insert_message("en", "misc.title", "Notice");
        catalog.insert_message("en", "misc.body", "Read the docs");
        catalog.insert_message("de-DE", "misc.title", "Hinweis");
        catalog
    }

    #[test]
    fn resolve_prefers_requested_locale() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Strict);
        let value = catalog.resolve("misc.title", registry.resolve("de-DE")).unwrap();
        assert_eq!(value, "Hinweis");
    }

    #[test]
    fn resolve_falls_back_to_default_locale() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Strict);
        let value = catalog.resolve("misc.title", registry.resolve("fr-FR")).unwrap();
        assert_eq!(value, "Notice");
    }

    #[test]
    fn resolve_missing_key_fails_in_strict_mode() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Strict);
        let err = catalog
            .resolve("misc.unknown", registry.resolve("fr-FR"))
            .unwrap_err();
        match err {
            Error::MissingMessage { key, locales } => {
                assert_eq!(key, "misc.unknown");
                assert_eq!(locales, vec!["fr-FR".to_string(), "en".to_string()]);
            }
            other => panic!("expected MissingMessage, got {:?}", other),
        }
    }

    #[test]
    fn resolve_missing_key_returns_key_path_in_lenient_mode() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Lenient);
        let value = catalog
            .resolve("misc.unknown", registry.resolve("fr-FR"))
            .unwrap();
        assert_eq!(value, "misc.unknown");
    }

    #[test]
    fn resolve_for_default_locale_reports_single_attempt() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Strict);
        let err = catalog
            .resolve("misc.unknown", registry.default_locale())
            .unwrap_err();
        match err {
            Error::MissingMessage { locales, .. } => {
                assert_eq!(locales, vec!["en".to_string()]);
            }
            other => panic!("expected MissingMessage, got {:?}", other),
        }
    }

    #[test]
    fn insert_locale_collapses_nested_tables() {
        let registry = registry();
        let mut catalog = MessageCatalog::new("en", MissingKeyMode::Strict);
        let table: toml::Table = toml::from_str(
            r#"
            [misc.officialDocumentationNotice]
            title = "Official documentation"
            description = "See the **official** docs."
            "#,
        )
        .unwrap();
        catalog.insert_locale("en", &table).unwrap();

        let value = catalog
            .resolve(
                "misc.officialDocumentationNotice.title",
                registry.default_locale(),
            )
            .unwrap();
        assert_eq!(value, "Official documentation");
    }

    #[test]
    fn insert_locale_rejects_non_string_leaves() {
        let mut catalog = MessageCatalog::new("en", MissingKeyMode::Strict);
        let table: toml::Table = toml::from_str("misc = { count = 3 }").unwrap();
        let err = catalog.insert_locale("en", &table).unwrap_err();
        match err {
            Error::Catalog(message) => assert!(message.contains("misc.count")),
            other => panic!("expected Catalog error, got {:?}", other),
        }
    }

    #[test]
    fn namespace_projects_nested_mapping_with_fallback() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Strict);
        let node = catalog
            .resolve_namespace("misc", registry.resolve("de-DE"))
            .unwrap();

        // `misc.title` is translated; `misc.body` falls back to English.
        assert_eq!(node.get("title").and_then(MessageNode::text), Some("Hinweis"));
        assert_eq!(node.get("body").and_then(MessageNode::text), Some("Read the docs"));
    }

    #[test]
    fn namespace_preserves_deeper_nesting() {
        let registry = registry();
        let mut catalog = MessageCatalog::new("en", MissingKeyMode::Strict);
        catalog.insert_message("en", "misc.notice.title", "Notice");
        catalog.insert_message("en", "misc.notice.description", "Body");

        let node = catalog
            .resolve_namespace("misc", registry.default_locale())
            .unwrap();
        assert_eq!(
            node.get("notice.title").and_then(MessageNode::text),
            Some("Notice")
        );
        assert!(matches!(node.get("notice"), Some(MessageNode::Branch(_))));
    }

    #[test]
    fn empty_namespace_follows_missing_key_policy() {
        let registry = registry();
        let strict = sample_catalog(MissingKeyMode::Strict);
        assert!(matches!(
            strict.resolve_namespace("absent", registry.resolve("fr-FR")),
            Err(Error::MissingMessage { .. })
        ));

        let lenient = sample_catalog(MissingKeyMode::Lenient);
        let node = lenient
            .resolve_namespace("absent", registry.resolve("fr-FR"))
            .unwrap();
        assert_eq!(node, MessageNode::Branch(BTreeMap::new()));
    }

    #[test]
    fn namespace_serializes_as_plain_nested_mapping() {
        let registry = registry();
        let catalog = sample_catalog(MissingKeyMode::Strict);
        let node = catalog
            .resolve_namespace("misc", registry.resolve("de-DE"))
            .unwrap();
        let rendered = toml::to_string(&node).unwrap();
        assert!(rendered.contains("title = \"Hinweis\""));
        assert!(rendered.contains("body = \"Read the docs\""));
    }

    #[test]
    fn message_node_get_rejects_paths_through_leaves() {
        let node = MessageNode::Leaf("text".to_string());
        assert!(node.get("anything").is_none());
        assert_eq!(node.text(), Some("text"));
    }
}
