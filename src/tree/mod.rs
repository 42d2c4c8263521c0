// SPDX-License-Identifier: MPL-2.0
//! Canonical content tree and locale-aware localization.
//!
//! The site is built from a single canonical tree of folders and pages.
//! [`localize`] maps that tree into a locale-specific one without ever
//! inserting, dropping, or reordering nodes: only titles change, and only
//! where a [`TranslationTable`] entry exists for the node. Node `id` and
//! `slug` are locale-independent and act as the cross-locale join keys.

pub mod cache;

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a node groups children or is a leaf page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Page,
}

/// A node of the canonical (or a localized) content tree.
///
/// `id` and `slug` are stable across locales; `title` is the only field a
/// localization pass may substitute. `children` is ordered and only ever
/// populated on `Folder` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub id: String,
    pub kind: NodeKind,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Creates a leaf page node.
    #[must_use]
    pub fn page(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Page,
            title: title.into(),
            slug: slug.into(),
            children: Vec::new(),
        }
    }

    /// Creates a folder node with ordered children.
    #[must_use]
    pub fn folder(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        children: Vec<ContentNode>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Folder,
            title: title.into(),
            slug: slug.into(),
            children,
        }
    }

    /// Returns the number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ContentNode::node_count).sum::<usize>()
    }

    /// Visits every node depth-first in sibling order.
    pub fn walk(&self, visit: &mut impl FnMut(&ContentNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// A per-node localized title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub title: String,
}

/// Sparse table of localized titles keyed by locale code, then node id.
///
/// Absence of an entry is expected and meaningful: the localizer keeps the
/// canonical title for that node. The table is supplied by the external
/// content source at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    entries: HashMap<String, HashMap<String, TranslationEntry>>,
}

impl TranslationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a localized title for `(node_id, locale_code)`.
    pub fn insert(
        &mut self,
        node_id: impl Into<String>,
        locale_code: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.entries
            .entry(locale_code.into())
            .or_default()
            .insert(node_id.into(), TranslationEntry { title: title.into() });
    }

    /// Looks up the entry for a node under a locale.
    #[must_use]
    pub fn get(&self, node_id: &str, locale: &Locale) -> Option<&TranslationEntry> {
        self.entries
            .get(locale.code())
            .and_then(|nodes| nodes.get(node_id))
    }

    /// Reports how much of `tree` is covered by translations for `locale`.
    ///
    /// The default locale is always fully covered, since the canonical
    /// titles are its titles.
    #[must_use]
    pub fn coverage(&self, tree: &ContentNode, locale: &Locale) -> CoverageReport {
        let mut total_nodes = 0;
        let mut missing_ids = Vec::new();
        tree.walk(&mut |node| {
            total_nodes += 1;
            if !locale.is_default() && self.get(&node.id, locale).is_none() {
                missing_ids.push(node.id.clone());
            }
        });
        CoverageReport {
            locale: locale.code().to_string(),
            total_nodes,
            translated: total_nodes - missing_ids.len(),
            missing_ids,
        }
    }
}

/// Translation coverage of one locale over one tree, for content review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub locale: String,
    pub total_nodes: usize,
    pub translated: usize,
    pub missing_ids: Vec<String>,
}

impl CoverageReport {
    /// Percentage of nodes with a translated title, in `[0, 100]`.
    #[must_use]
    pub fn coverage_percent(&self) -> f64 {
        if self.total_nodes == 0 {
            100.0
        } else {
            (self.translated as f64 / self.total_nodes as f64) * 100.0
        }
    }

    /// Returns `true` when no node is missing a translation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_ids.is_empty()
    }
}

/// Produces the locale-specific tree for `locale`.
///
/// Depth-first, order-preserving, and pure: the output has the same node
/// count, kinds, ids, slugs, and sibling order as `tree`. For the default
/// locale the canonical titles are returned unchanged. For any other locale
/// each node's title is substituted from `table` when an entry exists and
/// kept canonical otherwise. A missing translation is a fallback, never an
/// error; this function cannot fail.
#[must_use]
pub fn localize(tree: &ContentNode, locale: &Locale, table: &TranslationTable) -> ContentNode {
    if locale.is_default() {
        return tree.clone();
    }
    localize_node(tree, locale, table)
}

fn localize_node(node: &ContentNode, locale: &Locale, table: &TranslationTable) -> ContentNode {
    let title = match table.get(&node.id, locale) {
        Some(entry) => entry.title.clone(),
        None => node.title.clone(),
    };
    ContentNode {
        id: node.id.clone(),
        kind: node.kind,
        title,
        slug: node.slug.clone(),
        children: node
            .children
            .iter()
            .map(|child| localize_node(child, locale, table))
            .collect(),
    }
}
