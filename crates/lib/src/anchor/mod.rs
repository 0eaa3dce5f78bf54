//!
//! Order-preserving record of the hyperlinks found in a document.
//!
//! Document processors call [`AnchorMap::add_anchor`] for every link they
//! discover; feed generation then reads the map back through its views. The
//! map is a multimap keyed by anchor text: nothing is ever deduplicated, and
//! the absent text (`None`) is a key like any other.

use indexmap::{Equivalent, IndexMap, IndexSet};
use url::Url;

use crate::constants::URI_ARGUMENT;

mod errors;
pub use errors::AnchorError;

mod wire;
pub use wire::{AnchorMapProxy, AnchorRecord};

/// A single recorded hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Anchor {
    text: Option<String>,
    uri: Url,
}

impl Anchor {
    /// Creates an anchor pointing at `uri` with optional anchor text.
    pub fn new(uri: Url, text: Option<String>) -> Self {
        Self { text, uri }
    }

    /// The anchor text, if the link had any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The link target.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Splits the anchor into `(text, uri)`.
    pub fn into_parts(self) -> (Option<String>, Url) {
        (self.text, self.uri)
    }
}

/// Borrowed lookup key that hashes and compares like `Option<String>`.
#[derive(Hash)]
struct TextKey<'a>(Option<&'a str>);

impl Equivalent<Option<String>> for TextKey<'_> {
    fn equivalent(&self, key: &Option<String>) -> bool {
        self.0 == key.as_deref()
    }
}

/// Append-only multimap from optional anchor text to link targets.
///
/// All views reflect insertion order. [`key_set`](Self::key_set) orders the
/// distinct texts by first occurrence, which downstream feed output relies on
/// for deterministic results.
#[derive(Debug, Clone, Default)]
pub struct AnchorMap {
    entries: Vec<Anchor>,
    /// Positions in `entries` for each distinct text, keyed in first-occurrence order.
    positions: IndexMap<Option<String>, Vec<usize>>,
}

impl AnchorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an anchor.
    ///
    /// `text` may be absent; the anchor is then filed under the `None` key.
    /// A missing `uri` fails with [`AnchorError::NullArgument`] and leaves the
    /// map unchanged.
    pub fn add_anchor(&mut self, uri: Option<Url>, text: Option<&str>) -> Result<(), AnchorError> {
        let uri = uri.ok_or(AnchorError::NullArgument {
            argument: URI_ARGUMENT,
        })?;
        self.push(uri, text.map(str::to_owned));
        Ok(())
    }

    /// Records an anchor from an unparsed link target.
    ///
    /// Fails with [`AnchorError::NullArgument`] when `href` is absent and with
    /// [`AnchorError::InvalidUri`] when it is not an absolute URI. The map is
    /// unchanged on failure.
    pub fn add_anchor_str(
        &mut self,
        href: Option<&str>,
        text: Option<&str>,
    ) -> Result<(), AnchorError> {
        let href = href.ok_or(AnchorError::NullArgument {
            argument: URI_ARGUMENT,
        })?;
        let uri = Url::parse(href).map_err(|source| AnchorError::InvalidUri {
            value: href.to_string(),
            source,
        })?;
        self.push(uri, text.map(str::to_owned));
        Ok(())
    }

    /// Records an anchor whose target is already known.
    pub fn push(&mut self, uri: Url, text: Option<String>) {
        tracing::trace!(uri = %uri, text = ?text, "Recording anchor");
        let position = self.entries.len();
        self.positions
            .entry(text.clone())
            .or_default()
            .push(position);
        self.entries.push(Anchor { text, uri });
    }

    /// Every recorded anchor, in insertion order.
    pub fn entries(&self) -> &[Anchor] {
        &self.entries
    }

    /// The text of every anchor, in insertion order, duplicates included.
    pub fn key_list(&self) -> Vec<Option<&str>> {
        self.entries.iter().map(Anchor::text).collect()
    }

    /// The distinct anchor texts, ordered by first occurrence.
    pub fn key_set(&self) -> IndexSet<Option<&str>> {
        self.positions.keys().map(Option::as_deref).collect()
    }

    /// Targets of every anchor with the given text, in insertion order.
    ///
    /// Returns an empty list for texts that never occurred.
    pub fn get(&self, text: Option<&str>) -> Vec<&Url> {
        self.positions
            .get(&TextKey(text))
            .map(|positions| positions.iter().map(|&i| &self.entries[i].uri).collect())
            .unwrap_or_default()
    }

    /// Anchors grouped by text, groups in first-occurrence order.
    pub fn groups(&self) -> impl Iterator<Item = (Option<&str>, Vec<&Url>)> + '_ {
        self.positions.iter().map(|(text, positions)| {
            let uris: Vec<&Url> = positions.iter().map(|&i| &self.entries[i].uri).collect();
            (text.as_deref(), uris)
        })
    }

    /// Number of recorded anchors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no anchors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the anchors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Anchor> {
        self.entries.iter()
    }
}

impl PartialEq for AnchorMap {
    fn eq(&self, other: &Self) -> bool {
        // `positions` is derived from `entries`.
        self.entries == other.entries
    }
}

impl Eq for AnchorMap {}

impl Extend<Anchor> for AnchorMap {
    fn extend<I: IntoIterator<Item = Anchor>>(&mut self, iter: I) {
        for anchor in iter {
            let (text, uri) = anchor.into_parts();
            self.push(uri, text);
        }
    }
}

impl FromIterator<Anchor> for AnchorMap {
    fn from_iter<I: IntoIterator<Item = Anchor>>(iter: I) -> Self {
        let mut map = AnchorMap::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a AnchorMap {
    type Item = &'a Anchor;
    type IntoIter = std::slice::Iter<'a, Anchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
