use std::collections::BTreeMap;

/// One file's bytes rendered as literal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedAsset {
    fragment: String,
    len: u64,
}

impl EncodedAsset {
    pub fn new(fragment: String, len: u64) -> Self {
        Self { fragment, len }
    }

    /// The `0xHH, ` literal text.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Number of bytes the fragment encodes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Encoded files keyed by their path relative to the source root.
///
/// Keys are kept sorted so rendering does not depend on the order the
/// directory walk produced them in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetMap {
    entries: BTreeMap<String, EncodedAsset>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset, returning the one previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, asset: EncodedAsset) -> Option<EncodedAsset> {
        self.entries.insert(key.into(), asset)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&EncodedAsset> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the sizes of all assets.
    pub fn total_bytes(&self) -> u64 {
        self.entries.values().map(EncodedAsset::len).sum()
    }

    /// Iterates over the assets in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EncodedAsset)> {
        self.entries.iter().map(|(key, asset)| (key.as_str(), asset))
    }
}

impl FromIterator<(String, EncodedAsset)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (String, EncodedAsset)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
