//! Where flat settings come from.

use core::hash::BuildHasher;
use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

/// A flat mapping of dot-path keys to raw values.
///
/// Implemented for the standard maps, [`IndexMap`], and slices, arrays and
/// vectors of pairs. Entries are applied in iteration order; for pair lists
/// with a repeated key, the last occurrence wins.
pub trait SettingsSource {
    /// Iterate over all `(key, value)` entries
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        (**self).entries()
    }
}

impl<K: AsRef<str>, V: AsRef<str>, S: BuildHasher> SettingsSource for HashMap<K, V, S> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> SettingsSource for BTreeMap<K, V> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, S> SettingsSource for IndexMap<K, V, S> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> SettingsSource for [(K, V)] {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> SettingsSource for [(K, V); N] {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        self.as_slice().entries()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> SettingsSource for Vec<(K, V)> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        self.as_slice().entries()
    }
}
