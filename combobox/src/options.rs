use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

/// The ordered, immutable set of option strings a combobox offers.
///
/// Display strings double as option identities, so they must be unique.
/// Duplicates are dropped on construction, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet(Arc<[String]>);

impl OptionSet {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for option in options {
            let option = option.into();
            if seen.insert(option.clone()) {
                unique.push(option);
            } else {
                log::warn!("[combobox] dropping duplicate option {:?}", option);
            }
        }
        Self(unique.into())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for OptionSet {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
