use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitflags::Flags;
use itertools::Itertools;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::options::{OptionError, Vocabulary};

/// An extension slot, the caller-chosen position of a custom option.
pub type Slot = u8;

/// A set of options drawn from the vocabulary `V`, plus any number of
/// caller-registered extension slots.
///
/// Built-in members are stored packed in `V::Flags`. Extension slots
/// live in their own namespace and may carry a label, which is how they
/// are described when the set is encoded. A label only ever exists for
/// a slot which is a member of the set.
///
/// ```rust
/// use routers_directions::options::{AttributeOption, AttributeOptions};
///
/// let mut options = AttributeOptions::from(AttributeOption::Speed);
/// options.update_custom_option((3, "closures"));
///
/// assert_eq!(options.to_string(), "speed,closures");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet<V: Vocabulary> {
    builtin: V::Flags,
    extensions: BTreeMap<Slot, Option<String>>,
}

impl<V: Vocabulary> Default for OptionSet<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Vocabulary> OptionSet<V> {
    pub fn empty() -> Self {
        OptionSet {
            builtin: V::Flags::empty(),
            extensions: BTreeMap::new(),
        }
    }

    /// A set holding only the unlabelled extension `slot`.
    pub fn from_slot(slot: Slot) -> Self {
        let mut set = Self::empty();
        set.extensions.insert(slot, None);
        set
    }

    /// A set holding only the extension `slot`, described by `label`.
    pub fn custom(slot: Slot, label: impl Into<String>) -> Self {
        let mut set = Self::empty();
        set.extensions.insert(slot, Some(label.into()));
        set
    }

    pub fn is_empty(&self) -> bool {
        self.builtin.is_empty() && self.extensions.is_empty()
    }

    /// Whether the built-in `member` is set.
    pub fn has(&self, member: V) -> bool {
        self.builtin.contains(member.to_flag())
    }

    /// Built-in members, in declared order.
    pub fn members(&self) -> impl Iterator<Item = V> + '_ {
        V::iter().filter(|member| self.has(*member))
    }

    /// Extension slots, in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.extensions.keys().copied()
    }

    pub fn label(&self, slot: Slot) -> Option<&str> {
        self.extensions.get(&slot)?.as_deref()
    }

    /// Members present in both sets. Labels are taken from `self`.
    pub fn intersection(&self, other: &Self) -> Self {
        let extensions = self
            .extensions
            .iter()
            .filter(|(slot, _)| other.extensions.contains_key(slot))
            .map(|(slot, label)| (*slot, label.clone()))
            .collect();

        OptionSet {
            builtin: self.builtin & other.builtin,
            extensions,
        }
    }

    /// Whether every member of `member` is set in `self`.
    ///
    /// An empty argument is never contained, and neither is a slot
    /// which both sets label differently.
    pub fn contains(&self, member: &Self) -> bool {
        if self.intersection(member).is_empty() || !self.builtin.contains(member.builtin) {
            return false;
        }

        member
            .extensions
            .iter()
            .all(|(slot, label)| match (self.extensions.get(slot), label) {
                (None, _) => false,
                (Some(Some(own)), Some(label)) => own == label,
                (Some(_), _) => true,
            })
    }

    /// Adds `member` unless any part of it is already set.
    ///
    /// Returns `(true, member)` when inserted. Otherwise returns `false`
    /// and the members which collided, described by the labels of `self`.
    pub fn insert(&mut self, member: Self) -> (bool, Self) {
        let collision = self.intersection(&member);
        if !collision.is_empty() {
            return (false, collision);
        }

        self.builtin.insert(member.builtin);
        self.merge_labels(&member);

        (true, member)
    }

    /// Clears the members of `member` from `self`.
    ///
    /// A slot labelled differently by both sets is left in place along
    /// with its label. Returns the members which were cleared, with the
    /// labels they carried, or `None` when nothing changed.
    pub fn remove(&mut self, member: &Self) -> Option<Self> {
        let mut removed = OptionSet {
            builtin: self.builtin & member.builtin,
            extensions: BTreeMap::new(),
        };

        self.builtin.remove(member.builtin);

        for (slot, theirs) in &member.extensions {
            if let (Some(Some(own)), Some(theirs)) = (self.extensions.get(slot), theirs) {
                if own != theirs {
                    continue;
                }
            }

            if let Some(label) = self.extensions.remove(slot) {
                removed.extensions.insert(*slot, label);
            }
        }

        (!removed.is_empty()).then_some(removed)
    }

    /// Unions `member` into `self`, keeping existing labels on conflict.
    ///
    /// Returns the members which were already set, or `None`.
    pub fn update(&mut self, member: Self) -> Option<Self> {
        let shared_builtin = self.builtin & member.builtin;
        let shared_slots = member
            .extensions
            .keys()
            .filter(|slot| self.extensions.contains_key(slot))
            .copied()
            .collect::<Vec<_>>();

        self.builtin.insert(member.builtin);
        self.merge_labels(&member);

        let previous = OptionSet {
            builtin: shared_builtin,
            extensions: shared_slots
                .into_iter()
                .map(|slot| (slot, self.extensions.get(&slot).cloned().flatten()))
                .collect(),
        };

        (!previous.is_empty()).then_some(previous)
    }

    /// Sets the extension `slot` and (re)labels it.
    ///
    /// Returns the prior state of the slot as [`OptionSet::update`] does.
    pub fn update_custom_option(&mut self, (slot, label): (Slot, impl Into<String>)) -> Option<Self> {
        let previous = self.update(Self::from_slot(slot));
        self.extensions.insert(slot, Some(label.into()));
        previous
    }

    /// The wire descriptions of the set: built-in tokens in declared
    /// order, followed by extension labels in ascending slot order.
    pub fn descriptions(&self) -> Vec<String> {
        self.members()
            .map(|member| member.as_ref().to_owned())
            .chain(self.extensions.values().flatten().cloned())
            .collect()
    }

    /// Reads a set from its wire tokens. Order and repetition do not matter,
    /// and blank tokens are skipped.
    pub fn from_descriptions<I, S>(descriptions: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();

        for description in descriptions {
            let token = description.as_ref().trim();
            if token.is_empty() || V::EMPTY == Some(token) {
                continue;
            }

            let member = token
                .parse::<V>()
                .map_err(|_| OptionError::UnrecognizedToken {
                    vocabulary: V::NAME,
                    token: token.to_owned(),
                })?;

            set.builtin.insert(member.to_flag());
        }

        Ok(set)
    }

    fn merge_labels(&mut self, other: &Self) {
        for (slot, label) in &other.extensions {
            match self.extensions.entry(*slot) {
                Entry::Vacant(entry) => {
                    entry.insert(label.clone());
                }
                Entry::Occupied(mut entry) => {
                    if entry.get().is_none() {
                        entry.insert(label.clone());
                    }
                }
            }
        }
    }
}

impl<V: Vocabulary> From<V> for OptionSet<V> {
    fn from(member: V) -> Self {
        OptionSet {
            builtin: member.to_flag(),
            extensions: BTreeMap::new(),
        }
    }
}

impl<V: Vocabulary> FromIterator<V> for OptionSet<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut set = Self::empty();
        iter.into_iter()
            .for_each(|member| set.builtin.insert(member.to_flag()));
        set
    }
}

impl<V: Vocabulary> Display for OptionSet<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match V::EMPTY {
            Some(empty) if self.is_empty() => write!(f, "{empty}"),
            _ => write!(f, "{}", self.descriptions().iter().join(",")),
        }
    }
}

impl<V: Vocabulary> FromStr for OptionSet<V> {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_descriptions(s.split(','))
    }
}

impl<V: Vocabulary> Serialize for OptionSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match V::EMPTY {
            Some(empty) if self.is_empty() => serializer.collect_seq([empty]),
            _ => serializer.collect_seq(self.descriptions()),
        }
    }
}

/// Option lists arrive either as a JSON array of tokens,
/// or as a single comma-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Tokens {
    List(Vec<String>),
    Joined(String),
}

impl<'de, V: Vocabulary> Deserialize<'de> for OptionSet<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let set = match Tokens::deserialize(deserializer)? {
            Tokens::List(tokens) => Self::from_descriptions(tokens),
            Tokens::Joined(tokens) => tokens.parse(),
        };

        set.map_err(D::Error::custom)
    }
}
