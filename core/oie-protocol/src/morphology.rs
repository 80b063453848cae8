use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Universal POS tags (coarse `UPOS` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", from = "String"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Adjective = 0,
    Adposition = 1,
    Adverb = 2,
    Auxiliary = 3,
    CoordinatingConjunction = 4,
    Determiner = 5,
    Interjection = 6,
    Noun = 7,
    Numeral = 8,
    Particle = 9,
    Pronoun = 10,
    ProperNoun = 11,
    Punctuation = 12,
    SubordinatingConjunction = 13,
    Symbol = 14,
    Verb = 15,
    Other = 16,
}

impl PartOfSpeech {
    /// Parses a UPOS tag. Unknown tags become `Other` (the `X` tag).
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "ADJ" => Self::Adjective,
            "ADP" => Self::Adposition,
            "ADV" => Self::Adverb,
            "AUX" => Self::Auxiliary,
            "CCONJ" | "CONJ" => Self::CoordinatingConjunction,
            "DET" => Self::Determiner,
            "INTJ" => Self::Interjection,
            "NOUN" => Self::Noun,
            "NUM" => Self::Numeral,
            "PART" => Self::Particle,
            "PRON" => Self::Pronoun,
            "PROPN" => Self::ProperNoun,
            "PUNCT" => Self::Punctuation,
            "SCONJ" => Self::SubordinatingConjunction,
            "SYM" => Self::Symbol,
            "VERB" => Self::Verb,
            _ => Self::Other,
        }
    }

    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Adjective => "ADJ",
            Self::Adposition => "ADP",
            Self::Adverb => "ADV",
            Self::Auxiliary => "AUX",
            Self::CoordinatingConjunction => "CCONJ",
            Self::Determiner => "DET",
            Self::Interjection => "INTJ",
            Self::Noun => "NOUN",
            Self::Numeral => "NUM",
            Self::Particle => "PART",
            Self::Pronoun => "PRON",
            Self::ProperNoun => "PROPN",
            Self::Punctuation => "PUNCT",
            Self::SubordinatingConjunction => "SCONJ",
            Self::Symbol => "SYM",
            Self::Verb => "VERB",
            Self::Other => "X",
        }
    }

    /// VERB or AUX.
    pub const fn is_verbal(self) -> bool {
        matches!(self, Self::Verb | Self::Auxiliary)
    }

    /// Heads of nominal predicates ("Maria é *professora*", "é *bonita*").
    pub const fn is_nominal(self) -> bool {
        matches!(
            self,
            Self::Noun | Self::ProperNoun | Self::Adjective | Self::Pronoun | Self::Numeral
        )
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<PartOfSpeech> for &'static str {
    fn from(pos: PartOfSpeech) -> Self {
        pos.as_tag()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Morphological features (`FEATS` column): feature name to a set of values.
///
/// Entries are kept sorted by name and values are kept sorted and unique, so two
/// feature maps with the same content compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(from = "FeatureEntries"))]
#[archive(check_bytes)]
pub struct Features {
    entries: Vec<(String, Vec<String>)>,
}

/// Wire shape of [`Features`]; entries may come in any order.
#[cfg(feature = "serde")]
#[derive(SerdeDeserialize)]
struct FeatureEntries {
    entries: Vec<(String, Vec<String>)>,
}

#[cfg(feature = "serde")]
impl From<FeatureEntries> for Features {
    fn from(raw: FeatureEntries) -> Self {
        let mut features = Features::new();
        for (name, values) in &raw.entries {
            for value in values {
                features.insert(name, value);
            }
        }
        features
    }
}

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the value set of `name`.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.binary_search_by(|(n, _)| n.as_str().cmp(name)) {
            Ok(pos) => {
                let values = &mut self.entries[pos].1;
                if let Err(at) = values.binary_search_by(|v| v.as_str().cmp(value)) {
                    values.insert(at, value.to_string());
                }
            }
            Err(pos) => {
                self.entries
                    .insert(pos, (name.to_string(), alloc::vec![value.to_string()]));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|pos| self.entries[pos].1.as_slice())
    }

    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get(name)
            .map_or(false, |values| values.iter().any(|v| v == value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }
}

/// Renders the CoNLL-U form: `Gender=Fem|Number=Plur`, or `_` when empty.
impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("_");
        }
        for (i, (name, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}=", name)?;
            for (j, value) in values.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                f.write_str(value)?;
            }
        }
        Ok(())
    }
}
