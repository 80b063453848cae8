use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::{SentenceId, TokenId};
use crate::morphology::{Features, PartOfSpeech};
use crate::syntax::DepRel;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One syntactic word of an annotated sentence (one CoNLL-U word line).
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Token {
    pub id: TokenId,
    pub form: String,
    pub lemma: String,
    pub upos: PartOfSpeech,
    pub xpos: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub feats: Features,
    /// `TokenId` of the head, `0` for the sentence root.
    pub head: u32,
    pub deprel: DepRel,
    /// Whether the surface text has a space after this word (`SpaceAfter=No` clears it).
    #[cfg_attr(feature = "serde", serde(default = "default_space_after"))]
    pub space_after: bool,
}

#[cfg(feature = "serde")]
fn default_space_after() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Sentence {
    pub id: SentenceId,
    /// The `# text = ...` comment, when the annotation carries one.
    pub text: Option<String>,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// The original text, or the forms joined back together.
    pub fn surface_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            out.push_str(&token.form);
            if token.space_after && i + 1 < self.tokens.len() {
                out.push(' ');
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Treebank {
    pub version: u32,
    pub sentences: Vec<Sentence>,
}

impl Treebank {
    pub const VERSION: u32 = 1;

    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self {
            version: Self::VERSION,
            sentences,
        }
    }
}
