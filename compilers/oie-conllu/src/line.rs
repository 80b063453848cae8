use oie_protocol::{DepRel, Features, PartOfSpeech, Token, TokenId};

/// Contents of the `ID` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordId {
    /// A syntactic word (`7`).
    Word(u32),
    /// A multi-word token spanning several words (`7-8`, "do" = "de" + "o").
    Range(u32, u32),
    /// An empty node of the enhanced graph (`7.1`).
    Empty(u32, u32),
}

/// A syntactic word line, columns still borrowed from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWord<'a> {
    pub id: u32,
    pub form: &'a str,
    pub lemma: &'a str,
    pub upos: &'a str,
    pub xpos: &'a str,
    pub feats: Features,
    pub head: u32,
    pub deprel: &'a str,
    pub misc: &'a str,
}

impl RawWord<'_> {
    pub fn into_token(self) -> Token {
        Token {
            id: TokenId(self.id),
            form: self.form.to_string(),
            lemma: self.lemma.to_string(),
            upos: PartOfSpeech::from_tag(self.upos),
            xpos: (self.xpos != "_").then(|| self.xpos.to_string()),
            feats: self.feats,
            head: self.head,
            deprel: DepRel::from_label(self.deprel),
            space_after: !self.misc.split('|').any(|entry| entry == "SpaceAfter=No"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `# key = value`, or a free comment with no `=`.
    Comment { key: &'a str, value: Option<&'a str> },
    Word(RawWord<'a>),
    /// Multi-word ranges and empty nodes carry no head of their own.
    Skipped(WordId),
}
