use oie_protocol::{Sentence, SentenceId, TokenId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("sentence {0} has no tokens")]
    Empty(SentenceId),

    #[error("token ids must be 1..n in order: expected {expected}, found {found}")]
    TokenOrder { expected: u32, found: TokenId },

    #[error("token {token} points to head {head}, which is not in the sentence")]
    HeadOutOfRange { token: TokenId, head: u32 },

    #[error("sentence {0} has no root token")]
    NoRoot(SentenceId),

    #[error("sentence has more than one root: {first} and {second}")]
    MultipleRoots { first: TokenId, second: TokenId },

    #[error("token {0} is part of a head cycle")]
    Cycle(TokenId),
}

/// Checks that the head column describes a single tree and returns the
/// position of its root.
pub fn validate(sentence: &Sentence) -> Result<usize, TreeError> {
    let tokens = &sentence.tokens;
    if tokens.is_empty() {
        return Err(TreeError::Empty(sentence.id));
    }

    let n = tokens.len();
    let mut root: Option<usize> = None;
    for (i, token) in tokens.iter().enumerate() {
        let expected = (i + 1) as u32;
        if token.id.0 != expected {
            return Err(TreeError::TokenOrder { expected, found: token.id });
        }
        if token.head as usize > n {
            return Err(TreeError::HeadOutOfRange { token: token.id, head: token.head });
        }
        if token.head == 0 {
            if let Some(first) = root {
                return Err(TreeError::MultipleRoots {
                    first: tokens[first].id,
                    second: token.id,
                });
            }
            root = Some(i);
        }
    }
    let root = root.ok_or(TreeError::NoRoot(sentence.id))?;

    // Every head chain must end at the root.
    let mut reaches_root = vec![false; n];
    reaches_root[root] = true;
    for start in 0..n {
        let mut path = Vec::new();
        let mut current = start;
        while !reaches_root[current] {
            if path.contains(&current) {
                return Err(TreeError::Cycle(tokens[current].id));
            }
            path.push(current);
            current = tokens[current].head as usize - 1;
        }
        for visited in path {
            reaches_root[visited] = true;
        }
    }

    Ok(root)
}
