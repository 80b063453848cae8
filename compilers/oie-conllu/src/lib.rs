pub mod line;
pub mod parser;

use std::iter::Enumerate;
use std::str::Lines;

use oie_protocol::{Sentence, SentenceId, Treebank};
use thiserror::Error;

use crate::line::Line;
use crate::parser::{parse_line, FieldError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConlluError {
    #[error("line {line}: expected at least 8 columns, found {found}")]
    MissingColumns { line: usize, found: usize },

    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("input contains no sentence")]
    NoSentence,
}

impl ConlluError {
    fn at(line: usize, error: FieldError) -> Self {
        match error {
            FieldError::MissingColumns(found) => Self::MissingColumns { line, found },
            FieldError::Invalid { column, value } => Self::InvalidField { line, column, value },
        }
    }
}

/// Streams the sentences of a CoNLL-U document.
///
/// Blocks are separated by blank lines. Blocks holding only comments (`# newdoc`)
/// are skipped. A malformed line makes the whole block an error; reading resumes
/// with the next block.
pub struct Sentences<'a> {
    lines: Enumerate<Lines<'a>>,
    next_id: u32,
}

impl<'a> Sentences<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            next_id: 1,
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Result<Sentence, ConlluError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut started = false;
            let mut text = None;
            let mut tokens = Vec::new();
            let mut error = None;

            for (number, raw) in self.lines.by_ref() {
                let line = raw.trim_end_matches(['\r', '\n']);
                if line.trim().is_empty() {
                    if started {
                        break;
                    }
                    continue;
                }
                started = true;
                if error.is_some() {
                    continue;
                }

                match parse_line(line) {
                    Ok(Line::Comment { key, value: Some(value) }) if key == "text" => {
                        text = Some(value.to_string());
                    }
                    Ok(Line::Comment { .. }) | Ok(Line::Skipped(_)) => {}
                    Ok(Line::Word(word)) => tokens.push(word.into_token()),
                    Err(e) => error = Some(ConlluError::at(number + 1, e)),
                }
            }

            if !started {
                return None;
            }
            if let Some(e) = error {
                self.next_id += 1;
                return Some(Err(e));
            }
            if tokens.is_empty() {
                continue;
            }

            let id = SentenceId(self.next_id);
            self.next_id += 1;
            return Some(Ok(Sentence { id, text, tokens }));
        }
    }
}

/// Reads a whole document, failing on the first malformed sentence.
pub fn read_treebank(input: &str) -> Result<Treebank, ConlluError> {
    let sentences = Sentences::new(input).collect::<Result<Vec<_>, _>>()?;
    Ok(Treebank::new(sentences))
}

/// Reads the first sentence of `input`.
pub fn parse_sentence(input: &str) -> Result<Sentence, ConlluError> {
    Sentences::new(input).next().unwrap_or(Err(ConlluError::NoSentence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oie_protocol::{DepRel, PartOfSpeech, TokenId};

    const SAMPLE: &str = "\
# newdoc id = doc1

# sent_id = 1
# text = O livro do João chegou.
1\tO\to\tDET\t_\tDefinite=Def|Gender=Masc\t2\tdet\t_\t_
2\tlivro\tlivro\tNOUN\t_\tGender=Masc|Number=Sing\t6\tnsubj\t_\t_
3-4\tdo\t_\t_\t_\t_\t_\t_\t_\t_
3\tde\tde\tADP\t_\t_\t5\tcase\t_\t_
4\to\to\tDET\t_\t_\t5\tdet\t_\t_
5\tJoão\tJoão\tPROPN\t_\t_\t2\tnmod\t_\t_
6\tchegou\tchegar\tVERB\t_\tMood=Ind|Tense=Past\t0\troot\t_\tSpaceAfter=No
7\t.\t.\tPUNCT\t_\t_\t6\tpunct\t_\t_

# sent_id = 2
1\tQue\tque\tPRON\t_\tPronType=Int,Rel\t2\tnsubj\t_\t_
2\tchegou\tchegar\tVERB\t_\t_\t0\troot\t_\tSpaceAfter=No
3\t?\t?\tPUNCT\t_\t_\t2\tpunct\t_\t_
";

    #[test]
    fn test_reads_sentences_and_skips_ranges() {
        let treebank = read_treebank(SAMPLE).unwrap();
        assert_eq!(treebank.sentences.len(), 2);

        let first = &treebank.sentences[0];
        assert_eq!(first.id, SentenceId(1));
        assert_eq!(first.text.as_deref(), Some("O livro do João chegou."));
        assert_eq!(first.tokens.len(), 7);

        let joao = &first.tokens[4];
        assert_eq!(joao.id, TokenId(5));
        assert_eq!(joao.form, "João");
        assert_eq!(joao.upos, PartOfSpeech::ProperNoun);
        assert_eq!(joao.head, 2);
        assert_eq!(joao.deprel, DepRel::Nmod);
        assert_eq!(first.tokens[5].head, 0);
        assert!(!first.tokens[5].space_after);
        assert!(first.tokens[1].feats.contains("Number", "Sing"));
        assert!(first.tokens[0].xpos.is_none());
    }

    #[test]
    fn test_rebuilds_text_without_comment() {
        let treebank = read_treebank(SAMPLE).unwrap();
        let second = &treebank.sentences[1];
        assert!(second.text.is_none());
        assert_eq!(second.surface_text(), "Que chegou?");
        assert!(second.tokens[0].feats.contains("PronType", "Rel"));
        assert!(second.tokens[0].feats.contains("PronType", "Int"));
    }

    #[test]
    fn test_whitespace_separated_lines() {
        let sentence = parse_sentence(
            "1 Há haver VERB _ _ 0 root _ _\n\
             2 problemas problema NOUN _ Number=Plur 1 obj _ _\n",
        )
        .unwrap();
        assert_eq!(sentence.tokens.len(), 2);
        assert_eq!(sentence.tokens[0].lemma, "haver");
        assert_eq!(sentence.tokens[1].deprel, DepRel::Obj);
    }

    #[test]
    fn test_reports_line_numbers() {
        let input = "1\tChove\tchover\tVERB\t_\t_\t0\troot\n\n1\tx\tx\tX\t_\t_\tfoo\tdep\n";
        let results: Vec<_> = Sentences::new(input).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1].clone().unwrap_err(),
            ConlluError::InvalidField { line: 3, column: "HEAD", value: "foo".to_string() }
        );

        let short = parse_sentence("1\tChove\tchover\n").unwrap_err();
        assert_eq!(short, ConlluError::MissingColumns { line: 1, found: 3 });
        assert_eq!(parse_sentence("\n# only a comment\n").unwrap_err(), ConlluError::NoSentence);
    }

    #[test]
    fn test_feature_column() {
        let (_, feats) = parser::features("Gender=Fem|Number=Plur").unwrap();
        assert_eq!(feats.to_string(), "Gender=Fem|Number=Plur");
        assert!(parser::features("_").unwrap().1.is_empty());
        assert!(parser::features("Gender").is_err());
    }
}
