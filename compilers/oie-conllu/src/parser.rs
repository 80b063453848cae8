use nom::{
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map, map_res, rest},
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated},
    IResult,
};
use oie_protocol::Features;

use crate::line::{Line, RawWord, WordId};

/// Column names, in CoNLL-U order.
pub const COLUMNS: [&str; 10] = [
    "ID", "FORM", "LEMMA", "UPOS", "XPOS", "FEATS", "HEAD", "DEPREL", "DEPS", "MISC",
];

/// Columns up to `DEPREL` are mandatory; `DEPS` and `MISC` may be left out.
const REQUIRED_COLUMNS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    MissingColumns(usize),
    Invalid { column: &'static str, value: String },
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

pub fn word_id(input: &str) -> IResult<&str, WordId> {
    alt((
        map(separated_pair(number, char('-'), number), |(a, b)| WordId::Range(a, b)),
        map(separated_pair(number, char('.'), number), |(a, b)| WordId::Empty(a, b)),
        map(number, WordId::Word),
    ))(input)
}

/// Splits a word line into columns.
///
/// Tab-separated lines are split on tabs only, so forms may contain spaces;
/// lines without tabs (hand-written fixtures) are split on runs of spaces.
pub fn columns(line: &str) -> IResult<&str, Vec<&str>> {
    if line.contains('\t') {
        separated_list1(char('\t'), take_till1(|c| c == '\t'))(line)
    } else {
        preceded(
            space0,
            separated_list1(space1, take_till1(|c: char| c == ' ' || c == '\t')),
        )(line)
    }
}

fn feature(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    separated_pair(
        take_till1(|c| c == '=' || c == '|'),
        char('='),
        separated_list1(char(','), take_till1(|c| c == ',' || c == '|')),
    )(input)
}

/// Parses the `FEATS` column: `_` or `Name=Value[,Value]|...`.
pub fn features(input: &str) -> IResult<&str, Features> {
    alt((
        map(all_consuming(char('_')), |_| Features::new()),
        map(all_consuming(separated_list1(char('|'), feature)), |entries| {
            let mut feats = Features::new();
            for (name, values) in entries {
                for value in values {
                    feats.insert(name, value);
                }
            }
            feats
        }),
    ))(input)
}

/// `# key = value` or `# free text`.
fn comment(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    preceded(
        terminated(char('#'), space0),
        alt((
            map(
                separated_pair(take_till1(|c| c == '='), char('='), rest),
                |(key, value): (&str, &str)| (key.trim(), Some(value.trim())),
            ),
            map(rest, |text: &str| (text.trim(), None)),
        )),
    )(input)
}

fn invalid(column: &'static str, value: &str) -> FieldError {
    FieldError::Invalid {
        column,
        value: value.to_string(),
    }
}

/// Parses one non-blank line of a sentence block.
pub fn parse_line(line: &str) -> Result<Line<'_>, FieldError> {
    if line.starts_with('#') {
        let (_, (key, value)) = comment(line).map_err(|_| invalid("comment", line))?;
        return Ok(Line::Comment { key, value });
    }

    let (_, cols) = columns(line).map_err(|_| FieldError::MissingColumns(0))?;
    if cols.len() < REQUIRED_COLUMNS {
        return Err(FieldError::MissingColumns(cols.len()));
    }

    let id = match all_consuming(word_id)(cols[0]) {
        Ok((_, WordId::Word(id))) => id,
        Ok((_, skipped)) => return Ok(Line::Skipped(skipped)),
        Err(_) => return Err(invalid(COLUMNS[0], cols[0])),
    };
    let (_, feats) = features(cols[5]).map_err(|_| invalid(COLUMNS[5], cols[5]))?;
    let (_, head) = all_consuming(number)(cols[6]).map_err(|_| invalid(COLUMNS[6], cols[6]))?;

    Ok(Line::Word(RawWord {
        id,
        form: cols[1],
        lemma: cols[2],
        upos: cols[3],
        xpos: cols[4],
        feats,
        head,
        deprel: cols[7],
        misc: cols.get(9).copied().unwrap_or("_"),
    }))
}
