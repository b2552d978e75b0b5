//! Shell-like argument tokenizer using nom.
//!
//! Grammar:
//! ```text
//! line    = ws* (word (ws+ word)*)? ws*
//! word    = segment+
//! segment = "'" [^']* "'" | '"' (escape | [^"\\])* '"' | (escape | [^ws'"\\])+
//! escape  = "\" any
//! ```
//!
//! Adjacent segments join into one word, so `-p='my proj'` is a single
//! argument `-p=my proj`.

use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{anychar, char, multispace0, multispace1, none_of},
    combinator::{all_consuming, map, opt},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::{Error, Result};

/// Split `input` into arguments, honoring quotes and backslash escapes.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    match all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, word),
        multispace0,
    ))(input)
    {
        Ok((_, words)) => Ok(words),
        Err(_) => Err(Error::bad_command(format!(
            "unbalanced quote or dangling escape in '{}'",
            input.trim()
        ))),
    }
}

fn word(input: &str) -> IResult<&str, String> {
    map(many1(alt((single_quoted, double_quoted, bare))), |parts| {
        parts.concat()
    })(input)
}

fn single_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        map(opt(is_not("'")), |s: Option<&str>| {
            s.unwrap_or_default().to_string()
        }),
        char('\''),
    )(input)
}

fn double_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(many0(alt((escaped, none_of("\"\\")))), String::from_iter),
        char('"'),
    )(input)
}

fn bare(input: &str) -> IResult<&str, String> {
    map(
        many1(alt((escaped, none_of(" \t\r\n'\"\\")))),
        String::from_iter,
    )(input)
}

fn escaped(input: &str) -> IResult<&str, char> {
    preceded(char('\\'), anychar)(input)
}
