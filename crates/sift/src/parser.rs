//! Natural-language filter parser implemented with nom.
//!
//! The grammar is a closed, ordered list of phrase rules. Each rule recognizes
//! one phrase with nom parsers and yields a [`Directive`]; the rules are
//! folded over an empty [`FilterSet`] in order. Every rule is tried, so one
//! query may fire several of them, and a later rule overwrites a field set by
//! an earlier one.
//!
//! Phrases may appear anywhere in the query but must start and end on word
//! boundaries, so `"palindromic"` matches while `"unpalindromic"` does not.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, satisfy},
    combinator::{map, map_res, not, opt, value},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use tracing::debug;

use crate::error::{SiftError, SiftResult};
use crate::filter::FilterSet;

/// Parse a natural-language query into a filter set.
///
/// Matching is case-insensitive.
///
/// # Errors
///
/// - [`SiftError::UnrecognizedQuery`] if no phrase is recognized (including
///   blank input)
/// - [`SiftError::InvalidLengthConstraint`] if a length phrase yields a bound
///   that cannot be represented, such as `"shorter than 0 characters"`
///
/// # Examples
///
/// ```rust
/// use sift::parse;
///
/// let filters = parse("palindromic strings with 2 words containing letter a").unwrap();
/// assert_eq!(filters.is_palindrome, Some(true));
/// assert_eq!(filters.word_count, Some(2));
/// assert_eq!(filters.contains_character.as_deref(), Some("a"));
///
/// let filters = parse("strings longer than 10 characters").unwrap();
/// assert_eq!(filters.min_length, Some(11));
///
/// assert!(parse("xyz abc def").is_err());
/// ```
pub fn parse(query: &str) -> SiftResult<FilterSet> {
    let text = query.trim().to_lowercase();

    let filters = RULES
        .iter()
        .try_fold(FilterSet::new(), |filters, rule| {
            match rule.matcher.scan(&text) {
                Some((phrase, directive)) => {
                    debug!(rule = rule.name, phrase, "filter rule matched");
                    directive.apply(filters, phrase)
                }
                None => Ok(filters),
            }
        })?;

    if filters.is_empty() {
        return Err(SiftError::UnrecognizedQuery {
            query: query.to_string(),
        });
    }

    Ok(filters)
}

// ============================================================================
// Rules
// ============================================================================

/// The effect of a recognized phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    SingleWordPalindrome,
    Palindrome,
    WordCount(i64),
    LongerThan(i64),
    ShorterThan(i64),
    AtLeast(i64),
    AtMost(i64),
    Contains(char),
}

impl Directive {
    fn apply(self, filters: FilterSet, phrase: &str) -> SiftResult<FilterSet> {
        let filters = match self {
            Directive::SingleWordPalindrome => filters.with_word_count(1).with_palindrome(true),
            Directive::Palindrome => filters.with_palindrome(true),
            Directive::WordCount(n) => filters.with_word_count(n),
            Directive::LongerThan(n) => {
                let min = n
                    .checked_add(1)
                    .ok_or_else(|| length_error(phrase, "bound is too large"))?;
                filters.with_min_length(min)
            }
            Directive::ShorterThan(n) => {
                if n <= 0 {
                    return Err(length_error(phrase, "max_length would be negative"));
                }
                filters.with_max_length(n - 1)
            }
            Directive::AtLeast(n) => filters.with_min_length(n),
            Directive::AtMost(n) => filters.with_max_length(n),
            Directive::Contains(c) => filters.with_contains_character(c),
        };
        Ok(filters)
    }
}

fn length_error(phrase: &str, reason: &str) -> SiftError {
    SiftError::InvalidLengthConstraint {
        phrase: phrase.to_string(),
        reason: reason.to_string(),
    }
}

struct Rule {
    name: &'static str,
    matcher: Matcher,
}

enum Matcher {
    /// Leftmost word-aligned occurrence of the phrase.
    Phrase(fn(&str) -> IResult<&str, Directive>),
    /// Searches the whole text itself.
    Scan(fn(&str) -> Option<(&str, Directive)>),
}

impl Matcher {
    fn scan<'t>(&self, text: &'t str) -> Option<(&'t str, Directive)> {
        match self {
            Matcher::Phrase(phrase) => find_phrase(text, *phrase),
            Matcher::Scan(scan) => scan(text),
        }
    }
}

/// Evaluation order is significant: later rules overwrite earlier ones.
const RULES: [Rule; 11] = [
    Rule {
        name: "single_word_palindrome",
        matcher: Matcher::Phrase(single_word_palindrome),
    },
    Rule {
        name: "palindrome",
        matcher: Matcher::Phrase(palindrome),
    },
    Rule {
        name: "single_word",
        matcher: Matcher::Phrase(single_word),
    },
    Rule {
        name: "numeral_words",
        matcher: Matcher::Phrase(numeral_words),
    },
    Rule {
        name: "spelled_words",
        matcher: Matcher::Scan(spelled_words),
    },
    Rule {
        name: "longer_than",
        matcher: Matcher::Phrase(longer_than),
    },
    Rule {
        name: "shorter_than",
        matcher: Matcher::Phrase(shorter_than),
    },
    Rule {
        name: "at_least",
        matcher: Matcher::Phrase(at_least),
    },
    Rule {
        name: "at_most",
        matcher: Matcher::Phrase(at_most),
    },
    Rule {
        name: "contains_letter",
        matcher: Matcher::Phrase(contains_letter),
    },
    Rule {
        name: "ordinal_vowel",
        matcher: Matcher::Phrase(ordinal_vowel),
    },
];

fn single_word_palindrome(input: &str) -> IResult<&str, Directive> {
    value(
        Directive::SingleWordPalindrome,
        tuple((keyword("single"), space, keyword("word"), space, palindrome_word)),
    )(input)
}

fn palindrome(input: &str) -> IResult<&str, Directive> {
    value(Directive::Palindrome, palindrome_word)(input)
}

fn single_word(input: &str) -> IResult<&str, Directive> {
    value(
        Directive::WordCount(1),
        tuple((keyword("single"), space, keyword("word"))),
    )(input)
}

fn numeral_words(input: &str) -> IResult<&str, Directive> {
    map(terminated(number, pair(space, words)), Directive::WordCount)(input)
}

/// Spelled counts are tried in numeric order, so the lowest one present
/// wins regardless of where it sits in the query.
fn spelled_words(text: &str) -> Option<(&str, Directive)> {
    SPELLED_NUMBERS.iter().find_map(|&(word, n)| {
        find_phrase(text, terminated(keyword(word), pair(space, words)))
            .map(|(phrase, _)| (phrase, Directive::WordCount(n)))
    })
}

fn longer_than(input: &str) -> IResult<&str, Directive> {
    map(
        length_phrase(keyword("longer"), keyword("than")),
        Directive::LongerThan,
    )(input)
}

fn shorter_than(input: &str) -> IResult<&str, Directive> {
    map(
        length_phrase(keyword("shorter"), keyword("than")),
        Directive::ShorterThan,
    )(input)
}

fn at_least(input: &str) -> IResult<&str, Directive> {
    map(length_phrase(keyword("at"), keyword("least")), Directive::AtLeast)(input)
}

fn at_most(input: &str) -> IResult<&str, Directive> {
    map(length_phrase(keyword("at"), keyword("most")), Directive::AtMost)(input)
}

fn contains_letter(input: &str) -> IResult<&str, Directive> {
    let (input, _) = alt((keyword("containing"), keyword("contains"), keyword("contain")))(input)?;
    let (input, _) = space(input)?;
    let (input, _) = opt(pair(keyword("the"), space))(input)?;
    let (input, _) = alt((keyword("letter"), keyword("character")))(input)?;
    let (input, _) = space(input)?;
    map(
        terminated(satisfy(|c| c.is_ascii_lowercase()), word_end),
        Directive::Contains,
    )(input)
}

fn ordinal_vowel(input: &str) -> IResult<&str, Directive> {
    map(
        terminated(
            alt((
                value('a', keyword("first")),
                value('e', keyword("second")),
                value('i', keyword("third")),
                value('o', keyword("fourth")),
                value('u', keyword("fifth")),
            )),
            pair(space, keyword("vowel")),
        ),
        Directive::Contains,
    )(input)
}

// ============================================================================
// Shared phrase pieces
// ============================================================================

/// `<first> <second> N character(s)`
fn length_phrase<'a>(
    first: impl FnMut(&'a str) -> IResult<&'a str, &'a str>,
    second: impl FnMut(&'a str) -> IResult<&'a str, &'a str>,
) -> impl FnMut(&'a str) -> IResult<&'a str, i64> {
    preceded(
        tuple((first, space, second, space)),
        terminated(number, pair(space, characters)),
    )
}

fn palindrome_word(input: &str) -> IResult<&str, &str> {
    alt((
        keyword("palindromes"),
        keyword("palindromic"),
        keyword("palindrome"),
    ))(input)
}

fn words(input: &str) -> IResult<&str, &str> {
    alt((keyword("words"), keyword("word")))(input)
}

fn characters(input: &str) -> IResult<&str, &str> {
    alt((keyword("characters"), keyword("character")))(input)
}

/// Digits that fit in an `i64`; longer runs do not match.
fn number(input: &str) -> IResult<&str, i64> {
    map_res(digit1, str::parse::<i64>)(input)
}

const SPELLED_NUMBERS: [(&str, i64); 10] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// One or more Unicode whitespace characters.
fn space(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

/// A literal that must end on a word boundary.
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(word), word_end)
}

fn word_end(input: &str) -> IResult<&str, ()> {
    not(satisfy(is_word_char))(input)
}

// ============================================================================
// Scanning
// ============================================================================

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_start(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .map_or(true, |prev| !is_word_char(prev))
}

/// Finds the leftmost word-aligned position where `matcher` succeeds.
///
/// Returns the matched phrase together with the matcher's output.
fn find_phrase<'t, O>(
    text: &'t str,
    mut matcher: impl FnMut(&'t str) -> IResult<&'t str, O>,
) -> Option<(&'t str, O)> {
    text.char_indices()
        .filter(|&(index, _)| is_word_start(text, index))
        .find_map(|(index, _)| {
            let candidate = &text[index..];
            let (rest, output) = matcher(candidate).ok()?;
            Some((&candidate[..candidate.len() - rest.len()], output))
        })
}

// ============================================================================
// Tests
// ============================================================================
