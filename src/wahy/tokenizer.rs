//! Line tokenizer for Wahy source
//!
//! Splits one raw line into a keyword phrase and its arguments:
//! 1. Blank lines and `#` comment lines yield nothing.
//! 2. Quoted literals are masked by a placeholder so their internal
//!    whitespace survives word-splitting, then restored as single arguments
//!    in order of first occurrence.
//! 3. Phrase length is picked by an ordered rule table; rules are tried in
//!    declaration order and the first that applies wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// One recognized command line: the keyword phrase plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub phrase: String,
    pub args: Vec<String>,
}

/// Object nouns that bind the first two words into a phrase when found in
/// second position (page, heading, paragraph, link, image, item).
const OBJECT_NOUNS: &[&str] = &["صفحة", "عنوان", "فقرة", "رابط", "صورة", "عنصر"];

/// The verb introducing a three-word style command (change … to).
const CHANGE_VERB: &str = "غيّر";

/// Verbs that open or close a structural block (start, end).
const BOUNDARY_VERBS: &[&str] = &["ابدأ", "أنهِ"];

/// Phrase-length selection rules.
/// Order matters: a later rule only applies when every earlier rule declined.
#[derive(Debug, Clone, Copy)]
enum PhraseRule {
    /// Second word is an object noun: phrase = first two words.
    ObjectNoun(&'static [&'static str]),
    /// First word is the change verb and at least three words exist:
    /// phrase = first three words.
    ChangeVerb(&'static str),
    /// First word opens or closes a block: phrase = first two words when a
    /// second word exists, otherwise the verb alone.
    BoundaryVerb(&'static [&'static str]),
    /// Fallback: phrase = first word.
    SingleWord,
}

const PHRASE_RULES: &[PhraseRule] = &[
    PhraseRule::ObjectNoun(OBJECT_NOUNS),
    PhraseRule::ChangeVerb(CHANGE_VERB),
    PhraseRule::BoundaryVerb(BOUNDARY_VERBS),
    PhraseRule::SingleWord,
];

impl PhraseRule {
    /// Number of leading words this rule claims for the phrase, if it applies.
    fn phrase_len(&self, words: &[String]) -> Option<usize> {
        match self {
            PhraseRule::ObjectNoun(nouns) => {
                (words.len() >= 2 && nouns.contains(&words[1].as_str())).then_some(2)
            }
            PhraseRule::ChangeVerb(verb) => (words.len() >= 3 && words[0] == *verb).then_some(3),
            PhraseRule::BoundaryVerb(verbs) => verbs
                .contains(&words[0].as_str())
                .then(|| if words.len() >= 2 { 2 } else { 1 }),
            PhraseRule::SingleWord => Some(1),
        }
    }
}

/// Lazy-compiled regex matching one quoted literal (no escape processing).
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Placeholder standing in for a quoted literal during word-splitting.
const QUOTE_MARK: &str = "___QUOTED___";

/// Tokenize one source line.
///
/// Returns `None` for blank lines and comment lines; otherwise the phrase
/// and argument split described in the module docs. Unknown phrases are not
/// rejected here — that is the registry's call.
pub fn tokenize(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let literals: Vec<String> = QUOTED
        .captures_iter(line)
        .map(|cap| cap[1].to_string())
        .collect();
    let masked = QUOTED.replace_all(line, QUOTE_MARK);

    // Restore literals in order of first occurrence; a surplus placeholder
    // restores to the empty string.
    let mut literals = literals.into_iter();
    let words: Vec<String> = masked
        .split_whitespace()
        .map(|word| {
            if word == QUOTE_MARK {
                literals.next().unwrap_or_default()
            } else {
                word.to_string()
            }
        })
        .collect();

    if words.is_empty() {
        return None;
    }

    let phrase_len = PHRASE_RULES
        .iter()
        .find_map(|rule| rule.phrase_len(&words))
        .unwrap_or(1);

    Some(Command {
        phrase: words[..phrase_len].join(" "),
        args: words[phrase_len..].to_vec(),
    })
}
