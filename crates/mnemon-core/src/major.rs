//! The major system: phonetic digit encoding and the word lexicon.
//!
//! Each decimal digit stands for a family of consonant sounds; a number
//! is memorized as a word whose consonant sounds spell the number. The
//! lexicon below is indexed by each word's *derived* encoding, so a word
//! can never be filed under a number it does not encode.

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::prelude::IteratorRandom;

/// Consonant sounds for each digit, per the classic convention.
pub const DIGIT_SOUNDS: [(char, &str); 10] = [
    ('0', "s, z, soft c"),
    ('1', "t, d, th"),
    ('2', "n"),
    ('3', "m"),
    ('4', "r"),
    ('5', "l"),
    ('6', "j, sh, ch, soft g"),
    ('7', "k, q, hard c, hard g"),
    ('8', "f, v, ph"),
    ('9', "p, b"),
];

/// A lexicon word plus its part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub is_noun: bool,
}

/// Derive the digit string a word encodes, from its spelling.
///
/// Rules: the digraphs ck, sh, ch, th and ph are read as one sound; c and
/// g soften before e, i or y; vowels and w, h, y carry no value; adjacent
/// repeated letters count once. Returns `None` when no letter carries a
/// value.
pub fn encode(word: &str) -> Option<String> {
    let chars: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    let mut digits = String::new();
    let mut prev: Option<char> = None;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // doubled letters carry one sound
        if prev == Some(c) {
            i += 1;
            continue;
        }
        prev = Some(c);
        let next = chars.get(i + 1).copied();

        if let Some(n) = next {
            let digraph = match (c, n) {
                ('c', 'k') => Some('7'),
                ('s', 'h') | ('c', 'h') => Some('6'),
                ('t', 'h') => Some('1'),
                ('p', 'h') => Some('8'),
                _ => None,
            };
            if let Some(d) = digraph {
                digits.push(d);
                prev = Some(n);
                i += 2;
                continue;
            }
        }

        let digit = match c {
            's' | 'z' => Some('0'),
            't' | 'd' => Some('1'),
            'n' => Some('2'),
            'm' => Some('3'),
            'r' => Some('4'),
            'l' => Some('5'),
            'j' => Some('6'),
            'k' | 'q' => Some('7'),
            'f' | 'v' => Some('8'),
            'p' | 'b' => Some('9'),
            'c' => Some(if matches!(next, Some('e' | 'i' | 'y')) {
                '0'
            } else {
                '7'
            }),
            'g' => Some(if matches!(next, Some('e' | 'i' | 'y')) {
                '6'
            } else {
                '7'
            }),
            // vowels, w, h, y
            _ => None,
        };
        if let Some(d) = digit {
            digits.push(d);
        }
        i += 1;
    }

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// All words encoding exactly `number`, optionally nouns only.
///
/// Unknown numbers yield an empty list, never an error. The underlying
/// index is built once and never mutated, so repeated calls agree.
pub fn lookup(number: &str, nouns_only: bool) -> Vec<WordEntry> {
    index()
        .get(number)
        .map(|entries| {
            entries
                .iter()
                .copied()
                .filter(|e| !nouns_only || e.is_noun)
                .collect()
        })
        .unwrap_or_default()
}

/// Pick a random 1-2 digit number that has at least one matching word.
pub fn quiz_number(nouns_only: bool) -> Option<String> {
    index()
        .keys()
        .filter(|n| n.len() <= 2 && !lookup(n, nouns_only).is_empty())
        .choose(&mut rand::rng())
        .cloned()
}

/// Case-insensitive, trimmed membership check for quiz answers.
pub fn check_guess(number: &str, guess: &str, nouns_only: bool) -> bool {
    let guess = guess.trim();
    lookup(number, nouns_only)
        .iter()
        .any(|e| e.word.eq_ignore_ascii_case(guess))
}

/// A short description of the system, shown by `--explain`.
pub fn explain() -> &'static str {
    "The major system turns numbers into words. Each digit stands for a\n\
     family of consonant sounds:\n\
     \n\
     \x20 0 = s, z          5 = l\n\
     \x20 1 = t, d, th      6 = j, sh, ch, soft g\n\
     \x20 2 = n             7 = k, q, hard c, hard g\n\
     \x20 3 = m             8 = f, v, ph\n\
     \x20 4 = r             9 = p, b\n\
     \n\
     Vowels and w, h, y carry no value, so you can weave them in freely:\n\
     42 is r-n, which could be \"rain\" or \"horn\". To memorize a long\n\
     number, break it into pairs and chain the words into a story."
}

fn index() -> &'static HashMap<String, Vec<WordEntry>> {
    static INDEX: OnceLock<HashMap<String, Vec<WordEntry>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map: HashMap<String, Vec<WordEntry>> = HashMap::new();
        for &(word, is_noun) in LEXICON {
            match encode(word) {
                Some(digits) => map
                    .entry(digits)
                    .or_default()
                    .push(WordEntry { word, is_noun }),
                None => tracing::warn!("lexicon word {word:?} has no consonant value"),
            }
        }
        map
    })
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

// Grouped by the number the words encode; the index re-derives every
// encoding at load, so a word filed in the wrong group still lands in the
// right bucket.
const LEXICON: &[(&str, bool)] = &[
    // 0..9
    ("sea", true),
    ("zoo", true),
    ("ice", true),
    ("hose", true),
    ("tea", true),
    ("day", true),
    ("toe", true),
    ("hat", true),
    ("hen", true),
    ("inn", true),
    ("wine", true),
    ("ma", true),
    ("home", true),
    ("ham", true),
    ("emu", true),
    ("rye", true),
    ("ear", true),
    ("hero", true),
    ("arrow", true),
    ("law", true),
    ("oil", true),
    ("owl", true),
    ("hill", true),
    ("ale", true),
    ("shoe", true),
    ("jaw", true),
    ("ash", true),
    ("chew", false),
    ("key", true),
    ("cow", true),
    ("oak", true),
    ("ego", true),
    ("hawk", true),
    ("fee", true),
    ("hive", true),
    ("ivy", true),
    ("wave", true),
    ("bee", true),
    ("pie", true),
    ("ape", true),
    ("boy", true),
    ("web", true),
    // 00..09
    ("sauce", true),
    ("seas", true),
    ("zeus", true),
    ("seed", true),
    ("suit", true),
    ("sod", true),
    ("sun", true),
    ("swan", true),
    ("snow", true),
    ("sumo", true),
    ("seam", true),
    ("zoom", false),
    ("sierra", true),
    ("sewer", true),
    ("soar", false),
    ("seal", true),
    ("sail", true),
    ("soul", true),
    ("sash", true),
    ("sage", true),
    ("sock", true),
    ("ski", true),
    ("sky", true),
    ("safe", true),
    ("sofa", true),
    ("soap", true),
    ("sub", true),
    ("spy", true),
    // 10..19
    ("dice", true),
    ("daisy", true),
    ("dizzy", false),
    ("dad", true),
    ("tot", true),
    ("date", true),
    ("tooth", true),
    ("tin", true),
    ("dune", true),
    ("twin", true),
    ("dam", true),
    ("team", true),
    ("dome", true),
    ("tire", true),
    ("deer", true),
    ("door", true),
    ("tail", true),
    ("doll", true),
    ("towel", true),
    ("dish", true),
    ("teach", false),
    ("dog", true),
    ("duck", true),
    ("tack", true),
    ("dove", true),
    ("dive", false),
    ("taffy", true),
    ("tub", true),
    ("tape", true),
    ("tuba", true),
    // 20..29
    ("nose", true),
    ("nice", false),
    ("net", true),
    ("note", true),
    ("window", true),
    ("nun", true),
    ("onion", true),
    ("noon", true),
    ("name", true),
    ("enemy", true),
    ("honor", true),
    ("owner", true),
    ("winery", true),
    ("nail", true),
    ("inhale", false),
    ("nacho", true),
    ("niche", true),
    ("neck", true),
    ("nag", false),
    ("navy", true),
    ("nephew", true),
    ("nap", true),
    ("nib", true),
    // 30..39
    ("mouse", true),
    ("moss", true),
    ("maze", true),
    ("mat", true),
    ("meat", true),
    ("maid", true),
    ("moth", true),
    ("moon", true),
    ("man", true),
    ("mine", true),
    ("mom", true),
    ("mime", true),
    ("mummy", true),
    ("mare", true),
    ("hammer", true),
    ("mower", true),
    ("mole", true),
    ("mail", true),
    ("mule", true),
    ("image", true),
    ("mush", true),
    ("mash", false),
    ("mug", true),
    ("mic", true),
    ("hammock", true),
    ("movie", true),
    ("mafia", true),
    ("map", true),
    ("mop", true),
    ("amp", true),
    // 40..49
    ("rose", true),
    ("rice", true),
    ("race", true),
    ("rat", true),
    ("road", true),
    ("radio", true),
    ("earth", true),
    ("rain", true),
    ("horn", true),
    ("wren", true),
    ("ram", true),
    ("room", true),
    ("worm", true),
    ("rower", true),
    ("aurora", true),
    ("warrior", true),
    ("rail", true),
    ("roll", true),
    ("reel", true),
    ("roach", true),
    ("rash", true),
    ("rock", true),
    ("rake", true),
    ("rug", true),
    ("roof", true),
    ("reef", true),
    ("review", true),
    ("rope", true),
    ("rib", true),
    ("harp", true),
    // 50..59
    ("lace", true),
    ("lasso", true),
    ("louse", true),
    ("lid", true),
    ("lady", true),
    ("lot", true),
    ("lion", true),
    ("line", true),
    ("lane", true),
    ("lime", true),
    ("loom", true),
    ("llama", true),
    ("lair", true),
    ("lorry", true),
    ("lawyer", true),
    ("lily", true),
    ("lull", false),
    ("leech", true),
    ("leash", true),
    ("lake", true),
    ("log", true),
    ("leg", true),
    ("leaf", true),
    ("lava", true),
    ("wolf", true),
    ("lip", true),
    ("loop", true),
    ("alp", true),
    // 60..69
    ("chess", true),
    ("cheese", true),
    ("juice", true),
    ("sheet", true),
    ("jet", true),
    ("shadow", true),
    ("chin", true),
    ("chain", true),
    ("gin", true),
    ("jam", true),
    ("gym", true),
    ("chime", true),
    ("chair", true),
    ("jar", true),
    ("shower", true),
    ("jail", true),
    ("shell", true),
    ("jewel", true),
    ("shush", false),
    ("check", true),
    ("chick", true),
    ("jug", true),
    ("chef", true),
    ("chief", true),
    ("shave", false),
    ("ship", true),
    ("chip", true),
    ("jeep", true),
    // 70..79
    ("kiss", true),
    ("goose", true),
    ("gas", true),
    ("cat", true),
    ("kite", true),
    ("coat", true),
    ("coin", true),
    ("cane", true),
    ("queen", true),
    ("game", true),
    ("gum", true),
    ("cameo", true),
    ("car", true),
    ("crow", true),
    ("coal", true),
    ("glue", true),
    ("eagle", true),
    ("clay", true),
    ("cage", true),
    ("coach", true),
    ("cake", true),
    ("cook", true),
    ("kick", false),
    ("cave", true),
    ("coffee", true),
    ("cap", true),
    ("cube", true),
    ("cowboy", true),
    // 80..89
    ("face", true),
    ("vase", true),
    ("fuse", true),
    ("photo", true),
    ("foot", true),
    ("video", true),
    ("fan", true),
    ("phone", true),
    ("vine", true),
    ("foam", true),
    ("fame", true),
    ("vim", true),
    ("fire", true),
    ("fairy", true),
    ("ferry", true),
    ("file", true),
    ("fool", true),
    ("veil", true),
    ("fish", true),
    ("voyage", true),
    ("fog", true),
    ("fig", true),
    ("vogue", true),
    ("fife", true),
    ("five", false),
    ("fob", true),
    // 90..99
    ("base", true),
    ("bus", true),
    ("peso", true),
    ("bat", true),
    ("boat", true),
    ("pot", true),
    ("bone", true),
    ("pan", true),
    ("piano", true),
    ("puma", true),
    ("beam", true),
    ("poem", true),
    ("bear", true),
    ("pear", true),
    ("beer", true),
    ("ball", true),
    ("bell", true),
    ("pill", true),
    ("peach", true),
    ("beach", true),
    ("bike", true),
    ("book", true),
    ("pig", true),
    ("beef", true),
    ("puff", true),
    ("pave", false),
    ("pipe", true),
    ("baby", true),
    ("pope", true),
    ("bib", true),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_basics() {
        assert_eq!(encode("sea").as_deref(), Some("0"));
        assert_eq!(encode("rain").as_deref(), Some("42"));
        assert_eq!(encode("shoe").as_deref(), Some("6"));
        assert_eq!(encode("sock").as_deref(), Some("07"));
        assert_eq!(encode("tooth").as_deref(), Some("11"));
        assert_eq!(encode("phone").as_deref(), Some("82"));
    }

    #[test]
    fn encode_softens_c_and_g() {
        assert_eq!(encode("ice").as_deref(), Some("0"));
        assert_eq!(encode("cat").as_deref(), Some("71"));
        assert_eq!(encode("gin").as_deref(), Some("62"));
        assert_eq!(encode("dog").as_deref(), Some("17"));
    }

    #[test]
    fn encode_collapses_doubled_letters() {
        assert_eq!(encode("mummy").as_deref(), Some("33"));
        assert_eq!(encode("coffee").as_deref(), Some("78"));
        assert_eq!(encode("lasso").as_deref(), Some("50"));
    }

    #[test]
    fn encode_ignores_case_and_valueless_words() {
        assert_eq!(encode("Rain").as_deref(), Some("42"));
        assert_eq!(encode("why"), None);
        assert_eq!(encode(""), None);
    }

    #[test]
    fn every_lexicon_word_lands_in_its_derived_bucket() {
        for (number, entries) in index() {
            for entry in entries {
                assert_eq!(
                    encode(entry.word).as_deref(),
                    Some(number.as_str()),
                    "{} filed under {number}",
                    entry.word
                );
            }
        }
    }

    #[test]
    fn every_one_and_two_digit_number_is_consistent() {
        let mut numbers: Vec<String> = (0..10).map(|n| n.to_string()).collect();
        numbers.extend((0..100).map(|n| format!("{n:02}")));
        for number in &numbers {
            for entry in lookup(number, false) {
                assert_eq!(encode(entry.word).as_deref(), Some(number.as_str()));
            }
        }
    }

    #[test]
    fn lookup_zero_has_s_and_z_words() {
        let words: Vec<&str> = lookup("0", false).iter().map(|e| e.word).collect();
        assert!(words.contains(&"sea"));
        assert!(words.contains(&"zoo"));
    }

    #[test]
    fn lookup_unknown_number_is_empty() {
        assert!(lookup("555", false).is_empty());
        assert!(lookup("x", false).is_empty());
        assert!(lookup("", false).is_empty());
    }

    #[test]
    fn nouns_are_a_subset() {
        let mut numbers: Vec<String> = (0..10).map(|n| n.to_string()).collect();
        numbers.extend((0..100).map(|n| format!("{n:02}")));
        for number in &numbers {
            let all = lookup(number, false);
            let nouns = lookup(number, true);
            assert!(nouns.len() <= all.len());
            for entry in &nouns {
                assert!(entry.is_noun);
                assert!(all.contains(entry));
            }
        }
    }

    #[test]
    fn nouns_filter_actually_filters() {
        // "dizzy" is tagged as a non-noun under 10
        let all: Vec<&str> = lookup("10", false).iter().map(|e| e.word).collect();
        let nouns: Vec<&str> = lookup("10", true).iter().map(|e| e.word).collect();
        assert!(all.contains(&"dizzy"));
        assert!(!nouns.contains(&"dizzy"));
        assert!(nouns.contains(&"dice"));
    }

    #[test]
    fn lookup_is_idempotent() {
        assert_eq!(lookup("42", false), lookup("42", false));
        assert_eq!(lookup("42", true), lookup("42", true));
    }

    #[test]
    fn quiz_number_always_has_words() {
        for _ in 0..50 {
            let number = quiz_number(true).expect("lexicon is non-empty");
            assert!(number.len() <= 2);
            assert!(!lookup(&number, true).is_empty());
        }
    }

    #[test]
    fn check_guess_is_case_insensitive() {
        assert!(check_guess("42", "Rain", false));
        assert!(check_guess("42", "  horn  ", false));
        assert!(!check_guess("42", "sea", false));
    }

    #[test]
    fn digit_sounds_cover_all_digits() {
        let digits: Vec<char> = DIGIT_SOUNDS.iter().map(|(d, _)| *d).collect();
        assert_eq!(digits, ('0'..='9').collect::<Vec<_>>());
    }
}
