//! Restricted template expander for `regex` fields.
//!
//! Supported grammar:
//!
//! - `\d` one digit, `\w` one lowercase ASCII letter
//! - `[a-z]`, `[A-Z]`, `[0-9]` one character from the class
//! - `{n}` repeats the preceding unit `n` times (at most [`MAX_REPEAT`]);
//!   placeholders are drawn again for every repetition
//! - any other escape `\c` is the literal `c`
//! - the metacharacters `^ $ . * + ? ( ) [ ] { } |` and a trailing `\` are
//!   dropped when they are not part of one of the forms above
//! - everything else is copied as-is
//!
//! A `{n}` with nothing to repeat (start of the pattern, or right after a
//! dropped metacharacter) is dropped whole.

use rand::{Rng, RngCore};

pub const MAX_REPEAT: usize = 1000;

const METACHARACTERS: &[char] = &['^', '$', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Literal(char),
    Digit,
    Lower,
    Range(char, char),
}

impl Unit {
    fn draw(self, rng: &mut dyn RngCore) -> char {
        match self {
            Unit::Literal(ch) => ch,
            Unit::Digit => rng.random_range('0'..='9'),
            Unit::Lower => rng.random_range('a'..='z'),
            Unit::Range(low, high) => rng.random_range(low..=high),
        }
    }
}

/// A parsed pattern, ready to be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTemplate {
    parts: Vec<(Unit, usize)>,
}

impl PatternTemplate {
    pub fn parse(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let mut parts: Vec<(Unit, usize)> = Vec::new();
        // Whether the last thing read was a unit a `{n}` may attach to.
        let mut can_repeat = false;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            match ch {
                '\\' => {
                    i += 1;
                    match chars.get(i) {
                        Some('d') => parts.push((Unit::Digit, 1)),
                        Some('w') => parts.push((Unit::Lower, 1)),
                        Some(&other) => parts.push((Unit::Literal(other), 1)),
                        None => {
                            can_repeat = false;
                            continue;
                        }
                    }
                    can_repeat = true;
                    i += 1;
                }
                '[' => match class_at(&chars, i) {
                    Some(unit) => {
                        parts.push((unit, 1));
                        can_repeat = true;
                        i += 5;
                    }
                    None => {
                        can_repeat = false;
                        i += 1;
                    }
                },
                '{' => match repeat_at(&chars, i) {
                    Some((count, width)) => {
                        if can_repeat {
                            if let Some(last) = parts.last_mut() {
                                last.1 = count.min(MAX_REPEAT);
                            }
                        }
                        can_repeat = false;
                        i += width;
                    }
                    None => {
                        can_repeat = false;
                        i += 1;
                    }
                },
                ch if METACHARACTERS.contains(&ch) => {
                    can_repeat = false;
                    i += 1;
                }
                ch => {
                    parts.push((Unit::Literal(ch), 1));
                    can_repeat = true;
                    i += 1;
                }
            }
        }

        Self { parts }
    }

    pub fn render(&self, rng: &mut dyn RngCore) -> String {
        let mut out = String::new();
        for &(unit, count) in &self.parts {
            for _ in 0..count {
                out.push(unit.draw(rng));
            }
        }
        out
    }
}

/// Parse `pattern` and render it once.
pub fn expand(pattern: &str, rng: &mut dyn RngCore) -> String {
    PatternTemplate::parse(pattern).render(rng)
}

/// `[a-z]`, `[A-Z]` or `[0-9]` starting at `start`.
fn class_at(chars: &[char], start: usize) -> Option<Unit> {
    let window = chars.get(start..start + 5)?;
    match window {
        ['[', 'a', '-', 'z', ']'] => Some(Unit::Range('a', 'z')),
        ['[', 'A', '-', 'Z', ']'] => Some(Unit::Range('A', 'Z')),
        ['[', '0', '-', '9', ']'] => Some(Unit::Range('0', '9')),
        _ => None,
    }
}

/// `{n}` starting at `start`: the count and the number of chars consumed.
fn repeat_at(chars: &[char], start: usize) -> Option<(usize, usize)> {
    let digits: String = chars[start + 1..]
        .iter()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let close = start + 1 + digits.len();
    if chars.get(close) != Some(&'}') {
        return None;
    }
    // Counts too large for usize are capped like any other large count.
    let count = digits.parse::<usize>().unwrap_or(MAX_REPEAT);
    Some((count, digits.len() + 2))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn literals_are_copied() {
        assert_eq!(expand("INV-2024", &mut rng()), "INV-2024");
    }

    #[test]
    fn repetition_applies_to_preceding_unit() {
        assert_eq!(expand("a{3}b", &mut rng()), "aaab");
        let value = expand("\\d{4}", &mut rng());
        assert_eq!(value.len(), 4);
        assert!(value.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn classes_draw_from_their_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let value = expand("[A-Z][a-z][0-9]\\w", &mut rng);
            let chars: Vec<char> = value.chars().collect();
            assert_eq!(chars.len(), 4);
            assert!(chars[0].is_ascii_uppercase());
            assert!(chars[1].is_ascii_lowercase());
            assert!(chars[2].is_ascii_digit());
            assert!(chars[3].is_ascii_lowercase());
        }
    }

    #[test]
    fn metacharacters_are_dropped() {
        assert_eq!(expand("^(ab|c)+.$", &mut rng()), "abc");
        assert_eq!(expand("[x-y]", &mut rng()), "x-y");
    }

    #[test]
    fn escapes_produce_literals() {
        assert_eq!(expand("a\\.b\\-c\\\\", &mut rng()), "a.b-c\\");
        assert_eq!(expand("end\\", &mut rng()), "end");
    }

    #[test]
    fn unattached_repeat_is_dropped() {
        assert_eq!(expand("{3}x", &mut rng()), "x");
        assert_eq!(expand("a+{2}", &mut rng()), "a");
        assert_eq!(expand("a{x}", &mut rng()), "ax");
    }

    #[test]
    fn repeat_is_capped() {
        let value = expand("z{5000}", &mut rng());
        assert_eq!(value.len(), MAX_REPEAT);
    }
}
