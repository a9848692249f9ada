// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::consts::{DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS, STAR_SIGN, VALID_ALPHA, VALID_PUNCTUATION};

/// ITU E.161 keypad mapping (A..Z -> '2'..'9'), plus the ASCII digits mapped
/// to themselves so a single pass handles alpha and numeric phone numbers.
fn alpha_phone_mappings() -> &'static HashMap<char, char> {
    static MAP: OnceLock<HashMap<char, char>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut m = HashMap::with_capacity(36);
        for d in '0'..='9' {
            m.insert(d, d);
        }
        let rows: &[(&str, char)] = &[
            ("ABC", '2'),
            ("DEF", '3'),
            ("GHI", '4'),
            ("JKL", '5'),
            ("MNO", '6'),
            ("PQRS", '7'),
            ("TUV", '8'),
            ("WXYZ", '9'),
        ];
        for (letters, digit) in rows {
            for c in letters.chars() {
                m.insert(c, *digit);
            }
        }
        m
    })
}

/// Characters that must survive dialing unchanged.
fn diallable_char_mappings() -> &'static HashMap<char, char> {
    static MAP: OnceLock<HashMap<char, char>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut m = HashMap::with_capacity(13);
        for d in '0'..='9' {
            m.insert(d, d);
        }
        m.insert('+', '+');
        m.insert('*', '*');
        m
    })
}

fn viable_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            "(?i)^(?:[{plus}]*(?:[{punct}{star}]*[{digits}]){{3,}}[{punct}{star}{digits}{alpha}]*|[{digits}]{{{min}}})$",
            plus = PLUS_CHARS,
            punct = VALID_PUNCTUATION,
            star = STAR_SIGN,
            digits = DIGITS,
            alpha = VALID_ALPHA,
            min = MIN_LENGTH_FOR_NSN,
        );
        Regex::new(&pattern).expect("viable phone number pattern is a constant")
    })
}

fn alpha_phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("(?:.*?[A-Za-z]){3}.*").expect("constant pattern"))
}

/// Folds a single Unicode decimal digit character to its ASCII equivalent,
/// leaving non-digit characters unchanged.
fn fold_decimal_char(c: char) -> char {
    if c.is_ascii_digit() {
        return c;
    }
    let folded = dec_from_char::normalize_decimals(&c.to_string());
    folded.chars().next().unwrap_or(c)
}

/// Stateless string-cleanup operations shared by the parser and the public
/// API. Location-independent: none of these consult metadata.
pub struct Normalizer;

impl Normalizer {
    /// Cheap pre-parse gate: does `s` plausibly look like a phone number?
    pub fn is_viable_phone_number(s: &str) -> bool {
        if s.chars().count() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        viable_pattern().is_match(s)
    }

    /// Normalizes `s` for later extraction: alpha-to-digit mapping if at
    /// least three ASCII letters are present anywhere, otherwise a straight
    /// fold of Unicode decimal digits to ASCII with everything else dropped.
    pub fn normalize(s: &str) -> String {
        if alpha_phone_pattern().is_match(s) {
            let mappings = alpha_phone_mappings();
            let mut out = String::with_capacity(s.len());
            for c in s.chars() {
                if let Some(mapped) = mappings.get(&c.to_ascii_uppercase()) {
                    out.push(*mapped);
                }
            }
            out
        } else {
            Self::normalize_digits_only(s)
        }
    }

    /// Strips everything but Unicode decimal digits, folded to ASCII.
    pub fn normalize_digits_only(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if c.is_ascii_digit() {
                out.push(c);
            } else if let Some(folded) = dec_from_char::normalize_decimals(&c.to_string()).chars().next() {
                if folded.is_ascii_digit() {
                    out.push(folded);
                }
            }
        }
        out
    }

    /// Keeps only characters that must survive dialing: digits, '+', '*'.
    pub fn normalize_diallable_chars_only(s: &str) -> String {
        let mappings = diallable_char_mappings();
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            let folded = fold_decimal_char(c);
            if let Some(mapped) = mappings.get(&folded) {
                out.push(*mapped);
            }
        }
        out
    }
}
