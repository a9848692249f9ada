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

/// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Hard cap on parser input length, rejected as TOO_LONG beyond this.
pub const MAX_INPUT_STRING_LENGTH: usize = 250;

pub const PLUS_SIGN: char = '+';
pub const FULLWIDTH_PLUS_SIGN: char = '\u{FF0B}';
pub const STAR_SIGN: char = '*';

/// Both accepted spellings of a leading plus sign.
pub const PLUS_CHARS: &str = "+\u{FF0B}";

// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. It also includes the letter 'x' as that
// is found as a placeholder for carrier information in some phone numbers.
// Full-width variants are also present.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

pub const DIGITS: &str = r"\p{Nd}";

pub const VALID_ALPHA: &str = "a-zA-Z";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";
pub const REGION_CODE_FOR_UNKNOWN: &str = "ZZ";

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// A pattern that can never match a digit string. Used as the international
/// prefix of the default region when no default region is supplied; per the
/// design notes this must not accidentally match any digit string.
pub const NEVER_MATCH_PATTERN: &str = "[^\\s\\S]";
