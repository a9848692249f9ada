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

use std::num::ParseIntError;

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Errors returned by [`crate::metadata::codec::decode`] when a metadata blob
/// is malformed. Never produced by the bundled default table; only reachable
/// when callers supply their own bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetadataDecodeError {
    #[error("metadata blob ended before the header/index could be read")]
    UnexpectedEof,
    #[error("entry count {0} is outside the allowed range 1..=1000")]
    InvalidEntryCount(u16),
    #[error("symbol {0} is not a valid 5-bit code")]
    InvalidSymbol(u8),
    #[error("record ran past its declared length without a terminator symbol")]
    UnterminatedRecord,
}

/// Errors surfaced by [`crate::phonenumberutil::PhoneNumberUtil::parse`] and
/// its variants.
#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    #[error("Too short after IDD")]
    TooShortAfterIdd,
    #[error("Too short NSN")]
    TooShortNsn,
    #[error("Too long NSN")]
    TooLongNsn,
}

#[derive(Debug, PartialEq, Error)]
pub enum NotANumberError {
    #[error("number did not match a valid number pattern")]
    NotMatchedValidNumberPattern,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
}

/// Internal parse-pipeline error, additionally carrying regex-cache failures
/// that should never occur against a well-formed metadata table.
#[derive(Debug, PartialEq, Error)]
pub enum ParseErrorInternal {
    #[error("{0}")]
    FailedToParse(#[from] ParseError),
    #[error("{0}")]
    RegexError(#[from] InvalidRegexError),
}

impl ParseErrorInternal {
    /// Collapses the internal error down to the public surface. Panics if a
    /// regex in the metadata table failed to compile: every pattern shipped
    /// with a metadata table is expected to be valid, so this can only
    /// indicate a corrupt or hand-edited table.
    pub fn into_public(self) -> ParseError {
        match self {
            ParseErrorInternal::FailedToParse(err) => err,
            ParseErrorInternal::RegexError(err) => {
                panic!("a valid regex is expected in metadata; this indicates a library bug! {}", err)
            }
        }
    }
}

/// Internal error used while resolving regex-backed classification logic that
/// has no dedicated public variant (e.g. looking up descriptions for a type).
#[derive(Debug, PartialEq, Error)]
pub enum InternalLogicError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}
