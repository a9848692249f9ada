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

use crate::consts::{FULLWIDTH_PLUS_SIGN, MAX_LENGTH_COUNTRY_CODE, MIN_LENGTH_FOR_NSN, NEVER_MATCH_PATTERN, PLUS_SIGN};
use crate::enums::CountryCodeSource;
use crate::error::{ParseError, ParseErrorInternal};
use crate::metadata::{CallingCodeTable, PhoneMetadata};
use crate::normalizer::Normalizer;
use crate::regex_util::{RegexConsume, RegexFullMatch};
use crate::regexp_cache::RegexCache;

/// Result of [`maybe_extract_country_code`]: the resolved calling code plus,
/// when it was found, the national number text left over after removing it.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutcome {
    pub country_code: i32,
    pub national_number: String,
    pub country_code_source: Option<CountryCodeSource>,
}

fn strip_leading_plus_chars(s: &str) -> Option<&str> {
    let trimmed = s.trim_start_matches([PLUS_SIGN, FULLWIDTH_PLUS_SIGN]);
    (trimmed.len() != s.len()).then_some(trimmed)
}

/// Strips a leading plus sign or IDD prefix and normalizes what remains,
/// reporting how (if at all) it recognized an international marker.
pub fn maybe_strip_international_prefix_and_normalize(
    buf: &str,
    idd_pattern: &str,
    regex_cache: &RegexCache,
) -> Result<(String, CountryCodeSource), ParseErrorInternal> {
    if let Some(rest) = strip_leading_plus_chars(buf) {
        return Ok((Normalizer::normalize(rest), CountryCodeSource::FromNumberWithPlusSign));
    }

    let normalized = Normalizer::normalize(buf);
    let idd_regex = regex_cache.get_regex(idd_pattern)?;
    if let Some(matched) = idd_regex.find_start(&normalized) {
        let after_prefix = &normalized[matched.end()..];
        if after_prefix.starts_with('0') {
            // Country calling codes never start with '0'; this wasn't really an IDD.
            return Ok((normalized, CountryCodeSource::FromDefaultCountry));
        }
        return Ok((after_prefix.to_string(), CountryCodeSource::FromNumberWithIdd));
    }

    Ok((normalized, CountryCodeSource::FromDefaultCountry))
}

/// Tries each 1..=3 digit prefix of `full` as a calling code, returning the
/// first one present in `calling_codes` along with the remaining digits.
pub fn extract_country_code(full: &str, calling_codes: &CallingCodeTable) -> (i32, String) {
    if full.is_empty() || full.starts_with('0') {
        return (0, String::new());
    }
    let max_len = MAX_LENGTH_COUNTRY_CODE.min(full.len());
    for i in 1..=max_len {
        if let Ok(candidate) = full[..i].parse::<i32>() {
            if !calling_codes.regions_for_calling_code(candidate).is_empty() {
                return (candidate, full[i..].to_string());
            }
        }
    }
    (0, String::new())
}

/// Resolves the calling code for `input` against an (optional) default
/// region's metadata, per the four-step procedure in §4.5. `country_code`
/// is 0 in the returned outcome when no calling code could be resolved from
/// the text itself and the caller must fall back to the default region's own
/// calling code (the parser's responsibility, not this function's).
pub fn maybe_extract_country_code(
    input: &str,
    default_region_meta: Option<&PhoneMetadata>,
    keep_raw: bool,
    calling_codes: &CallingCodeTable,
    regex_cache: &RegexCache,
) -> Result<ExtractionOutcome, ParseErrorInternal> {
    let idd_pattern = default_region_meta
        .map(|m| m.international_prefix.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or(NEVER_MATCH_PATTERN);

    let (full, source) = maybe_strip_international_prefix_and_normalize(input, idd_pattern, regex_cache)?;
    let country_code_source = keep_raw.then_some(source);

    if source != CountryCodeSource::FromDefaultCountry {
        if full.chars().count() <= MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortAfterIdd.into());
        }
        let (country_code, national_number) = extract_country_code(&full, calling_codes);
        if country_code == 0 {
            return Err(ParseError::InvalidCountryCode.into());
        }
        return Ok(ExtractionOutcome {
            country_code,
            national_number,
            country_code_source,
        });
    }

    if let Some(meta) = default_region_meta {
        let dcc = meta.country_code;
        let mut itoa_buf = itoa::Buffer::new();
        let dcc_str = itoa_buf.format(dcc);
        if let Some(potential) = full.strip_prefix(dcc_str) {
            let general_desc = regex_cache.get_regex(&meta.general_desc)?;
            let general_desc_possible = regex_cache.get_regex(&meta.general_desc_possible)?;

            let full_matches_general = general_desc.full_match(&full);
            let potential_matches_general = general_desc.full_match(potential);
            let full_is_too_long = general_desc_possible
                .find_start(&full)
                .map(|m| m.end() < full.len())
                .unwrap_or(false);

            if (!full_matches_general && potential_matches_general) || full_is_too_long {
                return Ok(ExtractionOutcome {
                    country_code: dcc,
                    national_number: potential.to_string(),
                    country_code_source: keep_raw.then_some(CountryCodeSource::FromNumberWithoutPlusSign),
                });
            }
        }
    }

    Ok(ExtractionOutcome {
        country_code: 0,
        national_number: String::new(),
        country_code_source,
    })
}
