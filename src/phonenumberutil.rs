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

use std::sync::OnceLock;

use crate::classifier::Classifier;
use crate::consts::REGION_CODE_FOR_UNKNOWN;
use crate::enums::{PhoneNumberType, ValidationResult};
use crate::error::{MetadataDecodeError, ParseError};
use crate::metadata::{CallingCodeTable, MetadataStore};
use crate::normalizer::Normalizer;
use crate::parser::Parser;
use crate::phone_number::PhoneNumber;
use crate::regexp_cache::RegexCache;

/// Top-level facade wiring the Normalizer, MetadataStore, CountryCodeExtractor
/// (`calling_code`), Parser and Classifier together. Owns no global state;
/// every method borrows its own collaborators for the duration of the call.
pub struct PhoneNumberUtil {
    metadata_store: MetadataStore,
    calling_codes: CallingCodeTable,
    regex_cache: RegexCache,
}

impl PhoneNumberUtil {
    /// Decodes `metadata_bytes` (§4.3 wire format) and pairs it with an
    /// externally supplied calling-code table. The only fallible
    /// construction path; everything after this is infallible lookups.
    pub fn new_with_metadata(metadata_bytes: &[u8], calling_codes: CallingCodeTable) -> Result<Self, MetadataDecodeError> {
        Ok(Self {
            metadata_store: MetadataStore::from_bytes(metadata_bytes)?,
            calling_codes,
            regex_cache: RegexCache::default(),
        })
    }

    fn parser(&self) -> Parser<'_> {
        Parser {
            metadata_store: &self.metadata_store,
            calling_codes: &self.calling_codes,
            regex_cache: &self.regex_cache,
        }
    }

    fn classifier(&self) -> Classifier<'_> {
        Classifier {
            metadata_store: &self.metadata_store,
            calling_codes: &self.calling_codes,
            regex_cache: &self.regex_cache,
        }
    }

    pub fn parse(&self, text: &str, default_region: Option<&str>) -> Result<PhoneNumber, ParseError> {
        self.parser().parse(text, default_region, false).map_err(|e| e.into_public())
    }

    pub fn parse_and_keep_raw(&self, text: &str, default_region: Option<&str>) -> Result<PhoneNumber, ParseError> {
        self.parser().parse(text, default_region, true).map_err(|e| e.into_public())
    }

    pub fn is_viable_phone_number(&self, text: &str) -> bool {
        Normalizer::is_viable_phone_number(text)
    }

    pub fn normalize(&self, text: &str) -> String {
        Normalizer::normalize(text)
    }

    pub fn normalize_digits_only(&self, text: &str) -> String {
        Normalizer::normalize_digits_only(text)
    }

    pub fn normalize_diallable(&self, text: &str) -> String {
        Normalizer::normalize_diallable_chars_only(text)
    }

    pub fn get_number_type(&self, pn: &PhoneNumber) -> PhoneNumberType {
        self.classifier().number_type(pn)
    }

    pub fn is_valid_number(&self, pn: &PhoneNumber) -> bool {
        self.classifier().is_valid_number(pn)
    }

    pub fn is_valid_number_for_region(&self, pn: &PhoneNumber, region: &str) -> bool {
        self.classifier().is_valid_number_for_region(pn, region)
    }

    pub fn is_possible_number(&self, pn: &PhoneNumber) -> bool {
        self.classifier().is_possible_number(pn)
    }

    pub fn is_possible_number_with_reason(&self, pn: &PhoneNumber) -> ValidationResult {
        self.classifier().is_possible_number_with_reason(pn)
    }

    /// Convenience form: parses `text` against `region` and tests
    /// possibility; a parse failure is reported as simply not possible.
    pub fn is_possible_number_text(&self, text: &str, region: &str) -> bool {
        match self.parser().parse(text, Some(region), false) {
            Ok(pn) => self.is_possible_number(&pn),
            Err(_) => false,
        }
    }

    pub fn get_region_code_for_number(&self, pn: &PhoneNumber) -> Option<&'static str> {
        self.classifier().region_code_for_number(pn)
    }

    /// Returns `"ZZ"` (unknown) if `calling_code` has no main region.
    pub fn get_region_code_for_country_code(&self, calling_code: i32) -> &'static str {
        self.calling_codes
            .main_region_for_calling_code(calling_code)
            .unwrap_or(REGION_CODE_FOR_UNKNOWN)
    }

    pub fn get_region_codes_for_country_code(&self, calling_code: i32) -> &[&'static str] {
        self.calling_codes.regions_for_calling_code(calling_code)
    }

    /// Returns 0 (and logs) if `region` is not in the calling-code table.
    pub fn get_country_code_for_region(&self, region: &str) -> i32 {
        self.calling_codes.calling_code_for_region(region).unwrap_or_else(|| {
            log::info!("no calling code known for region {region}");
            0
        })
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.calling_codes.supported_regions()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.calling_codes.supported_global_network_calling_codes()
    }

    pub fn get_national_significant_number(&self, pn: &PhoneNumber) -> String {
        self.classifier().national_significant_number(pn)
    }
}

static DEFAULT_UTIL: OnceLock<PhoneNumberUtil> = OnceLock::new();

/// Process-wide convenience default, built from the bundled demo metadata
/// table on first access. Mirrors the lineage's process-wide singleton, but
/// callers are never forced through it — `new_with_metadata` remains the
/// primary entry point for anyone supplying their own metadata.
pub fn default_util() -> &'static PhoneNumberUtil {
    DEFAULT_UTIL.get_or_init(|| {
        let bytes = crate::metadata::default::build_demo_metadata_bytes();
        PhoneNumberUtil::new_with_metadata(&bytes, crate::metadata::default::demo_calling_code_table())
            .expect("bundled demo metadata table must be well-formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CountryCodeSource;

    fn util() -> PhoneNumberUtil {
        let bytes = crate::metadata::default::build_demo_metadata_bytes();
        PhoneNumberUtil::new_with_metadata(&bytes, crate::metadata::default::demo_calling_code_table()).unwrap()
    }

    #[test]
    fn parses_and_classifies_us_number() {
        let util = util();
        let pn = util.parse("+1 650 253 0000", Some("US")).unwrap();
        assert_eq!(pn.country_code, 1);
        assert_eq!(pn.national_number, 6502530000);
        assert_eq!(util.get_number_type(&pn), PhoneNumberType::FixedLineOrMobile);
        assert!(util.is_valid_number(&pn));
        assert_eq!(util.get_region_code_for_number(&pn), Some("US"));
    }

    #[test]
    fn parses_gb_toll_free_number() {
        let util = util();
        let pn = util.parse("0800 123 456", Some("GB")).unwrap();
        assert_eq!(pn.country_code, 44);
        assert_eq!(util.get_number_type(&pn), PhoneNumberType::TollFree);
    }

    #[test]
    fn parses_it_number_with_plus_and_zz_default() {
        let util = util();
        let pn = util.parse("+390236618300", Some("ZZ")).unwrap();
        assert_eq!(pn.country_code, 39);
        assert_eq!(pn.national_number, 236618300);
        assert_eq!(util.get_region_code_for_number(&pn), Some("IT"));
    }

    #[test]
    fn bare_plus_is_not_a_number() {
        let util = util();
        assert!(util.parse("+", Some("US")).is_err());
    }

    #[test]
    fn unknown_calling_code_is_rejected() {
        let util = util();
        let err = util.parse("+999 12345", Some("US")).unwrap_err();
        assert_eq!(err, ParseError::InvalidCountryCode);
    }

    #[test]
    fn keeps_raw_input_and_plus_sign_source() {
        let util = util();
        let pn = util.parse_and_keep_raw("+1 650 253 0000", Some("US")).unwrap();
        assert_eq!(pn.raw_input.as_deref(), Some("+1 650 253 0000"));
        assert_eq!(pn.country_code_source, Some(CountryCodeSource::FromNumberWithPlusSign));
    }

    #[test]
    fn normalizes_alpha_numbers() {
        let util = util();
        assert_eq!(util.normalize("1-800-FLOWERS"), "18003569377");
    }

    #[test]
    fn overly_long_number_is_not_possible() {
        let util = util();
        let pn = util.parse("650253000000000000000", Some("US")).unwrap_err();
        assert_eq!(pn, ParseError::TooLongNsn);
    }

    #[test]
    fn region_and_country_code_round_trip_for_main_regions() {
        let util = util();
        for region in ["US", "GB", "CH", "IT"] {
            let cc = util.get_country_code_for_region(region);
            assert_eq!(util.get_region_code_for_country_code(cc), region);
        }
    }

    #[test]
    fn global_network_calling_codes_include_toll_free_800() {
        let util = util();
        let codes: Vec<_> = util.get_supported_global_network_calling_codes().collect();
        assert!(codes.contains(&800));
    }
}
