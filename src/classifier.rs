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

use crate::consts::REGION_CODE_FOR_NON_GEO_ENTITY;
use crate::enums::{PhoneNumberType, ValidationResult};
use crate::error::InternalLogicError;
use crate::metadata::{CallingCodeTable, MetadataStore, PhoneMetadata};
use crate::phone_number::PhoneNumber;
use crate::regex_util::{RegexConsume, RegexFullMatch};
use crate::regexp_cache::RegexCache;

/// Number-type decision, region disambiguation, and validity/possibility
/// checks (§4.7). Like [`crate::parser::Parser`], borrows its collaborators
/// rather than owning them.
pub struct Classifier<'a> {
    pub metadata_store: &'a MetadataStore,
    pub calling_codes: &'a CallingCodeTable,
    pub regex_cache: &'a RegexCache,
}

impl<'a> Classifier<'a> {
    /// Reconstructs the national significant number as a decimal string.
    /// Leading zeros are reinserted only when `italian_leading_zero` is set;
    /// `national_number` alone can't carry them.
    pub fn national_significant_number(&self, pn: &PhoneNumber) -> String {
        let zeros = if pn.italian_leading_zero {
            pn.leading_zeros_to_apply().max(0) as usize
        } else {
            0
        };
        format!("{}{}", "0".repeat(zeros), pn.national_number)
    }

    fn metadata_for_region_or_non_geo(&self, region: &str, calling_code: i32) -> Option<PhoneMetadata> {
        if region == REGION_CODE_FOR_NON_GEO_ENTITY {
            self.metadata_store.get_metadata_for_non_geographical_region(calling_code)
        } else {
            self.metadata_store.get_metadata_for_region(region)
        }
    }

    fn type_test(&self, meta: &PhoneMetadata, nsn: &str) -> Result<PhoneNumberType, InternalLogicError> {
        let general_desc = self.regex_cache.get_regex(&meta.general_desc)?;
        if !general_desc.full_match(nsn) {
            return Ok(PhoneNumberType::Unknown);
        }

        let specific_tests: [(&str, PhoneNumberType); 8] = [
            (meta.premium_rate.as_str(), PhoneNumberType::PremiumRate),
            (meta.toll_free.as_str(), PhoneNumberType::TollFree),
            (meta.shared_cost.as_str(), PhoneNumberType::SharedCost),
            (meta.voip.as_str(), PhoneNumberType::VoIP),
            (meta.personal_number.as_str(), PhoneNumberType::PersonalNumber),
            (meta.pager.as_str(), PhoneNumberType::Pager),
            (meta.uan.as_str(), PhoneNumberType::UAN),
            (meta.voicemail.as_str(), PhoneNumberType::VoiceMail),
        ];
        for (pattern, number_type) in specific_tests {
            if pattern.is_empty() {
                continue;
            }
            if self.regex_cache.get_regex(pattern)?.full_match(nsn) {
                return Ok(number_type);
            }
        }

        let fixed_line_matches = !meta.fixed_line.is_empty() && self.regex_cache.get_regex(&meta.fixed_line)?.full_match(nsn);
        if fixed_line_matches {
            if meta.same_mobile_and_fixed_line_pattern {
                return Ok(PhoneNumberType::FixedLineOrMobile);
            }
            let mobile_matches = !meta.mobile.is_empty() && self.regex_cache.get_regex(&meta.mobile)?.full_match(nsn);
            if mobile_matches {
                return Ok(PhoneNumberType::FixedLineOrMobile);
            }
            return Ok(PhoneNumberType::FixedLine);
        }

        if !meta.same_mobile_and_fixed_line_pattern && !meta.mobile.is_empty() && self.regex_cache.get_regex(&meta.mobile)?.full_match(nsn) {
            return Ok(PhoneNumberType::Mobile);
        }

        Ok(PhoneNumberType::Unknown)
    }

    /// Resolves the region a number belongs to, disambiguating calling codes
    /// shared by several regions (e.g. NANPA's +1) via each candidate's
    /// `leading_digits` pattern, falling back to a full type test.
    pub fn region_code_for_number(&self, pn: &PhoneNumber) -> Option<&'static str> {
        let regions = self.calling_codes.regions_for_calling_code(pn.country_code);
        if regions.is_empty() {
            return None;
        }
        if regions.len() == 1 {
            return Some(regions[0]);
        }

        let nsn = self.national_significant_number(pn);
        for &region in regions {
            log::trace!("testing candidate region {region} for calling code {}", pn.country_code);
            let Some(meta) = self.metadata_for_region_or_non_geo(region, pn.country_code) else {
                continue;
            };
            if !meta.leading_digits.is_empty() {
                if let Ok(pattern) = self.regex_cache.get_regex(&meta.leading_digits) {
                    if pattern.matches_start(&nsn) {
                        return Some(region);
                    }
                }
                continue;
            }
            if matches!(self.type_test(&meta, &nsn), Ok(t) if t != PhoneNumberType::Unknown) {
                return Some(region);
            }
        }
        None
    }

    pub fn number_type(&self, pn: &PhoneNumber) -> PhoneNumberType {
        let Some(region) = self.region_code_for_number(pn) else {
            log::info!("no resolvable region for calling code {}; type is unknown", pn.country_code);
            return PhoneNumberType::Unknown;
        };
        let Some(meta) = self.metadata_for_region_or_non_geo(region, pn.country_code) else {
            return PhoneNumberType::Unknown;
        };
        let nsn = self.national_significant_number(pn);
        match self.type_test(&meta, &nsn) {
            Ok(t) => t,
            Err(err) => {
                log::error!("metadata regex failed to compile during classification: {err}");
                panic!("a valid regex is expected in metadata; this indicates a library bug! {err}");
            }
        }
    }

    pub fn is_valid_number(&self, pn: &PhoneNumber) -> bool {
        self.number_type(pn) != PhoneNumberType::Unknown
    }

    pub fn is_valid_number_for_region(&self, pn: &PhoneNumber, region: &str) -> bool {
        let expected_cc = if region == REGION_CODE_FOR_NON_GEO_ENTITY {
            pn.country_code
        } else {
            match self.calling_codes.calling_code_for_region(region) {
                Some(cc) => cc,
                None => return false,
            }
        };
        if pn.country_code != expected_cc {
            return false;
        }
        let Some(meta) = self.metadata_for_region_or_non_geo(region, pn.country_code) else {
            return false;
        };
        let nsn = self.national_significant_number(pn);
        match self.type_test(&meta, &nsn) {
            Ok(t) => t != PhoneNumberType::Unknown,
            Err(err) => panic!("a valid regex is expected in metadata; this indicates a library bug! {err}"),
        }
    }

    pub fn is_possible_number_with_reason(&self, pn: &PhoneNumber) -> ValidationResult {
        if self.calling_codes.regions_for_calling_code(pn.country_code).is_empty() {
            return ValidationResult::InvalidCountryCode;
        }
        let Some(region) = self.region_code_for_number(pn) else {
            return ValidationResult::InvalidCountryCode;
        };
        let Some(meta) = self.metadata_for_region_or_non_geo(region, pn.country_code) else {
            return ValidationResult::InvalidCountryCode;
        };
        let nsn = self.national_significant_number(pn);
        let possible = match self.regex_cache.get_regex(&meta.general_desc_possible) {
            Ok(p) => p,
            Err(err) => panic!("a valid regex is expected in metadata; this indicates a library bug! {err}"),
        };
        if possible.full_match(&nsn) {
            ValidationResult::IsPossible
        } else if possible.find_start(&nsn).is_some() {
            ValidationResult::TooLong
        } else {
            ValidationResult::TooShort
        }
    }

    pub fn is_possible_number(&self, pn: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(pn) == ValidationResult::IsPossible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::default::{demo_calling_code_table, default_store};
    use crate::regexp_cache::RegexCache;

    fn classifier() -> Classifier<'static> {
        Classifier {
            metadata_store: default_store(),
            calling_codes: Box::leak(Box::new(demo_calling_code_table())),
            regex_cache: Box::leak(Box::new(RegexCache::default())),
        }
    }

    #[test]
    fn us_number_is_fixed_line_or_mobile() {
        let pn = PhoneNumber::new(1, 6502530000);
        assert_eq!(classifier().number_type(&pn), PhoneNumberType::FixedLineOrMobile);
        assert!(classifier().is_valid_number(&pn));
    }

    #[test]
    fn gb_toll_free_number_is_toll_free() {
        let pn = PhoneNumber::new(44, 800123456).with_italian_leading_zero(1);
        assert_eq!(classifier().number_type(&pn), PhoneNumberType::TollFree);
    }

    #[test]
    fn unknown_calling_code_is_invalid_country_code() {
        let pn = PhoneNumber::new(999, 12345);
        assert_eq!(classifier().is_possible_number_with_reason(&pn), ValidationResult::InvalidCountryCode);
    }

    #[test]
    fn region_for_number_resolves_single_region_calling_codes() {
        let pn = PhoneNumber::new(39, 236618300);
        assert_eq!(classifier().region_code_for_number(&pn), Some("IT"));
    }

    #[test]
    fn overly_long_nsn_is_too_long() {
        let pn = PhoneNumber::new(1, 6502530000000);
        assert_eq!(classifier().is_possible_number_with_reason(&pn), ValidationResult::TooLong);
    }
}
