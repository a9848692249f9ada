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

use bitphonenumber::metadata::default::{build_demo_metadata_bytes, demo_calling_code_table};
use bitphonenumber::{CountryCodeSource, ParseError, PhoneNumberType, PhoneNumberUtil, ValidationResult};

fn util() -> PhoneNumberUtil {
    PhoneNumberUtil::new_with_metadata(&build_demo_metadata_bytes(), demo_calling_code_table()).unwrap()
}

#[test]
fn parses_us_fixed_line_or_mobile_number() {
    let util = util();
    let pn = util.parse("+1 650 253 0000", Some("US")).unwrap();
    assert_eq!(pn.country_code, 1);
    assert_eq!(pn.national_number, 6502530000);
    assert!(!pn.italian_leading_zero);
    assert_eq!(util.get_region_code_for_number(&pn), Some("US"));
    assert_eq!(util.get_number_type(&pn), PhoneNumberType::FixedLineOrMobile);
    assert!(util.is_valid_number(&pn));
}

#[test]
fn parses_gb_toll_free_number_with_leading_zero() {
    let util = util();
    let pn = util.parse("0800 123 456", Some("GB")).unwrap();
    assert_eq!(pn.country_code, 44);
    assert_eq!(pn.national_number, 800123456);
    assert!(pn.italian_leading_zero);
    assert_eq!(pn.number_of_leading_zeros, 1);
    assert_eq!(util.get_number_type(&pn), PhoneNumberType::TollFree);
}

#[test]
fn parses_it_number_with_plus_sign_and_unknown_default_region() {
    let util = util();
    let pn = util.parse("+390236618300", Some("ZZ")).unwrap();
    assert_eq!(pn.country_code, 39);
    assert_eq!(pn.national_number, 236618300);
    assert_eq!(util.get_region_code_for_number(&pn), Some("IT"));
    assert!(util.is_valid_number(&pn));
}

#[test]
fn bare_plus_sign_is_not_a_number() {
    let util = util();
    assert!(util.parse("+", Some("US")).is_err());
}

#[test]
fn unresolvable_calling_code_is_invalid_country_code() {
    let util = util();
    let err = util.parse("+999 12345", Some("US")).unwrap_err();
    assert_eq!(err, ParseError::InvalidCountryCode);
}

#[test]
fn alpha_number_with_three_or_more_letters_normalizes_to_keypad_digits() {
    let util = util();
    assert_eq!(util.normalize("1-800-FLOWERS"), "18003569377");
}

#[test]
fn excessively_long_nsn_is_reported_as_too_long() {
    let util = util();
    let pn = util.parse("650253000000000000000", Some("US"));
    assert_eq!(pn.unwrap_err(), ParseError::TooLongNsn);
}

#[test]
fn possible_number_reasons_cover_short_and_long_cases() {
    let util = util();
    let valid = util.parse("+1 650 253 0000", Some("US")).unwrap();
    assert_eq!(util.is_possible_number_with_reason(&valid), ValidationResult::IsPossible);

    let mut too_long = valid.clone();
    too_long.national_number = 6502530000000;
    assert_eq!(util.is_possible_number_with_reason(&too_long), ValidationResult::TooLong);
}

#[test]
fn keep_raw_variant_retains_original_text_and_source() {
    let util = util();
    let pn = util.parse_and_keep_raw("+1 650 253 0000", Some("US")).unwrap();
    assert_eq!(pn.raw_input.as_deref(), Some("+1 650 253 0000"));
    assert_eq!(pn.country_code_source, Some(CountryCodeSource::FromNumberWithPlusSign));
}

#[test]
fn region_and_calling_code_are_consistent_for_every_supported_region() {
    let util = util();
    for region in util.get_supported_regions() {
        let cc = util.get_country_code_for_region(region);
        assert!(cc > 0, "region {region} should have a calling code");
        let regions_for_cc = util.get_region_codes_for_country_code(cc);
        assert_eq!(regions_for_cc[0], util.get_region_code_for_country_code(cc));
    }
}

#[test]
fn global_network_calling_codes_expose_toll_free_800() {
    let util = util();
    let codes: Vec<_> = util.get_supported_global_network_calling_codes().collect();
    assert_eq!(codes, vec![800]);
}

#[test]
fn unknown_region_reports_zz_sentinel() {
    let util = util();
    assert_eq!(util.get_region_code_for_country_code(777), "ZZ");
}
