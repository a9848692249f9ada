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
use bitphonenumber::{Normalizer, ParseError, PhoneNumberUtil};
use proptest::prelude::*;

fn util() -> PhoneNumberUtil {
    PhoneNumberUtil::new_with_metadata(&build_demo_metadata_bytes(), demo_calling_code_table()).unwrap()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "[+0-9A-Za-z ().\\-]{0,40}") {
        let once = Normalizer::normalize(&s);
        let twice = Normalizer::normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_digits_only_is_idempotent(s in "[+0-9A-Za-z ().\\-]{0,40}") {
        let once = Normalizer::normalize_digits_only(&s);
        let twice = Normalizer::normalize_digits_only(&once);
        prop_assert_eq!(once, twice);
    }

    /// Any viable-looking text either parses, or fails with one of the three
    /// error kinds the parse pipeline can legitimately produce past the
    /// viability gate — it never panics.
    #[test]
    fn parse_never_panics_on_viable_text(s in "[+0-9]{2,20}") {
        let util = util();
        if Normalizer::is_viable_phone_number(&s) {
            match util.parse(&s, Some("US")) {
                Ok(_) => {}
                Err(ParseError::InvalidCountryCode)
                | Err(ParseError::TooShortNsn)
                | Err(ParseError::TooShortAfterIdd)
                | Err(ParseError::TooLongNsn)
                | Err(ParseError::NotANumber(_)) => {}
            }
        }
    }

    #[test]
    fn parsed_nsn_length_is_within_bounds(s in "[0-9]{2,17}") {
        let util = util();
        if let Ok(pn) = util.parse(&s, Some("US")) {
            let nsn_len = util.get_national_significant_number(&pn).chars().count();
            prop_assert!(nsn_len >= 2 && nsn_len <= 17);
            prop_assert!(pn.country_code >= 1 && pn.country_code <= 999);
        }
    }

    #[test]
    fn italian_leading_zero_never_consumes_the_whole_nsn(s in "0[0-9]{1,16}") {
        let util = util();
        if let Ok(pn) = util.parse(&s, Some("IT")) {
            if pn.italian_leading_zero {
                let nsn_len = util.get_national_significant_number(&pn).chars().count();
                prop_assert!(nsn_len as i32 > pn.number_of_leading_zeros);
            }
        }
    }
}
