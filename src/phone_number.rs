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

use crate::enums::CountryCodeSource;

/// Canonical, parsed representation of a phone number.
///
/// Leading zeros in the national significant number are not carried inside
/// `national_number` itself (they would be lost to integer parsing); instead
/// `italian_leading_zero` and `number_of_leading_zeros` record them
/// out-of-band, mirroring how they are presented back to the digit string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneNumber {
    pub country_code: i32,
    pub national_number: u64,
    pub italian_leading_zero: bool,
    pub number_of_leading_zeros: i32,
    pub raw_input: Option<String>,
    pub country_code_source: Option<CountryCodeSource>,
}

impl PhoneNumber {
    pub fn new(country_code: i32, national_number: u64) -> Self {
        Self {
            country_code,
            national_number,
            italian_leading_zero: false,
            number_of_leading_zeros: 1,
            raw_input: None,
            country_code_source: None,
        }
    }

    pub fn with_raw_input(mut self, raw_input: impl Into<String>) -> Self {
        self.raw_input = Some(raw_input.into());
        self
    }

    pub fn with_country_code_source(mut self, source: CountryCodeSource) -> Self {
        self.country_code_source = Some(source);
        self
    }

    pub fn with_italian_leading_zero(mut self, leading_zeros: i32) -> Self {
        if leading_zeros >= 2 {
            self.italian_leading_zero = true;
            self.number_of_leading_zeros = leading_zeros;
        } else if leading_zeros == 1 {
            self.italian_leading_zero = true;
            self.number_of_leading_zeros = 1;
        }
        self
    }

    /// The number of leading zeros to reinsert in front of `national_number`
    /// when reconstructing the national significant number string.
    pub fn leading_zeros_to_apply(&self) -> i32 {
        if self.italian_leading_zero {
            self.number_of_leading_zeros
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_leading_zero() {
        let n = PhoneNumber::new(1, 2025550123);
        assert!(!n.italian_leading_zero);
        assert_eq!(n.number_of_leading_zeros, 1);
        assert_eq!(n.leading_zeros_to_apply(), 0);
    }

    #[test]
    fn leading_zero_builder_tracks_count() {
        let n = PhoneNumber::new(39, 312345678).with_italian_leading_zero(2);
        assert!(n.italian_leading_zero);
        assert_eq!(n.leading_zeros_to_apply(), 2);
    }
}
