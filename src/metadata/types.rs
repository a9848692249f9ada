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

/// Decoded per-region (or per-non-geo-calling-code) metadata record.
///
/// All `*_desc`-like fields hold the already mini-language-expanded regex
/// source; they are compiled lazily through a shared [`crate::regexp_cache::RegexCache`]
/// rather than at decode time.
#[derive(Debug, Clone, Default)]
pub struct PhoneMetadata {
    pub id: String,
    pub country_code: i32,

    pub general_desc: String,
    pub general_desc_possible: String,
    pub fixed_line: String,
    pub mobile: String,
    pub toll_free: String,
    pub premium_rate: String,
    pub shared_cost: String,
    pub personal_number: String,
    pub voip: String,
    pub pager: String,
    pub uan: String,
    pub voicemail: String,

    pub international_prefix: String,
    pub leading_digits: String,

    pub same_mobile_and_fixed_line_pattern: bool,
    pub main_country_for_code: bool,
    pub leading_zero_possible: bool,
    pub mobile_number_portable_region: bool,
}

/// Either a region code ("US") or the non-geographical sentinel ("001").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryId {
    Region([u8; 2]),
    NonGeo(u16),
}

impl EntryId {
    pub fn as_region_code(&self) -> Option<String> {
        match self {
            EntryId::Region(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            EntryId::NonGeo(_) => None,
        }
    }
}

/// An externally supplied, ordered mapping from calling code to the region
/// codes that share it. The first region in each list is the "main" region
/// for that calling code.
#[derive(Debug, Clone, Default)]
pub struct CallingCodeTable {
    entries: Vec<(i32, Vec<&'static str>)>,
}

impl CallingCodeTable {
    pub fn new(entries: Vec<(i32, Vec<&'static str>)>) -> Self {
        Self { entries }
    }

    pub fn regions_for_calling_code(&self, calling_code: i32) -> &[&'static str] {
        self.entries
            .iter()
            .find(|(cc, _)| *cc == calling_code)
            .map(|(_, regions)| regions.as_slice())
            .unwrap_or(&[])
    }

    pub fn calling_code_for_region(&self, region: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, regions)| regions.iter().any(|r| *r == region))
            .map(|(cc, _)| *cc)
    }

    pub fn main_region_for_calling_code(&self, calling_code: i32) -> Option<&'static str> {
        self.regions_for_calling_code(calling_code).first().copied()
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().flat_map(|(_, regions)| regions.iter().copied())
    }

    pub fn supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries
            .iter()
            .filter(|(_, regions)| regions.len() == 1 && regions[0] == crate::consts::REGION_CODE_FOR_NON_GEO_ENTITY)
            .map(|(cc, _)| *cc)
    }
}
