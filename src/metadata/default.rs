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

//! A small, hand-built metadata table bundled purely as a convenience
//! default and as fixture data for tests/benches. It covers four regions
//! (US, GB, CH, IT) and one non-geographical entity (800, toll-free) with
//! illustrative, not authoritative, numbering patterns — generating a
//! production-accurate table from ITU/national sources is outside what this
//! crate takes on.

use std::sync::OnceLock;

use crate::metadata::codec::{self, EntrySpec, FieldSpec};
use crate::metadata::store::MetadataStore;
use crate::metadata::types::{CallingCodeTable, EntryId};

fn us_entry() -> EntrySpec {
    EntrySpec {
        id: EntryId::Region([b'U', b'S']),
        country_code: 1,
        same_mobile_and_fixed_line_pattern: true,
        main_country_for_code: true,
        leading_zero_possible: false,
        mobile_number_portable_region: false,
        fields: vec![
            FieldSpec::new(1, "[2-9]d9"),
            FieldSpec::new(0, "d10"),
            FieldSpec::new(2, "[2-9]d9"),
            FieldSpec::new(11, "011"),
        ],
    }
}

fn gb_entry() -> EntrySpec {
    EntrySpec {
        id: EntryId::Region([b'G', b'B']),
        country_code: 44,
        same_mobile_and_fixed_line_pattern: false,
        main_country_for_code: false,
        leading_zero_possible: true,
        mobile_number_portable_region: true,
        fields: vec![
            FieldSpec::new(1, "0?d9,10"),
            FieldSpec::new(0, "d9,10"),
            FieldSpec::new(2, "0?1d8"),
            FieldSpec::new(3, "0?7d9"),
            FieldSpec::new(4, "0?800d6"),
            FieldSpec::new(11, "00"),
        ],
    }
}

fn ch_entry() -> EntrySpec {
    EntrySpec {
        id: EntryId::Region([b'C', b'H']),
        country_code: 41,
        same_mobile_and_fixed_line_pattern: false,
        main_country_for_code: true,
        leading_zero_possible: false,
        mobile_number_portable_region: false,
        fields: vec![
            FieldSpec::new(1, "0?d9"),
            FieldSpec::new(0, "d9"),
            FieldSpec::new(2, "0?[2-9]d8"),
            FieldSpec::new(3, "0?7d8"),
            FieldSpec::new(11, "00"),
        ],
    }
}

fn it_entry() -> EntrySpec {
    EntrySpec {
        id: EntryId::Region([b'I', b'T']),
        country_code: 39,
        same_mobile_and_fixed_line_pattern: false,
        main_country_for_code: true,
        leading_zero_possible: true,
        mobile_number_portable_region: true,
        fields: vec![
            FieldSpec::new(1, "0?d8,10"),
            FieldSpec::new(0, "d8,10"),
            FieldSpec::new(2, "0d8,9"),
            FieldSpec::new(3, "3d8,9"),
            FieldSpec::new(11, "00"),
        ],
    }
}

fn toll_free_800_entry() -> EntrySpec {
    EntrySpec {
        id: EntryId::NonGeo(800),
        country_code: 800,
        same_mobile_and_fixed_line_pattern: false,
        main_country_for_code: false,
        leading_zero_possible: false,
        mobile_number_portable_region: false,
        fields: vec![FieldSpec::new(1, "d8"), FieldSpec::new(0, "d8"), FieldSpec::new(4, "d8")],
    }
}

/// Encodes the bundled demo table to its byte-exact wire format.
pub fn build_demo_metadata_bytes() -> Vec<u8> {
    codec::encode(&[
        us_entry(),
        gb_entry(),
        ch_entry(),
        it_entry(),
        toll_free_800_entry(),
    ])
}

/// Calling-code table matching [`build_demo_metadata_bytes`]: US is the main
/// region for NANPA (+1), and 800 is a non-geographical toll-free range.
pub fn demo_calling_code_table() -> CallingCodeTable {
    CallingCodeTable::new(vec![
        (1, vec!["US"]),
        (44, vec!["GB"]),
        (41, vec!["CH"]),
        (39, vec!["IT"]),
        (800, vec!["001"]),
    ])
}

static DEFAULT_STORE: OnceLock<MetadataStore> = OnceLock::new();

/// Process-wide default [`MetadataStore`], built from the bundled demo
/// table on first access. Library users with their own metadata should
/// prefer constructing a `MetadataStore` directly; this exists as the
/// explicit, non-hidden convenience accessor described for this build.
pub fn default_store() -> &'static MetadataStore {
    DEFAULT_STORE.get_or_init(|| {
        MetadataStore::from_bytes(&build_demo_metadata_bytes()).expect("bundled demo metadata table must be well-formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_table_decodes_all_regions() {
        let store = default_store();
        for region in ["US", "GB", "CH", "IT"] {
            assert!(store.get_metadata_for_region(region).is_some(), "{region} should decode");
        }
        assert!(store.get_metadata_for_non_geographical_region(800).is_some());
    }

    #[test]
    fn demo_calling_code_table_has_main_regions() {
        let table = demo_calling_code_table();
        assert_eq!(table.main_region_for_calling_code(1), Some("US"));
        assert_eq!(table.calling_code_for_region("GB"), Some(44));
    }
}
