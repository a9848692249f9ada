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

use std::collections::HashMap;
use std::sync::OnceLock;

use dashmap::DashMap;

use crate::error::MetadataDecodeError;
use crate::metadata::codec::{self, IndexEntry};
use crate::metadata::types::{EntryId, PhoneMetadata};

/// Owns the decoded header/index for a metadata blob and materializes
/// [`PhoneMetadata`] records on demand, caching each one after first use.
///
/// Construction (header + index parsing) is eager and happens once in
/// [`MetadataStore::from_bytes`]; per-entry field decoding is lazy, mirroring
/// how [`crate::regexp_cache::RegexCache`] only compiles a pattern the first
/// time it is asked for.
pub struct MetadataStore {
    body: Vec<u8>,
    entries: Vec<IndexEntry>,
    by_region: HashMap<String, usize>,
    by_non_geo_code: HashMap<i32, usize>,
    decoded: DashMap<usize, PhoneMetadata>,
}

impl MetadataStore {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetadataDecodeError> {
        let index = codec::decode_index(bytes)?;

        let mut by_region = HashMap::new();
        let mut by_non_geo_code = HashMap::new();
        for (i, entry) in index.entries.iter().enumerate() {
            match entry.id {
                EntryId::Region(bytes) => {
                    let code = String::from_utf8_lossy(&bytes).into_owned();
                    by_region.insert(code, i);
                }
                EntryId::NonGeo(_) => {
                    by_non_geo_code.insert(entry.country_code, i);
                }
            }
        }

        Ok(Self {
            body: index.body,
            entries: index.entries,
            by_region,
            by_non_geo_code,
            decoded: DashMap::new(),
        })
    }

    fn materialize(&self, index: usize) -> Option<PhoneMetadata> {
        if let Some(cached) = self.decoded.get(&index) {
            return Some(cached.value().clone());
        }
        let entry = self.entries.get(index)?;
        match codec::decode_entry(&self.body, entry) {
            Ok(meta) => {
                self.decoded.insert(index, meta.clone());
                Some(meta)
            }
            Err(err) => {
                log::warn!("failed to decode metadata entry {index}: {err}");
                None
            }
        }
    }

    pub fn get_metadata_for_region(&self, region: &str) -> Option<PhoneMetadata> {
        let index = *self.by_region.get(region)?;
        self.materialize(index)
    }

    pub fn get_metadata_for_non_geographical_region(&self, calling_code: i32) -> Option<PhoneMetadata> {
        let index = *self.by_non_geo_code.get(&calling_code)?;
        self.materialize(index)
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.by_region.contains_key(region)
    }
}

/// Lazily-initialized singleton wrapper, for callers who want a
/// process-global default without managing a `MetadataStore` themselves.
/// Library code should prefer an explicit [`MetadataStore::from_bytes`]
/// instance; this exists purely as the convenience accessor the design notes
/// call for.
pub struct LazyMetadataStore {
    bytes: &'static [u8],
    store: OnceLock<MetadataStore>,
}

impl LazyMetadataStore {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self {
            bytes,
            store: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &MetadataStore {
        self.store.get_or_init(|| {
            MetadataStore::from_bytes(self.bytes).expect("bundled default metadata table must be well-formed")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::codec::{EntrySpec, FieldSpec};

    fn sample_bytes() -> Vec<u8> {
        codec::encode(&[
            EntrySpec {
                id: EntryId::Region([b'U', b'S']),
                country_code: 1,
                same_mobile_and_fixed_line_pattern: true,
                main_country_for_code: true,
                leading_zero_possible: false,
                mobile_number_portable_region: false,
                fields: vec![FieldSpec::new(1, "d10"), FieldSpec::new(0, "d10")],
            },
            EntrySpec {
                id: EntryId::NonGeo(800),
                country_code: 800,
                same_mobile_and_fixed_line_pattern: false,
                main_country_for_code: false,
                leading_zero_possible: false,
                mobile_number_portable_region: false,
                fields: vec![FieldSpec::new(4, "d8")],
            },
        ])
    }

    #[test]
    fn looks_up_region_and_non_geo_entries() {
        let store = MetadataStore::from_bytes(&sample_bytes()).unwrap();
        assert!(store.get_metadata_for_region("US").is_some());
        assert!(store.get_metadata_for_region("ZZ").is_none());
        assert_eq!(
            store.get_metadata_for_non_geographical_region(800).unwrap().toll_free,
            "\\d{8}"
        );
    }

    #[test]
    fn materialize_is_cached() {
        let store = MetadataStore::from_bytes(&sample_bytes()).unwrap();
        let first = store.get_metadata_for_region("US").unwrap();
        let second = store.get_metadata_for_region("US").unwrap();
        assert_eq!(first.general_desc, second.general_desc);
    }
}
