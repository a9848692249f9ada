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

use crate::consts::{REGION_CODE_FOR_NON_GEO_ENTITY, REGION_CODE_FOR_UNKNOWN};

/// Sentinel region-code helpers. Kept as associated functions rather than
/// plain constants so call sites read like `RegionCode::zz()`.
pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        REGION_CODE_FOR_UNKNOWN
    }

    /// The non-geographical entity sentinel ("001"), used for calling codes
    /// not tied to a single country (e.g. some toll-free / UAN ranges).
    pub fn un001() -> &'static str {
        REGION_CODE_FOR_NON_GEO_ENTITY
    }
}
