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

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Memoizes compiled patterns by source string.
///
/// Consulted on every classification call, so lookups must stay cheap under
/// concurrent access: backed by a `DashMap` rather than a single
/// mutex-guarded LRU. Duplicate compilation of the same key under a race is
/// tolerated; the loser's `Arc` is simply discarded.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the compiled pattern for `pattern`, compiling (case-insensitive,
    /// Unicode-case) and caching it on first use.
    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::RegexBuilder::new(pattern)
                .case_insensitive(true)
                .unicode(true)
                .build()
                .map(Arc::new)
        })?;
        Ok(entry.value().clone())
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::with_capacity(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_compiled_pattern() {
        let cache = RegexCache::with_capacity(4);
        let a = cache.get_regex(r"\d{3}").unwrap();
        let b = cache.get_regex(r"\d{3}").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn invalid_pattern_errors() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex("(").is_err());
    }
}
