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

//! Bit-packed metadata codec.
//!
//! Each entry's fields are packed as a stream of 5-bit symbols (MSB-first
//! within each byte of the body). A symbol's meaning depends on whether it is
//! the first symbol of a field: the first symbol always names the field
//! (`'A' + v`), every symbol after it is interpreted through the "normal
//! symbol" table until a field-separator symbol (31) flips back to
//! first-of-field mode, or a terminator symbol (0) ends the record.
//!
//! Decoding yields a small regex mini-language per field which is then
//! expanded into a standard regex source string (`(` becomes a non-capturing
//! group, `dN` becomes `\d{N}`, and so on) before being handed to
//! [`crate::regexp_cache::RegexCache`].

use crate::error::MetadataDecodeError;
use crate::metadata::types::{EntryId, PhoneMetadata};

const COUNTRY_CODE_MASK: u16 = 0x03FF;
const SAME_MOBILE_FIXED_BIT: u16 = 1 << 10;
const MAIN_COUNTRY_FOR_CODE_BIT: u16 = 1 << 11;
const LEADING_ZERO_POSSIBLE_BIT: u16 = 1 << 12;
const MOBILE_NUMBER_PORTABLE_BIT: u16 = 1 << 13;

const FIELD_SEPARATOR: u8 = 31;
const TERMINATOR: u8 = 0;
const ESCAPED_SEMICOLON: u8 = 21;

/// One decoded index row: where an entry's symbols live in the body and the
/// small fixed-width fields packed alongside it.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub id: EntryId,
    pub buf_len: u16,
    pub data_position: usize,
    pub country_code: i32,
    pub same_mobile_and_fixed_line_pattern: bool,
    pub main_country_for_code: bool,
    pub leading_zero_possible: bool,
    pub mobile_number_portable_region: bool,
}

/// Parsed header + index, plus the body bytes the index points into.
#[derive(Debug, Clone)]
pub struct DecodedIndex {
    pub entries: Vec<IndexEntry>,
    pub body: Vec<u8>,
}

/// Parses the header and index (§4.3). Does not touch the body beyond
/// slicing it out; per-entry field decoding happens on demand via
/// [`decode_entry`].
pub fn decode_index(bytes: &[u8]) -> Result<DecodedIndex, MetadataDecodeError> {
    if bytes.len() < 2 {
        return Err(MetadataDecodeError::UnexpectedEof);
    }
    let n = u16::from_be_bytes([bytes[0], bytes[1]]);
    if n == 0 || n > 1000 {
        return Err(MetadataDecodeError::InvalidEntryCount(n));
    }
    let n = n as usize;
    let index_len = n * 6;
    if bytes.len() < 2 + index_len {
        return Err(MetadataDecodeError::UnexpectedEof);
    }

    let mut entries = Vec::with_capacity(n);
    let mut running_offset = 0usize;
    for i in 0..n {
        let base = 2 + i * 6;
        let id_raw = u16::from_be_bytes([bytes[base], bytes[base + 1]]);
        let buf_len = u16::from_be_bytes([bytes[base + 2], bytes[base + 3]]);
        let flags = u16::from_be_bytes([bytes[base + 4], bytes[base + 5]]);

        let id = if id_raw > 1000 {
            let high = (id_raw >> 8) as u8;
            let low = (id_raw & 0xFF) as u8;
            EntryId::Region([high, low])
        } else {
            EntryId::NonGeo(id_raw)
        };

        entries.push(IndexEntry {
            id,
            buf_len,
            data_position: running_offset,
            country_code: (flags & COUNTRY_CODE_MASK) as i32,
            same_mobile_and_fixed_line_pattern: flags & SAME_MOBILE_FIXED_BIT != 0,
            main_country_for_code: flags & MAIN_COUNTRY_FOR_CODE_BIT != 0,
            leading_zero_possible: flags & LEADING_ZERO_POSSIBLE_BIT != 0,
            mobile_number_portable_region: flags & MOBILE_NUMBER_PORTABLE_BIT != 0,
        });
        running_offset += buf_len as usize;
    }

    let total_symbols = running_offset;
    let body_len = (total_symbols * 5 + 7) / 8;
    let body_start = 2 + index_len;
    if bytes.len() < body_start + body_len {
        return Err(MetadataDecodeError::UnexpectedEof);
    }

    Ok(DecodedIndex {
        entries,
        body: bytes[body_start..body_start + body_len].to_vec(),
    })
}

/// Reads the 5-bit symbol at `symbol_index` out of the MSB-first bit stream.
fn read_symbol(body: &[u8], symbol_index: usize) -> u8 {
    let bit_start = symbol_index * 5;
    let mut value: u8 = 0;
    for b in 0..5 {
        let bit_pos = bit_start + b;
        let byte_idx = bit_pos / 8;
        let bit_in_byte = 7 - (bit_pos % 8);
        let bit = if byte_idx < body.len() {
            (body[byte_idx] >> bit_in_byte) & 1
        } else {
            0
        };
        value = (value << 1) | bit;
    }
    value
}

/// Decodes the raw (pre-expansion) symbol stream for one entry into its
/// field-letter-prefixed, `;`-separated text form.
fn decode_entry_raw(body: &[u8], entry: &IndexEntry) -> Result<String, MetadataDecodeError> {
    let mut out = String::with_capacity(entry.buf_len as usize);
    let mut first = true;
    let mut terminated = false;

    for i in 0..entry.buf_len as usize {
        let v = read_symbol(body, entry.data_position + i);
        if v > 31 {
            return Err(MetadataDecodeError::InvalidSymbol(v));
        }
        if v == TERMINATOR {
            terminated = true;
            break;
        }
        if first {
            out.push((b'A' + v) as char);
            first = false;
            continue;
        }
        match v {
            1..=10 => out.push((b'0' + (v - 1)) as char),
            11 => out.push('d'),
            12 => out.push('['),
            13 => out.push(']'),
            14 => out.push('('),
            15 => out.push(')'),
            16 => out.push('|'),
            17 => out.push(','),
            18 => out.push('-'),
            19 => out.push('\\'),
            20 => out.push('?'),
            v if v == ESCAPED_SEMICOLON => {
                out.push('\\');
                out.push(';');
            }
            v if v == FIELD_SEPARATOR => {
                out.push(';');
                first = true;
            }
            // 22..30 are reserved and carry no normal-symbol meaning.
            _ => {}
        }
    }

    if !terminated {
        return Err(MetadataDecodeError::UnterminatedRecord);
    }
    Ok(out)
}

/// Splits a decoded raw entry string on unescaped `;`.
fn split_fields(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() {
            current.push(chars[i]);
            current.push(chars[i + 1]);
            i += 2;
            continue;
        }
        if chars[i] == ';' {
            fields.push(std::mem::take(&mut current));
            i += 1;
            continue;
        }
        current.push(chars[i]);
        i += 1;
    }
    if !current.is_empty() {
        fields.push(current);
    }
    fields
}

/// Expands one field's mini-language body into a standard regex source.
fn expand(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            if i + 1 < chars.len() {
                match chars[i + 1] {
                    '(' => out.push('('),
                    ';' => out.push(';'),
                    '\\' => out.push('\\'),
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
                i += 2;
            } else {
                out.push('\\');
                i += 1;
            }
            continue;
        }
        if c == '(' {
            out.push_str("(?:");
            i += 1;
            continue;
        }
        if c == 'd' {
            out.push_str("\\d");
            i += 1;
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i > start {
                out.push('{');
                out.extend(&chars[start..i]);
                if i < chars.len() && chars[i] == ',' {
                    out.push(',');
                    i += 1;
                    let start2 = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    out.extend(&chars[start2..i]);
                }
                out.push('}');
            }
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn apply_field(meta: &mut PhoneMetadata, code: u8, value: String) {
    match code {
        0 => meta.general_desc_possible = value,
        1 => meta.general_desc = value,
        2 => meta.fixed_line = value,
        3 => meta.mobile = value,
        4 => meta.toll_free = value,
        5 => meta.premium_rate = value,
        6 => meta.shared_cost = value,
        7 => meta.personal_number = value,
        8 => meta.voip = value,
        11 => meta.international_prefix = value,
        21 => meta.pager = value,
        23 => meta.leading_digits = value,
        25 => meta.uan = value,
        28 => meta.voicemail = value,
        other => log::debug!("ignoring unknown metadata field code {other}"),
    }
}

/// Materializes the [`PhoneMetadata`] for one index entry by decoding and
/// expanding its symbol range.
pub fn decode_entry(body: &[u8], index_entry: &IndexEntry) -> Result<PhoneMetadata, MetadataDecodeError> {
    let raw = decode_entry_raw(body, index_entry)?;

    let mut meta = PhoneMetadata {
        id: index_entry
            .id
            .as_region_code()
            .unwrap_or_else(|| crate::consts::REGION_CODE_FOR_NON_GEO_ENTITY.to_string()),
        country_code: index_entry.country_code,
        same_mobile_and_fixed_line_pattern: index_entry.same_mobile_and_fixed_line_pattern,
        main_country_for_code: index_entry.main_country_for_code,
        leading_zero_possible: index_entry.leading_zero_possible,
        mobile_number_portable_region: index_entry.mobile_number_portable_region,
        ..Default::default()
    };

    for field in split_fields(&raw) {
        let mut chars = field.chars();
        let Some(code_char) = chars.next() else { continue };
        let Some(code) = (code_char as u32).checked_sub('A' as u32) else {
            continue;
        };
        let value = expand(chars.as_str());
        apply_field(&mut meta, code as u8, value);
    }

    Ok(meta)
}

/// A single field to pack into an entry, in pre-expansion mini-language form
/// (the same alphabet [`decode_entry_raw`] produces: digits, `d`, `[`, `]`,
/// `(`, `)`, `|`, `,`, `-`, `\`, `?`, and `\;` for a literal semicolon).
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub code: u8,
    pub raw: String,
}

impl FieldSpec {
    pub fn new(code: u8, raw: impl Into<String>) -> Self {
        Self { code, raw: raw.into() }
    }
}

/// One entry to pack via [`encode`].
#[derive(Debug, Clone)]
pub struct EntrySpec {
    pub id: EntryId,
    pub country_code: u16,
    pub same_mobile_and_fixed_line_pattern: bool,
    pub main_country_for_code: bool,
    pub leading_zero_possible: bool,
    pub mobile_number_portable_region: bool,
    pub fields: Vec<FieldSpec>,
}

fn char_to_symbol(c: char) -> u8 {
    match c {
        '0'..='9' => (c as u8 - b'0') + 1,
        'd' => 11,
        '[' => 12,
        ']' => 13,
        '(' => 14,
        ')' => 15,
        '|' => 16,
        ',' => 17,
        '-' => 18,
        '\\' => 19,
        '?' => 20,
        other => panic!("character {other:?} has no symbol in the metadata mini-language"),
    }
}

fn encode_entry_symbols(entry: &EntrySpec) -> Vec<u8> {
    let mut symbols = Vec::new();
    for field in &entry.fields {
        symbols.push(field.code);
        let chars: Vec<char> = field.raw.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '\\' && i + 1 < chars.len() && chars[i + 1] == ';' {
                symbols.push(ESCAPED_SEMICOLON);
                i += 2;
                continue;
            }
            symbols.push(char_to_symbol(chars[i]));
            i += 1;
        }
        symbols.push(FIELD_SEPARATOR);
    }
    symbols.push(TERMINATOR);
    symbols
}

fn pack_symbols(symbols: &[u8]) -> Vec<u8> {
    let total_bits = symbols.len() * 5;
    let total_bytes = (total_bits + 7) / 8;
    let mut bytes = vec![0u8; total_bytes];
    for (i, &v) in symbols.iter().enumerate() {
        let bit_start = i * 5;
        for b in 0..5 {
            if (v >> (4 - b)) & 1 == 1 {
                let bit_pos = bit_start + b;
                let byte_idx = bit_pos / 8;
                let bit_in_byte = 7 - (bit_pos % 8);
                bytes[byte_idx] |= 1 << bit_in_byte;
            }
        }
    }
    bytes
}

/// Packs `entries` into a byte-exact metadata blob per §4.3. Used to build
/// the bundled default table and in tests; panics on inputs that violate the
/// format's documented invariants (entry count, field alphabet), since those
/// are programmer errors in code that *produces* metadata, not decode-time
/// conditions.
pub fn encode(entries: &[EntrySpec]) -> Vec<u8> {
    assert!(!entries.is_empty() && entries.len() <= 1000, "entry count must be in 1..=1000");

    let mut out = Vec::new();
    out.extend_from_slice(&(entries.len() as u16).to_be_bytes());

    let per_entry_symbols: Vec<Vec<u8>> = entries.iter().map(encode_entry_symbols).collect();
    let mut running_offset = 0usize;
    for (entry, symbols) in entries.iter().zip(&per_entry_symbols) {
        let id_raw = match entry.id {
            EntryId::Region([a, b]) => ((a as u16) << 8) | b as u16,
            EntryId::NonGeo(code) => code,
        };
        let buf_len = symbols.len() as u16;
        let mut flags = entry.country_code & COUNTRY_CODE_MASK;
        if entry.same_mobile_and_fixed_line_pattern {
            flags |= SAME_MOBILE_FIXED_BIT;
        }
        if entry.main_country_for_code {
            flags |= MAIN_COUNTRY_FOR_CODE_BIT;
        }
        if entry.leading_zero_possible {
            flags |= LEADING_ZERO_POSSIBLE_BIT;
        }
        if entry.mobile_number_portable_region {
            flags |= MOBILE_NUMBER_PORTABLE_BIT;
        }

        out.extend_from_slice(&id_raw.to_be_bytes());
        out.extend_from_slice(&buf_len.to_be_bytes());
        out.extend_from_slice(&flags.to_be_bytes());
        running_offset += symbols.len();
    }
    let _ = running_offset;

    let all_symbols: Vec<u8> = per_entry_symbols.into_iter().flatten().collect();
    out.extend(pack_symbols(&all_symbols));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<EntrySpec> {
        vec![
            EntrySpec {
                id: EntryId::Region([b'U', b'S']),
                country_code: 1,
                same_mobile_and_fixed_line_pattern: true,
                main_country_for_code: true,
                leading_zero_possible: false,
                mobile_number_portable_region: false,
                fields: vec![
                    FieldSpec::new(1, "d3d3d4"),
                    FieldSpec::new(0, "d10"),
                    FieldSpec::new(2, "[2-9]d9"),
                ],
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
        ]
    }

    #[test]
    fn round_trips_region_entry() {
        let bytes = encode(&sample_entries());
        let index = decode_index(&bytes).unwrap();
        assert_eq!(index.entries.len(), 2);

        let us = decode_entry(&index.body, &index.entries[0]).unwrap();
        assert_eq!(us.id, "US");
        assert_eq!(us.country_code, 1);
        assert!(us.same_mobile_and_fixed_line_pattern);
        assert!(us.main_country_for_code);
        assert_eq!(us.general_desc, "\\d{3}\\d{3}\\d{4}");
        assert_eq!(us.general_desc_possible, "\\d{10}");
        assert_eq!(us.fixed_line, "[2-9]\\d{9}");
    }

    #[test]
    fn round_trips_non_geo_entry() {
        let bytes = encode(&sample_entries());
        let index = decode_index(&bytes).unwrap();
        let tollfree = decode_entry(&index.body, &index.entries[1]).unwrap();
        assert_eq!(tollfree.id, "001");
        assert_eq!(tollfree.toll_free, "\\d{8}");
    }

    #[test]
    fn decoding_is_deterministic() {
        let bytes = encode(&sample_entries());
        let index = decode_index(&bytes).unwrap();
        let first = decode_entry(&index.body, &index.entries[0]).unwrap();
        let second = decode_entry(&index.body, &index.entries[0]).unwrap();
        assert_eq!(first.general_desc, second.general_desc);
        assert_eq!(first.fixed_line, second.fixed_line);
    }

    #[test]
    fn escaped_semicolon_survives_expansion() {
        let entries = vec![EntrySpec {
            id: EntryId::Region([b'X', b'X']),
            country_code: 999,
            same_mobile_and_fixed_line_pattern: false,
            main_country_for_code: false,
            leading_zero_possible: false,
            mobile_number_portable_region: false,
            fields: vec![FieldSpec::new(1, "d3\\;d3")],
        }];
        let bytes = encode(&entries);
        let index = decode_index(&bytes).unwrap();
        let meta = decode_entry(&index.body, &index.entries[0]).unwrap();
        assert_eq!(meta.general_desc, "\\d{3};\\d{3}");
    }

    #[test]
    fn rejects_entry_count_out_of_range() {
        let mut bytes = vec![0u8, 0u8];
        bytes.extend_from_slice(&[0u8; 64]);
        assert!(matches!(
            decode_index(&bytes),
            Err(MetadataDecodeError::InvalidEntryCount(0))
        ));
    }

    #[test]
    fn rejects_truncated_header() {
        assert!(matches!(decode_index(&[0x00]), Err(MetadataDecodeError::UnexpectedEof)));
    }
}
