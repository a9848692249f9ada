// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

mod calling_code;
mod classifier;
pub mod consts;
pub mod enums;
pub mod error;
pub mod metadata;
mod normalizer;
mod parser;
pub mod phone_number;
mod phonenumberutil;
pub(crate) mod regex_util;
mod regexp_cache;
pub mod region_code;

pub use classifier::Classifier;
pub use enums::{CountryCodeSource, PhoneNumberType, ValidationResult};
pub use error::{MetadataDecodeError, NotANumberError, ParseError};
pub use metadata::{CallingCodeTable, MetadataStore, PhoneMetadata};
pub use normalizer::Normalizer;
pub use parser::Parser;
pub use phone_number::PhoneNumber;
pub use phonenumberutil::{default_util, PhoneNumberUtil};
pub use regexp_cache::{InvalidRegexError, RegexCache};
