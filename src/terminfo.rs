// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoded terminfo entry

use std::collections::BTreeMap;

use crate::error::Error;

/// Decoded terminfo entry
///
/// Standard capabilities are keyed by their short terminfo name (`cols`,
/// `sgr0`). Extended capabilities are keyed by the name stored in the
/// database. A capability that is absent or canceled has no key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermInfo {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) booleans: BTreeMap<String, bool>,
    pub(crate) numbers: BTreeMap<String, i32>,
    pub(crate) strings: BTreeMap<String, Vec<u8>>,
    pub(crate) ext_booleans: BTreeMap<String, bool>,
    pub(crate) ext_numbers: BTreeMap<String, i32>,
    pub(crate) ext_strings: BTreeMap<String, Vec<u8>>,
}

impl TermInfo {
    /// Decode a compiled terminfo database, see [`crate::decode`]
    pub fn decode(buffer: &[u8]) -> Result<Self, Error> {
        crate::decode(buffer)
    }

    /// Primary terminal name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names, in the order they are declared
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[must_use]
    pub const fn booleans(&self) -> &BTreeMap<String, bool> {
        &self.booleans
    }

    #[must_use]
    pub const fn numbers(&self) -> &BTreeMap<String, i32> {
        &self.numbers
    }

    #[must_use]
    pub const fn strings(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.strings
    }

    #[must_use]
    pub const fn ext_booleans(&self) -> &BTreeMap<String, bool> {
        &self.ext_booleans
    }

    #[must_use]
    pub const fn ext_numbers(&self) -> &BTreeMap<String, i32> {
        &self.ext_numbers
    }

    #[must_use]
    pub const fn ext_strings(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.ext_strings
    }

    /// Whether the terminal has boolean capability `name`
    ///
    /// Standard capabilities are looked up first, then extended ones.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.booleans
            .get(name)
            .or_else(|| self.ext_booleans.get(name))
            .copied()
            .unwrap_or(false)
    }

    /// Value of numeric capability `name`, standard or extended
    #[must_use]
    pub fn number(&self, name: &str) -> Option<i32> {
        self.numbers
            .get(name)
            .or_else(|| self.ext_numbers.get(name))
            .copied()
    }

    /// Value of string capability `name`, standard or extended
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&[u8]> {
        self.strings
            .get(name)
            .or_else(|| self.ext_strings.get(name))
            .map(Vec::as_slice)
    }

    /// Whether `name` matches the primary name or one of the aliases
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}
