// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoder for compiled terminfo databases
//!
//! [`decode`] turns the bytes of a compiled terminfo entry into a read-only
//! [`TermInfo`] record. Finding and reading the file is left to the caller.

pub mod caps;
mod error;
mod header;
mod names;
mod read;
mod sections;
mod terminfo;

pub use error::Error;
pub use terminfo::TermInfo;

use header::{HEADER_SIZE, HeaderInfo};
use sections::SectionReader;

/// Options controlling how a database is decoded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    names_include_nul: bool,
}

impl DecodeOptions {
    /// Default options, the declared name size excludes the NUL terminator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names_include_nul: false,
        }
    }

    /// Options for databases written by ncurses `tic`
    #[must_use]
    pub const fn ncurses() -> Self {
        Self {
            names_include_nul: true,
        }
    }

    /// Whether the declared size of the name section counts its NUL terminator
    ///
    /// By default it does not, and the terminator follows the declared bytes.
    #[must_use]
    pub const fn with_names_include_nul(mut self, value: bool) -> Self {
        self.names_include_nul = value;
        self
    }
}

/// Decode a compiled terminfo database from the supplied buffer
pub fn decode(buffer: &[u8]) -> Result<TermInfo, Error> {
    decode_with(buffer, DecodeOptions::default())
}

/// Decode a compiled terminfo database using the supplied options
pub fn decode_with(buffer: &[u8], options: DecodeOptions) -> Result<TermInfo, Error> {
    let header = HeaderInfo::detect(buffer)?;
    tracing::debug!(message = "Detected terminfo header.", header = ?header);

    let (terminfo, names_size) =
        names::decode_names(TermInfo::default(), &buffer[HEADER_SIZE..], &header, options)?;
    tracing::trace!(
        message = "Decoded terminal names.",
        name = terminfo.name(),
        aliases = ?terminfo.aliases()
    );

    let mut reader = SectionReader::new(buffer, HEADER_SIZE + names_size);
    let terminfo = sections::decode_booleans(terminfo, &mut reader, &header)?;
    let terminfo = sections::decode_numbers(terminfo, &mut reader, &header)?;
    let terminfo = sections::decode_strings(terminfo, &mut reader, &header)?;
    let terminfo = sections::decode_extended(terminfo, &mut reader, header.number_width)?;

    Ok(terminfo)
}
