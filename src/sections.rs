// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Capability sections following the terminal names

use std::mem;

use crate::{
    caps::{boolean_name, number_name, string_name},
    error::Error,
    header::{HeaderInfo, NumberWidth},
    read::{read_cstr, read_le16},
    terminfo::TermInfo,
};

const ABSENT_ENTRY: i32 = -1;
const CANCELED_ENTRY: i32 = -2;

const CANCELED_BOOLEAN: u8 = 0xfe;

/// Size of the header of the extended capability block
const EXT_HEADER_SIZE: usize = 5 * mem::size_of::<u16>();

/// Sequential reader over the sections of the database
pub struct SectionReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> SectionReader<'a> {
    pub const fn new(buffer: &'a [u8], position: usize) -> Self {
        Self { buffer, position }
    }

    /// Take the next `size` bytes
    ///
    /// Fails if the section extends past the end of the buffer. An empty
    /// section always succeeds, even after the position has run off the end.
    pub fn take(&mut self, size: usize) -> Result<&'a [u8], Error> {
        if size == 0 {
            return Ok(&[]);
        }
        let start = self.position;
        let Some(end) = start.checked_add(size) else {
            return Err(Error::FailedAssertation);
        };
        let Some(section) = self.buffer.get(start..end) else {
            tracing::debug!(
                message = "Section extends past the end of the buffer.",
                start = start,
                size = size,
                buffer_size = self.buffer.len()
            );
            return Err(Error::FailedAssertation);
        };
        self.position = end;
        Ok(section)
    }

    /// Skip a byte if needed to ensure 2-byte alignment
    pub const fn align(&mut self) {
        self.position += self.position & 1;
    }

    pub const fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }
}

/// Convert ABSENT and CANCELED to None
fn check_offset(offset: u16) -> Option<usize> {
    match i32::from(offset as i16) {
        ABSENT_ENTRY | CANCELED_ENTRY => None,
        _ => Some(usize::from(offset)),
    }
}

/// Negative values, including ABSENT and CANCELED, mean no value
fn check_number(value: i32) -> Option<i32> {
    if value < 0 { None } else { Some(value) }
}

fn check_boolean(value: u8) -> Option<bool> {
    match value {
        CANCELED_BOOLEAN => None,
        value => Some(value != 0),
    }
}

fn read_string(string_table: &[u8], offset: usize) -> Result<&[u8], Error> {
    read_cstr(string_table, offset).ok_or(Error::FailedAssertation)
}

/// Decode boolean flags, one byte per slot
pub fn decode_booleans(
    mut terminfo: TermInfo,
    reader: &mut SectionReader,
    header: &HeaderInfo,
) -> Result<TermInfo, Error> {
    let values = reader.take(header.booleans_size)?;
    for (index, value) in values.iter().enumerate() {
        let Some(name) = boolean_name(index) else {
            break;
        };
        if let Some(flag) = check_boolean(*value) {
            terminfo.booleans.insert(name.to_owned(), flag);
        }
    }
    Ok(terminfo)
}

/// Decode numeric capabilities, realigning to an even offset first
pub fn decode_numbers(
    mut terminfo: TermInfo,
    reader: &mut SectionReader,
    header: &HeaderInfo,
) -> Result<TermInfo, Error> {
    let width = header.number_width;
    reader.align();
    let values = reader.take(header.numbers_count * width.size())?;
    for index in 0..header.numbers_count {
        let Some(name) = number_name(index) else {
            break;
        };
        if let Some(number) = check_number(width.read(values, index)) {
            terminfo.numbers.insert(name.to_owned(), number);
        }
    }
    Ok(terminfo)
}

/// Decode string capabilities: the offset table, then the string table
pub fn decode_strings(
    mut terminfo: TermInfo,
    reader: &mut SectionReader,
    header: &HeaderInfo,
) -> Result<TermInfo, Error> {
    let offsets = reader.take(mem::size_of::<u16>() * header.strings_count)?;
    let string_table = reader.take(header.string_table_size)?;
    for index in 0..header.strings_count {
        let Some(name) = string_name(index) else {
            break;
        };
        let Some(offset) = check_offset(read_le16(offsets, index * 2)) else {
            continue;
        };
        let value = read_string(string_table, offset)?;
        terminfo.strings.insert(name.to_owned(), value.to_vec());
    }
    Ok(terminfo)
}

/// Decode the extended capability block, if the buffer has one
///
/// The layout is:
///
/// extended header, boolean values, align(2), number values, string value
/// offsets, name offsets, string values, boolean names, number names, string
/// names.
pub fn decode_extended(
    mut terminfo: TermInfo,
    reader: &mut SectionReader,
    number_width: NumberWidth,
) -> Result<TermInfo, Error> {
    reader.align();
    if reader.remaining() < EXT_HEADER_SIZE {
        tracing::trace!(
            message = "No extended capabilities.",
            trailing = reader.remaining()
        );
        return Ok(terminfo);
    }

    let ext_header = reader.take(EXT_HEADER_SIZE)?;
    let bool_count = usize::from(read_le16(ext_header, 0));
    let num_count = usize::from(read_le16(ext_header, 2));
    let str_count = usize::from(read_le16(ext_header, 4));
    let str_limit = usize::from(read_le16(ext_header, 8));

    tracing::trace!(
        message = "Extended capabilities.",
        booleans = bool_count,
        numbers = num_count,
        strings = str_count,
        string_table = str_limit
    );

    let bools = reader.take(bool_count)?;
    reader.align();
    let nums = reader.take(number_width.size() * num_count)?;
    let str_offsets = reader.take(mem::size_of::<u16>() * str_count)?;
    let name_count = bool_count + num_count + str_count;
    let name_offsets = reader.take(mem::size_of::<u16>() * name_count)?;
    let str_table = reader.take(str_limit)?;

    // Names are stored after the last string value.
    let mut names_base = 0;
    for index in 0..str_count {
        if let Some(offset) = check_offset(read_le16(str_offsets, index * 2)) {
            names_base += read_string(str_table, offset)?.len() + 1;
        }
    }
    let Some(names_table) = str_table.get(names_base..) else {
        return Err(Error::FailedAssertation);
    };

    let name_at = |slot: usize| -> Result<String, Error> {
        let Some(offset) = check_offset(read_le16(name_offsets, slot * 2)) else {
            return Err(Error::FailedAssertation);
        };
        let name = read_string(names_table, offset)?;
        match str::from_utf8(name) {
            Ok(name) => Ok(name.to_owned()),
            Err(_) => Err(Error::FailedAssertation),
        }
    };

    for (index, value) in bools.iter().enumerate() {
        if let Some(flag) = check_boolean(*value) {
            terminfo.ext_booleans.insert(name_at(index)?, flag);
        }
    }

    for index in 0..num_count {
        if let Some(number) = check_number(number_width.read(nums, index)) {
            terminfo.ext_numbers.insert(name_at(bool_count + index)?, number);
        }
    }

    for index in 0..str_count {
        if let Some(offset) = check_offset(read_le16(str_offsets, index * 2)) {
            let value = read_string(str_table, offset)?;
            let name = name_at(bool_count + num_count + index)?;
            terminfo.ext_strings.insert(name, value.to_vec());
        }
    }

    Ok(terminfo)
}
