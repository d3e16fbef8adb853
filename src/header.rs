// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Detection of the fixed-size header at the start of the database

use crate::{
    error::Error,
    read::{read_le16, read_le32},
};

/// Size of the header in bytes
pub const HEADER_SIZE: usize = 12;

#[repr(u16)]
enum TerminfoMagic {
    /// Original format, 16-bit numbers
    Magic1 = 0x011a,
    /// 32-bit numbers
    Magic2 = 0x021e,
}

/// Width of the values in the numeric capability sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberWidth {
    Bits16,
    Bits32,
}

impl NumberWidth {
    fn from_magic(magic: u16) -> Option<Self> {
        match magic {
            val if val == TerminfoMagic::Magic1 as u16 => Some(Self::Bits16),
            val if val == TerminfoMagic::Magic2 as u16 => Some(Self::Bits32),
            _ => None,
        }
    }

    /// Bytes per numeric slot
    pub const fn size(self) -> usize {
        match self {
            Self::Bits16 => 2,
            Self::Bits32 => 4,
        }
    }

    /// Read the signed value of numeric slot `index` from `section`
    ///
    /// 16-bit values are sign-extended, so the sentinels come out as -1 and -2
    /// for both widths.
    pub fn read(self, section: &[u8], index: usize) -> i32 {
        let offset = index * self.size();
        match self {
            Self::Bits16 => i32::from(read_le16(section, offset) as i16),
            Self::Bits32 => read_le32(section, offset) as i32,
        }
    }
}

/// Section sizes declared by the header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderInfo {
    pub number_width: NumberWidth,
    pub terminal_names_size: usize,
    pub booleans_size: usize,
    pub numbers_count: usize,
    pub strings_count: usize,
    pub string_table_size: usize,
}

impl HeaderInfo {
    /// Detect the header of `buffer`
    ///
    /// Fails with `InvalidFormat` for an unknown magic number or a buffer too
    /// short to hold the declared name section.
    pub fn detect(buffer: &[u8]) -> Result<Self, Error> {
        let Some(number_width) = NumberWidth::from_magic(read_le16(buffer, 0)) else {
            return Err(Error::InvalidFormat);
        };

        let header = Self {
            number_width,
            terminal_names_size: usize::from(read_le16(buffer, 2)),
            booleans_size: usize::from(read_le16(buffer, 4)),
            numbers_count: usize::from(read_le16(buffer, 6)),
            strings_count: usize::from(read_le16(buffer, 8)),
            string_table_size: usize::from(read_le16(buffer, 10)),
        };

        match buffer.len().checked_sub(HEADER_SIZE) {
            Some(body_size) if body_size > header.terminal_names_size => Ok(header),
            _ => Err(Error::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn header(fields: [u16; 6]) -> Vec<u8> {
        fields.iter().flat_map(|x| x.to_le_bytes()).collect()
    }

    #[test]
    fn short_buffers() {
        for size in 0..HEADER_SIZE {
            let mut buffer = header([0x011a, 0, 0, 0, 0, 0]);
            buffer.truncate(size);
            assert_eq!(HeaderInfo::detect(&buffer), Err(Error::InvalidFormat));
        }
    }

    #[test]
    fn unknown_magic() {
        for magic in [0, 0x011b, 0x1a01, 0x021f, 0x031e, 0xffff] {
            let mut buffer = header([magic, 1, 0, 0, 0, 0]);
            buffer.extend_from_slice(b"a\0");
            assert_eq!(HeaderInfo::detect(&buffer), Err(Error::InvalidFormat));
        }
    }

    #[test]
    fn names_must_fit() {
        let mut buffer = header([0x011a, 4, 0, 0, 0, 0]);
        buffer.extend_from_slice(b"abcd");
        assert_eq!(HeaderInfo::detect(&buffer), Err(Error::InvalidFormat));
        buffer.push(0);
        assert!(HeaderInfo::detect(&buffer).is_ok());
    }

    #[test]
    fn fields() {
        let mut buffer = header([0x021e, 5, 3, 7, 9, 11]);
        buffer.extend_from_slice(b"term\0\0");
        assert_eq!(
            HeaderInfo::detect(&buffer),
            Ok(HeaderInfo {
                number_width: NumberWidth::Bits32,
                terminal_names_size: 5,
                booleans_size: 3,
                numbers_count: 7,
                strings_count: 9,
                string_table_size: 11,
            })
        );
    }

    #[test]
    fn number_width_read() {
        let section = [0x50, 0x00, 0xff, 0xff, 0xfe, 0xff];
        assert_eq!(NumberWidth::Bits16.read(&section, 0), 80);
        assert_eq!(NumberWidth::Bits16.read(&section, 1), -1);
        assert_eq!(NumberWidth::Bits16.read(&section, 2), -2);

        let section = [0x05, 0x00, 0x01, 0x00, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(NumberWidth::Bits32.read(&section, 0), 0x10005);
        assert_eq!(NumberWidth::Bits32.read(&section, 1), -1);
    }
}
