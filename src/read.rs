// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width little-endian integer reads
//!
//! The readers here never fail. A read that runs past the end of the buffer
//! yields 0, and callers that care about truncation check the section extent
//! before reading from it.

/// Read a little-endian `u16` at `offset`, or 0 if fewer than 2 bytes remain
pub fn read_le16(buffer: &[u8], offset: usize) -> u16 {
    read_array(buffer, offset).map_or(0, u16::from_le_bytes)
}

/// Read a little-endian `u32` at `offset`, or 0 if fewer than 4 bytes remain
pub fn read_le32(buffer: &[u8], offset: usize) -> u32 {
    read_array(buffer, offset).map_or(0, u32::from_le_bytes)
}

fn read_array<const N: usize>(buffer: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    buffer.get(offset..end)?.try_into().ok()
}

/// Read a NUL-terminated byte string starting at `offset`
///
/// Returns the bytes before the terminator, or `None` if `offset` is outside
/// the buffer or no terminator follows it.
pub fn read_cstr(buffer: &[u8], offset: usize) -> Option<&[u8]> {
    let tail = buffer.get(offset..)?;
    let length = tail.iter().position(|c| *c == b'\0')?;
    Some(&tail[..length])
}
