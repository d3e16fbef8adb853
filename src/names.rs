// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Terminal name section: `name|alias|alias...` terminated by NUL

use crate::{DecodeOptions, error::Error, header::HeaderInfo, terminfo::TermInfo};

/// Decode the name section at the start of `body`, the bytes after the header
///
/// Returns the record with name and aliases filled in, and the number of bytes
/// the name section occupies in `body`.
pub fn decode_names(
    mut terminfo: TermInfo,
    body: &[u8],
    header: &HeaderInfo,
    options: DecodeOptions,
) -> Result<(TermInfo, usize), Error> {
    let content_size = body.iter().position(|c| *c == b'\0').unwrap_or(body.len());

    let (expected_size, section_size) = if options.names_include_nul {
        let Some(expected_size) = header.terminal_names_size.checked_sub(1) else {
            return Err(Error::FailedAssertation);
        };
        (expected_size, header.terminal_names_size)
    } else {
        (header.terminal_names_size, header.terminal_names_size + 1)
    };

    if content_size != expected_size {
        tracing::debug!(
            message = "Terminal name size mismatch.",
            declared = expected_size,
            found = content_size
        );
        return Err(Error::FailedAssertation);
    }

    let Ok(content) = str::from_utf8(&body[..content_size]) else {
        return Err(Error::FailedAssertation);
    };

    let mut fields = content.split('|');
    let name = fields.next().unwrap_or_default();
    if name.is_empty() {
        return Err(Error::EmptyTerminalName);
    }

    terminfo.name = name.to_owned();
    terminfo.aliases = fields.map(str::to_owned).collect();

    Ok((terminfo, section_size))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::header::NumberWidth;

    fn header(terminal_names_size: usize) -> HeaderInfo {
        HeaderInfo {
            number_width: NumberWidth::Bits16,
            terminal_names_size,
            booleans_size: 0,
            numbers_count: 0,
            strings_count: 0,
            string_table_size: 0,
        }
    }

    fn decode(body: &[u8], size: usize) -> Result<(TermInfo, usize), Error> {
        decode_names(
            TermInfo::default(),
            body,
            &header(size),
            DecodeOptions::default(),
        )
    }

    #[test]
    fn name_only() {
        let (terminfo, size) = decode(b"xterm-a\0", 7).unwrap();
        assert_eq!(terminfo.name(), "xterm-a");
        assert!(terminfo.aliases().is_empty());
        assert_eq!(size, 8);
    }

    #[test]
    fn aliases_in_order() {
        let body = b"vt100|vt-100|DEC VT100\0\x01\x00";
        let (terminfo, size) = decode(body, 22).unwrap();
        assert_eq!(terminfo.name(), "vt100");
        assert_eq!(terminfo.aliases(), ["vt-100", "DEC VT100"]);
        assert_eq!(size, 23);
    }

    #[test]
    fn size_mismatch() {
        assert_eq!(decode(b"xterm\0", 6).unwrap_err(), Error::FailedAssertation);
        assert_eq!(decode(b"xterm\0", 4).unwrap_err(), Error::FailedAssertation);
    }

    #[test]
    fn unterminated() {
        let (terminfo, _) = decode(b"xterm", 5).unwrap();
        assert_eq!(terminfo.name(), "xterm");
        assert_eq!(decode(b"xterm", 4).unwrap_err(), Error::FailedAssertation);
    }

    #[test]
    fn empty_name() {
        assert_eq!(decode(b"\0", 0).unwrap_err(), Error::EmptyTerminalName);
        assert_eq!(decode(b"|alias\0", 6).unwrap_err(), Error::EmptyTerminalName);
    }

    #[test]
    fn invalid_utf8() {
        assert_eq!(decode(b"x\xffz\0", 3).unwrap_err(), Error::FailedAssertation);
    }

    #[test]
    fn nul_counted_in_size() {
        let options = DecodeOptions::default().with_names_include_nul(true);
        let decode = |body: &[u8], size| {
            decode_names(TermInfo::default(), body, &header(size), options)
        };
        let (terminfo, size) = decode(b"xterm|xterm-debian\0", 19).unwrap();
        assert_eq!(terminfo.name(), "xterm");
        assert_eq!(terminfo.aliases(), ["xterm-debian"]);
        assert_eq!(size, 19);
        assert_eq!(decode(b"xterm\0", 5).unwrap_err(), Error::FailedAssertation);
        assert_eq!(decode(b"xterm\0", 0).unwrap_err(), Error::FailedAssertation);
        assert_eq!(decode(b"\0", 1).unwrap_err(), Error::EmptyTerminalName);
    }
}
