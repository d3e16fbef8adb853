// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Errors reported when decoding a compiled terminfo database
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Unknown magic number, or the buffer cannot hold the declared names
    #[error("Not a compiled terminfo database")]
    InvalidFormat,
    /// The name section holds no primary terminal name
    #[error("Empty terminal name")]
    EmptyTerminalName,
    /// Section sizes or offsets disagree with the header or the buffer
    #[error("Inconsistent terminfo database")]
    FailedAssertation,
}
