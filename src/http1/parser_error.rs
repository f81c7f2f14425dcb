// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

use std::error::Error;
use std::fmt;

/// Parser errors.
///
/// Offsets are zero-based positions in the chunk passed to the `Parser::execute()` call that
/// failed.
#[derive(Clone,Copy,PartialEq)]
pub enum ParserError {
    /// Invalid chunk size at offset `usize` on byte `u8`.
    ChunkSize(usize, u8),

    /// Chunk size overflow at offset `usize`.
    ChunkSizeOverflow(usize),

    /// Invalid content length at offset `usize` on byte `u8`.
    ContentLength(usize, u8),

    /// Content length overflow at offset `usize`.
    ContentLengthOverflow(usize),

    /// Invalid CRLF sequence at offset `usize` on byte `u8`.
    CrlfSequence(usize, u8),

    /// The parser is dead. `usize` is the offset of the byte that was rejected, which is `0`
    /// when a dead parser is fed again.
    Dead(usize),

    /// Invalid header field at offset `usize` on byte `u8`.
    HeaderField(usize, u8),

    /// Invalid `HTTP/` literal at offset `usize` on byte `u8`.
    Http(usize, u8),

    /// The head exceeded the maximum header size `usize` at offset `usize`.
    MaxHeaderSize(usize, usize),

    /// Invalid request method at offset `usize` on byte `u8`.
    Method(usize, u8),

    /// Invalid status code at offset `usize` on byte `u8`.
    StatusCode(usize, u8),

    /// Invalid request URL at offset `usize` on byte `u8`.
    Url(usize, u8),

    /// Invalid HTTP version at offset `usize` on byte `u8`.
    Version(usize, u8)
}

impl ParserError {
    /// Retrieve the offset of the byte that caused this error.
    pub fn offset(&self) -> usize {
        match *self {
            ParserError::ChunkSize(offset, _)
            | ParserError::ChunkSizeOverflow(offset)
            | ParserError::ContentLength(offset, _)
            | ParserError::ContentLengthOverflow(offset)
            | ParserError::CrlfSequence(offset, _)
            | ParserError::Dead(offset)
            | ParserError::HeaderField(offset, _)
            | ParserError::Http(offset, _)
            | ParserError::MaxHeaderSize(offset, _)
            | ParserError::Method(offset, _)
            | ParserError::StatusCode(offset, _)
            | ParserError::Url(offset, _)
            | ParserError::Version(offset, _) => offset
        }
    }

    /// Shift the offset by `base`, for errors found in a chunk starting `base` bytes into a larger
    /// stream.
    pub(crate) fn rebase(&self, base: usize) -> ParserError {
        match *self {
            ParserError::ChunkSize(offset, byte) => {
                ParserError::ChunkSize(offset + base, byte)
            },
            ParserError::ChunkSizeOverflow(offset) => {
                ParserError::ChunkSizeOverflow(offset + base)
            },
            ParserError::ContentLength(offset, byte) => {
                ParserError::ContentLength(offset + base, byte)
            },
            ParserError::ContentLengthOverflow(offset) => {
                ParserError::ContentLengthOverflow(offset + base)
            },
            ParserError::CrlfSequence(offset, byte) => {
                ParserError::CrlfSequence(offset + base, byte)
            },
            ParserError::Dead(offset) => {
                ParserError::Dead(offset + base)
            },
            ParserError::HeaderField(offset, byte) => {
                ParserError::HeaderField(offset + base, byte)
            },
            ParserError::Http(offset, byte) => {
                ParserError::Http(offset + base, byte)
            },
            ParserError::MaxHeaderSize(offset, max) => {
                ParserError::MaxHeaderSize(offset + base, max)
            },
            ParserError::Method(offset, byte) => {
                ParserError::Method(offset + base, byte)
            },
            ParserError::StatusCode(offset, byte) => {
                ParserError::StatusCode(offset + base, byte)
            },
            ParserError::Url(offset, byte) => {
                ParserError::Url(offset + base, byte)
            },
            ParserError::Version(offset, byte) => {
                ParserError::Version(offset + base, byte)
            }
        }
    }
}

impl fmt::Debug for ParserError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserError::ChunkSize(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::ChunkSize: Invalid chunk size at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::ChunkSizeOverflow(offset) => {
                write!(
                    formatter,
                    "<ParserError::ChunkSizeOverflow: Chunk size overflow at offset {}>",
                    offset
                )
            },
            ParserError::ContentLength(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::ContentLength: Invalid content length at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::ContentLengthOverflow(offset) => {
                write!(
                    formatter,
                    "<ParserError::ContentLengthOverflow: Content length overflow at offset {}>",
                    offset
                )
            },
            ParserError::CrlfSequence(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::CrlfSequence: Invalid CRLF sequence at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Dead(offset) => {
                write!(
                    formatter,
                    "<ParserError::Dead: Parser is dead at offset {}>",
                    offset
                )
            },
            ParserError::HeaderField(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::HeaderField: Invalid header field at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Http(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::Http: Invalid HTTP literal at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::MaxHeaderSize(offset, max) => {
                write!(
                    formatter,
                    "<ParserError::MaxHeaderSize: Maximum header size {} exceeded at offset {}>",
                    max,
                    offset
                )
            },
            ParserError::Method(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::Method: Invalid method at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::StatusCode(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::StatusCode: Invalid status code at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Url(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::Url: Invalid URL at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Version(offset, byte) => {
                write!(
                    formatter,
                    "<ParserError::Version: Invalid HTTP version at offset {} on byte {}>",
                    offset,
                    byte
                )
            }
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserError::ChunkSize(offset, byte) => {
                write!(
                    formatter,
                    "<ChunkSize: Invalid chunk size at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::ChunkSizeOverflow(offset) => {
                write!(
                    formatter,
                    "<ChunkSizeOverflow: Chunk size overflow at offset {}>",
                    offset
                )
            },
            ParserError::ContentLength(offset, byte) => {
                write!(
                    formatter,
                    "<ContentLength: Invalid content length at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::ContentLengthOverflow(offset) => {
                write!(
                    formatter,
                    "<ContentLengthOverflow: Content length overflow at offset {}>",
                    offset
                )
            },
            ParserError::CrlfSequence(offset, byte) => {
                write!(
                    formatter,
                    "<CrlfSequence: Invalid CRLF sequence at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Dead(offset) => {
                write!(
                    formatter,
                    "<Dead: Parser is dead at offset {}>",
                    offset
                )
            },
            ParserError::HeaderField(offset, byte) => {
                write!(
                    formatter,
                    "<HeaderField: Invalid header field at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Http(offset, byte) => {
                write!(
                    formatter,
                    "<Http: Invalid HTTP literal at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::MaxHeaderSize(offset, max) => {
                write!(
                    formatter,
                    "<MaxHeaderSize: Maximum header size {} exceeded at offset {}>",
                    max,
                    offset
                )
            },
            ParserError::Method(offset, byte) => {
                write!(
                    formatter,
                    "<Method: Invalid method at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::StatusCode(offset, byte) => {
                write!(
                    formatter,
                    "<StatusCode: Invalid status code at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Url(offset, byte) => {
                write!(
                    formatter,
                    "<Url: Invalid URL at offset {} on byte {}>",
                    offset,
                    byte
                )
            },
            ParserError::Version(offset, byte) => {
                write!(
                    formatter,
                    "<Version: Invalid HTTP version at offset {} on byte {}>",
                    offset,
                    byte
                )
            }
        }
    }
}

impl Error for ParserError {
}
