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

use std::fmt;

/// Chunked transfer encoding flag.
pub const FL_CHUNKED: u8 = 0x1;

/// Connection keep-alive flag.
pub const FL_KEEP_ALIVE: u8 = 0x2;

/// Connection close flag.
pub const FL_CLOSE: u8 = 0x4;

/// Chunked trailer flag.
pub const FL_TRAILING: u8 = 0x8;

/// Upgrade flag.
pub const FL_UPGRADE: u8 = 0x10;

/// Skip body flag.
pub const FL_SKIP_BODY: u8 = 0x20;

/// Message flags collected while parsing the head and body.
#[derive(Clone,Copy,Default,PartialEq)]
pub struct Flags {
    flags: u8
}

/// Flags.
impl Flags {
    /// Create a new `Flags` from a `u8`.
    pub fn from_u8(byte: u8) -> Flags {
        Flags {
            flags: byte
        }
    }

    /// Convert these flags to their byte value.
    pub fn as_byte(&self) -> u8 {
        self.flags
    }

    /// Clear all flags.
    pub fn clear(&mut self) {
        self.flags = 0;
    }

    /// Indicates that the chunked flag has been set.
    pub fn is_chunked(&self) -> bool {
        self.flags & FL_CHUNKED == FL_CHUNKED
    }

    /// Indicates that the connection close flag has been set.
    pub fn is_close(&self) -> bool {
        self.flags & FL_CLOSE == FL_CLOSE
    }

    /// Indicates that the flags are empty.
    pub fn is_empty(&self) -> bool {
        self.flags == 0
    }

    /// Indicates that the connection keep-alive flag has been set.
    pub fn is_keep_alive(&self) -> bool {
        self.flags & FL_KEEP_ALIVE == FL_KEEP_ALIVE
    }

    /// Indicates that the skip body flag has been set.
    pub fn is_skip_body(&self) -> bool {
        self.flags & FL_SKIP_BODY == FL_SKIP_BODY
    }

    /// Indicates that the trailing flag has been set.
    pub fn is_trailing(&self) -> bool {
        self.flags & FL_TRAILING == FL_TRAILING
    }

    /// Indicates that the upgrade flag has been set.
    pub fn is_upgrade(&self) -> bool {
        self.flags & FL_UPGRADE == FL_UPGRADE
    }

    /// Remove `flag`.
    pub fn remove(&mut self, flag: u8) {
        self.flags &= !flag;
    }

    /// Insert `flag`.
    pub fn insert(&mut self, flag: u8) {
        self.flags |= flag;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "<Flags: chunked: {}, keep_alive: {}, close: {}, trailing: {}, upgrade: {}, \
             skip_body: {}>",
            self.is_chunked(),
            self.is_keep_alive(),
            self.is_close(),
            self.is_trailing(),
            self.is_upgrade(),
            self.is_skip_body()
        )
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:#04x}", self.flags)
    }
}
