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

/// Request methods.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
#[repr(u8)]
pub enum Method {
    /// DELETE
    Delete,

    /// GET
    Get,

    /// HEAD
    Head,

    /// POST
    Post,

    /// PUT
    Put,

    /// CONNECT
    Connect,

    /// OPTIONS
    Options,

    /// TRACE
    Trace,

    /// COPY
    Copy,

    /// LOCK
    Lock,

    /// MKCOL
    Mkcol,

    /// MOVE
    Move,

    /// PROPFIND
    Propfind,

    /// PROPPATCH
    Proppatch,

    /// UNLOCK
    Unlock,

    /// REPORT
    Report,

    /// MKACTIVITY
    Mkactivity,

    /// CHECKOUT
    Checkout,

    /// MERGE
    Merge
}

impl Method {
    /// Retrieve the canonical upper-cased name.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Method::Delete     => "DELETE",
            Method::Get        => "GET",
            Method::Head       => "HEAD",
            Method::Post       => "POST",
            Method::Put        => "PUT",
            Method::Connect    => "CONNECT",
            Method::Options    => "OPTIONS",
            Method::Trace      => "TRACE",
            Method::Copy       => "COPY",
            Method::Lock       => "LOCK",
            Method::Mkcol      => "MKCOL",
            Method::Move       => "MOVE",
            Method::Propfind   => "PROPFIND",
            Method::Proppatch  => "PROPPATCH",
            Method::Unlock     => "UNLOCK",
            Method::Report     => "REPORT",
            Method::Mkactivity => "MKACTIVITY",
            Method::Checkout   => "CHECKOUT",
            Method::Merge      => "MERGE"
        }
    }

    /// Retrieve the canonical name as bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    /// Select the method a matcher starts with when the first byte of a request line is `byte`.
    ///
    /// Methods sharing a first letter start with the one listed first in the method table. The
    /// matcher corrects itself as later bytes arrive.
    pub fn from_first_byte(byte: u8) -> Option<Method> {
        match byte {
            b'C' => Some(Method::Connect),
            b'D' => Some(Method::Delete),
            b'G' => Some(Method::Get),
            b'H' => Some(Method::Head),
            b'L' => Some(Method::Lock),
            b'M' => Some(Method::Mkcol),
            b'O' => Some(Method::Options),
            b'P' => Some(Method::Post),
            b'R' => Some(Method::Report),
            b'T' => Some(Method::Trace),
            b'U' => Some(Method::Unlock),
            _    => None
        }
    }

    /// Retrieve the method that byte `index` of a request line switches to, when `byte` does not
    /// match the current method at that index.
    ///
    /// Returns `None` when no method sharing the matched prefix has `byte` at `index`.
    pub fn correct(&self, index: usize, byte: u8) -> Option<Method> {
        match (*self, index, byte) {
            (Method::Connect,  1, b'H') => Some(Method::Checkout),
            (Method::Connect,  2, b'P') => Some(Method::Copy),
            (Method::Mkcol,    1, b'O') => Some(Method::Move),
            (Method::Mkcol,    1, b'E') => Some(Method::Merge),
            (Method::Mkcol,    2, b'A') => Some(Method::Mkactivity),
            (Method::Post,     1, b'R') => Some(Method::Propfind),
            (Method::Post,     1, b'U') => Some(Method::Put),
            (Method::Propfind, 4, b'P') => Some(Method::Proppatch),
            _                           => None
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}
