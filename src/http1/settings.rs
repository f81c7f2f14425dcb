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

/// Default maximum header size, in bytes.
pub const DEFAULT_MAX_HEADER_SIZE: usize = 80 * 1024;

/// Parser settings.
///
/// Strict parsers verify structural literals such as the bytes of `HTTP/` and the `LF` following
/// every `CR`, and stop accepting messages once a connection is not kept alive. Lenient parsers
/// skip these checks and always restart for another message.
///
/// The maximum header size is enforced in both modes.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct ParserSettings {
    /// Maximum byte count of a message head.
    max_header_size: usize,

    /// Indicates that structural literals are verified.
    strict: bool
}

impl ParserSettings {
    /// Create a new strict `ParserSettings` with the default maximum header size.
    pub fn new() -> ParserSettings {
        ParserSettings {
            max_header_size: DEFAULT_MAX_HEADER_SIZE,
            strict:          true
        }
    }

    /// Indicates that structural literals are verified.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Set the maximum byte count of a message head.
    pub fn max_header_size(mut self, max_header_size: usize) -> ParserSettings {
        self.max_header_size = max_header_size;
        self
    }

    /// Retrieve the maximum byte count of a message head.
    pub fn get_max_header_size(&self) -> usize {
        self.max_header_size
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> ParserSettings {
        self.strict = strict;
        self
    }
}

impl Default for ParserSettings {
    fn default() -> ParserSettings {
        ParserSettings::new()
    }
}
