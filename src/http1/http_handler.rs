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

use http1::event::MessageStart;
use http1::flags::Flags;

/// How `Parser::parse()` proceeds once a message head has been parsed.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum BodyDirective {
    /// Parse the body according to the message framing.
    HasBody,

    /// The message has no body, whatever its framing says. Use this for responses to `HEAD`
    /// requests.
    SkipBody,

    /// Stop parsing with [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    Abort
}

/// Type that handles events reported by `Parser::parse()`.
///
/// Slices handed to callbacks point into the stream being parsed. Data callbacks may be executed
/// more than once for a single element when it is split by a suspension.
#[allow(unused_variables)]
pub trait HttpHandler {
    /// Callback that is executed when a message starts.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_message_begin(&mut self, start: MessageStart) -> bool {
        true
    }

    /// Callback that is executed when the HTTP version has been located.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_version(&mut self, major: u16, minor: u16) -> bool {
        true
    }

    /// Callback that is executed when request URL data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_url(&mut self, url: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when request path data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_path(&mut self, path: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when request query string data has been located. The leading `?`
    /// is not included.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_query_string(&mut self, query_string: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when request fragment data has been located. The leading `#` is
    /// not included.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_fragment(&mut self, fragment: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when header field data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    ///
    /// **Called When:**
    ///
    /// During head parsing, or at the end of chunk encoded data when trailers are present.
    fn on_header_field(&mut self, field: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when header value data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_header_value(&mut self, value: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when the message head has been parsed.
    ///
    /// **Returns:**
    ///
    /// How parsing proceeds. The directive only matters for responses, since request framing never
    /// depends on the request being answered.
    fn on_headers_complete(&mut self, flags: Flags) -> BodyDirective {
        BodyDirective::HasBody
    }

    /// Callback that is executed when body data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire body. Chunked
    /// bodies are delivered without their chunk framing.
    fn on_body(&mut self, body: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when a message is complete.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_message_complete(&mut self) -> bool {
        true
    }
}
