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

//! HTTP 1.x event parser.
//!
//! [`Parser::execute()`](struct.Parser.html#method.execute) writes what it finds in a chunk to an
//! [`EventBuffer`](struct.EventBuffer.html), and [`Parser::parse()`](struct.Parser.html#method.parse)
//! drives an [`HttpHandler`](trait.HttpHandler.html) from those events.

mod event;
mod flags;
mod http_handler;
mod method;
mod parser;
mod parser_error;
mod parser_state;
mod parser_type;
mod settings;

pub use http1::event::{ Event, EventBuffer, MessageStart, Span, MIN_EVENT_CAPACITY };
pub use http1::flags::{ Flags, FL_CHUNKED, FL_CLOSE, FL_KEEP_ALIVE, FL_SKIP_BODY, FL_TRAILING,
                        FL_UPGRADE };
pub use http1::http_handler::{ BodyDirective, HttpHandler };
pub use http1::method::Method;
pub use http1::parser::{ Framing, Parser };
pub use http1::parser_error::ParserError;
pub use http1::parser_state::{ HeaderState, ParserState };
pub use http1::parser_type::ParserType;
pub use http1::settings::{ ParserSettings, DEFAULT_MAX_HEADER_SIZE };

#[cfg(test)]
mod test;
