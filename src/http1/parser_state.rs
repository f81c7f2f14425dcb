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

use fsm::ParserValue;
use http1::parser::{ Parser, ParserContext };
use http1::parser_error::ParserError;

/// Parser states.
///
/// Every state up to and including `HeadersLf` belongs to the message head, and counts towards
/// the maximum header size.
#[derive(Clone,Copy,Debug,PartialEq)]
#[repr(u8)]
pub enum ParserState {
    /// A fatal error occurred, or the connection was not kept alive, or it was upgraded to another
    /// protocol.
    Dead,

    /// Detect request/response byte 1.
    Detect1,

    /// Detect request/response byte 2.
    Detect2,

    // ---------------------------------------------------------------------------------------------
    // RESPONSE
    // ---------------------------------------------------------------------------------------------

    /// Parsing response HTTP version byte 1.
    StartResponse,

    /// Parsing response HTTP version byte 2.
    ResponseHttp2,

    /// Parsing response HTTP version byte 3.
    ResponseHttp3,

    /// Parsing response HTTP version byte 4.
    ResponseHttp4,

    /// Parsing response HTTP version byte 5.
    ResponseHttp5,

    /// Parsing response HTTP major version byte 1.
    ResponseVersionMajor1,

    /// Parsing response HTTP major version byte 2+.
    ResponseVersionMajor2,

    /// Parsing response HTTP minor version byte 1.
    ResponseVersionMinor1,

    /// Parsing response HTTP minor version byte 2+.
    ResponseVersionMinor2,

    /// Parsing response status code byte 1.
    ResponseStatusCode1,

    /// Parsing response status code byte 2+.
    ResponseStatusCode2,

    /// Skipping response status.
    ResponseStatus,

    /// Parsing line feed after response status line.
    ResponseLineLf,

    // ---------------------------------------------------------------------------------------------
    // REQUEST
    // ---------------------------------------------------------------------------------------------

    /// Parsing request method byte 1.
    StartRequest,

    /// Parsing request method byte 2+.
    RequestMethod,

    /// Parsing request URL byte 1.
    RequestUrl1,

    /// Parsing request URL schema.
    RequestSchema,

    /// Parsing request URL schema slash 1.
    RequestSchemaSlash1,

    /// Parsing request URL schema slash 2.
    RequestSchemaSlash2,

    /// Parsing request URL host.
    RequestHost,

    /// Parsing request URL port.
    RequestPort,

    /// Parsing request URL path.
    RequestPath,

    /// Parsing request URL query string byte 1.
    RequestQueryString1,

    /// Parsing request URL query string byte 2+.
    RequestQueryString2,

    /// Parsing request URL fragment byte 1.
    RequestFragment1,

    /// Parsing request URL fragment byte 2+.
    RequestFragment2,

    /// Parsing request HTTP version byte 1.
    RequestHttp1,

    /// Parsing request HTTP version byte 2.
    RequestHttp2,

    /// Parsing request HTTP version byte 3.
    RequestHttp3,

    /// Parsing request HTTP version byte 4.
    RequestHttp4,

    /// Parsing request HTTP version byte 5.
    RequestHttp5,

    /// Parsing request HTTP major version byte 1.
    RequestVersionMajor1,

    /// Parsing request HTTP major version byte 2+.
    RequestVersionMajor2,

    /// Parsing request HTTP minor version byte 1.
    RequestVersionMinor1,

    /// Parsing request HTTP minor version byte 2+.
    RequestVersionMinor2,

    /// Parsing line feed after request line.
    RequestLineLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Parsing first byte of header field.
    FirstHeaderField,

    /// Parsing header field.
    HeaderField,

    /// Parsing first byte of header value.
    FirstHeaderValue,

    /// Parsing header value.
    HeaderValue,

    /// Parsing line feed after header value.
    HeaderLf,

    /// Parsing line feed ending the head.
    HeadersLf,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Waiting for `Parser::set_has_body()` before framing a response body.
    DecideBody,

    /// Parsing chunk size byte 1.
    ChunkSize1,

    /// Parsing chunk size byte 2+.
    ChunkSize2,

    /// Skipping chunk parameters.
    ChunkParameters,

    /// Parsing line feed after chunk size.
    ChunkSizeLf,

    /// Parsing chunk data.
    ChunkData,

    /// Parsing carriage return after chunk data.
    ChunkDataCr,

    /// Parsing line feed after chunk data.
    ChunkDataLf,

    /// Parsing body with a known content length.
    BodyByLength,

    /// Parsing body until the end of the stream.
    BodyUntilEof
}

impl ParserState {
    /// Indicates that this state belongs to the message head.
    pub fn is_head(&self) -> bool {
        *self as u8 <= ParserState::HeadersLf as u8
    }
}

// -------------------------------------------------------------------------------------------------

/// Header recognizer states.
///
/// These track partial matches against the header fields that affect framing, and against the
/// values of those fields that set flags.
#[derive(Clone,Copy,Debug,PartialEq)]
#[repr(u8)]
pub enum HeaderState {
    /// Header isn't interesting.
    General,

    /// Matched `c`.
    C,

    /// Matched `co`.
    CO,

    /// Matched `con`.
    CON,

    /// Matching `connection`.
    MatchingConnection,

    /// Matching `proxy-connection`.
    MatchingProxyConnection,

    /// Matching `content-length`.
    MatchingContentLength,

    /// Matching `transfer-encoding`.
    MatchingTransferEncoding,

    /// Matching `upgrade`.
    MatchingUpgrade,

    /// Field is `connection` or `proxy-connection`.
    Connection,

    /// Field is `content-length`.
    ContentLength,

    /// Field is `transfer-encoding`.
    TransferEncoding,

    /// Field is `upgrade`.
    Upgrade,

    /// Matching value `chunked`.
    MatchingChunked,

    /// Matching value `keep-alive`.
    MatchingKeepAlive,

    /// Matching value `close`.
    MatchingClose,

    /// Value is `chunked`.
    Chunked,

    /// Value is `keep-alive`.
    KeepAlive,

    /// Value is `close`.
    Close
}

// -------------------------------------------------------------------------------------------------

/// Header section being parsed.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Section {
    /// Message head.
    Head,

    /// Trailer following the last chunk of a chunked body.
    Trailer
}

/// Dispatch the current byte to the function belonging to the current state.
#[inline]
pub(crate) fn dispatch(parser: &mut Parser, context: &mut ParserContext)
-> Result<ParserValue, ParserError> {
    let section = if parser.flags().is_trailing() {
        Section::Trailer
    } else {
        Section::Head
    };

    match parser.state() {
        ParserState::Dead                  => parser.dead(context),
        ParserState::Detect1               => parser.detect1(context),
        ParserState::Detect2               => parser.detect2(context),
        ParserState::StartResponse         => parser.start_response(context),
        ParserState::ResponseHttp2         => parser.response_http2(context),
        ParserState::ResponseHttp3         => parser.response_http3(context),
        ParserState::ResponseHttp4         => parser.response_http4(context),
        ParserState::ResponseHttp5         => parser.response_http5(context),
        ParserState::ResponseVersionMajor1 => parser.response_version_major1(context),
        ParserState::ResponseVersionMajor2 => parser.response_version_major2(context),
        ParserState::ResponseVersionMinor1 => parser.response_version_minor1(context),
        ParserState::ResponseVersionMinor2 => parser.response_version_minor2(context),
        ParserState::ResponseStatusCode1   => parser.response_status_code1(context),
        ParserState::ResponseStatusCode2   => parser.response_status_code2(context),
        ParserState::ResponseStatus        => parser.response_status(context),
        ParserState::ResponseLineLf        => parser.response_line_lf(context),
        ParserState::StartRequest          => parser.start_request(context),
        ParserState::RequestMethod         => parser.request_method(context),
        ParserState::RequestUrl1           => parser.request_url1(context),
        ParserState::RequestSchema         => parser.request_schema(context),
        ParserState::RequestSchemaSlash1   => parser.request_schema_slash1(context),
        ParserState::RequestSchemaSlash2   => parser.request_schema_slash2(context),
        ParserState::RequestHost           => parser.request_host(context),
        ParserState::RequestPort           => parser.request_port(context),
        ParserState::RequestPath           => parser.request_path(context),
        ParserState::RequestQueryString1   => parser.request_query_string1(context),
        ParserState::RequestQueryString2   => parser.request_query_string2(context),
        ParserState::RequestFragment1      => parser.request_fragment1(context),
        ParserState::RequestFragment2      => parser.request_fragment2(context),
        ParserState::RequestHttp1          => parser.request_http1(context),
        ParserState::RequestHttp2          => parser.request_http2(context),
        ParserState::RequestHttp3          => parser.request_http3(context),
        ParserState::RequestHttp4          => parser.request_http4(context),
        ParserState::RequestHttp5          => parser.request_http5(context),
        ParserState::RequestVersionMajor1  => parser.request_version_major1(context),
        ParserState::RequestVersionMajor2  => parser.request_version_major2(context),
        ParserState::RequestVersionMinor1  => parser.request_version_minor1(context),
        ParserState::RequestVersionMinor2  => parser.request_version_minor2(context),
        ParserState::RequestLineLf         => parser.request_line_lf(context),
        ParserState::FirstHeaderField      => parser.first_header_field(context, section),
        ParserState::HeaderField           => parser.header_field(context),
        ParserState::FirstHeaderValue      => parser.first_header_value(context),
        ParserState::HeaderValue           => parser.header_value(context),
        ParserState::HeaderLf              => parser.header_lf(context),
        ParserState::HeadersLf             => parser.headers_lf(context, section),
        ParserState::DecideBody            => parser.decide_body_inline(context),
        ParserState::ChunkSize1            => parser.chunk_size1(context),
        ParserState::ChunkSize2            => parser.chunk_size2(context),
        ParserState::ChunkParameters       => parser.chunk_parameters(context),
        ParserState::ChunkSizeLf           => parser.chunk_size_lf(context),
        ParserState::ChunkData             => parser.chunk_data(context),
        ParserState::ChunkDataCr           => parser.chunk_data_cr(context),
        ParserState::ChunkDataLf           => parser.chunk_data_lf(context),
        ParserState::BodyByLength          => parser.body_by_length(context),
        ParserState::BodyUntilEof          => parser.body_until_eof(context)
    }
}
