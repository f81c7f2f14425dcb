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

use byte::{ header_char, is_url_char, unhex };
use fsm::{ ParserValue, Success };
use http1::event::{ Event, EventBuffer, MessageStart, Span, MIN_EVENT_CAPACITY };
use http1::flags::{ Flags, FL_CHUNKED, FL_CLOSE, FL_KEEP_ALIVE, FL_SKIP_BODY, FL_TRAILING,
                    FL_UPGRADE };
use http1::http_handler::{ BodyDirective, HttpHandler };
use http1::method::Method;
use http1::parser_error::ParserError;
use http1::parser_state::{ dispatch, HeaderState, ParserState, Section };
use http1::parser_type::ParserType;
use http1::settings::ParserSettings;

use byte_slice::ByteStream;

/// Event buffer capacity used by `Parser::parse()`.
const PARSE_EVENT_CAPACITY: usize = 50;

/// Largest accepted HTTP major version, minor version and status code.
const MAX_DECIMAL: u16 = 999;

/// Header field names and values that affect framing.
const CHUNKED:          &'static [u8] = b"chunked";
const CLOSE:            &'static [u8] = b"close";
const CONNECTION:       &'static [u8] = b"connection";
const CONTENT_LENGTH:   &'static [u8] = b"content-length";
const KEEP_ALIVE:       &'static [u8] = b"keep-alive";
const PROXY_CONNECTION: &'static [u8] = b"proxy-connection";
const TRANSFER_ENCODING: &'static [u8] = b"transfer-encoding";
const UPGRADE:          &'static [u8] = b"upgrade";

// -------------------------------------------------------------------------------------------------
// MACROS
// -------------------------------------------------------------------------------------------------

// Indicates that a byte is alphabetical.
macro_rules! is_alpha {
    ($byte:expr) => ({
        ($byte > 64 && $byte < 91) ||
        ($byte > 96 && $byte < 123)
    });
}

// Indicates that a byte is a digit.
macro_rules! is_digit {
    ($byte:expr) => ({
        $byte > 47 && $byte < 58
    });
}

/// Exit with `ParserError::ContentLength` unless the current byte is a digit, or the CR or LF
/// ending the value.
macro_rules! content_length_check {
    ($context:expr) => ({
        match $context.bytes.byte {
            b'0'..=b'9' | b'\r' | b'\n' => {},
            _ => exit_error!(ContentLength, $context)
        }
    });
}

/// Accumulate the current digit into `$value`, exiting with `$error` once it exceeds
/// `MAX_DECIMAL`.
macro_rules! collect_digit {
    ($context:expr, $value:expr, $error:ident) => ({
        $value = $value * 10 + ($context.bytes.byte - b'0') as u16;

        if $value > MAX_DECIMAL {
            exit_error!($error, $context);
        }
    });
}

/// Advance the partial match of `$name` with canonical byte `$byte`, committing to `$state` on the
/// last byte of the name, or dropping to `HeaderState::General` on a mismatch.
macro_rules! match_name {
    ($parser:expr, $name:expr, $byte:expr, $state:ident) => ({
        $parser.index += 1;

        if $parser.index >= $name.len() || $byte != $name[$parser.index] {
            $parser.header_state = HeaderState::General;
        } else if $parser.index == $name.len() - 1 {
            $parser.header_state = HeaderState::$state;
        }
    });
}

// -------------------------------------------------------------------------------------------------

/// Spans tracked while scanning a chunk.
#[derive(Clone,Copy,Debug,PartialEq)]
pub(crate) enum Mark {
    Url,
    Path,
    QueryString,
    Fragment,
    HeaderField,
    HeaderValue
}

/// Marks in flush order.
const MARKS: [Mark; 6] = [
    Mark::Url,
    Mark::Path,
    Mark::QueryString,
    Mark::Fragment,
    Mark::HeaderField,
    Mark::HeaderValue
];

impl Mark {
    /// Wrap `span` in the event belonging to this mark.
    fn event(&self, span: Span) -> Event {
        match *self {
            Mark::Url         => Event::Url(span),
            Mark::Path        => Event::Path(span),
            Mark::QueryString => Event::QueryString(span),
            Mark::Fragment    => Event::Fragment(span),
            Mark::HeaderField => Event::HeaderField(span),
            Mark::HeaderValue => Event::HeaderValue(span)
        }
    }

    /// Indicates that a scan starting in `state` continues this span from the first byte.
    fn is_open_in(&self, state: ParserState) -> bool {
        match *self {
            Mark::Url => match state {
                ParserState::RequestSchema
                | ParserState::RequestSchemaSlash1
                | ParserState::RequestSchemaSlash2
                | ParserState::RequestHost
                | ParserState::RequestPort
                | ParserState::RequestPath
                | ParserState::RequestQueryString1
                | ParserState::RequestQueryString2
                | ParserState::RequestFragment1
                | ParserState::RequestFragment2 => true,
                _ => false
            },
            Mark::Path        => state == ParserState::RequestPath,
            Mark::QueryString => state == ParserState::RequestQueryString2,
            Mark::Fragment    => state == ParserState::RequestFragment2,
            Mark::HeaderField => state == ParserState::HeaderField,
            Mark::HeaderValue => state == ParserState::HeaderValue
        }
    }
}

/// Scan context for a single `Parser::execute()` call.
pub(crate) struct ParserContext<'a, 'b> {
    /// Input cursor.
    pub bytes: ByteStream<'a>,

    /// Output events.
    events: &'b mut EventBuffer,

    /// Start offsets of open spans, indexed by `Mark`.
    marks: [Option<usize>; 6]
}

impl<'a, 'b> ParserContext<'a, 'b> {
    /// Create a new `ParserContext`, reopening the spans that `state` is in the middle of.
    fn new(stream: &'a [u8], events: &'b mut EventBuffer, state: ParserState)
    -> ParserContext<'a, 'b> {
        let mut marks = [None; 6];

        for mark in MARKS.iter() {
            if mark.is_open_in(state) {
                marks[*mark as usize] = Some(0);
            }
        }

        ParserContext {
            bytes:  ByteStream::new(stream),
            events: events,
            marks:  marks
        }
    }

    /// Close `mark` at `end`, emitting the span unless it's empty.
    fn close(&mut self, mark: Mark, end: usize) {
        if let Some(start) = self.marks[mark as usize].take() {
            if end > start {
                self.events.push(mark.event(Span::new(start, end - start)));
            }
        }
    }

    /// Close all open spans before the first unprocessed byte.
    fn flush(&mut self) {
        let end = self.bytes.stream_index;

        for mark in MARKS.iter() {
            self.close(*mark, end);
        }
    }

    /// Open `mark` at the current byte.
    fn mark(&mut self, mark: Mark) {
        let offset = self.offset();

        self.marks[mark as usize] = Some(offset);
    }

    /// Offset of the current byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.bytes.stream_index - 1
    }

    /// Append `event`.
    fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Close `mark` just before the current byte.
    fn record(&mut self, mark: Mark) {
        let end = self.offset();

        self.close(mark, end);
    }
}

// -------------------------------------------------------------------------------------------------

/// Body framing of a message, in order of precedence.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Framing {
    /// The message has no body. This applies when the body is skipped, when the content length is
    /// `0`, and when the length is unknown on a request or on a response whose connection is kept
    /// alive.
    NoBody,

    /// Chunked transfer encoding. Any content length is ignored.
    Chunked,

    /// Body of exactly `u64` bytes.
    ContentLength(u64),

    /// Body ending when the stream ends.
    UntilEof
}

// -------------------------------------------------------------------------------------------------

/// HTTP 1.x event parser.
///
/// The parser is fed chunks of a stream in order, and reports what it finds as events written to
/// an `EventBuffer`. Spans point into the chunk they were found in, so the chunk must be kept
/// until its events have been consumed.
pub struct Parser {
    /// Content length, or remaining chunk size. `-1` when unknown.
    content_length: i64,

    /// Message flags.
    flags: Flags,

    /// Byte count of the current message head.
    header_bytes_read: usize,

    /// Header recognizer state.
    header_state: HeaderState,

    /// HTTP major version.
    http_major: u16,

    /// HTTP minor version.
    http_minor: u16,

    /// Partial match index into a method, header field name or header value.
    index: usize,

    /// Message type, resolved by the first message when `mode` is `ParserType::Either`.
    message_type: ParserType,

    /// Request method.
    method: Option<Method>,

    /// Configured message type.
    mode: ParserType,

    /// Settings.
    settings: ParserSettings,

    /// Current state.
    state: ParserState,

    /// Response status code.
    status_code: u16,

    /// Indicates that the connection switched protocols.
    upgrade: bool
}

impl Parser {
    /// Create a new `Parser` with default settings.
    pub fn new(mode: ParserType) -> Parser {
        Parser::with_settings(mode, ParserSettings::default())
    }

    /// Create a new `Parser` with custom settings.
    pub fn with_settings(mode: ParserType, settings: ParserSettings) -> Parser {
        let mut parser = Parser {
            content_length:    -1,
            flags:             Flags::default(),
            header_bytes_read: 0,
            header_state:      HeaderState::General,
            http_major:        0,
            http_minor:        0,
            index:             0,
            message_type:      mode,
            method:            None,
            mode:              mode,
            settings:          settings,
            state:             ParserState::Dead,
            status_code:       0,
            upgrade:           false
        };

        parser.init(mode);
        parser
    }

    /// Reset this `Parser` to its start configuration for `mode`.
    ///
    /// Settings are kept. This is the only way to revive a dead parser.
    pub fn init(&mut self, mode: ParserType) {
        self.content_length    = -1;
        self.flags             = Flags::default();
        self.header_bytes_read = 0;
        self.header_state      = HeaderState::General;
        self.http_major        = 0;
        self.http_minor        = 0;
        self.index             = 0;
        self.message_type      = mode;
        self.method            = None;
        self.mode              = mode;
        self.status_code       = 0;
        self.upgrade           = false;
        self.state             = self.start_state();
    }

    /// Parse `stream` into `events`.
    ///
    /// `events` is cleared first. Returns the number of events produced.
    ///
    /// When the last event is `Event::NeedsCapacity(offset)`, feed `&stream[offset..]` again once
    /// the events have been consumed. When it's `Event::NeedsInput(offset)`, call `set_has_body()`
    /// and feed `&stream[offset..]`, even when it's empty. Otherwise a zero-length `stream` signals
    /// the end of the stream, which completes a body that is read until the stream ends.
    pub fn execute(&mut self, stream: &[u8], events: &mut EventBuffer) -> usize {
        events.clear();

        if self.state == ParserState::Dead {
            warn!("Dead parser fed {} bytes", stream.len());

            events.push(Event::Error(ParserError::Dead(0)));

            return events.len();
        }

        let mut context = ParserContext::new(stream, events, self.state);

        if let Err(error) = self.scan(&mut context) {
            debug!("Parser error: {}", error);

            self.state = ParserState::Dead;

            context.push(Event::Error(error));
        }

        context.events.len()
    }

    /// Main scan loop.
    fn scan(&mut self, context: &mut ParserContext) -> Result<(), ParserError> {
        if self.state == ParserState::DecideBody {
            // a zero-length stream here only applies the body decision
            self.decide_body(context);
        } else if context.bytes.stream.is_empty() {
            if self.state == ParserState::BodyUntilEof {
                debug!("End of stream completes body");

                context.push(Event::MessageComplete(0));

                self.new_message();
            } else {
                trace!("Zero-length stream ignored in state {:?}", get_state!(self));
            }

            return Ok(());
        }

        let max_header_size = self.settings.get_max_header_size();

        loop {
            if bs_available!(context.bytes) == 0 {
                context.flush();

                return Ok(());
            }

            if context.events.remaining() < MIN_EVENT_CAPACITY {
                let offset = context.bytes.stream_index;

                trace!("Event buffer full at offset {}", offset);

                context.flush();
                context.push(Event::NeedsCapacity(offset));

                return Ok(());
            }

            if self.state.is_head() && !self.flags.is_trailing() {
                self.header_bytes_read += 1;

                if self.header_bytes_read > max_header_size {
                    return Err(ParserError::MaxHeaderSize(context.bytes.stream_index,
                                                          max_header_size));
                }
            }

            bs_next!(context.bytes);

            if let ParserValue::Exit = dispatch(self, context)? {
                return Ok(());
            }
        }
    }

    /// Indicate whether the response whose head was just parsed has a body.
    ///
    /// This must be called in response to `Event::NeedsInput`, before feeding the rest of the
    /// stream. Responses to `HEAD` requests, and responses with status `1xx`, `204` or `304`, have
    /// no body. Calls at any other time are ignored.
    pub fn set_has_body(&mut self, has_body: bool) {
        if self.state != ParserState::DecideBody {
            warn!("Body directive ignored in state {:?}", self.state);

            return;
        }

        if !has_body {
            self.flags.insert(FL_SKIP_BODY);
        }
    }

    /// Indicates that the connection carrying the current message should be kept alive.
    ///
    /// HTTP/1.1 and later keep the connection alive unless `Connection: close` was sent. Earlier
    /// versions close it unless `Connection: keep-alive` was sent.
    pub fn should_keep_alive(&self) -> bool {
        if (self.http_major, self.http_minor) >= (1, 1) {
            !self.flags.is_close()
        } else {
            self.flags.is_keep_alive()
        }
    }

    /// Retrieve the body framing of the current message.
    ///
    /// This is only meaningful once the head has been parsed.
    pub fn framing(&self) -> Framing {
        if self.flags.is_skip_body() {
            Framing::NoBody
        } else if self.flags.is_chunked() {
            Framing::Chunked
        } else if self.content_length == 0 {
            Framing::NoBody
        } else if self.content_length > 0 {
            Framing::ContentLength(self.content_length as u64)
        } else if self.message_type == ParserType::Request || self.should_keep_alive() {
            Framing::NoBody
        } else {
            Framing::UntilEof
        }
    }

    /// Parse `stream`, invoking `handler` callbacks for each event.
    ///
    /// Parsing stops early with `Success::Callback` when a callback returns `false`, or when
    /// `on_headers_complete()` returns `BodyDirective::Abort`. Parsing cannot resume after that.
    /// After an upgrade, `Success::Upgrade` carries the offset of the first byte that belongs to the
    /// new protocol.
    pub fn parse<T: HttpHandler>(&mut self, handler: &mut T, stream: &[u8])
    -> Result<Success, ParserError> {
        let mut events    = EventBuffer::new(PARSE_EVENT_CAPACITY);
        let mut directive = BodyDirective::HasBody;
        let mut base      = 0;
        let mut position  = 0;

        loop {
            let chunk    = &stream[base..];
            let mut next = None;

            self.execute(chunk, &mut events);

            for event in events.iter() {
                if let Some(end) = event_end(event) {
                    position = base + end;
                }

                let proceed = match *event {
                    Event::MessageBegin(start) => {
                        handler.on_message_begin(start)
                    },
                    Event::Version(major, minor) => {
                        handler.on_version(major, minor)
                    },
                    Event::Url(span) => {
                        handler.on_url(span.slice(chunk))
                    },
                    Event::Path(span) => {
                        handler.on_path(span.slice(chunk))
                    },
                    Event::QueryString(span) => {
                        handler.on_query_string(span.slice(chunk))
                    },
                    Event::Fragment(span) => {
                        handler.on_fragment(span.slice(chunk))
                    },
                    Event::HeaderField(span) => {
                        handler.on_header_field(span.slice(chunk))
                    },
                    Event::HeaderValue(span) => {
                        handler.on_header_value(span.slice(chunk))
                    },
                    Event::HeadersEnd(flags) => {
                        directive = handler.on_headers_complete(flags);

                        directive != BodyDirective::Abort
                    },
                    Event::Body(span) => {
                        handler.on_body(span.slice(chunk))
                    },
                    Event::MessageComplete(offset) => {
                        if !handler.on_message_complete() {
                            return Ok(Success::Callback(base + offset));
                        }

                        if self.upgrade {
                            debug!("Upgrade at offset {}", base + offset);

                            return Ok(Success::Upgrade(base + offset));
                        }

                        true
                    },
                    Event::NeedsCapacity(offset) => {
                        next = Some(offset);

                        true
                    },
                    Event::NeedsInput(offset) => {
                        next = Some(offset);

                        true
                    },
                    Event::Error(error) => {
                        return Err(error.rebase(base));
                    }
                };

                if !proceed {
                    return Ok(Success::Callback(position));
                }
            }

            match next {
                Some(offset) => {
                    if self.state == ParserState::DecideBody {
                        self.set_has_body(directive != BodyDirective::SkipBody);
                    }

                    base += offset;
                },
                None => {
                    return Ok(Success::Finished(stream.len()));
                }
            }
        }
    }

    /// Retrieve the content length, or the remaining chunk size. `-1` when unknown.
    pub fn content_length(&self) -> i64 {
        self.content_length
    }

    /// Retrieve the message flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Retrieve the byte count of the current message head.
    pub fn header_bytes_read(&self) -> usize {
        self.header_bytes_read
    }

    /// Retrieve the header recognizer state.
    pub fn header_state(&self) -> HeaderState {
        self.header_state
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> u16 {
        self.http_major
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> u16 {
        self.http_minor
    }

    /// Indicates that the connection switched protocols.
    pub fn is_upgrade(&self) -> bool {
        self.upgrade
    }

    /// Retrieve the message type. With `ParserType::Either`, this is resolved by the first
    /// message.
    pub fn message_type(&self) -> ParserType {
        self.message_type
    }

    /// Retrieve the request method.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Retrieve the settings.
    pub fn settings(&self) -> ParserSettings {
        self.settings
    }

    /// Retrieve the current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Retrieve the response status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    // ---------------------------------------------------------------------------------------------
    // MESSAGE LIFECYCLE
    // ---------------------------------------------------------------------------------------------

    /// Reset per-message details at the first byte of a message.
    fn begin_message(&mut self) {
        self.content_length = -1;
        self.header_state   = HeaderState::General;
        self.http_major     = 0;
        self.http_minor     = 0;
        self.index          = 0;
        self.method         = None;
        self.status_code    = 0;
        self.upgrade        = false;

        self.flags.clear();
    }

    /// Pick the body state once the head is complete, completing the message when it has no body.
    fn decide_body(&mut self, context: &mut ParserContext) {
        match self.framing() {
            Framing::NoBody => {
                debug!("Message has no body");

                let offset = context.bytes.stream_index;

                context.push(Event::MessageComplete(offset));

                self.new_message();
            },
            Framing::Chunked => {
                debug!("Message body is chunked");

                set_state!(self, ChunkSize1);
            },
            Framing::ContentLength(length) => {
                debug!("Message body is {} bytes", length);

                set_state!(self, BodyByLength);
            },
            Framing::UntilEof => {
                debug!("Message body ends with the stream");

                set_state!(self, BodyUntilEof);
            }
        }
    }

    /// Move on after a complete message.
    ///
    /// Strict parsers die when the connection isn't kept alive.
    fn new_message(&mut self) {
        if self.settings.is_strict() && !self.should_keep_alive() {
            debug!("Connection not kept alive");

            set_state!(self, Dead);
        } else {
            self.state = self.start_state();
        }
    }

    /// Retrieve the state a message starts in.
    fn start_state(&self) -> ParserState {
        match self.message_type {
            ParserType::Request  => ParserState::StartRequest,
            ParserType::Response => ParserState::StartResponse,
            ParserType::Either   => ParserState::Detect1
        }
    }

    /// Start matching the method beginning with the current byte.
    fn start_method(&mut self, context: &mut ParserContext) -> Result<ParserValue, ParserError> {
        match Method::from_first_byte(context.bytes.byte) {
            Some(method) => {
                self.method = Some(method);
                self.index  = 1;

                transition!(self, RequestMethod);
            },
            None => {
                exit_error!(Method, context);
            }
        }
    }

    /// Handle a request line without an HTTP version.
    fn http09(&mut self, context: &mut ParserContext) {
        self.http_major = 0;
        self.http_minor = 9;

        context.push(Event::Version(0, 9));
    }

    /// Emit up to `content_length` bytes, starting with the current byte, as body data.
    fn consume_body(&mut self, context: &mut ParserContext) -> usize {
        let available = bs_available!(context.bytes) + 1;
        let length    = if (available as u64) < self.content_length as u64 {
            available
        } else {
            self.content_length as usize
        };
        let offset    = context.offset();

        context.push(Event::Body(Span::new(offset, length)));

        bs_jump!(context.bytes, length - 1);

        self.content_length -= length as i64;

        length
    }

    // ---------------------------------------------------------------------------------------------
    // DETECTION STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn dead(&mut self, context: &mut ParserContext) -> Result<ParserValue, ParserError> {
        Err(ParserError::Dead(context.offset()))
    }

    #[inline]
    pub(crate) fn detect1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'\r' || context.bytes.byte == b'\n' {
            transition!(self);
        }

        self.begin_message();

        if context.bytes.byte == b'H' {
            transition!(self, Detect2);
        }

        self.message_type = ParserType::Request;

        self.start_method(context)
    }

    #[inline]
    pub(crate) fn detect2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'T' {
            self.message_type = ParserType::Response;

            transition!(self, ResponseHttp3);
        } else if context.bytes.byte == b'E' {
            self.message_type = ParserType::Request;
            self.method       = Some(Method::Head);
            self.index        = 2;

            transition!(self, RequestMethod);
        }

        exit_error!(Method, context);
    }

    // ---------------------------------------------------------------------------------------------
    // RESPONSE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn start_response(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        match context.bytes.byte {
            b'\r' | b'\n' => {
                transition!(self);
            },
            b'H' => {
                self.begin_message();

                transition!(self, ResponseHttp2);
            },
            _ => {
                exit_error!(Http, context);
            }
        }
    }

    #[inline]
    pub(crate) fn response_http2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'T', Http);
        transition!(self, ResponseHttp3);
    }

    #[inline]
    pub(crate) fn response_http3(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'T', Http);
        transition!(self, ResponseHttp4);
    }

    #[inline]
    pub(crate) fn response_http4(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'P', Http);
        transition!(self, ResponseHttp5);
    }

    #[inline]
    pub(crate) fn response_http5(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'/', Http);
        transition!(self, ResponseVersionMajor1);
    }

    #[inline]
    pub(crate) fn response_version_major1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte < b'1' || context.bytes.byte > b'9' {
            exit_error!(Version, context);
        }

        self.http_major = (context.bytes.byte - b'0') as u16;

        transition!(self, ResponseVersionMajor2);
    }

    #[inline]
    pub(crate) fn response_version_major2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'.' {
            transition!(self, ResponseVersionMinor1);
        } else if !is_digit!(context.bytes.byte) {
            exit_error!(Version, context);
        }

        collect_digit!(context, self.http_major, Version);
        transition!(self);
    }

    #[inline]
    pub(crate) fn response_version_minor1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if !is_digit!(context.bytes.byte) {
            exit_error!(Version, context);
        }

        self.http_minor = (context.bytes.byte - b'0') as u16;

        transition!(self, ResponseVersionMinor2);
    }

    #[inline]
    pub(crate) fn response_version_minor2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b' ' {
            transition!(self, ResponseStatusCode1);
        } else if !is_digit!(context.bytes.byte) {
            exit_error!(Version, context);
        }

        collect_digit!(context, self.http_minor, Version);
        transition!(self);
    }

    #[inline]
    pub(crate) fn response_status_code1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b' ' {
            transition!(self);
        } else if !is_digit!(context.bytes.byte) {
            exit_error!(StatusCode, context);
        }

        self.status_code = (context.bytes.byte - b'0') as u16;

        transition!(self, ResponseStatusCode2);
    }

    #[inline]
    pub(crate) fn response_status_code2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_digit!(context.bytes.byte) {
            collect_digit!(context, self.status_code, StatusCode);
            transition!(self);
        }

        match context.bytes.byte {
            b' '  => set_state!(self, ResponseStatus),
            b'\r' => set_state!(self, ResponseLineLf),
            b'\n' => set_state!(self, FirstHeaderField),
            _     => exit_error!(StatusCode, context)
        }

        debug!("Response {} HTTP/{}.{}", self.status_code, self.http_major, self.http_minor);

        context.push(Event::MessageBegin(MessageStart::Response(self.status_code)));
        context.push(Event::Version(self.http_major, self.http_minor));

        transition!(self);
    }

    #[inline]
    pub(crate) fn response_status(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        match context.bytes.byte {
            b'\r' => transition!(self, ResponseLineLf),
            b'\n' => transition!(self, FirstHeaderField),
            _     => transition!(self)
        }
    }

    #[inline]
    pub(crate) fn response_line_lf(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'\n', CrlfSequence);
        transition!(self, FirstHeaderField);
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn start_request(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'\r' || context.bytes.byte == b'\n' {
            transition!(self);
        }

        self.begin_message();
        self.start_method(context)
    }

    #[inline]
    pub(crate) fn request_method(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        let method = match self.method {
            Some(method) => method,
            None         => exit_error!(Method, context)
        };

        let byte = context.bytes.byte;
        let name = method.as_bytes();

        if byte == b' ' && self.index == name.len() {
            debug!("Request {}", method);

            context.push(Event::MessageBegin(MessageStart::Request(method)));

            transition!(self, RequestUrl1);
        } else if self.index < name.len() && byte == name[self.index] {
            self.index += 1;
        } else if let Some(corrected) = method.correct(self.index, byte) {
            self.method  = Some(corrected);
            self.index  += 1;
        } else {
            exit_error!(Method, context);
        }

        transition!(self);
    }

    #[inline]
    pub(crate) fn request_url1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b' ' {
            transition!(self);
        } else if context.bytes.byte == b'/' {
            mark!(context, Url);
            mark!(context, Path);

            transition!(self, RequestPath);
        } else if is_alpha!(context.bytes.byte) {
            mark!(context, Url);

            transition!(self, RequestSchema);
        }

        exit_error!(Url, context);
    }

    #[inline]
    pub(crate) fn request_schema(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_alpha!(context.bytes.byte) {
            transition!(self);
        } else if context.bytes.byte == b':' {
            transition!(self, RequestSchemaSlash1);
        } else if context.bytes.byte == b'.' {
            transition!(self, RequestHost);
        }

        exit_error!(Url, context);
    }

    #[inline]
    pub(crate) fn request_schema_slash1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'/', Url);
        transition!(self, RequestSchemaSlash2);
    }

    #[inline]
    pub(crate) fn request_schema_slash2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'/', Url);
        transition!(self, RequestHost);
    }

    #[inline]
    pub(crate) fn request_host(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        let byte = context.bytes.byte;

        if is_alpha!(byte) || is_digit!(byte) || byte == b'.' || byte == b'-' {
            transition!(self);
        }

        match byte {
            b':' => {
                transition!(self, RequestPort);
            },
            b'/' => {
                mark!(context, Path);

                transition!(self, RequestPath);
            },
            b' ' => {
                // absolute URL without a path
                record_mark!(context, Url);

                transition!(self, RequestHttp1);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_port(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        match context.bytes.byte {
            b'0'..=b'9' => {
                transition!(self);
            },
            b'/' => {
                mark!(context, Path);

                transition!(self, RequestPath);
            },
            b' ' => {
                record_mark!(context, Url);

                transition!(self, RequestHttp1);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_path(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_url_char(context.bytes.byte) {
            transition!(self);
        }

        match context.bytes.byte {
            b' ' => {
                record_mark!(context, Url);
                record_mark!(context, Path);

                transition!(self, RequestHttp1);
            },
            b'\r' => {
                record_mark!(context, Url);
                record_mark!(context, Path);

                self.http09(context);

                transition!(self, RequestLineLf);
            },
            b'\n' => {
                record_mark!(context, Url);
                record_mark!(context, Path);

                self.http09(context);

                transition!(self, FirstHeaderField);
            },
            b'?' => {
                record_mark!(context, Path);

                transition!(self, RequestQueryString1);
            },
            b'#' => {
                record_mark!(context, Path);

                transition!(self, RequestFragment1);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_query_string1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_url_char(context.bytes.byte) {
            mark!(context, QueryString);

            transition!(self, RequestQueryString2);
        }

        match context.bytes.byte {
            b'?' => {
                transition!(self);
            },
            b' ' => {
                record_mark!(context, Url);

                transition!(self, RequestHttp1);
            },
            b'\r' => {
                record_mark!(context, Url);

                self.http09(context);

                transition!(self, RequestLineLf);
            },
            b'\n' => {
                record_mark!(context, Url);

                self.http09(context);

                transition!(self, FirstHeaderField);
            },
            b'#' => {
                transition!(self, RequestFragment1);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_query_string2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_url_char(context.bytes.byte) {
            transition!(self);
        }

        match context.bytes.byte {
            b'?' => {
                transition!(self);
            },
            b' ' => {
                record_mark!(context, Url);
                record_mark!(context, QueryString);

                transition!(self, RequestHttp1);
            },
            b'\r' => {
                record_mark!(context, Url);
                record_mark!(context, QueryString);

                self.http09(context);

                transition!(self, RequestLineLf);
            },
            b'\n' => {
                record_mark!(context, Url);
                record_mark!(context, QueryString);

                self.http09(context);

                transition!(self, FirstHeaderField);
            },
            b'#' => {
                record_mark!(context, QueryString);

                transition!(self, RequestFragment1);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_fragment1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_url_char(context.bytes.byte) || context.bytes.byte == b'?' {
            mark!(context, Fragment);

            transition!(self, RequestFragment2);
        }

        match context.bytes.byte {
            b'#' => {
                transition!(self);
            },
            b' ' => {
                record_mark!(context, Url);

                transition!(self, RequestHttp1);
            },
            b'\r' => {
                record_mark!(context, Url);

                self.http09(context);

                transition!(self, RequestLineLf);
            },
            b'\n' => {
                record_mark!(context, Url);

                self.http09(context);

                transition!(self, FirstHeaderField);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_fragment2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_url_char(context.bytes.byte) {
            transition!(self);
        }

        match context.bytes.byte {
            b'?' | b'#' => {
                transition!(self);
            },
            b' ' => {
                record_mark!(context, Url);
                record_mark!(context, Fragment);

                transition!(self, RequestHttp1);
            },
            b'\r' => {
                record_mark!(context, Url);
                record_mark!(context, Fragment);

                self.http09(context);

                transition!(self, RequestLineLf);
            },
            b'\n' => {
                record_mark!(context, Url);
                record_mark!(context, Fragment);

                self.http09(context);

                transition!(self, FirstHeaderField);
            },
            _ => {
                exit_error!(Url, context);
            }
        }
    }

    #[inline]
    pub(crate) fn request_http1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        match context.bytes.byte {
            b'H' => transition!(self, RequestHttp2),
            b' ' => transition!(self),
            _    => exit_error!(Http, context)
        }
    }

    #[inline]
    pub(crate) fn request_http2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'T', Http);
        transition!(self, RequestHttp3);
    }

    #[inline]
    pub(crate) fn request_http3(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'T', Http);
        transition!(self, RequestHttp4);
    }

    #[inline]
    pub(crate) fn request_http4(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'P', Http);
        transition!(self, RequestHttp5);
    }

    #[inline]
    pub(crate) fn request_http5(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'/', Http);
        transition!(self, RequestVersionMajor1);
    }

    #[inline]
    pub(crate) fn request_version_major1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte < b'1' || context.bytes.byte > b'9' {
            exit_error!(Version, context);
        }

        self.http_major = (context.bytes.byte - b'0') as u16;

        transition!(self, RequestVersionMajor2);
    }

    #[inline]
    pub(crate) fn request_version_major2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'.' {
            transition!(self, RequestVersionMinor1);
        } else if !is_digit!(context.bytes.byte) {
            exit_error!(Version, context);
        }

        collect_digit!(context, self.http_major, Version);
        transition!(self);
    }

    #[inline]
    pub(crate) fn request_version_minor1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if !is_digit!(context.bytes.byte) {
            exit_error!(Version, context);
        }

        self.http_minor = (context.bytes.byte - b'0') as u16;

        transition!(self, RequestVersionMinor2);
    }

    #[inline]
    pub(crate) fn request_version_minor2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if is_digit!(context.bytes.byte) {
            collect_digit!(context, self.http_minor, Version);
            transition!(self);
        }

        match context.bytes.byte {
            b'\r' => set_state!(self, RequestLineLf),
            b'\n' => set_state!(self, FirstHeaderField),
            _     => exit_error!(Version, context)
        }

        context.push(Event::Version(self.http_major, self.http_minor));

        transition!(self);
    }

    #[inline]
    pub(crate) fn request_line_lf(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte != b'\n' {
            exit_error!(CrlfSequence, context);
        }

        transition!(self, FirstHeaderField);
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn first_header_field(&mut self, context: &mut ParserContext, section: Section)
    -> Result<ParserValue, ParserError> {
        match context.bytes.byte {
            b'\r' => {
                transition!(self, HeadersLf);
            },
            b'\n' => {
                // bare line feed ends the head
                set_state!(self, HeadersLf);

                return self.headers_end(context, section);
            },
            _ => {
            }
        }

        if !is_alpha!(context.bytes.byte) {
            exit_error!(HeaderField, context);
        }

        mark!(context, HeaderField);

        self.index        = 0;
        self.header_state = match header_char(context.bytes.byte) {
            b'c' => HeaderState::C,
            b'p' => HeaderState::MatchingProxyConnection,
            b't' => HeaderState::MatchingTransferEncoding,
            b'u' => HeaderState::MatchingUpgrade,
            _    => HeaderState::General
        };

        transition!(self, HeaderField);
    }

    #[inline]
    pub(crate) fn header_field(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        let byte = header_char(context.bytes.byte);

        if byte == 0 {
            match context.bytes.byte {
                b':' => {
                    record_mark!(context, HeaderField);

                    transition!(self, FirstHeaderValue);
                },
                b'\r' => {
                    record_mark!(context, HeaderField);

                    transition!(self, HeaderLf);
                },
                b'\n' => {
                    record_mark!(context, HeaderField);

                    transition!(self, FirstHeaderField);
                },
                _ => {
                    exit_error!(HeaderField, context);
                }
            }
        }

        match self.header_state {
            HeaderState::General => {
            },
            HeaderState::C => {
                self.index        += 1;
                self.header_state  = if byte == b'o' {
                    HeaderState::CO
                } else {
                    HeaderState::General
                };
            },
            HeaderState::CO => {
                self.index        += 1;
                self.header_state  = if byte == b'n' {
                    HeaderState::CON
                } else {
                    HeaderState::General
                };
            },
            HeaderState::CON => {
                self.index        += 1;
                self.header_state  = match byte {
                    b'n' => HeaderState::MatchingConnection,
                    b't' => HeaderState::MatchingContentLength,
                    _    => HeaderState::General
                };
            },
            HeaderState::MatchingConnection => {
                match_name!(self, CONNECTION, byte, Connection);
            },
            HeaderState::MatchingProxyConnection => {
                match_name!(self, PROXY_CONNECTION, byte, Connection);
            },
            HeaderState::MatchingContentLength => {
                match_name!(self, CONTENT_LENGTH, byte, ContentLength);
            },
            HeaderState::MatchingTransferEncoding => {
                match_name!(self, TRANSFER_ENCODING, byte, TransferEncoding);
            },
            HeaderState::MatchingUpgrade => {
                match_name!(self, UPGRADE, byte, Upgrade);
            },
            HeaderState::Connection
            | HeaderState::ContentLength
            | HeaderState::TransferEncoding
            | HeaderState::Upgrade => {
                // spaces may precede the colon
                if byte != b' ' {
                    self.header_state = HeaderState::General;
                }
            },
            _ => {
                self.header_state = HeaderState::General;
            }
        }

        transition!(self);
    }

    #[inline]
    pub(crate) fn first_header_value(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b' ' {
            transition!(self);
        }

        mark!(context, HeaderValue);

        self.index = 0;

        if self.header_state == HeaderState::ContentLength {
            content_length_check!(context);
        }

        let byte = header_char(context.bytes.byte);

        if byte == 0 {
            match context.bytes.byte {
                b'\r' => {
                    record_mark!(context, HeaderValue);

                    self.header_state = HeaderState::General;

                    transition!(self, HeaderLf);
                },
                b'\n' => {
                    record_mark!(context, HeaderValue);

                    self.header_state = HeaderState::General;

                    transition!(self, FirstHeaderField);
                },
                _ => {
                    self.header_state = HeaderState::General;

                    transition!(self, HeaderValue);
                }
            }
        }

        match self.header_state {
            HeaderState::Upgrade => {
                self.flags.insert(FL_UPGRADE);

                self.header_state = HeaderState::General;
            },
            HeaderState::TransferEncoding => {
                self.header_state = if byte == b'c' {
                    HeaderState::MatchingChunked
                } else {
                    HeaderState::General
                };
            },
            HeaderState::ContentLength => {
                if !is_digit!(byte) {
                    exit_error!(ContentLength, context);
                }

                self.content_length = (byte - b'0') as i64;
            },
            HeaderState::Connection => {
                self.header_state = match byte {
                    b'k' => HeaderState::MatchingKeepAlive,
                    b'c' => HeaderState::MatchingClose,
                    _    => HeaderState::General
                };
            },
            _ => {
                self.header_state = HeaderState::General;
            }
        }

        transition!(self, HeaderValue);
    }

    #[inline]
    pub(crate) fn header_value(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if self.header_state == HeaderState::ContentLength {
            content_length_check!(context);
        }

        let byte = header_char(context.bytes.byte);

        if byte == 0 {
            match context.bytes.byte {
                b'\r' => {
                    record_mark!(context, HeaderValue);

                    transition!(self, HeaderLf);
                },
                b'\n' => {
                    record_mark!(context, HeaderValue);

                    return self.header_lf(context);
                },
                _ => {
                    transition!(self);
                }
            }
        }

        match self.header_state {
            HeaderState::General => {
            },
            HeaderState::ContentLength => {
                if !is_digit!(byte) {
                    exit_error!(ContentLength, context);
                }

                self.content_length = match self.content_length
                                                .checked_mul(10)
                                                .and_then(|length| {
                                                    length.checked_add((byte - b'0') as i64)
                                                }) {
                    Some(length) => length,
                    None         => return Err(ParserError::ContentLengthOverflow(
                                        context.offset()
                                    ))
                };
            },
            HeaderState::MatchingChunked => {
                match_name!(self, CHUNKED, byte, Chunked);
            },
            HeaderState::MatchingKeepAlive => {
                match_name!(self, KEEP_ALIVE, byte, KeepAlive);
            },
            HeaderState::MatchingClose => {
                match_name!(self, CLOSE, byte, Close);
            },
            HeaderState::Chunked
            | HeaderState::KeepAlive
            | HeaderState::Close => {
                if byte != b' ' {
                    self.header_state = HeaderState::General;
                }
            },
            _ => {
                self.header_state = HeaderState::General;
            }
        }

        transition!(self);
    }

    #[inline]
    pub(crate) fn header_lf(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'\n', CrlfSequence);

        match self.header_state {
            HeaderState::KeepAlive => self.flags.insert(FL_KEEP_ALIVE),
            HeaderState::Close     => self.flags.insert(FL_CLOSE),
            HeaderState::Chunked   => self.flags.insert(FL_CHUNKED),
            _                      => {}
        }

        transition!(self, FirstHeaderField);
    }

    #[inline]
    pub(crate) fn headers_lf(&mut self, context: &mut ParserContext, section: Section)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'\n', CrlfSequence);

        self.headers_end(context, section)
    }

    /// Finish the head or the trailer at the current line feed.
    fn headers_end(&mut self, context: &mut ParserContext, section: Section)
    -> Result<ParserValue, ParserError> {
        let offset = context.bytes.stream_index;

        if section == Section::Trailer {
            debug!("Trailer complete");

            self.flags.remove(FL_TRAILING);

            context.push(Event::MessageComplete(offset));

            self.new_message();

            transition!(self);
        }

        self.header_bytes_read = 0;

        if self.flags.is_upgrade() || self.method == Some(Method::Connect) {
            self.upgrade = true;
        }

        context.push(Event::HeadersEnd(self.flags));

        if self.upgrade {
            debug!("Connection upgraded at offset {}", offset);

            context.push(Event::MessageComplete(offset));

            set_state!(self, Dead);
            exit!();
        }

        if self.message_type == ParserType::Response {
            trace!("Response framing deferred at offset {}", offset);

            set_state!(self, DecideBody);

            context.push(Event::NeedsInput(offset));

            exit!();
        }

        self.decide_body(context);

        transition!(self);
    }

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    /// Framing decision reached inside the scan loop. The current byte belongs to the body, so it
    /// is replayed.
    #[inline]
    pub(crate) fn decide_body_inline(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        bs_replay!(context.bytes);

        self.decide_body(context);

        transition!(self);
    }

    #[inline]
    pub(crate) fn chunk_size1(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        match unhex(context.bytes.byte) {
            Some(digit) => {
                self.content_length = digit as i64;

                transition!(self, ChunkSize2);
            },
            None => {
                exit_error!(ChunkSize, context);
            }
        }
    }

    #[inline]
    pub(crate) fn chunk_size2(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'\r' {
            transition!(self, ChunkSizeLf);
        }

        match unhex(context.bytes.byte) {
            Some(digit) => {
                self.content_length = match self.content_length
                                                .checked_mul(16)
                                                .and_then(|length| {
                                                    length.checked_add(digit as i64)
                                                }) {
                    Some(length) => length,
                    None         => return Err(ParserError::ChunkSizeOverflow(context.offset()))
                };

                transition!(self);
            },
            None => {
                if context.bytes.byte == b';' || context.bytes.byte == b' ' {
                    transition!(self, ChunkParameters);
                }

                exit_error!(ChunkSize, context);
            }
        }
    }

    #[inline]
    pub(crate) fn chunk_parameters(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        if context.bytes.byte == b'\r' {
            transition!(self, ChunkSizeLf);
        }

        transition!(self);
    }

    #[inline]
    pub(crate) fn chunk_size_lf(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'\n', CrlfSequence);

        if self.content_length == 0 {
            trace!("Last chunk, parsing trailer");

            self.flags.insert(FL_TRAILING);

            transition!(self, FirstHeaderField);
        }

        transition!(self, ChunkData);
    }

    #[inline]
    pub(crate) fn chunk_data(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        self.consume_body(context);

        if self.content_length == 0 {
            transition!(self, ChunkDataCr);
        }

        transition!(self);
    }

    #[inline]
    pub(crate) fn chunk_data_cr(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'\r', CrlfSequence);
        transition!(self, ChunkDataLf);
    }

    #[inline]
    pub(crate) fn chunk_data_lf(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        strict_check!(self, context, context.bytes.byte != b'\n', CrlfSequence);
        transition!(self, ChunkSize1);
    }

    #[inline]
    pub(crate) fn body_by_length(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        self.consume_body(context);

        if self.content_length == 0 {
            debug!("Body complete");

            let offset = context.bytes.stream_index;

            context.push(Event::MessageComplete(offset));

            self.new_message();
        }

        transition!(self);
    }

    #[inline]
    pub(crate) fn body_until_eof(&mut self, context: &mut ParserContext)
    -> Result<ParserValue, ParserError> {
        let length = bs_available!(context.bytes) + 1;
        let offset = context.offset();

        context.push(Event::Body(Span::new(offset, length)));

        bs_jump!(context.bytes, length - 1);

        transition!(self);
    }
}

/// Offset just past the data `event` refers to, when it refers to any.
fn event_end(event: &Event) -> Option<usize> {
    match *event {
        Event::MessageComplete(offset)
        | Event::NeedsCapacity(offset)
        | Event::NeedsInput(offset) => Some(offset),
        _ => event.span().map(|span| span.end())
    }
}
