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

use http1::flags::Flags;
use http1::method::Method;
use http1::parser_error::ParserError;

use std::slice;

/// Minimum event buffer capacity.
///
/// A scan never starts processing a byte unless this many slots are free, which leaves room for the
/// events a single byte produces, the spans that must be flushed when the scan stops, and the
/// trailing `NeedsCapacity` or `Error` event.
pub const MIN_EVENT_CAPACITY: usize = 6;

/// Zero-copy reference into the chunk passed to a single `Parser::execute()` call.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub struct Span {
    /// Offset of the first byte.
    pub offset: usize,

    /// Length in bytes. This is never `0` for emitted spans.
    pub length: usize
}

impl Span {
    /// Create a new `Span`.
    pub fn new(offset: usize, length: usize) -> Span {
        Span {
            offset: offset,
            length: length
        }
    }

    /// Offset just past the last byte.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Resolve this span against the chunk it was produced from.
    ///
    /// # Panics
    ///
    /// Panics when `stream` is shorter than the span, which means it isn't the chunk this span
    /// came from.
    pub fn slice<'a>(&self, stream: &'a [u8]) -> &'a [u8] {
        &stream[self.offset..self.end()]
    }
}

/// The start of a message.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum MessageStart {
    /// A request with the given method.
    Request(Method),

    /// A response with the given status code.
    Response(u16)
}

/// Parser events, in input byte order.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Event {
    /// A request method or response status code has been parsed.
    MessageBegin(MessageStart),

    /// HTTP major and minor version.
    Version(u16, u16),

    /// The entire request target.
    Url(Span),

    /// Request path.
    Path(Span),

    /// Request query string, without the leading `?`.
    QueryString(Span),

    /// Request fragment, without the leading `#`.
    Fragment(Span),

    /// Header field. Trailer fields of chunked messages are reported the same way.
    HeaderField(Span),

    /// Header value.
    HeaderValue(Span),

    /// The blank line ending the head has been parsed. Carries the flags collected from the head.
    HeadersEnd(Flags),

    /// Body data.
    Body(Span),

    /// The message is complete. Carries the offset just past its last byte.
    MessageComplete(usize),

    /// The event buffer is full. Carries the offset of the first unprocessed byte, from which the
    /// remaining input must be fed again.
    NeedsCapacity(usize),

    /// Response framing depends on the request it answers. Carries the offset just past the head.
    /// Call `Parser::set_has_body()`, then feed the remaining input.
    NeedsInput(usize),

    /// Parsing failed and the parser is dead.
    Error(ParserError)
}

impl Event {
    /// Retrieve the span carried by this event, if any.
    pub fn span(&self) -> Option<Span> {
        match *self {
            Event::Url(span)
            | Event::Path(span)
            | Event::QueryString(span)
            | Event::Fragment(span)
            | Event::HeaderField(span)
            | Event::HeaderValue(span)
            | Event::Body(span) => Some(span),
            _ => None
        }
    }

    /// Indicates that this event always ends the batch it was emitted into.
    pub fn is_terminal(&self) -> bool {
        match *self {
            Event::NeedsCapacity(_) | Event::NeedsInput(_) | Event::Error(_) => true,
            _ => false
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Bounded, reusable output buffer for a single `Parser::execute()` call.
pub struct EventBuffer {
    /// Maximum event count.
    capacity: usize,

    /// Events.
    events: Vec<Event>
}

impl EventBuffer {
    /// Create a new `EventBuffer` holding at most `capacity` events.
    ///
    /// The capacity is raised to `MIN_EVENT_CAPACITY` when it's lower.
    pub fn new(capacity: usize) -> EventBuffer {
        let capacity = if capacity < MIN_EVENT_CAPACITY {
            MIN_EVENT_CAPACITY
        } else {
            capacity
        };

        EventBuffer {
            capacity: capacity,
            events:   Vec::with_capacity(capacity)
        }
    }

    /// Retrieve the events as a slice.
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Retrieve the maximum event count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Indicates that no events are stored.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate the events in order.
    pub fn iter(&self) -> slice::Iter<Event> {
        self.events.iter()
    }

    /// Retrieve the last event.
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Retrieve the event count.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Append `event`.
    pub(crate) fn push(&mut self, event: Event) {
        debug_assert!(self.events.len() < self.capacity);

        self.events.push(event);
    }

    /// Retrieve the count of free slots.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.events.len())
    }
}

impl<'a> IntoIterator for &'a EventBuffer {
    type Item     = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> slice::Iter<'a, Event> {
        self.events.iter()
    }
}
