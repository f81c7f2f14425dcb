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

use http1::*;

use std::mem;

mod request;
mod streaming;

/// Event with its span data copied out of the chunk it was found in.
#[derive(Clone,Debug,PartialEq)]
pub enum Owned {
    Begin(MessageStart),
    Version(u16, u16),
    Url(Vec<u8>),
    Path(Vec<u8>),
    QueryString(Vec<u8>),
    Fragment(Vec<u8>),
    Field(Vec<u8>),
    Value(Vec<u8>),
    HeadersEnd(Flags),
    Body(Vec<u8>),
    Complete,
    Error(ParserError)
}

impl Owned {
    fn append(&mut self, data: &[u8]) {
        match *self {
            Owned::Url(ref mut vec)
            | Owned::Path(ref mut vec)
            | Owned::QueryString(ref mut vec)
            | Owned::Fragment(ref mut vec)
            | Owned::Field(ref mut vec)
            | Owned::Value(ref mut vec)
            | Owned::Body(ref mut vec) => vec.extend_from_slice(data),
            _ => panic!("append() on {:?}", self)
        }
    }
}

pub fn body(data: &[u8]) -> Owned {
    Owned::Body(data.to_vec())
}

pub fn field(data: &[u8]) -> Owned {
    Owned::Field(data.to_vec())
}

pub fn fragment(data: &[u8]) -> Owned {
    Owned::Fragment(data.to_vec())
}

pub fn path(data: &[u8]) -> Owned {
    Owned::Path(data.to_vec())
}

pub fn query_string(data: &[u8]) -> Owned {
    Owned::QueryString(data.to_vec())
}

pub fn request(method: Method) -> Owned {
    Owned::Begin(MessageStart::Request(method))
}

pub fn response(status_code: u16) -> Owned {
    Owned::Begin(MessageStart::Response(status_code))
}

pub fn url(data: &[u8]) -> Owned {
    Owned::Url(data.to_vec())
}

pub fn value(data: &[u8]) -> Owned {
    Owned::Value(data.to_vec())
}

/// Feed `chunks` in order, resuming after every suspension, and collect the events.
///
/// Spans continued across a chunk boundary or a suspension are merged, so the result doesn't
/// depend on how the input was split. Error offsets are made relative to the whole input, and the
/// first error ends the transcript.
pub fn transcript(parser: &mut Parser, chunks: &[&[u8]], capacity: usize, has_body: bool)
-> Vec<Owned> {
    let mut events = EventBuffer::new(capacity);
    let mut owned  = Vec::new();
    let mut open   = Vec::new();
    let mut base   = 0;

    for chunk in chunks.iter() {
        let mut position = 0;

        loop {
            let stream = &chunk[position..];

            parser.execute(stream, &mut events);

            let (stop, next) = match events.last() {
                Some(&Event::NeedsCapacity(offset)) => (offset, Some((offset, false))),
                Some(&Event::NeedsInput(offset))    => (offset, Some((offset, true))),
                _                                   => (stream.len(), None)
            };

            let mut still_open = Vec::new();

            for event in events.iter() {
                let item = match *event {
                    Event::MessageBegin(start)     => Owned::Begin(start),
                    Event::Version(major, minor)   => Owned::Version(major, minor),
                    Event::Url(span)               => Owned::Url(span.slice(stream).to_vec()),
                    Event::Path(span)              => Owned::Path(span.slice(stream).to_vec()),
                    Event::QueryString(span)       => {
                        Owned::QueryString(span.slice(stream).to_vec())
                    },
                    Event::Fragment(span)          => Owned::Fragment(span.slice(stream).to_vec()),
                    Event::HeaderField(span)       => Owned::Field(span.slice(stream).to_vec()),
                    Event::HeaderValue(span)       => Owned::Value(span.slice(stream).to_vec()),
                    Event::HeadersEnd(flags)       => Owned::HeadersEnd(flags),
                    Event::Body(span)              => Owned::Body(span.slice(stream).to_vec()),
                    Event::MessageComplete(_)      => Owned::Complete,
                    Event::Error(error)            => Owned::Error(error.rebase(base + position)),
                    Event::NeedsCapacity(_)
                    | Event::NeedsInput(_)         => continue
                };

                let index = match event.span() {
                    Some(span) if span.offset == 0 => {
                        open.iter()
                            .cloned()
                            .find(|&index: &usize| {
                                mem::discriminant(&owned[index]) == mem::discriminant(&item)
                            })
                    },
                    _ => None
                };

                let index = match index {
                    Some(index) => {
                        if let Some(span) = event.span() {
                            owned[index].append(span.slice(stream));
                        }

                        index
                    },
                    None => {
                        owned.push(item);
                        owned.len() - 1
                    }
                };

                if event.span().map_or(false, |span| span.end() == stop) {
                    still_open.push(index);
                }
            }

            open = still_open;

            if let Some(&Event::Error(_)) = events.last() {
                return owned;
            }

            match next {
                Some((offset, needs_input)) => {
                    if needs_input {
                        parser.set_has_body(has_body);
                    }

                    position += offset;
                },
                None => break
            }
        }

        base += chunk.len();
    }

    owned
}

/// Feed `stream` in one piece.
pub fn whole(parser: &mut Parser, stream: &[u8]) -> Vec<Owned> {
    transcript(parser, &[stream], 64, true)
}

/// Feed `stream` in pieces of `size` bytes.
pub fn split(parser: &mut Parser, stream: &[u8], size: usize) -> Vec<Owned> {
    let chunks = stream.chunks(size).collect::<Vec<&[u8]>>();

    transcript(parser, &chunks, 64, true)
}

pub fn request_parser() -> Parser {
    Parser::new(ParserType::Request)
}

pub fn response_parser() -> Parser {
    Parser::new(ParserType::Response)
}

pub fn lenient(mode: ParserType) -> Parser {
    Parser::with_settings(mode, ParserSettings::new().strict(false))
}

/// Feed `stream` and assert that the parser fails with `error`.
pub fn assert_error(parser: &mut Parser, stream: &[u8], error: ParserError) {
    match whole(parser, stream).pop() {
        Some(Owned::Error(error_)) => {
            assert_eq!(error, error_);
            assert_eq!(ParserState::Dead, parser.state());
        },
        other => panic!("assert_error() Error match failed: {:?}", other)
    }
}

/// Feed `stream` and assert the state the parser ends in.
pub fn assert_state(parser: &mut Parser, stream: &[u8], state: ParserState) {
    let owned = whole(parser, stream);

    if let Some(&Owned::Error(error)) = owned.last() {
        panic!("assert_state() unexpected error: {}", error);
    }

    assert_eq!(state, parser.state());
}

/// Separate the URL spans, which enclose the other request target spans, from the rest.
///
/// The position of a URL among the target spans depends on where the input was split, while the
/// order of everything else doesn't.
pub fn without_urls(owned: Vec<Owned>) -> (Vec<Owned>, Vec<Vec<u8>>) {
    let mut rest = Vec::new();
    let mut urls = Vec::new();

    for item in owned.into_iter() {
        match item {
            Owned::Url(data) => urls.push(data),
            item             => rest.push(item)
        }
    }

    (rest, urls)
}
