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
use http1::test::*;

const REQUESTS: [&'static [u8]; 4] = [
    b"GET /index.html?q=1#top HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n",
    b"POST http://example.com:8080/form?a=b HTTP/1.1\r\nContent-Length: 11\r\n\r\nhello world",
    b"POST /upload HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n\
      4;ext=1\r\nWiki\r\n5\r\npedia\r\n0\r\nExpires: never\r\n\r\n",
    b"GET /a HTTP/1.1\r\n\r\nDELETE /b?c HTTP/1.1\r\nConnection: close\r\n\r\n"
];

const RESPONSES: [&'static [u8]; 3] = [
    b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nServer: test\r\n\r\nhello",
    b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n3\r\nabc\r\n0\r\n\r\n",
    b"HTTP/1.1 204 No Content\r\n\r\nHTTP/1.1 301 Moved\r\nLocation: /x\r\n\r\n"
];

#[test]
fn split_header_value() {
    let mut p      = request_parser();
    let mut events = EventBuffer::new(16);

    p.execute(b"GET / HTTP/1.1\r\nHost: ex", &mut events);

    assert_eq!(
        events.as_slice(),
        &[
            Event::MessageBegin(MessageStart::Request(Method::Get)),
            Event::Url(Span::new(4, 1)),
            Event::Path(Span::new(4, 1)),
            Event::Version(1, 1),
            Event::HeaderField(Span::new(16, 4)),
            Event::HeaderValue(Span::new(22, 2))
        ]
    );

    p.execute(b"ample.com\r\n\r\n", &mut events);

    assert_eq!(
        events.as_slice(),
        &[
            Event::HeaderValue(Span::new(0, 9)),
            Event::HeadersEnd(Flags::default()),
            Event::MessageComplete(13)
        ]
    );
}

#[test]
fn split_header_value_transcript() {
    let mut p = request_parser();

    assert_eq!(
        transcript(&mut p, &[b"GET / HTTP/1.1\r\nHost: ex", b"ample.com\r\n\r\n"], 16, true),
        whole(&mut request_parser(), b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n")
    );
}

#[test]
fn every_split_request() {
    for stream in REQUESTS.iter() {
        let expected = without_urls(whole(&mut request_parser(), stream));

        assert!(expected.0.iter().all(|item| match *item {
            Owned::Error(_) => false,
            _               => true
        }));

        for size in 1..stream.len() {
            assert_eq!(without_urls(split(&mut request_parser(), stream, size)), expected);
        }
    }
}

#[test]
fn every_split_response() {
    for stream in RESPONSES.iter() {
        let expected = without_urls(whole(&mut response_parser(), stream));

        for size in 1..stream.len() {
            assert_eq!(without_urls(split(&mut response_parser(), stream, size)), expected);
        }
    }
}

#[test]
fn every_two_piece_split() {
    let stream   = REQUESTS[0];
    let expected = without_urls(whole(&mut request_parser(), stream));

    for at in 0..stream.len() + 1 {
        let (head, tail) = stream.split_at(at);

        assert_eq!(
            without_urls(transcript(&mut request_parser(), &[head, tail], 64, true)),
            expected
        );
    }
}

#[test]
fn minimum_capacity() {
    for stream in REQUESTS.iter() {
        let expected = without_urls(whole(&mut request_parser(), stream));

        for capacity in MIN_EVENT_CAPACITY..MIN_EVENT_CAPACITY + 4 {
            assert_eq!(
                without_urls(transcript(&mut request_parser(), &[*stream], capacity, true)),
                expected
            );
        }
    }
}

#[test]
fn capacity_suspension() {
    let mut p      = request_parser();
    let mut events = EventBuffer::new(MIN_EVENT_CAPACITY);
    let     stream = b"GET / HTTP/1.1\r\nA: 1\r\n\r\n";

    assert_eq!(p.execute(stream, &mut events), 2);
    assert_eq!(
        events.as_slice(),
        &[
            Event::MessageBegin(MessageStart::Request(Method::Get)),
            Event::NeedsCapacity(4)
        ]
    );

    assert_eq!(p.state(), ParserState::RequestUrl1);

    p.execute(&stream[4..], &mut events);

    assert_eq!(
        events.as_slice(),
        &[
            Event::Url(Span::new(0, 1)),
            Event::Path(Span::new(0, 1)),
            Event::NeedsCapacity(2)
        ]
    );

    assert_eq!(p.state(), ParserState::RequestHttp1);
}

#[test]
fn capacity_suspension_flushes_spans() {
    let mut p      = request_parser();
    let mut events = EventBuffer::new(MIN_EVENT_CAPACITY + 1);
    let     stream = b"GET /a?b HTTP/1.1\r\n\r\n";

    p.execute(stream, &mut events);

    assert_eq!(
        events.as_slice(),
        &[
            Event::MessageBegin(MessageStart::Request(Method::Get)),
            Event::Path(Span::new(4, 2)),
            Event::Url(Span::new(4, 3)),
            Event::NeedsCapacity(7)
        ]
    );

    p.execute(&stream[7..], &mut events);

    assert_eq!(
        &events.as_slice()[..2],
        &[
            Event::Url(Span::new(0, 1)),
            Event::QueryString(Span::new(0, 1))
        ]
    );
}

#[test]
fn byte_by_byte_body() {
    let mut p = request_parser();

    assert_eq!(
        split(&mut p, b"POST / HTTP/1.1\r\nContent-Length: 4\r\n\r\nbody", 1).split_off(6),
        vec![
            Owned::HeadersEnd(Flags::default()),
            body(b"body"),
            Owned::Complete
        ]
    );
}

#[test]
fn spans_are_never_empty() {
    let     stream = REQUESTS[2];
    let mut p      = request_parser();
    let mut events = EventBuffer::new(64);

    for chunk in stream.chunks(3) {
        p.execute(chunk, &mut events);

        for event in events.iter() {
            if let Some(span) = event.span() {
                assert!(span.length > 0);
                assert!(span.end() <= chunk.len());
            }
        }
    }
}
