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

const METHODS: [Method; 19] = [
    Method::Delete,
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Connect,
    Method::Options,
    Method::Trace,
    Method::Copy,
    Method::Lock,
    Method::Mkcol,
    Method::Move,
    Method::Propfind,
    Method::Proppatch,
    Method::Unlock,
    Method::Report,
    Method::Mkactivity,
    Method::Checkout,
    Method::Merge
];

#[test]
fn simple() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n"),
        vec![
            request(Method::Get),
            url(b"/"),
            path(b"/"),
            Owned::Version(1, 1),
            field(b"Host"),
            value(b"example.com"),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );

    assert_eq!(p.state(), ParserState::StartRequest);
    assert_eq!(p.method(), Some(Method::Get));
    assert_eq!(p.http_major(), 1);
    assert_eq!(p.http_minor(), 1);
    assert!(p.should_keep_alive());
}

#[test]
fn every_method() {
    for method in METHODS.iter() {
        let mut p      = request_parser();
        let     stream = format!("{} /x HTTP/1.1\r\n\r\n", method);
        let     owned  = whole(&mut p, stream.as_bytes());

        assert_eq!(owned[0], request(*method));
        assert_eq!(p.method(), Some(*method));

        if *method == Method::Connect {
            assert!(p.is_upgrade());
        } else {
            assert_eq!(owned.last(), Some(&Owned::Complete));
        }
    }
}

#[test]
fn method_display() {
    for method in METHODS.iter() {
        assert_eq!(format!("{}", method), method.as_str());
        assert_eq!(method.as_bytes(), method.as_str().as_bytes());
    }
}

#[test]
fn method_invalid_first_byte() {
    assert_error(&mut request_parser(), b"XYZ / HTTP/1.1\r\n", ParserError::Method(0, b'X'));
    assert_error(&mut request_parser(), b"get / HTTP/1.1\r\n", ParserError::Method(0, b'g'));
}

#[test]
fn method_invalid_later_byte() {
    assert_error(&mut request_parser(), b"GEX / HTTP/1.1\r\n", ParserError::Method(2, b'X'));
    assert_error(&mut request_parser(), b"GETS / HTTP/1.1\r\n", ParserError::Method(3, b'S'));
    assert_error(&mut request_parser(), b"PATCH / HTTP/1.1\r\n", ParserError::Method(1, b'A'));
    assert_error(&mut request_parser(), b"GE / HTTP/1.1\r\n", ParserError::Method(2, b' '));
}

#[test]
fn leading_newlines() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"\r\n\r\n\nGET / HTTP/1.1\r\n\r\n"),
        vec![
            request(Method::Get),
            url(b"/"),
            path(b"/"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn query_string_and_fragment() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"GET /index.html?q=1#top HTTP/1.1\r\n\r\n"),
        vec![
            request(Method::Get),
            path(b"/index.html"),
            query_string(b"q=1"),
            url(b"/index.html?q=1#top"),
            fragment(b"top"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn extra_delimiters() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"GET /a??b?c##d?#e HTTP/1.1\r\n\r\n"),
        vec![
            request(Method::Get),
            path(b"/a"),
            query_string(b"b?c"),
            url(b"/a??b?c##d?#e"),
            fragment(b"d?#e"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn absolute_url() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"GET http://example.com:8080/a?b HTTP/1.1\r\n\r\n"),
        vec![
            request(Method::Get),
            path(b"/a"),
            url(b"http://example.com:8080/a?b"),
            query_string(b"b"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn absolute_url_without_path() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"OPTIONS http://example.com HTTP/1.1\r\n\r\n"),
        vec![
            request(Method::Options),
            url(b"http://example.com"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn connect_upgrades() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"CONNECT example.com:443 HTTP/1.1\r\n\r\nbinary"),
        vec![
            request(Method::Connect),
            url(b"example.com:443"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );

    assert!(p.is_upgrade());
    assert_eq!(p.state(), ParserState::Dead);
}

#[test]
fn connect_completes_at_head_end() {
    let mut p      = request_parser();
    let mut events = EventBuffer::new(16);
    let     stream = b"CONNECT example.com:443 HTTP/1.1\r\n\r\nbinary";

    p.execute(stream, &mut events);

    assert_eq!(
        events.last(),
        Some(&Event::MessageComplete(stream.len() - b"binary".len()))
    );
}

#[test]
fn http09() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"GET /\r\n\r\n"),
        vec![
            request(Method::Get),
            url(b"/"),
            path(b"/"),
            Owned::Version(0, 9),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );

    assert_eq!(p.http_major(), 0);
    assert_eq!(p.http_minor(), 9);
    assert!(!p.should_keep_alive());
    assert_eq!(p.state(), ParserState::Dead);
}

#[test]
fn http09_query_string() {
    let mut p = request_parser();

    assert_eq!(
        whole(&mut p, b"GET /?a\n\n"),
        vec![
            request(Method::Get),
            path(b"/"),
            url(b"/?a"),
            query_string(b"a"),
            Owned::Version(0, 9),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn version_digits() {
    let mut p = lenient(ParserType::Request);

    assert_eq!(
        whole(&mut p, b"GET / HTTP/12.34\r\n\r\n"),
        vec![
            request(Method::Get),
            url(b"/"),
            path(b"/"),
            Owned::Version(12, 34),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );
}

#[test]
fn version_invalid() {
    assert_error(&mut request_parser(), b"GET / HTTP/0.9\r\n", ParserError::Version(11, b'0'));
    assert_error(&mut request_parser(), b"GET / HTTP/1x", ParserError::Version(12, b'x'));
    assert_error(&mut request_parser(), b"GET / HTTP/1.x", ParserError::Version(13, b'x'));
    assert_error(&mut request_parser(), b"GET / HTTP/1.1 ", ParserError::Version(14, b' '));
}

#[test]
fn version_too_large() {
    assert_error(&mut request_parser(), b"GET / HTTP/1.1000", ParserError::Version(16, b'0'));
    assert_error(&mut request_parser(), b"GET / HTTP/1000.1", ParserError::Version(14, b'0'));
}

#[test]
fn http_invalid() {
    assert_error(&mut request_parser(), b"GET / XTTP/1.1\r\n", ParserError::Http(6, b'X'));
    assert_error(&mut request_parser(), b"GET / HTTX/1.1\r\n", ParserError::Http(9, b'X'));
}

#[test]
fn url_invalid() {
    assert_error(&mut request_parser(), b"GET \x01", ParserError::Url(4, 0x01));
    assert_error(&mut request_parser(), b"GET /a\x7F", ParserError::Url(6, 0x7F));
    assert_error(&mut request_parser(), b"GET /a\xC3", ParserError::Url(6, 0xC3));
    assert_error(&mut request_parser(), b"GET ht!p://a", ParserError::Url(6, b'!'));
    assert_error(&mut request_parser(), b"GET http://a:8x", ParserError::Url(14, b'x'));
}

#[test]
fn request_line_lf() {
    assert_error(
        &mut request_parser(),
        b"GET / HTTP/1.1\rX",
        ParserError::CrlfSequence(15, b'X')
    );
}

#[test]
fn either_detects_request() {
    let mut p = Parser::new(ParserType::Either);

    assert_eq!(
        whole(&mut p, b"HEAD / HTTP/1.1\r\n\r\n"),
        vec![
            request(Method::Head),
            url(b"/"),
            path(b"/"),
            Owned::Version(1, 1),
            Owned::HeadersEnd(Flags::default()),
            Owned::Complete
        ]
    );

    assert_eq!(p.message_type(), ParserType::Request);
    assert_eq!(p.state(), ParserState::StartRequest);
}

#[test]
fn either_detects_method() {
    let mut p = Parser::new(ParserType::Either);

    assert_eq!(whole(&mut p, b"POST / HTTP/1.1\r\n\r\n")[0], request(Method::Post));
    assert_eq!(p.message_type(), ParserType::Request);
}

#[test]
fn either_invalid() {
    assert_error(&mut Parser::new(ParserType::Either), b"XYZ", ParserError::Method(0, b'X'));
    assert_error(&mut Parser::new(ParserType::Either), b"HZ", ParserError::Method(1, b'Z'));
}

#[test]
fn start_states() {
    assert_eq!(request_parser().state(), ParserState::StartRequest);
    assert_eq!(response_parser().state(), ParserState::StartResponse);
    assert_eq!(Parser::new(ParserType::Either).state(), ParserState::Detect1);
}

#[test]
fn partial_states() {
    let mut p = request_parser();

    assert_state(&mut p, b"GE", ParserState::RequestMethod);
    assert_state(&mut p, b"T /a", ParserState::RequestPath);
    assert_state(&mut p, b"?", ParserState::RequestQueryString1);
    assert_state(&mut p, b"x", ParserState::RequestQueryString2);
    assert_state(&mut p, b"#", ParserState::RequestFragment1);
    assert_state(&mut p, b"y", ParserState::RequestFragment2);
    assert_state(&mut p, b" H", ParserState::RequestHttp2);
    assert_state(&mut p, b"TTP/1", ParserState::RequestVersionMajor2);
    assert_state(&mut p, b".1", ParserState::RequestVersionMinor2);
    assert_state(&mut p, b"\r", ParserState::RequestLineLf);
    assert_state(&mut p, b"\n", ParserState::FirstHeaderField);
}
