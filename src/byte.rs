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

//! Byte classification and lookup tables.

/// Retrieve the canonical form of a header field byte.
///
/// Letters are lower-cased. Digits, `-`, `_` and space are returned as is. Every other byte is
/// rejected from header fields and maps to `0`.
#[inline]
pub fn header_char(byte: u8) -> u8 {
    [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,

    // RS  US
    0,     0,

    // space
    b' ',

    // !   "      #      $      %      &      '      (      )      *
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,

    // +   ,      -      .      /
    0,     0,     b'-',  0,     0,

    // 0   1      2      3      4      5      6      7      8      9
    b'0',  b'1',  b'2',  b'3',  b'4',  b'5',  b'6',  b'7',  b'8',  b'9',

    // :   ;      <      =      >      ?      @
    0,     0,     0,     0,     0,     0,     0,

    // A   B      C      D      E      F      G      H      I      J
    b'a',  b'b',  b'c',  b'd',  b'e',  b'f',  b'g',  b'h',  b'i',  b'j',

    // K   L      M      N      O      P      Q      R      S      T
    b'k',  b'l',  b'm',  b'n',  b'o',  b'p',  b'q',  b'r',  b's',  b't',

    // U   V      W      X      Y      Z
    b'u',  b'v',  b'w',  b'x',  b'y',  b'z',

    // [   \      ]      ^      _      `
    0,     0,     0,     0,     b'_',  0,

    // a   b      c      d      e      f      g      h      i      j
    b'a',  b'b',  b'c',  b'd',  b'e',  b'f',  b'g',  b'h',  b'i',  b'j',

    // k   l      m      n      o      p      q      r      s      t
    b'k',  b'l',  b'm',  b'n',  b'o',  b'p',  b'q',  b'r',  b's',  b't',

    // u   v      w      x      y      z
    b'u',  b'v',  b'w',  b'x',  b'y',  b'z',

    // {   |      }      ~
    0,     0,     0,     0,

    // DEL
    0,

    // 128 - 255
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0,     0,     0,
    0,     0,     0,     0,     0,     0,     0,     0
    ][byte as usize]
}

/// Indicates that a byte is a normal request URL byte.
///
/// This is all visible 7-bit bytes except `#` and `?`, which delimit the fragment and query
/// string.
#[inline]
pub fn is_url_char(byte: u8) -> bool {
    [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  true,  false, true,  true,  true,  true,  true,  true,  true,

    // +   ,      -      .      /
    true,  true,  true,  true,  true,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    true,  true,  true,  true,  true,  false, true,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    true,  true,  true,  true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    true,  true,  true,  true,

    // DEL
    false,

    // 128 - 255
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false
    ][byte as usize]
}

/// Decode a hexadecimal digit.
///
/// Returns `None` when `byte` is not `0-9`, `A-F` or `a-f`.
#[inline]
pub fn unhex(byte: u8) -> Option<u8> {
    let value: i8 = [

    // NUL SOH STX ETX  EOT  ENQ  ACK  BEL  BS   TAB
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // LF VT  FF   CR   SO   SI   DLE  DC1  DC2  DC3
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // DC4 NAK SYN ETB  CAN  EM   SUB  ESC  FS   GS
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // RS US
    -1,  -1,

    // space
    -1,

    // ! "    #    $    %    &    '    (    )    *
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // + ,    -    .    /
    -1,  -1,  -1,  -1,  -1,

    // 0 1    2    3    4    5    6    7    8    9
    0,   1,   2,   3,   4,   5,   6,   7,   8,   9,

    // : ;    <    =    >    ?    @
    -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // A B    C    D    E    F    G    H    I    J
    10,  11,  12,  13,  14,  15,  -1,  -1,  -1,  -1,

    // K L    M    N    O    P    Q    R    S    T
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // U V    W    X    Y    Z
    -1,  -1,  -1,  -1,  -1,  -1,

    // [ \    ]    ^    _    `
    -1,  -1,  -1,  -1,  -1,  -1,

    // a b    c    d    e    f    g    h    i    j
    10,  11,  12,  13,  14,  15,  -1,  -1,  -1,  -1,

    // k l    m    n    o    p    q    r    s    t
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,

    // u v    w    x    y    z
    -1,  -1,  -1,  -1,  -1,  -1,

    // { |    }    ~
    -1,  -1,  -1,  -1,

    // DEL
    -1,

    // 128 - 255
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,
    -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1
    ][byte as usize];

    if value < 0 {
        None
    } else {
        Some(value as u8)
    }
}
