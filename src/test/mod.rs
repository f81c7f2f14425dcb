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


pub fn alpha_lower_vec() -> Vec<u8> {
    (0x61..0x7B).collect::<Vec<u8>>()
}

pub fn alpha_upper_vec() -> Vec<u8> {
    (0x41..0x5B).collect::<Vec<u8>>()
}

pub fn control_vec() -> Vec<u8> {
    (0..128).filter(|&x| x < 0x20 || x == 0x7F).collect::<Vec<u8>>()
}

pub fn digit_vec() -> Vec<u8> {
    (0x30..0x3A).collect::<Vec<u8>>()
}

pub fn header_char_vec() -> Vec<u8> {
    (0..255).filter(|&x| header_char(x) != 0).collect::<Vec<u8>>()
}

pub fn hex_vec() -> Vec<u8> {
    (0..255).filter(|&x| unhex(x).is_some()).collect::<Vec<u8>>()
}

pub fn non_hex_vec() -> Vec<u8> {
    (0..255).filter(|&x| unhex(x).is_none()).collect::<Vec<u8>>()
}

pub fn non_url_char_vec() -> Vec<u8> {
    (0..255).filter(|&x| !is_url_char(x)).collect::<Vec<u8>>()
}

pub fn url_char_vec() -> Vec<u8> {
    (0..255).filter(|&x| is_url_char(x)).collect::<Vec<u8>>()
}
