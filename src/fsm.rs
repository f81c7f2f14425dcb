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

//! Finite state machine macros and enums.

use std::fmt;

/// Exit the scan loop. Every event belonging to this call has already been pushed.
macro_rules! exit {
    () => ({
        return Ok(ParserValue::Exit);
    });
}

/// Exit with `ParserError::$error`, reporting the offset and value of the current byte.
macro_rules! exit_error {
    ($error:ident, $context:expr) => ({
        return Err(ParserError::$error($context.offset(), $context.bytes.byte));
    });
}

/// Exit with `ParserError::$error` when the parser is strict and `$failed` holds.
///
/// Lenient parsers accept the byte as if it were the expected literal.
macro_rules! strict_check {
    ($parser:expr, $context:expr, $failed:expr, $error:ident) => ({
        if $parser.settings.is_strict() && $failed {
            exit_error!($error, $context);
        }
    });
}

/// Retrieve the state.
macro_rules! get_state {
    ($parser:expr) => ({
        $parser.state
    })
}

/// Set the state.
macro_rules! set_state {
    ($parser:expr, $state:ident) => ({
        $parser.state = ParserState::$state;
    });
}

/// Transition to `$state`.
macro_rules! transition {
    ($parser:expr, $state:ident) => ({
        set_state!($parser, $state);

        return Ok(ParserValue::Continue);
    });

    ($parser:expr) => ({
        return Ok(ParserValue::Continue);
    });
}

/// Open span `$mark` at the current byte.
macro_rules! mark {
    ($context:expr, $mark:ident) => ({
        $context.mark(Mark::$mark);
    });
}

/// Close span `$mark` just before the current byte and emit it.
macro_rules! record_mark {
    ($context:expr, $mark:ident) => ({
        $context.record(Mark::$mark);
    });
}

// -------------------------------------------------------------------------------------------------

/// State function return values.
pub enum ParserValue {
    /// Continue the scan loop.
    Continue,

    /// Exit the scan loop.
    Exit
}

// -------------------------------------------------------------------------------------------------

/// Callback parsing success return values.
#[derive(Clone,Copy,PartialEq)]
pub enum Success {
    /// A callback returned `false` and parsing stopped early.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed before the callback was executed.
    Callback(usize),

    /// The entire stream was processed.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed. This always matches
    ///          `stream.len()`.
    Finished(usize),

    /// The connection switched protocols and HTTP parsing has ended.
    ///
    /// # Arguments
    ///
    /// **(1)**: The offset of the first byte belonging to the new protocol. Bytes from this offset
    ///          on must be handed to whatever speaks that protocol, and never fed back to the
    ///          parser.
    Upgrade(usize)
}

impl fmt::Debug for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Success::Callback(length) => {
                write!(formatter, "Success::Callback({})", length)
            },
            Success::Finished(length) => {
                write!(formatter, "Success::Finished({})", length)
            },
            Success::Upgrade(offset) => {
                write!(formatter, "Success::Upgrade({})", offset)
            }
        }
    }
}

impl fmt::Display for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Success::Callback(length) => {
                write!(formatter, "{}", length)
            },
            Success::Finished(length) => {
                write!(formatter, "{}", length)
            },
            Success::Upgrade(offset) => {
                write!(formatter, "{}", offset)
            }
        }
    }
}
