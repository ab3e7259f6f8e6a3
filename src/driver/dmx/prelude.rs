//! dmx argument types
//! channel and value are written to the wire as their literal text, so both
//! keep the form the caller gave them

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use crate::common::error::DriverError;

// fixed serial parameters of the controller board, 9600 8N1, no flow control
pub const BAUDRATE: u32 = 9600;
// handshake token sent by the board once it can take commands
pub const READY_TOKEN: &[u8] = b"ready";
// fragment separator between channel and value
pub const CHANNEL_SEPARATOR: char = 'c';
// fragment terminator
pub const FRAGMENT_TERMINATOR: char = 'w';

/// a channel identifier or a write value, an integer or numeric text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DmxArg {
    Number(i64),
    Text(String),
}

impl DmxArg {
    /// integer, or text that reads as an integer
    pub fn is_numeric(&self) -> bool {
        match self {
            DmxArg::Number(_) => true,
            DmxArg::Text(text) => text.parse::<i64>().is_ok(),
        }
    }
}

impl Display for DmxArg {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DmxArg::Number(n) => write!(f, "{}", n),
            DmxArg::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DmxArg {
                fn from(n: $t) -> Self {
                    DmxArg::Number(n as i64)
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, i32, i64);

impl From<&str> for DmxArg {
    fn from(text: &str) -> Self {
        DmxArg::Text(text.to_string())
    }
}

impl From<String> for DmxArg {
    fn from(text: String) -> Self {
        DmxArg::Text(text)
    }
}

/// the channels argument of a multi channel write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSelector {
    Single(DmxArg),
    Many(Vec<DmxArg>),
}

impl<T: Into<DmxArg>> From<Vec<T>> for ChannelSelector {
    fn from(channels: Vec<T>) -> Self {
        ChannelSelector::Many(channels.into_iter().map(Into::into).collect())
    }
}

impl From<DmxArg> for ChannelSelector {
    fn from(channel: DmxArg) -> Self {
        ChannelSelector::Single(channel)
    }
}

/// parse a selector written as `5` or `1,2,3`
/// list entries are kept as text, filtering happens at write time
impl FromStr for ChannelSelector {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let channels = s
                .split(',')
                .map(|entry| DmxArg::Text(entry.trim().to_string()))
                .collect();
            return Ok(ChannelSelector::Many(channels));
        }
        let channel = DmxArg::Text(s.to_string());
        if !channel.is_numeric() {
            return Err(DriverError::invalid_argument(format!(
                "channels must be a channel or a list of channels, got: '{}'",
                s
            )));
        }
        Ok(ChannelSelector::Single(channel))
    }
}
