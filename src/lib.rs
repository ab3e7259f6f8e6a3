//! Serial driver for DMX controller boards that take `<channel>c<value>w`
//! text commands and announce themselves with a `ready` token.

pub mod common;
pub mod driver;

pub use common::error::{DriverError, ErrorCode};
pub use driver::dmx::{ChannelSelector, DmxArg, DmxDriver, DmxWriter, WriteHandle};
