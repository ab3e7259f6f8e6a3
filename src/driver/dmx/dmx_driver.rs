//! dmx channel writer
//! sends `<channel>c<value>w` commands to a controller board on a serial port
//!
//! usage
//! - `open` the port, then `wait_ready` for the board handshake
//! - `set_channel` / `set_channels` queue a write and hand back a `WriteHandle`
//! - await the handle for the write result, or drop it

use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use super::completion::WriteHandle;
use super::connection::Connection;
use super::traits::DmxWriter;
use crate::common::error::DriverError;
use crate::trace;

const LOG_TAG: &str = "dmx_driver.rs | dmx driver";

pub struct DmxDriver {
    connection: Connection,
}

impl DmxDriver {
    /// open the board on serial port `path`
    pub fn open(path: &str) -> Result<Self, DriverError> {
        Ok(DmxDriver { connection: Connection::open(path)? })
    }

    /// drive a board behind an already open stream
    pub fn from_stream<T>(path: &str, port: T) -> Self
    where
        T: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        DmxDriver { connection: Connection::from_stream(path, port) }
    }

    pub fn path(&self) -> &str {
        self.connection.path()
    }

    pub fn is_ready(&self) -> bool {
        self.connection.is_ready()
    }

    pub async fn wait_ready(&self, timeout: Duration) -> Result<(), DriverError> {
        self.connection.wait_ready(timeout).await
    }

    pub async fn close(self) {
        self.connection.close().await
    }
}

impl DmxWriter for DmxDriver {
    fn write_command(&self, command: String) -> Result<WriteHandle, DriverError> {
        trace!(LOG_TAG, "write command to {}: {}", self.path(), command);
        self.connection.write(command)
    }
}
