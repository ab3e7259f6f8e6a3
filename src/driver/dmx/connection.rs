//! serial connection of the dmx controller board
//! - opens the port with the fixed 9600 8N1 settings
//! - a worker task owns the port, see `dmx_thread`
//! - the ready flag flips once when the board sends its token

use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_serial::SerialPortBuilderExt;
use super::completion::WriteHandle;
use super::dmx_thread::run_loop;
use super::entity::*;
use super::prelude::BAUDRATE;
use crate::common::error::{DriverError, ErrorCode};
use crate::{debug, info, warn};

const LOG_TAG: &str = "connection.rs | dmx serial connection";

pub struct Connection {
    // serial port file identifier
    path: String,
    // command channel to the worker
    command_tx: mpsc::UnboundedSender<DmxThreadCommandEnum>,
    ready_rx: watch::Receiver<bool>,
    worker: JoinHandle<()>,
}

impl Connection {
    /// open the serial port at `path`
    ///
    /// Must be called inside a tokio runtime.
    pub fn open(path: &str) -> Result<Self, DriverError> {
        if path.trim().is_empty() {
            return Err(DriverError::invalid_argument("path must be defined"));
        }

        let port = tokio_serial::new(path, BAUDRATE)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| {
                DriverError::new(
                    ErrorCode::PortOpenError,
                    format!("cannot open serial port: {}, err: {}", path, e),
                )
            })?;

        info!(LOG_TAG, "serial port opened: {}, baudrate: {}", path, BAUDRATE);
        Ok(Self::from_stream(path, port))
    }

    /// adopt an already open byte stream as the serial port
    ///
    /// Must be called inside a tokio runtime.
    pub fn from_stream<T>(path: &str, port: T) -> Self
    where
        T: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = watch::channel(false);
        let worker = tokio::spawn(run_loop(port, command_rx, ready_tx));

        Connection {
            path: path.to_string(),
            command_tx,
            ready_rx,
            worker,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// wait for the ready handshake, at most `timeout`
    pub async fn wait_ready(&self, timeout: Duration) -> Result<(), DriverError> {
        let mut ready_rx = self.ready_rx.clone();
        let outcome = tokio::time::timeout(timeout, ready_rx.wait_for(|ready| *ready))
            .await
            .map(|waited| waited.map(|_| ()));

        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => Err(DriverError::transport(format!(
                "serial worker of {} stopped before the port became ready",
                self.path
            ))),
            Err(_) => Err(DriverError::new(
                ErrorCode::ReadyTimeout,
                format!("port {} not ready after {:?}", self.path, timeout),
            )),
        }
    }

    /// queue a write, refused while the port is not ready
    pub fn write(&self, payload: String) -> Result<WriteHandle, DriverError> {
        if !self.is_ready() {
            return Err(DriverError::not_ready());
        }

        let (done_tx, done_rx) = oneshot::channel();
        let command = DmxThreadCommandEnum::Write(WriteCommandBo { payload, done: done_tx });
        if let Err(mpsc::error::SendError(command)) = self.command_tx.send(command) {
            warn!(LOG_TAG, "serial worker of {} is gone, write dropped", self.path);
            if let DmxThreadCommandEnum::Write(command) = command {
                let _ = command.done.send(Err(DriverError::transport("serial worker is not running")));
            }
        }
        debug!(LOG_TAG, "write queued to {}", self.path);
        Ok(WriteHandle::new(done_rx))
    }

    /// stop the worker and release the port
    pub async fn close(self) {
        let _ = self.command_tx.send(DmxThreadCommandEnum::Stop);
        if let Err(e) = self.worker.await {
            warn!(LOG_TAG, "serial worker of {} ended abnormally: {}", self.path, e);
        }
        info!(LOG_TAG, "serial port closed: {}", self.path);
    }
}
