use tokio::sync::oneshot;
use crate::common::error::DriverError;

// event decoded from the upward serial data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialEvent {
    // the board sent the ready token
    Ready,
}

// command sent to the serial worker
#[derive(Debug)]
pub enum DmxThreadCommandEnum {
    // write a composite command to the port
    Write(WriteCommandBo),

    // stop the worker and release the port
    Stop,
}

// command: write one composite command
#[derive(Debug)]
pub struct WriteCommandBo {
    pub payload: String,
    // completion of the write, dropped receivers are ignored
    pub done: oneshot::Sender<Result<(), DriverError>>,
}
