use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, watch};
use tokio_util::codec::Framed;
use super::codec::DmxCodec;
use super::entity::*;
use crate::common::error::DriverError;
use crate::{error, info, trace, warn};

const LOG_TAG: &str = "dmx_thread.rs | dmx serial worker";

/// serial worker loop
/// - write every queued command and report the result on its completion
/// - read upward data until the board says ready, then flip the ready flag
/// - exit on Stop or when every sender is dropped
pub async fn run_loop<T>(
    port: T,
    // downward commands from the driver
    mut command_rx: mpsc::UnboundedReceiver<DmxThreadCommandEnum>,
    // ready flag, false until the handshake token is seen
    ready_tx: watch::Sender<bool>,
) where
    T: AsyncRead + AsyncWrite + Unpin,
{
    let (mut writer, mut reader) = Framed::new(port, DmxCodec::new()).split::<String>();
    let mut reader_open = true;

    loop {
        tokio::select! {
            command_opt = command_rx.recv() => {
                match command_opt {
                    Some(DmxThreadCommandEnum::Write(command)) => {
                        trace!(LOG_TAG, "write data: {}", command.payload);
                        let result = writer
                            .send(command.payload)
                            .await
                            .map_err(|e| DriverError::transport(format!("cannot write to serial port: {}", e)));
                        if let Err(e) = &result {
                            error!(LOG_TAG, "write data error: {}", e);
                        }
                        let _ = command.done.send(result);
                    }
                    Some(DmxThreadCommandEnum::Stop) => {
                        info!(LOG_TAG, "stop signal received, exiting");
                        break;
                    }
                    None => {
                        info!(LOG_TAG, "command channel closed, exiting");
                        break;
                    }
                }
            }

            event_opt = reader.next(), if reader_open => {
                match event_opt {
                    Some(Ok(SerialEvent::Ready)) => {
                        info!(LOG_TAG, "READY");
                        ready_tx.send_replace(true);
                    }
                    Some(Err(e)) => {
                        error!(LOG_TAG, "read data error: {:?}", e);
                    }
                    None => {
                        warn!(LOG_TAG, "serial port closed upward, stop reading");
                        reader_open = false;
                    }
                }
            }
        }
    }

    command_rx.close();
    let _ = writer.close().await;
}
