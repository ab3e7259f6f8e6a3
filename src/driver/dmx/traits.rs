use super::completion::WriteHandle;
use super::encoder::{encode, encode_all};
use super::prelude::*;
use crate::common::error::DriverError;
use crate::debug;

const LOG_TAG: &str = "traits.rs | dmx writer";

/// something that can take channel commands for a dmx board
///
/// Argument errors and writes before the ready handshake are returned
/// right away. Transport errors only come through the `WriteHandle`.
pub trait DmxWriter {
    /// guarded write of an encoded command
    fn write_command(&self, command: String) -> Result<WriteHandle, DriverError>;

    /// set one channel
    fn set_channel<C, V>(&self, channel: C, value: V) -> Result<WriteHandle, DriverError>
    where
        C: Into<DmxArg>,
        V: Into<DmxArg>,
    {
        let channel = channel.into();
        if !channel.is_numeric() {
            return Err(DriverError::invalid_argument(format!(
                "channel must be a number or numeric string, got: '{}'",
                channel
            )));
        }
        self.write_command(encode(&channel, &value.into()))
    }

    /// set several channels to the same value in one write
    ///
    /// Entries of a list that are not numeric are skipped.
    fn set_channels<S, V>(&self, channels: S, value: V) -> Result<WriteHandle, DriverError>
    where
        S: Into<ChannelSelector>,
        V: Into<DmxArg>,
    {
        match channels.into() {
            ChannelSelector::Single(channel) => self.set_channel(channel, value),
            ChannelSelector::Many(channels) => {
                let (kept, skipped): (Vec<&DmxArg>, Vec<&DmxArg>) =
                    channels.iter().partition(|channel| channel.is_numeric());
                if !skipped.is_empty() {
                    debug!(LOG_TAG, "skip non numeric channels: {:?}", skipped);
                }
                self.write_command(encode_all(kept, &value.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ErrorCode;
    use std::cell::RefCell;

    /// records commands instead of writing them
    struct RecordingWriter {
        ready: bool,
        commands: RefCell<Vec<String>>,
    }

    impl RecordingWriter {
        fn new(ready: bool) -> Self {
            RecordingWriter { ready, commands: RefCell::new(Vec::new()) }
        }
    }

    impl DmxWriter for RecordingWriter {
        fn write_command(&self, command: String) -> Result<WriteHandle, DriverError> {
            if !self.ready {
                return Err(DriverError::not_ready());
            }
            self.commands.borrow_mut().push(command);
            Ok(WriteHandle::completed(Ok(())))
        }
    }

    #[test]
    fn test_set_channel() {
        let writer = RecordingWriter::new(true);
        writer.set_channel(42, 255).unwrap();
        writer.set_channel("7", "0").unwrap();
        assert_eq!(*writer.commands.borrow(), vec!["42c255w", "7c0w"]);
    }

    #[test]
    fn test_set_channel_bad_channel() {
        let writer = RecordingWriter::new(true);
        let err = writer.set_channel("foo", 1).err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(writer.commands.borrow().is_empty());
    }

    #[test]
    fn test_set_channels_skips_non_numeric() {
        let writer = RecordingWriter::new(true);
        let channels = vec![DmxArg::from(1), DmxArg::from("foo"), DmxArg::from(3)];
        writer.set_channels(channels, 10).unwrap();
        assert_eq!(*writer.commands.borrow(), vec!["1c10w3c10w"]);
    }

    #[test]
    fn test_set_channels_keeps_order() {
        let writer = RecordingWriter::new(true);
        writer.set_channels(vec![12, 5, 300], "128").unwrap();
        assert_eq!(*writer.commands.borrow(), vec!["12c128w5c128w300c128w"]);
    }

    #[test]
    fn test_set_channels_single() {
        let writer = RecordingWriter::new(true);
        writer.set_channels(DmxArg::from("5"), 200).unwrap();
        assert_eq!(*writer.commands.borrow(), vec!["5c200w"]);

        let err = writer.set_channels(DmxArg::from("lamp"), 200).err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_validation_before_ready_check() {
        let writer = RecordingWriter::new(false);
        let err = writer.set_channel("foo", 1).err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        let err = writer.set_channel(1, 1).err().unwrap();
        assert_eq!(err.code, ErrorCode::PortNotReady);
    }
}
