//! serial framing of the controller board
//! - downward: composite command text is written as raw ascii, no framing
//! - upward: bytes are collected until the ready token shows up, then dropped

use tokio_util::{
    bytes::{Buf, BufMut, BytesMut},
    codec::{Decoder, Encoder},
};
use super::entity::SerialEvent;
use super::prelude::READY_TOKEN;
use crate::debug;

const LOG_TAG: &str = "codec.rs | dmx serial codec";

// cap of the handshake buffer, beyond this only a token sized tail is kept
const MAX_HANDSHAKE_BUF: usize = 4096;

#[derive(Debug, Default)]
pub struct DmxCodec {
    ready: bool,
}

impl DmxCodec {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains_token(buf: &[u8]) -> bool {
        buf.windows(READY_TOKEN.len()).any(|w| w == READY_TOKEN)
    }
}

impl Decoder for DmxCodec {
    type Item = SerialEvent;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.ready {
            buf.clear();
            return Ok(None);
        }

        debug!(LOG_TAG, "handshake data: {}", String::from_utf8_lossy(&buf[..]));

        if Self::contains_token(&buf[..]) {
            self.ready = true;
            buf.clear();
            return Ok(Some(SerialEvent::Ready));
        }

        if buf.len() > MAX_HANDSHAKE_BUF {
            let keep = READY_TOKEN.len() - 1;
            let stale = buf.len() - keep;
            buf.advance(stale);
        }
        Ok(None)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let event = self.decode(buf)?;
        buf.clear();
        Ok(event)
    }
}

impl Encoder<String> for DmxCodec {
    type Error = std::io::Error;

    fn encode(&mut self, item: String, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(item.len());
        dst.put(item.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_in_one_chunk() {
        let mut codec = DmxCodec::new();
        let mut buf = BytesMut::from(&b"booting...ready\n"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), Some(SerialEvent::Ready));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_ready_split_over_chunks() {
        let mut codec = DmxCodec::new();
        let mut buf = BytesMut::from(&b"booting...rea"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b"dy");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some(SerialEvent::Ready));
    }

    #[test]
    fn test_ready_only_once() {
        let mut codec = DmxCodec::new();
        let mut buf = BytesMut::from(&b"ready"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), Some(SerialEvent::Ready));
        buf.extend_from_slice(b"ready again");
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_token_is_case_sensitive() {
        let mut codec = DmxCodec::new();
        let mut buf = BytesMut::from(&b"READY Ready"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_buffer_is_bounded() {
        let mut codec = DmxCodec::new();
        let mut buf = BytesMut::from(&vec![b'.'; MAX_HANDSHAKE_BUF][..]);
        buf.extend_from_slice(b"rea");
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert_eq!(buf.len(), READY_TOKEN.len() - 1);
        buf.extend_from_slice(b"dy");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some(SerialEvent::Ready));
    }

    #[test]
    fn test_encode_raw_ascii() {
        let mut codec = DmxCodec::new();
        let mut dst = BytesMut::new();
        codec.encode("1c10w3c10w".to_string(), &mut dst).unwrap();
        assert_eq!(&dst[..], b"1c10w3c10w");
    }
}
