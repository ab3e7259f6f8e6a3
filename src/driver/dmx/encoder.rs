//! command encoding, `<channel>c<value>w`
use super::prelude::*;

/// encode one channel/value pair, no validation and no padding
pub fn encode(channel: &DmxArg, value: &DmxArg) -> String {
    format!("{}{}{}{}", channel, CHANNEL_SEPARATOR, value, FRAGMENT_TERMINATOR)
}

/// encode every channel against the same value and join without separator
pub fn encode_all<'a, I>(channels: I, value: &DmxArg) -> String
where
    I: IntoIterator<Item = &'a DmxArg>,
{
    channels
        .into_iter()
        .map(|channel| encode(channel, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(&DmxArg::from(5), &DmxArg::from(200)), "5c200w");
        assert_eq!(encode(&DmxArg::from("5"), &DmxArg::from("200")), "5c200w");
        assert_eq!(encode(&DmxArg::from(5), &DmxArg::from("200")), "5c200w");
    }

    #[test]
    fn test_encode_no_validation() {
        assert_eq!(encode(&DmxArg::from(900), &DmxArg::from(-1)), "900c-1w");
        assert_eq!(encode(&DmxArg::from("007"), &DmxArg::from(0)), "007c0w");
    }

    #[test]
    fn test_encode_all() {
        let channels = vec![DmxArg::from(5), DmxArg::from("12")];
        assert_eq!(encode_all(&channels, &DmxArg::from(0)), "5c0w12c0w");
        assert_eq!(encode_all(&Vec::<DmxArg>::new(), &DmxArg::from(0)), "");
    }
}
