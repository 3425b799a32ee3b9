//! Dotted-quad addresses.

use core::fmt;
use core::str::FromStr;

use crate::error::AddressError;

/// A validated IPv4 address, kept exactly as written.
///
/// Each of the four octets is one to three ASCII digits with a value of
/// at most 255. Leading zeros are accepted and preserved, so `"010.0.0.1"`
/// and `"10.0.0.1"` are different addresses to `connect`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let octets: Vec<&str> = text.split('.').collect();
        if octets.len() != 4 || !octets.iter().all(|o| is_octet(o)) {
            return Err(AddressError(text.to_string()));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_octet(text: &str) -> bool {
    (1..=3).contains(&text.len())
        && text.bytes().all(|b| b.is_ascii_digit())
        && text.parse::<u16>().map_or(false, |v| v <= 255)
}

impl FromStr for IpAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for IpAddress {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for text in ["192.168.0.42", "0.0.0.0", "255.255.255.255", "1.2.0.7", "010.01.001.1"] {
            let ip = IpAddress::parse(text).unwrap();
            assert_eq!(ip.as_str(), text);
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for text in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "256.1.1.1",
            "1.2.3.999",
            "1.2.3.0001",
            "a.b.c.d",
            "1..2.3",
            "+1.2.3.4",
            " 1.2.3.4",
        ] {
            assert_eq!(IpAddress::parse(text), Err(AddressError(text.to_string())), "{text:?}");
        }
    }
}
