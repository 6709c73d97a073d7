pub(crate) fn try_bytes_from_hex_str(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let target = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(target)
}

pub mod as_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::{fmt::Display, str::FromStr};

    pub fn serialize<S: Serializer, T: Display>(data: T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&data)
    }

    pub fn deserialize<'de, D, T: FromStr>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String>::deserialize(deserializer)?;
        s.parse().map_err(|_| serde::de::Error::custom("could not parse string as requested type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_with_and_without_prefix() {
        let bytes = try_bytes_from_hex_str("0x0102ff").unwrap();
        assert_eq!(bytes, vec![1, 2, 255]);
        let bytes = try_bytes_from_hex_str("0102ff").unwrap();
        assert_eq!(bytes, vec![1, 2, 255]);
        assert!(try_bytes_from_hex_str("0x01g2").is_err());
        assert!(try_bytes_from_hex_str("0x012").is_err());
    }
}
