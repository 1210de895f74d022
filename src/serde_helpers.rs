//! Decimal-string (de)serialization for integers that do not survive a
//! round trip through JSON numbers.
//!
//! Use with `#[serde(with = "crate::serde_helpers::u256_decimal")]`.

pub mod u256_decimal {
    use alloy_primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str_radix(raw.trim(), 10)
            .map_err(|e| D::Error::custom(format!("invalid decimal integer {raw:?}: {e}")))
    }
}

pub mod u512_decimal {
    use crate::U512;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U512, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U512, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U512::from_str_radix(raw.trim(), 10)
            .map_err(|e| D::Error::custom(format!("invalid decimal integer {raw:?}: {e}")))
    }
}

pub mod u128_decimal {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid decimal integer {raw:?}: {e}")))
    }
}

pub mod i128_decimal {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid decimal integer {raw:?}: {e}")))
    }
}
