//! Serde helpers for numbers that models emit loosely.
//!
//! Amounts are held as `f64` but written back as integers when they are whole,
//! so `{"opportunityScore": 8}` leaves the API as `8` and not `8.0`.

/// Largest magnitude an `f64` holds without losing integer precision.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn as_whole(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}

/// `f64` that serializes whole values as JSON integers.
pub mod whole_number {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match super::as_whole(*value) {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(*value),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}

/// Name-to-amount map whose values serialize like [`whole_number`].
pub mod whole_number_map {
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(map: &BTreeMap<String, f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (name, value) in map {
            match super::as_whole(*value) {
                Some(whole) => out.serialize_entry(name, &whole)?,
                None => out.serialize_entry(name, value)?,
            }
        }
        out.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::deserialize(deserializer)
    }
}

/// Day count that also accepts integral floats such as `14.0`.
pub mod day_count {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(days: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(*days)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        match super::as_whole(raw) {
            Some(whole) => u32::try_from(whole)
                .map_err(|_| D::Error::custom(format!("day count {} out of range", raw))),
            None => Err(D::Error::custom(format!("day count {} is not a whole number", raw))),
        }
    }
}
