//! Lenient numeric deserialization for host-supplied fields.
//!
//! The host stores several numbers loosely: costs are often strings
//! (`"250"`), damage amounts may arrive as form input. Anything that does not
//! parse as a number is coerced to zero rather than rejected.

use core::fmt;
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};

/// Deserializes an `i32` from a number, numeric string, bool, or null.
///
/// Fractional values are truncated toward zero; `true` reads as 1.
/// Unparseable strings, null, arrays, objects and out-of-range values become `0`.
pub fn i32_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI32)
}

/// Like [`i32_or_zero`], with negative values also read as `0`.
pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i32_or_zero(deserializer).map(|n| u32::try_from(n).unwrap_or(0))
}

/// Deserializes a finite `f64` the same way; non-finite values become `0.0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientF64)
}

/// A string-keyed map whose values read through [`i32_or_zero`].
pub fn i32_map_or_zero<'de, D>(deserializer: D) -> Result<BTreeMap<String, i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = BTreeMap::<String, LenientValue>::deserialize(deserializer)?;
    Ok(entries.into_iter().map(|(key, value)| (key, value.0)).collect())
}

struct LenientValue(i32);

impl<'de> Deserialize<'de> for LenientValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32_or_zero(deserializer).map(LenientValue)
    }
}

struct LenientI32;

impl<'de> Visitor<'de> for LenientI32 {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<i32, E> {
        Ok(i32::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        Ok(i32::try_from(v).unwrap_or(0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        Ok(i32::try_from(v).unwrap_or(0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        Ok(float_to_i32(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        Ok(parse_str(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<i32, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(0)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<i32, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(0)
    }
}

struct LenientF64;

impl<'de> Visitor<'de> for LenientF64 {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
        Ok(f64::from(u8::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(finite_or_zero(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        Ok(v.trim().parse::<f64>().map_or(0.0, finite_or_zero))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn float_to_i32(v: f64) -> i32 {
    if v.is_finite() && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
        v.trunc() as i32
    } else {
        0
    }
}

fn parse_str(v: &str) -> i32 {
    let trimmed = v.trim();
    if let Ok(n) = trimmed.parse::<i32>() {
        return n;
    }
    trimmed.parse::<f64>().map(float_to_i32).unwrap_or(0)
}
