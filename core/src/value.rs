//! A wire-protocol-agnostic value plus the C-type conversion matrix used by
//! `SQLGetData`/`SQLBindCol`. Generalized from `bson::Bson` and the
//! `IntoCData` trait in `odbc/src/api/data.rs` -- the conversion shape
//! (return the converted value alongside an optional non-fatal truncation
//! warning, or a hard error) is kept; the source type is no longer BSON.

use crate::err::Error;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

const DOUBLE: &str = "Double";
const INT64: &str = "BigInt";
const INT32: &str = "Integer";

/// A single column/parameter value as produced by the wire client. Mirrors
/// the SQL type categories this driver's `SqlDataType` mapping recognizes;
/// it is not a 1:1 copy of any particular wire format.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i32),
    BigInt(i64),
    Double(f64),
    String(String),
    Boolean(bool),
    Binary(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Numeric(String),
}

impl SqlValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Integer(_) => "Integer",
            SqlValue::BigInt(_) => "BigInt",
            SqlValue::Double(_) => "Double",
            SqlValue::String(_) => "String",
            SqlValue::Boolean(_) => "Boolean",
            SqlValue::Binary(_) => "Binary",
            SqlValue::Date(_) => "Date",
            SqlValue::Time(_) => "Time",
            SqlValue::Timestamp(_) => "Timestamp",
            SqlValue::Numeric(_) => "Numeric",
        }
    }

    pub fn to_json(&self) -> String {
        match self {
            SqlValue::String(s) => s.clone(),
            SqlValue::Boolean(b) => b.to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::BigInt(i) => i.to_string(),
            SqlValue::Double(f) => f.to_string(),
            SqlValue::Numeric(s) => s.clone(),
            SqlValue::Date(d) => d.to_string(),
            SqlValue::Time(t) => t.to_string(),
            SqlValue::Timestamp(t) => t.to_string(),
            SqlValue::Binary(b) => format!("{b:02x?}"),
        }
    }

    pub fn to_binary(&self) -> Result<Vec<u8>> {
        match self {
            SqlValue::Binary(b) => Ok(b.clone()),
            _ => Ok(self.to_json().into_bytes()),
        }
    }

    pub fn to_f64(&self) -> Result<(f64, Option<Error>)> {
        match self {
            SqlValue::Double(f) => Ok((*f, None)),
            SqlValue::Integer(i) => Ok((f64::from(*i), None)),
            SqlValue::BigInt(i) => Ok((*i as f64, None)),
            SqlValue::Boolean(b) => Ok((if *b { 1.0 } else { 0.0 }, None)),
            SqlValue::String(s) | SqlValue::Numeric(s) => {
                Ok((from_string(s, DOUBLE)?, None))
            }
            o => Err(Error::RestrictedDataType(o.type_name(), DOUBLE)),
        }
    }

    pub fn to_f32(&self) -> Result<(f32, Option<Error>)> {
        let (f, _) = self.to_f64()?;
        if f > f64::from(f32::MAX) || f < f64::from(f32::MIN) {
            Err(Error::IntegralTruncation(f.to_string()))
        } else {
            Ok((f as f32, None))
        }
    }

    pub fn to_i64(&self) -> Result<(i64, Option<Error>)> {
        match self {
            SqlValue::BigInt(i) => Ok((*i, None)),
            SqlValue::Integer(i) => Ok((i64::from(*i), None)),
            SqlValue::Boolean(b) => Ok((i64::from(*b), None)),
            SqlValue::Double(f) => float_to_i64(*f),
            SqlValue::String(s) | SqlValue::Numeric(s) => {
                let f = from_string(s, INT64)?;
                float_to_i64(f)
            }
            o => Err(Error::RestrictedDataType(o.type_name(), INT64)),
        }
    }

    pub fn to_i32(&self) -> Result<(i32, Option<Error>)> {
        let (i, info) = self.to_i64()?;
        if i > i64::from(i32::MAX) || i < i64::from(i32::MIN) {
            Err(Error::IntegralTruncation(i.to_string()))
        } else {
            Ok((i as i32, info))
        }
    }

    pub fn to_u64(&self) -> Result<(u64, Option<Error>)> {
        let (i, info) = self.to_i64()?;
        if i < 0 {
            Err(Error::IntegralTruncation(i.to_string()))
        } else {
            Ok((i as u64, info))
        }
    }

    pub fn to_u32(&self) -> Result<(u32, Option<Error>)> {
        let (i, info) = self.to_i64()?;
        if i < 0 || i > i64::from(u32::MAX) {
            Err(Error::IntegralTruncation(i.to_string()))
        } else {
            Ok((i as u32, info))
        }
    }

    /// GUIDs have no dedicated variant; a 16-byte [`SqlValue::Binary`] is the
    /// only representation accepted, mirroring how a wire client would hand
    /// back a UUID's raw bytes.
    pub fn to_guid(&self) -> Result<Vec<u8>> {
        match self {
            SqlValue::Binary(b) if b.len() == 16 => Ok(b.clone()),
            o => Err(Error::RestrictedDataType(o.type_name(), "GUID")),
        }
    }

    pub fn to_bit(&self) -> Result<(u8, Option<Error>)> {
        match self {
            SqlValue::Boolean(b) => Ok((u8::from(*b), None)),
            _ => {
                let (i, _) = self.to_i64()?;
                match i {
                    0 => Ok((0, None)),
                    1 => Ok((1, None)),
                    _ => Err(Error::IntegralTruncation(i.to_string())),
                }
            }
        }
    }

    pub fn to_date(&self) -> Result<NaiveDate> {
        match self {
            SqlValue::Date(d) => Ok(*d),
            SqlValue::Timestamp(t) => Ok(t.date()),
            SqlValue::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| Error::InvalidCharacterValue("Date")),
            o => Err(Error::RestrictedDataType(o.type_name(), "Date")),
        }
    }

    pub fn to_time(&self) -> Result<NaiveTime> {
        match self {
            SqlValue::Time(t) => Ok(*t),
            SqlValue::Timestamp(t) => Ok(t.time()),
            SqlValue::String(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
                .map_err(|_| Error::InvalidCharacterValue("Time")),
            o => Err(Error::RestrictedDataType(o.type_name(), "Time")),
        }
    }

    pub fn to_timestamp(&self) -> Result<NaiveDateTime> {
        match self {
            SqlValue::Timestamp(t) => Ok(*t),
            SqlValue::Date(d) => Ok(d.and_hms_opt(0, 0, 0).unwrap()),
            SqlValue::String(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map_err(|_| Error::InvalidCharacterValue("Timestamp")),
            o => Err(Error::RestrictedDataType(o.type_name(), "Timestamp")),
        }
    }
}

fn from_string(s: &str, conversion_error_type: &'static str) -> Result<f64> {
    f64::from_str(s).map_err(|_| Error::InvalidCharacterValue(conversion_error_type))
}

fn float_to_i64(f: f64) -> Result<(i64, Option<Error>)> {
    if f > i64::MAX as f64 || f < i64::MIN as f64 {
        Err(Error::IntegralTruncation(f.to_string()))
    } else {
        let info = if f.fract() != 0.0 {
            Some(Error::FractionalTruncation(f.to_string()))
        } else {
            None
        };
        Ok((f as i64, info))
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn integer_widens_to_i64_without_warning() {
        let (v, info) = SqlValue::Integer(42).to_i64().unwrap();
        assert_eq!(v, 42);
        assert!(info.is_none());
    }

    #[test]
    fn fractional_double_to_i64_warns() {
        let (v, info) = SqlValue::Double(3.5).to_i64().unwrap();
        assert_eq!(v, 3);
        assert!(matches!(info, Some(Error::FractionalTruncation(_))));
    }

    #[test]
    fn out_of_range_double_to_i32_errors() {
        let err = SqlValue::Double(1e20).to_i32().unwrap_err();
        assert!(matches!(err, Error::IntegralTruncation(_)));
    }

    #[test]
    fn string_to_f64_parses() {
        let (v, _) = SqlValue::String("3.14".to_string()).to_f64().unwrap();
        assert!((v - 3.14).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_string_is_invalid_character_value() {
        let err = SqlValue::String("not a number".to_string())
            .to_f64()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCharacterValue(_)));
    }

    #[test]
    fn negative_integer_to_u32_is_integral_truncation() {
        let err = SqlValue::Integer(-1).to_u32().unwrap_err();
        assert!(matches!(err, Error::IntegralTruncation(_)));
    }

    #[test]
    fn sixteen_byte_binary_converts_to_guid() {
        let bytes = vec![0u8; 16];
        let guid = SqlValue::Binary(bytes.clone()).to_guid().unwrap();
        assert_eq!(guid, bytes);
    }

    #[test]
    fn non_binary_to_guid_is_restricted() {
        let err = SqlValue::Integer(1).to_guid().unwrap_err();
        assert!(matches!(err, Error::RestrictedDataType(..)));
    }
}
