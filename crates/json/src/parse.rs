use basalt_array::{
    AllocError, Date32Type, Date64Type, DurationMicrosecondType, DurationMillisecondType,
    DurationNanosecondType, DurationSecondType, Float16Type, Float32Type, Float64Type, Int16Type,
    Int32Type, Int64Type, Int8Type, PrimitiveType, Time32MillisecondType, Time32SecondType,
    Time64MicrosecondType, Time64NanosecondType, TimeUnit, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType, UInt16Type,
    UInt32Type, UInt64Type, UInt8Type
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use half::f16;
use serde_json::value::RawValue;


/// A single element of the input array, classified by its JSON kind.
pub enum Token<'a> {
    Null,
    Bool(bool),
    Number(&'a str),
    String(String),
    Composite
}


impl <'a> Token<'a> {
    pub fn classify(raw: &'a RawValue) -> Result<Self, serde_json::Error> {
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'n') => Ok(Token::Null),
            Some(b't') | Some(b'f') => Ok(Token::Bool(serde_json::from_str(text)?)),
            Some(b'"') => Ok(Token::String(serde_json::from_str(text)?)),
            Some(b'{') | Some(b'[') => Ok(Token::Composite),
            _ => Ok(Token::Number(text))
        }
    }
}


pub enum TokenError {
    Mismatch,
    Alloc(AllocError)
}


impl From<AllocError> for TokenError {
    fn from(err: AllocError) -> Self {
        TokenError::Alloc(err)
    }
}


/// Conversion from a classified JSON token into a primitive value.
pub trait FromJson: PrimitiveType {
    fn from_token(token: &Token<'_>) -> Option<Self::Native>;
}


macro_rules! impl_number_from_json {
    ($ty:ident, $native:ty) => {
        impl FromJson for $ty {
            fn from_token(token: &Token<'_>) -> Option<$native> {
                match token {
                    Token::Number(text) => text.parse().ok(),
                    Token::String(text) => text.parse().ok(),
                    _ => None
                }
            }
        }
    };
}
impl_number_from_json!(Int8Type, i8);
impl_number_from_json!(Int16Type, i16);
impl_number_from_json!(Int32Type, i32);
impl_number_from_json!(Int64Type, i64);
impl_number_from_json!(UInt8Type, u8);
impl_number_from_json!(UInt16Type, u16);
impl_number_from_json!(UInt32Type, u32);
impl_number_from_json!(UInt64Type, u64);
impl_number_from_json!(Float32Type, f32);
impl_number_from_json!(Float64Type, f64);


impl FromJson for Float16Type {
    fn from_token(token: &Token<'_>) -> Option<f16> {
        match token {
            Token::Number(text) => text.parse::<f32>().ok().map(f16::from_f32),
            Token::String(text) => text.parse::<f32>().ok().map(f16::from_f32),
            _ => None
        }
    }
}


impl FromJson for Date32Type {
    fn from_token(token: &Token<'_>) -> Option<i32> {
        match token {
            Token::Number(text) => text.parse().ok(),
            Token::String(text) => date32_value(text),
            _ => None
        }
    }
}


impl FromJson for Date64Type {
    fn from_token(token: &Token<'_>) -> Option<i64> {
        match token {
            Token::Number(text) => text.parse().ok(),
            Token::String(text) => date64_value(text),
            _ => None
        }
    }
}


macro_rules! impl_time_from_json {
    ($ty:ident, $native:ty, $unit:expr) => {
        impl FromJson for $ty {
            fn from_token(token: &Token<'_>) -> Option<$native> {
                match token {
                    Token::Number(text) => text.parse().ok(),
                    Token::String(text) => {
                        let value = time_value(text, $unit)?;
                        <$native>::try_from(value).ok()
                    },
                    _ => None
                }
            }
        }
    };
}
impl_time_from_json!(Time32SecondType, i32, TimeUnit::Second);
impl_time_from_json!(Time32MillisecondType, i32, TimeUnit::Millisecond);
impl_time_from_json!(Time64MicrosecondType, i64, TimeUnit::Microsecond);
impl_time_from_json!(Time64NanosecondType, i64, TimeUnit::Nanosecond);


macro_rules! impl_timestamp_from_json {
    ($ty:ident, $unit:expr) => {
        impl FromJson for $ty {
            fn from_token(token: &Token<'_>) -> Option<i64> {
                match token {
                    Token::Number(text) => text.parse().ok(),
                    Token::String(text) => timestamp_value(text, $unit),
                    _ => None
                }
            }
        }
    };
}
impl_timestamp_from_json!(TimestampSecondType, TimeUnit::Second);
impl_timestamp_from_json!(TimestampMillisecondType, TimeUnit::Millisecond);
impl_timestamp_from_json!(TimestampMicrosecondType, TimeUnit::Microsecond);
impl_timestamp_from_json!(TimestampNanosecondType, TimeUnit::Nanosecond);


macro_rules! impl_duration_from_json {
    ($ty:ident, $unit:expr) => {
        impl FromJson for $ty {
            fn from_token(token: &Token<'_>) -> Option<i64> {
                match token {
                    Token::Number(text) => text.parse().ok(),
                    Token::String(text) => duration_value(text, $unit),
                    _ => None
                }
            }
        }
    };
}
impl_duration_from_json!(DurationSecondType, TimeUnit::Second);
impl_duration_from_json!(DurationMillisecondType, TimeUnit::Millisecond);
impl_duration_from_json!(DurationMicrosecondType, TimeUnit::Microsecond);
impl_duration_from_json!(DurationNanosecondType, TimeUnit::Nanosecond);


pub fn bool_value(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None
    }
}


fn date32_value(text: &str) -> Option<i32> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    i32::try_from(date.signed_duration_since(epoch).num_days()).ok()
}


fn date64_value(text: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}


fn time_value(text: &str, unit: TimeUnit) -> Option<i64> {
    let time = NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()?;
    let seconds = i64::from(time.num_seconds_from_midnight());
    let nanos = i64::from(time.nanosecond());
    Some(match unit {
        TimeUnit::Second => seconds,
        TimeUnit::Millisecond => seconds * 1_000 + nanos / 1_000_000,
        TimeUnit::Microsecond => seconds * 1_000_000 + nanos / 1_000,
        TimeUnit::Nanosecond => seconds * 1_000_000_000 + nanos
    })
}


fn timestamp_value(text: &str, unit: TimeUnit) -> Option<i64> {
    let datetime = parse_datetime(text)?;
    match unit {
        TimeUnit::Second => Some(datetime.timestamp()),
        TimeUnit::Millisecond => Some(datetime.timestamp_millis()),
        TimeUnit::Microsecond => Some(datetime.timestamp_micros()),
        TimeUnit::Nanosecond => datetime.timestamp_nanos_opt()
    }
}


fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
            date.and_hms_opt(0, 0, 0)
        })
        .map(|naive| naive.and_utc())
}


/// Converts a duration string to the given unit. Suffixed forms
/// (`2h`, `3h2m0.5s`, `1500ms`) are parsed to nanoseconds first;
/// magnitudes beyond the nanosecond range are accepted as a bare
/// integer, optionally carrying the unit's own suffix.
fn duration_value(text: &str, unit: TimeUnit) -> Option<i64> {
    if let Some(nanos) = duration_nanos(text) {
        return Some(nanos / unit.nanos());
    }
    let bare = text.strip_suffix(unit.suffix()).unwrap_or(text);
    bare.parse().ok()
}


/// Parses a sequence of possibly-fractional decimal numbers, each with
/// a unit suffix (`ns`, `us`, `ms`, `s`, `m`, `h`), into a signed
/// nanosecond count.
fn duration_nanos(text: &str) -> Option<i64> {
    let mut s = text;
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }
    if s == "0" {
        return Some(0);
    }
    if s.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return None;
        }

        let (int_part, rest, has_int) = leading_int(s)?;
        s = rest;

        let mut frac_part: u64 = 0;
        let mut scale: f64 = 1.0;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (value, value_scale, rest, consumed) = leading_fraction(rest);
            frac_part = value;
            scale = value_scale;
            has_frac = consumed;
            s = rest;
        }
        if !has_int && !has_frac {
            return None;
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return None;
        }
        let unit: u64 = match &s[..unit_len] {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            _ => return None
        };
        s = &s[unit_len..];

        if int_part > (1 << 63) / unit {
            return None;
        }
        let mut value = int_part * unit;
        if frac_part > 0 {
            value += (frac_part as f64 * (unit as f64 / scale)) as u64;
            if value > 1 << 63 {
                return None;
            }
        }
        total = total.checked_add(value)?;
        if total > 1 << 63 {
            return None;
        }
    }

    if neg {
        Some((total as i64).wrapping_neg())
    } else if total > (1 << 63) - 1 {
        None
    } else {
        Some(total as i64)
    }
}


fn leading_int(s: &str) -> Option<(u64, &str, bool)> {
    let mut value: u64 = 0;
    let mut i = 0;
    let bytes = s.as_bytes();
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        if value > ((1 << 63) - 1) / 10 {
            return None;
        }
        value = value * 10 + u64::from(bytes[i] - b'0');
        if value > 1 << 63 {
            return None;
        }
        i += 1;
    }
    Some((value, &s[i..], i > 0))
}


fn leading_fraction(s: &str) -> (u64, f64, &str, bool) {
    let mut value: u64 = 0;
    let mut scale: f64 = 1.0;
    let mut overflow = false;
    let mut i = 0;
    let bytes = s.as_bytes();
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        if !overflow {
            if value > ((1 << 63) - 1) / 10 {
                overflow = true;
            } else {
                let next = value * 10 + u64::from(bytes[i] - b'0');
                if next > 1 << 63 {
                    overflow = true;
                } else {
                    value = next;
                    scale *= 10.0;
                }
            }
        }
        i += 1;
    }
    (value, scale, &s[i..], i > 0)
}
