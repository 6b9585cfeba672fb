use half::f16;
use std::fmt;


/// Resolution of temporal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond
}


impl TimeUnit {
    /// Unit suffix as it appears in textual duration values.
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "us",
            TimeUnit::Nanosecond => "ns"
        }
    }

    /// Number of nanoseconds in one unit.
    pub fn nanos(&self) -> i64 {
        match self {
            TimeUnit::Second => 1_000_000_000,
            TimeUnit::Millisecond => 1_000_000,
            TimeUnit::Microsecond => 1_000,
            TimeUnit::Nanosecond => 1
        }
    }
}


impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}


/// Logical type of array values.
///
/// `Time32` is valid with second and millisecond units only,
/// `Time64` with microsecond and nanosecond units only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Date32,
    Date64,
    Time32(TimeUnit),
    Time64(TimeUnit),
    Timestamp(TimeUnit),
    Duration(TimeUnit)
}


impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Boolean => f.write_str("bool"),
            DataType::Int8 => f.write_str("int8"),
            DataType::Int16 => f.write_str("int16"),
            DataType::Int32 => f.write_str("int32"),
            DataType::Int64 => f.write_str("int64"),
            DataType::UInt8 => f.write_str("uint8"),
            DataType::UInt16 => f.write_str("uint16"),
            DataType::UInt32 => f.write_str("uint32"),
            DataType::UInt64 => f.write_str("uint64"),
            DataType::Float16 => f.write_str("float16"),
            DataType::Float32 => f.write_str("float32"),
            DataType::Float64 => f.write_str("float64"),
            DataType::Date32 => f.write_str("date32"),
            DataType::Date64 => f.write_str("date64"),
            DataType::Time32(unit) => write!(f, "time32[{}]", unit),
            DataType::Time64(unit) => write!(f, "time64[{}]", unit),
            DataType::Timestamp(unit) => write!(f, "timestamp[{}]", unit),
            DataType::Duration(unit) => write!(f, "duration[{}]", unit)
        }
    }
}


mod private {
    pub trait Sealed {}
}


/// Fixed width scalar stored directly in a value buffer.
pub trait Native:
    private::Sealed + Copy + Default + PartialEq + Send + Sync + fmt::Debug + 'static
{
    const WIDTH: usize;
}


macro_rules! impl_native {
    ($t:ty) => {
        impl private::Sealed for $t {}
        impl Native for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
        }
    };
}
impl_native!(i8);
impl_native!(i16);
impl_native!(i32);
impl_native!(i64);
impl_native!(u8);
impl_native!(u16);
impl_native!(u32);
impl_native!(u64);
impl_native!(f16);
impl_native!(f32);
impl_native!(f64);


/// Reinterprets a slice of native values as raw bytes.
pub fn bytes_of<T: Native>(values: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast(), std::mem::size_of_val(values)) }
}


/// Marker tying a logical [`DataType`] to its [`Native`] representation.
pub trait PrimitiveType: Send + Sync + fmt::Debug + 'static {
    type Native: Native;

    const DATA_TYPE: DataType;
}


macro_rules! make_type {
    ($name:ident, $native:ty, $data_type:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug)]
        pub struct $name {}

        impl PrimitiveType for $name {
            type Native = $native;

            const DATA_TYPE: DataType = $data_type;
        }
    };
}

make_type!(Int8Type, i8, DataType::Int8, "A signed 8-bit integer type.");
make_type!(Int16Type, i16, DataType::Int16, "A signed 16-bit integer type.");
make_type!(Int32Type, i32, DataType::Int32, "A signed 32-bit integer type.");
make_type!(Int64Type, i64, DataType::Int64, "A signed 64-bit integer type.");
make_type!(UInt8Type, u8, DataType::UInt8, "An unsigned 8-bit integer type.");
make_type!(UInt16Type, u16, DataType::UInt16, "An unsigned 16-bit integer type.");
make_type!(UInt32Type, u32, DataType::UInt32, "An unsigned 32-bit integer type.");
make_type!(UInt64Type, u64, DataType::UInt64, "An unsigned 64-bit integer type.");
make_type!(Float16Type, f16, DataType::Float16, "A 16-bit floating point type.");
make_type!(Float32Type, f32, DataType::Float32, "A 32-bit floating point type.");
make_type!(Float64Type, f64, DataType::Float64, "A 64-bit floating point type.");
make_type!(
    Date32Type,
    i32,
    DataType::Date32,
    "A date type counting days since the unix epoch."
);
make_type!(
    Date64Type,
    i64,
    DataType::Date64,
    "A date type counting milliseconds since the unix epoch."
);
make_type!(
    Time32SecondType,
    i32,
    DataType::Time32(TimeUnit::Second),
    "A time of day type with second resolution."
);
make_type!(
    Time32MillisecondType,
    i32,
    DataType::Time32(TimeUnit::Millisecond),
    "A time of day type with millisecond resolution."
);
make_type!(
    Time64MicrosecondType,
    i64,
    DataType::Time64(TimeUnit::Microsecond),
    "A time of day type with microsecond resolution."
);
make_type!(
    Time64NanosecondType,
    i64,
    DataType::Time64(TimeUnit::Nanosecond),
    "A time of day type with nanosecond resolution."
);
make_type!(
    TimestampSecondType,
    i64,
    DataType::Timestamp(TimeUnit::Second),
    "A timestamp type counting seconds since the unix epoch."
);
make_type!(
    TimestampMillisecondType,
    i64,
    DataType::Timestamp(TimeUnit::Millisecond),
    "A timestamp type counting milliseconds since the unix epoch."
);
make_type!(
    TimestampMicrosecondType,
    i64,
    DataType::Timestamp(TimeUnit::Microsecond),
    "A timestamp type counting microseconds since the unix epoch."
);
make_type!(
    TimestampNanosecondType,
    i64,
    DataType::Timestamp(TimeUnit::Nanosecond),
    "A timestamp type counting nanoseconds since the unix epoch."
);
make_type!(
    DurationSecondType,
    i64,
    DataType::Duration(TimeUnit::Second),
    "An elapsed time type measured in seconds."
);
make_type!(
    DurationMillisecondType,
    i64,
    DataType::Duration(TimeUnit::Millisecond),
    "An elapsed time type measured in milliseconds."
);
make_type!(
    DurationMicrosecondType,
    i64,
    DataType::Duration(TimeUnit::Microsecond),
    "An elapsed time type measured in microseconds."
);
make_type!(
    DurationNanosecondType,
    i64,
    DataType::Duration(TimeUnit::Nanosecond),
    "An elapsed time type measured in nanoseconds."
);
