use crate::alloc::AllocError;
use crate::array::ArrayRef;
use crate::builder::{ArrayBuilder, BooleanBuilder, PrimitiveBuilder};
use crate::types::{
    DataType, Date32Type, Date64Type, DurationMicrosecondType, DurationMillisecondType,
    DurationNanosecondType, DurationSecondType, Float16Type, Float32Type, Float64Type, Int16Type,
    Int32Type, Int64Type, Int8Type, Time32MillisecondType, Time32SecondType,
    Time64MicrosecondType, Time64NanosecondType, TimeUnit, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType, UInt16Type,
    UInt32Type, UInt64Type, UInt8Type
};


pub enum AnyBuilder {
    Boolean(BooleanBuilder),
    Int8(PrimitiveBuilder<Int8Type>),
    Int16(PrimitiveBuilder<Int16Type>),
    Int32(PrimitiveBuilder<Int32Type>),
    Int64(PrimitiveBuilder<Int64Type>),
    UInt8(PrimitiveBuilder<UInt8Type>),
    UInt16(PrimitiveBuilder<UInt16Type>),
    UInt32(PrimitiveBuilder<UInt32Type>),
    UInt64(PrimitiveBuilder<UInt64Type>),
    Float16(PrimitiveBuilder<Float16Type>),
    Float32(PrimitiveBuilder<Float32Type>),
    Float64(PrimitiveBuilder<Float64Type>),
    Date32(PrimitiveBuilder<Date32Type>),
    Date64(PrimitiveBuilder<Date64Type>),
    Time32Second(PrimitiveBuilder<Time32SecondType>),
    Time32Millisecond(PrimitiveBuilder<Time32MillisecondType>),
    Time64Microsecond(PrimitiveBuilder<Time64MicrosecondType>),
    Time64Nanosecond(PrimitiveBuilder<Time64NanosecondType>),
    TimestampSecond(PrimitiveBuilder<TimestampSecondType>),
    TimestampMillisecond(PrimitiveBuilder<TimestampMillisecondType>),
    TimestampMicrosecond(PrimitiveBuilder<TimestampMicrosecondType>),
    TimestampNanosecond(PrimitiveBuilder<TimestampNanosecondType>),
    DurationSecond(PrimitiveBuilder<DurationSecondType>),
    DurationMillisecond(PrimitiveBuilder<DurationMillisecondType>),
    DurationMicrosecond(PrimitiveBuilder<DurationMicrosecondType>),
    DurationNanosecond(PrimitiveBuilder<DurationNanosecondType>)
}


impl AnyBuilder {
    pub fn new(data_type: &DataType) -> Self {
        match data_type {
            DataType::Boolean => BooleanBuilder::new().into(),
            DataType::Int8 => PrimitiveBuilder::<Int8Type>::new().into(),
            DataType::Int16 => PrimitiveBuilder::<Int16Type>::new().into(),
            DataType::Int32 => PrimitiveBuilder::<Int32Type>::new().into(),
            DataType::Int64 => PrimitiveBuilder::<Int64Type>::new().into(),
            DataType::UInt8 => PrimitiveBuilder::<UInt8Type>::new().into(),
            DataType::UInt16 => PrimitiveBuilder::<UInt16Type>::new().into(),
            DataType::UInt32 => PrimitiveBuilder::<UInt32Type>::new().into(),
            DataType::UInt64 => PrimitiveBuilder::<UInt64Type>::new().into(),
            DataType::Float16 => PrimitiveBuilder::<Float16Type>::new().into(),
            DataType::Float32 => PrimitiveBuilder::<Float32Type>::new().into(),
            DataType::Float64 => PrimitiveBuilder::<Float64Type>::new().into(),
            DataType::Date32 => PrimitiveBuilder::<Date32Type>::new().into(),
            DataType::Date64 => PrimitiveBuilder::<Date64Type>::new().into(),
            DataType::Time32(TimeUnit::Second) => {
                PrimitiveBuilder::<Time32SecondType>::new().into()
            },
            DataType::Time32(TimeUnit::Millisecond) => {
                PrimitiveBuilder::<Time32MillisecondType>::new().into()
            },
            DataType::Time64(TimeUnit::Microsecond) => {
                PrimitiveBuilder::<Time64MicrosecondType>::new().into()
            },
            DataType::Time64(TimeUnit::Nanosecond) => {
                PrimitiveBuilder::<Time64NanosecondType>::new().into()
            },
            DataType::Timestamp(TimeUnit::Second) => {
                PrimitiveBuilder::<TimestampSecondType>::new().into()
            },
            DataType::Timestamp(TimeUnit::Millisecond) => {
                PrimitiveBuilder::<TimestampMillisecondType>::new().into()
            },
            DataType::Timestamp(TimeUnit::Microsecond) => {
                PrimitiveBuilder::<TimestampMicrosecondType>::new().into()
            },
            DataType::Timestamp(TimeUnit::Nanosecond) => {
                PrimitiveBuilder::<TimestampNanosecondType>::new().into()
            },
            DataType::Duration(TimeUnit::Second) => {
                PrimitiveBuilder::<DurationSecondType>::new().into()
            },
            DataType::Duration(TimeUnit::Millisecond) => {
                PrimitiveBuilder::<DurationMillisecondType>::new().into()
            },
            DataType::Duration(TimeUnit::Microsecond) => {
                PrimitiveBuilder::<DurationMicrosecondType>::new().into()
            },
            DataType::Duration(TimeUnit::Nanosecond) => {
                PrimitiveBuilder::<DurationNanosecondType>::new().into()
            },
            ty => panic!("unsupported data type - {}", ty)
        }
    }
}


impl ArrayBuilder for AnyBuilder {
    fn data_type(&self) -> DataType {
        match self {
            AnyBuilder::Boolean(b) => b.data_type(),
            AnyBuilder::Int8(b) => b.data_type(),
            AnyBuilder::Int16(b) => b.data_type(),
            AnyBuilder::Int32(b) => b.data_type(),
            AnyBuilder::Int64(b) => b.data_type(),
            AnyBuilder::UInt8(b) => b.data_type(),
            AnyBuilder::UInt16(b) => b.data_type(),
            AnyBuilder::UInt32(b) => b.data_type(),
            AnyBuilder::UInt64(b) => b.data_type(),
            AnyBuilder::Float16(b) => b.data_type(),
            AnyBuilder::Float32(b) => b.data_type(),
            AnyBuilder::Float64(b) => b.data_type(),
            AnyBuilder::Date32(b) => b.data_type(),
            AnyBuilder::Date64(b) => b.data_type(),
            AnyBuilder::Time32Second(b) => b.data_type(),
            AnyBuilder::Time32Millisecond(b) => b.data_type(),
            AnyBuilder::Time64Microsecond(b) => b.data_type(),
            AnyBuilder::Time64Nanosecond(b) => b.data_type(),
            AnyBuilder::TimestampSecond(b) => b.data_type(),
            AnyBuilder::TimestampMillisecond(b) => b.data_type(),
            AnyBuilder::TimestampMicrosecond(b) => b.data_type(),
            AnyBuilder::TimestampNanosecond(b) => b.data_type(),
            AnyBuilder::DurationSecond(b) => b.data_type(),
            AnyBuilder::DurationMillisecond(b) => b.data_type(),
            AnyBuilder::DurationMicrosecond(b) => b.data_type(),
            AnyBuilder::DurationNanosecond(b) => b.data_type(),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyBuilder::Boolean(b) => b.len(),
            AnyBuilder::Int8(b) => b.len(),
            AnyBuilder::Int16(b) => b.len(),
            AnyBuilder::Int32(b) => b.len(),
            AnyBuilder::Int64(b) => b.len(),
            AnyBuilder::UInt8(b) => b.len(),
            AnyBuilder::UInt16(b) => b.len(),
            AnyBuilder::UInt32(b) => b.len(),
            AnyBuilder::UInt64(b) => b.len(),
            AnyBuilder::Float16(b) => b.len(),
            AnyBuilder::Float32(b) => b.len(),
            AnyBuilder::Float64(b) => b.len(),
            AnyBuilder::Date32(b) => b.len(),
            AnyBuilder::Date64(b) => b.len(),
            AnyBuilder::Time32Second(b) => b.len(),
            AnyBuilder::Time32Millisecond(b) => b.len(),
            AnyBuilder::Time64Microsecond(b) => b.len(),
            AnyBuilder::Time64Nanosecond(b) => b.len(),
            AnyBuilder::TimestampSecond(b) => b.len(),
            AnyBuilder::TimestampMillisecond(b) => b.len(),
            AnyBuilder::TimestampMicrosecond(b) => b.len(),
            AnyBuilder::TimestampNanosecond(b) => b.len(),
            AnyBuilder::DurationSecond(b) => b.len(),
            AnyBuilder::DurationMillisecond(b) => b.len(),
            AnyBuilder::DurationMicrosecond(b) => b.len(),
            AnyBuilder::DurationNanosecond(b) => b.len(),
        }
    }

    fn null_count(&self) -> usize {
        match self {
            AnyBuilder::Boolean(b) => b.null_count(),
            AnyBuilder::Int8(b) => b.null_count(),
            AnyBuilder::Int16(b) => b.null_count(),
            AnyBuilder::Int32(b) => b.null_count(),
            AnyBuilder::Int64(b) => b.null_count(),
            AnyBuilder::UInt8(b) => b.null_count(),
            AnyBuilder::UInt16(b) => b.null_count(),
            AnyBuilder::UInt32(b) => b.null_count(),
            AnyBuilder::UInt64(b) => b.null_count(),
            AnyBuilder::Float16(b) => b.null_count(),
            AnyBuilder::Float32(b) => b.null_count(),
            AnyBuilder::Float64(b) => b.null_count(),
            AnyBuilder::Date32(b) => b.null_count(),
            AnyBuilder::Date64(b) => b.null_count(),
            AnyBuilder::Time32Second(b) => b.null_count(),
            AnyBuilder::Time32Millisecond(b) => b.null_count(),
            AnyBuilder::Time64Microsecond(b) => b.null_count(),
            AnyBuilder::Time64Nanosecond(b) => b.null_count(),
            AnyBuilder::TimestampSecond(b) => b.null_count(),
            AnyBuilder::TimestampMillisecond(b) => b.null_count(),
            AnyBuilder::TimestampMicrosecond(b) => b.null_count(),
            AnyBuilder::TimestampNanosecond(b) => b.null_count(),
            AnyBuilder::DurationSecond(b) => b.null_count(),
            AnyBuilder::DurationMillisecond(b) => b.null_count(),
            AnyBuilder::DurationMicrosecond(b) => b.null_count(),
            AnyBuilder::DurationNanosecond(b) => b.null_count(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            AnyBuilder::Boolean(b) => b.capacity(),
            AnyBuilder::Int8(b) => b.capacity(),
            AnyBuilder::Int16(b) => b.capacity(),
            AnyBuilder::Int32(b) => b.capacity(),
            AnyBuilder::Int64(b) => b.capacity(),
            AnyBuilder::UInt8(b) => b.capacity(),
            AnyBuilder::UInt16(b) => b.capacity(),
            AnyBuilder::UInt32(b) => b.capacity(),
            AnyBuilder::UInt64(b) => b.capacity(),
            AnyBuilder::Float16(b) => b.capacity(),
            AnyBuilder::Float32(b) => b.capacity(),
            AnyBuilder::Float64(b) => b.capacity(),
            AnyBuilder::Date32(b) => b.capacity(),
            AnyBuilder::Date64(b) => b.capacity(),
            AnyBuilder::Time32Second(b) => b.capacity(),
            AnyBuilder::Time32Millisecond(b) => b.capacity(),
            AnyBuilder::Time64Microsecond(b) => b.capacity(),
            AnyBuilder::Time64Nanosecond(b) => b.capacity(),
            AnyBuilder::TimestampSecond(b) => b.capacity(),
            AnyBuilder::TimestampMillisecond(b) => b.capacity(),
            AnyBuilder::TimestampMicrosecond(b) => b.capacity(),
            AnyBuilder::TimestampNanosecond(b) => b.capacity(),
            AnyBuilder::DurationSecond(b) => b.capacity(),
            AnyBuilder::DurationMillisecond(b) => b.capacity(),
            AnyBuilder::DurationMicrosecond(b) => b.capacity(),
            AnyBuilder::DurationNanosecond(b) => b.capacity(),
        }
    }

    fn byte_size(&self) -> usize {
        match self {
            AnyBuilder::Boolean(b) => b.byte_size(),
            AnyBuilder::Int8(b) => b.byte_size(),
            AnyBuilder::Int16(b) => b.byte_size(),
            AnyBuilder::Int32(b) => b.byte_size(),
            AnyBuilder::Int64(b) => b.byte_size(),
            AnyBuilder::UInt8(b) => b.byte_size(),
            AnyBuilder::UInt16(b) => b.byte_size(),
            AnyBuilder::UInt32(b) => b.byte_size(),
            AnyBuilder::UInt64(b) => b.byte_size(),
            AnyBuilder::Float16(b) => b.byte_size(),
            AnyBuilder::Float32(b) => b.byte_size(),
            AnyBuilder::Float64(b) => b.byte_size(),
            AnyBuilder::Date32(b) => b.byte_size(),
            AnyBuilder::Date64(b) => b.byte_size(),
            AnyBuilder::Time32Second(b) => b.byte_size(),
            AnyBuilder::Time32Millisecond(b) => b.byte_size(),
            AnyBuilder::Time64Microsecond(b) => b.byte_size(),
            AnyBuilder::Time64Nanosecond(b) => b.byte_size(),
            AnyBuilder::TimestampSecond(b) => b.byte_size(),
            AnyBuilder::TimestampMillisecond(b) => b.byte_size(),
            AnyBuilder::TimestampMicrosecond(b) => b.byte_size(),
            AnyBuilder::TimestampNanosecond(b) => b.byte_size(),
            AnyBuilder::DurationSecond(b) => b.byte_size(),
            AnyBuilder::DurationMillisecond(b) => b.byte_size(),
            AnyBuilder::DurationMicrosecond(b) => b.byte_size(),
            AnyBuilder::DurationNanosecond(b) => b.byte_size(),
        }
    }

    fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        match self {
            AnyBuilder::Boolean(b) => b.reserve(additional),
            AnyBuilder::Int8(b) => b.reserve(additional),
            AnyBuilder::Int16(b) => b.reserve(additional),
            AnyBuilder::Int32(b) => b.reserve(additional),
            AnyBuilder::Int64(b) => b.reserve(additional),
            AnyBuilder::UInt8(b) => b.reserve(additional),
            AnyBuilder::UInt16(b) => b.reserve(additional),
            AnyBuilder::UInt32(b) => b.reserve(additional),
            AnyBuilder::UInt64(b) => b.reserve(additional),
            AnyBuilder::Float16(b) => b.reserve(additional),
            AnyBuilder::Float32(b) => b.reserve(additional),
            AnyBuilder::Float64(b) => b.reserve(additional),
            AnyBuilder::Date32(b) => b.reserve(additional),
            AnyBuilder::Date64(b) => b.reserve(additional),
            AnyBuilder::Time32Second(b) => b.reserve(additional),
            AnyBuilder::Time32Millisecond(b) => b.reserve(additional),
            AnyBuilder::Time64Microsecond(b) => b.reserve(additional),
            AnyBuilder::Time64Nanosecond(b) => b.reserve(additional),
            AnyBuilder::TimestampSecond(b) => b.reserve(additional),
            AnyBuilder::TimestampMillisecond(b) => b.reserve(additional),
            AnyBuilder::TimestampMicrosecond(b) => b.reserve(additional),
            AnyBuilder::TimestampNanosecond(b) => b.reserve(additional),
            AnyBuilder::DurationSecond(b) => b.reserve(additional),
            AnyBuilder::DurationMillisecond(b) => b.reserve(additional),
            AnyBuilder::DurationMicrosecond(b) => b.reserve(additional),
            AnyBuilder::DurationNanosecond(b) => b.reserve(additional),
        }
    }

    fn resize(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        match self {
            AnyBuilder::Boolean(b) => b.resize(new_capacity),
            AnyBuilder::Int8(b) => b.resize(new_capacity),
            AnyBuilder::Int16(b) => b.resize(new_capacity),
            AnyBuilder::Int32(b) => b.resize(new_capacity),
            AnyBuilder::Int64(b) => b.resize(new_capacity),
            AnyBuilder::UInt8(b) => b.resize(new_capacity),
            AnyBuilder::UInt16(b) => b.resize(new_capacity),
            AnyBuilder::UInt32(b) => b.resize(new_capacity),
            AnyBuilder::UInt64(b) => b.resize(new_capacity),
            AnyBuilder::Float16(b) => b.resize(new_capacity),
            AnyBuilder::Float32(b) => b.resize(new_capacity),
            AnyBuilder::Float64(b) => b.resize(new_capacity),
            AnyBuilder::Date32(b) => b.resize(new_capacity),
            AnyBuilder::Date64(b) => b.resize(new_capacity),
            AnyBuilder::Time32Second(b) => b.resize(new_capacity),
            AnyBuilder::Time32Millisecond(b) => b.resize(new_capacity),
            AnyBuilder::Time64Microsecond(b) => b.resize(new_capacity),
            AnyBuilder::Time64Nanosecond(b) => b.resize(new_capacity),
            AnyBuilder::TimestampSecond(b) => b.resize(new_capacity),
            AnyBuilder::TimestampMillisecond(b) => b.resize(new_capacity),
            AnyBuilder::TimestampMicrosecond(b) => b.resize(new_capacity),
            AnyBuilder::TimestampNanosecond(b) => b.resize(new_capacity),
            AnyBuilder::DurationSecond(b) => b.resize(new_capacity),
            AnyBuilder::DurationMillisecond(b) => b.resize(new_capacity),
            AnyBuilder::DurationMicrosecond(b) => b.resize(new_capacity),
            AnyBuilder::DurationNanosecond(b) => b.resize(new_capacity),
        }
    }

    fn append_null(&mut self) -> Result<(), AllocError> {
        match self {
            AnyBuilder::Boolean(b) => b.append_null(),
            AnyBuilder::Int8(b) => b.append_null(),
            AnyBuilder::Int16(b) => b.append_null(),
            AnyBuilder::Int32(b) => b.append_null(),
            AnyBuilder::Int64(b) => b.append_null(),
            AnyBuilder::UInt8(b) => b.append_null(),
            AnyBuilder::UInt16(b) => b.append_null(),
            AnyBuilder::UInt32(b) => b.append_null(),
            AnyBuilder::UInt64(b) => b.append_null(),
            AnyBuilder::Float16(b) => b.append_null(),
            AnyBuilder::Float32(b) => b.append_null(),
            AnyBuilder::Float64(b) => b.append_null(),
            AnyBuilder::Date32(b) => b.append_null(),
            AnyBuilder::Date64(b) => b.append_null(),
            AnyBuilder::Time32Second(b) => b.append_null(),
            AnyBuilder::Time32Millisecond(b) => b.append_null(),
            AnyBuilder::Time64Microsecond(b) => b.append_null(),
            AnyBuilder::Time64Nanosecond(b) => b.append_null(),
            AnyBuilder::TimestampSecond(b) => b.append_null(),
            AnyBuilder::TimestampMillisecond(b) => b.append_null(),
            AnyBuilder::TimestampMicrosecond(b) => b.append_null(),
            AnyBuilder::TimestampNanosecond(b) => b.append_null(),
            AnyBuilder::DurationSecond(b) => b.append_null(),
            AnyBuilder::DurationMillisecond(b) => b.append_null(),
            AnyBuilder::DurationMicrosecond(b) => b.append_null(),
            AnyBuilder::DurationNanosecond(b) => b.append_null(),
        }
    }

    fn clear(&mut self) {
        match self {
            AnyBuilder::Boolean(b) => b.clear(),
            AnyBuilder::Int8(b) => b.clear(),
            AnyBuilder::Int16(b) => b.clear(),
            AnyBuilder::Int32(b) => b.clear(),
            AnyBuilder::Int64(b) => b.clear(),
            AnyBuilder::UInt8(b) => b.clear(),
            AnyBuilder::UInt16(b) => b.clear(),
            AnyBuilder::UInt32(b) => b.clear(),
            AnyBuilder::UInt64(b) => b.clear(),
            AnyBuilder::Float16(b) => b.clear(),
            AnyBuilder::Float32(b) => b.clear(),
            AnyBuilder::Float64(b) => b.clear(),
            AnyBuilder::Date32(b) => b.clear(),
            AnyBuilder::Date64(b) => b.clear(),
            AnyBuilder::Time32Second(b) => b.clear(),
            AnyBuilder::Time32Millisecond(b) => b.clear(),
            AnyBuilder::Time64Microsecond(b) => b.clear(),
            AnyBuilder::Time64Nanosecond(b) => b.clear(),
            AnyBuilder::TimestampSecond(b) => b.clear(),
            AnyBuilder::TimestampMillisecond(b) => b.clear(),
            AnyBuilder::TimestampMicrosecond(b) => b.clear(),
            AnyBuilder::TimestampNanosecond(b) => b.clear(),
            AnyBuilder::DurationSecond(b) => b.clear(),
            AnyBuilder::DurationMillisecond(b) => b.clear(),
            AnyBuilder::DurationMicrosecond(b) => b.clear(),
            AnyBuilder::DurationNanosecond(b) => b.clear(),
        }
    }

    fn finish(&mut self) -> ArrayRef {
        match self {
            AnyBuilder::Boolean(b) => ArrayBuilder::finish(b),
            AnyBuilder::Int8(b) => ArrayBuilder::finish(b),
            AnyBuilder::Int16(b) => ArrayBuilder::finish(b),
            AnyBuilder::Int32(b) => ArrayBuilder::finish(b),
            AnyBuilder::Int64(b) => ArrayBuilder::finish(b),
            AnyBuilder::UInt8(b) => ArrayBuilder::finish(b),
            AnyBuilder::UInt16(b) => ArrayBuilder::finish(b),
            AnyBuilder::UInt32(b) => ArrayBuilder::finish(b),
            AnyBuilder::UInt64(b) => ArrayBuilder::finish(b),
            AnyBuilder::Float16(b) => ArrayBuilder::finish(b),
            AnyBuilder::Float32(b) => ArrayBuilder::finish(b),
            AnyBuilder::Float64(b) => ArrayBuilder::finish(b),
            AnyBuilder::Date32(b) => ArrayBuilder::finish(b),
            AnyBuilder::Date64(b) => ArrayBuilder::finish(b),
            AnyBuilder::Time32Second(b) => ArrayBuilder::finish(b),
            AnyBuilder::Time32Millisecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::Time64Microsecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::Time64Nanosecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::TimestampSecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::TimestampMillisecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::TimestampMicrosecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::TimestampNanosecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::DurationSecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::DurationMillisecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::DurationMicrosecond(b) => ArrayBuilder::finish(b),
            AnyBuilder::DurationNanosecond(b) => ArrayBuilder::finish(b),
        }
    }
}


impl From<BooleanBuilder> for AnyBuilder {
    fn from(value: BooleanBuilder) -> Self {
        AnyBuilder::Boolean(value)
    }
}


macro_rules! impl_from_primitive {
    ($kind:ident, $ty:ident) => {
        impl From<PrimitiveBuilder<$ty>> for AnyBuilder {
            fn from(value: PrimitiveBuilder<$ty>) -> Self {
                AnyBuilder::$kind(value)
            }
        }
    };
}
impl_from_primitive!(Int8, Int8Type);
impl_from_primitive!(Int16, Int16Type);
impl_from_primitive!(Int32, Int32Type);
impl_from_primitive!(Int64, Int64Type);
impl_from_primitive!(UInt8, UInt8Type);
impl_from_primitive!(UInt16, UInt16Type);
impl_from_primitive!(UInt32, UInt32Type);
impl_from_primitive!(UInt64, UInt64Type);
impl_from_primitive!(Float16, Float16Type);
impl_from_primitive!(Float32, Float32Type);
impl_from_primitive!(Float64, Float64Type);
impl_from_primitive!(Date32, Date32Type);
impl_from_primitive!(Date64, Date64Type);
impl_from_primitive!(Time32Second, Time32SecondType);
impl_from_primitive!(Time32Millisecond, Time32MillisecondType);
impl_from_primitive!(Time64Microsecond, Time64MicrosecondType);
impl_from_primitive!(Time64Nanosecond, Time64NanosecondType);
impl_from_primitive!(TimestampSecond, TimestampSecondType);
impl_from_primitive!(TimestampMillisecond, TimestampMillisecondType);
impl_from_primitive!(TimestampMicrosecond, TimestampMicrosecondType);
impl_from_primitive!(TimestampNanosecond, TimestampNanosecondType);
impl_from_primitive!(DurationSecond, DurationSecondType);
impl_from_primitive!(DurationMillisecond, DurationMillisecondType);
impl_from_primitive!(DurationMicrosecond, DurationMicrosecondType);
impl_from_primitive!(DurationNanosecond, DurationNanosecondType);


#[cfg(test)]
mod test {
    use super::AnyBuilder;
    use crate::array::Array;
    use crate::builder::ArrayBuilder;
    use crate::types::{DataType, TimeUnit};


    #[test]
    fn test_factory_covers_all_supported_types() {
        let types = [
            DataType::Boolean,
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::UInt8,
            DataType::UInt16,
            DataType::UInt32,
            DataType::UInt64,
            DataType::Float16,
            DataType::Float32,
            DataType::Float64,
            DataType::Date32,
            DataType::Date64,
            DataType::Time32(TimeUnit::Second),
            DataType::Time32(TimeUnit::Millisecond),
            DataType::Time64(TimeUnit::Microsecond),
            DataType::Time64(TimeUnit::Nanosecond),
            DataType::Timestamp(TimeUnit::Second),
            DataType::Timestamp(TimeUnit::Millisecond),
            DataType::Timestamp(TimeUnit::Microsecond),
            DataType::Timestamp(TimeUnit::Nanosecond),
            DataType::Duration(TimeUnit::Second),
            DataType::Duration(TimeUnit::Millisecond),
            DataType::Duration(TimeUnit::Microsecond),
            DataType::Duration(TimeUnit::Nanosecond),
        ];
        for ty in types.iter() {
            let mut builder = AnyBuilder::new(ty);
            assert_eq!(builder.data_type(), *ty);
            assert_eq!(builder.len(), 0);
            builder.append_null().unwrap();
            assert_eq!(builder.len(), 1);
            assert_eq!(builder.null_count(), 1);

            let array = builder.finish();
            assert_eq!(array.data_type(), *ty);
            assert_eq!(array.len(), 1);
            assert_eq!(array.null_count(), 1);
            assert_eq!(builder.len(), 0);
        }
    }

    #[test]
    #[should_panic(expected = "unsupported data type")]
    fn test_factory_rejects_invalid_time_unit() {
        AnyBuilder::new(&DataType::Time32(TimeUnit::Nanosecond));
    }
}
