use crate::array::Array;
use crate::bitmask::Nullmask;
use crate::buffer::ScalarBuffer;
use crate::types::{DataType, PrimitiveType};
use std::any::Any;
use std::fmt;


pub struct PrimitiveArray<T: PrimitiveType> {
    values: ScalarBuffer<T::Native>,
    nulls: Option<Nullmask>
}


impl <T: PrimitiveType> PrimitiveArray<T> {
    pub fn new(values: ScalarBuffer<T::Native>, nulls: Option<Nullmask>) -> Self {
        if let Some(nulls) = nulls.as_ref() {
            assert_eq!(
                nulls.len(),
                values.len(),
                "validity bitmap length doesn't match the number of values"
            );
        }
        Self {
            values,
            nulls
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.nulls.as_ref().map(Nullmask::null_count).unwrap_or(0)
    }

    /// Returns the value at slot `i`. Null slots hold a zero value.
    pub fn value(&self, i: usize) -> T::Native {
        self.values[i]
    }

    pub fn values(&self) -> &[T::Native] {
        self.values.as_slice()
    }

    pub fn is_valid(&self, i: usize) -> bool {
        self.nulls.as_ref().map(|nulls| nulls.is_valid(i)).unwrap_or(true)
    }

    pub fn is_null(&self, i: usize) -> bool {
        !self.is_valid(i)
    }

    pub fn nulls(&self) -> Option<&Nullmask> {
        self.nulls.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<T::Native>> + '_ {
        (0..self.len()).map(move |i| {
            if self.is_valid(i) {
                Some(self.values[i])
            } else {
                None
            }
        })
    }
}


impl <T: PrimitiveType> Array for PrimitiveArray<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn null_count(&self) -> usize {
        self.null_count()
    }
}


impl <T: PrimitiveType> Clone for PrimitiveArray<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            nulls: self.nulls.clone()
        }
    }
}


impl <T: PrimitiveType> fmt::Debug for PrimitiveArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", T::DATA_TYPE)?;
        for i in 0..self.len() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if self.is_null(i) {
                write!(f, "null")?;
            } else {
                write!(f, "{:?}", self.value(i))?;
            }
        }
        write!(f, "]")
    }
}
