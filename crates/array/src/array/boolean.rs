use crate::array::Array;
use crate::bitmask::{Bitmask, Nullmask};
use crate::types::DataType;
use std::any::Any;
use std::fmt;


#[derive(Clone)]
pub struct BooleanArray {
    values: Bitmask,
    nulls: Option<Nullmask>
}


impl BooleanArray {
    pub fn new(values: Bitmask, nulls: Option<Nullmask>) -> Self {
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

    /// Returns the value at slot `i`. Null slots hold `false`.
    pub fn value(&self, i: usize) -> bool {
        self.values.bit(i)
    }

    pub fn values(&self) -> &Bitmask {
        &self.values
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

    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.len()).map(move |i| {
            if self.is_valid(i) {
                Some(self.values.bit(i))
            } else {
                None
            }
        })
    }
}


impl Array for BooleanArray {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn data_type(&self) -> DataType {
        DataType::Boolean
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn null_count(&self) -> usize {
        self.null_count()
    }
}


impl fmt::Debug for BooleanArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", DataType::Boolean)?;
        for i in 0..self.len() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if self.is_null(i) {
                write!(f, "null")?;
            } else {
                write!(f, "{}", self.value(i))?;
            }
        }
        write!(f, "]")
    }
}
