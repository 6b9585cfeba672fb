use crate::error::{DecodeError, DecodeReport, ErrorPolicy, TypeMismatch};
use crate::parse::{bool_value, FromJson, Token, TokenError};
use basalt_array::builder::{AnyBuilder, ArrayBuilder, BooleanBuilder, PrimitiveBuilder};
use basalt_array::{AllocError, ArrayRef, DataType};
use serde::de::{DeserializeSeed, Deserializer, Error, SeqAccess, Visitor};
use serde_json::value::RawValue;
use std::fmt;


/// Marker for primitive types decodable from JSON tokens. Implemented
/// for every supported primitive type and sealed within this crate.
pub trait JsonScalar: FromJson {}

impl <T: FromJson> JsonScalar for T {}


/// Decodes a JSON array of scalar tokens into a builder, element by
/// element, in document order.
///
/// A structural error (input not an array, malformed JSON, trailing
/// garbage) always fails the whole call. How an element of the wrong
/// type is treated is up to the configured [`ErrorPolicy`].
pub struct ArrayDecoder {
    policy: ErrorPolicy
}


impl ArrayDecoder {
    pub fn new() -> Self {
        Self {
            policy: ErrorPolicy::Fail
        }
    }

    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self {
            policy
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn decode<T: JsonScalar>(
        &self,
        builder: &mut PrimitiveBuilder<T>,
        json: &str
    ) -> Result<DecodeReport, DecodeError>
    {
        self.run(builder, json)
    }

    pub fn decode_boolean(
        &self,
        builder: &mut BooleanBuilder,
        json: &str
    ) -> Result<DecodeReport, DecodeError>
    {
        self.run(builder, json)
    }

    pub fn decode_any(
        &self,
        builder: &mut AnyBuilder,
        json: &str
    ) -> Result<DecodeReport, DecodeError>
    {
        match builder {
            AnyBuilder::Boolean(b) => self.run(b, json),
            AnyBuilder::Int8(b) => self.run(b, json),
            AnyBuilder::Int16(b) => self.run(b, json),
            AnyBuilder::Int32(b) => self.run(b, json),
            AnyBuilder::Int64(b) => self.run(b, json),
            AnyBuilder::UInt8(b) => self.run(b, json),
            AnyBuilder::UInt16(b) => self.run(b, json),
            AnyBuilder::UInt32(b) => self.run(b, json),
            AnyBuilder::UInt64(b) => self.run(b, json),
            AnyBuilder::Float16(b) => self.run(b, json),
            AnyBuilder::Float32(b) => self.run(b, json),
            AnyBuilder::Float64(b) => self.run(b, json),
            AnyBuilder::Date32(b) => self.run(b, json),
            AnyBuilder::Date64(b) => self.run(b, json),
            AnyBuilder::Time32Second(b) => self.run(b, json),
            AnyBuilder::Time32Millisecond(b) => self.run(b, json),
            AnyBuilder::Time64Microsecond(b) => self.run(b, json),
            AnyBuilder::Time64Nanosecond(b) => self.run(b, json),
            AnyBuilder::TimestampSecond(b) => self.run(b, json),
            AnyBuilder::TimestampMillisecond(b) => self.run(b, json),
            AnyBuilder::TimestampMicrosecond(b) => self.run(b, json),
            AnyBuilder::TimestampNanosecond(b) => self.run(b, json),
            AnyBuilder::DurationSecond(b) => self.run(b, json),
            AnyBuilder::DurationMillisecond(b) => self.run(b, json),
            AnyBuilder::DurationMicrosecond(b) => self.run(b, json),
            AnyBuilder::DurationNanosecond(b) => self.run(b, json),
        }
    }

    fn run<C: JsonColumn>(&self, column: &mut C, json: &str) -> Result<DecodeReport, DecodeError> {
        let mut report = DecodeReport::default();
        let mut fatal = None;
        let mut de = serde_json::Deserializer::from_str(json);

        let seed = ColumnSeed {
            column,
            policy: self.policy,
            input: json,
            report: &mut report,
            fatal: &mut fatal
        };

        match seed.deserialize(&mut de) {
            Ok(()) => {
                de.end()?;
                Ok(report)
            },
            Err(err) => Err(fatal.take().unwrap_or_else(|| DecodeError::Json(err)))
        }
    }
}


impl Default for ArrayDecoder {
    fn default() -> Self {
        Self::new()
    }
}


/// Builds an array of the given type from a JSON array of scalars.
/// Any element of the wrong type fails the whole call.
pub fn from_json(data_type: &DataType, json: &str) -> Result<ArrayRef, DecodeError> {
    let mut builder = AnyBuilder::new(data_type);
    ArrayDecoder::new().decode_any(&mut builder, json)?;
    Ok(builder.finish())
}


pub(crate) trait JsonColumn {
    fn expected(&self) -> DataType;

    fn append_null(&mut self) -> Result<(), AllocError>;

    fn append_token(&mut self, token: &Token<'_>) -> Result<(), TokenError>;
}


impl <T: JsonScalar> JsonColumn for PrimitiveBuilder<T> {
    fn expected(&self) -> DataType {
        T::DATA_TYPE
    }

    fn append_null(&mut self) -> Result<(), AllocError> {
        PrimitiveBuilder::append_null(self)
    }

    fn append_token(&mut self, token: &Token<'_>) -> Result<(), TokenError> {
        match token {
            Token::Null => self.append_null().map_err(TokenError::from),
            token => {
                let value = T::from_token(token).ok_or(TokenError::Mismatch)?;
                self.append(value).map_err(TokenError::from)
            }
        }
    }
}


impl JsonColumn for BooleanBuilder {
    fn expected(&self) -> DataType {
        DataType::Boolean
    }

    fn append_null(&mut self) -> Result<(), AllocError> {
        BooleanBuilder::append_null(self)
    }

    fn append_token(&mut self, token: &Token<'_>) -> Result<(), TokenError> {
        match token {
            Token::Null => self.append_null().map_err(TokenError::from),
            Token::Bool(value) => self.append(*value).map_err(TokenError::from),
            Token::String(text) => {
                let value = bool_value(text).ok_or(TokenError::Mismatch)?;
                self.append(value).map_err(TokenError::from)
            },
            _ => Err(TokenError::Mismatch)
        }
    }
}


struct ColumnSeed<'a, C> {
    column: &'a mut C,
    policy: ErrorPolicy,
    input: &'a str,
    report: &'a mut DecodeReport,
    fatal: &'a mut Option<DecodeError>
}


impl <'a, C: JsonColumn> ColumnSeed<'a, C> {
    fn element(&mut self, raw: &RawValue, index: usize) -> Result<(), DecodeError> {
        let token = Token::classify(raw)?;
        match self.column.append_token(&token) {
            Ok(()) => {
                self.report.decoded += 1;
                Ok(())
            },
            Err(TokenError::Alloc(err)) => Err(err.into()),
            Err(TokenError::Mismatch) => self.mismatch(raw, index)
        }
    }

    fn mismatch(&mut self, raw: &RawValue, index: usize) -> Result<(), DecodeError> {
        let mismatch = TypeMismatch {
            expected: self.column.expected(),
            token: raw.get().to_string(),
            offset: self.offset_of(raw),
            index
        };
        match self.policy {
            ErrorPolicy::Fail => Err(mismatch.into()),
            ErrorPolicy::NullifySkip => {
                tracing::debug!(
                    index = mismatch.index,
                    offset = mismatch.offset,
                    expected = %mismatch.expected,
                    token = %mismatch.token,
                    "nullifying a mismatched element"
                );
                self.column.append_null()?;
                self.report.skipped.push(mismatch);
                Ok(())
            }
        }
    }

    fn offset_of(&self, raw: &RawValue) -> usize {
        (raw.get().as_ptr() as usize).saturating_sub(self.input.as_ptr() as usize)
    }
}


impl <'de, 'a, C: JsonColumn> DeserializeSeed<'de> for ColumnSeed<'a, C> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_seq(self)
    }
}


impl <'de, 'a, C: JsonColumn> Visitor<'de> for ColumnSeed<'a, C> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an array of {} values", self.column.expected())
    }

    fn visit_seq<A: SeqAccess<'de>>(mut self, mut seq: A) -> Result<(), A::Error> {
        let mut index = 0;
        while let Some(raw) = seq.next_element::<&RawValue>()? {
            if let Err(err) = self.element(raw, index) {
                *self.fatal = Some(err);
                return Err(A::Error::custom("decoding aborted"));
            }
            index += 1;
        }
        Ok(())
    }
}
