use basalt_array::builder::{
    BooleanBuilder, DurationSecondBuilder, Float64Builder, Int64Builder, UInt32Builder
};
use basalt_array::{
    Array, BooleanArray, DataType, Date32Type, DurationSecondType, PrimitiveArray, TimeUnit,
    TimestampMillisecondType
};
use basalt_json::{from_json, ArrayDecoder, DecodeError, ErrorPolicy};


#[test]
fn decode_int64_array() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    let report = ArrayDecoder::new().decode(&mut builder, "[1, -2, null, \"42\"]")?;
    assert_eq!(report.decoded, 4);
    assert!(report.skipped.is_empty());

    let array = builder.finish();
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(1), Some(-2), None, Some(42)]
    );
    Ok(())
}


#[test]
fn decode_floats_with_exponents() -> anyhow::Result<()> {
    let mut builder = Float64Builder::new();
    ArrayDecoder::new().decode(&mut builder, "[1.5, 1e3, \"2.5e-1\", null]")?;

    let array = builder.finish();
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(1.5), Some(1000.0), Some(0.25), None]
    );
    Ok(())
}


#[test]
fn unsigned_types_reject_negative_values() {
    let mut builder = UInt32Builder::new();
    let err = ArrayDecoder::new()
        .decode(&mut builder, "[7, -1]")
        .expect_err("a negative value must not decode into uint32");

    match err {
        DecodeError::TypeMismatch(mismatch) => {
            assert_eq!(mismatch.expected, DataType::UInt32);
            assert_eq!(mismatch.token, "-1");
            assert_eq!(mismatch.index, 1);
            assert_eq!(mismatch.offset, 4);
        },
        other => panic!("expected a type mismatch, got {}", other)
    }
}


#[test]
fn fail_policy_keeps_previously_decoded_elements() {
    let mut builder = Int64Builder::new();
    let result = ArrayDecoder::new().decode(&mut builder, "[1, 2, true, 4]");
    assert!(result.is_err());

    // The abort happens mid-decode, elements before the bad one stay
    assert_eq!(builder.len(), 2);
    assert_eq!(builder.values(), &[1, 2]);
}


#[test]
fn nullify_skip_policy_continues_past_mismatches() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    let decoder = ArrayDecoder::with_policy(ErrorPolicy::NullifySkip);
    let report = decoder.decode(&mut builder, "[1, true, 3, \"oops\", 5]")?;

    assert_eq!(report.decoded, 3);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.len(), 5);
    assert_eq!(report.skipped[0].token, "true");
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(report.skipped[1].token, "\"oops\"");
    assert_eq!(report.skipped[1].index, 3);

    let array = builder.finish();
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(1), None, Some(3), None, Some(5)]
    );
    Ok(())
}


#[test]
fn malformed_envelope_is_fatal() {
    // Even under NullifySkip, structural problems fail the whole call
    let decoder = ArrayDecoder::with_policy(ErrorPolicy::NullifySkip);

    for input in ["{\"a\": 1}", "42", "[1, 2", "[1] trailing", ""] {
        let mut builder = Int64Builder::new();
        let err = decoder
            .decode(&mut builder, input)
            .expect_err("structural errors must fail the whole call");
        assert!(matches!(err, DecodeError::Json(_)), "input: {:?}", input);
    }
}


#[test]
fn composite_elements_are_type_mismatches() {
    let mut builder = Int64Builder::new();
    let err = ArrayDecoder::new()
        .decode(&mut builder, "[{\"a\": 1}]")
        .expect_err("an object element must not decode into int64");

    match err {
        DecodeError::TypeMismatch(mismatch) => {
            assert_eq!(mismatch.token, "{\"a\": 1}");
            assert_eq!(mismatch.index, 0);
        },
        other => panic!("expected a type mismatch, got {}", other)
    }
}


#[test]
fn decode_booleans_and_their_string_forms() -> anyhow::Result<()> {
    let mut builder = BooleanBuilder::new();
    let report = ArrayDecoder::new()
        .decode_boolean(&mut builder, "[true, \"True\", \"0\", null, false]")?;
    assert_eq!(report.decoded, 5);

    let array = builder.finish();
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(true), Some(true), Some(false), None, Some(false)]
    );

    let err = ArrayDecoder::new()
        .decode_boolean(&mut builder, "[1]")
        .expect_err("a number must not decode into a boolean");
    assert!(matches!(err, DecodeError::TypeMismatch(_)));
    Ok(())
}


#[test]
fn decode_durations_with_suffix_grammar() -> anyhow::Result<()> {
    let mut builder = DurationSecondBuilder::new();
    ArrayDecoder::new().decode(
        &mut builder,
        "[\"2h\", \"90m\", \"1.5s\", \"9223372036854775807s\", 60, null]"
    )?;

    let array = builder.finish();
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![
            Some(7200),
            Some(5400),
            Some(1),
            Some(i64::MAX),
            Some(60),
            None
        ]
    );
    Ok(())
}


#[test]
fn from_json_builds_typed_arrays() -> anyhow::Result<()> {
    let array = from_json(&DataType::Date32, "[\"2024-01-01\", null, 0]")?;
    assert_eq!(array.data_type(), DataType::Date32);

    let dates = array
        .as_any()
        .downcast_ref::<PrimitiveArray<Date32Type>>()
        .ok_or_else(|| anyhow::anyhow!("expected a date32 array"))?;
    assert_eq!(
        dates.iter().collect::<Vec<_>>(),
        vec![Some(19723), None, Some(0)]
    );

    let array = from_json(
        &DataType::Timestamp(TimeUnit::Millisecond),
        "[\"2024-01-01T00:00:00Z\", \"2024-01-01 00:00:00.5\", 1500]"
    )?;
    let timestamps = array
        .as_any()
        .downcast_ref::<PrimitiveArray<TimestampMillisecondType>>()
        .ok_or_else(|| anyhow::anyhow!("expected a timestamp array"))?;
    assert_eq!(
        timestamps.values(),
        &[1_704_067_200_000, 1_704_067_200_500, 1500]
    );

    let array = from_json(&DataType::Boolean, "[true, null]")?;
    let booleans = array
        .as_any()
        .downcast_ref::<BooleanArray>()
        .ok_or_else(|| anyhow::anyhow!("expected a boolean array"))?;
    assert!(booleans.value(0));
    assert!(booleans.is_null(1));

    Ok(())
}


#[test]
fn from_json_fails_on_first_mismatch() {
    let err = from_json(&DataType::Duration(TimeUnit::Second), "[\"2h\", \"2d\"]")
        .expect_err("an unknown duration unit must fail the decode");

    match err {
        DecodeError::TypeMismatch(mismatch) => {
            assert_eq!(mismatch.expected, DataType::Duration(TimeUnit::Second));
            assert_eq!(mismatch.token, "\"2d\"");
            assert_eq!(mismatch.index, 1);
        },
        other => panic!("expected a type mismatch, got {}", other)
    }
}


#[test]
fn decode_empty_array() -> anyhow::Result<()> {
    let mut builder = DurationSecondBuilder::new();
    let report = ArrayDecoder::new().decode(&mut builder, "[]")?;
    assert_eq!(report.decoded, 0);
    assert!(report.is_empty());

    let array: PrimitiveArray<DurationSecondType> = builder.finish();
    assert!(array.is_empty());
    Ok(())
}


#[test]
fn integers_reject_fractional_numbers() {
    let mut builder = Int64Builder::new();
    let err = ArrayDecoder::new()
        .decode(&mut builder, "[1.5]")
        .expect_err("a fractional number must not decode into int64");
    assert!(matches!(err, DecodeError::TypeMismatch(_)));
}
