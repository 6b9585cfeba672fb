use basalt_array::builder::{
    ArrayBuilder, BooleanBuilder, Float64Builder, Int32Builder, Int64Builder,
    TimestampMillisecondBuilder, UInt16Builder
};
use basalt_array::{
    Array, BooleanArray, DataType, Int64Type, PrimitiveArray, TimeUnit, TrackingAllocator,
    ALIGNMENT
};
use std::sync::Arc;


#[test]
fn primitive_builder_lifecycle() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    assert_eq!(builder.len(), 0);
    assert_eq!(builder.capacity(), 0);
    assert_eq!(builder.byte_size(), 0);

    builder.append(1)?;
    builder.append_null()?;
    builder.append_option(Some(3))?;
    builder.append_option(None)?;
    builder.append_slice(&[5, 6])?;

    assert_eq!(builder.len(), 6);
    assert_eq!(builder.null_count(), 2);
    assert_eq!(builder.capacity(), 32);

    let array = builder.finish();
    assert_eq!(array.data_type(), DataType::Int64);
    assert_eq!(array.len(), 6);
    assert_eq!(array.null_count(), 2);
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(1), None, Some(3), None, Some(5), Some(6)]
    );

    assert_eq!(builder.len(), 0);
    assert_eq!(builder.capacity(), 0);
    assert_eq!(builder.byte_size(), 0);

    builder.append(10)?;
    let second = builder.finish();
    assert_eq!(second.iter().collect::<Vec<_>>(), vec![Some(10)]);

    // Reuse never touches the first frozen array
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(1), None, Some(3), None, Some(5), Some(6)]
    );

    Ok(())
}


#[test]
fn bulk_append_with_validity_marks_nulls() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    builder.append_values(&[10, 20, 30], &[true, false, true])?;

    let array = builder.finish();
    assert_eq!(array.len(), 3);
    assert_eq!(array.null_count(), 1);
    assert!(array.is_null(1));
    assert_eq!(array.value(0), 10);
    assert_eq!(array.value(2), 30);

    Ok(())
}


#[test]
fn clear_keeps_capacity_for_reuse() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    builder.append_slice(&[1, 2, 3])?;
    builder.append_null()?;
    let capacity = builder.capacity();

    builder.clear();
    assert_eq!(builder.len(), 0);
    assert_eq!(builder.null_count(), 0);
    assert_eq!(builder.capacity(), capacity);

    builder.append(9)?;
    let array = builder.finish();
    assert_eq!(array.iter().collect::<Vec<_>>(), vec![Some(9)]);

    Ok(())
}


#[test]
fn value_buffers_are_cache_line_aligned() -> anyhow::Result<()> {
    let mut builder = Float64Builder::new();
    builder.append(1.5)?;
    assert_eq!(builder.values().as_ptr() as usize % ALIGNMENT, 0);

    let array = builder.finish();
    assert_eq!(array.values().as_ptr() as usize % ALIGNMENT, 0);

    Ok(())
}


#[test]
fn tracking_allocator_sees_all_memory_returned() -> anyhow::Result<()> {
    let allocator = Arc::new(TrackingAllocator::new());

    let array = {
        let mut builder = Int32Builder::new_in(allocator.clone());
        assert_eq!(allocator.allocated_bytes(), 0);

        builder.append_slice(&(0..1000).collect::<Vec<_>>())?;
        builder.append_null()?;
        assert!(allocator.allocated_bytes() > 0);

        builder.finish()
    };

    // The builder is gone, the frozen array still holds its buffers
    assert!(allocator.allocated_bytes() > 0);
    assert_eq!(array.len(), 1001);

    let copy = array.clone();
    let before = allocator.allocated_bytes();
    drop(array);
    assert_eq!(allocator.allocated_bytes(), before);

    drop(copy);
    assert_eq!(allocator.allocated_bytes(), 0);

    Ok(())
}


#[test]
fn bulk_and_single_appends_build_identical_arrays() -> anyhow::Result<()> {
    let values = [3_u16, 0, 7, 0, 11, 13];
    let validity = [true, false, true, false, true, true];

    let mut bulk = UInt16Builder::new();
    bulk.append_values(&values, &validity)?;
    let bulk_array = bulk.finish();

    let mut single = UInt16Builder::new();
    for (value, is_valid) in values.iter().zip(validity.iter()) {
        if *is_valid {
            single.append(*value)?;
        } else {
            single.append_null()?;
        }
    }
    let single_array = single.finish();

    assert_eq!(bulk_array.values(), single_array.values());
    assert_eq!(
        bulk_array.iter().collect::<Vec<_>>(),
        single_array.iter().collect::<Vec<_>>()
    );
    assert_eq!(bulk_array.null_count(), single_array.null_count());

    Ok(())
}


#[test]
fn frozen_arrays_share_buffers_across_clones() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    builder.append_slice(&[1, 2, 3])?;

    let array = builder.finish();
    let copy = array.clone();

    assert_eq!(array.values().as_ptr(), copy.values().as_ptr());
    Ok(())
}


#[test]
fn reserve_rounds_capacity_to_powers_of_two() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();

    builder.reserve(5)?;
    assert_eq!(builder.capacity(), 32);

    builder.reserve(33)?;
    assert_eq!(builder.capacity(), 64);

    builder.reserve(200)?;
    assert_eq!(builder.capacity(), 256);

    Ok(())
}


#[test]
fn resize_shrinks_capacity_but_keeps_values() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    builder.reserve(1000)?;
    assert_eq!(builder.capacity(), 1024);

    builder.append_slice(&[1, 2, 3])?;
    builder.resize(0)?;
    assert_eq!(builder.capacity(), 32);
    assert_eq!(builder.values(), &[1, 2, 3]);

    builder.resize(100)?;
    assert!(builder.capacity() >= 100);
    assert_eq!(builder.len(), 3);

    Ok(())
}


#[test]
fn boolean_builder_lifecycle() -> anyhow::Result<()> {
    let mut builder = BooleanBuilder::new();
    builder.append(true)?;
    builder.append_null()?;
    builder.append_slice(&[false, true])?;

    let array: BooleanArray = builder.finish();
    assert_eq!(array.data_type(), DataType::Boolean);
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(true), None, Some(false), Some(true)]
    );
    assert_eq!(builder.len(), 0);

    Ok(())
}


#[test]
fn timestamp_builder_reports_parameterized_type() -> anyhow::Result<()> {
    let mut builder = TimestampMillisecondBuilder::new();
    builder.append(1704067200000)?;

    let array = builder.finish();
    assert_eq!(array.data_type(), DataType::Timestamp(TimeUnit::Millisecond));
    assert_eq!(format!("{}", array.data_type()), "timestamp[ms]");

    Ok(())
}


#[test]
fn finished_arrays_downcast_through_array_ref() -> anyhow::Result<()> {
    let mut builder = Int64Builder::new();
    builder.append(42)?;

    let array = ArrayBuilder::finish(&mut builder);
    let typed = array
        .as_any()
        .downcast_ref::<PrimitiveArray<Int64Type>>()
        .ok_or_else(|| anyhow::anyhow!("expected an int64 array"))?;

    assert_eq!(typed.value(0), 42);
    Ok(())
}
