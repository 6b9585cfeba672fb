use basalt_array::builder::Int64Builder;
use criterion::{criterion_group, criterion_main, Criterion};


fn append_setup(c: &mut Criterion) {
    let values: Vec<i64> = (0..100_000).collect();
    let validity: Vec<bool> = (0..100_000).map(|i| i % 10 != 0).collect();

    c.bench_function("append 100k int64: single", |bench| {
        bench.iter(|| {
            let mut builder = Int64Builder::new();
            for value in values.iter() {
                builder.append(*value).unwrap();
            }
            builder.finish()
        })
    });

    c.bench_function("append 100k int64: bulk", |bench| {
        bench.iter(|| {
            let mut builder = Int64Builder::new();
            builder.append_slice(&values).unwrap();
            builder.finish()
        })
    });

    c.bench_function("append 100k nullable int64: single", |bench| {
        bench.iter(|| {
            let mut builder = Int64Builder::new();
            for (value, is_valid) in values.iter().zip(validity.iter()) {
                if *is_valid {
                    builder.append(*value).unwrap();
                } else {
                    builder.append_null().unwrap();
                }
            }
            builder.finish()
        })
    });

    c.bench_function("append 100k nullable int64: bulk", |bench| {
        bench.iter(|| {
            let mut builder = Int64Builder::new();
            builder.append_values(&values, &validity).unwrap();
            builder.finish()
        })
    });
}


criterion_group!(appends, append_setup);
criterion_main!(appends);
