//! Encoder and writer throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skylog::{encode_message, LogWriter, MessageFormat, NullOutputStream, Value};

fn mixed_format() -> MessageFormat {
    let mut format = MessageFormat::new(1, "IMU").unwrap();
    format
        .add_columns(
            "TimeUS,GyrX,GyrY,GyrZ,AccX,AccY,AccZ,Temp",
            "Qffffffh",
            "s------O",
        )
        .unwrap();
    format
}

fn mixed_values() -> Vec<Value<'static>> {
    vec![
        Value::U64(123_456_789),
        Value::F32(0.01),
        Value::F32(-0.02),
        Value::F32(0.03),
        Value::F32(9.81),
        Value::F32(0.1),
        Value::F32(-0.1),
        Value::I16(2450),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let format = mixed_format();
    let values = mixed_values();
    let mut buf = [0u8; 256];

    c.bench_function("encode_mixed_record", |b| {
        b.iter(|| encode_message(black_box(&format), black_box(&values), &mut buf).unwrap())
    });
}

fn bench_write(c: &mut Criterion) {
    let format = mixed_format();
    let values = mixed_values();

    c.bench_function("write_to_null_stream", |b| {
        let mut stream = NullOutputStream::new();
        let mut writer = LogWriter::new(&mut stream).unwrap();
        b.iter(|| writer.write(black_box(&format), black_box(&values)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_write);
criterion_main!(benches);
