use adipo_case::{Frequency, Gender, RawCase, Transport, YesNo};
use adipo_encoder::{encode, FeatureSchema};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_case() -> RawCase {
    RawCase {
        gender: Gender::Female,
        age: 21.0,
        height: 162.0,
        weight: 64.0,
        family_history: YesNo::Yes,
        favc: YesNo::No,
        fcvc: 2.0,
        ncp: 3.0,
        caec: Frequency::Sometimes,
        smoke: YesNo::No,
        ch2o: 2.0,
        scc: YesNo::No,
        faf: 0.0,
        tue: 1.0,
        calc: Frequency::No,
        mtrans: Transport::PublicTransportation,
    }
}

fn bench_encode(c: &mut Criterion) {
    let schema = FeatureSchema::canonical();
    let case = sample_case();
    c.bench_function("encode_canonical_schema", |b| {
        b.iter(|| encode(black_box(&case), black_box(&schema)))
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
