use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_profile_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_parsing");

    let minimal = r#"
[profile]
name = "Minimal"
"#;

    let full = r#"
[profile]
name = "Asha"
car_owner = true
car_km = 20.0
bike_owner = true
bike_km = 10.0
electricity_bill = 2000.0
diet = "non-veg"
ac_daily = true
plastic_items = 3
"#;

    group.bench_function("minimal", |b| {
        b.iter(|| {
            ecokarma_core::profile::parse_profile_str(
                black_box(minimal),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("full", |b| {
        b.iter(|| {
            ecokarma_core::profile::parse_profile_str(
                black_box(full),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_validation");

    let input = ecokarma_core::profile::parse_profile_str(
        r#"
[profile]
name = "Asha"
car_km = 300.0
bike_km = 15.0
"#,
        "bench.toml".as_ref(),
    )
    .unwrap();

    group.bench_function("warnings", |b| {
        b.iter(|| ecokarma_core::profile::validate_profile(black_box(&input)))
    });

    group.finish();
}

criterion_group!(benches, bench_profile_parsing, bench_validation);
criterion_main!(benches);
