//! Micro-benchmarks for the five signup field rules.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lodgen_validator::foundation::Validate;
use lodgen_validator::validators::{aadhaar, email, full_name, password, phone};

fn bench_field_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_rules");

    let name_rule = full_name();
    group.bench_function("full_name", |b| {
        b.iter(|| name_rule.validate(black_box("  John  Smith  ")));
    });

    let phone_rule = phone();
    group.bench_function("phone", |b| {
        b.iter(|| phone_rule.validate(black_box("call 1234567890 now")));
    });

    let aadhaar_rule = aadhaar();
    group.bench_function("aadhaar", |b| {
        b.iter(|| aadhaar_rule.validate(black_box("123456789012")));
    });

    let email_rule = email();
    group.bench_function("email", |b| {
        b.iter(|| email_rule.validate(black_box("first.last+tag@example.com")));
    });

    let password_rule = password();
    group.bench_function("password", |b| {
        b.iter(|| password_rule.validate(black_box("Tr0ub4dor&3x")));
    });

    group.finish();
}

criterion_group!(benches, bench_field_rules);
criterion_main!(benches);
