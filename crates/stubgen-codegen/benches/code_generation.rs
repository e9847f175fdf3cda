//! Performance benchmarks for stubgen-codegen.
//!
//! Measures binding generation across package and method counts.
//!
//! Run with: cargo bench --package stubgen-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stubgen_codegen::{BindingsGenerator, normalise_package_names};
use stubgen_core::{Bindings, BoundMethod, Parameter, TypeInfo};

/// Creates a method with a mix of primitive and model parameters.
fn create_method(index: usize) -> BoundMethod {
    BoundMethod::new(format!("Method{index}"))
        .with_doc(format!("Method{index} does something useful"))
        .with_input(Parameter::new("id", TypeInfo::new("number")))
        .with_input(Parameter::new(
            "payload",
            TypeInfo::structure("models.Payload", format!("github.com/acme/pkg{}/models", index % 5)),
        ))
        .with_output(Parameter::new("", TypeInfo::new("string")))
        .with_output(Parameter::new("", TypeInfo::new("error")))
}

/// Spreads `methods` across `packages` packages with four services each.
fn create_bindings(packages: usize, methods: usize) -> Bindings {
    let mut bindings = Bindings::new();
    for i in 0..methods {
        let package = format!("github.com/acme/service{}", i % packages);
        let service = format!("Service{}", i % 4);
        bindings.add_method(package, service, create_method(i));
    }
    bindings
}

fn bench_generate(c: &mut Criterion) {
    let generator = BindingsGenerator::new().unwrap();
    let mut group = c.benchmark_group("generate");

    for &methods in &[1usize, 10, 100, 1000] {
        let bindings = create_bindings(4, methods);
        group.throughput(Throughput::Elements(methods as u64));
        group.bench_with_input(BenchmarkId::from_parameter(methods), &bindings, |b, bindings| {
            b.iter(|| generator.generate(black_box(bindings)).unwrap());
        });
    }

    group.finish();
}

fn bench_normalise(c: &mut Criterion) {
    let identifiers: Vec<String> = (0..500)
        .map(|i| format!("github.com/org{i}/models"))
        .collect();

    c.bench_function("normalise_500_colliding", |b| {
        b.iter(|| normalise_package_names(black_box(&identifiers)));
    });
}

criterion_group!(benches, bench_generate, bench_normalise);
criterion_main!(benches);
