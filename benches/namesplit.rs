use criterion::{black_box, criterion_group, criterion_main, Criterion};
use namesplit::Engine;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

fn namecase_unambiguous(c: &mut Criterion) {
    let engine = Engine::new();
    c.bench_function("namecase last, first", |b| {
        b.iter(|| black_box(engine.namecase("MCADAM, SHAUN")))
    });
}

fn namecase_natural(c: &mut Criterion) {
    let engine = Engine::new();
    c.bench_function("namecase first last", |b| {
        b.iter(|| black_box(engine.namecase("ludwig mies van der rohe")))
    });
}

fn namecase_with_exceptions(c: &mut Criterion) {
    let mut engine = Engine::new();
    for name in ["MacDuff", "DeVito, Danny", "fAm d'Fam-Fam, Giv"] {
        engine.namecase_exception(name);
    }
    c.bench_function("namecase with exceptions", |b| {
        b.iter(|| black_box(engine.namecase("jose romero y galdamez")))
    });
}

criterion_group!(
    case,
    namecase_unambiguous,
    namecase_natural,
    namecase_with_exceptions
);

fn namesplit_simple(c: &mut Criterion) {
    let engine = Engine::new();
    c.bench_function("namesplit no particle", |b| {
        b.iter(|| black_box(engine.namesplit("Jane Emily Doe")))
    });
}

fn namesplit_particles(c: &mut Criterion) {
    let engine = Engine::new();
    c.bench_function("namesplit particles", |b| {
        b.iter(|| black_box(engine.namesplit("Hans von und zu Liechtenstein")))
    });
}

fn namesplit_exception(c: &mut Criterion) {
    let mut engine = Engine::new();
    engine.namesplit_exception("Assis de Queiroz, Vinicius");
    c.bench_function("namesplit exception", |b| {
        b.iter(|| black_box(engine.namesplit("Vinicius Assis de Queiroz")))
    });
}

criterion_group!(split, namesplit_simple, namesplit_particles, namesplit_exception);

fn many(c: &mut Criterion) {
    let f = File::open("tests/namesplit.txt").unwrap();
    let reader = BufReader::new(f);
    let names: Vec<String> = reader
        .lines()
        .map(|l| l.unwrap())
        .filter(|l| !l.starts_with('#'))
        .filter_map(|l| l.split('|').next().map(str::to_string))
        .collect();

    let engine = Engine::new();
    c.bench_function(&format!("split and case {} names", names.len()), |b| {
        b.iter(|| {
            for name in names.iter() {
                black_box(engine.namecase(&engine.namesplit(name)));
            }
        })
    });
}

criterion_group!(realistic, many);

criterion_main!(realistic, case, split);
