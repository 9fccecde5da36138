use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use scriptlet::{parse, run, tokenize, Value};

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "print 1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    source.push(';');
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("scan", |b| b.iter(|| tokenize(&source).unwrap()));
    let tokens = tokenize(&source).unwrap();
    group.bench_function("parse", |b| b.iter(|| parse(&tokens).unwrap()));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "print 1".to_string();
    for _i in 0..200 {
        source.push_str(" == 2 < 3 + 5 * 5");
    }
    source.push(';');
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| {
        b.iter(|| parse(&tokenize(&source).unwrap()).unwrap())
    });
}

fn counting_loop(c: &mut Criterion) {
    let source =
        "var i = 0; var sum = 0; while (i < 10000) { i = i + 1; sum = sum + i % 7; } print sum;";
    c.bench_function("counting-loop", |b| {
        b.iter(|| {
            let mut out: Vec<Value> = Vec::new();
            run(source, &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, long_expr, stress_precedence, counting_loop);
criterion_main!(benches);
