use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlchain::{Sql, args};

/// A chain with `n` WHERE fragments, each binding one scalar and one 3-element list:
/// SELECT * FROM t WHERE (col0 = @0 AND other0 IN (@1,@2,@3)) AND (...)
fn build_chain(n: usize) -> Sql {
    let mut q = Sql::builder();
    q.select("*").from("t");
    for i in 0..n {
        let i = i as i64;
        q.where_args(
            &format!("col{i} = @0 AND other{i} IN (@ids)"),
            args![i; ids = vec![i, i + 1, i + 2]],
        );
    }
    q
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqlchain/flatten");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || build_chain(n),
                |q| black_box(q.into_built().unwrap()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let q = build_chain(50);
    q.build().unwrap();
    c.bench_function("sqlchain/cached_sql", |b| {
        b.iter(|| black_box(q.sql().unwrap().len()))
    });
}

fn bench_render_dollar(c: &mut Criterion) {
    let q = build_chain(50);
    c.bench_function("sqlchain/render_dollar", |b| {
        b.iter(|| black_box(q.render_as(sqlchain::PlaceholderStyle::Dollar).unwrap()))
    });
}

criterion_group!(benches, bench_flatten, bench_cached, bench_render_dollar);
criterion_main!(benches);
