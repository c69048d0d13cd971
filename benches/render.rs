use conftext::{conf, to_string_with_style, Style, Table, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn flat_table(entries: usize) -> Value {
    let mut table = Table::new();
    for i in 0..entries {
        table.insert(format!("key_{}", i), Value::from(i as i64));
    }
    Value::Table(table)
}

fn nested_table(depth: usize) -> Value {
    let mut value = conf!({ "leaf": true });
    for _ in 0..depth {
        let mut table = Table::new();
        table.insert("child".to_string(), value);
        value = Value::Table(table);
    }
    value
}

fn benchmark_render_small(c: &mut Criterion) {
    let value = conf!({
        "name": "Alice",
        "active": true,
        "tags": ["admin", "developer"],
        "limits": { "cpu": 4, "memory": 2048 }
    });
    let style = Style::new();

    c.bench_function("render_small_table", |b| {
        b.iter(|| to_string_with_style(black_box(&value), black_box(&style)))
    });
}

fn benchmark_render_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_flat_table");

    for size in [10, 100, 1000].iter() {
        let value = flat_table(*size);
        let style = Style::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string_with_style(black_box(&value), black_box(&style)))
        });
    }

    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_nested_table");

    for depth in [10, 100, 500].iter() {
        let value = nested_table(*depth);
        let style = Style::new();
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| to_string_with_style(black_box(&value), black_box(&style)))
        });
    }

    group.finish();
}

fn benchmark_styles(c: &mut Criterion) {
    let value = flat_table(100);
    let flat = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(false);
    let indented = Style::new();

    let mut group = c.benchmark_group("render_style");
    group.bench_function("flat", |b| {
        b.iter(|| to_string_with_style(black_box(&value), black_box(&flat)))
    });
    group.bench_function("indented", |b| {
        b.iter(|| to_string_with_style(black_box(&value), black_box(&indented)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_small,
    benchmark_render_flat,
    benchmark_render_nested,
    benchmark_styles
);
criterion_main!(benches);
