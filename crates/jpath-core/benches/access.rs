use criterion::{criterion_group, criterion_main, Criterion};
use jpath_core::{get, path, remove, set, split_path, PathSyntax};
use serde_json::{json, Value};
use std::hint::black_box;

fn wide_tree() -> Value {
    let mut root = Value::Null;
    for i in 0..100 {
        set(&mut root, &path!["items", i, "name"], format!("item-{i}"));
        set(&mut root, &path!["items", i, "tags", 2], json!(["a", "b"]));
    }
    root
}

fn bench_parse(c: &mut Criterion) {
    let dotted = PathSyntax::new('.').unwrap();
    c.bench_function("split_short", |b| {
        b.iter(|| split_path(black_box("a/b[1]/c")))
    });
    c.bench_function("split_long", |b| {
        b.iter(|| split_path(black_box("name3[1]/name31[2]/name31/x/y/z[-1][0]/time [ms]")))
    });
    c.bench_function("split_dotted", |b| {
        b.iter(|| dotted.split(black_box("name3[1].name32.name31[1]")))
    });
}

fn bench_access(c: &mut Criterion) {
    let root = wide_tree();
    let parsed = split_path("items[57]/tags[2][1]");

    c.bench_function("get_prepared_path", |b| {
        b.iter(|| get(black_box(&root), &parsed))
    });
    c.bench_function("get_string_path", |b| {
        b.iter(|| get(black_box(&root), black_box("items[57]/tags[2][1]")))
    });
    c.bench_function("set_fresh_tree", |b| {
        b.iter(|| {
            let mut fresh = Value::Null;
            set(&mut fresh, black_box("a/b[3]/c"), 1);
            fresh
        })
    });
    c.bench_function("set_then_remove", |b| {
        let mut tree = root.clone();
        b.iter(|| {
            set(&mut tree, "items[-1]/extra", true);
            remove(&mut tree, "items[-1]/extra")
        })
    });
}

criterion_group!(benches, bench_parse, bench_access);
criterion_main!(benches);
