//! Benchmarks for index building and lookups
//!
//! Run with: cargo bench --package data-loader
//!
//! Uses a synthetic dataset so the numbers don't depend on a local copy
//! of the full IMDB dump.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{build_indexes, FilmographyIndex, FilmographyRow};

fn synthetic_rows(movies: usize, cast_per_movie: usize) -> Vec<FilmographyRow> {
    let mut rows = Vec::with_capacity(movies * cast_per_movie);
    for m in 0..movies {
        for c in 0..cast_per_movie {
            rows.push(FilmographyRow {
                year: 1950 + (m % 70) as i32,
                title: format!("Movie {}", m),
                first_name: format!("First{}", (m + c) % 5000),
                last_name: format!("Last{}", c),
                gender: if c % 2 == 0 { "male" } else { "female" }.to_string(),
                character: format!("Character {}", c),
            });
        }
    }
    rows
}

fn bench_build_indexes(c: &mut Criterion) {
    let rows = synthetic_rows(2_000, 10);

    c.bench_function("build_indexes_20k_rows", |b| {
        b.iter(|| {
            let indexes = build_indexes(black_box(rows.clone()));
            black_box(indexes)
        })
    });
}

fn bench_lookups(c: &mut Criterion) {
    let index = FilmographyIndex::build(synthetic_rows(2_000, 10));

    c.bench_function("get_movie", |b| {
        b.iter(|| black_box(index.get_movie(black_box("MOVIE 1234"))))
    });

    c.bench_function("get_appearances", |b| {
        b.iter(|| black_box(index.get_appearances(black_box("first42 last3"))))
    });
}

criterion_group!(benches, bench_build_indexes, bench_lookups);
criterion_main!(benches);
