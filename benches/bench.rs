use advent::util::{manhattan_distance, neighbors4, neighbors8, read_grid};
use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;

/// A size x size grid of alternating wall/floor characters.
fn synthetic_grid(size: usize) -> String {
    let mut text = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            text.push(if (x + y) % 2 == 0 { '#' } else { '.' });
        }
        let _ = writeln!(text);
    }
    text
}

fn bench_read_grid(c: &mut Criterion) {
    let text = synthetic_grid(512);

    c.bench_function("read_grid_512", |b| {
        b.iter(|| read_grid(black_box(&text)).unwrap());
    });
}

fn bench_neighbors(c: &mut Criterion) {
    c.bench_function("neighbors4_bounded_sweep", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for y in 0..128 {
                for x in 0..128 {
                    total += neighbors4(black_box(x), black_box(y), Some((128, 128))).len();
                }
            }
            total
        });
    });

    c.bench_function("neighbors8_unbounded_sweep", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for y in 0..128 {
                for x in 0..128 {
                    total += neighbors8(black_box(x), black_box(y), None).len();
                }
            }
            total
        });
    });
}

fn bench_manhattan(c: &mut Criterion) {
    let points: Vec<(i64, i64)> = (0..1024).map(|i| (i * 7 % 311 - 150, i * 13 % 257 - 128)).collect();

    c.bench_function("manhattan_distance_pairs", |b| {
        b.iter(|| {
            points
                .windows(2)
                .map(|pair| manhattan_distance(black_box(pair[0]), black_box(pair[1])))
                .sum::<u64>()
        });
    });
}

fn bench_grid_walk(c: &mut Criterion) {
    let grid = read_grid(&synthetic_grid(256)).unwrap();

    c.bench_function("grid_neighbors4_full_scan", |b| {
        b.iter(|| {
            let mut floors = 0usize;
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    floors += grid
                        .neighbors4(x, y)
                        .into_iter()
                        .filter(|&(nx, ny)| grid.get(nx, ny) == Some('.'))
                        .count();
                }
            }
            floors
        });
    });
}

criterion_group!(
    benches,
    bench_read_grid,
    bench_neighbors,
    bench_manhattan,
    bench_grid_walk
);
criterion_main!(benches);
