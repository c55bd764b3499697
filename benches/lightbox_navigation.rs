// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation.
//!
//! Measures the performance of:
//! - Stepping next/previous through a large list
//! - Re-syncing an open lightbox after the list is replaced
//! - Resolving category labels for the filter bar

use community_gallery::application::query::{display_categories, LightboxController};
use community_gallery::domain::gallery::{Category, GalleryImage, ImageId};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn sample_images(count: usize) -> Vec<GalleryImage> {
    (0..count)
        .map(|i| {
            GalleryImage::new(
                i as i64,
                format!("/uploads/{i}.jpg"),
                format!("Photo {i}"),
                if i % 2 == 0 { "nature" } else { "events" },
            )
        })
        .collect()
}

/// Benchmark stepping through the list, including wrap-around.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    for size in [10_usize, 1_000, 10_000] {
        let images = sample_images(size);

        group.bench_with_input(BenchmarkId::new("next_full_cycle", size), &images, |b, images| {
            b.iter(|| {
                let mut lightbox = LightboxController::new();
                lightbox.open(ImageId(0), images);
                for _ in 0..images.len() {
                    black_box(lightbox.next(images));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("open_last", size), &images, |b, images| {
            let last = ImageId(size as i64 - 1);
            b.iter(|| {
                let mut lightbox = LightboxController::new();
                black_box(lightbox.open(last, images));
            });
        });
    }

    group.finish();
}

/// Benchmark re-syncing after a reload that keeps or drops the current image.
fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    let images = sample_images(1_000);
    let mut shrunk = images.clone();
    shrunk.retain(|image| image.id.0 % 3 != 0);

    group.bench_function("sync_kept", |b| {
        b.iter(|| {
            let mut lightbox = LightboxController::new();
            lightbox.open(ImageId(500), &images);
            black_box(lightbox.sync(&shrunk));
        });
    });

    group.bench_function("sync_removed", |b| {
        b.iter(|| {
            let mut lightbox = LightboxController::new();
            lightbox.open(ImageId(501), &images);
            black_box(lightbox.sync(&shrunk));
        });
    });

    group.finish();
}

fn bench_labels(c: &mut Criterion) {
    let categories: Vec<Category> = (0..50)
        .map(|i| Category::new(format!("cat-{i}"), format!("Category {i}")))
        .collect();

    c.bench_function("display_categories", |b| {
        b.iter(|| {
            black_box(display_categories(&categories, |key| {
                (key.len() % 2 == 0).then(|| key.to_uppercase())
            }))
        });
    });
}

criterion_group!(benches, bench_step, bench_sync, bench_labels);
criterion_main!(benches);
