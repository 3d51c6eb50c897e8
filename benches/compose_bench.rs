use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, Rgba, RgbaImage};

use brandmark::compose::{compose_on_background, recenter};

// An off-center blob, the shape recentering exists to fix.
fn off_center_bitmap(size: u32) -> RgbaImage {
    let mut bitmap = RgbaImage::new(size, size);
    for y in 40..size / 2 {
        for x in 20..size / 3 {
            bitmap.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    bitmap
}

fn bench_recenter(c: &mut Criterion) {
    let bitmap = off_center_bitmap(664);
    c.bench_function("recenter_664", |b| {
        b.iter(|| recenter(&bitmap))
    });
}

fn bench_compose(c: &mut Criterion) {
    let centered = recenter(&off_center_bitmap(664));
    c.bench_function("compose_on_background_1024", |b| {
        b.iter(|| compose_on_background(&centered, 1024, 180, Rgb([0, 0, 0])).unwrap())
    });
}

criterion_group!(benches, bench_recenter, bench_compose);
criterion_main!(benches);
