use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scenecheck_image::{compare_images, solid_image, PackedRgb, DEFAULT_CHANNEL_TOLERANCE};

fn bench_compare(c: &mut Criterion) {
    let reference = solid_image(640, 480, PackedRgb::new(90, 120, 200));
    let mut produced = reference.clone();
    for x in 0..640 {
        produced.put_pixel(x, 240, PackedRgb::new(0, 0, 0).to_rgba());
    }

    c.bench_function("compare_identical_640x480", |b| {
        b.iter(|| compare_images(black_box(&reference), black_box(&reference), DEFAULT_CHANNEL_TOLERANCE))
    });
    c.bench_function("compare_one_bad_row_640x480", |b| {
        b.iter(|| compare_images(black_box(&reference), black_box(&produced), DEFAULT_CHANNEL_TOLERANCE))
    });
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
