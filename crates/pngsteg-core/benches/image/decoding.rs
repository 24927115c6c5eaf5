use criterion::{criterion_group, criterion_main, Criterion};
use pngsteg_core::media::image::{LsbCodec, Scheme};
use pngsteg_core::RgbaGrid;
use std::io::Read;

pub fn image_decoding(c: &mut Criterion) {
    let grid = RgbaGrid::from_pixels(
        64,
        64,
        (0..64 * 64u32).map(|i| i.to_be_bytes()).collect(),
    )
    .expect("Carrier grid is not rectangular.");

    c.bench_function("Image Decoding", |b| {
        let mut buf = [0; 13];

        b.iter(|| {
            LsbCodec::decoder(&grid, Scheme::Nibble)
                .expect("Carrier has too few channels")
                .read_exact(&mut buf)
                .expect("Failed to read 13 bytes");
        })
    });

    c.bench_function("Image Decoding Every Pixel", |b| {
        b.iter(|| pngsteg_core::media::image::decode(&grid, Scheme::Spread))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
