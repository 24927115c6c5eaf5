use criterion::{criterion_group, criterion_main, Criterion};
use pngsteg_core::media::image::{encode, LsbCodec, Scheme};
use pngsteg_core::RgbaGrid;
use std::io::Write;

pub fn image_encoding(c: &mut Criterion) {
    let secret_message = b"Hello World!";

    c.bench_function("Image Encoding", |b| {
        let mut plain_grid = RgbaGrid::new(64, 64, [0xc0, 0x80, 0x40, 0xff]);

        b.iter(|| {
            LsbCodec::encoder(&mut plain_grid, Scheme::Nibble)
                .expect("Carrier has too few channels")
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });

    c.bench_function("Image Encoding Into A Copy", |b| {
        let plain_grid = RgbaGrid::new(64, 64, [0xc0, 0x80, 0x40, 0xff]);

        b.iter(|| encode(&plain_grid, &secret_message[..], Scheme::PaletteNibble))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
