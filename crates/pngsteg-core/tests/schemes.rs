use pngsteg_core::media::image::{collapse, decode, encode, expand, Scheme};
use pngsteg_core::{PngStegError, RgbaGrid};

const ALL_SCHEMES: [Scheme; 4] = [
    Scheme::Nibble,
    Scheme::PaletteNibble,
    Scheme::Spread,
    Scheme::TruncatedNibble,
];

fn noisy_grid(width: usize, height: usize) -> RgbaGrid {
    let mut seed: u32 = 0x2545_f491;
    let pixels = (0..width * height)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed.to_le_bytes()
        })
        .collect();

    RgbaGrid::from_pixels(width, height, pixels).expect("Failed to build grid")
}

#[test]
fn should_encode_the_reference_example() {
    let grid = RgbaGrid::from_channel_rows(&[
        vec![1, 2, 3, 0, 4, 5, 6, 0],
        vec![1, 2, 3, 0, 7, 8, 9, 0],
    ])
    .unwrap();

    let encoded = encode(&grid, b"abc", Scheme::Nibble).unwrap();
    assert_eq!(
        encoded.to_channel_rows(),
        vec![vec![6, 1, 3, 0, 6, 2, 6, 0], vec![6, 3, 3, 0, 7, 8, 9, 0]]
    );

    let decoded = decode(&encoded, Scheme::Nibble).unwrap();
    assert_eq!(decoded, vec![b'a', b'b', b'c', 0x78]);
}

#[test]
fn should_round_trip_ascii_with_every_scheme() {
    let grid = noisy_grid(13, 7);
    let message = b"The quick brown fox jumps over the lazy dog.";

    for scheme in ALL_SCHEMES {
        let encoded = encode(&grid, message, scheme).unwrap();
        let decoded = decode(&encoded, scheme).unwrap();

        assert_eq!(decoded.len(), 13 * 7, "{scheme:?} should read every pixel");
        assert_eq!(&decoded[..message.len()], message, "{scheme:?} lost the message");
    }
}

#[test]
fn should_round_trip_arbitrary_bytes_with_spread_scheme() {
    let grid = noisy_grid(32, 9);
    let mut message: Vec<u8> = (0..=u8::MAX).rev().collect();
    message.extend([0x00, 0xff, 0x00, 0xff]);

    let encoded = encode(&grid, &message, Scheme::Spread).unwrap();
    let decoded = decode(&encoded, Scheme::Spread).unwrap();

    assert_eq!(&decoded[..message.len()], &message[..]);
}

#[test]
fn should_leave_pixels_after_the_message_untouched() {
    let grid = noisy_grid(6, 6);

    for scheme in ALL_SCHEMES {
        let encoded = encode(&grid, b"hey", scheme).unwrap();

        assert_eq!(&encoded.pixels()[3..], &grid.pixels()[3..], "{scheme:?}");
        assert_ne!(&encoded.pixels()[..3], &grid.pixels()[..3], "{scheme:?}");
    }
}

#[test]
fn should_guard_the_capacity_for_every_scheme() {
    let grid = noisy_grid(3, 3);
    let message = [b'x'; 10];

    for scheme in ALL_SCHEMES {
        match encode(&grid, &message, scheme) {
            Err(PngStegError::CapacityExceeded {
                required_pixels: 10,
                available_pixels: 9,
            }) => {}
            r => panic!("{scheme:?} gave unexpected result {r:?}"),
        }
    }
    assert_eq!(grid, noisy_grid(3, 3));
}

#[test]
fn should_be_deterministic() {
    let grid = noisy_grid(8, 8);

    for scheme in ALL_SCHEMES {
        assert_eq!(
            encode(&grid, b"same in, same out", scheme).unwrap(),
            encode(&grid, b"same in, same out", scheme).unwrap()
        );
    }
}

#[test]
fn should_survive_the_palette_round_trip_after_palette_scheme() {
    let grid = RgbaGrid::new(10, 10, [0x80, 0x40, 0x20, 0xff]);
    let encoded = encode(&grid, b"indexed", Scheme::PaletteNibble).unwrap();

    let indexed = collapse(&encoded);
    assert!(indexed.palette().len() <= 8);
    assert_eq!(expand(&indexed), encoded);
    assert_eq!(&decode(&expand(&indexed), Scheme::PaletteNibble).unwrap()[..7], b"indexed");
}
