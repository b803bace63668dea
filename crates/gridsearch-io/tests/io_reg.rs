//! Image I/O regression test
//!
//! Reads the same image stored as PNG and as PBM, and writes both formats
//! back through a temporary directory.
//!
//! Run with:
//! ```
//! cargo test -p gridsearch-io --test io_reg
//! ```

use gridsearch_core::{PixelImage, Rgb};
use gridsearch_io::{
    ImageFormat, IoError, detect_format_from_bytes, read_image, read_image_mem, write_image,
    write_image_mem,
};
use gridsearch_test::{RegParams, load_test_image, test_data_path};

const BLOCKS: [&str; 12] = [
    "####................",
    "####..........#.....",
    "..............#.....",
    ".......#.......#....",
    "......###...........",
    ".......#............",
    "....................",
    "##..........#######.",
    ".#..........#.....#.",
    "..#.........#.....#.",
    "...#........#######.",
    "...................#",
];

#[test]
fn io_reg() {
    let mut rp = RegParams::new("io");
    let expected = PixelImage::from_ascii(&BLOCKS).expect("ascii image");

    // --- Test 1: PNG fixture ---
    let png = load_test_image("blocks.png").expect("load blocks.png");
    rp.compare_values(20.0, png.width() as f64, 0.0);
    rp.compare_values(12.0, png.height() as f64, 0.0);
    rp.compare_images(&expected, &png);
    rp.show_image("blocks.png", &png);

    // --- Test 2: PBM fixture ---
    let pbm = load_test_image("blocks.pbm").expect("load blocks.pbm");
    rp.compare_images(&expected, &pbm);

    // --- Test 3: format detection ---
    let bytes = std::fs::read(test_data_path("blocks.png")).expect("read blocks.png");
    rp.compare_bool(true, detect_format_from_bytes(&bytes) == ImageFormat::Png);
    let bytes = std::fs::read(test_data_path("blocks.pbm")).expect("read blocks.pbm");
    rp.compare_bool(true, detect_format_from_bytes(&bytes) == ImageFormat::Pbm);

    // --- Test 4: write and read back through files ---
    let dir = std::env::temp_dir().join(format!("gridsearch_io_reg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");

    let mut colored = expected.clone();
    colored
        .set_pixel(10, 6, Rgb::new(200, 10, 10))
        .expect("set pixel");
    for format in [ImageFormat::Png, ImageFormat::Pbm] {
        let path = dir.join(format!("blocks.{}", format.extension()));
        write_image(&colored, &path, format).expect("write image");
        let back = read_image(&path).expect("read image");
        match format {
            // PNG keeps every color
            ImageFormat::Png => rp.compare_images(&colored, &back),
            // PBM only keeps black
            _ => rp.compare_images(&expected, &back),
        };
    }
    let _ = std::fs::remove_dir_all(&dir);

    // --- Test 5: errors ---
    rp.compare_bool(
        true,
        matches!(
            read_image_mem(b"GIF89a...."),
            Err(IoError::UnsupportedFormat(_))
        ),
    );
    rp.compare_bool(
        true,
        matches!(
            write_image_mem(&expected, ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ),
    );
    rp.compare_bool(
        true,
        matches!(read_image("/nonexistent/blocks.png"), Err(IoError::Io(_))),
    );
    // Header dimensions far beyond the body are rejected, not allocated
    rp.compare_bool(
        true,
        matches!(
            read_image_mem(b"P4\n4294967295 4294967295\n\x00"),
            Err(IoError::InvalidData(_))
        ),
    );

    assert!(rp.cleanup(), "io regression test failed");
}
