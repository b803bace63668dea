//! Black block regression test
//!
//! Counts, deletes and crops the blocks of `tests/data/images/blocks.png`,
//! a 20x12 image with five 8-connected blocks:
//!
//! ```text
//! ####................
//! ####..........#.....
//! ..............#.....
//! .......#.......#....
//! ......###...........
//! .......#............
//! ....................
//! ##..........#######.
//! .#..........#.....#.
//! ..#.........#.....#.
//! ...#........#######.
//! ...................#
//! ```
//!
//! Run with:
//! ```
//! cargo test -p gridsearch-region --test blocks_reg
//! ```

use gridsearch_core::{ConnectivityType, PixelImage};
use gridsearch_region::{CropMode, RegionAnalyzer, RegionOptions};
use gridsearch_test::{RegParams, load_test_image, test_data_path};

fn count(pix: &mut PixelImage) -> usize {
    RegionAnalyzer::new(pix).count_connected_blocks()
}

#[test]
fn blocks_reg() {
    let mut rp = RegParams::new("blocks");
    let original = load_test_image("blocks.png").expect("load blocks.png");
    rp.show_image("blocks", &original);

    // --- Test 1: counting ---
    let mut pix = original.clone();
    rp.compare_values(5.0, count(&mut pix) as f64, 0.0);
    let four_way = RegionAnalyzer::with_options(
        &mut pix,
        RegionOptions::new(ConnectivityType::FourWay),
    )
    .count_connected_blocks();
    rp.compare_values(9.0, four_way as f64, 0.0);
    rp.compare_images(&original, &pix);

    // The PBM copy of the same image gives the same answer
    let mut pbm = gridsearch_io::read_image(test_data_path("blocks.pbm")).expect("read pbm");
    rp.compare_values(5.0, count(&mut pbm) as f64, 0.0);

    // --- Test 2: delete ---
    let mut pix = original.clone();
    let mut analyzer = RegionAnalyzer::new(&mut pix);
    let erased = analyzer.erase_block(1, 8);
    rp.compare_values(5.0, erased as f64, 0.0);
    rp.compare_values(4.0, analyzer.count_connected_blocks() as f64, 0.0);

    // Deleting again, from white or from outside the image, changes nothing
    let after_first = analyzer.image().clone();
    rp.compare_images(&after_first, analyzer.delete(1, 8));
    rp.compare_images(&after_first, analyzer.delete(10, 10));
    rp.compare_images(&after_first, analyzer.delete(20, 0));
    rp.compare_images(&after_first, analyzer.delete(0, 12));

    // --- Test 3: corner-region crop ---
    analyzer.crop(5, 19, 5, 19);
    rp.compare_values(3.0, analyzer.count_connected_blocks() as f64, 0.0);
    rp.show_image("deleted and cropped", analyzer.image());

    let mut pix = original.clone();
    let mut analyzer = RegionAnalyzer::new(&mut pix);
    // Only the top-left block lies in x < 5 && y < 5
    rp.compare_bool(true, analyzer.crop(5, 19, 5, 19).is_some());
    rp.compare_values(4.0, analyzer.count_connected_blocks() as f64, 0.0);
    rp.compare_bool(false, analyzer.image().is_black(0, 0));
    rp.compare_bool(true, analyzer.image().is_black(0, 7));

    // Only the outlined box lies in x > 11 && y > 6
    let mut pix = original.clone();
    let mut analyzer = RegionAnalyzer::new(&mut pix);
    analyzer.crop(0, 6, 0, 11);
    rp.compare_values(4.0, analyzer.count_connected_blocks() as f64, 0.0);
    rp.compare_bool(false, analyzer.image().is_black(19, 11));
    rp.compare_bool(true, analyzer.image().is_black(14, 1));

    // Bounds past the image select nothing
    let mut pix = original.clone();
    let cropped = RegionAnalyzer::new(&mut pix).crop(0, 90, 0, 90).cloned();
    rp.compare_bool(true, cropped.as_ref() == Some(&original));

    // --- Test 4: complement crop ---
    let mut pix = original.clone();
    let options = RegionOptions::default().with_crop_mode(CropMode::Complement);
    let mut analyzer = RegionAnalyzer::with_options(&mut pix, options);
    analyzer.crop(5, 13, 2, 6);
    rp.compare_values(1.0, analyzer.count_connected_blocks() as f64, 0.0);
    rp.compare_values(5.0, analyzer.image().count_black() as f64, 0.0);
    rp.compare_bool(true, analyzer.image().is_black(7, 4));
    rp.show_image("complement crop", analyzer.image());

    // --- Test 5: zero-width image ---
    let mut empty = PixelImage::new(0, 12).expect("empty image");
    let mut analyzer = RegionAnalyzer::new(&mut empty);
    rp.compare_values(0.0, analyzer.count_connected_blocks() as f64, 0.0);
    rp.compare_bool(true, analyzer.crop(0, 1, 0, 1).is_none());

    assert!(rp.cleanup(), "blocks regression test failed");
}
