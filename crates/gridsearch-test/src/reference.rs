//! Reference implementations used to cross-check the searches
//!
//! These are deliberately different algorithms from the ones under test:
//! a union-find pass for block counting and an unpruned path enumeration
//! for word search.

use gridsearch_core::{ConnectivityType, LetterGrid, PixelImage};

/// Count black blocks with a union-find over all pixels.
pub fn count_blocks_union_find(pix: &PixelImage, connectivity: ConnectivityType) -> usize {
    let (width, height) = (pix.width() as usize, pix.height() as usize);
    let mut parent: Vec<usize> = (0..width * height).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for y in 0..height {
        for x in 0..width {
            if !pix.is_black(x as u32, y as u32) {
                continue;
            }
            for &(dx, dy) in connectivity.offsets() {
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if nx < width && ny < height && pix.is_black(nx as u32, ny as u32) {
                    let a = find(&mut parent, y * width + x);
                    let b = find(&mut parent, ny * width + nx);
                    parent[a] = b;
                }
            }
        }
    }

    (0..width * height)
        .filter(|&i| pix.is_black((i % width) as u32, (i / width) as u32))
        .filter(|&i| find(&mut parent, i) == i)
        .count()
}

/// Whether `word` spells some simple 8-connected path, by enumerating
/// every path from every cell.
pub fn word_exists_exhaustive(grid: &LetterGrid, word: &str) -> bool {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return false;
    }
    grid.cells().any(|start| {
        let mut path = vec![(start.row, start.col)];
        extend(grid, &letters, &mut path)
    })
}

fn extend(grid: &LetterGrid, letters: &[char], path: &mut Vec<(usize, usize)>) -> bool {
    let (row, col) = path[path.len() - 1];
    if grid.letter(row, col) != Some(letters[path.len() - 1]) {
        return false;
    }
    if path.len() == letters.len() {
        return true;
    }
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if !grid.contains(r, c) || path.contains(&(r, c)) {
                continue;
            }
            path.push((r, c));
            let found = extend(grid, letters, path);
            path.pop();
            if found {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_count() {
        let pix = PixelImage::from_ascii(&["#.#", "...", "##."]).unwrap();
        assert_eq!(count_blocks_union_find(&pix, ConnectivityType::EightWay), 3);
        let pix = PixelImage::from_ascii(&["#.", ".#"]).unwrap();
        assert_eq!(count_blocks_union_find(&pix, ConnectivityType::EightWay), 1);
        assert_eq!(count_blocks_union_find(&pix, ConnectivityType::FourWay), 2);
    }

    #[test]
    fn test_word_exists() {
        let grid = LetterGrid::from_strs(&["CAT", "XXX"]).unwrap();
        assert!(word_exists_exhaustive(&grid, "CAT"));
        assert!(word_exists_exhaustive(&grid, "XAX"));
        assert!(!word_exists_exhaustive(&grid, "CAC"));
        assert!(!word_exists_exhaustive(&grid, ""));
    }
}
