//! Face regions of an isometric block image.
//!
//! A block image of side `S` shows three faces of the cube: the top diamond
//! spanning the upper half, and the left (west) and right (south)
//! parallelograms below it. The four corner triangles belong to no face.
//! Each face covers exactly `S² / 4` pixels of an image whose side is a
//! multiple of four.

/// One visible face of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Right,
}

/// The part of a block image a tint applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Every pixel of the image.
    Whole,
    /// Only the pixels of one face.
    Face(Face),
}

impl Face {
    /// Returns `true` if pixel `(x, y)` of a `size × size` block image lies on
    /// this face.
    pub fn contains(self, size: u32, x: u32, y: u32) -> bool {
        face_at(size, x, y) == Some(self)
    }
}

impl Region {
    pub fn contains(self, size: u32, x: u32, y: u32) -> bool {
        match self {
            Region::Whole => true,
            Region::Face(face) => face.contains(size, x, y),
        }
    }
}

/// Classifies pixel `(x, y)` of a `size × size` block image.
///
/// Works on pixel centers in doubled coordinates so all edge tests are exact
/// integer comparisons.
pub fn face_at(size: u32, x: u32, y: u32) -> Option<Face> {
    let s = size as i64;
    let px = 2 * x as i64 + 1;
    let py = 2 * y as i64 + 1;
    if px >= 2 * s || py >= 2 * s {
        return None;
    }

    if (px - s).abs() + (2 * py - s).abs() <= s {
        Some(Face::Top)
    } else if px < s {
        (2 * py > s + px && 2 * py <= 3 * s + px).then_some(Face::Left)
    } else {
        (2 * py > 3 * s - px && 2 * py <= 5 * s - px).then_some(Face::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(size: u32, face: Option<Face>) -> usize {
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| face_at(size, x, y) == face)
            .count()
    }

    #[test]
    fn test_faces_split_image_evenly() {
        for size in [4, 16, 24, 32] {
            let quarter = (size * size / 4) as usize;
            assert_eq!(count(size, Some(Face::Top)), quarter, "size {size}");
            assert_eq!(count(size, Some(Face::Left)), quarter, "size {size}");
            assert_eq!(count(size, Some(Face::Right)), quarter, "size {size}");
            assert_eq!(count(size, None), quarter, "size {size}");
        }
    }

    #[test]
    fn test_corners_belong_to_no_face() {
        let s = 24;
        for (x, y) in [(0, 0), (s - 1, 0), (0, s - 1), (s - 1, s - 1)] {
            assert_eq!(face_at(s, x, y), None, "({x}, {y})");
        }
    }

    #[test]
    fn test_face_samples() {
        let s = 24;
        assert_eq!(face_at(s, 12, 6), Some(Face::Top));
        assert_eq!(face_at(s, 2, 12), Some(Face::Left));
        assert_eq!(face_at(s, 21, 12), Some(Face::Right));
        assert_eq!(face_at(s, 11, 23), Some(Face::Left));
        assert_eq!(face_at(s, 12, 23), Some(Face::Right));
        assert_eq!(face_at(s, 0, 6), Some(Face::Left));
        assert_eq!(face_at(s, 23, 6), Some(Face::Right));
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        assert_eq!(face_at(16, 16, 4), None);
        assert_eq!(face_at(16, 4, 16), None);
    }

    #[test]
    fn test_region_whole_contains_everything() {
        assert!(Region::Whole.contains(16, 0, 0));
        assert!(!Region::Face(Face::Top).contains(16, 0, 0));
        assert!(Region::Face(Face::Top).contains(16, 8, 4));
    }
}
