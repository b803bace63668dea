//! Neighbor connectivity
//!
//! Both searches step between cells using a fixed table of offsets. The
//! order of the table is part of the observable behavior of the word
//! search: the first path found is the first one reached in this order.

/// 8-connected neighbor offsets as `(d0, d1)` pairs, in expansion order.
///
/// For letter grids the pair is `(drow, dcol)`; for pixel images it is
/// `(dx, dy)`.
pub const EIGHT_WAY_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// 4-connected neighbor offsets, in the same relative order as
/// [`EIGHT_WAY_OFFSETS`].
pub const FOUR_WAY_OFFSETS: [(isize, isize); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

/// Connectivity type for traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets for this connectivity, in expansion order.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY_OFFSETS,
            ConnectivityType::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }

    /// Whether two coordinates are distinct neighbors under this connectivity.
    pub fn are_neighbors(self, a: (usize, usize), b: (usize, usize)) -> bool {
        let d0 = a.0.abs_diff(b.0);
        let d1 = a.1.abs_diff(b.1);
        match self {
            ConnectivityType::FourWay => d0 + d1 == 1,
            ConnectivityType::EightWay => d0 <= 1 && d1 <= 1 && (d0, d1) != (0, 0),
        }
    }
}
