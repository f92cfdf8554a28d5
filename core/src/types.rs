/// Single coordinate axis used for the board side and for row/column positions.
pub type Coord = u8;

/// Count type used for cell counts and pair counts.
pub type CellCount = u16;

/// Face value of a card, pairs share the same value starting at 1.
pub type Card = u16;

/// Count type for the move counter and the move cap.
pub type MoveCount = u32;

/// Two-dimensional position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates every position of a `size`×`size` board in row-major order.
pub fn iter_coords(size: Coord) -> impl Iterator<Item = Coord2> {
    (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
}
