use std::fmt;

pub const DEFAULT_SIZE: usize = 4;

/// Exponent of the largest tile a `u32` value can hold, `2^31`. Tiles this large never merge.
pub const MAX_EXPONENT: u8 = 31;

/// Converts a tile value to the exponent stored in a cell. `0` is the empty cell.
///
/// Returns `None` for values that are not a tile: `1` and anything that is not a power of two.
pub const fn value_to_exponent(value: u32) -> Option<u8> {
    if value == 0 {
        Some(0)
    } else if value >= 2 && value.is_power_of_two() {
        Some(value.trailing_zeros() as u8)
    } else {
        None
    }
}

/// Whether cells holding exponents `a` and `b` merge when slid together.
pub const fn tiles_merge(a: u8, b: u8) -> bool {
    a != 0 && a == b && a < MAX_EXPONENT
}

pub const fn exponent_to_value(exponent: u8) -> u32 {
    if exponent == 0 {
        0
    } else {
        1 << exponent
    }
}

/// A square grid of tiles stored row-major.
///
/// Each cell holds the base-2 exponent of its tile, with `0` marking an empty cell, so every
/// occupied cell is a power of two no smaller than 2.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");

        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a grid from row-major tile values.
    pub fn from_values(size: usize, values: impl IntoIterator<Item = u32>) -> Option<Self> {
        let cells = values
            .into_iter()
            .map(value_to_exponent)
            .collect::<Option<Vec<_>>>()?;

        (size > 0 && cells.len() == size * size).then_some(Self { size, cells })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        exponent_to_value(self.get_exponent(row, col))
    }

    pub fn get_exponent(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    pub fn set_exponent(&mut self, row: usize, col: usize, exponent: u8) {
        debug_assert!(exponent <= MAX_EXPONENT);

        let index = self.index(row, col);
        self.cells[index] = exponent;
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().copied().map(exponent_to_value)
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = u32> + '_> + '_ {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().copied().map(exponent_to_value))
    }

    /// Rows as mutable exponent slices, for the line sweep.
    pub fn exponent_rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        self.cells.chunks_mut(self.size)
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn count_empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    pub fn contains(&self, value: u32) -> bool {
        value_to_exponent(value).is_some_and(|exponent| self.cells.contains(&exponent))
    }

    /// Whether two horizontally or vertically adjacent cells hold tiles that merge.
    pub fn has_adjacent_pair(&self) -> bool {
        let horizontal = self
            .cells
            .chunks(self.size)
            .any(|row| row.windows(2).any(|pair| tiles_merge(pair[0], pair[1])));

        let vertical = self
            .cells
            .iter()
            .zip(&self.cells[self.size..])
            .any(|(&above, &below)| tiles_merge(above, below));

        horizontal || vertical
    }

    /// Reverses every row.
    pub fn mirror(&mut self) {
        self.cells.chunks_mut(self.size).for_each(<[u8]>::reverse);
    }

    /// Swaps cells across the main diagonal.
    pub fn transpose(&mut self) {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (upper, lower) = (self.index(i, j), self.index(j, i));
                self.cells.swap(upper, lower);
            }
        }
    }

    /// Swaps cells across the anti-diagonal, so column `j` read bottom to top becomes row
    /// `size - 1 - j` read left to right.
    pub fn transpose_rotate(&mut self) {
        let last = self.size - 1;

        for i in 0..self.size {
            for j in 0..(last - i) {
                let (upper, lower) = (self.index(i, j), self.index(last - j, last - i));
                self.cells.swap(upper, lower);
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rows().map(|row| row.collect::<Vec<_>>()))
            .finish()
    }
}
