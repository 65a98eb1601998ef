use rand::Rng;

use crate::{difficulty::Difficulty, direction::Direction, tiles_merge, Grid};

const MOVE_FUNCTIONS: [fn(&mut Grid) -> bool; 4] = [move_up, move_down, move_right, move_left];

/// Slides one line of exponents toward index 0, merging equal neighbours.
///
/// A tile produced by a merge cannot absorb another tile in the same sweep, so `[2, 2, 2, 0]`
/// becomes `[4, 2, 0, 0]`. Tiles at `MAX_EXPONENT` stay put. Returns whether any cell changed.
pub fn slide_row(row: &mut [u8]) -> bool {
    let mut changed = false;
    let mut dest = 0;
    let mut can_merge = false;

    for src in 0..row.len() {
        let cell = row[src];

        if cell == 0 {
            continue;
        }

        row[src] = 0;

        if can_merge && tiles_merge(row[dest - 1], cell) {
            row[dest - 1] += 1;
            can_merge = false;
            changed = true;
        } else {
            row[dest] = cell;
            can_merge = true;
            changed |= dest != src;
            dest += 1;
        }
    }

    changed
}

pub fn do_move(grid: &mut Grid) -> bool {
    grid.exponent_rows_mut()
        .fold(false, |changed, row| slide_row(row) | changed)
}

fn move_up(grid: &mut Grid) -> bool {
    grid.transpose();

    let changed = do_move(grid);

    grid.transpose();
    changed
}

fn move_down(grid: &mut Grid) -> bool {
    grid.transpose_rotate();

    let changed = do_move(grid);

    grid.transpose_rotate();
    changed
}

fn move_right(grid: &mut Grid) -> bool {
    grid.mirror();

    let changed = do_move(grid);

    grid.mirror();
    changed
}

fn move_left(grid: &mut Grid) -> bool {
    do_move(grid)
}

pub fn try_move(grid: &mut Grid, direction: Direction) -> bool {
    MOVE_FUNCTIONS[direction as usize](grid)
}

/// Places a 2 or a 4 in a uniformly chosen empty cell.
///
/// Returns the cell and the value placed, or `None` when the grid is full and left untouched.
pub fn spawn_tile(
    rng: &mut impl Rng,
    grid: &mut Grid,
    difficulty: Difficulty,
) -> Option<(usize, usize, u32)> {
    let empty_cells = grid.empty_cells();

    if empty_cells.is_empty() {
        return None;
    }

    let (row, col) = empty_cells[rng.gen_range(0..empty_cells.len())];
    let exponent = if rng.gen_range(1..=10) > difficulty.four_threshold() {
        2
    } else {
        1
    };

    grid.set_exponent(row, col, exponent);

    Some((row, col, grid.get(row, col)))
}
