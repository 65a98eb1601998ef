use std::io::{self, Write};

use lib_2048::Grid;

const CELL_WIDTH: usize = 4;
const EMPTY_CELL: &[u8] = b"    |";

fn draw_divider(out: &mut impl Write, size: usize) -> io::Result<()> {
    let width = size * (CELL_WIDTH + 1) + 1;

    writeln!(out, "{:-<width$}", "")
}

/// Draws the grid as bordered rows, values right-aligned and empty cells blank.
pub fn draw_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    draw_divider(out, grid.size())?;

    for row in grid.rows() {
        out.write_all(b"|")?;

        for value in row {
            if value == 0 {
                out.write_all(EMPTY_CELL)?;
            } else {
                write!(out, "{value:>width$}|", width = CELL_WIDTH)?;
            }
        }

        out.write_all(b"\n")?;
        draw_divider(out, grid.size())?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(grid: &Grid) -> String {
        let mut out = Vec::new();
        draw_grid(&mut out, grid).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn it_draws_bordered_grid() {
        let grid =
            Grid::from_values(4, [2, 0, 0, 0, 0, 16, 0, 0, 0, 0, 128, 0, 0, 0, 0, 1024]).unwrap();

        let expected = "\
---------------------
|   2|    |    |    |
---------------------
|    |  16|    |    |
---------------------
|    |    | 128|    |
---------------------
|    |    |    |1024|
---------------------
";

        assert_eq!(render(&grid), expected);
    }

    #[test]
    fn it_sizes_dividers_to_grid() {
        let grid = Grid::from_values(2, [0, 4, 8, 0]).unwrap();

        assert_eq!(
            render(&grid),
            "-----------\n|    |   4|\n-----------\n|   8|    |\n-----------\n"
        );
    }
}
