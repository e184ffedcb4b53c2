use crate::direction::Direction;
use crate::field::Field;
use crate::Result;
use itertools::Itertools;

/// Where a falling shape's top-left corner currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub column: i64,
    pub row: i64,
}

impl Placement {
    pub fn moved(self, direction: Direction) -> Placement {
        let (dx, dy) = direction.offset();
        Placement {
            column: self.column + dx,
            row: self.row + dy,
        }
    }
}

/// An immutable rock pattern. Cell offsets are measured from the top-left
/// corner, `dx` to the right and `dy` downward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    width: i64,
    height: i64,
    grid: Vec<Vec<bool>>,
    cells: Vec<(i64, i64)>,
    /// Leftmost and rightmost solid `dx`; edge columns of the grid may be empty.
    solid_columns: (i64, i64),
}

impl Shape {
    /// Parses a picture like `".#.\n###\n.#."` where `#` is solid.
    pub fn from_string(s: &str) -> Result<Shape> {
        let rows: Vec<&str> = s.trim().split('\n').map(|row| row.trim()).collect();

        if rows.iter().all(|row| row.is_empty()) {
            anyhow::bail!("shape is empty");
        }
        if !rows.iter().map(|row| row.chars().count()).all_equal() {
            anyhow::bail!("shape rows are not all the same length");
        }

        let grid: Vec<Vec<bool>> = rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .map(|(x, c)| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        _ => anyhow::bail!("bad shape symbol {:?} at ({}, {})", c, x, y),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<_>>()?;

        let cells: Vec<(i64, i64)> = grid
            .iter()
            .enumerate()
            .flat_map(|(dy, row)| {
                row.iter()
                    .positions(|solid| *solid)
                    .map(move |dx| (dx as i64, dy as i64))
            })
            .collect();

        let solid_columns = match cells.iter().map(|(dx, _)| *dx).minmax().into_option() {
            Some(span) => span,
            None => anyhow::bail!("shape has no solid cells"),
        };

        Ok(Shape {
            width: grid[0].len() as i64,
            height: grid.len() as i64,
            grid,
            cells,
            solid_columns,
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn solid_columns(&self) -> (i64, i64) {
        self.solid_columns
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn occupies_cell(&self, dx: i64, dy: i64) -> bool {
        if dx < 0 || dx >= self.width || dy < 0 || dy >= self.height {
            return false;
        }
        self.grid[dy as usize][dx as usize]
    }

    /// Absolute coordinates of every solid cell at `at`.
    pub fn cells_at(&self, at: Placement) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells
            .iter()
            .map(move |(dx, dy)| (at.column + dx, at.row - dy))
    }

    pub fn can_move(&self, field: &Field, at: Placement, direction: Direction) -> bool {
        let (leftmost, rightmost) = self.solid_columns;
        match direction {
            Direction::Left if at.column + leftmost <= 0 => return false,
            Direction::Right if at.column + rightmost + 1 >= field.width() => return false,
            // Bottom row stays strictly above everything settled.
            Direction::Down if at.row - self.height >= field.height() => return true,
            _ => {}
        }

        self.cells_at(at.moved(direction))
            .all(|p| field.is_available(p))
    }

    /// Stamps the shape into the field. Nothing is written unless every
    /// target cell is free.
    pub fn settle_into(&self, field: &mut Field, at: Placement) -> Result<()> {
        if let Some((col, row)) = self.cells_at(at).find(|p| !field.is_available(*p)) {
            anyhow::bail!("cannot settle shape into occupied cell ({}, {})", col, row);
        }
        for p in self.cells_at(at) {
            field.settle(p);
        }
        Ok(())
    }
}

/// The five rocks, in drop order.
pub fn standard_catalog() -> Result<Vec<Shape>> {
    [
        "####",
        ".#.\n###\n.#.",
        "..#\n..#\n###",
        "#\n#\n#\n#",
        "##\n##",
    ]
    .iter()
    .map(|s| Shape::from_string(s))
    .collect()
}
