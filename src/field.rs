use std::collections::HashSet;

/// Sparse set of settled cells in a fixed-width, bottomless-upward well.
#[derive(Clone, Debug)]
pub struct Field {
    width: i64,
    height: i64,
    occupied: HashSet<(i64, i64)>,
}

impl Field {
    pub fn new(width: i64) -> Field {
        Field {
            width,
            height: 0,
            occupied: HashSet::new(),
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    /// One above the highest occupied row, 0 when empty.
    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn is_available(&self, (col, row): (i64, i64)) -> bool {
        if col < 0 || col >= self.width || row < 0 {
            return false;
        }
        !self.occupied.contains(&(col, row))
    }

    pub fn is_occupied(&self, p: (i64, i64)) -> bool {
        self.occupied.contains(&p)
    }

    pub fn settle(&mut self, (col, row): (i64, i64)) {
        self.occupied.insert((col, row));
        self.height = self.height.max(row + 1);
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &(i64, i64)> {
        self.occupied.iter()
    }
}
