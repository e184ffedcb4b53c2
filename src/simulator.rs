use crate::direction::Direction;
use crate::field::Field;
use crate::generator::Cyclic;
use crate::shape::{Placement, Shape};
use crate::Result;

/// Columns between the left wall and a new shape's left edge.
pub const SPAWN_COLUMN: i64 = 2;

/// Empty rows between the current peak and a new shape's bottom edge.
pub const SPAWN_CLEARANCE: i64 = 3;

/// What happened to one dropped shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub iteration: i64,
    pub shape_index: usize,
    pub placement: Placement,
    pub height: i64,
    pub pushes: u64,
}

pub struct Simulation {
    field: Field,
    shapes: Cyclic<Shape>,
    pushes: Cyclic<Direction>,
    settled: i64,
}

impl Simulation {
    pub fn new(width: i64, catalog: Vec<Shape>, pattern: Vec<Direction>) -> Result<Simulation> {
        if width <= 0 {
            anyhow::bail!("field width must be positive, got {}", width);
        }
        if let Some(i) = pattern.iter().position(|d| *d == Direction::Down) {
            anyhow::bail!("push pattern may only push sideways, found down at index {}", i);
        }
        for (i, shape) in catalog.iter().enumerate() {
            let (_, rightmost) = shape.solid_columns();
            if SPAWN_COLUMN + rightmost + 1 > width {
                anyhow::bail!(
                    "shape {} ({} wide) does not fit a field of width {}",
                    i,
                    rightmost + 1,
                    width
                );
            }
        }

        let shapes =
            Cyclic::new(catalog).map_err(|_| anyhow::anyhow!("shape catalog is empty"))?;
        let pushes =
            Cyclic::new(pattern).map_err(|_| anyhow::anyhow!("push pattern is empty"))?;

        Ok(Simulation {
            field: Field::new(width),
            shapes,
            pushes,
            settled: 0,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Number of shapes that have come to rest so far.
    pub fn settled(&self) -> i64 {
        self.settled
    }

    /// Phase of both input cycles folded into one number: the index of the
    /// next shape and the position within the push pattern.
    pub fn fingerprint(&self) -> u64 {
        (self.shapes.phase() * self.pushes.len() + self.pushes.phase()) as u64
    }

    /// Drops the next shape until it comes to rest.
    pub fn drop_next(&mut self) -> Result<Settled> {
        let (shape_index, shape) = self.shapes.advance();
        let pushes_before = self.pushes.position();

        let mut at = Placement {
            column: SPAWN_COLUMN,
            row: self.field.height() + SPAWN_CLEARANCE + shape.height() - 1,
        };

        loop {
            let (_, push) = self.pushes.advance();
            if shape.can_move(&self.field, at, *push) {
                at = at.moved(*push);
            }

            if !shape.can_move(&self.field, at, Direction::Down) {
                shape.settle_into(&mut self.field, at)?;
                break;
            }
            at = at.moved(Direction::Down);
        }

        let settled = Settled {
            iteration: self.settled,
            shape_index,
            placement: at,
            height: self.field.height(),
            pushes: self.pushes.position() - pushes_before,
        };
        self.settled += 1;

        log::trace!(
            "shape {} (#{}) settled at {:?}, height {}",
            settled.iteration,
            shape_index,
            at,
            settled.height
        );

        Ok(settled)
    }
}
