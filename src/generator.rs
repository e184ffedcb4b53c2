use crate::Result;

/// An endless, restartable walk over a fixed sequence.
///
/// Every call to `advance` hands out `items[position % len]` and bumps the
/// position. Nothing else ever changes.
#[derive(Clone, Debug)]
pub struct Cyclic<T> {
    items: Vec<T>,
    position: u64,
}

impl<T> Cyclic<T> {
    pub fn new(items: Vec<T>) -> Result<Cyclic<T>> {
        if items.is_empty() {
            anyhow::bail!("cannot cycle over an empty sequence");
        }
        Ok(Cyclic { items, position: 0 })
    }

    pub fn advance(&mut self) -> (usize, &T) {
        let index = self.phase();
        self.position += 1;
        (index, &self.items[index])
    }

    /// Number of items handed out since construction (or the last reset).
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Index of the item the next `advance` will return.
    pub fn phase(&self) -> usize {
        (self.position % self.items.len() as u64) as usize
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}
