//! Flat DP table storage.

/// A row-major `rows × cols` grid backed by a single buffer.
///
/// Row `i` holds the optimum over the first `i` items for every
/// quantized capacity `0..cols`.
#[derive(Debug, Clone)]
pub(crate) struct DpTable<T> {
    cells: Vec<T>,
    cols: usize,
}

impl<T: Clone> DpTable<T> {
    pub(crate) fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; rows * cols],
            cols,
        }
    }
}

impl<T> DpTable<T> {
    pub(crate) fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.cols + col]
    }

    /// Splits out the finalized row `row - 1` and the row being filled.
    ///
    /// # Panics
    ///
    /// Panics if `row` is zero or out of bounds.
    pub(crate) fn split_rows(&mut self, row: usize) -> (&[T], &mut [T]) {
        assert!(row > 0 && row < self.rows(), "row {row} out of bounds");
        let (before, rest) = self.cells.split_at_mut(row * self.cols);
        (&before[(row - 1) * self.cols..], &mut rest[..self.cols])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let mut table = DpTable::new(3, 4, 0u32);
        assert_eq!(table.rows(), 3);

        let (prev, cur) = table.split_rows(1);
        assert_eq!(prev.len(), 4);
        assert_eq!(cur.len(), 4);
        cur[2] = 7;

        let (prev, cur) = table.split_rows(2);
        assert_eq!(prev[2], 7);
        cur[3] = prev[2] + 1;

        assert_eq!(*table.get(1, 2), 7);
        assert_eq!(*table.get(2, 3), 8);
        assert_eq!(*table.get(0, 2), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_split_row_zero_panics() {
        let mut table = DpTable::new(2, 2, 0u8);
        let _ = table.split_rows(0);
    }
}
