//! Dense travel-time matrix with a trailing depot.

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Indices `0..n-1` are storage locations; index `n-1` is the depot.
///
/// # Examples
///
/// ```
/// use u_picking::distance::TravelTimeMatrix;
///
/// let tm = TravelTimeMatrix::from_rows(&[
///     vec![0.0, 4.0, 2.0],
///     vec![4.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(tm.depot(), 2);
/// assert_eq!(tm.from_depot(1), 3.0);
/// assert_eq!(tm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TravelTimeMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelTimeMatrix {
    /// Creates a matrix from nested rows.
    ///
    /// Returns `None` if there are no rows or any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.iter().flatten().copied().collect(),
            size,
        })
    }

    /// Returns the travel time from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Index of the depot (last row/column).
    pub fn depot(&self) -> usize {
        self.size - 1
    }

    /// Travel time from the depot to `location`.
    pub fn from_depot(&self, location: usize) -> f64 {
        self.get(self.depot(), location)
    }

    /// Travel time from `location` back to the depot.
    pub fn to_depot(&self, location: usize) -> f64 {
        self.get(location, self.depot())
    }

    /// Number of locations including the depot.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<f64>> {
        vec![
            vec![999.0, 5.0, 2.0],
            vec![6.0, 999.0, 3.0],
            vec![2.0, 4.0, 999.0],
        ]
    }

    #[test]
    fn test_from_rows() {
        let tm = TravelTimeMatrix::from_rows(&rows()).expect("square");
        assert_eq!(tm.size(), 3);
        assert_eq!(tm.get(0, 1), 5.0);
        assert_eq!(tm.get(1, 0), 6.0);
    }

    #[test]
    fn test_depot_is_last() {
        let tm = TravelTimeMatrix::from_rows(&rows()).expect("square");
        assert_eq!(tm.depot(), 2);
        assert_eq!(tm.from_depot(1), 4.0);
        assert_eq!(tm.to_depot(1), 3.0);
    }

    #[test]
    fn test_from_rows_invalid() {
        assert!(TravelTimeMatrix::from_rows(&[]).is_none());
        assert!(TravelTimeMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).is_none());
    }

    #[test]
    fn test_asymmetric_legs_kept_apart() {
        let tm = TravelTimeMatrix::from_rows(&rows()).expect("square");
        assert_ne!(tm.get(0, 1), tm.get(1, 0));
        assert_ne!(tm.from_depot(0), tm.to_depot(1));
    }
}
