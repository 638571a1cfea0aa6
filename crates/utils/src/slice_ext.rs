/// Extends functionality for slices of float arrays
pub trait SliceExt {
    /// Midpoints of adjacent values
    ///
    /// For an array of `n` cell edges this returns the `n - 1` cell centres.
    ///
    /// ```rust
    /// # use htools_utils::SliceExt;
    /// let edges = [1.0, 2.0, 4.0, 8.0];
    /// assert_eq!(edges.midpoints(), vec![1.5, 3.0, 6.0]);
    ///
    /// // A degenerate pair of edges still has a midpoint
    /// assert_eq!([0.0, 0.0].midpoints(), vec![0.0]);
    /// assert!([1.0].midpoints().is_empty());
    /// ```
    fn midpoints(&self) -> Vec<f64>;

    /// All values except the last
    ///
    /// For an array of `n` cell edges this returns the `n - 1` lower (left)
    /// edges, which is where face-centred quantities are stored.
    ///
    /// ```rust
    /// # use htools_utils::SliceExt;
    /// let edges = [1.0, 2.0, 4.0, 8.0];
    /// assert_eq!(edges.lower_edges(), vec![1.0, 2.0, 4.0]);
    /// ```
    fn lower_edges(&self) -> Vec<f64>;

    /// Check that values never decrease
    ///
    /// Repeated values are allowed, since collapsed axes in 2D runs are
    /// written with a pair of identical edges.
    ///
    /// ```rust
    /// # use htools_utils::SliceExt;
    /// assert!([1.0, 2.0, 2.0, 3.0].is_monotonic());
    /// assert!([0.0, 0.0].is_monotonic());
    /// assert!(![1.0, 0.5, 2.0].is_monotonic());
    /// ```
    fn is_monotonic(&self) -> bool;
}

impl<T: AsRef<[f64]>> SliceExt for T {
    fn midpoints(&self) -> Vec<f64> {
        self.as_ref()
            .windows(2)
            .map(|w| 0.5 * (w[0] + w[1]))
            .collect()
    }

    fn lower_edges(&self) -> Vec<f64> {
        let values = self.as_ref();
        match values.split_last() {
            Some((_, elements)) => elements.to_vec(),
            None => Vec::new(),
        }
    }

    fn is_monotonic(&self) -> bool {
        self.as_ref().windows(2).all(|w| w[0] <= w[1])
    }
}
