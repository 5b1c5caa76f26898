use ndarray::{Array2, ArrayView1};

use crate::point::Point;

/// Symmetric all-pairs Euclidean distances with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distance: Array2<f64>,
}

impl DistanceMatrix {
    /// Computes the upper triangle once and mirrors it, so `d[i][j]` and
    /// `d[j][i]` are the same value bit for bit. The diagonal stays `0.0`.
    pub fn compute(points: &[Point]) -> Self {
        let n = points.len();
        let mut distance = Array2::<f64>::zeros([n, n]);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                distance[[i, j]] = d;
                distance[[j, i]] = d;
            }
        }
        Self { distance }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distance[[i, j]]
    }

    pub fn size(&self) -> usize {
        self.distance.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.distance.row(i)
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.distance
    }

    /// First pair `(i, j)`, `i < j`, whose distance overflowed.
    pub fn non_finite_pair(&self) -> Option<(usize, usize)> {
        let n = self.size();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .find(|&(i, j)| !self.get(i, j).is_finite())
    }

    /// Length of `order` read as a closed cycle.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&a, &b)| self.get(a, b))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(count: usize, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Point::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0)))
            .collect()
    }

    #[test]
    fn empty_and_single_point_are_well_defined() {
        let empty = DistanceMatrix::compute(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.size(), 0);

        let single = DistanceMatrix::compute(&[Point::new(4.0, -2.0)]);
        assert_eq!(single.size(), 1);
        assert_eq!(single.get(0, 0), 0.0);
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        let points = random_points(60, 7);
        let matrix = DistanceMatrix::compute(&points);
        for i in 0..points.len() {
            assert_eq!(matrix.get(i, i).to_bits(), 0.0f64.to_bits());
            for j in 0..points.len() {
                assert_eq!(matrix.get(i, j).to_bits(), matrix.get(j, i).to_bits());
                assert!(matrix.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn entries_are_euclidean_distances() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(-3.0, 0.0)];
        let matrix = DistanceMatrix::compute(&points);
        assert!((matrix.get(0, 1) - 5.0).abs() < 1e-12);
        assert_eq!(matrix.get(0, 2), 3.0);
        assert!((matrix.get(1, 2) - f64::sqrt(36.0 + 16.0)).abs() < 1e-12);
        assert_eq!(matrix.non_finite_pair(), None);
        assert_eq!(matrix.row(1).len(), 3);
    }

    #[test]
    fn overflowing_distances_are_located() {
        let points = [Point::new(0.0, 0.0), Point::new(1e308, 0.0), Point::new(-1e308, 0.0)];
        let matrix = DistanceMatrix::compute(&points);
        assert!(matrix.get(0, 1).is_finite());
        assert_eq!(matrix.non_finite_pair(), Some((1, 2)));
    }

    #[test]
    fn recomputation_is_bitwise_identical() {
        let points = random_points(40, 99);
        let first = DistanceMatrix::compute(&points);
        let second = DistanceMatrix::compute(&points);
        for (a, b) in first.as_array().iter().zip(second.as_array().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn tour_length_closes_the_cycle() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let matrix = DistanceMatrix::compute(&points);
        assert_eq!(matrix.tour_length(&[0, 1, 2, 3]), 40.0);
        assert_eq!(matrix.tour_length(&[0, 1]), 20.0);
        assert_eq!(matrix.tour_length(&[2]), 0.0);
        assert_eq!(matrix.tour_length(&[]), 0.0);
    }
}
