//! Farthest-insertion tour construction.
//!
//! The tour starts from the farthest-apart pair and grows one point per
//! step: the unvisited point with the largest distance to any tour member is
//! spliced in where it lengthens the cycle the least. Every scan keeps the
//! first candidate reaching a strictly better value, so ties resolve towards
//! lower indices and earlier tour positions.

use log::{debug, info};
use serde_derive::*;

use crate::error::TspError;
use crate::matrix::DistanceMatrix;

/// A closed tour over point indices. The last entry connects back to the first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn length(&self, matrix: &DistanceMatrix) -> f64 {
        matrix.tour_length(&self.order)
    }

    /// Every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &index in &self.order {
            match seen.get_mut(index) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionStep {
    pub point: usize,
    pub position: usize,
    pub increase: f64,
}

/// The pair `(i, j)`, `i < j`, with the largest distance; the first such pair
/// in row-major order wins. `None` when there are fewer than two points.
///
/// If every distance is zero no pair beats the initial bound and `(0, 1)` is
/// used.
pub fn seed_pair(matrix: &DistanceMatrix) -> Option<(usize, usize)> {
    let n = matrix.size();
    if n < 2 {
        return None;
    }
    let mut seed = (0, 1);
    let mut max_distance = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let distance = matrix.get(i, j);
            if distance > max_distance {
                max_distance = distance;
                seed = (i, j);
            }
        }
    }
    Some(seed)
}

pub struct FarthestInsertion<'a> {
    matrix: &'a DistanceMatrix,
    tour: Vec<usize>,
    visited: Vec<bool>,
}

impl<'a> FarthestInsertion<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Result<Self, TspError> {
        let n = matrix.size();
        let (first, second) = seed_pair(matrix).ok_or(TspError::InsufficientInput { count: n })?;
        // Insertion costs are differences of distances; an infinite one turns them into NaN.
        if let Some((from, to)) = matrix.non_finite_pair() {
            return Err(TspError::NonFiniteDistance { from, to });
        }

        let mut tour = Vec::with_capacity(n);
        tour.push(first);
        tour.push(second);
        let mut visited = vec![false; n];
        visited[first] = true;
        visited[second] = true;

        debug!(
            "seed pair ({first}, {second}) at distance {:.6}",
            matrix.get(first, second)
        );

        Ok(Self {
            matrix,
            tour,
            visited,
        })
    }

    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.matrix.size()
    }

    pub fn is_visited(&self, point: usize) -> bool {
        self.visited[point]
    }

    // `None` once every point is placed.
    pub fn step(&mut self) -> Option<InsertionStep> {
        if self.is_complete() {
            return None;
        }
        let point = self.farthest_unvisited()?;
        let (position, increase) = self.cheapest_position(point);

        self.tour.insert(position, point);
        self.visited[point] = true;

        debug!(
            "inserted {point} at {position} (+{increase:.6}), tour size {}",
            self.tour.len()
        );
        Some(InsertionStep {
            point,
            position,
            increase,
        })
    }

    pub fn finish(mut self) -> Tour {
        while self.step().is_some() {}
        Tour { order: self.tour }
    }

    // Scans unvisited points in index order and tour members in tour order.
    // Falls back to the lowest unvisited index when all of them coincide with
    // tour points.
    fn farthest_unvisited(&self) -> Option<usize> {
        let mut farthest = None;
        let mut max_distance = 0.0;
        for point in (0..self.visited.len()).filter(|&p| !self.visited[p]) {
            for &member in &self.tour {
                let distance = self.matrix.get(point, member);
                if distance > max_distance {
                    max_distance = distance;
                    farthest = Some(point);
                }
            }
        }
        farthest.or_else(|| self.visited.iter().position(|visited| !visited))
    }

    // Returns the index of the successor of the cheapest edge, i.e. the slot
    // the point takes. The closing edge yields index 0.
    fn cheapest_position(&self, point: usize) -> (usize, f64) {
        let size = self.tour.len();
        let mut min_increase = f64::MAX;
        let mut position = 0;
        for i in 0..size {
            let next = (i + 1) % size;
            let (from, to) = (self.tour[i], self.tour[next]);
            let increase = self.matrix.get(from, point) + self.matrix.get(point, to)
                - self.matrix.get(from, to);
            if increase < min_increase {
                min_increase = increase;
                position = next;
            }
        }
        (position, min_increase)
    }
}

/// Builds a farthest-insertion tour over all `matrix.size()` points.
pub fn build(matrix: &DistanceMatrix) -> Result<Tour, TspError> {
    let tour = FarthestInsertion::new(matrix)?.finish();
    info!(
        "built tour over {} points, length {:.6}",
        tour.len(),
        tour.length(matrix)
    );
    Ok(tour)
}
