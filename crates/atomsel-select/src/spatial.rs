//! K-d tree spatial index for radius queries
//!
//! Backs the distance operators (`around`, `xaround`, `beyond`). Built once
//! per evaluation context, queried once per reference atom.

use atomsel_mol::{Molecule, Vec3};

const LEAF_SIZE: usize = 10;

#[derive(Debug)]
enum Node {
    /// Range into the `order` permutation
    Leaf { start: usize, end: usize },
    /// Axis-aligned split: points with coordinate < value go left
    Split {
        axis: usize,
        value: f32,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A k-d tree over atom coordinates.
///
/// Stores a permutation of atom indices partitioned by recursive median
/// splits along the widest axis. Radius queries descend only into subtrees
/// whose half-space can contain points within the radius.
#[derive(Debug)]
pub struct SpatialIndex {
    coords: Vec<Vec3>,
    order: Vec<usize>,
    root: Option<Node>,
}

fn axis_value(pos: Vec3, axis: usize) -> f32 {
    match axis {
        0 => pos.x,
        1 => pos.y,
        _ => pos.z,
    }
}

impl SpatialIndex {
    /// Build an index over all atoms of a molecule.
    pub fn build(mol: &Molecule) -> Self {
        let coords = mol.coords().to_vec();
        let mut order: Vec<usize> = (0..coords.len()).collect();
        let root = if order.is_empty() {
            None
        } else {
            let end = order.len();
            Some(build_node(&coords, &mut order, 0, end))
        };
        SpatialIndex {
            coords,
            order,
            root,
        }
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Indices of all atoms within `radius` of `center`, boundary inclusive.
    pub fn within_radius(&self, center: Vec3, radius: f32) -> Vec<usize> {
        let mut result = Vec::new();
        if let Some(root) = &self.root {
            let radius_sq = radius * radius;
            self.search(root, center, radius, radius_sq, &mut result);
        }
        result
    }

    /// Indices of all atoms within `radius` of atom `idx`, including `idx`
    /// itself.
    pub fn within_radius_of_atom(&self, idx: usize, radius: f32) -> Vec<usize> {
        match self.coords.get(idx) {
            Some(&center) => self.within_radius(center, radius),
            None => Vec::new(),
        }
    }

    fn search(
        &self,
        node: &Node,
        center: Vec3,
        radius: f32,
        radius_sq: f32,
        result: &mut Vec<usize>,
    ) {
        match node {
            Node::Leaf { start, end } => {
                for &idx in &self.order[*start..*end] {
                    let d = self.coords[idx] - center;
                    if d.magnitude_squared() <= radius_sq {
                        result.push(idx);
                    }
                }
            }
            Node::Split {
                axis,
                value,
                left,
                right,
            } => {
                // Both descend conditions are inclusive: the left partition
                // can hold points equal to the split value (median
                // duplicates), so an exact-radius hit may live on either side.
                let delta = axis_value(center, *axis) - value;
                if delta <= radius {
                    self.search(left, center, radius, radius_sq, result);
                }
                if delta >= -radius {
                    self.search(right, center, radius, radius_sq, result);
                }
            }
        }
    }
}

/// Recursively partition `order[start..end]` by median splits.
fn build_node(coords: &[Vec3], order: &mut [usize], start: usize, end: usize) -> Node {
    let count = end - start;
    if count <= LEAF_SIZE {
        return Node::Leaf { start, end };
    }

    // Split along the widest axis of the bounding box
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for &idx in &order[start..end] {
        for axis in 0..3 {
            let v = axis_value(coords[idx], axis);
            min[axis] = min[axis].min(v);
            max[axis] = max[axis].max(v);
        }
    }
    let mut axis = 0;
    for candidate in 1..3 {
        if max[candidate] - min[candidate] > max[axis] - min[axis] {
            axis = candidate;
        }
    }

    // Degenerate cloud: every point at the same position
    if max[axis] - min[axis] <= f32::EPSILON {
        return Node::Leaf { start, end };
    }

    let mid = count / 2;
    order[start..end].sort_unstable_by(|&a, &b| {
        axis_value(coords[a], axis)
            .partial_cmp(&axis_value(coords[b], axis))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let value = axis_value(coords[order[start + mid]], axis);

    let left = Box::new(build_node(coords, order, start, start + mid));
    let right = Box::new(build_node(coords, order, start + mid, end));
    Node::Split {
        axis,
        value,
        left,
        right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomsel_mol::Atom;

    fn line_molecule(xs: &[f32]) -> Molecule {
        let mut mol = Molecule::new();
        for (i, &x) in xs.iter().enumerate() {
            mol.add_atom(Atom::new(format!("A{}", i), 6), Vec3::new(x, 0.0, 0.0));
        }
        mol
    }

    #[test]
    fn test_empty_molecule() {
        let mol = Molecule::new();
        let index = SpatialIndex::build(&mol);
        assert!(index.is_empty());
        assert!(index.within_radius(Vec3::new(0.0, 0.0, 0.0), 5.0).is_empty());
    }

    #[test]
    fn test_within_radius() {
        let mol = line_molecule(&[0.0, 1.5, 4.0, 10.0]);
        let index = SpatialIndex::build(&mol);

        let mut hits = index.within_radius(Vec3::new(0.0, 0.0, 0.0), 2.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1]);

        let mut hits = index.within_radius(Vec3::new(0.0, 0.0, 0.0), 5.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mol = line_molecule(&[0.0, 3.0]);
        let index = SpatialIndex::build(&mol);

        let mut hits = index.within_radius(Vec3::new(0.0, 0.0, 0.0), 3.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1]);

        let hits = index.within_radius(Vec3::new(0.0, 0.0, 0.0), 2.999);
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn test_boundary_inclusive_across_split() {
        // 12 atoms force a split; the median value (4.0) is duplicated, so
        // one x=4 atom lands in the left partition. A query at exactly
        // radius distance must still reach it.
        let mut xs = vec![0.0; 5];
        xs.extend_from_slice(&[4.0; 7]);
        let mol = line_molecule(&xs);
        let index = SpatialIndex::build(&mol);

        let mut hits = index.within_radius(Vec3::new(7.0, 0.0, 0.0), 3.0);
        hits.sort_unstable();
        assert_eq!(hits, (5..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_within_radius_of_atom() {
        let mol = line_molecule(&[0.0, 1.0, 5.0]);
        let index = SpatialIndex::build(&mol);

        let mut hits = index.within_radius_of_atom(0, 1.5);
        hits.sort_unstable();
        // the center atom is its own neighbor at distance zero
        assert_eq!(hits, vec![0, 1]);

        assert!(index.within_radius_of_atom(99, 1.5).is_empty());
    }

    #[test]
    fn test_large_cloud_matches_brute_force() {
        // enough points to force several splits past the leaf size
        let mut mol = Molecule::new();
        let mut positions = Vec::new();
        for i in 0..60 {
            let f = i as f32;
            let pos = Vec3::new(
                (f * 0.7).sin() * 10.0,
                (f * 1.3).cos() * 10.0,
                f * 0.3 - 9.0,
            );
            positions.push(pos);
            mol.add_atom(Atom::new(format!("A{}", i), 6), pos);
        }
        let index = SpatialIndex::build(&mol);

        let center = Vec3::new(1.0, -2.0, 0.5);
        let radius = 6.0;
        let mut expected: Vec<usize> = positions
            .iter()
            .enumerate()
            .filter(|(_, p)| (**p - center).magnitude_squared() <= radius * radius)
            .map(|(i, _)| i)
            .collect();
        expected.sort_unstable();

        let mut hits = index.within_radius(center, radius);
        hits.sort_unstable();
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_identical_positions() {
        let mol = line_molecule(&[2.0; 25]);
        let index = SpatialIndex::build(&mol);
        let hits = index.within_radius(Vec3::new(2.0, 0.0, 0.0), 0.1);
        assert_eq!(hits.len(), 25);
    }
}
