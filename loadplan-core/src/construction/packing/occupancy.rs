#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/occupancy_test.rs"]
mod occupancy_test;

use super::Cuboid;
use crate::models::common::Size3D;
use crate::utils::{Float, GEOMETRY_EPSILON};

/// A voxel representation of vehicle cargo space at a fixed resolution. Only cells which lie
/// completely inside a placed palette are marked, so an occupied cell always means a collision.
pub struct OccupancyGrid {
    resolution: Float,
    dims: [usize; 3],
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates a fully free grid.
    pub fn new(bounds: &Size3D, resolution: Float) -> Self {
        let cells_along = |size: Float| ((size / resolution) + GEOMETRY_EPSILON).ceil().max(1.) as usize;
        let dims = [cells_along(bounds.length), cells_along(bounds.width), cells_along(bounds.height)];

        Self { resolution, dims, cells: vec![false; dims[0] * dims[1] * dims[2]] }
    }

    /// Returns grid resolution.
    pub fn resolution(&self) -> Float {
        self.resolution
    }

    /// Returns amount of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    /// Marks cells fully covered by the cuboid as occupied.
    pub fn mark(&mut self, cuboid: &Cuboid) {
        let [(x_from, x_to), (y_from, y_to), (z_from, z_to)] = [
            self.inner_range(cuboid.x, cuboid.x_max(), 0),
            self.inner_range(cuboid.y, cuboid.y_max(), 1),
            self.inner_range(cuboid.z, cuboid.z_max(), 2),
        ];

        for i in x_from..x_to {
            for j in y_from..y_to {
                for k in z_from..z_to {
                    let idx = self.index(i, j, k);
                    self.cells[idx] = true;
                }
            }
        }
    }

    /// Checks whether the cell at the lower corner of the cuboid is occupied. The cell is sampled
    /// strictly inside the cuboid, so a positive answer always means a collision.
    pub fn is_blocked(&self, cuboid: &Cuboid) -> bool {
        let cell = |from: Float, size: Float, axis: usize| {
            let sample = from + size.min(self.resolution) / 2.;
            let idx = (sample / self.resolution).floor();
            (idx >= 0. && (idx as usize) < self.dims[axis]).then_some(idx as usize)
        };

        match (
            cell(cuboid.x, cuboid.size.length, 0),
            cell(cuboid.y, cuboid.size.width, 1),
            cell(cuboid.z, cuboid.size.height, 2),
        ) {
            (Some(i), Some(j), Some(k)) => self.cells[self.index(i, j, k)],
            _ => false,
        }
    }

    fn inner_range(&self, from: Float, to: Float, axis: usize) -> (usize, usize) {
        let first = ((from - GEOMETRY_EPSILON) / self.resolution).ceil().max(0.) as usize;
        let last = (((to + GEOMETRY_EPSILON) / self.resolution).floor().max(0.) as usize).min(self.dims[axis]);

        (first.min(last), last)
    }

    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.dims[1] + j) * self.dims[2] + k
    }
}
