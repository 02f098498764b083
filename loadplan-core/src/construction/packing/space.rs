use super::{Cuboid, OccupancyGrid};
use crate::models::common::{Size3D, Weight};
use crate::models::problem::ProductTypeConstraint;
use crate::utils::{Float, GEOMETRY_EPSILON, compare_floats};
use std::cmp::Ordering;

/// A palette committed to the loading space.
#[derive(Clone, Debug)]
pub struct PlacedItem<'a> {
    /// Occupied box.
    pub cuboid: Cuboid,
    /// Palette weight.
    pub weight: Weight,
    /// Product type constraint.
    pub constraint: &'a ProductTypeConstraint,
    /// Total weight of palettes above, direct and transitive.
    pub load: Weight,
}

/// Occupancy state of one packing attempt. It is private to the attempt and is read-only while
/// candidates of a palette are evaluated.
pub struct LoadingSpace<'a> {
    bounds: Size3D,
    grid: OccupancyGrid,
    items: Vec<PlacedItem<'a>>,
    weight: Weight,
    moment: (Float, Float),
}

impl<'a> LoadingSpace<'a> {
    /// Creates an empty loading space.
    pub fn new(bounds: Size3D, resolution: Float) -> Self {
        Self { bounds, grid: OccupancyGrid::new(&bounds, resolution), items: vec![], weight: 0., moment: (0., 0.) }
    }

    /// Returns cargo space size.
    pub fn bounds(&self) -> &Size3D {
        &self.bounds
    }

    /// Returns occupancy grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Returns placed items in placement order.
    pub fn items(&self) -> &[PlacedItem<'a>] {
        self.items.as_slice()
    }

    /// Returns total placed weight and its horizontal moment.
    pub fn weight_moment(&self) -> (Weight, (Float, Float)) {
        (self.weight, self.moment)
    }

    /// Returns distinct heights where a palette can rest: the floor and tops of placed palettes,
    /// in ascending order.
    pub fn support_levels(&self) -> Vec<Float> {
        let mut levels = std::iter::once(0.).chain(self.items.iter().map(|item| item.cuboid.z_max())).collect::<Vec<_>>();
        levels.sort_by(|a, b| compare_floats(*a, *b));
        levels.dedup_by(|a, b| (*a - *b).abs() < GEOMETRY_EPSILON);

        levels
    }

    /// Commits a placement: marks occupancy, propagates its weight to every palette below.
    pub fn commit(&mut self, cuboid: Cuboid, weight: Weight, constraint: &'a ProductTypeConstraint) {
        self.items
            .iter_mut()
            .filter(|item| is_below(&item.cuboid, &cuboid))
            .for_each(|item| item.load += weight);

        let (cx, cy) = cuboid.center_xy();
        self.weight += weight;
        self.moment = (self.moment.0 + weight * cx, self.moment.1 + weight * cy);

        self.grid.mark(&cuboid);
        self.items.push(PlacedItem { cuboid, weight, constraint, load: 0. });
    }
}

/// Checks whether `lower` is located below `upper` sharing a footprint area.
pub fn is_below(lower: &Cuboid, upper: &Cuboid) -> bool {
    compare_floats(lower.z_max(), upper.z + GEOMETRY_EPSILON) != Ordering::Greater && lower.footprints_intersect(upper)
}
