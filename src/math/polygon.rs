use super::{LineSegment2d, Point2d};
use crate::error::ObstacleError;
use crate::util::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A closed polygon, stored as a cycle of vertices.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) mod n`, so the order in which
/// the vertices are given defines the edges.
/// Serializes as a plain list of vertices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Point2d>", into = "Vec<Point2d>")
)]
pub struct Polygon {
    vertices: SmallVec<[Point2d; 4]>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    /// Returns `None` if fewer than three vertices are given.
    pub fn new(vertices: &[Point2d]) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        Some(Self {
            vertices: SmallVec::from_slice(vertices),
        })
    }

    /// The vertices of the polygon, in order.
    pub fn vertices(&self) -> &[Point2d] {
        &self.vertices
    }

    /// The number of vertices (and edges) in the polygon.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Gets edge `idx` of the polygon.
    pub fn edge(&self, idx: usize) -> LineSegment2d {
        let n = self.vertices.len();
        LineSegment2d::from_ends(self.vertices[idx % n], self.vertices[(idx + 1) % n])
    }

    /// Returns an iterator over the edges of the polygon, in order.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment2d> + '_ {
        (0..self.len()).map(|idx| self.edge(idx))
    }

    /// Determines whether the point lies within the polygon, by counting how many
    /// edges a ray cast from the point in the positive x direction crosses.
    ///
    /// Each edge covers the half-open range of y-values from its lower end point
    /// (inclusive) to its upper end point (exclusive), so a ray passing through a
    /// vertex is only counted once. Horizontal edges cover no y-values at all.
    /// Points lying exactly on the boundary are classified consistently but not
    /// necessarily as inside.
    pub fn contains(&self, point: Point2d) -> bool {
        self.edges().fold(false, |inside, edge| {
            let (i, j) = (edge.to, edge.from);
            let in_range = Interval::new(i.y, j.y).contains_half_open(point.y)
                || Interval::new(j.y, i.y).contains_half_open(point.y);
            if !in_range {
                return inside;
            }
            let edge_x = i.x + (point.y - i.y) * (j.x - i.x) / (j.y - i.y);
            inside ^ (point.x < edge_x)
        })
    }

    /// Finds every point at which `path` crosses an edge of the polygon.
    ///
    /// Returns the fractions along `path` of the crossings in ascending order.
    /// A path through a vertex crosses both edges meeting there, so the same
    /// fraction may appear twice.
    pub fn crossings(&self, path: &LineSegment2d) -> SmallVec<[f64; 4]> {
        let mut fracs: SmallVec<[f64; 4]> = self
            .edges()
            .filter_map(|edge| path.intersect_at(&edge))
            .collect();
        fracs.sort_by(f64::total_cmp);
        fracs
    }
}

impl From<[Point2d; 4]> for Polygon {
    fn from(vertices: [Point2d; 4]) -> Self {
        Self {
            vertices: SmallVec::from_buf(vertices),
        }
    }
}

impl TryFrom<Vec<Point2d>> for Polygon {
    type Error = ObstacleError;

    fn try_from(vertices: Vec<Point2d>) -> Result<Self, Self::Error> {
        if vertices.len() < 3 {
            return Err(ObstacleError::TooFewVertices(vertices.len()));
        }
        Ok(Self {
            vertices: SmallVec::from_vec(vertices),
        })
    }
}

impl From<Polygon> for Vec<Point2d> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices.into_vec()
    }
}
