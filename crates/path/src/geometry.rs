//! The exported geometry.
//!
//! `Geometry` follows the geometry objects of the GeoJSON format (RFC 7946). With the
//! `serialization` feature, it serializes to the standard representation: a `type`
//! member plus `coordinates`, or `geometries` for collections.

use crate::math::Point;

/// A position as a `[x, y]` pair.
pub type Position = [f64; 2];

/// A GeoJSON geometry object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(tag = "type"))]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    /// A list of rings.
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    /// A list of polygons, each a list of rings.
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// The value of the GeoJSON `type` member.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Number of positions in the geometry, nested geometries included.
    pub fn num_positions(&self) -> usize {
        match self {
            Geometry::Point { .. } => 1,
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                coordinates.len()
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                coordinates.iter().map(Vec::len).sum()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter())
                .map(Vec::len)
                .sum(),
            Geometry::GeometryCollection { geometries } => {
                geometries.iter().map(Geometry::num_positions).sum()
            }
        }
    }
}

#[inline]
pub(crate) fn position(p: &Point) -> Position {
    [p.x, p.y]
}

#[inline]
pub(crate) fn positions(points: &[Point]) -> Vec<Position> {
    points.iter().map(position).collect()
}

#[test]
fn count_positions() {
    let collection = Geometry::GeometryCollection {
        geometries: vec![
            Geometry::Point {
                coordinates: [0.0, 0.0],
            },
            Geometry::MultiPolygon {
                coordinates: vec![
                    vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]],
                    vec![vec![[2.0, 0.0], [3.0, 0.0], [2.0, 0.0]]],
                ],
            },
        ],
    };

    assert_eq!(collection.num_positions(), 7);
    assert_eq!(collection.type_name(), "GeometryCollection");
}
