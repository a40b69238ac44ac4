//! Sub-path classification.

/// The shape a sub-path is exported as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SubPathKind {
    Point,
    LineString,
    Polygon,
}

/// Whether all sub-paths of a context share the same kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Uniformity {
    Uniform(SubPathKind),
    Mixed,
}

impl Uniformity {
    /// Scans a sequence of kinds. Returns `None` if the sequence is empty.
    pub fn of(kinds: &[SubPathKind]) -> Option<Self> {
        let (first, rest) = kinds.split_first()?;
        if rest.iter().all(|kind| kind == first) {
            Some(Uniformity::Uniform(*first))
        } else {
            Some(Uniformity::Mixed)
        }
    }
}

#[test]
fn uniformity() {
    use SubPathKind::*;

    assert_eq!(Uniformity::of(&[]), None);
    assert_eq!(Uniformity::of(&[Point]), Some(Uniformity::Uniform(Point)));
    assert_eq!(
        Uniformity::of(&[Polygon, Polygon, Polygon]),
        Some(Uniformity::Uniform(Polygon))
    );
    assert_eq!(
        Uniformity::of(&[LineString, LineString, Polygon]),
        Some(Uniformity::Mixed)
    );
    assert_eq!(
        Uniformity::of(&[Polygon, LineString, Polygon]),
        Some(Uniformity::Mixed)
    );
}
