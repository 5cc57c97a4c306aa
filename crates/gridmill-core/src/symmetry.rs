//! Dig-time symmetry classes.

use derive_more::Display;
use tinyvec::ArrayVec;

use crate::BoardShape;

/// Visual symmetry preserved while digging givens out of a full solution.
///
/// A symmetry defines which other cells must be removed in lock-step with a
/// chosen cell so the final pattern of givens keeps the symmetry. `Random`
/// is a request-time placeholder that resolves to one of the four concrete
/// classes before generation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Symmetry {
    /// No symmetry constraint.
    #[default]
    None,
    /// Four-fold rotational symmetry.
    Rotate90,
    /// Two-fold rotational symmetry.
    Rotate180,
    /// Left-right mirror symmetry.
    Mirror,
    /// Top-bottom flip symmetry.
    Flip,
    /// Resolves to one of the concrete classes at generation time.
    Random,
}

impl Symmetry {
    /// The concrete classes `Random` may resolve to. Excludes `None`.
    pub const CONCRETE: [Self; 4] = [Self::Rotate90, Self::Rotate180, Self::Mirror, Self::Flip];

    /// Returns the cells that must be removed together with `cell`.
    ///
    /// The result excludes `cell` itself and duplicates, so it may be
    /// shorter than the nominal partner count (for example the center cell
    /// of an odd board has no partners under any symmetry). `None` and
    /// unresolved `Random` yield an empty set.
    #[must_use]
    pub fn partners(self, shape: BoardShape, cell: usize) -> ArrayVec<[usize; 3]> {
        let last = shape.side() - 1;
        let row = shape.row_of(cell);
        let column = shape.column_of(cell);

        let mut partners = ArrayVec::new();
        let mut push = |candidate: usize| {
            if candidate != cell && !partners.contains(&candidate) {
                partners.push(candidate);
            }
        };
        match self {
            Self::None | Self::Random => {}
            Self::Rotate90 => {
                push(shape.cell_at(last - column, row));
                push(shape.cell_at(column, last - row));
                push(shape.cell_at(last - row, last - column));
            }
            Self::Rotate180 => push(shape.cell_at(last - row, last - column)),
            Self::Mirror => push(shape.cell_at(row, last - column)),
            Self::Flip => push(shape.cell_at(last - row, column)),
        }
        partners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate180_pairs_corners() {
        let shape = BoardShape::GRID_9X9;
        let partners = Symmetry::Rotate180.partners(shape, 0);
        assert_eq!(partners.as_slice(), &[80]);
    }

    #[test]
    fn test_center_cell_has_no_partners() {
        let shape = BoardShape::GRID_9X9;
        for symmetry in Symmetry::CONCRETE {
            assert!(symmetry.partners(shape, 40).is_empty());
        }
    }

    #[test]
    fn test_rotate90_yields_three_distinct_partners() {
        let shape = BoardShape::GRID_9X9;
        let partners = Symmetry::Rotate90.partners(shape, 1);
        assert_eq!(partners.len(), 3);
        for &p in &partners {
            assert_ne!(p, 1);
        }
    }

    #[test]
    fn test_partnership_is_symmetric() {
        let shape = BoardShape::GRID_6X6;
        for symmetry in Symmetry::CONCRETE {
            for cell in 0..shape.cell_count() {
                for &partner in &symmetry.partners(shape, cell) {
                    assert!(
                        symmetry.partners(shape, partner).contains(&cell),
                        "{symmetry:?}: {partner} not partnered back to {cell}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_none_and_random_have_no_partners() {
        let shape = BoardShape::GRID_9X9;
        assert!(Symmetry::None.partners(shape, 0).is_empty());
        assert!(Symmetry::Random.partners(shape, 0).is_empty());
    }
}
