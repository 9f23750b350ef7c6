//! 2D affine transforms and ordered transform lists
//!
//! Renderers consume a [`TransformList`]: the ordered ops a transition
//! contributes for the current frame (translate-x, translate-y, scale).
//! Backends that want a single matrix can collapse the list with
//! [`TransformList::to_affine`].

use smallvec::SmallVec;

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            elements: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Transform a point (x, y) by this matrix
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, c, d, tx, ty] = self.elements;
        (a * x + c * y + tx, b * x + d * y + ty)
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Affine2D) -> Affine2D {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        Affine2D {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

/// One entry in a rendered transform list
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Horizontal translation in logical pixels
    TranslateX(f32),
    /// Vertical translation in logical pixels
    TranslateY(f32),
    /// Uniform scale
    Scale(f32),
}

impl TransformOp {
    /// Matrix form of this single op
    pub fn to_affine(self) -> Affine2D {
        match self {
            TransformOp::TranslateX(x) => Affine2D::translation(x, 0.0),
            TransformOp::TranslateY(y) => Affine2D::translation(0.0, y),
            TransformOp::Scale(s) => Affine2D::scale(s, s),
        }
    }
}

/// An ordered list of transform ops, applied first-to-last
///
/// Matches CSS `transform` semantics: the combined matrix is the product
/// of the entries in list order, so `[TranslateX(10), Scale(0.5)]`
/// translates the scaled content, not the other way around.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformList {
    ops: SmallVec<[TransformOp; 3]>,
}

impl TransformList {
    /// Empty list (identity)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an op at the end of the list
    pub fn push(&mut self, op: TransformOp) {
        self.ops.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformOp> {
        self.ops.iter()
    }

    /// Collapse the list into a single affine matrix (identity if empty)
    pub fn to_affine(&self) -> Affine2D {
        self.ops
            .iter()
            .fold(Affine2D::IDENTITY, |acc, op| acc.then(&op.to_affine()))
    }
}

impl FromIterator<TransformOp> for TransformList {
    fn from_iter<I: IntoIterator<Item = TransformOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransformList {
    type Item = &'a TransformOp;
    type IntoIter = std::slice::Iter<'a, TransformOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
