use std::fmt::{Debug, Display};

use crate::label::Label;

/// A directed edge defined by the labels of its two endpoints.
///
/// Undirected edges are not a separate type: they are the presence of both `(u, v)` and `(v, u)`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelledEdge(pub Label, pub Label);

impl Display for LabelledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for LabelledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl LabelledEdge {
    /// Creates a new edge from anything convertible into labels
    pub fn new(from: impl Into<Label>, to: impl Into<Label>) -> Self {
        LabelledEdge(from.into(), to.into())
    }

    /// Normalizes the edge such that the lexicographically smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the lexicographically smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        LabelledEdge(self.1.clone(), self.0.clone())
    }
}

impl From<(&str, &str)> for LabelledEdge {
    fn from(value: (&str, &str)) -> Self {
        LabelledEdge::new(value.0, value.1)
    }
}

impl From<&(&str, &str)> for LabelledEdge {
    fn from(value: &(&str, &str)) -> Self {
        LabelledEdge::new(value.0, value.1)
    }
}

impl From<(Label, Label)> for LabelledEdge {
    fn from(value: (Label, Label)) -> Self {
        LabelledEdge(value.0, value.1)
    }
}

impl From<&LabelledEdge> for LabelledEdge {
    fn from(value: &LabelledEdge) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        let e = LabelledEdge::new("b", "a");
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), LabelledEdge::new("a", "b"));
        assert_eq!(e.reverse(), LabelledEdge::from(("a", "b")));
        assert!(LabelledEdge::new("x", "x").is_loop());
        assert_eq!(format!("{e}"), "(b,a)");
    }
}
