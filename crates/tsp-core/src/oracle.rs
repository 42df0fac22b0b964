use std::fmt::Debug;
use std::hash::Hash;

/// Read-only source of nodes and pairwise distances.
///
/// `nodes()` must enumerate the same labels in the same order on every call.
/// `distance(u, v)` is only asked for `u != v` and must be pure: the search
/// may cache the answers. Distances are expected to be finite and
/// nonnegative; the search rejects anything else before it starts.
pub trait DistanceOracle {
    type Node: Clone + Eq + Hash + Debug;

    fn nodes(&self) -> Vec<Self::Node>;

    fn distance(&self, from: &Self::Node, to: &Self::Node) -> f64;
}
