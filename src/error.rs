/*!
# Errors

All fallible operations of this crate report a [`GraphError`] to their immediate caller.
None of them is partially applied: a failed call leaves the graph untouched and produces no result.
*/

use crate::label::Label;

/// Failure outcomes of graph construction and of the algorithms in [`crate::algo`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node was registered explicitly although its label is already taken.
    /// Edge insertion never raises this, as it registers missing endpoints on its own.
    #[error("node `{0}` already exists")]
    DuplicateNode(Label),

    /// There is no directed path between the two nodes.
    #[error("no route from `{from}` to `{to}`")]
    NoRoute { from: Label, to: Label },

    /// The conflict graph contains an odd cycle (or a self-edge) and cannot be split
    /// into two conflict-free groups. Carries the node at which the contradiction surfaced.
    #[error("no valid schedule: conflict detected at `{0}`")]
    NoSchedule(Label),
}

/// Shorthand for results of this crate
pub type Result<T> = std::result::Result<T, GraphError>;
