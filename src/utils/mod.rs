/*!
# Utilities

Provides a few helper structs and traits used throughout the crate:
- [`LabelIndex`]: the two-way `label <-> id` mapping used by the dense representation,
- [`LabelSet`]: an abstraction over read-only sets of labels, accepted wherever callers hand in groups of nodes.

You probably do not need to interact with this module directly.
*/

pub mod label_index;
pub mod set;

pub use label_index::LabelIndex;
pub use set::LabelSet;
