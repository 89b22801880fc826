/*!
# Label Representation

Nodes are identified by owned string labels supplied by the caller.
Stores translate labels into dense `NodeId`s for their internal bookkeeping; these ids are
assigned in registration order and never reused (nodes cannot be removed).
*/

/// The externally visible identity of a node
pub type Label = String;

/// Internal slot of a node inside a store. Only meaningful for the store that assigned it.
pub type NodeId = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = NodeId;
