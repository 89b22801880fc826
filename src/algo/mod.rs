/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph contract in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to breadth-first traversal, shortest routes and two-way scheduling.
Algorithms only use the contract, never a concrete representation.
*/

mod route;
mod schedule;
mod traversal;

use crate::{prelude::*, utils::*};

pub use route::*;
pub use schedule::*;
pub use traversal::*;
