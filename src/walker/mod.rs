//! Inclusion graph walker
//!
//! The worklist traversal over the `#include "..."` graph:
//! - a lazy line parser extracting quoted include directives
//! - a resolver mapping a directive to a file next to its includer
//! - the driver owning the worklist, visited set, and result list

pub mod includes;
pub mod resolve;
pub mod traverse;
