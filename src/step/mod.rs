//! The stepping protocol: push-style traversal shared by every container in this crate.
//!
//! A traversal hands each element to a caller-supplied step. There are four shapes of step, split
//! by whether they may replace the element in place and whether they may stop the traversal early:
//!
//! | Shape | Receives | Returns |
//! |-|-|-|
//! | [`Visit`] | `&T` | `()` |
//! | [`VisitMut`] | `&mut T` | `()` |
//! | [`VisitBreak`] | `&T` | [`Signal`] |
//! | [`VisitMutBreak`] | `&mut T` | [`Signal`] |
//!
//! Closures with the matching signature implement these traits, but so can any struct, which
//! allows zero-sized or stateful step types. Every traversal method is generic over its step, so
//! traversals are monomorphized and never allocate or dispatch dynamically.
//!
//! Containers implement only the breaking shapes ([`Stepper::step_break`] and
//! [`StepperMut::step_mut_break`]); the plain shapes are derived from them through the adapters in
//! this module, which lift a weaker step into a stronger one.
//!
//! Edges are visited as a pair of values, so graph edge traversals use [`VisitEdge`] and
//! [`VisitEdgeBreak`] instead.

mod adapters;
mod signal;
mod stepper;
mod visit;

mod tests;

pub use adapters::*;
pub use signal::*;
pub use stepper::*;
pub use visit::*;
