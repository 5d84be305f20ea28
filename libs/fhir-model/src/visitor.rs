//! Visitor traversal protocol
//!
//! A synchronous, single-threaded, depth-first walk over the element tree.
//! Every node drives the same sequence from its [`Visitable::accept`]:
//!
//! ```text
//! if visitor.pre_visit(node) {
//!     visitor.visit_start(name, index, node);
//!     if visitor.visit(name, index, node) {
//!         // children, in declaration order:
//!         // id, extension, [modifierExtension], then the type's own fields
//!     }
//!     visitor.visit_end(name, index, node);
//!     visitor.post_visit(node);
//! }
//! ```
//!
//! Returning `false` from `pre_visit` skips the node entirely; returning
//! `false` from `visit` prunes its children. There is no exception-based
//! abort at this layer — pruning is the only cancellation mechanism.
//!
//! Scalar leaves (an element's `id`, a primitive's value) are delivered
//! through the terminal hooks (`visit_string` and friends) rather than the
//! five-hook sequence. Choice-typed fields delegate to the active variant
//! under the declared field name, so a visitor can key off
//! [`Element::type_name`] to recover the runtime type.

use rust_decimal::Decimal;

use crate::element::Element;

/// The five traversal hooks plus terminal hooks for scalar leaves.
///
/// Every method has a pass-through default, so a visitor implements only
/// what it needs — a serializer overrides nearly everything, a node counter
/// one method.
#[allow(unused_variables)]
pub trait Visitor {
    /// Gate for the whole node. Returning `false` skips start/children/end.
    fn pre_visit(&mut self, element: &dyn Element) -> bool {
        true
    }

    /// Called before a node's children. `index` is `Some` for entries of
    /// repeating fields.
    fn visit_start(&mut self, name: &str, index: Option<usize>, element: &dyn Element) {}

    /// Gate for the node's children. Returning `false` prunes the subtree
    /// below this node; start/end/post still run.
    fn visit(&mut self, name: &str, index: Option<usize>, element: &dyn Element) -> bool {
        true
    }

    /// Called after a node's children.
    fn visit_end(&mut self, name: &str, index: Option<usize>, element: &dyn Element) {}

    /// Final hook for the node, after `visit_end`.
    fn post_visit(&mut self, element: &dyn Element) {}

    /// Terminal hook for string-valued scalars (ids, string primitives,
    /// codes, and the string-carried temporal primitives).
    fn visit_string(&mut self, name: &str, value: &str) {}

    /// Terminal hook for boolean scalars.
    fn visit_boolean(&mut self, name: &str, value: bool) {}

    /// Terminal hook for integer scalars (signed and unsigned widen to i64).
    fn visit_integer(&mut self, name: &str, value: i64) {}

    /// Terminal hook for decimal scalars.
    fn visit_decimal(&mut self, name: &str, value: Decimal) {}
}

/// Implemented by every node that can be traversed.
pub trait Visitable: Element {
    /// Runs the five-hook sequence for this node under `name`, recursing
    /// into children in declaration order when permitted by the visitor.
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor);
}

/// Visits an optional child under its field name.
pub(crate) fn accept_opt<T: Visitable>(child: &Option<T>, name: &str, visitor: &mut dyn Visitor) {
    if let Some(child) = child {
        child.accept(name, None, visitor);
    }
}

/// Visits every entry of a repeating child, passing its index.
pub(crate) fn accept_all<T: Visitable>(children: &[T], name: &str, visitor: &mut dyn Visitor) {
    for (index, child) in children.iter().enumerate() {
        child.accept(name, Some(index), visitor);
    }
}

/// Counts the nodes of a tree, one per completed `visit_start`.
///
/// The simplest useful visitor; doubles as the doc example for the
/// traversal contract.
///
/// ```
/// use argent_model::{Address, ElementCounter, Visitable};
///
/// let address = Address::builder().city("Boston").build().unwrap();
/// let mut counter = ElementCounter::default();
/// address.accept("address", None, &mut counter);
/// assert_eq!(counter.count(), 2); // the address and its city
/// ```
#[derive(Debug, Default)]
pub struct ElementCounter {
    count: usize,
}

impl ElementCounter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Visitor for ElementCounter {
    fn visit_start(&mut self, _name: &str, _index: Option<usize>, _element: &dyn Element) {
        self.count += 1;
    }
}
