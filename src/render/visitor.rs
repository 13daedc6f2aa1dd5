//! Visitor pattern for walking presentation trees.
//!
//! Host layers implement [`UnitVisitor`] to draw units without writing
//! their own traversal. The walk is depth-first, top to bottom, and uses an
//! explicit stack.
//!
//! # Example
//!
//! ```
//! use richstack::model::{InlineText, RichTextBlock};
//! use richstack::render::{render_children, walk, InlineUnit, UnitVisitor};
//!
//! struct LineCounter(usize);
//!
//! impl UnitVisitor for LineCounter {
//!     fn visit_inline(&mut self, _unit: &InlineUnit, _depth: usize) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let units = render_children(&[
//!     RichTextBlock::plain_text([InlineText::plain("one")]),
//!     RichTextBlock::quote([RichTextBlock::plain_text([InlineText::plain("two")])]),
//! ]);
//! let mut counter = LineCounter(0);
//! walk(&units, &mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use super::{ContainerUnit, InlineUnit, PresentationUnit};

/// Action returned when entering a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Walk into the container's children.
    #[default]
    Continue,

    /// Skip the container's children and its `leave_container` call.
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the children should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }
}

/// Trait for visiting presentation units.
///
/// All methods do nothing by default. `depth` is the number of enclosing
/// containers: top-level units are at depth 0.
pub trait UnitVisitor {
    /// Called for every inline unit.
    fn visit_inline(&mut self, unit: &InlineUnit, depth: usize) {
        let _ = (unit, depth);
    }

    /// Called before a container's children are visited.
    fn enter_container(&mut self, container: &ContainerUnit, depth: usize) -> VisitorAction {
        let _ = (container, depth);
        VisitorAction::Continue
    }

    /// Called after a container's children have been visited.
    fn leave_container(&mut self, container: &ContainerUnit, depth: usize) {
        let _ = (container, depth);
    }
}

enum Event<'a> {
    Enter(&'a PresentationUnit, usize),
    Leave(&'a ContainerUnit, usize),
}

/// Walk units depth-first in order, calling the visitor for each.
pub fn walk<V: UnitVisitor + ?Sized>(units: &[PresentationUnit], visitor: &mut V) {
    let mut stack: Vec<Event<'_>> = units.iter().rev().map(|u| Event::Enter(u, 0)).collect();

    while let Some(event) = stack.pop() {
        match event {
            Event::Enter(PresentationUnit::Inline(inline), depth) => {
                visitor.visit_inline(inline, depth);
            }
            Event::Enter(PresentationUnit::Container(container), depth) => {
                if visitor.enter_container(container, depth).should_skip() {
                    continue;
                }
                stack.push(Event::Leave(container, depth));
                stack.extend(
                    container
                        .children()
                        .iter()
                        .rev()
                        .map(|child| Event::Enter(child, depth + 1)),
                );
            }
            Event::Leave(container, depth) => visitor.leave_container(container, depth),
        }
    }
}
