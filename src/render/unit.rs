//! Presentation units produced by the renderer.
//!
//! A host display layer consumes these: inline units become one text view
//! built from styled fragments, containers become a vertical stack with a
//! border decoration.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::QuoteDecoration;
use crate::model::TextAttribute;

/// A span of text with its effective style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyledFragment {
    text: String,
    style: TextAttribute,
}

impl StyledFragment {
    /// Create an unstyled fragment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextAttribute::empty(),
        }
    }

    /// Apply an attribute. Applying one twice has no further effect.
    pub fn apply(mut self, attr: TextAttribute) -> Self {
        self.style |= attr;
        self
    }

    /// Make the fragment bold.
    pub fn bold(self) -> Self {
        self.apply(TextAttribute::BOLD)
    }

    /// Make the fragment italic.
    pub fn italic(self) -> Self {
        self.apply(TextAttribute::ITALIC)
    }

    /// Give the fragment heading size.
    pub fn heading(self) -> Self {
        self.apply(TextAttribute::HEADING)
    }

    /// The fragment text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The effective style.
    pub fn style(&self) -> TextAttribute {
        self.style
    }

    /// Check whether the style contains an attribute.
    pub fn has(&self, attr: TextAttribute) -> bool {
        self.style.contains(attr)
    }
}

/// Inline text built by concatenating styled fragments.
///
/// The empty unit is the identity for concatenation, and concatenation
/// keeps left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineUnit {
    fragments: Vec<StyledFragment>,
}

impl InlineUnit {
    /// The empty unit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fragments in reading order.
    pub fn fragments(&self) -> &[StyledFragment] {
        &self.fragments
    }

    /// Check if the unit has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Visible text, read left to right.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(StyledFragment::text).collect()
    }

    /// Append a fragment.
    pub fn push(&mut self, fragment: StyledFragment) {
        self.fragments.push(fragment);
    }

    /// Collapse neighbouring fragments that share a style.
    pub fn merged(self) -> Self {
        let mut fragments: Vec<StyledFragment> = Vec::with_capacity(self.fragments.len());
        for fragment in self.fragments {
            match fragments.last_mut() {
                Some(last) if last.style == fragment.style => last.text.push_str(&fragment.text),
                _ => fragments.push(fragment),
            }
        }
        Self { fragments }
    }
}

impl From<StyledFragment> for InlineUnit {
    fn from(fragment: StyledFragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }
}

impl Add for InlineUnit {
    type Output = InlineUnit;

    fn add(mut self, rhs: InlineUnit) -> InlineUnit {
        self += rhs;
        self
    }
}

impl AddAssign for InlineUnit {
    fn add_assign(&mut self, rhs: InlineUnit) {
        self.fragments.extend(rhs.fragments);
    }
}

impl AddAssign<StyledFragment> for InlineUnit {
    fn add_assign(&mut self, rhs: StyledFragment) {
        self.push(rhs);
    }
}

impl Extend<StyledFragment> for InlineUnit {
    fn extend<I: IntoIterator<Item = StyledFragment>>(&mut self, iter: I) {
        self.fragments.extend(iter);
    }
}

impl FromIterator<StyledFragment> for InlineUnit {
    fn from_iter<I: IntoIterator<Item = StyledFragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

/// How a container is decorated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Decoration {
    /// Bordered, padded quote
    Quote(QuoteDecoration),
}

/// A vertical stack of nested units.
///
/// Dropping never recurses into nested containers; the derived comparison,
/// hashing, cloning and debug impls do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerUnit {
    decoration: Decoration,
    children: Vec<PresentationUnit>,
}

impl ContainerUnit {
    /// Create a quote container.
    pub fn quote(children: Vec<PresentationUnit>, decoration: QuoteDecoration) -> Self {
        Self {
            decoration: Decoration::Quote(decoration),
            children,
        }
    }

    /// The container decoration.
    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Children, top to bottom.
    pub fn children(&self) -> &[PresentationUnit] {
        &self.children
    }

    /// Check if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl Drop for ContainerUnit {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(unit) = pending.pop() {
            if let PresentationUnit::Container(mut container) = unit {
                pending.append(&mut container.children);
            }
        }
    }
}

/// A block-level node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationUnit {
    /// Single text element composed of styled fragments
    Inline(InlineUnit),

    /// Nested stack of further units
    Container(ContainerUnit),
}

impl PresentationUnit {
    /// Get the inline unit, if this is one.
    pub fn as_inline(&self) -> Option<&InlineUnit> {
        match self {
            PresentationUnit::Inline(inline) => Some(inline),
            PresentationUnit::Container(_) => None,
        }
    }

    /// Get the container, if this is one.
    pub fn as_container(&self) -> Option<&ContainerUnit> {
        match self {
            PresentationUnit::Container(container) => Some(container),
            PresentationUnit::Inline(_) => None,
        }
    }

    /// Visible text of every inline unit in order, one per line.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        let mut stack = vec![self];
        while let Some(unit) = stack.pop() {
            match unit {
                PresentationUnit::Inline(inline) => lines.push(inline.plain_text()),
                PresentationUnit::Container(container) => {
                    stack.extend(container.children.iter().rev());
                }
            }
        }
        lines.join("\n")
    }
}
