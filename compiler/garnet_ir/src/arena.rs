//! Flat storage for one scan's elements.

use std::ops::Index;

use crate::{Element, ElementId, ElementRef, Spanned, Tokens};

/// Owns the scanned source and every element produced from it, in order.
///
/// Tokens refer to trivia and neighbouring tokens by [`ElementId`], so the
/// arena is the only owner and there are no reference cycles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementArena {
    source: String,
    elements: Vec<Element>,
}

impl ElementArena {
    pub fn new(source: impl Into<String>) -> Self {
        ElementArena {
            source: source.into(),
            elements: Vec::new(),
        }
    }

    /// Append an element and return its id.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "element count is bounded by source length, which fits in u32"
    )]
    pub fn push(&mut self, element: Element) -> ElementId {
        let id = ElementId::from_raw(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// The most recently pushed element.
    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Source text covered by `element`.
    pub fn text(&self, element: &Element) -> &str {
        self.source.get(element.span().to_range()).unwrap_or_default()
    }

    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.get(id).map(|_| ElementRef::new(self, id))
    }

    /// Every element, trivia included, in source order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "element count is bounded by source length, which fits in u32"
    )]
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = ElementRef<'_>> + '_ {
        (0..self.elements.len()).map(|i| ElementRef::new(self, ElementId::from_raw(i as u32)))
    }

    /// Walk the elements, attaching trivia to tokens, and yield the tokens.
    ///
    /// Each call starts a fresh pass.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    pub(crate) fn raw(&self) -> &[Element] {
        &self.elements
    }
}

impl Index<ElementId> for ElementArena {
    type Output = Element;

    fn index(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }
}
