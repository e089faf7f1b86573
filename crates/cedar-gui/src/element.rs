#![forbid(unsafe_code)]

//! Element nodes.
//!
//! Elements live in an [`ElementTree`](crate::ElementTree) arena and are
//! addressed by [`ElementId`]. Ids are generational: once an element is
//! destroyed its id never matches a live element again, so a stale parent
//! link reads as "no parent" instead of dangling.
//!
//! The set of kinds is closed:
//!
//! | Kind | Role |
//! |------|------|
//! | `Box` | Solid rectangle in its background color |
//! | `Canvas` | Cells supplied by a [`Draw`] implementation |
//! | `Layer` | Ordered children, each laid out against the layer |
//! | `Table` | Children in `columns x rows` cells |

use std::fmt;

use cedar_core::{Color, Size};
use cedar_render::{Cell, Grid};
use slotmap::new_key_type;

use crate::anchor::Anchor;
use crate::bounds::LocalBounds;
use crate::table::TableLayout;
use crate::update::UpdateState;

new_key_type! {
    /// Handle to an element in an [`ElementTree`](crate::ElementTree).
    pub struct ElementId;
}

/// Where an element's background color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Background {
    /// Use the nearest ancestor's color.
    #[default]
    Inherit,
    Color(Color),
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

/// Produces the cells of a drawable element.
///
/// `draw` must return a grid of exactly `size.width x size.height` cells.
/// It should not have side effects beyond its own bookkeeping: the render
/// pass decides when, and whether, it is called.
pub trait Draw {
    fn draw(&self, size: Size, background: Color) -> Grid<Cell>;
}

impl<F> Draw for F
where
    F: Fn(Size, Color) -> Grid<Cell>,
{
    fn draw(&self, size: Size, background: Color) -> Grid<Cell> {
        self(size, background)
    }
}

/// Kind of an element, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Box,
    Canvas,
    Layer,
    Table,
}

impl ElementKind {
    /// Layers and tables own children; boxes and canvases draw.
    #[inline]
    pub const fn is_layout(self) -> bool {
        matches!(self, Self::Layer | Self::Table)
    }
}

pub(crate) enum Kind {
    Box,
    Canvas(Box<dyn Draw>),
    Layer(Vec<Option<ElementId>>),
    Table(TableLayout),
}

impl Kind {
    pub(crate) fn tag(&self) -> ElementKind {
        match self {
            Self::Box => ElementKind::Box,
            Self::Canvas(_) => ElementKind::Canvas,
            Self::Layer(_) => ElementKind::Layer,
            Self::Table(_) => ElementKind::Table,
        }
    }

    /// Occupied child slots in paint order.
    pub(crate) fn children(&self) -> Vec<ElementId> {
        match self {
            Self::Box | Self::Canvas(_) => Vec::new(),
            Self::Layer(slots) => slots.iter().flatten().copied().collect(),
            Self::Table(table) => table.children(),
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => f.write_str("Box"),
            Self::Canvas(_) => f.write_str("Canvas(..)"),
            Self::Layer(slots) => f.debug_tuple("Layer").field(slots).finish(),
            Self::Table(table) => f.debug_tuple("Table").field(table).finish(),
        }
    }
}

/// One node of the tree.
#[derive(Debug)]
pub struct Element {
    pub(crate) bounds: LocalBounds,
    pub(crate) anchor: Anchor,
    pub(crate) background: Background,
    pub(crate) update: UpdateState,
    pub(crate) parent: Option<ElementId>,
    /// Geometry setters are rejected. Set on a window's root layer.
    pub(crate) locked: bool,
    pub(crate) kind: Kind,
}

impl Element {
    /// New elements fill their parent, centered, and start dirty.
    pub(crate) fn new(kind: Kind) -> Self {
        Self {
            bounds: LocalBounds::default(),
            anchor: Anchor::CENTER,
            background: Background::Inherit,
            update: UpdateState::Relayout,
            parent: None,
            locked: false,
            kind,
        }
    }

    pub fn bounds(&self) -> LocalBounds {
        self.bounds
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn update_state(&self) -> UpdateState {
        self.update
    }

    pub fn kind(&self) -> ElementKind {
        self.kind.tag()
    }

    /// Raw parent link. Use [`ElementTree::parent`](crate::ElementTree::parent)
    /// to also check that the parent is alive.
    pub fn parent_id(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
