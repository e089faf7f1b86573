#![forbid(unsafe_code)]

//! Top-level container bound to a surface.
//!
//! A [`Window`] always fills its surface, so it has no position, size or
//! anchor methods. Its children hang off a private root layer that the
//! element setters refuse to move.
//!
//! # Frame
//!
//! 1. Read the physical size; clamp it by the configured limits.
//! 2. A size different from the previous frame, or pending removals,
//!    clears the surface and forces every element to redraw.
//! 3. Render the root layer against `{0, 0, width, height}`, clipped to the
//!    physical size.
//! 4. Flush.

use std::ops::Range;

use cedar_core::{Rect, Size};
use cedar_render::Surface;

use crate::config::WindowConfig;
use crate::element::{Background, ElementId};
use crate::error::Result;
use crate::tree::ElementTree;

/// What one call to [`Window::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// The physical size changed since the previous frame (always true on
    /// the first frame).
    pub resized: bool,
    /// The surface was cleared before painting.
    pub cleared: bool,
    /// Every element was forced to redraw.
    pub forced: bool,
    /// Drawable elements painted.
    pub drawn: usize,
    /// Cells written.
    pub cells: usize,
}

/// The root of a rendered element tree.
pub struct Window<S: Surface> {
    tree: ElementTree,
    root: ElementId,
    surface: S,
    config: WindowConfig,
    last_size: Option<Size>,
}

impl<S: Surface> Window<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, WindowConfig::default())
    }

    pub fn with_config(surface: S, config: WindowConfig) -> Self {
        let mut tree = ElementTree::with_config(config.layout);
        let root = tree.insert_locked_layer();
        Self {
            tree,
            root,
            surface,
            config,
            last_size: None,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Create elements and arrange grandchildren through the tree.
    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Physical size seen by the last completed frame.
    pub fn last_size(&self) -> Option<Size> {
        self.last_size
    }

    /// Background inherited by children that do not set their own.
    pub fn set_background(&mut self, background: impl Into<Background>) -> Result<()> {
        self.tree.set_background(self.root, background)
    }

    // --- children -------------------------------------------------------

    pub fn add_child(&mut self, child: ElementId) -> Result<()> {
        self.tree.add_child(self.root, child)
    }

    pub fn insert_child(&mut self, index: usize, child: ElementId) -> Result<()> {
        self.tree.insert_child(self.root, index, child)
    }

    pub fn set_child(&mut self, index: usize, child: ElementId) -> Result<()> {
        self.tree.set_child(self.root, index, child)
    }

    pub fn remove_child(&mut self, child: ElementId) -> Result<()> {
        self.tree.remove_child(self.root, child)
    }

    pub fn remove_children(&mut self, range: Range<usize>) -> Result<()> {
        self.tree.remove_children(self.root, range)
    }

    pub fn resize_children(&mut self, len: usize) -> Result<()> {
        self.tree.resize_children(self.root, len)
    }

    pub fn child_at(&self, index: usize) -> Result<Option<ElementId>> {
        self.tree.child_at(self.root, index)
    }

    pub fn children(&self) -> Result<Vec<ElementId>> {
        self.tree.children(self.root)
    }

    pub fn has_children(&self) -> Result<bool> {
        self.tree.has_children(self.root)
    }

    // --- frame ----------------------------------------------------------

    /// Size the tree is laid out against: the physical size, clamped.
    fn layout_size(&self, physical: Size) -> Size {
        match self.config.size_limits {
            Some(limits) => limits.clamp(physical),
            None => physical,
        }
    }

    /// Screen rectangle of `id` at the surface's current size.
    pub fn resolved_bounds(&self, id: ElementId) -> Result<Rect> {
        let physical = self.surface.size()?.non_negative();
        let viewport = Rect::from_size(self.layout_size(physical));
        self.tree.resolved_bounds(id, viewport)
    }

    /// Paint one frame.
    pub fn render(&mut self) -> Result<FrameStats> {
        let physical = self.surface.size()?.non_negative();
        let extent = self.layout_size(physical);
        let resized = self.last_size != Some(physical);
        let pending_clear = self.tree.needs_clear();
        let forced = resized || pending_clear;
        let cleared = pending_clear || (resized && self.config.clear_on_resize);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "cedar.frame",
            width = physical.width,
            height = physical.height,
            resized,
            cleared
        )
        .entered();

        if cleared {
            self.surface.clear()?;
        }
        let stats = self.tree.render(
            self.root,
            Rect::from_size(extent),
            forced,
            Rect::from_size(physical),
            &mut self.surface,
        )?;
        self.surface.flush()?;

        self.tree.acknowledge_clear();
        self.last_size = Some(physical);

        #[cfg(feature = "tracing")]
        tracing::trace!(drawn = stats.drawn, cells = stats.cells, "frame presented");

        Ok(FrameStats {
            resized,
            cleared,
            forced,
            drawn: stats.drawn,
            cells: stats.cells,
        })
    }
}
