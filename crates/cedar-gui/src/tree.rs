#![forbid(unsafe_code)]

//! Arena-backed element tree.
//!
//! # Ownership
//!
//! The tree owns every element. Containers own their children through the
//! ids in their slots; a child's `parent` is a plain back-link that is
//! checked for liveness on every read. Removing a child destroys its whole
//! subtree.
//!
//! # Dirty propagation
//!
//! Every setter raises the element's [`UpdateState`] and raises each
//! ancestor to [`UpdateState::Relayout`]. A render pass then walks down:
//!
//! ```text
//! update = force || state != Clean
//! drawable: draw and blit if update
//! layout:   render each child with force = update
//! state    = Clean
//! ```
//!
//! so an untouched subtree under an untouched parent costs no draw calls.
//!
//! Moving or resizing an attached element, like removing one, leaves its
//! old cells on screen; those changes set [`needs_clear`](ElementTree::needs_clear)
//! so the next frame starts from a blank surface.

use std::ops::Range;

use cedar_core::{Color, Rect, Size};
use cedar_render::{Cell, Grid, Surface, blit};
use slotmap::SlotMap;

use crate::anchor::Anchor;
use crate::bounds::LocalBounds;
use crate::config::LayoutConfig;
use crate::dimension::DimensionValue;
use crate::element::{Background, Draw, Element, ElementId, Kind};
use crate::error::{GuiError, Result};
use crate::update::UpdateState;

/// Work done by one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Drawable elements that were (re)painted.
    pub drawn: usize,
    /// Cells written to the surface.
    pub cells: usize,
}

/// Owner of all elements.
#[derive(Debug, Default)]
pub struct ElementTree {
    nodes: SlotMap<ElementId, Element>,
    config: LayoutConfig,
    /// Set when elements left the screen; the next frame starts from a
    /// cleared surface.
    needs_clear: bool,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the layout settings. Every element is marked for relayout.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.needs_clear = true;
        for node in self.nodes.values_mut() {
            node.update = UpdateState::Relayout;
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id)
    }

    /// Like [`get`](Self::get), failing with [`GuiError::StaleElement`].
    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.nodes.get(id).ok_or(GuiError::StaleElement(id))
    }

    // --- creation -------------------------------------------------------
    //
    // New elements belong to the tree, not to a parent. One that is never
    // attached stays allocated until `destroy`; see `detached`.

    /// A detached solid box.
    pub fn create_box(&mut self) -> ElementId {
        self.insert(Kind::Box)
    }

    /// A detached empty layer.
    pub fn create_layer(&mut self) -> ElementId {
        self.insert(Kind::Layer(Vec::new()))
    }

    /// A detached canvas painted by `drawer`.
    pub fn create_canvas(&mut self, drawer: impl Draw + 'static) -> ElementId {
        self.insert(Kind::Canvas(Box::new(drawer)))
    }

    pub(crate) fn insert(&mut self, kind: Kind) -> ElementId {
        let id = self.nodes.insert(Element::new(kind));
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, "element created");
        id
    }

    /// A detached layer that always fills its parent and rejects geometry
    /// setters.
    pub(crate) fn insert_locked_layer(&mut self) -> ElementId {
        let mut element = Element::new(Kind::Layer(Vec::new()));
        element.anchor = Anchor::TOP_LEFT;
        element.locked = true;
        self.nodes.insert(element)
    }

    // --- queries --------------------------------------------------------

    /// Live parent of `id`. A destroyed parent reads as `None`.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes
            .get(id)
            .and_then(|node| node.parent)
            .filter(|parent| self.nodes.contains_key(*parent))
    }

    /// Occupied child slots in paint order.
    pub fn children(&self, parent: ElementId) -> Result<Vec<ElementId>> {
        Ok(self.layout_node(parent)?.kind.children())
    }

    pub fn has_children(&self, parent: ElementId) -> Result<bool> {
        Ok(!self.children(parent)?.is_empty())
    }

    /// Number of child slots, occupied or not.
    pub fn slot_count(&self, parent: ElementId) -> Result<usize> {
        match &self.layout_node(parent)?.kind {
            Kind::Layer(slots) => Ok(slots.len()),
            Kind::Table(table) => Ok(table.slot_count()),
            Kind::Box | Kind::Canvas(_) => Err(GuiError::NotALayout(parent)),
        }
    }

    /// Child in layer slot `index`. Tables are read with
    /// [`cell`](Self::cell).
    pub fn child_at(&self, parent: ElementId, index: usize) -> Result<Option<ElementId>> {
        let slots = self.layer_slots(parent)?;
        slots.get(index).copied().ok_or(GuiError::OutOfRange {
            index,
            len: slots.len(),
        })
    }

    /// Effective background: the element's own color, else the nearest
    /// ancestor's, else the configured default.
    pub fn resolved_background(&self, id: ElementId) -> Result<Color> {
        let mut current = self.element(id)?;
        loop {
            if let Background::Color(color) = current.background {
                return Ok(color);
            }
            match current.parent.and_then(|parent| self.nodes.get(parent)) {
                Some(parent) => current = parent,
                None => return Ok(self.config.default_background),
            }
        }
    }

    /// Screen rectangle of `id` when its topmost ancestor is laid out
    /// against `viewport`.
    pub fn resolved_bounds(&self, id: ElementId, viewport: Rect) -> Result<Rect> {
        let mut path = vec![id];
        let mut current = self.element(id)?;
        while let Some(parent) = current.parent.and_then(|p| self.nodes.get(p).map(|n| (p, n))) {
            path.push(parent.0);
            current = parent.1;
        }

        let rounding = self.config.center_rounding;
        let mut frame = viewport;
        let mut parent: Option<&Element> = None;
        for &step in path.iter().rev() {
            let node = self.element(step)?;
            if let Some(Kind::Table(table)) = parent.map(|p| &p.kind) {
                frame = table.frame_of(step, frame).unwrap_or(frame);
            }
            frame = node.bounds.resolve(node.anchor, frame, rounding);
            parent = Some(node);
        }
        Ok(frame)
    }

    /// Live elements with no parent, window roots excluded.
    ///
    /// Created or detached elements are kept until they are attached or
    /// destroyed, so a long-running program that detaches elements should
    /// destroy the ones it no longer needs.
    pub fn detached(&self) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| !node.locked && node.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Whether the next frame must start from a cleared surface.
    pub fn needs_clear(&self) -> bool {
        self.needs_clear
    }

    pub(crate) fn acknowledge_clear(&mut self) {
        self.needs_clear = false;
    }

    pub(crate) fn request_clear(&mut self) {
        self.needs_clear = true;
    }

    // --- element setters ------------------------------------------------

    pub fn set_bounds(&mut self, id: ElementId, bounds: LocalBounds) -> Result<()> {
        self.set_geometry(id, |node| node.bounds = bounds)
    }

    pub fn set_position(
        &mut self,
        id: ElementId,
        x: impl Into<DimensionValue>,
        y: impl Into<DimensionValue>,
    ) -> Result<()> {
        let (x, y) = (x.into(), y.into());
        self.set_geometry(id, |node| {
            node.bounds.x = x;
            node.bounds.y = y;
        })
    }

    pub fn set_size(
        &mut self,
        id: ElementId,
        width: impl Into<DimensionValue>,
        height: impl Into<DimensionValue>,
    ) -> Result<()> {
        let (width, height) = (width.into(), height.into());
        self.set_geometry(id, |node| {
            node.bounds.width = width;
            node.bounds.height = height;
        })
    }

    pub fn set_anchor(&mut self, id: ElementId, anchor: Anchor) -> Result<()> {
        self.set_geometry(id, |node| node.anchor = anchor)
    }

    /// Recolor. Marks the element as having new data, not a new shape.
    pub fn set_background(&mut self, id: ElementId, background: impl Into<Background>) -> Result<()> {
        let background = background.into();
        self.node_mut(id)?.background = background;
        self.mark(id, UpdateState::NewData);
        Ok(())
    }

    /// Swap the painter of a canvas.
    pub fn set_canvas(&mut self, id: ElementId, drawer: impl Draw + 'static) -> Result<()> {
        let node = self.node_mut(id)?;
        match &mut node.kind {
            Kind::Canvas(current) => *current = Box::new(drawer),
            _ => return Err(GuiError::InvalidArgument("element is not a canvas")),
        }
        self.mark(id, UpdateState::NewData);
        Ok(())
    }

    /// Request a redraw of `id` on the next frame without changing it.
    pub fn invalidate(&mut self, id: ElementId) -> Result<()> {
        self.element(id)?;
        self.mark(id, UpdateState::NewData);
        Ok(())
    }

    fn set_geometry(&mut self, id: ElementId, apply: impl FnOnce(&mut Element)) -> Result<()> {
        let node = self.node_mut(id)?;
        if node.locked {
            return Err(GuiError::InvalidArgument(
                "a window root always fills the window",
            ));
        }
        apply(node);
        // The old footprint is only erased by a cleared frame.
        if node.parent.is_some() {
            self.needs_clear = true;
        }
        self.mark(id, UpdateState::Relayout);
        Ok(())
    }

    // --- container operations -------------------------------------------

    /// Append `child` to a layer. A child that already has a parent is
    /// moved.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.check_attach(parent, child)?;
        self.layer_slots(parent)?;
        self.unlink(child);
        self.layer_slots_mut(parent)?.push(Some(child));
        self.link(parent, child);
        Ok(())
    }

    /// Insert `child` at `index`, shifting later children up.
    pub fn insert_child(&mut self, parent: ElementId, index: usize, child: ElementId) -> Result<()> {
        self.check_attach(parent, child)?;
        let slots = self.layer_slots(parent)?;
        let moving_within = slots.contains(&Some(child));
        let len = slots.len() - usize::from(moving_within);
        if index > len {
            return Err(GuiError::OutOfRange { index, len });
        }
        self.unlink(child);
        self.layer_slots_mut(parent)?.insert(index, Some(child));
        self.link(parent, child);
        Ok(())
    }

    /// Put `child` in layer slot `index`, destroying the previous occupant.
    /// Tables are filled with [`set_cell`](Self::set_cell).
    pub fn set_child(&mut self, parent: ElementId, index: usize, child: ElementId) -> Result<()> {
        self.check_attach(parent, child)?;
        let slots = self.layer_slots(parent)?;
        let len = slots.len();
        let Some(&occupant) = slots.get(index) else {
            return Err(GuiError::OutOfRange { index, len });
        };
        if occupant == Some(child) {
            self.mark(child, UpdateState::Relayout);
            return Ok(());
        }
        if slots.contains(&Some(child)) {
            return Err(GuiError::InvalidArgument(
                "element already occupies another slot of this layer",
            ));
        }

        self.unlink(child);
        let previous = self
            .layer_slots_mut(parent)?
            .get_mut(index)
            .and_then(|slot| slot.replace(child));
        if let Some(previous) = previous {
            self.destroy_subtree(previous);
            self.needs_clear = true;
        }
        self.link(parent, child);
        Ok(())
    }

    /// Remove and destroy `child`.
    ///
    /// Later layer children shift down one index; a table cell is left
    /// empty. Fails with [`GuiError::NotFound`] if `child` is not currently
    /// a child of `parent`, including when it was already removed.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        let found = match &mut self.layout_node_mut(parent)?.kind {
            Kind::Layer(slots) => match slots.iter().position(|slot| *slot == Some(child)) {
                Some(pos) => {
                    slots.remove(pos);
                    true
                }
                None => false,
            },
            Kind::Table(table) => table.take_child(child).is_some(),
            Kind::Box | Kind::Canvas(_) => false,
        };
        if !found {
            return Err(GuiError::NotFound { parent, child });
        }

        self.destroy_subtree(child);
        self.needs_clear = true;
        self.mark(parent, UpdateState::Relayout);
        #[cfg(feature = "tracing")]
        tracing::debug!(?parent, ?child, "child removed");
        Ok(())
    }

    /// Remove and destroy the layer slots in `range`.
    pub fn remove_children(&mut self, parent: ElementId, range: Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(GuiError::InvalidArgument("range start exceeds its end"));
        }
        let slots = self.layer_slots_mut(parent)?;
        if range.end > slots.len() {
            return Err(GuiError::OutOfRange {
                index: range.end,
                len: slots.len(),
            });
        }
        let removed: Vec<ElementId> = slots.drain(range).flatten().collect();
        self.destroy_all(removed);
        self.mark(parent, UpdateState::Relayout);
        Ok(())
    }

    /// Grow with empty slots or shrink, destroying children past `len`.
    pub fn resize_children(&mut self, parent: ElementId, len: usize) -> Result<()> {
        let slots = self.layer_slots_mut(parent)?;
        let removed: Vec<ElementId> = if len < slots.len() {
            slots.drain(len..).flatten().collect()
        } else {
            slots.resize(len, None);
            Vec::new()
        };
        self.destroy_all(removed);
        self.mark(parent, UpdateState::Relayout);
        Ok(())
    }

    /// Unlink `child` from its parent without destroying it.
    ///
    /// The element stays in the tree until it is attached again or
    /// [`destroy`](Self::destroy)ed.
    pub fn detach(&mut self, child: ElementId) -> Result<()> {
        self.element(child)?;
        self.unlink(child);
        Ok(())
    }

    /// Destroy `id` and its subtree, unlinking it from its parent first.
    pub fn destroy(&mut self, id: ElementId) -> Result<()> {
        if self.element(id)?.locked {
            return Err(GuiError::InvalidArgument("a window root cannot be destroyed"));
        }
        self.unlink(id);
        self.destroy_subtree(id);
        self.needs_clear = true;
        Ok(())
    }

    // --- rendering ------------------------------------------------------

    /// Render `id` and its subtree laid out against `parent`, painting only
    /// cells inside `clip`.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        id: ElementId,
        parent: Rect,
        force: bool,
        clip: Rect,
        surface: &mut S,
    ) -> Result<RenderStats> {
        let background = match self.parent(id) {
            Some(parent) => self.resolved_background(parent)?,
            None => self.config.default_background,
        };
        let mut stats = RenderStats::default();
        self.render_node(id, parent, background, force, clip, surface, &mut stats)?;
        Ok(stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_node<S: Surface + ?Sized>(
        &mut self,
        id: ElementId,
        parent: Rect,
        parent_background: Color,
        force: bool,
        clip: Rect,
        surface: &mut S,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let node = self.element(id)?;
        let update = force || node.update.is_dirty();
        let rect = node
            .bounds
            .resolve(node.anchor, parent, self.config.center_rounding);
        let background = match node.background {
            Background::Inherit => parent_background,
            Background::Color(color) => color,
        };

        let frames = match &node.kind {
            Kind::Box => {
                if update {
                    stats.drawn += 1;
                    if let Some(visible) = rect.intersection(&clip) {
                        let grid = Grid::new(
                            visible.width as usize,
                            visible.height as usize,
                            Cell::blank(background),
                        );
                        stats.cells += blit(&grid, visible.origin(), clip, surface)?;
                    }
                }
                None
            }
            Kind::Canvas(drawer) => {
                if update {
                    stats.drawn += 1;
                    let grid = drawer.draw(rect.size(), background);
                    if grid.dimensions() != (rect.width as usize, rect.height as usize) {
                        return Err(GuiError::DrawSize {
                            expected: rect.size(),
                            actual: grid_size(&grid),
                        });
                    }
                    stats.cells += blit(&grid, rect.origin(), clip, surface)?;
                }
                None
            }
            Kind::Layer(_) | Kind::Table(_) => Some(node.kind.child_frames(rect)),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?id, ?rect, update, "render element");

        for (child, frame) in frames.into_iter().flatten() {
            self.render_node(child, frame, background, update, clip, surface, stats)?;
        }

        if let Some(node) = self.nodes.get_mut(id) {
            node.update = UpdateState::Clean;
        }
        Ok(())
    }

    // --- internals ------------------------------------------------------

    pub(crate) fn node_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.nodes.get_mut(id).ok_or(GuiError::StaleElement(id))
    }

    pub(crate) fn layout_node(&self, id: ElementId) -> Result<&Element> {
        let node = self.element(id)?;
        if node.kind().is_layout() {
            Ok(node)
        } else {
            Err(GuiError::NotALayout(id))
        }
    }

    pub(crate) fn layout_node_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        let node = self.node_mut(id)?;
        if node.kind().is_layout() {
            Ok(node)
        } else {
            Err(GuiError::NotALayout(id))
        }
    }

    fn layer_slots(&self, id: ElementId) -> Result<&Vec<Option<ElementId>>> {
        match &self.layout_node(id)?.kind {
            Kind::Layer(slots) => Ok(slots),
            _ => Err(GuiError::InvalidArgument(
                "tables are addressed by cell, not by index",
            )),
        }
    }

    fn layer_slots_mut(&mut self, id: ElementId) -> Result<&mut Vec<Option<ElementId>>> {
        match &mut self.layout_node_mut(id)?.kind {
            Kind::Layer(slots) => Ok(slots),
            _ => Err(GuiError::InvalidArgument(
                "tables are addressed by cell, not by index",
            )),
        }
    }

    /// Validate that `child` may be placed under `parent`.
    pub(crate) fn check_attach(&self, parent: ElementId, child: ElementId) -> Result<()> {
        self.layout_node(parent)?;
        if self.element(child)?.locked {
            return Err(GuiError::InvalidArgument(
                "a window root cannot become a child",
            ));
        }
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return Err(GuiError::InvalidArgument(
                    "an element cannot be placed inside itself",
                ));
            }
            current = self.nodes.get(id).and_then(|node| node.parent);
        }
        Ok(())
    }

    /// Record `parent` as the owner of `child` and mark both dirty.
    pub(crate) fn link(&mut self, parent: ElementId, child: ElementId) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        self.mark(child, UpdateState::Relayout);
    }

    /// Remove `child` from its parent's slots, if it has a parent.
    pub(crate) fn unlink(&mut self, child: ElementId) {
        let Some(parent) = self.nodes.get(child).and_then(|node| node.parent) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            match &mut node.kind {
                Kind::Layer(slots) => {
                    if let Some(pos) = slots.iter().position(|slot| *slot == Some(child)) {
                        slots.remove(pos);
                    }
                }
                Kind::Table(table) => {
                    table.take_child(child);
                }
                Kind::Box | Kind::Canvas(_) => {}
            }
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        self.needs_clear = true;
        self.mark(parent, UpdateState::Relayout);
    }

    /// Raise `id` to `state` and every ancestor to `Relayout`.
    pub(crate) fn mark(&mut self, id: ElementId, state: UpdateState) {
        let mut current = Some(id);
        let mut state = state;
        while let Some(id) = current {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };
            node.update = node.update.raise(state);
            current = node.parent;
            state = UpdateState::Relayout;
        }
    }

    /// Drop `id` and everything below it from the arena.
    ///
    /// The caller must already have removed `id` from its parent's slots.
    pub(crate) fn destroy_subtree(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.kind.children());
            }
        }
    }

    pub(crate) fn destroy_all(&mut self, ids: Vec<ElementId>) {
        if ids.is_empty() {
            return;
        }
        for id in ids {
            self.destroy_subtree(id);
        }
        self.needs_clear = true;
    }
}

fn grid_size(grid: &Grid<Cell>) -> Size {
    Size::new(
        i32::try_from(grid.width()).unwrap_or(i32::MAX),
        i32::try_from(grid.height()).unwrap_or(i32::MAX),
    )
}

impl Kind {
    /// Each child with the rectangle it is laid out against.
    pub(crate) fn child_frames(&self, rect: Rect) -> Vec<(ElementId, Rect)> {
        match self {
            Kind::Layer(slots) => slots.iter().flatten().map(|&id| (id, rect)).collect(),
            Kind::Table(table) => table.cell_frames(rect),
            Kind::Box | Kind::Canvas(_) => Vec::new(),
        }
    }
}
