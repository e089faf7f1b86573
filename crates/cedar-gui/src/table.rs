#![forbid(unsafe_code)]

//! Grid-addressed container.
//!
//! A table holds `columns x rows` cells, each empty or holding one child.
//! Column widths and row heights are [`DimensionValue`]s resolved against the
//! table's own extent and floored at zero. Cell `(x, y)` starts after the
//! columns left of it and the rows above it; its rectangle is the frame its
//! child is laid out against.
//!
//! ```text
//!          col 0   col 1
//!        +-------+-----+
//!  row 0 | (0,0) |(1,0)|
//!        +-------+-----+
//!  row 1 | (0,1) |(1,1)|
//!        +-------+-----+
//! ```

use cedar_core::Rect;
use cedar_render::Grid;

use crate::dimension::DimensionValue;
use crate::element::{ElementId, Kind};
use crate::error::{GuiError, Result};
use crate::tree::ElementTree;
use crate::update::UpdateState;

/// Cell storage and track sizes of a table element.
#[derive(Debug, Clone)]
pub(crate) struct TableLayout {
    cells: Grid<Option<ElementId>>,
    column_sizes: Vec<DimensionValue>,
    row_sizes: Vec<DimensionValue>,
}

impl TableLayout {
    pub(crate) fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: Grid::new(columns, rows, None),
            column_sizes: vec![DimensionValue::ZERO; columns],
            row_sizes: vec![DimensionValue::ZERO; rows],
        }
    }

    pub(crate) fn columns(&self) -> usize {
        self.cells.width()
    }

    pub(crate) fn rows(&self) -> usize {
        self.cells.height()
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.columns() * self.rows()
    }

    fn cell_error(&self, x: usize, y: usize) -> GuiError {
        GuiError::CellOutOfRange {
            x,
            y,
            columns: self.columns(),
            rows: self.rows(),
        }
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> Result<Option<ElementId>> {
        self.cells
            .get(x, y)
            .copied()
            .ok_or_else(|| self.cell_error(x, y))
    }

    pub(crate) fn position_of(&self, child: ElementId) -> Option<(usize, usize)> {
        self.cells
            .enumerate()
            .find(|(_, slot)| **slot == Some(child))
            .map(|(pos, _)| pos)
    }

    /// Occupied cells, row by row.
    pub(crate) fn children(&self) -> Vec<ElementId> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Empty the cell holding `child`, returning where it was.
    pub(crate) fn take_child(&mut self, child: ElementId) -> Option<(usize, usize)> {
        let (x, y) = self.position_of(child)?;
        if let Some(slot) = self.cells.get_mut(x, y) {
            *slot = None;
        }
        Some((x, y))
    }

    /// Store `child` in `(x, y)`, returning the previous occupant.
    fn put(&mut self, x: usize, y: usize, child: Option<ElementId>) -> Result<Option<ElementId>> {
        let err = self.cell_error(x, y);
        self.cells.replace(x, y, child).map_err(|_| err)
    }

    /// Change the grid, returning the children that no longer fit.
    fn resize(&mut self, columns: usize, rows: usize) -> Vec<ElementId> {
        let evicted = self
            .cells
            .enumerate()
            .filter(|((x, y), _)| *x >= columns || *y >= rows)
            .filter_map(|(_, slot)| *slot)
            .collect();
        self.cells.resize(columns, rows, None);
        self.column_sizes.resize(columns, DimensionValue::ZERO);
        self.row_sizes.resize(rows, DimensionValue::ZERO);
        evicted
    }

    /// Rectangle of cell `(x, y)` inside a table resolved to `rect`.
    pub(crate) fn cell_frame(&self, x: usize, y: usize, rect: Rect) -> Rect {
        let (left, width) = track(&self.column_sizes, x, rect.x, rect.width);
        let (top, height) = track(&self.row_sizes, y, rect.y, rect.height);
        Rect::new(left, top, width, height)
    }

    pub(crate) fn frame_of(&self, child: ElementId, rect: Rect) -> Option<Rect> {
        self.position_of(child)
            .map(|(x, y)| self.cell_frame(x, y, rect))
    }

    /// Every child with its cell rectangle, row by row.
    pub(crate) fn cell_frames(&self, rect: Rect) -> Vec<(ElementId, Rect)> {
        let columns = tracks(&self.column_sizes, rect.x, rect.width);
        let rows = tracks(&self.row_sizes, rect.y, rect.height);
        self.cells
            .enumerate()
            .filter_map(|((x, y), slot)| {
                let child = (*slot)?;
                let (left, width) = columns[x];
                let (top, height) = rows[y];
                Some((child, Rect::new(left, top, width, height)))
            })
            .collect()
    }
}

/// `(start, length)` of every track laid end to end from `origin`.
fn tracks(sizes: &[DimensionValue], origin: i32, extent: i32) -> Vec<(i32, i32)> {
    let mut start = origin;
    sizes
        .iter()
        .map(|size| {
            let length = size.resolve(extent).max(0);
            let span = (start, length);
            start = start.saturating_add(length);
            span
        })
        .collect()
}

fn track(sizes: &[DimensionValue], index: usize, origin: i32, extent: i32) -> (i32, i32) {
    let start = sizes[..index.min(sizes.len())]
        .iter()
        .fold(origin, |acc, size| {
            acc.saturating_add(size.resolve(extent).max(0))
        });
    let length = sizes
        .get(index)
        .map_or(0, |size| size.resolve(extent).max(0));
    (start, length)
}

impl ElementTree {
    /// A detached `columns x rows` table with every cell empty and every
    /// track sized `Absolute(0)`.
    pub fn create_table(&mut self, columns: usize, rows: usize) -> ElementId {
        self.insert(Kind::Table(TableLayout::new(columns, rows)))
    }

    fn table(&self, id: ElementId) -> Result<&TableLayout> {
        match &self.layout_node(id)?.kind {
            Kind::Table(table) => Ok(table),
            _ => Err(GuiError::InvalidArgument("element is not a table")),
        }
    }

    fn table_mut(&mut self, id: ElementId) -> Result<&mut TableLayout> {
        match &mut self.layout_node_mut(id)?.kind {
            Kind::Table(table) => Ok(table),
            _ => Err(GuiError::InvalidArgument("element is not a table")),
        }
    }

    /// `(columns, rows)`.
    pub fn table_dimensions(&self, table: ElementId) -> Result<(usize, usize)> {
        let table = self.table(table)?;
        Ok((table.columns(), table.rows()))
    }

    /// Child in cell `(x, y)`.
    pub fn cell(&self, table: ElementId, x: usize, y: usize) -> Result<Option<ElementId>> {
        self.table(table)?.get(x, y)
    }

    /// Place `child` in cell `(x, y)`, destroying the previous occupant.
    ///
    /// A child already in another cell of the same table moves, leaving its
    /// old cell empty.
    pub fn set_cell(&mut self, table: ElementId, x: usize, y: usize, child: ElementId) -> Result<()> {
        self.check_attach(table, child)?;
        let occupant = self.table(table)?.get(x, y)?;
        if occupant == Some(child) {
            self.mark(child, UpdateState::Relayout);
            return Ok(());
        }

        self.unlink(child);
        if let Some(previous) = self.table_mut(table)?.put(x, y, Some(child))? {
            self.destroy_all(vec![previous]);
        }
        self.link(table, child);
        Ok(())
    }

    /// Destroy the child in cell `(x, y)`, if any.
    pub fn clear_cell(&mut self, table: ElementId, x: usize, y: usize) -> Result<()> {
        if let Some(previous) = self.table_mut(table)?.put(x, y, None)? {
            self.destroy_all(vec![previous]);
            self.mark(table, UpdateState::Relayout);
        }
        Ok(())
    }

    /// Change the grid to `columns x rows`.
    ///
    /// Children whose cell still exists keep it; the rest are destroyed.
    /// New tracks are sized `Absolute(0)`.
    pub fn resize_table(&mut self, table: ElementId, columns: usize, rows: usize) -> Result<()> {
        let evicted = self.table_mut(table)?.resize(columns, rows);
        self.destroy_all(evicted);
        self.mark(table, UpdateState::Relayout);
        Ok(())
    }

    pub fn column_size(&self, table: ElementId, x: usize) -> Result<DimensionValue> {
        let sizes = &self.table(table)?.column_sizes;
        sizes.get(x).copied().ok_or(GuiError::OutOfRange {
            index: x,
            len: sizes.len(),
        })
    }

    pub fn row_size(&self, table: ElementId, y: usize) -> Result<DimensionValue> {
        let sizes = &self.table(table)?.row_sizes;
        sizes.get(y).copied().ok_or(GuiError::OutOfRange {
            index: y,
            len: sizes.len(),
        })
    }

    pub fn set_column_size(
        &mut self,
        table: ElementId,
        x: usize,
        size: impl Into<DimensionValue>,
    ) -> Result<()> {
        let sizes = &mut self.table_mut(table)?.column_sizes;
        let len = sizes.len();
        let slot = sizes
            .get_mut(x)
            .ok_or(GuiError::OutOfRange { index: x, len })?;
        *slot = size.into();
        self.request_clear();
        self.mark(table, UpdateState::Relayout);
        Ok(())
    }

    pub fn set_row_size(
        &mut self,
        table: ElementId,
        y: usize,
        size: impl Into<DimensionValue>,
    ) -> Result<()> {
        let sizes = &mut self.table_mut(table)?.row_sizes;
        let len = sizes.len();
        let slot = sizes
            .get_mut(y)
            .ok_or(GuiError::OutOfRange { index: y, len })?;
        *slot = size.into();
        self.request_clear();
        self.mark(table, UpdateState::Relayout);
        Ok(())
    }

    /// Screen rectangle of cell `(x, y)` when the table's topmost ancestor
    /// is laid out against `viewport`.
    pub fn cell_bounds(&self, table: ElementId, x: usize, y: usize, viewport: Rect) -> Result<Rect> {
        let layout = self.table(table)?;
        layout.get(x, y)?;
        let rect = self.resolved_bounds(table, viewport)?;
        Ok(layout.cell_frame(x, y, rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;
    use cedar_core::{Color, Size};
    use cedar_render::HeadlessSurface;

    fn sized_table(tree: &mut ElementTree) -> ElementId {
        let table = tree.create_table(2, 2);
        tree.set_column_size(table, 0, 3).unwrap();
        tree.set_column_size(table, 1, DimensionValue::Relative(0.5)).unwrap();
        tree.set_row_size(table, 0, 1).unwrap();
        tree.set_row_size(table, 1, 2).unwrap();
        table
    }

    #[test]
    fn new_table_is_empty_with_zero_tracks() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(3, 2);
        assert_eq!(tree.table_dimensions(table).unwrap(), (3, 2));
        assert_eq!(tree.slot_count(table).unwrap(), 6);
        assert!(!tree.has_children(table).unwrap());
        assert_eq!(tree.column_size(table, 2).unwrap(), DimensionValue::Absolute(0));
        assert_eq!(tree.row_size(table, 1).unwrap(), DimensionValue::Absolute(0));
    }

    #[test]
    fn set_and_get_cells() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(2, 2);
        let child = tree.create_box();
        tree.set_cell(table, 1, 0, child).unwrap();
        assert_eq!(tree.cell(table, 1, 0).unwrap(), Some(child));
        assert_eq!(tree.parent(child), Some(table));
    }

    #[test]
    fn cell_access_is_range_checked() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(2, 1);
        let child = tree.create_box();
        assert!(matches!(
            tree.set_cell(table, 2, 0, child),
            Err(GuiError::CellOutOfRange {
                x: 2,
                y: 0,
                columns: 2,
                rows: 1
            })
        ));
        assert!(matches!(
            tree.cell(table, 0, 1),
            Err(GuiError::CellOutOfRange { .. })
        ));
        assert!(matches!(
            tree.row_size(table, 1),
            Err(GuiError::OutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(tree.parent(child), None);
    }

    #[test]
    fn set_cell_replaces_occupant() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(1, 1);
        let first = tree.create_box();
        let second = tree.create_box();
        tree.set_cell(table, 0, 0, first).unwrap();
        tree.set_cell(table, 0, 0, second).unwrap();
        assert!(!tree.contains(first));
        assert_eq!(tree.cell(table, 0, 0).unwrap(), Some(second));
    }

    #[test]
    fn set_cell_moves_within_table() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(2, 1);
        let child = tree.create_box();
        tree.set_cell(table, 0, 0, child).unwrap();
        tree.set_cell(table, 1, 0, child).unwrap();
        assert_eq!(tree.cell(table, 0, 0).unwrap(), None);
        assert_eq!(tree.cell(table, 1, 0).unwrap(), Some(child));
    }

    #[test]
    fn remove_child_leaves_empty_cell() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(2, 1);
        let a = tree.create_box();
        let b = tree.create_box();
        tree.set_cell(table, 0, 0, a).unwrap();
        tree.set_cell(table, 1, 0, b).unwrap();
        tree.remove_child(table, a).unwrap();
        assert_eq!(tree.cell(table, 0, 0).unwrap(), None);
        assert_eq!(tree.cell(table, 1, 0).unwrap(), Some(b));
        assert!(matches!(
            tree.remove_child(table, a),
            Err(GuiError::NotFound { .. })
        ));
    }

    #[test]
    fn index_operations_are_rejected() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(2, 2);
        let child = tree.create_box();
        assert!(matches!(
            tree.add_child(table, child),
            Err(GuiError::InvalidArgument(_))
        ));
        assert!(matches!(
            tree.insert_child(table, 0, child),
            Err(GuiError::InvalidArgument(_))
        ));
        assert!(matches!(
            tree.remove_children(table, 0..1),
            Err(GuiError::InvalidArgument(_))
        ));
        assert!(matches!(
            tree.resize_children(table, 1),
            Err(GuiError::InvalidArgument(_))
        ));
        assert!(matches!(
            tree.set_child(table, 3, child),
            Err(GuiError::InvalidArgument(_))
        ));
        assert!(matches!(
            tree.child_at(table, 0),
            Err(GuiError::InvalidArgument(_))
        ));
        assert_eq!(tree.cell(table, 1, 1).unwrap(), None);
        assert_eq!(tree.parent(child), None);
    }

    #[test]
    fn track_size_change_requests_clear() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(1, 1);
        assert!(!tree.needs_clear());
        tree.set_column_size(table, 0, 2).unwrap();
        assert!(tree.needs_clear());
    }

    #[test]
    fn clear_cell_destroys_child() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(1, 1);
        let child = tree.create_box();
        tree.set_cell(table, 0, 0, child).unwrap();
        tree.clear_cell(table, 0, 0).unwrap();
        assert!(!tree.contains(child));
        assert!(tree.needs_clear());
        tree.clear_cell(table, 0, 0).unwrap();
    }

    #[test]
    fn resize_keeps_fitting_children() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(3, 3);
        let kept = tree.create_box();
        let dropped = tree.create_box();
        tree.set_cell(table, 1, 1, kept).unwrap();
        tree.set_cell(table, 2, 0, dropped).unwrap();
        tree.set_column_size(table, 0, 4).unwrap();

        tree.resize_table(table, 2, 4).unwrap();

        assert_eq!(tree.table_dimensions(table).unwrap(), (2, 4));
        assert_eq!(tree.cell(table, 1, 1).unwrap(), Some(kept));
        assert!(!tree.contains(dropped));
        assert_eq!(tree.column_size(table, 0).unwrap(), DimensionValue::Absolute(4));
        assert_eq!(tree.row_size(table, 3).unwrap(), DimensionValue::Absolute(0));
    }

    #[test]
    fn cell_bounds_accumulate_tracks() {
        let mut tree = ElementTree::new();
        let table = sized_table(&mut tree);
        tree.set_anchor(table, Anchor::TOP_LEFT).unwrap();
        tree.set_position(table, 2, 1).unwrap();
        tree.set_size(table, 10, 5).unwrap();
        let viewport = Rect::new(0, 0, 40, 10);

        assert_eq!(
            tree.cell_bounds(table, 0, 0, viewport).unwrap(),
            Rect::new(2, 1, 3, 1)
        );
        assert_eq!(
            tree.cell_bounds(table, 1, 1, viewport).unwrap(),
            Rect::new(5, 2, 5, 2)
        );
    }

    #[test]
    fn negative_tracks_clamp_to_zero() {
        let mut tree = ElementTree::new();
        let table = tree.create_table(2, 1);
        tree.set_column_size(table, 0, -5).unwrap();
        tree.set_column_size(table, 1, 2).unwrap();
        tree.set_row_size(table, 0, 1).unwrap();
        tree.set_anchor(table, Anchor::TOP_LEFT).unwrap();
        let rect = tree.cell_bounds(table, 1, 0, Rect::new(0, 0, 10, 10)).unwrap();
        assert_eq!(rect, Rect::new(0, 0, 2, 1));
    }

    #[test]
    fn children_render_inside_their_cells() {
        let mut tree = ElementTree::new();
        let table = sized_table(&mut tree);
        tree.set_anchor(table, Anchor::TOP_LEFT).unwrap();
        tree.set_size(table, 10, 3).unwrap();
        let a = tree.create_box();
        let b = tree.create_box();
        tree.set_background(a, Color::Red).unwrap();
        tree.set_background(b, Color::Blue).unwrap();
        tree.set_cell(table, 0, 0, a).unwrap();
        tree.set_cell(table, 1, 1, b).unwrap();

        let mut surface = HeadlessSurface::new(Size::new(10, 3));
        let screen = Rect::new(0, 0, 10, 3);
        let stats = tree.render(table, screen, false, screen, &mut surface).unwrap();

        assert_eq!(stats.drawn, 2);
        assert_eq!(stats.cells, 3 + 5 * 2);
        assert_eq!(surface.cell(2, 0).unwrap().bg, Color::Red);
        assert_eq!(surface.cell(3, 0).unwrap().bg, Color::Default);
        assert_eq!(surface.cell(3, 1).unwrap().bg, Color::Blue);
        assert_eq!(surface.cell(7, 2).unwrap().bg, Color::Blue);
        assert_eq!(surface.cell(8, 2).unwrap().bg, Color::Default);
    }
}
