#![forbid(unsafe_code)]

//! The demo's element tree: a full-screen backdrop and a menu panel.

use cedar::{Anchor, Color, ElementId, Surface, Window};

/// Menu panel size in cells.
pub const MENU_WIDTH: i32 = 20;
pub const MENU_HEIGHT: i32 = 11;

/// Handles to the elements the event loop touches.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub backdrop: ElementId,
    pub menu: ElementId,
    pub panel: ElementId,
}

impl Scene {
    /// Attach the scene to `window`.
    pub fn build<S: Surface>(window: &mut Window<S>) -> cedar::Result<Self> {
        let tree = window.tree_mut();

        let backdrop = tree.create_box();
        tree.set_background(backdrop, Color::Black)?;

        let menu = tree.create_layer();
        tree.set_size(menu, MENU_WIDTH, MENU_HEIGHT)?;
        tree.set_anchor(menu, Anchor::CENTER)?;

        let panel = tree.create_box();
        tree.set_background(panel, Color::White)?;
        tree.add_child(menu, panel)?;

        window.add_child(backdrop)?;
        window.add_child(menu)?;

        Ok(Self {
            backdrop,
            menu,
            panel,
        })
    }

    /// Recolor the panel with the next named color, skipping black so it
    /// stays visible on the backdrop.
    pub fn cycle_color<S: Surface>(&self, window: &mut Window<S>) -> cedar::Result<Color> {
        let tree = window.tree_mut();
        let current = tree.resolved_background(self.panel)?;
        let position = Color::NAMED.iter().position(|&c| c == current).unwrap_or(0);
        let next = Color::NAMED
            .iter()
            .cycle()
            .skip(position + 1)
            .find(|&&c| c != Color::Black)
            .copied()
            .unwrap_or(Color::White);
        tree.set_background(self.panel, next)?;
        Ok(next)
    }
}
