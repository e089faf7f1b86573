#![forbid(unsafe_code)]

//! Element tree, anchored layout and dirty propagation.
//!
//! - [`DimensionValue`] - absolute cells or a fraction of the parent
//! - [`Anchor`] - which parent edges an element is pinned to
//! - [`LocalBounds`] / [`resolve_bounds`] - local geometry to screen rectangles
//! - [`ElementTree`] - arena of boxes, canvases, layers and tables
//! - [`Window`] - the top-level container painted onto a [`Surface`](cedar_render::Surface)
//!
//! # Example
//!
//! ```
//! use cedar_core::{Color, Rect, Size};
//! use cedar_gui::{Anchor, DimensionValue, Window};
//! use cedar_render::HeadlessSurface;
//!
//! let mut window = Window::new(HeadlessSurface::new(Size::new(40, 10)));
//! let menu = window.tree_mut().create_box();
//! window.add_child(menu).unwrap();
//!
//! let tree = window.tree_mut();
//! tree.set_anchor(menu, Anchor::LEFT).unwrap();
//! tree.set_position(menu, DimensionValue::Relative(0.25), 0).unwrap();
//! tree.set_size(menu, 10, 3).unwrap();
//! tree.set_background(menu, Color::White).unwrap();
//!
//! window.render().unwrap();
//! assert_eq!(window.resolved_bounds(menu).unwrap(), Rect::new(10, 4, 10, 3));
//! ```

pub mod anchor;
pub mod bounds;
pub mod config;
pub mod dimension;
pub mod element;
pub mod error;
mod table;
pub mod tree;
pub mod update;
pub mod window;

pub use anchor::{Anchor, AxisAnchor};
pub use bounds::{LocalBounds, resolve_axis, resolve_bounds};
pub use config::{CenterRounding, LayoutConfig, WindowConfig};
pub use dimension::DimensionValue;
pub use element::{Background, Draw, Element, ElementId, ElementKind};
pub use error::{GuiError, Result};
pub use tree::{ElementTree, RenderStats};
pub use update::UpdateState;
pub use window::{FrameStats, Window};
