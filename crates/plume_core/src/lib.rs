//! Plume Core
//!
//! Foundational primitives shared by the Plume component crates:
//!
//! - **Colors**: RGBA colors with CSS serialization
//! - **Props**: ordered attribute/handler bags passed between components
//! - **Events**: UI events and composable handlers
//! - **Document**: rendered element trees mounted into addressable nodes
//!
//! # Example
//!
//! ```rust
//! use plume_core::{Document, Element, NodeRef, Tag};
//!
//! let node_ref = NodeRef::new();
//! let element = Element::new(Tag::Div)
//!     .attr("role", "listbox")
//!     .with_ref(node_ref.clone());
//!
//! let mut doc = Document::new();
//! let roots = doc.mount(vec![element]);
//!
//! assert_eq!(node_ref.get(), Some(roots[0]));
//! assert_eq!(doc.attr(roots[0], "role"), Some("listbox"));
//! ```

pub mod color;
pub mod dom;
pub mod events;
pub mod props;

pub use color::Color;
pub use dom::{merge_refs, ComputedStyle, Document, Element, MountedNode, NodeId, NodeRef, Tag};
pub use events::{Event, EventData, EventHandler, EventKind, Key};
pub use props::{PropValue, Props};
