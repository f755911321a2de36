//! Story catalog: named example renders grouped for visual inspection.
//!
//! The catalog is an ordinary value owned by whoever builds it. Story
//! modules register into it through explicit calls, see
//! [`crate::stories::register_all`].

mod registry;
mod snapshot;

pub use registry::{
    Catalog, CatalogEntry, CatalogError, CatalogIndex, GroupIndex, StoriesOf, Story,
    StoryFactory, StoryGroup,
};
pub use snapshot::{buffer_to_ansi, render_story};
