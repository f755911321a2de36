//! Story registrations, one module per component.

pub mod button;

use crate::catalog::{Catalog, CatalogError};

/// Registers every story module into `catalog`.
pub fn register_all(catalog: &mut Catalog) -> Result<(), CatalogError> {
    button::register(catalog)?;
    tracing::debug!(stories = catalog.len(), "Story catalog ready");
    Ok(())
}
