//! Button stories: the default and primary looks.

use crate::button::{Button, ButtonProps};
use crate::catalog::{Catalog, CatalogError};

pub const GROUP: &str = "Button";
pub const NORMAL: &str = "Normal button";
pub const PRIMARY: &str = "Primary button";

const LABEL: &str = "Button";

pub fn register(catalog: &mut Catalog) -> Result<(), CatalogError> {
    catalog
        .stories_of(GROUP)?
        .add(NORMAL, normal)?
        .add(PRIMARY, primary)?;
    Ok(())
}

fn normal() -> Button {
    Button::new(ButtonProps::new(LABEL))
}

fn primary() -> Button {
    Button::new(ButtonProps::new(LABEL).primary(true))
}
