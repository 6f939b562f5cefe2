use anyhow::{Context, Result};
use handlebars::{Handlebars, RenderError};
use serde::Serialize;

/// View-rendering service: a Handlebars registry with every page template
/// compiled in at build time.
///
/// Each page template wraps itself in the `layout` partial, which carries
/// the shared document chrome. Templates only interpolate fields and
/// iterate lists; Handlebars escapes interpolated values by default.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();

        for (name, source) in [
            ("layout", include_str!("../templates/layout.hbs")),
            ("home", include_str!("../templates/home.hbs")),
            ("create", include_str!("../templates/create.hbs")),
            ("details", include_str!("../templates/details.hbs")),
            ("edit", include_str!("../templates/edit.hbs")),
            ("delete", include_str!("../templates/delete.hbs")),
        ] {
            registry
                .register_template_string(name, source)
                .with_context(|| format!("Failed to compile template '{}'", name))?;
        }

        Ok(Self { registry })
    }

    /// Render the named template with the given data mapping.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        self.registry.render(name, data)
    }
}
