//! Value substitution into text templates.
//! Templates only use `{{ name }}` placeholders; values are inserted verbatim.
use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Values for the template placeholders
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with escaping disabled.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Generated files are plain text and every block ends with a newline.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template is malformed or cannot be rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}
