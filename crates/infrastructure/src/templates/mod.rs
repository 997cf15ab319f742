//! Template engine for weather cards
//!
//! Uses Tera with two embedded templates:
//! - `weather/card.html`: the gradient card markup with reveal classes
//! - `weather/card.txt`: a plain-text card for terminals
//!
//! # Template Locations
//!
//! Templates can be loaded from:
//! - Embedded templates (compile-time)
//! - File system (runtime, `templates_dir`); a file with the same name
//!   replaces the embedded one
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{CardTemplate, CardTransition, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_card(&card, CardTemplate::Html, &CardTransition::default())?;
//! ```

use application::CardRenderDescription;
use domain::RevealState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(render_chain(&e)),
        }
    }
}

/// Tera nests the useful message in the error source chain
fn render_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Template engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path to custom templates directory (optional)
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Whether to use embedded templates as fallback
    #[serde(default = "default_true")]
    pub use_embedded_fallback: bool,

    /// Whether to auto-escape HTML by default
    #[serde(default = "default_true")]
    pub auto_escape: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            use_embedded_fallback: true,
            auto_escape: true,
        }
    }
}

/// Which card template to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTemplate {
    /// `weather/card.html`
    Html,
    /// `weather/card.txt`
    Text,
}

impl CardTemplate {
    /// Template name inside the engine
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "weather/card.html",
            Self::Text => "weather/card.txt",
        }
    }
}

/// Timing of the reveal transition, as CSS utility classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTransition {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing utility class (e.g. `ease-out`)
    pub easing: String,
}

impl Default for CardTransition {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            easing: "ease-out".to_string(),
        }
    }
}

impl CardTransition {
    /// Classes applied to the card root regardless of reveal state
    #[must_use]
    pub fn classes(&self) -> String {
        format!("transition-all duration-{} {}", self.duration_ms, self.easing)
    }
}

/// Classes for the hidden or revealed treatment
#[must_use]
pub const fn reveal_classes(reveal: RevealState) -> &'static str {
    match reveal {
        RevealState::Hidden => "opacity-0 translate-y-4",
        RevealState::Visible => "opacity-100 translate-y-0",
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const CARD_HTML: &str = r#"<div class="max-w-sm mx-auto bg-gradient-to-br {{ card.background }} rounded-xl shadow-lg overflow-hidden text-white {{ transition_classes }} {{ reveal_classes }}" data-reveal="{{ card.reveal }}">
  <div class="px-6 py-4">
    <div class="flex items-center justify-between">
      <div>
        <h2 class="text-2xl font-bold">{{ card.city }}</h2>
        <p class="text-sm opacity-90">{{ card.condition }}</p>
      </div>
      <div class="text-5xl">{{ card.icon }}</div>
    </div>
  </div>
  <div class="px-6 py-2">
    <div class="text-6xl font-light text-center">{{ card.temperature }}</div>
  </div>
  <div class="px-6 py-4 bg-black bg-opacity-20">
    <div class="grid grid-cols-2 gap-4 text-sm">
      <div class="flex items-center space-x-2">
        <span class="opacity-75">💧</span>
        <span>湿度: {{ card.humidity }}</span>
      </div>
      <div class="flex items-center space-x-2">
        <span class="opacity-75">💨</span>
        <span>风速: {{ card.windSpeed }}</span>
      </div>
    </div>
  </div>
  <div class="px-6 py-4 bg-black bg-opacity-10">
    <p class="text-sm leading-relaxed opacity-90">{% if auto_escape %}{{ card.description | escape | linebreaksbr | safe }}{% else %}{{ card.description | linebreaksbr }}{% endif %}</p>
  </div>
</div>
"#;

    pub const CARD_TEXT: &str = r"{{ card.icon }} {{ card.city }} ({{ card.condition }})
🌡️ {{ card.temperature }}
💧 湿度: {{ card.humidity }}
💨 风速: {{ card.windSpeed }}
{% if card.description %}📝 {{ card.description }}
{% endif %}";

    pub const ALL: [(&str, &str); 2] = [
        ("weather/card.html", CARD_HTML),
        ("weather/card.txt", CARD_TEXT),
    ];
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = match config.templates_dir.as_deref() {
            Some(dir) => load_custom(dir, config.use_embedded_fallback)?,
            None => Tera::default(),
        };

        tera.autoescape_on(if config.auto_escape {
            vec![".html", ".htm", ".xml"]
        } else {
            vec![]
        });

        // Embedded templates only fill in what the custom directory lacks
        let present: Vec<String> = tera.get_template_names().map(str::to_string).collect();
        for (name, source) in embedded::ALL {
            if present.iter().any(|p| p == name) {
                debug!(template = %name, "Using custom template");
                continue;
            }
            tera.add_raw_template(name, source)
                .map_err(|e| TemplateError::Compile(render_chain(&e)))?;
        }

        tera.register_filter("linebreaksbr", linebreaksbr_filter);

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render one weather card
    pub fn render_card(
        &self,
        card: &CardRenderDescription,
        template: CardTemplate,
        transition: &CardTransition,
    ) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("card", card);
        ctx.insert("reveal_classes", &reveal_classes(card.reveal));
        ctx.insert("transition_classes", &transition.classes());
        ctx.insert("auto_escape", &self.config.auto_escape);

        self.render(template.name(), &ctx)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// List all available template names
    #[must_use]
    pub fn list_templates(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}

fn load_custom(dir: &str, fallback: bool) -> Result<Tera, TemplateError> {
    if !Path::new(dir).is_dir() {
        if fallback {
            warn!(dir = %dir, "Templates directory not found, using embedded templates");
            return Ok(Tera::default());
        }
        return Err(TemplateError::NotFound(dir.to_string()));
    }

    let pattern = format!("{}/**/*", dir.trim_end_matches('/'));
    match Tera::new(&pattern) {
        Ok(tera) => {
            info!(dir = %dir, count = tera.get_template_names().count(), "Loaded custom templates");
            Ok(tera)
        },
        Err(e) if fallback => {
            warn!(error = %render_chain(&e), "Custom templates failed to load, using embedded");
            Ok(Tera::default())
        },
        Err(e) => Err(TemplateError::Compile(render_chain(&e))),
    }
}

/// Custom filter: Convert newlines to <br> tags
fn linebreaksbr_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("linebreaksbr requires a string"))?;
    Ok(Value::String(s.replace('\n', "<br>\n")))
}
