//! Output formats
//!
//! A [`Converter`] turns the paired token stream of one line into output text. Converters
//! are looked up by name in a [`ConverterRegistry`], which is how configuration picks the
//! output format.
//!
//!     .
//!     ├── formats.rs      # Converter trait + registry
//!     └── formats
//!         ├── html.rs     # <em>/<strong>/<h1>
//!         └── text.rs     # emphasis stripped

pub mod html;
pub mod text;

pub use html::{EmphasisState, HtmlConverter};
pub use text::PlainTextConverter;

use crate::mdhtml::error::MdError;
use crate::mdhtml::token::TokenStream;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for output converters
///
/// Conversion is infallible: every token stream has an output.
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Converter for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn convert(&self, tokens: &TokenStream) -> String {
///         tokens.plain_text().to_uppercase()
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The name of this converter (e.g., "html", "text")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Convert the paired tokens of one line
    fn convert(&self, tokens: &TokenStream) -> String;

    /// Wrap converted heading content
    ///
    /// Default implementation returns the content unchanged.
    fn heading(&self, content: String) -> String {
        content
    }
}

/// Registry of converters, keyed by name
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter with the same name already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters
            .insert(converter.name().to_string(), Arc::new(converter));
    }

    /// Get a converter by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Converter>, MdError> {
        self.converters
            .get(name)
            .cloned()
            .ok_or_else(|| MdError::ConverterNotFound(name.to_string()))
    }

    /// Check if a converter exists
    pub fn has(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    /// List all available converter names (sorted)
    pub fn list_converters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.converters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in converters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(HtmlConverter::new());
        registry.register(PlainTextConverter);

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
