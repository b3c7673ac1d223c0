//! Generator configuration.

use confgen_core::apply_prefix;

/// Names of the four generated types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    pub config: String,
    pub item: String,
    pub builder: String,
    pub option: String,
}

impl TypeNames {
    /// Prepend the capitalized `prefix` to every name.
    pub fn with_prefix(self, prefix: &str) -> Self {
        Self {
            config: apply_prefix(prefix, &self.config),
            item: apply_prefix(prefix, &self.item),
            builder: apply_prefix(prefix, &self.builder),
            option: apply_prefix(prefix, &self.option),
        }
    }

    /// `(role, name)` pairs, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("item", self.item.as_str()),
            ("config", self.config.as_str()),
            ("builder", self.builder.as_str()),
            ("option", self.option.as_str()),
        ]
        .into_iter()
    }
}

impl Default for TypeNames {
    fn default() -> Self {
        Self {
            config: "Config".to_string(),
            item: "ConfigItem".to_string(),
            builder: "ConfigBuilder".to_string(),
            option: "ConfigOption".to_string(),
        }
    }
}

/// Run-scoped settings for a [`Generator`](crate::Generator).
///
/// # Example
///
/// ```
/// use confgen_codegen_rust::{GeneratorConfig, TypeNames};
///
/// let config = GeneratorConfig::new()
///     .type_names(TypeNames::default())
///     .prefix("app")
///     .with_options(true);
///
/// assert_eq!(config.resolved_type_names().config, "AppConfig");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub type_names: TypeNames,
    pub prefix: String,
    pub generate_options: bool,
    /// Comment lines written before the generated items.
    pub header: Vec<String>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_names(mut self, type_names: TypeNames) -> Self {
        self.type_names = type_names;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Also emit the `apply` method and the `With<Field>` option functions.
    pub fn with_options(mut self, generate_options: bool) -> Self {
        self.generate_options = generate_options;
        self
    }

    /// Add a line emitted verbatim at the top of the output.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Type names with the prefix applied.
    pub fn resolved_type_names(&self) -> TypeNames {
        self.type_names.clone().with_prefix(&self.prefix)
    }
}
