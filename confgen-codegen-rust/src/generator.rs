use std::rc::Rc;

use confgen_codegen::CodeBuilder;
use confgen_spec::{Field, parse_fields};
use tracing::debug;

use crate::{
    Error, GeneratorConfig, Result, RustFile, TypeNames,
    model::{ConfigBuilder, ConfigItem, ConfigOption, ConfigStruct},
};

/// Emits the item, config, builder and (optionally) option blocks for one
/// field specification.
///
/// A generator is single use: the first [`generate`](Self::generate) fills
/// the output buffer, later calls leave it untouched.
///
/// # Example
///
/// ```
/// use confgen_codegen_rust::{Generator, GeneratorConfig};
///
/// let mut generator = Generator::new("I i32", &GeneratorConfig::new()).unwrap();
/// let code = generator.generate().as_str();
///
/// assert!(code.contains("pub I: ConfigItem<i32>,"));
/// ```
pub struct Generator {
    config: Rc<ConfigStruct>,
    builder: ConfigBuilder,
    option: ConfigOption,
    generate_options: bool,
    header: Vec<String>,
    output: CodeBuilder,
    generated: bool,
}

impl Generator {
    /// Parse `field_spec` and set up the model with the configured type names.
    ///
    /// Nothing is emitted yet, and nothing is emitted at all if the
    /// specification or the type names are rejected.
    pub fn new(field_spec: &str, config: &GeneratorConfig) -> Result<Self> {
        let names = config.resolved_type_names();
        validate_type_names(&names)?;
        let item = ConfigItem::new(names.item);
        if item.type_name() == item.param() {
            return Err(Box::new(Error::ReservedTypeName {
                role: "item",
                name: item.type_name().to_string(),
            }));
        }

        let fields = parse_fields(field_spec).map_err(Error::spec)?;
        debug!(
            fields = fields.len(),
            config = %names.config,
            options = config.generate_options,
            "parsed field specification"
        );

        let model = Rc::new(ConfigStruct::new(names.config, item, fields));

        Ok(Self {
            builder: ConfigBuilder::new(names.builder, Rc::clone(&model)),
            option: ConfigOption::new(names.option, Rc::clone(&model)),
            config: model,
            generate_options: config.generate_options,
            header: config.header.clone(),
            output: CodeBuilder::rust(),
            generated: false,
        })
    }

    /// Append a header line after construction, e.g. once the target crate
    /// is known. Has no effect after [`generate`](Self::generate).
    pub fn with_header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Emit all blocks into the output buffer.
    pub fn generate(&mut self) -> &mut Self {
        if self.generated {
            debug!("output already generated, skipping");
            return self;
        }

        let mut file = RustFile::new();
        for line in &self.header {
            file = file.header(line.as_str());
        }
        file = file
            .add(self.config.item())
            .add(self.config.as_ref())
            .add(&self.builder);
        if self.generate_options {
            file = file.add(&self.option);
        }

        file.render_into(&mut self.output);
        self.generated = true;
        debug!(bytes = self.output.as_bytes().len(), "generated config code");
        self
    }

    /// Parsed fields in specification order.
    pub fn fields(&self) -> &[Field] {
        self.config.fields()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn bytes(&self) -> &[u8] {
        self.output.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        self.output.as_str()
    }

    pub fn into_string(self) -> String {
        self.output.build()
    }
}

/// Every name must be a Rust identifier and no two roles may share one.
fn validate_type_names(names: &TypeNames) -> Result<()> {
    let mut seen: Vec<(&'static str, &str)> = Vec::new();

    for (role, name) in names.iter() {
        if syn::parse_str::<syn::Ident>(name).is_err() {
            return Err(Box::new(Error::InvalidTypeName {
                role,
                name: name.to_string(),
            }));
        }
        if let Some(&(first, _)) = seen.iter().find(|(_, other)| *other == name) {
            return Err(Box::new(Error::DuplicateTypeName {
                first,
                second: role,
                name: name.to_string(),
            }));
        }
        seen.push((role, name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(spec: &str, config: &GeneratorConfig) -> String {
        let mut generator = Generator::new(spec, config).unwrap();
        generator.generate();
        generator.into_string()
    }

    const SPEC: &str = "Size i32|Rule Rule|Reverse Rule|Reader Option<Box<dyn std::io::Read>>";

    #[test]
    fn test_output_is_deterministic() {
        let config = GeneratorConfig::new().with_options(true);
        assert_eq!(generate(SPEC, &config), generate(SPEC, &config));
    }

    #[test]
    fn test_blocks_in_fixed_order() {
        let code = generate(SPEC, &GeneratorConfig::new().with_options(true));

        let item = code.find("pub struct ConfigItem<T>").unwrap();
        let config = code.find("pub struct Config {").unwrap();
        let builder = code.find("pub struct ConfigBuilder {").unwrap();
        let option = code.find("pub type ConfigOption").unwrap();
        assert!(item < config && config < builder && builder < option);
    }

    #[test]
    fn test_fields_keep_specification_order() {
        let code = generate(SPEC, &GeneratorConfig::new());

        let positions: Vec<usize> = ["pub Size:", "pub Rule:", "pub Reverse:", "pub Reader:"]
            .iter()
            .map(|member| code.find(member).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_item_block_emitted_once() {
        let code = generate(SPEC, &GeneratorConfig::new().with_options(true));
        assert_eq!(code.matches("pub struct ConfigItem<T>").count(), 1);
        assert_eq!(code.matches("impl<T> ConfigItem<T>").count(), 1);
    }

    #[test]
    fn test_option_block_only_when_requested() {
        let without = generate(SPEC, &GeneratorConfig::new());
        assert!(!without.contains("ConfigOption"));
        assert!(!without.contains("pub fn apply"));
        assert!(!without.contains("WithSize"));

        let with = generate(SPEC, &GeneratorConfig::new().with_options(true));
        assert!(with.contains("pub type ConfigOption"));
        assert!(with.contains("pub fn apply"));
        for name in ["WithSize", "WithRule", "WithReverse", "WithReader"] {
            assert!(with.contains(&format!("pub fn {}(", name)), "missing {}", name);
        }
    }

    #[test]
    fn test_prefix_renames_types_not_fields() {
        let code = generate("size usize", &GeneratorConfig::new().prefix("app").with_options(true));

        assert!(code.contains("pub struct AppConfigItem<T>"));
        assert!(code.contains("pub struct AppConfig {"));
        assert!(code.contains("pub struct AppConfigBuilder {"));
        assert!(code.contains("pub type AppConfigOption"));
        assert!(code.contains("pub Size: AppConfigItem<usize>,"));
        assert!(code.contains("pub fn WithSize(v: usize) -> AppConfigOption {"));
        assert!(!code.contains("pub struct Config {"));
    }

    #[test]
    fn test_single_field() {
        let mut generator = Generator::new("I i32", &GeneratorConfig::new()).unwrap();
        assert_eq!(generator.fields().len(), 1);
        assert_eq!(generator.fields()[0].public_name(), "I");
        assert_eq!(generator.fields()[0].private_name(), "i");

        let code = generator.generate().as_str();
        assert!(code.contains("    pub I: ConfigItem<i32>,\n"));
        assert!(code.contains("    i: i32,\n"));
        assert!(code.contains("pub fn I(mut self, v: i32) -> Self {"));
        assert!(code.contains("I: ConfigItem::new(self.i),"));
    }

    #[test]
    fn test_header_comes_first() {
        let config = GeneratorConfig::new().header("// Code generated; DO NOT EDIT.");
        let code = generate("I i32", &config);
        assert!(code.starts_with("// Code generated; DO NOT EDIT.\n\n/// "));
    }

    #[test]
    fn test_second_generate_is_noop() {
        let mut generator = Generator::new(SPEC, &GeneratorConfig::new()).unwrap();
        assert!(!generator.is_generated());
        assert!(generator.bytes().is_empty());

        let first = generator.generate().as_str().to_string();
        let second = generator.generate().as_str().to_string();
        assert!(generator.is_generated());
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_spec_rejected() {
        for spec in ["", "Size", "Size i32|Rule", "Size Vec<", "9lives u8", "Size i32|size u8"] {
            let err = Generator::new(spec, &GeneratorConfig::new())
                .err()
                .unwrap_or_else(|| panic!("accepted {:?}", spec));
            assert!(matches!(*err, Error::Spec(_)), "{:?}: {}", spec, err);
        }
    }

    #[test]
    fn test_invalid_type_name_rejected() {
        let names = TypeNames {
            builder: "Config Builder".to_string(),
            ..TypeNames::default()
        };
        let err = Generator::new("I i32", &GeneratorConfig::new().type_names(names))
            .err()
            .unwrap();
        assert!(matches!(
            *err,
            Error::InvalidTypeName { role: "builder", ref name } if name == "Config Builder"
        ));
    }

    #[test]
    fn test_keyword_type_name_rejected() {
        let names = TypeNames {
            config: "struct".to_string(),
            ..TypeNames::default()
        };
        let err = Generator::new("I i32", &GeneratorConfig::new().type_names(names))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::InvalidTypeName { role: "config", .. }));
    }

    #[test]
    fn test_item_named_like_its_parameter_rejected() {
        let names = TypeNames {
            item: "T".to_string(),
            ..TypeNames::default()
        };
        let err = Generator::new("I i32", &GeneratorConfig::new().type_names(names))
            .err()
            .unwrap();
        assert!(matches!(
            *err,
            Error::ReservedTypeName { role: "item", ref name } if name == "T"
        ));

        // Other roles may use the name.
        let names = TypeNames {
            config: "T".to_string(),
            ..TypeNames::default()
        };
        let code = generate("I i32", &GeneratorConfig::new().type_names(names));
        assert!(code.contains("pub struct T {"));
    }

    #[test]
    fn test_header_added_after_construction() {
        let config = GeneratorConfig::new().header("// first");
        let mut generator = Generator::new("I i32", &config)
            .unwrap()
            .with_header("// second");
        let code = generator.generate().as_str();
        assert!(code.starts_with("// first\n// second\n\n"));
    }

    #[test]
    fn test_duplicate_type_name_rejected() {
        let names = TypeNames {
            option: "Config".to_string(),
            ..TypeNames::default()
        };
        let err = Generator::new("I i32", &GeneratorConfig::new().type_names(names))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "the config and option types are both named 'Config'"
        );
    }
}
