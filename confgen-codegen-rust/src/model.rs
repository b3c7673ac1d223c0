//! In-memory model of the four generated blocks.
//!
//! The model is built once from the parsed fields and the configured type
//! names. The builder and option entities share the config through an
//! [`Rc`] so all blocks see the same fields in the same order.

use std::rc::Rc;

use confgen_spec::Field;

/// Name of the associated constructor on the item and builder types.
const CONSTRUCTOR: &str = "new";

/// Generic parameter of the item type.
const ITEM_PARAM: &str = "T";

/// The generic value holder (`Item<T>`), emitted once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    type_name: String,
    constructor: String,
}

impl ConfigItem {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            constructor: CONSTRUCTOR.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The item's generic parameter, also the type of its values.
    pub fn param(&self) -> &str {
        ITEM_PARAM
    }

    /// Name of the constructor taking the default value.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// Path of the constructor (e.g., `Item::new`).
    pub fn constructor_path(&self) -> String {
        format!("{}::{}", self.type_name, self.constructor)
    }

    /// The holder type parameterized by `ty` (e.g., `Item<i32>`).
    pub fn wrap(&self, ty: &str) -> String {
        format!("{}<{}>", self.type_name, ty)
    }
}

/// The aggregate config struct: one item-wrapped member per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStruct {
    type_name: String,
    item: ConfigItem,
    fields: Vec<Field>,
}

impl ConfigStruct {
    pub fn new(type_name: impl Into<String>, item: ConfigItem, fields: Vec<Field>) -> Self {
        Self {
            type_name: type_name.into(),
            item,
            fields,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn item(&self) -> &ConfigItem {
        &self.item
    }

    /// Fields in specification order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// The fluent builder producing a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBuilder {
    type_name: String,
    constructor: String,
    config: Rc<ConfigStruct>,
}

impl ConfigBuilder {
    pub fn new(type_name: impl Into<String>, config: Rc<ConfigStruct>) -> Self {
        Self {
            type_name: type_name.into(),
            constructor: CONSTRUCTOR.to_string(),
            config,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the zero-value constructor.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    pub fn config(&self) -> &ConfigStruct {
        &self.config
    }
}

/// The functional option API mutating a built config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    type_name: String,
    config: Rc<ConfigStruct>,
}

impl ConfigOption {
    pub fn new(type_name: impl Into<String>, config: Rc<ConfigStruct>) -> Self {
        Self {
            type_name: type_name.into(),
            config,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn config(&self) -> &ConfigStruct {
        &self.config
    }

    /// Name of the option constructor for `field` (e.g., `WithSize`).
    pub fn function_name(&self, field: &Field) -> String {
        format!("With{}", field.public_name())
    }
}
