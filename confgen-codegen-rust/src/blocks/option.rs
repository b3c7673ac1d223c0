use confgen_codegen::{CodeFragment, Renderable};

use super::{STD_BOX, STD_FN_ONCE, STD_INTO_ITERATOR, items};
use crate::{
    ast::{Fn, Impl, Param, TypeAlias},
    model::ConfigOption,
};

impl ConfigOption {
    fn apply(&self) -> Impl {
        let apply = Fn::new("apply")
            .doc("Apply options in order; a later option wins over an earlier one.")
            .param(Param::receiver("&mut self"))
            .param(Param::new(
                "options",
                format!("impl {}<Item = {}>", STD_INTO_ITERATOR, self.type_name()),
            ))
            .body_fragment(CodeFragment::braced(
                "for option in options {",
                vec![CodeFragment::line("option(self);")],
            ));

        Impl::new(self.config().type_name()).method(apply)
    }

    fn alias(&self) -> TypeAlias {
        let config = self.config().type_name();
        TypeAlias::new(
            self.type_name(),
            format!("{}<dyn {}(&mut {})>", STD_BOX, STD_FN_ONCE, config),
        )
        .doc(format!(
            "Mutator for a [`{0}`], see [`{0}::apply`].",
            config
        ))
    }

    fn functions(&self) -> Vec<Fn> {
        let config = self.config().type_name();
        self.config()
            .fields()
            .iter()
            .map(|field| {
                Fn::new(self.function_name(field))
                    .doc(format!("Override `{}` when applied.", field.public_name()))
                    .attr("allow(non_snake_case)")
                    .param(Param::new("v", field.ty()))
                    .returns(self.type_name())
                    .body_line(format!(
                        "{}::new(move |c: &mut {}| c.{}.set(v))",
                        STD_BOX,
                        config,
                        field.public_name()
                    ))
            })
            .collect()
    }
}

impl Renderable for ConfigOption {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let apply = self.apply();
        let alias = self.alias();
        let functions = self.functions();

        let mut nodes: Vec<&dyn Renderable> = vec![&apply, &alias];
        nodes.extend(functions.iter().map(|f| f as &dyn Renderable));
        items(&nodes)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use confgen_spec::parse_fields;

    use super::*;
    use crate::{
        ast::render,
        model::{ConfigItem, ConfigStruct},
    };

    #[test]
    fn test_option_block() {
        let fields = parse_fields("size usize|Reader Option<Box<dyn std::io::Read>>").unwrap();
        let config = ConfigStruct::new("Config", ConfigItem::new("Item"), fields);
        let option = ConfigOption::new("Opt", Rc::new(config));

        insta::assert_snapshot!(render(&option), @r"
        impl Config {
            /// Apply options in order; a later option wins over an earlier one.
            pub fn apply(&mut self, options: impl ::core::iter::IntoIterator<Item = Opt>) {
                for option in options {
                    option(self);
                }
            }
        }

        /// Mutator for a [`Config`], see [`Config::apply`].
        pub type Opt = ::std::boxed::Box<dyn ::core::ops::FnOnce(&mut Config)>;

        /// Override `Size` when applied.
        #[allow(non_snake_case)]
        pub fn WithSize(v: usize) -> Opt {
            ::std::boxed::Box::new(move |c: &mut Config| c.Size.set(v))
        }

        /// Override `Reader` when applied.
        #[allow(non_snake_case)]
        pub fn WithReader(v: Option<Box<dyn std::io::Read>>) -> Opt {
            ::std::boxed::Box::new(move |c: &mut Config| c.Reader.set(v))
        }
        ");
    }
}
