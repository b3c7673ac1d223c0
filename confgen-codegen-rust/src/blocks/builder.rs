use confgen_codegen::{CodeFragment, Renderable};

use super::items;
use crate::{
    ast::{Field, Fn, Impl, Param, Struct},
    model::ConfigBuilder,
};

impl ConfigBuilder {
    fn accumulator(&self) -> Struct {
        let config = self.config();
        Struct::new(self.type_name())
            .doc(format!(
                "Builder for [`{}`]; the values it holds become the defaults.",
                config.type_name()
            ))
            .derive("Default")
            .attr("allow(non_snake_case)")
            .fields(
                config
                    .fields()
                    .iter()
                    .map(|field| Field::new(field.private_name(), field.ty()).private()),
            )
    }

    fn setters(&self) -> Vec<Fn> {
        self.config()
            .fields()
            .iter()
            .map(|field| {
                Fn::new(field.public_name())
                    .param(Param::receiver("mut self"))
                    .param(Param::new("v", field.ty()))
                    .returns("Self")
                    .body_line(format!("self.{} = v;", field.private_name()))
                    .body_line("self")
            })
            .collect()
    }

    fn build(&self) -> Fn {
        let config = self.config();
        let constructor = config.item().constructor_path();
        let members = config
            .fields()
            .iter()
            .map(|field| {
                CodeFragment::Line(format!(
                    "{}: {}(self.{}),",
                    field.public_name(),
                    constructor,
                    field.private_name()
                ))
            })
            .collect();

        Fn::new("build")
            .doc("Build a config whose defaults are the values set on this builder.")
            .param(Param::receiver("self"))
            .returns(config.type_name())
            .body_fragment(CodeFragment::braced(
                format!("{} {{", config.type_name()),
                members,
            ))
    }

    fn methods(&self) -> Impl {
        let new = Fn::new(self.constructor())
            .doc("Create a builder holding zero values.")
            .returns("Self")
            .body_line("Self::default()");

        Impl::new(self.type_name())
            .attr("allow(non_snake_case)")
            .method(new)
            .methods(self.setters())
            .method(self.build())
    }
}

impl Renderable for ConfigBuilder {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        items(&[&self.accumulator(), &self.methods()])
    }
}
