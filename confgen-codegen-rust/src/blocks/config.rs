use confgen_codegen::{CodeFragment, Renderable};

use crate::{
    ast::{Field, Struct},
    model::ConfigStruct,
};

impl Renderable for ConfigStruct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let item = self.item();
        Struct::new(self.type_name())
            .doc("Configuration whose fields each track a default and an override.")
            .attr("allow(non_snake_case)")
            .fields(
                self.fields()
                    .iter()
                    .map(|field| Field::new(field.public_name(), item.wrap(field.ty()))),
            )
            .to_fragments()
    }
}
