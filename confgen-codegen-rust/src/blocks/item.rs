use confgen_codegen::{CodeFragment, Renderable};

use super::{STD_BOOL, STD_OPTION, items};
use crate::{
    ast::{Field, Fn, Impl, Param, Struct},
    model::ConfigItem,
};

impl ConfigItem {
    fn holder(&self) -> Struct {
        let t = self.param();
        Struct::new(self.type_name())
            .generic(t)
            .doc("Value that remembers its default and whether it was explicitly set.")
            .derive("Debug")
            .derive("Clone")
            .derive("PartialEq")
            .field(Field::new("modified", STD_BOOL).private())
            .field(Field::new("value", format!("{}<{}>", STD_OPTION, t)).private())
            .field(Field::new("default_value", t).private())
    }

    fn methods(&self) -> Impl {
        let t = self.param();
        let new = Fn::new(self.constructor())
            .doc("Create a holder that falls back to `default_value` until set.")
            .param(Param::new("default_value", t))
            .returns("Self")
            .body_fragment(CodeFragment::braced(
                "Self {",
                vec![
                    CodeFragment::line("modified: false,"),
                    CodeFragment::line(format!("value: {}::None,", STD_OPTION)),
                    CodeFragment::line("default_value,"),
                ],
            ));

        let set = Fn::new("set")
            .doc("Store `value` and mark the holder as modified.")
            .param(Param::receiver("&mut self"))
            .param(Param::new("value", t))
            .body_line("self.modified = true;")
            .body_line(format!("self.value = {}::Some(value);", STD_OPTION));

        let get = Fn::new("get")
            .doc("The set value if modified, otherwise the default.")
            .param(Param::receiver("&self"))
            .returns(format!("&{}", t))
            .body_fragment(CodeFragment::braced(
                "match &self.value {",
                vec![
                    CodeFragment::line(format!(
                        "{}::Some(value) if self.modified => value,",
                        STD_OPTION
                    )),
                    CodeFragment::line("_ => &self.default_value,"),
                ],
            ));

        let default = Fn::new("default")
            .doc("The default value, whether or not the holder was modified.")
            .param(Param::receiver("&self"))
            .returns(format!("&{}", t))
            .body_line("&self.default_value");

        let is_modified = Fn::new("is_modified")
            .doc("Whether a value was explicitly set.")
            .param(Param::receiver("&self"))
            .returns(STD_BOOL)
            .body_line("self.modified");

        Impl::new(self.wrap(t))
            .generic(t)
            .method(new)
            .method(set)
            .method(get)
            .method(default)
            .method(is_modified)
    }
}

impl Renderable for ConfigItem {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        items(&[&self.holder(), &self.methods()])
    }
}
