//! Function plus bound arguments, shared by both handler types.

use crate::core::render;
use crate::core::{Args, Callback, Keywords, Result, Value};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoundCall {
    pub(crate) handler: Callback,
    pub(crate) args: Args,
}

impl BoundCall {
    pub(crate) fn new(handler: Callback, args: Args) -> Self {
        Self { handler, args }
    }

    pub(crate) fn call(&self) -> Result<()> {
        self.handler.call(&self.args)?;
        Ok(())
    }

    pub(crate) fn positional(&self) -> &[Value] {
        self.args.positional()
    }

    pub(crate) fn keyword(&self) -> &Keywords {
        self.args.keyword()
    }

    /// Rendered `(key): value` lines for the function and its arguments.
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("handler", self.handler.to_string()),
            ("handler_args", self.args.positional_repr()),
            ("handler_kwargs", self.args.keyword_repr()),
        ]
    }

    pub(crate) fn render(&self, name: &str, extra: Option<(&'static str, String)>) -> String {
        let mut fields = self.fields();
        fields.extend(extra);
        render::object(name, &render::mapping(fields))
    }
}
