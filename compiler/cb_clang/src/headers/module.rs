//! `<Module>.h`: the exported functions of one module, in module order.

use cb_context::{CompilationAggregate, ContentGenerator, GenerateError};
use cb_emit::CodeEmitter;

use super::{api_macro, close_extern_c, open_extern_c, SOURCE_PREAMBLE};
use crate::method::MethodDeclaration;

pub struct ModuleHeader {
    module: String,
}

impl ModuleHeader {
    pub fn new(module: impl Into<String>) -> Self {
        ModuleHeader {
            module: module.into(),
        }
    }
}

impl ContentGenerator for ModuleHeader {
    #[tracing::instrument(level = "trace", skip_all, fields(module = %self.module))]
    fn write(&self, aggregate: &CompilationAggregate<'_>, out: &CodeEmitter) -> Result<(), GenerateError> {
        let api = api_macro(aggregate.library_name());
        let methods = aggregate.module_methods(&self.module).unwrap_or_default();

        out.append_line("#pragma once");
        out.newline();
        out.append_line("#include \"libdefs.h\"");
        out.append_line("#include \"Types.h\"");
        out.newline();
        open_extern_c(out, "");
        out.newline();
        for method in methods {
            let declaration = MethodDeclaration::new(method, &api)?;
            out.append_writer(&declaration);
            out.newline();
        }
        close_extern_c(out, "");
        Ok(())
    }

    fn generated_preamble(&self) -> Option<&str> {
        Some(SOURCE_PREAMBLE)
    }
}
