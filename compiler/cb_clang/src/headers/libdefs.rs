//! `libdefs.h`: shared-library export macros.

use cb_context::{CompilationAggregate, ContentGenerator, GenerateError};
use cb_emit::CodeEmitter;

use super::library_macro;

pub struct LibDefsHeader;

impl ContentGenerator for LibDefsHeader {
    fn write(&self, aggregate: &CompilationAggregate<'_>, out: &CodeEmitter) -> Result<(), GenerateError> {
        let library = aggregate.library_name();
        let is_static = library_macro(library, "STATIC");
        let shared = library_macro(library, "SHARED");
        let api = library_macro(library, "SHARED_API");
        let import = library_macro(library, "IMPORT");
        let export = library_macro(library, "EXPORT");

        out.append_line("#pragma once");
        out.newline();
        out.append_line(&format!("#if defined({shared}) || !defined({is_static})"));
        out.newline();
        out.append_line(&format!("#ifdef {export}"));
        {
            let body = out.indent();
            body.append_line("#ifdef _MSC_VER");
            body.new_child(1)?
                .append_line(&format!("#define {api} __declspec(dllexport)"));
            body.append_line("#else // Non MVSC");
            body.new_child(1)?.append_line(&format!(
                "#define {api} __attribute__ ((visibility (\"default\")))"
            ));
            body.append_line("#endif");
        }
        out.append_line("#else");
        {
            let body = out.indent();
            body.append_line(&format!("#define {import}"));
            body.append_line("#ifdef _MSC_VER");
            body.new_child(1)?
                .append_line(&format!("#define {api} __declspec(dllimport)"));
            body.append_line("#else");
            body.new_child(1)?.append_line(&format!("#define {api}"));
            body.append_line("#endif");
        }
        out.append_line("#endif");
        out.newline();
        out.append_line("#else");
        {
            let body = out.indent();
            body.append_line(&format!("#define {api}"));
            body.append_line(&format!("#ifndef {export}"));
            body.new_child(1)?.append_line(&format!("#define {import}"));
            body.append_line("#endif");
        }
        out.append_line("#endif");
        Ok(())
    }
}
