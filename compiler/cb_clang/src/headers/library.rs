//! `<library>.h`: umbrella header including every module header.

use cb_context::{CompilationAggregate, ContentGenerator, GenerateError};
use cb_emit::CodeEmitter;

use super::SOURCE_PREAMBLE;

pub struct LibraryHeader;

impl ContentGenerator for LibraryHeader {
    fn write(&self, aggregate: &CompilationAggregate<'_>, out: &CodeEmitter) -> Result<(), GenerateError> {
        out.append_line("#pragma once");
        out.newline();
        out.append_line("#include \"libdefs.h\"");
        out.append_line("#include \"Types.h\"");
        out.newline();
        out.append_line("// Modules");
        let tree = aggregate.tree();
        for &module in aggregate.modules().modules() {
            out.append("#include \"")
                .append(tree.name(module))
                .append_line(".h\"");
        }
        Ok(())
    }

    fn generated_preamble(&self) -> Option<&str> {
        Some(SOURCE_PREAMBLE)
    }
}
