//! Header generators.
//!
//! One [`ContentGenerator`](cb_context::ContentGenerator) per file kind:
//! the export-macro header, the shared types header, one header per module,
//! the umbrella library header, and the base types header.

mod base_types;
mod libdefs;
mod library;
mod module;
mod types_header;

pub use base_types::BaseTypesHeader;
pub use libdefs::LibDefsHeader;
pub use library::LibraryHeader;
pub use module::ModuleHeader;
pub use types_header::TypesHeader;

use cb_emit::CodeEmitter;

/// Banner written ahead of generated sources.
pub const SOURCE_PREAMBLE: &str = "/* This file was generated. DO NOT EDIT! */";

pub const BASE_TYPES_HEADER: &str = "CBBaseTypes.h";

/// `<LIB>_<suffix>`, the prefix of every export macro.
fn library_macro(library_name: &str, suffix: &str) -> String {
    format!("{}_{suffix}", library_name.to_uppercase())
}

/// `<LIB>_SHARED_API`.
pub fn api_macro(library_name: &str) -> String {
    library_macro(library_name, "SHARED_API")
}

fn open_extern_c(out: &CodeEmitter, marker: &str) {
    out.append_line("#ifdef __cplusplus");
    out.append_line("extern \"C\"");
    out.append_line("{");
    out.append_line(&format!("#endif{marker}"));
}

fn close_extern_c(out: &CodeEmitter, marker: &str) {
    out.append_line("#ifdef __cplusplus");
    out.append_line("}");
    out.append_line(&format!("#endif{marker}"));
}
