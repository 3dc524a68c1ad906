//! C Header Target for Codebind
//!
//! Renders the collected bindings as plain C headers:
//!
//! ```text
//! <library>.h     umbrella header, includes every module
//! libdefs.h       <LIB>_SHARED_API export/import macros
//! Types.h         opaque types, enums (+ sentinel), callbacks, structs
//! CBBaseTypes.h   interop scalar typedefs
//! <Module>.h      one per module, functions in module order
//! ```

mod headers;
mod method;
mod types;

use cb_context::{CompilationAggregate, ContextId, ContextKind, Conversion, Target};

pub use headers::{api_macro, SOURCE_PREAMBLE};
pub use types::c_type;

use headers::{
    BaseTypesHeader, LibDefsHeader, LibraryHeader, ModuleHeader, TypesHeader, BASE_TYPES_HEADER,
};

/// The C target.
#[derive(Copy, Clone, Debug, Default)]
pub struct CLangTarget;

impl Target for CLangTarget {
    fn name(&self) -> &str {
        "C"
    }

    fn context_conversions(&self, aggregate: &CompilationAggregate<'_>, id: ContextId) -> Vec<Conversion> {
        match aggregate.context(id).kind() {
            ContextKind::ModuleParent { name } => {
                vec![Conversion::new(format!("{name}.h"), ModuleHeader::new(name.as_str()))]
            }
            _ => Vec::new(),
        }
    }

    fn default_conversions(&self, aggregate: &CompilationAggregate<'_>) -> Vec<Conversion> {
        vec![
            Conversion::new(format!("{}.h", aggregate.library_name()), LibraryHeader),
            Conversion::new("libdefs.h", LibDefsHeader),
            Conversion::new("Types.h", TypesHeader),
            Conversion::new(BASE_TYPES_HEADER, BaseTypesHeader),
        ]
    }
}
