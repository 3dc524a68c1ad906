//! Exported function declarations.

use cb_emit::{CodeEmitter, CodeWriter};
use cb_ir::MethodDecl;
use cb_naming::BindingError;

use crate::types::{c_type, parameter_list};

/// `API ret name(params);` for one module method.
///
/// Types are resolved up front so writing cannot fail.
pub struct MethodDeclaration<'a> {
    api_macro: &'a str,
    return_type: &'a str,
    name: &'a str,
    params: String,
}

impl<'a> MethodDeclaration<'a> {
    pub fn new(method: &'a MethodDecl, api_macro: &'a str) -> Result<Self, BindingError> {
        Ok(MethodDeclaration {
            api_macro,
            return_type: c_type(&method.signature.return_type)?,
            name: method
                .attributes
                .explicit_binding()
                .unwrap_or(method.name.as_str()),
            params: parameter_list(&method.signature.params)?,
        })
    }
}

impl CodeWriter for MethodDeclaration<'_> {
    fn write(&self, out: &CodeEmitter) {
        out.append(self.api_macro)
            .append(" ")
            .append(self.return_type)
            .append(" ")
            .append(self.name)
            .append("(")
            .append(&self.params)
            .append_line(");");
    }
}
