//! Source type to C type mapping.

use cb_ir::{Param, TypeRef};
use cb_naming::BindingError;

/// C spelling of `ty`.
///
/// Named types are already-bound identifiers and pass through unchanged.
/// Predefined types without a C counterpart are rejected.
pub fn c_type(ty: &TypeRef) -> Result<&str, BindingError> {
    match ty {
        TypeRef::Named(name) => Ok(name.as_str()),
        TypeRef::Predefined(name) => predefined(name).ok_or_else(|| BindingError::UnsupportedType {
            type_name: name.clone(),
        }),
    }
}

fn predefined(name: &str) -> Option<&'static str> {
    let c_name = match name {
        "void" => "void",
        "bool" => "cbbool",
        "char" => "cbchar_t",
        "byte" => "uint8_t",
        "sbyte" => "int8_t",
        "short" => "int16_t",
        "ushort" => "uint16_t",
        "int" => "int",
        "uint" => "uint32_t",
        "long" => "int64_t",
        "ulong" => "uint64_t",
        "float" => "float",
        "double" => "double",
        "IntPtr" | "nint" => "void*",
        "string" => "cbstring",
        _ => return None,
    };
    Some(c_name)
}

/// `type name, type name` for a parameter list.
pub fn parameter_list(params: &[Param]) -> Result<String, BindingError> {
    let mut list = String::new();
    for (i, param) in params.iter().enumerate() {
        if i != 0 {
            list.push_str(", ");
        }
        list.push_str(c_type(&param.ty)?);
        list.push(' ');
        list.push_str(&param.name);
    }
    Ok(list)
}
