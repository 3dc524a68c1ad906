//! `Types.h`: opaque types, enums, callbacks and structs shared by every
//! module header.

use cb_context::{CompilationAggregate, ContentGenerator, GenerateError};
use cb_emit::CodeEmitter;
use cb_ir::DeclaredType;
use cb_naming::{enum_binding, type_binding};

use super::{close_extern_c, open_extern_c, BASE_TYPES_HEADER};
use crate::types::{c_type, parameter_list};

pub struct TypesHeader;

impl ContentGenerator for TypesHeader {
    #[tracing::instrument(level = "trace", skip_all)]
    fn write(&self, aggregate: &CompilationAggregate<'_>, out: &CodeEmitter) -> Result<(), GenerateError> {
        out.append_line("#pragma once");
        out.newline();
        out.append_line(&format!("#include \"{BASE_TYPES_HEADER}\""));
        out.newline();
        write_opaque_types(out, aggregate.opaque_types());
        open_extern_c(out, " // __cplusplus");
        write_enums(out, aggregate.enums())?;
        write_callbacks(out, aggregate.callbacks())?;
        write_structs(out, aggregate.struct_types())?;
        out.newline();
        close_extern_c(out, " // __cplusplus");
        Ok(())
    }
}

fn write_opaque_types(out: &CodeEmitter, types: &[&DeclaredType]) {
    if types.is_empty() {
        return;
    }

    out.append_line("// Opaque types");
    out.newline();
    for decl in types {
        out.append("#define ")
            .append(type_binding(decl))
            .append_line(" void");
    }
    out.newline();
}

fn write_enums(out: &CodeEmitter, enums: &[&DeclaredType]) -> Result<(), GenerateError> {
    out.append_line("// Enums");
    out.newline();
    for decl in enums {
        let binding = enum_binding(decl)?;
        out.append_line("typedef enum");
        out.append_line("{");
        let body = out.indent_with(&format!("}} {};", binding.name), true);
        for constant in binding.all_constants() {
            body.append(&constant.name)
                .append(" = ")
                .append(&constant.value.to_string())
                .append_line(",");
        }
        body.release();
        out.newline();
    }
    Ok(())
}

fn write_callbacks(out: &CodeEmitter, callbacks: &[&DeclaredType]) -> Result<(), GenerateError> {
    out.append_line("// Function pointer delegates");
    out.newline();
    for decl in callbacks {
        let signature = decl.signature.clone().unwrap_or_default();
        out.append("typedef ")
            .append(c_type(&signature.return_type)?)
            .append("(*")
            .append(type_binding(decl))
            .append(")(")
            .append(&parameter_list(&signature.params)?)
            .append_line(");");
    }
    Ok(())
}

fn write_structs(out: &CodeEmitter, structs: &[&DeclaredType]) -> Result<(), GenerateError> {
    if structs.is_empty() {
        return Ok(());
    }

    out.append_line("// Struct types");
    out.newline();
    for decl in structs {
        out.append("struct ").append_line(type_binding(decl));
        out.append_line("{");
        let body = out.indent_with("};", true);
        for field in decl.fields().filter(|field| !field.attributes.is_ignored()) {
            body.append(c_type(&field.ty)?)
                .append(" ")
                .append(&field.name)
                .append_line(";");
        }
        body.release();
        out.newline();
    }
    Ok(())
}
