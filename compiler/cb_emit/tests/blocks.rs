//! Block-structured output through the public emitter API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use cb_emit::{CodeEmitter, CodeWriter, EmitError, EmitterConfig};
use pretty_assertions::assert_eq;

struct Field<'a> {
    ty: &'a str,
    name: &'a str,
}

impl CodeWriter for Field<'_> {
    fn write(&self, out: &CodeEmitter) {
        out.append(self.ty).append(" ").append(self.name).append_line(";");
    }
}

fn type_block<'a>(out: &'a CodeEmitter, name: &str) -> cb_emit::Scope<'a> {
    out.append_line("{");
    out.indent_with(&format!("}} {name};"), true)
}

#[test]
fn nested_type_blocks() {
    let out = CodeEmitter::new();
    out.append_line("typedef struct");
    {
        let body = type_block(&out, "SLSize");
        body.append_writer(&Field { ty: "float", name: "width" });
        body.append_writer(&Field { ty: "float", name: "height" });
        body.append_line("struct");
        let inner = type_block(&body, "origin");
        inner.append_writer(&Field { ty: "int", name: "x" });
    }
    assert_eq!(
        out.into_output(),
        "\
typedef struct
{
    float width;
    float height;
    struct
    {
        int x;
    } origin;
} SLSize;
"
    );
}

#[test]
fn child_emitter_writes_inline_block() {
    let out = CodeEmitter::with_config(EmitterConfig::with_indent_width(2));
    out.append_line("#ifdef EXPORT");
    {
        let child = out.new_child(1).unwrap();
        child.append_line("#define API __declspec(dllexport)");
        assert_eq!(out.new_child(1).err(), Some(EmitError::ChildAlreadyActive));
    }
    out.append_line("#endif");
    assert_eq!(
        out.output(),
        "#ifdef EXPORT\n  #define API __declspec(dllexport)\n#endif\n"
    );
}

#[test]
fn closure_writers() {
    let out = CodeEmitter::new();
    let params = |out: &CodeEmitter| {
        out.append("int a, int b");
    };
    out.append("int add(").append_writer(&params).append_line(");");
    assert_eq!(out.output(), "int add(int a, int b);\n");
}
