//! `CBBaseTypes.h`: fixed-width integers and the interop scalar types the
//! other headers refer to.

use cb_context::{CompilationAggregate, ContentGenerator, GenerateError};
use cb_emit::CodeEmitter;

use super::SOURCE_PREAMBLE;

const CONTENT: &str = "\
#ifndef CODE_BINDER_BASE_TYPES
#define CODE_BINDER_BASE_TYPES

#ifdef __cplusplus
#include <cstdint>
#else // __cplusplus
#include <stdint.h>
#include <uchar.h>
#endif // __cplusplus

typedef signed char cbbool;
typedef char16_t cbchar_t;
typedef const char* cbstring;

#endif // CODE_BINDER_BASE_TYPES";

pub struct BaseTypesHeader;

impl ContentGenerator for BaseTypesHeader {
    fn write(&self, _: &CompilationAggregate<'_>, out: &CodeEmitter) -> Result<(), GenerateError> {
        out.append_line(CONTENT);
        Ok(())
    }

    fn generated_preamble(&self) -> Option<&str> {
        Some(SOURCE_PREAMBLE)
    }
}
