//! `CodeEmitter` implementation.
//!
//! The backing text sink is shared between a root emitter and its children.
//! Each emitter instance owns a frame (indent level, open scopes, active
//! child); the parent frame owns its child frame, the child only keeps a weak
//! link back.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use crate::error::EmitError;

/// Spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Emitter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Spaces written per indentation level.
    pub indent_width: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl EmitterConfig {
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

/// Writes one item into an emitter.
///
/// Implemented by target-specific fragment writers (a method declaration,
/// a parameter list) so they can be appended inline.
pub trait CodeWriter {
    fn write(&self, out: &CodeEmitter);
}

impl<F> CodeWriter for F
where
    F: Fn(&CodeEmitter),
{
    fn write(&self, out: &CodeEmitter) {
        self(out);
    }
}

/// Backing text shared by a root emitter and all of its children.
struct Sink {
    buffer: String,
    indent_width: usize,
    /// Next text starts a physical line and must be indented first.
    at_line_start: bool,
}

impl Sink {
    /// Write `text`, indenting every non-blank piece that starts a physical
    /// line. `\r\n`, `\r` and `\n` are all written as `\n`.
    fn write(&mut self, level: usize, text: &str) {
        let mut rest = text;
        while let Some(pos) = rest.find(|c: char| c == '\r' || c == '\n') {
            self.write_piece(level, &rest[..pos]);
            self.buffer.push('\n');
            self.at_line_start = true;

            let newline = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[pos + newline..];
        }
        self.write_piece(level, rest);
    }

    fn write_line(&mut self, level: usize, text: &str) {
        self.write(level, text);
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Text without newlines. Empty pieces leave blank lines unindented.
    fn write_piece(&mut self, level: usize, piece: &str) {
        if piece.is_empty() {
            return;
        }

        if self.at_line_start {
            let width = level * self.indent_width;
            self.buffer.extend(std::iter::repeat(' ').take(width));
            self.at_line_start = false;
        }
        self.buffer.push_str(piece);
    }
}

/// An open scope: indentation to give back and text to append on release.
struct ScopeFrame {
    levels: usize,
    closing: Option<String>,
    closing_on_own_line: bool,
}

struct Frame {
    indent_level: usize,
    /// Levels added when this child was created; cleared by the first write.
    instance_indent: usize,
    scopes: Vec<ScopeFrame>,
    child: Option<Rc<RefCell<Frame>>>,
    closed: bool,
}

impl Frame {
    fn new(indent_level: usize, instance_indent: usize) -> Self {
        Frame {
            indent_level,
            instance_indent,
            scopes: Vec::new(),
            child: None,
            closed: false,
        }
    }
}

/// Indentation-aware text sink with disposable scopes and inline children.
///
/// # Example
///
/// ```
/// use cb_emit::CodeEmitter;
///
/// let out = CodeEmitter::new();
/// out.append_line("struct Point");
/// out.append_line("{");
/// {
///     let body = out.indent_with("};", true);
///     body.append_line("int x;");
///     body.append_line("int y;");
/// }
/// assert_eq!(out.output(), "struct Point\n{\n    int x;\n    int y;\n};\n");
/// ```
pub struct CodeEmitter {
    sink: Rc<RefCell<Sink>>,
    frame: Rc<RefCell<Frame>>,
    parent: Option<Weak<RefCell<Frame>>>,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEmitter {
    /// Create a root emitter with default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        CodeEmitter {
            sink: Rc::new(RefCell::new(Sink {
                buffer: String::with_capacity(4096),
                indent_width: config.indent_width,
                at_line_start: true,
            })),
            frame: Rc::new(RefCell::new(Frame::new(0, 0))),
            parent: None,
        }
    }

    /// Append text, indenting first if it starts a physical line.
    pub fn append(&self, text: &str) -> &Self {
        self.prepare_write();
        let level = self.frame.borrow().indent_level;
        self.sink.borrow_mut().write(level, text);
        self
    }

    /// Append text followed by a newline.
    pub fn append_line(&self, text: &str) -> &Self {
        self.prepare_write();
        let level = self.frame.borrow().indent_level;
        self.sink.borrow_mut().write_line(level, text);
        self
    }

    /// Terminate the current line.
    pub fn newline(&self) -> &Self {
        self.append_line("")
    }

    /// Let `writer` append its item at the current position.
    pub fn append_writer(&self, writer: &dyn CodeWriter) -> &Self {
        self.check_open();
        self.close_child();
        writer.write(self);
        self
    }

    /// Open a scope that adds `levels` of indentation until released.
    ///
    /// On release, `closing` is appended inline, or as its own line when
    /// `closing_on_own_line` is set.
    pub fn open_scope(
        &self,
        levels: usize,
        closing: Option<&str>,
        closing_on_own_line: bool,
    ) -> Result<Scope<'_>, EmitError> {
        if levels == 0 {
            return Err(EmitError::NonPositiveIndent);
        }
        if self.is_closed() {
            return Err(EmitError::Closed);
        }

        Ok(self.push_scope(levels, closing, closing_on_own_line))
    }

    /// One level of indentation with no closing text.
    pub fn indent(&self) -> Scope<'_> {
        self.check_open();
        self.push_scope(1, None, false)
    }

    /// One level of indentation, appending `closing` on release.
    pub fn indent_with(&self, closing: &str, closing_on_own_line: bool) -> Scope<'_> {
        self.check_open();
        self.push_scope(1, Some(closing), closing_on_own_line)
    }

    /// Zero-level scope that only appends `closing` on release.
    pub fn with_closing(&self, closing: &str) -> Scope<'_> {
        self.check_open();
        self.push_scope(0, Some(closing), false)
    }

    /// Create a nested emitter sharing the sink, `levels` deeper than this one.
    ///
    /// Only one child may be open at a time. Any write on this emitter
    /// closes the child first.
    pub fn new_child(&self, levels: usize) -> Result<CodeEmitter, EmitError> {
        if levels == 0 {
            return Err(EmitError::NonPositiveIndent);
        }
        if self.is_closed() {
            return Err(EmitError::Closed);
        }

        let mut frame = self.frame.borrow_mut();
        if frame.child.is_some() {
            return Err(EmitError::ChildAlreadyActive);
        }

        let child = Rc::new(RefCell::new(Frame::new(frame.indent_level + levels, levels)));
        frame.child = Some(Rc::clone(&child));
        Ok(CodeEmitter {
            sink: Rc::clone(&self.sink),
            frame: child,
            parent: Some(Rc::downgrade(&self.frame)),
        })
    }

    /// Undo the indentation a freshly created child was opened with.
    ///
    /// Has no effect once the child has written anything.
    pub fn reset_child_indent(&self) {
        self.check_open();
        self.close_child();
        let mut frame = self.frame.borrow_mut();
        if frame.instance_indent != 0 {
            frame.indent_level -= frame.instance_indent;
            frame.instance_indent = 0;
        }
    }

    /// Close this emitter: the active child first, then every open scope,
    /// innermost first. Closing twice is a no-op.
    pub fn close(&self) {
        if self.is_closed() {
            return;
        }

        if let Some(parent) = self.parent.as_ref().and_then(Weak::upgrade) {
            let mut parent = parent.borrow_mut();
            if parent
                .child
                .as_ref()
                .is_some_and(|child| Rc::ptr_eq(child, &self.frame))
            {
                parent.child = None;
            }
        }

        close_frame(&self.frame, &self.sink);
    }

    pub fn is_closed(&self) -> bool {
        self.frame.borrow().closed
    }

    /// Current indentation level in levels, not spaces.
    pub fn indent_level(&self) -> usize {
        self.frame.borrow().indent_level
    }

    /// Number of scopes currently open on this instance.
    pub fn open_scopes(&self) -> usize {
        self.frame.borrow().scopes.len()
    }

    /// Whether a child emitter is currently open on this instance.
    pub fn has_active_child(&self) -> bool {
        self.frame.borrow().child.is_some()
    }

    /// Text produced so far. Closes the active child first.
    pub fn output(&self) -> String {
        self.close_child();
        self.sink.borrow().buffer.clone()
    }

    /// Close this emitter and return the full text.
    pub fn into_output(self) -> String {
        self.close();
        self.sink.borrow().buffer.clone()
    }

    fn push_scope(&self, levels: usize, closing: Option<&str>, closing_on_own_line: bool) -> Scope<'_> {
        self.close_child();
        let mut frame = self.frame.borrow_mut();
        frame.indent_level += levels;
        frame.scopes.push(ScopeFrame {
            levels,
            closing: closing.map(str::to_string),
            closing_on_own_line,
        });
        Scope { emitter: self }
    }

    /// Release the innermost scope of this instance.
    fn release_scope(&self) {
        if self.is_closed() {
            return;
        }

        self.close_child();
        let scope = self.frame.borrow_mut().scopes.pop();
        match scope {
            Some(scope) => release(&self.frame, &self.sink, scope),
            None => panic!(
                "unbalanced scope release: no scope is open on this emitter \
                 (children must not be spawned inside scoped blocks)"
            ),
        }
    }

    fn prepare_write(&self) {
        self.check_open();
        self.close_child();
        self.frame.borrow_mut().instance_indent = 0;
    }

    fn check_open(&self) {
        assert!(!self.is_closed(), "{}", EmitError::Closed);
    }

    fn close_child(&self) {
        let child = self.frame.borrow_mut().child.take();
        if let Some(child) = child {
            close_frame(&child, &self.sink);
        }
    }
}

impl Drop for CodeEmitter {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.close();
        }
    }
}

fn close_frame(frame: &Rc<RefCell<Frame>>, sink: &RefCell<Sink>) {
    let child = frame.borrow_mut().child.take();
    if let Some(child) = child {
        close_frame(&child, sink);
    }

    loop {
        let scope = frame.borrow_mut().scopes.pop();
        match scope {
            Some(scope) => release(frame, sink, scope),
            None => break,
        }
    }

    frame.borrow_mut().closed = true;
}

fn release(frame: &RefCell<Frame>, sink: &RefCell<Sink>, scope: ScopeFrame) {
    let level = {
        let mut frame = frame.borrow_mut();
        debug_assert!(frame.indent_level >= scope.levels);
        frame.indent_level -= scope.levels;
        frame.indent_level
    };

    let mut sink = sink.borrow_mut();
    match scope.closing {
        Some(closing) if scope.closing_on_own_line => sink.write_line(level, &closing),
        Some(closing) => sink.write(level, &closing),
        None if scope.closing_on_own_line => sink.write_line(level, ""),
        None => {}
    }
}

/// Guard for an open scope; releases it on drop.
///
/// Dereferences to the emitter it was opened on, so writes inside the scope
/// read naturally.
#[must_use = "a scope is released as soon as it is dropped"]
pub struct Scope<'a> {
    emitter: &'a CodeEmitter,
}

impl Scope<'_> {
    /// Release the scope now.
    pub fn release(self) {}
}

impl Deref for Scope<'_> {
    type Target = CodeEmitter;

    fn deref(&self) -> &CodeEmitter {
        self.emitter
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.emitter.release_scope();
        }
    }
}
