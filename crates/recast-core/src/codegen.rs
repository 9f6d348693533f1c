//! Python code generation.
//!
//! [`PythonGenerator`] renders a (possibly rule-rewritten) tree into
//! Python source. Dispatch is an exhaustive `match` over the closed
//! node set, so a tree that type-checks always renders; nothing is
//! registered at runtime.
//!
//! Formatting is deterministic. Statement renderers produce
//! newline-terminated text with indentation already applied; expression
//! renderers produce single-line fragments. The only mutable state is
//! an indentation counter, scoped through a closure-based `indented`
//! helper so the level is restored on every exit path and a statement
//! can never mis-indent its siblings.

use crate::node::{ForLoop, FunctionDecl, Literal, Node, RangeLoop, TranslationUnit, VarDecl};

const INDENT_UNIT: &str = "    ";

/// Function name that gets the `if __name__ == "__main__"` trailer.
const ENTRY_POINT: &str = "main";

/// Map a declared source type to a Python annotation.
///
/// A leading `const ` qualifier is stripped before lookup. Types absent
/// from the table yield `None`: omitting an annotation is always safe,
/// fabricating one is not.
pub fn map_type(declared: &str) -> Option<&'static str> {
    let base = declared.strip_prefix("const ").unwrap_or(declared);
    match base {
        "int" => Some("int"),
        "float" | "double" => Some("float"),
        "bool" => Some("bool"),
        "string" | "std::string" => Some("str"),
        "void" => Some("None"),
        _ => None,
    }
}

/// Renders a tree as formatted Python text.
#[derive(Debug, Default)]
pub struct PythonGenerator {
    indent: usize,
}

impl PythonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `node`. A `TranslationUnit` renders as a whole module;
    /// any other node renders as a single statement.
    pub fn generate(&mut self, node: &Node) -> String {
        match node {
            Node::TranslationUnit(unit) => self.emit_unit(unit),
            other => self.emit_stmt(other),
        }
    }

    /// Top-level children render blank-line separated. Bare identifiers
    /// are the front-end's placeholders for unsupported top-level
    /// constructs and are skipped rather than rendered as stray names.
    fn emit_unit(&mut self, unit: &TranslationUnit) -> String {
        let chunks: Vec<String> = unit
            .body
            .iter()
            .filter(|child| !matches!(child, Node::Identifier(_)))
            .map(|child| self.emit_stmt(child))
            .collect();
        chunks.join("\n")
    }

    /// Render one statement, newline-terminated, at the current indent.
    fn emit_stmt(&mut self, node: &Node) -> String {
        match node {
            Node::FunctionDecl(func) => self.emit_function(func),
            Node::ForLoop(loop_) => self.emit_for_fallback(loop_),
            Node::RangeLoop(loop_) => self.emit_range_loop(loop_),
            simple => format!("{}{}\n", self.ws(), self.expr(simple)),
        }
    }

    fn emit_function(&mut self, func: &FunctionDecl) -> String {
        let params: Vec<String> = func.params.iter().map(|p| self.param(p)).collect();
        let ret_hint = match map_type(&func.return_type) {
            Some(mapped) if mapped != "None" => format!(" -> {mapped}"),
            _ => String::new(),
        };

        let mut out = format!(
            "{}def {}({}){}:\n",
            self.ws(),
            func.name,
            params.join(", "),
            ret_hint
        );
        out.push_str(&self.indented(|gen| gen.emit_block(&func.body)));

        if func.name == ENTRY_POINT {
            out.push_str("\nif __name__ == \"__main__\":\n    main()\n");
        }
        out
    }

    /// A loop the canonicalization rule declined: still render valid
    /// output by lowering to init + `while`, with the increment as the
    /// last statement of the loop body.
    fn emit_for_fallback(&mut self, loop_: &ForLoop) -> String {
        let mut out = format!("{}# for loop was not canonicalized; kept as a while loop\n", self.ws());
        out.push_str(&format!("{}{}\n", self.ws(), self.expr(&loop_.init)));
        out.push_str(&format!("{}while {}:\n", self.ws(), self.expr(&loop_.cond)));
        out.push_str(&self.indented(|gen| {
            let mut body = String::new();
            for stmt in &loop_.body {
                body.push_str(&gen.emit_stmt(stmt));
            }
            body.push_str(&format!("{}{}\n", gen.ws(), gen.expr(&loop_.inc)));
            body
        }));
        out
    }

    fn emit_range_loop(&mut self, loop_: &RangeLoop) -> String {
        let mut out = format!(
            "{}for {} in range({}):\n",
            self.ws(),
            loop_.var,
            self.expr(&loop_.bound)
        );
        out.push_str(&self.indented(|gen| gen.emit_block(&loop_.body)));
        out
    }

    /// Render a statement sequence at the current indent; an empty body
    /// renders a single `pass`.
    fn emit_block(&mut self, stmts: &[Node]) -> String {
        if stmts.is_empty() {
            return format!("{}pass\n", self.ws());
        }
        stmts.iter().map(|stmt| self.emit_stmt(stmt)).collect()
    }

    /// Render a single-line expression fragment.
    fn expr(&self, node: &Node) -> String {
        match node {
            Node::Identifier(id) => id.name.clone(),
            Node::Literal(Literal::Int(value)) => value.to_string(),
            // Debug formatting keeps the decimal point on whole floats.
            Node::Literal(Literal::Float(value)) => format!("{value:?}"),
            Node::Literal(Literal::Str(value)) => {
                format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
            // Full parenthesization guarantees precedence at any
            // nesting depth.
            Node::BinaryOp(op) => {
                format!("({} {} {})", self.expr(&op.left), op.op, self.expr(&op.right))
            }
            Node::UnaryOp(op) => match op.op.as_str() {
                "++" => format!("{} += 1", self.expr(&op.operand)),
                "--" => format!("{} -= 1", self.expr(&op.operand)),
                other => format!("{}{}", other, self.expr(&op.operand)),
            },
            Node::CallExpr(call) => {
                let args: Vec<String> = call.args.iter().map(|arg| self.expr(arg)).collect();
                format!("{}({})", self.expr(&call.callee), args.join(", "))
            }
            Node::VarDecl(decl) => self.var_decl(decl),
            // Block-shaped nodes have no expression form. A well-formed
            // tree never puts one here; degrade to a visible placeholder
            // instead of panicking.
            unsupported => format!("UNRENDERABLE<{}>", unsupported.kind_name()),
        }
    }

    /// `name[: T] = init`, with `None` standing in for a missing
    /// initializer. Declaration is implicit in Python, so the statement
    /// form always assigns.
    fn var_decl(&self, decl: &VarDecl) -> String {
        let hint = map_type(&decl.declared_type)
            .map(|mapped| format!(": {mapped}"))
            .unwrap_or_default();
        match &decl.init {
            Some(init) => format!("{}{} = {}", decl.name, hint, self.expr(init)),
            None => format!("{}{} = None", decl.name, hint),
        }
    }

    /// Parameters annotate but do not default to `None`; an explicit
    /// initializer becomes a default value.
    fn param(&self, decl: &VarDecl) -> String {
        let hint = map_type(&decl.declared_type)
            .map(|mapped| format!(": {mapped}"))
            .unwrap_or_default();
        match &decl.init {
            Some(init) => format!("{}{} = {}", decl.name, hint, self.expr(init)),
            None => format!("{}{}", decl.name, hint),
        }
    }

    fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.indent += 1;
        let out = f(self);
        self.indent -= 1;
        out
    }

    fn ws(&self) -> String {
        INDENT_UNIT.repeat(self.indent)
    }
}
