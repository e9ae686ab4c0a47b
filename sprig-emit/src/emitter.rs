//! Tree-walk emitter, one rule per node kind.
//!
//! Types are erased: type declarations (and the unions and parameter lists inside them) emit
//! nothing.
//!
//! Parameters are emitted as written. Literal parameters of a function declaration
//! (`fun f 1 = 1`) are valid syntax trees but do not produce valid JavaScript.

use sprig_parser::ast::{Node, NodeData, NodeKind};
use sprig_parser::visitor::Visitor;

/// Emits `node` (usually a `Program`) as JavaScript.
pub fn emit(node: &Node) -> String {
    let mut emitter = Emitter::new();
    emitter.visit_node(node);
    emitter.into_inner()
}

/// Generate JavaScript from an abstract syntax tree.
pub struct Emitter {
    out: String,
    /// Current block nesting, for indentation.
    depth: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    /// Consumes `self` and returns the generated source.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn indent(&mut self) {
        for _i in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn statements<'ast>(body: &'ast [Node]) -> impl Iterator<Item = &'ast Node> {
        body.iter()
            .filter(|stmt| !stmt.is_kind(NodeKind::TypeDeclaration))
    }

    fn open_block(&mut self) {
        self.write("{\n");
        self.depth += 1;
    }

    fn close_block(&mut self) {
        self.depth -= 1;
        self.indent();
        self.write("}");
    }

    /// `id(a, b)`
    fn application(&mut self, id: &Node, params: &[Node]) {
        self.visit_node(id);
        self.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.visit_node(param);
        }
        self.write(")");
    }

    /// Math operands are parenthesised so the parsed grouping survives JavaScript's precedence.
    fn operand(&mut self, node: &Node) {
        if node.is_kind(NodeKind::MathExpression) {
            self.write("(");
            self.visit_node(node);
            self.write(")");
        } else {
            self.visit_node(node);
        }
    }

    fn function(&mut self, left: &Node, right: &Node) {
        self.write("function ");
        self.visit_node(left);
        if left.is_kind(NodeKind::Identifier) {
            self.write("()");
        }
        self.write(" ");

        if right.is_kind(NodeKind::BlockStatement) {
            self.visit_node(right);
        } else {
            self.open_block();
            self.indent();
            self.write("return ");
            self.visit_node(right);
            self.write(";\n");
            self.close_block();
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> Visitor<'ast> for Emitter {
    fn visit_node(&mut self, node: &'ast Node) {
        // Do not use default walking logic.

        match node.data() {
            NodeData::Program { body } => {
                self.write("'use strict';\n");
                for stmt in Self::statements(body) {
                    self.write("\n");
                    self.visit_node(stmt);
                    self.write("\n");
                }
            }
            NodeData::MainDeclaration { value } => {
                self.visit_node(value);
                self.write(";");
            }
            NodeData::TypeDeclaration { .. }
            | NodeData::TypeParameterExpression { .. }
            | NodeData::UnionOperation { .. } => {}
            NodeData::LetDeclaration { value } => {
                self.write("var ");
                self.visit_node(value);
                self.write(";");
            }
            NodeData::FunctionDeclaration { value } => match value.data() {
                NodeData::AssignmentExpression { left, right } => self.function(left, right),
                _ => unreachable!("function declarations wrap an assignment"),
            },
            NodeData::ReturnStatement { value } => {
                self.write("return ");
                self.visit_node(value);
                self.write(";");
            }
            NodeData::BlockStatement { body } => {
                self.open_block();
                for stmt in Self::statements(body) {
                    self.indent();
                    self.visit_node(stmt);
                    self.write("\n");
                }
                self.close_block();
            }
            NodeData::FunctionParameterExpression { id, params }
            | NodeData::FunctionCallExpression { id, params } => self.application(id, params),
            NodeData::TypeInstantiationExpression { id, params } => {
                self.write("new ");
                self.application(id, params);
            }
            NodeData::AssignmentExpression { left, right } => {
                self.visit_node(left);
                self.write(" = ");
                self.visit_node(right);
            }
            NodeData::MathExpression {
                left,
                right,
                operator,
            } => {
                self.operand(left);
                self.write(" ");
                self.write(operator.as_str());
                self.write(" ");
                self.operand(right);
            }
            NodeData::Identifier { name } => self.write(name),
            NodeData::StringLiteral { value } => {
                let quoted = format!("{:?}", value);
                self.write(&quoted);
            }
            NodeData::NumericLiteral { value } => {
                let text = match *value {
                    v if v == f64::INFINITY => "Infinity".to_string(),
                    v if v == f64::NEG_INFINITY => "-Infinity".to_string(),
                    v => v.to_string(),
                };
                self.write(&text);
            }
            NodeData::BooleanLiteral { value } => self.write(if *value { "true" } else { "false" }),
        }
    }
}
