//! Visitor pattern for AST nodes.

use crate::ast::{Node, NodeData};

pub trait Visitor<'ast>: Sized {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }
}

/// Visits the children of `node` in source order.
pub fn walk_node<'ast>(visitor: &mut impl Visitor<'ast>, node: &'ast Node) {
    /// Iteratively visit all nodes in a `Vec<Node>`.
    macro_rules! visit_node_list {
        ($visitor: expr, $body: expr) => {
            for node in $body {
                Visitor::visit_node($visitor, node);
            }
        };
    }

    match node.data() {
        NodeData::Program { body } | NodeData::BlockStatement { body } => {
            visit_node_list!(visitor, body)
        }
        NodeData::MainDeclaration { value }
        | NodeData::TypeDeclaration { value }
        | NodeData::LetDeclaration { value }
        | NodeData::FunctionDeclaration { value }
        | NodeData::ReturnStatement { value } => visitor.visit_node(value),
        NodeData::FunctionParameterExpression { id, params }
        | NodeData::TypeParameterExpression { id, params }
        | NodeData::FunctionCallExpression { id, params }
        | NodeData::TypeInstantiationExpression { id, params } => {
            visitor.visit_node(id);
            visit_node_list!(visitor, params);
        }
        NodeData::AssignmentExpression { left, right }
        | NodeData::MathExpression { left, right, .. } => {
            visitor.visit_node(left);
            visitor.visit_node(right);
        }
        NodeData::UnionOperation { values } => visit_node_list!(visitor, values),
        NodeData::Identifier { .. }
        | NodeData::StringLiteral { .. }
        | NodeData::NumericLiteral { .. }
        | NodeData::BooleanLiteral { .. } => {}
    }
}
