//! AST nodes.
//!
//! A [`Node`] can only be obtained through the constructors in this module. Every constructor
//! checks the kinds of the node's children against [`admissible_kinds`] and refuses to build a node
//! with an illegal child, so every tree is structurally valid by construction.

use crate::lexer::Operator;
use sprig_source::Location;
use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Identifier,
    MainDeclaration,
    TypeDeclaration,
    LetDeclaration,
    FunctionDeclaration,
    ReturnStatement,
    BlockStatement,
    FunctionParameterExpression,
    TypeParameterExpression,
    FunctionCallExpression,
    TypeInstantiationExpression,
    AssignmentExpression,
    MathExpression,
    UnionOperation,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Identifier => "Identifier",
            NodeKind::MainDeclaration => "MainDeclaration",
            NodeKind::TypeDeclaration => "TypeDeclaration",
            NodeKind::LetDeclaration => "LetDeclaration",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::FunctionParameterExpression => "FunctionParameterExpression",
            NodeKind::TypeParameterExpression => "TypeParameterExpression",
            NodeKind::FunctionCallExpression => "FunctionCallExpression",
            NodeKind::TypeInstantiationExpression => "TypeInstantiationExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::MathExpression => "MathExpression",
            NodeKind::UnionOperation => "UnionOperation",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A structural position inside a node.
/// `ValueLeft`/`ValueRight` are the sides of the assignment wrapped by a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Body,
    Value,
    ValueLeft,
    ValueRight,
    Id,
    Params,
    Left,
    Right,
    Values,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Body => "body",
            Field::Value => "value",
            Field::ValueLeft => "value.left",
            Field::ValueRight => "value.right",
            Field::Id => "id",
            Field::Params => "params",
            Field::Left => "left",
            Field::Right => "right",
            Field::Values => "values",
        }
    }
}

/// Returns the node kinds allowed at `field` of a `parent` node.
/// Returns an empty slice for fields a kind does not have.
pub fn admissible_kinds(parent: NodeKind, field: Field) -> &'static [NodeKind] {
    use NodeKind::*;

    match (parent, field) {
        (Program, Field::Body) => &[
            MainDeclaration,
            TypeDeclaration,
            LetDeclaration,
            FunctionDeclaration,
        ],
        (MainDeclaration, Field::Value) => &[Identifier, FunctionCallExpression],
        (TypeDeclaration, Field::Value)
        | (LetDeclaration, Field::Value)
        | (FunctionDeclaration, Field::Value) => &[AssignmentExpression],
        (TypeDeclaration, Field::ValueLeft) => &[Identifier, TypeParameterExpression],
        (TypeDeclaration, Field::ValueRight) => &[
            Identifier,
            TypeInstantiationExpression,
            UnionOperation,
            StringLiteral,
            NumericLiteral,
            BooleanLiteral,
        ],
        (LetDeclaration, Field::ValueLeft) => &[Identifier],
        (LetDeclaration, Field::ValueRight) | (ReturnStatement, Field::Value) => &[
            Identifier,
            FunctionCallExpression,
            MathExpression,
            StringLiteral,
            NumericLiteral,
            BooleanLiteral,
        ],
        (FunctionDeclaration, Field::ValueLeft) => &[Identifier, FunctionParameterExpression],
        (FunctionDeclaration, Field::ValueRight) => &[
            Identifier,
            FunctionCallExpression,
            MathExpression,
            StringLiteral,
            NumericLiteral,
            BooleanLiteral,
            BlockStatement,
        ],
        (BlockStatement, Field::Body) => &[TypeDeclaration, LetDeclaration, ReturnStatement],
        (FunctionParameterExpression, Field::Id)
        | (TypeParameterExpression, Field::Id)
        | (FunctionCallExpression, Field::Id)
        | (TypeInstantiationExpression, Field::Id) => &[Identifier],
        (FunctionParameterExpression, Field::Params)
        | (TypeParameterExpression, Field::Params)
        | (FunctionCallExpression, Field::Params)
        | (TypeInstantiationExpression, Field::Params) => {
            &[Identifier, StringLiteral, NumericLiteral, BooleanLiteral]
        }
        (AssignmentExpression, Field::Left) => &[
            Identifier,
            FunctionParameterExpression,
            TypeParameterExpression,
        ],
        (AssignmentExpression, Field::Right) => &[
            Identifier,
            FunctionCallExpression,
            TypeInstantiationExpression,
            MathExpression,
            UnionOperation,
            BlockStatement,
            StringLiteral,
            NumericLiteral,
            BooleanLiteral,
        ],
        (MathExpression, Field::Left) | (MathExpression, Field::Right) => &[
            Identifier,
            FunctionCallExpression,
            MathExpression,
            NumericLiteral,
        ],
        (UnionOperation, Field::Values) => &[
            Identifier,
            TypeInstantiationExpression,
            StringLiteral,
            NumericLiteral,
            BooleanLiteral,
        ],
        _ => &[],
    }
}

/// Arithmetic operator of a [`NodeData::MathExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl MathOperator {
    pub fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Plus => Some(MathOperator::Add),
            Operator::Minus => Some(MathOperator::Sub),
            Operator::Asterisk => Some(MathOperator::Mul),
            Operator::Slash => Some(MathOperator::Div),
            Operator::Assign | Operator::Union => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MathOperator::Add => "+",
            MathOperator::Sub => "-",
            MathOperator::Mul => "*",
            MathOperator::Div => "/",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Program { body: Vec<Node> },
    /// An identifier (e.g. `foo`).
    Identifier { name: String },
    /// The entry point (e.g. `main run 1 2`).
    MainDeclaration { value: Box<Node> },
    TypeDeclaration { value: Box<Node> },
    LetDeclaration { value: Box<Node> },
    FunctionDeclaration { value: Box<Node> },
    ReturnStatement { value: Box<Node> },
    BlockStatement { body: Vec<Node> },
    /// A function name applied to its formal parameters (e.g. `add a b` after `fun`).
    FunctionParameterExpression { id: Box<Node>, params: Vec<Node> },
    /// A type name applied to its type parameters (e.g. `Maybe T` after `type`).
    TypeParameterExpression { id: Box<Node>, params: Vec<Node> },
    FunctionCallExpression { id: Box<Node>, params: Vec<Node> },
    TypeInstantiationExpression { id: Box<Node>, params: Vec<Node> },
    AssignmentExpression { left: Box<Node>, right: Box<Node> },
    MathExpression {
        left: Box<Node>,
        right: Box<Node>,
        operator: MathOperator,
    },
    UnionOperation { values: Vec<Node> },
    StringLiteral { value: String },
    NumericLiteral { value: f64 },
    BooleanLiteral { value: bool },
}

/// A node in the syntax tree. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    data: NodeData,
    loc: Location,
}

/// A constructed node had a child of a kind its parent does not admit.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub parent: NodeKind,
    pub field: Field,
    pub expected: &'static [NodeKind],
    /// `None` when a required child is missing (an empty union).
    pub found: Option<NodeKind>,
    pub loc: Location,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = self
            .expected
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(" or ");
        write!(
            f,
            "expected {} in {}.{}, found ",
            expected,
            self.parent,
            self.field.name()
        )?;
        match self.found {
            Some(kind) => write!(f, "{}", kind)?,
            None => f.write_str("nothing")?,
        }
        write!(f, " at {}", self.loc)
    }
}

impl error::Error for ValidationError {}

fn check(parent: NodeKind, field: Field, child: &Node) -> Result<(), ValidationError> {
    let expected = admissible_kinds(parent, field);
    if expected.contains(&child.kind()) {
        Ok(())
    } else {
        Err(ValidationError {
            parent,
            field,
            expected,
            found: Some(child.kind()),
            loc: child.loc.clone(),
        })
    }
}

fn check_all(parent: NodeKind, field: Field, children: &[Node]) -> Result<(), ValidationError> {
    children
        .iter()
        .try_for_each(|child| check(parent, field, child))
}

/* Constructors */
impl Node {
    fn new(data: NodeData, loc: Location) -> Result<Self, ValidationError> {
        let node = Self { data, loc };
        node.validate()?;
        Ok(node)
    }

    pub fn program(body: Vec<Node>, loc: Location) -> Result<Self, ValidationError> {
        Self::new(NodeData::Program { body }, loc)
    }

    pub fn identifier(name: impl Into<String>, loc: Location) -> Self {
        Self {
            data: NodeData::Identifier { name: name.into() },
            loc,
        }
    }

    pub fn main_declaration(value: Node, loc: Location) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::MainDeclaration {
                value: Box::new(value),
            },
            loc,
        )
    }

    pub fn type_declaration(value: Node, loc: Location) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::TypeDeclaration {
                value: Box::new(value),
            },
            loc,
        )
    }

    pub fn let_declaration(value: Node, loc: Location) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::LetDeclaration {
                value: Box::new(value),
            },
            loc,
        )
    }

    pub fn function_declaration(value: Node, loc: Location) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::FunctionDeclaration {
                value: Box::new(value),
            },
            loc,
        )
    }

    pub fn return_statement(value: Node, loc: Location) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::ReturnStatement {
                value: Box::new(value),
            },
            loc,
        )
    }

    pub fn block_statement(body: Vec<Node>, loc: Location) -> Result<Self, ValidationError> {
        Self::new(NodeData::BlockStatement { body }, loc)
    }

    /// Builds one of the four "name applied to a list" kinds.
    ///
    /// # Panics
    /// Panics if `kind` is not [`NodeKind::FunctionParameterExpression`],
    /// [`NodeKind::TypeParameterExpression`], [`NodeKind::FunctionCallExpression`] or
    /// [`NodeKind::TypeInstantiationExpression`].
    pub fn application(
        kind: NodeKind,
        id: Node,
        params: Vec<Node>,
        loc: Location,
    ) -> Result<Self, ValidationError> {
        let id = Box::new(id);
        let data = match kind {
            NodeKind::FunctionParameterExpression => {
                NodeData::FunctionParameterExpression { id, params }
            }
            NodeKind::TypeParameterExpression => NodeData::TypeParameterExpression { id, params },
            NodeKind::FunctionCallExpression => NodeData::FunctionCallExpression { id, params },
            NodeKind::TypeInstantiationExpression => {
                NodeData::TypeInstantiationExpression { id, params }
            }
            _ => panic!("{} is not an application kind", kind),
        };
        Self::new(data, loc)
    }

    pub fn assignment_expression(
        left: Node,
        right: Node,
        loc: Location,
    ) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::AssignmentExpression {
                left: Box::new(left),
                right: Box::new(right),
            },
            loc,
        )
    }

    pub fn math_expression(
        left: Node,
        operator: MathOperator,
        right: Node,
        loc: Location,
    ) -> Result<Self, ValidationError> {
        Self::new(
            NodeData::MathExpression {
                left: Box::new(left),
                right: Box::new(right),
                operator,
            },
            loc,
        )
    }

    pub fn union_operation(values: Vec<Node>, loc: Location) -> Result<Self, ValidationError> {
        Self::new(NodeData::UnionOperation { values }, loc)
    }

    pub fn string_literal(value: impl Into<String>, loc: Location) -> Self {
        Self {
            data: NodeData::StringLiteral {
                value: value.into(),
            },
            loc,
        }
    }

    pub fn numeric_literal(value: f64, loc: Location) -> Self {
        Self {
            data: NodeData::NumericLiteral { value },
            loc,
        }
    }

    pub fn boolean_literal(value: bool, loc: Location) -> Self {
        Self {
            data: NodeData::BooleanLiteral { value },
            loc,
        }
    }
}

/* Accessors */
impl Node {
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Program { .. } => NodeKind::Program,
            NodeData::Identifier { .. } => NodeKind::Identifier,
            NodeData::MainDeclaration { .. } => NodeKind::MainDeclaration,
            NodeData::TypeDeclaration { .. } => NodeKind::TypeDeclaration,
            NodeData::LetDeclaration { .. } => NodeKind::LetDeclaration,
            NodeData::FunctionDeclaration { .. } => NodeKind::FunctionDeclaration,
            NodeData::ReturnStatement { .. } => NodeKind::ReturnStatement,
            NodeData::BlockStatement { .. } => NodeKind::BlockStatement,
            NodeData::FunctionParameterExpression { .. } => NodeKind::FunctionParameterExpression,
            NodeData::TypeParameterExpression { .. } => NodeKind::TypeParameterExpression,
            NodeData::FunctionCallExpression { .. } => NodeKind::FunctionCallExpression,
            NodeData::TypeInstantiationExpression { .. } => NodeKind::TypeInstantiationExpression,
            NodeData::AssignmentExpression { .. } => NodeKind::AssignmentExpression,
            NodeData::MathExpression { .. } => NodeKind::MathExpression,
            NodeData::UnionOperation { .. } => NodeKind::UnionOperation,
            NodeData::StringLiteral { .. } => NodeKind::StringLiteral,
            NodeData::NumericLiteral { .. } => NodeKind::NumericLiteral,
            NodeData::BooleanLiteral { .. } => NodeKind::BooleanLiteral,
        }
    }

    pub fn is_kind(&self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    /// The name of an [`NodeData::Identifier`].
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Checks the kinds of this node's direct children.
    /// Always succeeds for nodes obtained from the constructors.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let kind = self.kind();
        match &self.data {
            NodeData::Program { body } | NodeData::BlockStatement { body } => {
                check_all(kind, Field::Body, body)
            }
            NodeData::MainDeclaration { value } | NodeData::ReturnStatement { value } => {
                check(kind, Field::Value, value)
            }
            NodeData::TypeDeclaration { value }
            | NodeData::LetDeclaration { value }
            | NodeData::FunctionDeclaration { value } => {
                check(kind, Field::Value, value)?;
                if let NodeData::AssignmentExpression { left, right } = &value.data {
                    check(kind, Field::ValueLeft, left)?;
                    check(kind, Field::ValueRight, right)?;
                }
                Ok(())
            }
            NodeData::FunctionParameterExpression { id, params }
            | NodeData::TypeParameterExpression { id, params }
            | NodeData::FunctionCallExpression { id, params }
            | NodeData::TypeInstantiationExpression { id, params } => {
                check(kind, Field::Id, id)?;
                check_all(kind, Field::Params, params)
            }
            NodeData::AssignmentExpression { left, right }
            | NodeData::MathExpression { left, right, .. } => {
                check(kind, Field::Left, left)?;
                check(kind, Field::Right, right)
            }
            NodeData::UnionOperation { values } => {
                if values.is_empty() {
                    return Err(ValidationError {
                        parent: kind,
                        field: Field::Values,
                        expected: admissible_kinds(kind, Field::Values),
                        found: None,
                        loc: self.loc.clone(),
                    });
                }
                check_all(kind, Field::Values, values)
            }
            NodeData::Identifier { .. }
            | NodeData::StringLiteral { .. }
            | NodeData::NumericLiteral { .. }
            | NodeData::BooleanLiteral { .. } => Ok(()),
        }
    }
}

/// Compact s-expression rendering, used in tests and `--ast` dumps.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, tag: &str, nodes: &[&Node]) -> fmt::Result {
            write!(f, "({}", tag)?;
            for node in nodes {
                write!(f, " {}", node)?;
            }
            f.write_str(")")
        }

        fn application(
            f: &mut fmt::Formatter<'_>,
            tag: &str,
            id: &Node,
            params: &[Node],
        ) -> fmt::Result {
            let nodes: Vec<&Node> = std::iter::once(id).chain(params).collect();
            list(f, tag, &nodes)
        }

        match &self.data {
            NodeData::Program { body } => list(f, "program", &body.iter().collect::<Vec<_>>()),
            NodeData::Identifier { name } => f.write_str(name),
            NodeData::MainDeclaration { value } => list(f, "main", &[&**value]),
            NodeData::TypeDeclaration { value } => list(f, "type", &[&**value]),
            NodeData::LetDeclaration { value } => list(f, "let", &[&**value]),
            NodeData::FunctionDeclaration { value } => list(f, "fun", &[&**value]),
            NodeData::ReturnStatement { value } => list(f, "return", &[&**value]),
            NodeData::BlockStatement { body } => list(f, "block", &body.iter().collect::<Vec<_>>()),
            NodeData::FunctionParameterExpression { id, params } => {
                application(f, "fun-params", id, params)
            }
            NodeData::TypeParameterExpression { id, params } => {
                application(f, "type-params", id, params)
            }
            NodeData::FunctionCallExpression { id, params } => application(f, "call", id, params),
            NodeData::TypeInstantiationExpression { id, params } => {
                application(f, "new", id, params)
            }
            NodeData::AssignmentExpression { left, right } => list(f, "=", &[&**left, &**right]),
            NodeData::MathExpression {
                left,
                right,
                operator,
            } => list(f, operator.as_str(), &[&**left, &**right]),
            NodeData::UnionOperation { values } => {
                list(f, "|", &values.iter().collect::<Vec<_>>())
            }
            NodeData::StringLiteral { value } => write!(f, "\"{}\"", value),
            NodeData::NumericLiteral { value } => write!(f, "{}", value),
            NodeData::BooleanLiteral { value } => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn loc(column: usize) -> Location {
        Location::new(1, column, column..column + 1)
    }

    fn ident(name: &str) -> Node {
        Node::identifier(name, loc(0))
    }

    #[test]
    fn test_valid_let_declaration() {
        let value =
            Node::assignment_expression(ident("foo"), Node::numeric_literal(10.0, loc(10)), loc(4))
                .unwrap();
        let decl = Node::let_declaration(value, loc(0)).unwrap();
        assert!(decl.is_kind(NodeKind::LetDeclaration));
        assert_snapshot!(decl.to_string(), @"(let (= foo 10))");
    }

    #[test]
    fn test_let_rejects_parameter_list() {
        let left = Node::application(
            NodeKind::FunctionCallExpression,
            ident("foo"),
            vec![ident("bar")],
            loc(4),
        )
        .unwrap();
        let right = Node::numeric_literal(10.0, loc(14));
        let err = Node::assignment_expression(left, right, loc(4)).unwrap_err();
        assert_eq!(err.parent, NodeKind::AssignmentExpression);
        assert_eq!(err.field, Field::Left);
        assert_eq!(err.found, Some(NodeKind::FunctionCallExpression));
    }

    #[test]
    fn test_declaration_checks_assignment_sides() {
        let left = Node::application(
            NodeKind::FunctionParameterExpression,
            ident("add"),
            vec![ident("a")],
            loc(4),
        )
        .unwrap();
        let value = Node::assignment_expression(left, ident("a"), loc(4)).unwrap();
        let err = Node::let_declaration(value.clone(), loc(0)).unwrap_err();
        assert_eq!(err.field, Field::ValueLeft);
        assert_eq!(
            err.to_string(),
            "expected Identifier in LetDeclaration.value.left, found FunctionParameterExpression at 1:4"
        );
        assert!(Node::function_declaration(value, loc(0)).is_ok());
    }

    #[test]
    fn test_declaration_requires_assignment() {
        let err = Node::type_declaration(ident("Foo"), loc(0)).unwrap_err();
        assert_eq!(err.field, Field::Value);
        assert_eq!(err.expected, &[NodeKind::AssignmentExpression]);
    }

    #[test]
    fn test_main_declaration() {
        assert!(Node::main_declaration(ident("run"), loc(0)).is_ok());
        let math = Node::math_expression(
            ident("a"),
            MathOperator::Add,
            Node::numeric_literal(1.0, loc(4)),
            loc(0),
        )
        .unwrap();
        let err = Node::main_declaration(math, loc(0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected Identifier or FunctionCallExpression in MainDeclaration.value, found MathExpression at 1:0"
        );
    }

    #[test]
    fn test_math_rejects_strings() {
        let err = Node::math_expression(
            ident("a"),
            MathOperator::Mul,
            Node::string_literal("b", loc(4)),
            loc(0),
        )
        .unwrap_err();
        assert_eq!(err.field, Field::Right);
        assert_eq!(err.found, Some(NodeKind::StringLiteral));
    }

    #[test]
    fn test_union() {
        let err = Node::union_operation(vec![], loc(0)).unwrap_err();
        assert_eq!(err.found, None);
        assert!(err.to_string().ends_with("found nothing at 1:0"));

        let union = Node::union_operation(
            vec![ident("A"), Node::string_literal("b", loc(4)), ident("C")],
            loc(0),
        )
        .unwrap();
        assert_snapshot!(union.to_string(), @r#"(| A "b" C)"#);

        let math = Node::math_expression(ident("a"), MathOperator::Sub, ident("b"), loc(0)).unwrap();
        assert!(Node::union_operation(vec![math], loc(0)).is_err());
    }

    #[test]
    fn test_block_body() {
        let ret = Node::return_statement(ident("c"), loc(0)).unwrap();
        let block = Node::block_statement(vec![ret.clone()], loc(0)).unwrap();
        assert_snapshot!(block.to_string(), @"(block (return c))");

        let err = Node::program(vec![ret], loc(0)).unwrap_err();
        assert_eq!(err.parent, NodeKind::Program);
        assert_eq!(err.found, Some(NodeKind::ReturnStatement));
    }

    #[test]
    fn test_application_id_must_be_identifier() {
        let err = Node::application(
            NodeKind::TypeInstantiationExpression,
            Node::numeric_literal(1.0, loc(0)),
            vec![],
            loc(0),
        )
        .unwrap_err();
        assert_eq!(err.field, Field::Id);
    }

    #[test]
    #[should_panic]
    fn test_application_rejects_other_kinds() {
        let _ = Node::application(NodeKind::MathExpression, ident("a"), vec![], loc(0));
    }

    #[test]
    fn test_every_field_has_kinds() {
        assert!(admissible_kinds(NodeKind::Identifier, Field::Body).is_empty());
        assert_eq!(
            admissible_kinds(NodeKind::LetDeclaration, Field::ValueRight),
            admissible_kinds(NodeKind::ReturnStatement, Field::Value)
        );
    }
}
