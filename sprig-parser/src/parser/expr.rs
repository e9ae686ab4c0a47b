use super::*;
use crate::ast::{MathOperator, NodeKind};
use crate::lexer::{Keyword, Operator, TokenKind};

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses an expression whose first token, `head`, has already been consumed.
    ///
    /// When the token after the expression cannot continue it (a keyword, a closing brace or
    /// anything the caller must judge), the cursor is stepped back so the caller sees it again.
    pub fn parse_expr(&mut self, head: Token) -> Result<Node, ParseError> {
        let mut first = match head.kind {
            TokenKind::OpenBrace => return self.parse_block_stmt(head),
            _ => self.parse_operand(head)?,
        };

        // There is no precedence: every operator takes the rest of the chain as its right side,
        // so `a * b + c` groups as `a * (b + c)`.
        let mut rest: Vec<(MathOperator, Node)> = Vec::new();
        while let Some(next) = self.cursor.advance() {
            let op = match next.kind {
                TokenKind::Operator(op) => op,
                _ => {
                    self.cursor.retreat();
                    break;
                }
            };

            match MathOperator::from_operator(op) {
                Some(operator) => {
                    let head = self.next_token()?;
                    if head.kind == TokenKind::OpenBrace {
                        let block = self.parse_block_stmt(head)?;
                        rest.push((operator, block));
                        break;
                    }
                    let operand = self.parse_operand(head)?;
                    rest.push((operator, operand));
                }
                None => {
                    // `=` and `|` bind the last operand
                    match rest.pop() {
                        Some((operator, last)) => {
                            let last = self.parse_assignment_or_union(last, op)?;
                            rest.push((operator, last));
                        }
                        None => first = self.parse_assignment_or_union(first, op)?,
                    }
                    break;
                }
            }
        }

        let mut rest = rest.into_iter().rev();
        let (mut operator, mut right) = match rest.next() {
            Some(last) => last,
            None => return Ok(first),
        };
        for (previous, left) in rest {
            let loc = left.loc().to(right.loc());
            right = Node::math_expression(left, operator, right, loc)?;
            operator = previous;
        }
        let loc = first.loc().to(right.loc());
        Ok(Node::math_expression(first, operator, right, loc)?)
    }

    /// Parses an identifier (with its arguments) or a literal.
    fn parse_operand(&mut self, head: Token) -> Result<Node, ParseError> {
        match head.kind {
            TokenKind::Identifier => self.parse_identifier_or_application(head),
            TokenKind::String | TokenKind::Number | TokenKind::Boolean => {
                self.parse_literal_expr(&head)
            }
            _ => Err(self.unexpected(&head)),
        }
    }

    /// Parses the rest of `left =` or `left |`.
    fn parse_assignment_or_union(&mut self, left: Node, op: Operator) -> Result<Node, ParseError> {
        if op == Operator::Union {
            return self.parse_union(left);
        }
        let right_head = self.next_token()?;
        let right = self.parse_expr(right_head)?;
        let loc = left.loc().to(right.loc());
        Ok(Node::assignment_expression(left, right, loc)?)
    }

    /* Expressions.Literals */
    /// Parses a string, number or boolean token.
    fn parse_literal_expr(&self, token: &Token) -> Result<Node, ParseError> {
        let loc = token.loc.clone();
        match token.kind {
            TokenKind::String => Ok(Node::string_literal(token.text.clone(), loc)),
            TokenKind::Number => match token.text.parse::<f64>() {
                Ok(value) => Ok(Node::numeric_literal(value, loc)),
                Err(_) => Err(self.unexpected(token)),
            },
            TokenKind::Boolean => Ok(Node::boolean_literal(token.text == "true", loc)),
            _ => Err(self.unexpected(token)),
        }
    }

    /// Parses a token that can be a parameter or an argument: an identifier or a literal.
    fn parse_atom(&self, token: &Token) -> Result<Node, ParseError> {
        match token.kind {
            TokenKind::Identifier => Ok(Node::identifier(token.text.clone(), token.loc.clone())),
            _ => self.parse_literal_expr(token),
        }
    }

    /* Expressions.Identifier */
    /// Parses an identifier and the arguments applied to it, if any.
    ///
    /// Arguments are either a parenthesised list (angle brackets in type context) directly after
    /// the identifier, or the run of identifiers and literals that follows it.
    fn parse_identifier_or_application(&mut self, head: Token) -> Result<Node, ParseError> {
        let kind = self.application_kind();
        let id = Node::identifier(head.text.clone(), head.loc.clone());

        let close = match self.cursor.peek().map(|token| token.kind) {
            Some(TokenKind::OpenParen) => Some(TokenKind::CloseParen),
            Some(TokenKind::OpenAngle)
                if kind == NodeKind::TypeParameterExpression
                    || kind == NodeKind::TypeInstantiationExpression =>
            {
                Some(TokenKind::CloseAngle)
            }
            _ => None,
        };

        let mut params = Vec::new();
        let end = match close {
            Some(close) => self.parse_delimited_params(close, &mut params)?,
            None => {
                let mut end = head.loc.clone();
                while let Some(token) = self.cursor.peek() {
                    if token.kind != TokenKind::Identifier && !token.kind.is_literal() {
                        break;
                    }
                    let token = self.next_token()?;
                    params.push(self.parse_atom(&token)?);
                    end = token.loc;
                }
                if params.is_empty() {
                    return Ok(id);
                }
                end
            }
        };

        let loc = head.loc.to(&end);
        Ok(Node::application(kind, id, params, loc)?)
    }

    /// Parses `(a, b, ...)` or `<A, B, ...>` into `params`. Returns the location of the closing
    /// delimiter.
    fn parse_delimited_params(
        &mut self,
        close: TokenKind,
        params: &mut Vec<Node>,
    ) -> Result<Location, ParseError> {
        self.next_token()?; // eat opening delimiter

        if let Some(token) = self.cursor.peek() {
            if token.kind == close {
                return Ok(self.next_token()?.loc);
            }
        }

        loop {
            let token = self.next_token()?;
            if token.kind != TokenKind::Identifier && !token.kind.is_literal() {
                return Err(self.unexpected(&token));
            }
            params.push(self.parse_atom(&token)?);

            let separator = self.next_token()?;
            if separator.kind == close {
                return Ok(separator.loc);
            } else if separator.kind != TokenKind::Comma {
                return Err(self.unexpected(&separator));
            }
        }
    }

    /// Decides what an identifier with arguments declares or applies, from the tokens before it.
    /// The identifier must be the current token.
    ///
    /// Directly after `type` or `fun` the arguments are parameter names. Anywhere else they are
    /// applied values: a type instantiation when the nearest enclosing keyword or brace is `type`,
    /// a function call otherwise.
    fn application_kind(&self) -> NodeKind {
        let head_index = match self.cursor.current_index() {
            Some(index) => index,
            None => return NodeKind::FunctionCallExpression,
        };

        let previous = head_index
            .checked_sub(1)
            .and_then(|index| self.cursor.get(index));
        match previous.map(|token| token.kind) {
            Some(TokenKind::Keyword(Keyword::Type)) => return NodeKind::TypeParameterExpression,
            Some(TokenKind::Keyword(keyword)) if keyword.is_fun() => {
                return NodeKind::FunctionParameterExpression
            }
            _ => {}
        }

        let enclosing = self.cursor.look_behind(head_index, |token| {
            token.is_keyword()
                || token.kind == TokenKind::OpenBrace
                || token.kind == TokenKind::CloseBrace
        });
        match enclosing.map(|token| token.kind) {
            Some(TokenKind::Keyword(Keyword::Type)) => NodeKind::TypeInstantiationExpression,
            _ => NodeKind::FunctionCallExpression,
        }
    }

    /* Expressions.Union */
    /// Parses the members following `first |`.
    ///
    /// A member is an identifier with its arguments or a literal. Members never extend past the
    /// next operator, so `A | B + 1` stops before `+`. A keyword, closing brace or end of input
    /// where a member should be ends the union.
    fn parse_union(&mut self, first: Node) -> Result<Node, ParseError> {
        let mut values = vec![first];

        loop {
            let token = match self.cursor.advance() {
                Some(token) => token,
                None => break,
            };
            let member = match token.kind {
                TokenKind::Identifier => self.parse_identifier_or_application(token)?,
                TokenKind::String | TokenKind::Number | TokenKind::Boolean => {
                    self.parse_literal_expr(&token)?
                }
                TokenKind::Keyword(_) | TokenKind::CloseBrace => {
                    self.cursor.retreat();
                    break;
                }
                _ => return Err(self.unexpected(&token)),
            };
            values.push(member);

            let mark = self.cursor.mark();
            match self.cursor.advance() {
                Some(token) if token.is_operator(Operator::Union) => {}
                _ => {
                    self.cursor.reset(mark);
                    break;
                }
            }
        }

        let loc = values[0].loc().to(values[values.len() - 1].loc());
        Ok(Node::union_operation(values, loc)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Node, NodeData, NodeKind};
    use crate::error::{ParseError, SyntaxError};
    use crate::parser::parse;
    use insta::assert_snapshot;

    fn program(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    /// Parses `source` as the right side of `let x = <source>`.
    fn expr(source: &str) -> Node {
        let ast = parse(&format!("let x = {}", source)).unwrap();
        match ast.data() {
            NodeData::Program { body } => match body[0].data() {
                NodeData::LetDeclaration { value } => match value.data() {
                    NodeData::AssignmentExpression { right, .. } => Node::clone(right),
                    _ => unreachable!(),
                },
                _ => unreachable!(),
            },
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_literals() {
        assert_snapshot!(expr(r#""hi there""#).to_string(), @r#""hi there""#);
        assert_snapshot!(expr("true").to_string(), @"true");
        assert_snapshot!(expr("-0.5").to_string(), @"-0.5");
        assert_snapshot!(expr("10").to_string(), @"10");
    }

    #[test]
    fn test_math_chain() {
        assert_snapshot!(expr("a + b").to_string(), @"(+ a b)");
        assert_snapshot!(
            expr("10 * 30 + b - 20 / foo").to_string(),
            @"(* 10 (+ 30 (- b (/ 20 foo))))"
        );
        assert_snapshot!(expr("add 1 2 * 3").to_string(), @"(* (call add 1 2) 3)");
        assert_snapshot!(expr("f() + 1").to_string(), @"(+ (call f) 1)");
    }

    #[test]
    fn test_long_math_chain() {
        let mut source = "1".to_string();
        for _i in 0..2000 {
            source.push_str(" + 1");
        }
        let value = expr(&source);

        let mut depth = 0;
        let mut node = &value;
        while let NodeData::MathExpression { right, .. } = node.data() {
            depth += 1;
            node = &**right;
        }
        assert_eq!(depth, 2000);
        assert!(node.is_kind(NodeKind::NumericLiteral));
        assert_eq!(value.loc().span, 8..8 + source.len());
    }

    #[test]
    fn test_assignment_binds_last_operand() {
        match parse("let x = a + b = c").unwrap_err() {
            ParseError::Syntax(SyntaxError::InvalidNode(err)) => {
                assert_eq!(err.parent, NodeKind::MathExpression);
                assert_eq!(err.found, Some(NodeKind::AssignmentExpression));
            }
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn test_application_kind() {
        assert_snapshot!(
            program("fun add a b = add a b"),
            @"(program (fun (= (fun-params add a b) (call add a b))))"
        );
        assert_snapshot!(program("let a = List Number"), @"(program (let (= a (call List Number))))");
        assert_snapshot!(
            program("fun f = { type Local = List Number }"),
            @"(program (fun (= f (block (type (= Local (new List Number)))))))"
        );
        assert_snapshot!(
            program(r#"main add(1, "two")"#),
            @r#"(program (main (call add 1 "two")))"#
        );
    }

    #[test]
    fn test_angles_outside_types() {
        assert_eq!(
            parse("let a = b < c").unwrap_err().to_string(),
            "Syntax error: unexpected open-angle \"<\" at 1:10"
        );
    }

    #[test]
    fn test_type_parameters_in_angles() {
        assert_snapshot!(
            program("type Maybe<T> = Nothing | Just T"),
            @"(program (type (= (type-params Maybe T) (| Nothing (new Just T)))))"
        );
        assert_snapshot!(
            program("type Pair<A, B> = Tuple<A, B>"),
            @"(program (type (= (type-params Pair A B) (new Tuple A B))))"
        );
    }

    #[test]
    fn test_union_stops_at_statement() {
        assert_snapshot!(
            program("type A = B |\nlet x = 1"),
            @"(program (type (= A (| B))) (let (= x 1)))"
        );
    }

    #[test]
    fn test_union_stops_at_operator() {
        let err = parse("type A = B | C + 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError::UnexpectedToken {
                kind: "operator",
                text: "+".to_string(),
                line: 1,
                column: 15
            })
        );
    }
}
