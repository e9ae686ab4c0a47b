//! Tokenizer.
//!
//! Tokenizing happens in two phases. The raw scan (driven by [`RawToken`]) splits the input into
//! spans, including whitespace and newlines. The second phase turns spans into [`Token`]s,
//! re-tagging identifier spans that end at a boundary (whitespace, newline or end of input) as
//! keywords or booleans, and drops whitespace and newlines.

use logos::Logos;
use sprig_source::{Location, Source};
use std::{error, fmt, ops::Range};

/// Raw spans produced by the first tokenizer phase.
#[derive(Debug, Logos, Clone, Copy, PartialEq)]
enum RawToken {
    // no escapes: the first `"` after the opening one always closes the literal
    #[regex(r#""[^"]*"?"#)]
    String,

    #[regex(r"[+-]?[0-9.]+")]
    Number,
    #[regex("[a-zA-Z_]+")]
    Identifier,

    #[token("|")]
    #[token("=")]
    #[token("*")]
    #[token("/")]
    #[token("+")]
    #[token("-")]
    Operator,

    // punctuation
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("<")]
    OpenAngle,
    #[token(">")]
    CloseAngle,
    #[token(",")]
    Comma,

    // boundaries, stripped in the second phase
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"\r?\n")]
    Newline,

    #[error]
    Error,
}

/// Reserved words. `func` is the legacy spelling of `fun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Main,
    Type,
    Let,
    Fun,
    Func,
    Return,
}

impl Keyword {
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "main" => Some(Keyword::Main),
            "type" => Some(Keyword::Type),
            "let" => Some(Keyword::Let),
            "fun" => Some(Keyword::Fun),
            "func" => Some(Keyword::Func),
            "return" => Some(Keyword::Return),
            _ => None,
        }
    }

    /// `true` for `fun` and its legacy spelling `func`.
    pub fn is_fun(self) -> bool {
        matches!(self, Keyword::Fun | Keyword::Func)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Assign,
    /// `|`
    Union,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Operator::Assign),
            '|' => Some(Operator::Union),
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Asterisk),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),
    Operator(Operator),
    Identifier,
    Boolean,
    Number,
    String,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenAngle,
    CloseAngle,
    Comma,
    Whitespace,
    Newline,
}

impl TokenKind {
    /// Kind name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Operator(_) => "operator",
            TokenKind::Identifier => "identifier",
            TokenKind::Boolean => "boolean",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::OpenBrace => "open-brace",
            TokenKind::CloseBrace => "close-brace",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::OpenAngle => "open-angle",
            TokenKind::CloseAngle => "close-angle",
            TokenKind::Comma => "comma",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Number | TokenKind::Boolean
        )
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The token text. For strings this is the content between the quotes.
    pub text: String,
    pub loc: Location,
}

impl Token {
    pub fn line(&self) -> usize {
        self.loc.line
    }

    pub fn column(&self) -> usize {
        self.loc.column
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == TokenKind::Operator(op)
    }
}

/// Unrecognized character in strict mode.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub character: char,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error: unexpected character {:?} at {}:{}",
            self.character, self.line, self.column
        )
    }
}

impl error::Error for LexError {}

/// Tokenizes `content`. Unrecognized characters are an error when `strict` is set and are
/// skipped otherwise.
pub fn tokenize(content: &str, strict: bool) -> Result<Vec<Token>, LexError> {
    tokenize_source(&Source::new(content), strict)
}

/// Same as [`tokenize`] over an existing [`Source`].
pub fn tokenize_source(source: &Source, strict: bool) -> Result<Vec<Token>, LexError> {
    let raw = scan(source, strict)?;
    Ok(retag(source, &raw))
}

/// First phase: raw spans, including whitespace and newlines.
fn scan(source: &Source, strict: bool) -> Result<Vec<(RawToken, Range<usize>)>, LexError> {
    let mut lexer = RawToken::lexer(source.content);
    let mut raw = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        if token == RawToken::Error {
            if strict {
                let position = source.position(span.start);
                let character = source
                    .content
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\u{fffd}');
                return Err(LexError {
                    character,
                    line: position.line,
                    column: position.column,
                });
            }
            continue;
        }
        raw.push((token, span));
    }

    Ok(raw)
}

/// Second phase: classify spans, re-tag finished identifiers and strip boundaries.
fn retag(source: &Source, raw: &[(RawToken, Range<usize>)]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(raw.len());

    for (index, (token, span)) in raw.iter().enumerate() {
        let slice = &source.content[span.clone()];
        let kind = match token {
            RawToken::Whitespace | RawToken::Newline | RawToken::Error => continue,
            RawToken::String => TokenKind::String,
            RawToken::Number => TokenKind::Number,
            RawToken::Identifier => {
                let at_boundary = match raw.get(index + 1) {
                    None => true,
                    Some((next, _)) => matches!(next, RawToken::Whitespace | RawToken::Newline),
                };
                classify_identifier(slice, at_boundary)
            }
            RawToken::Operator => match slice.chars().next().and_then(Operator::from_char) {
                Some(op) => TokenKind::Operator(op),
                None => continue,
            },
            RawToken::OpenBrace => TokenKind::OpenBrace,
            RawToken::CloseBrace => TokenKind::CloseBrace,
            RawToken::OpenParen => TokenKind::OpenParen,
            RawToken::CloseParen => TokenKind::CloseParen,
            RawToken::OpenAngle => TokenKind::OpenAngle,
            RawToken::CloseAngle => TokenKind::CloseAngle,
            RawToken::Comma => TokenKind::Comma,
        };

        let text = if kind == TokenKind::String {
            let inner = &slice[1..];
            inner.strip_suffix('"').unwrap_or(inner).to_string()
        } else {
            slice.to_string()
        };

        tokens.push(Token {
            kind,
            text,
            loc: source.location(span.clone()),
        });
    }

    tokens
}

/// Reserved words only count once their extent is known to end at a boundary.
fn classify_identifier(ident: &str, at_boundary: bool) -> TokenKind {
    if !at_boundary {
        return TokenKind::Identifier;
    }
    if let Some(keyword) = Keyword::from_ident(ident) {
        return TokenKind::Keyword(keyword);
    }
    match ident {
        "true" | "false" => TokenKind::Boolean,
        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source, true)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    /// `kind:text` pairs separated by spaces.
    fn dump(source: &str) -> String {
        tokenize(source, true)
            .unwrap()
            .iter()
            .map(|token| format!("{}:{}", token.kind.name(), token.text))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_main_declaration() {
        assert_snapshot!(dump("main Foo Bar"), @"keyword:main identifier:Foo identifier:Bar");
    }

    #[test]
    fn test_type_declaration() {
        assert_snapshot!(
            dump("type Bar = Boolean | String | Number"),
            @"keyword:type identifier:Bar operator:= identifier:Boolean operator:| identifier:String operator:| identifier:Number"
        );
        assert_snapshot!(
            dump("type Maybe<T> = Nothing | T"),
            @"keyword:type identifier:Maybe open-angle:< identifier:T close-angle:> operator:= identifier:Nothing operator:| identifier:T"
        );
    }

    #[test]
    fn test_function_declaration() {
        assert_snapshot!(
            dump("fun add(a, b) = a + b"),
            @"keyword:fun identifier:add open-paren:( identifier:a comma:, identifier:b close-paren:) operator:= identifier:a operator:+ identifier:b"
        );
        assert_eq!(kinds("func add a b")[0], TokenKind::Keyword(Keyword::Func));
    }

    #[test]
    fn test_numbers() {
        for source in &["10", "10.30", "+10", "-10", ".30", "+.30", "-.30", "+0.30", "-0.30"] {
            let tokens = tokenize(source, true).unwrap();
            assert_eq!(tokens.len(), 1, "{}", source);
            assert_eq!(tokens[0].kind, TokenKind::Number);
            assert_eq!(tokens[0].text, *source);
        }
    }

    #[test]
    fn test_sign_is_operator_before_non_digit() {
        assert_eq!(
            kinds("a - b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Minus),
                TokenKind::Identifier
            ]
        );
        assert_eq!(
            kinds("+a"),
            vec![TokenKind::Operator(Operator::Plus), TokenKind::Identifier]
        );
        assert_eq!(kinds("- 1"), vec![TokenKind::Operator(Operator::Minus), TokenKind::Number]);
        assert_eq!(kinds("1 -1"), vec![TokenKind::Number, TokenKind::Number]);
    }

    #[test]
    fn test_strings() {
        assert_snapshot!(dump(r#"let a = "Hello world""#), @"keyword:let identifier:a operator:= string:Hello world");
        let tokens = tokenize(r#""Operators in string (= | + - /)" "let in string""#, true).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Operators in string (= | + - /)");
        assert_eq!(tokens[1].text, "let in string");
        assert!(tokens.iter().all(|token| token.kind == TokenKind::String));
    }

    #[test]
    fn test_string_without_escapes() {
        let tokens = tokenize(r#""a\"b""#, false).unwrap();
        assert_eq!(tokens[0].text, "a\\");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize(r#"let a = "abc"#, true).unwrap();
        assert_eq!(tokens[3].kind, TokenKind::String);
        assert_eq!(tokens[3].text, "abc");
    }

    #[test]
    fn test_reserved_words_need_boundary() {
        assert_eq!(kinds("let"), vec![TokenKind::Keyword(Keyword::Let)]);
        assert_eq!(kinds("letter"), vec![TokenKind::Identifier]);
        assert_eq!(
            kinds("main{"),
            vec![TokenKind::Identifier, TokenKind::OpenBrace]
        );
        assert_eq!(
            kinds("true false\ntrue"),
            vec![TokenKind::Boolean, TokenKind::Boolean, TokenKind::Boolean]
        );
        assert_eq!(
            kinds("true)"),
            vec![TokenKind::Identifier, TokenKind::CloseParen]
        );
        assert_eq!(kinds("truely"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_identifiers_and_digits() {
        assert_eq!(kinds("foo12"), vec![TokenKind::Identifier, TokenKind::Number]);
        assert_eq!(kinds("foo_bar"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("let a = 10\n  main a", true).unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 0), (1, 4), (1, 6), (1, 8), (2, 2), (2, 7)]);
        assert_eq!(tokens[3].loc.span, 8..10);
    }

    #[test]
    fn test_strict_mode() {
        let err = tokenize("let a = 1\nlet b = $", true).unwrap_err();
        assert_eq!(
            err,
            LexError {
                character: '$',
                line: 2,
                column: 8
            }
        );
        assert_eq!(err.to_string(), "Syntax error: unexpected character '$' at 2:8");
    }

    #[test]
    fn test_lenient_mode() {
        assert_eq!(
            kinds_lenient("let a = 1 $ ;"),
            vec![
                TokenKind::Keyword(Keyword::Let),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Assign),
                TokenKind::Number
            ]
        );
    }

    fn kinds_lenient(source: &str) -> Vec<TokenKind> {
        tokenize(source, false)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_retokenize_is_idempotent() {
        let source = "type Maybe<T> = Nothing | T\nlet a = 10 * -3 + .5\nfun add(a, b) = {\n  return a + b\n}\nmain add 1 \"two words\" true";
        let tokens = tokenize(source, true).unwrap();
        let joined = tokens
            .iter()
            .map(|token| match token.kind {
                TokenKind::String => format!("\"{}\"", token.text),
                _ => token.text.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let again = tokenize(&joined, true).unwrap();
        assert_eq!(
            again.iter().map(|t| t.kind).collect::<Vec<_>>(),
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>()
        );
    }
}
