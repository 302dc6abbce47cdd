//! Parser for type reference strings such as `double`, `List<T>` or `Foo[][]`.

use std::fmt;
use thiserror::Error;

/// A parsed, unresolved type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<TypeRef>,
    /// Number of trailing `[]`
    pub array_depth: u32,
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        for _ in 0..self.array_depth {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeRefError {
    #[error("empty type reference")]
    Empty,
    #[error("expected a type name at offset {offset} in '{text}'")]
    ExpectedName { text: String, offset: usize },
    #[error("expected '{expected}' at offset {offset} in '{text}'")]
    Expected {
        text: String,
        offset: usize,
        expected: char,
    },
    #[error("unexpected trailing input at offset {offset} in '{text}'")]
    Trailing { text: String, offset: usize },
}

/// Parse a complete type reference.
pub fn parse_type_ref(text: &str) -> Result<TypeRef, TypeRefError> {
    if text.trim().is_empty() {
        return Err(TypeRefError::Empty);
    }
    let mut parser = Parser { text, pos: 0 };
    let parsed = parser.type_ref()?;
    parser.skip_ws();
    if parser.pos != text.len() {
        return Err(TypeRefError::Trailing {
            text: text.to_string(),
            offset: parser.pos,
        });
    }
    Ok(parsed)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeRefError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(TypeRefError::Expected {
                text: self.text.to_string(),
                offset: self.pos,
                expected,
            })
        }
    }

    fn name(&mut self) -> Result<String, TypeRefError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !(ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '.') {
                break;
            }
            self.pos += ch.len_utf8();
        }
        if self.pos == start {
            return Err(TypeRefError::ExpectedName {
                text: self.text.to_string(),
                offset: start,
            });
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn type_ref(&mut self) -> Result<TypeRef, TypeRefError> {
        let name = self.name()?;

        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.type_ref()?);
                if !self.eat(',') {
                    break;
                }
            }
            self.expect('>')?;
        }

        let mut array_depth = 0;
        while self.eat('[') {
            self.expect(']')?;
            array_depth += 1;
        }

        Ok(TypeRef {
            name,
            args,
            array_depth,
        })
    }
}

#[cfg(test)]
#[path = "../tests/type_ref_tests.rs"]
mod tests;
