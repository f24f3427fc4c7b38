// dom/selector.rs — CSS selector subset
//
// Supported: type selectors and `*`, `.class`, `#id`, attribute tests
// `[a]`, `[a=v]`, `[a*=v]`, `[a^=v]`, `[a$=v]`, `[a~=v]` (values bare or
// quoted), the descendant and `>` combinators, and comma-separated lists.
// Pseudo-classes and the sibling combinators are rejected at parse time.

use std::fmt;

use crate::dom::{Document, NodeId};
use crate::ehm::AppError;





#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Contains(String),
    Prefix(String),
    Suffix(String),
    Includes(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrTest {
    name: String,
    op:   AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag:        Option<String>,
    id:         Option<String>,
    classes:    Vec<String>,
    attributes: Vec<AttrTest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// One comma-separated alternative.  `combinators[i]` joins
/// `compounds[i]` to `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds:   Vec<Compound>,
    combinators: Vec<Combinator>,
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source:       String,
    alternatives: Vec<Complex>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Selector
//
////////////////////////////////////////////////////////////////////////////////

impl Selector {

    pub fn parse(source: &str) -> Result<Selector, AppError> {
        let mut parser = Parser { source, chars: source.chars().collect(), pos: 0 };
        let mut alternatives = Vec::new();

        loop {
            alternatives.push (parser.complex()?);
            parser.skip_whitespace();

            match parser.peek() {
                None      => break,
                Some (',') => parser.pos += 1,
                Some (c)   => return Err (parser.error (format!("unexpected '{c}'"))),
            }
        }

        Ok (Selector { source: source.to_string(), alternatives })
    }





    pub fn as_str(&self) -> &str {
        &self.source
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  matches
    //
    //  True if the element matches any alternative.  Text nodes never
    //  match.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        if !doc.is_element (node) {
            return false;
        }

        self.alternatives
            .iter()
            .any (|complex| complex.matches_at (doc, node, complex.compounds.len() - 1))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str (&self.source)
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  Matching
//
//  Right to left: the subject compound against the node, then each
//  combinator walks up.  Descendant backtracks over every ancestor.
//
////////////////////////////////////////////////////////////////////////////////

impl Complex {
    fn matches_at(&self, doc: &Document, node: NodeId, index: usize) -> bool {
        if !self.compounds[index].matches (doc, node) {
            return false;
        }

        if index == 0 {
            return true;
        }

        match self.combinators[index - 1] {
            Combinator::Child => {
                doc.parent (node).is_some_and (|parent| self.matches_at (doc, parent, index - 1))
            }

            Combinator::Descendant => {
                let mut current = doc.parent (node);

                while let Some (ancestor) = current {
                    if self.matches_at (doc, ancestor, index - 1) {
                        return true;
                    }
                    current = doc.parent (ancestor);
                }

                false
            }
        }
    }
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some (tag) = doc.tag_name (node) else {
            return false;
        };

        if self.tag.as_deref().is_some_and (|want| want != tag) {
            return false;
        }

        if let Some (id) = &self.id {
            if doc.get_attribute (node, "id") != Some (id.as_str()) {
                return false;
            }
        }

        self.classes.iter().all (|class| doc.has_class (node, class))
            && self.attributes.iter().all (|test| test.matches (doc.get_attribute (node, &test.name)))
    }
}

impl AttrTest {
    fn matches(&self, value: Option<&str>) -> bool {
        let Some (value) = value else {
            return false;
        };

        // Empty operands never match for the substring operators.
        match &self.op {
            AttrOp::Exists          => true,
            AttrOp::Equals (want)   => value == want,
            AttrOp::Contains (want) => !want.is_empty() && value.contains (want.as_str()),
            AttrOp::Prefix (want)   => !want.is_empty() && value.starts_with (want.as_str()),
            AttrOp::Suffix (want)   => !want.is_empty() && value.ends_with (want.as_str()),
            AttrOp::Includes (want) => value.split_whitespace().any (|word| word == want),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  Parser
//
////////////////////////////////////////////////////////////////////////////////

struct Parser<'a> {
    source: &'a str,
    chars:  Vec<char>,
    pos:    usize,
}

impl Parser<'_> {

    fn peek(&self) -> Option<char> {
        self.chars.get (self.pos).copied()
    }

    fn error(&self, reason: String) -> AppError {
        AppError::InvalidSelector { selector: self.source.to_string(), reason }
    }

    /// Returns true if any whitespace was consumed.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;

        while self.peek().is_some_and (char::is_whitespace) {
            self.pos += 1;
        }

        self.pos > start
    }

    fn expect(&mut self, wanted: char) -> Result<(), AppError> {
        match self.peek() {
            Some (c) if c == wanted => {
                self.pos += 1;
                Ok (())
            }
            Some (c) => Err (self.error (format!("expected '{wanted}', found '{c}'"))),
            None     => Err (self.error (format!("expected '{wanted}'"))),
        }
    }





    fn complex(&mut self) -> Result<Complex, AppError> {
        self.skip_whitespace();

        let mut compounds   = vec![self.compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_whitespace = self.skip_whitespace();

            match self.peek() {
                None | Some (',') => break,

                Some ('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    combinators.push (Combinator::Child);
                }

                Some (_) if had_whitespace => combinators.push (Combinator::Descendant),

                Some (c) => return Err (self.error (format!("unexpected '{c}'"))),
            }

            compounds.push (self.compound()?);
        }

        Ok (Complex { compounds, combinators })
    }





    fn compound(&mut self) -> Result<Compound, AppError> {
        let mut compound = Compound::default();
        let mut any      = false;

        match self.peek() {
            Some ('*') => {
                self.pos += 1;
                any = true;
            }
            Some (c) if is_ident_char (c) => {
                compound.tag = Some (self.identifier()?.to_ascii_lowercase());
                any = true;
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some ('.') => {
                    self.pos += 1;
                    compound.classes.push (self.identifier()?);
                }
                Some ('#') => {
                    self.pos += 1;
                    compound.id = Some (self.identifier()?);
                }
                Some ('[') => {
                    self.pos += 1;
                    compound.attributes.push (self.attribute()?);
                }
                Some (':') => return Err (self.error ("pseudo-classes are not supported".into())),
                _ => break,
            }

            any = true;
        }

        if !any {
            return Err (match self.peek() {
                Some (c) => self.error (format!("expected a selector, found '{c}'")),
                None     => self.error ("expected a selector".into()),
            });
        }

        Ok (compound)
    }





    fn identifier(&mut self) -> Result<String, AppError> {
        let start = self.pos;

        while self.peek().is_some_and (is_ident_char) {
            self.pos += 1;
        }

        if self.pos == start {
            return Err (self.error ("expected an identifier".into()));
        }

        Ok (self.chars[start..self.pos].iter().collect())
    }





    fn attribute(&mut self) -> Result<AttrTest, AppError> {
        self.skip_whitespace();
        let name = self.identifier()?.to_ascii_lowercase();
        self.skip_whitespace();

        let operator = match self.peek() {
            Some (']') => {
                self.pos += 1;
                return Ok (AttrTest { name, op: AttrOp::Exists });
            }
            Some ('=') => {
                self.pos += 1;
                '='
            }
            Some (c @ ('*' | '^' | '$' | '~')) => {
                self.pos += 1;
                self.expect ('=')?;
                c
            }
            Some (c) => return Err (self.error (format!("unexpected '{c}' in attribute selector"))),
            None     => return Err (self.error ("unterminated attribute selector".into())),
        };

        self.skip_whitespace();
        let value = self.attribute_value()?;
        self.skip_whitespace();
        self.expect (']')?;

        let op = match operator {
            '*' => AttrOp::Contains (value),
            '^' => AttrOp::Prefix (value),
            '$' => AttrOp::Suffix (value),
            '~' => AttrOp::Includes (value),
            _   => AttrOp::Equals (value),
        };

        Ok (AttrTest { name, op })
    }





    fn attribute_value(&mut self) -> Result<String, AppError> {
        let Some (quote @ ('"' | '\'')) = self.peek() else {
            return self.identifier();
        };

        self.pos += 1;
        let start = self.pos;

        while let Some (c) = self.peek() {
            if c == quote {
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok (value);
            }
            self.pos += 1;
        }

        Err (self.error ("unterminated string".into()))
    }
}





fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
