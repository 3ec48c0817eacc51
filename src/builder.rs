//! Programmatic construction of CLON documents.
//!
//! [`Builder`] writes CLON text node by node and validates everything the
//! grammar cannot express (upper-case names, quotes inside strings, negative
//! numbers) before it reaches the parser.
//!
//! # Examples
//!
//! ```
//! use clon_lang::Builder;
//!
//! let tree = Builder::document("person", |b| {
//!     b.scalar("name", "padget")?;
//!     b.scalar("age", 32u32)?;
//!     b.sequence("alias", ["jhon", "fidgeral"])?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(tree.get("alias:1").unwrap().as_str(), Some("fidgeral"));
//! assert_eq!(tree.get_all("alias:*").unwrap().len(), 2);
//! ```

use thiserror::Error;

use crate::{
    parser::{self, ParseError},
    scanner::is_name,
    tree::Tree,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid name '{0}': names must match [a-z]+")]
    InvalidName(String),

    #[error("string {0:?} contains '\"' and cannot be written")]
    UnrepresentableString(String),

    #[error("number {0} cannot be written: only finite, non-negative numbers are allowed")]
    UnrepresentableNumber(String),

    #[error("built document does not parse: {0}")]
    Parse(#[from] ParseError),
}

/// A value that can be written as a scalar node.
pub trait Scalar {
    fn write_scalar(&self, out: &mut String) -> Result<(), BuildError>;
}

impl Scalar for bool {
    fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
        out.push_str(if *self { "true" } else { "false" });
        Ok(())
    }
}

impl Scalar for str {
    fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
        if self.contains('"') {
            return Err(BuildError::UnrepresentableString(self.to_string()));
        }
        out.push('"');
        out.push_str(self);
        out.push('"');
        Ok(())
    }
}

impl Scalar for String {
    fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
        self.as_str().write_scalar(out)
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
        (**self).write_scalar(out)
    }
}

macro_rules! unsigned_scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
                out.push_str(&self.to_string());
                Ok(())
            }
        })*
    };
}

macro_rules! signed_scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
                if *self < 0 {
                    return Err(BuildError::UnrepresentableNumber(self.to_string()));
                }
                out.push_str(&self.to_string());
                Ok(())
            }
        })*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            fn write_scalar(&self, out: &mut String) -> Result<(), BuildError> {
                if !self.is_finite() || *self < 0.0 {
                    return Err(BuildError::UnrepresentableNumber(self.to_string()));
                }
                // -0.0 would print with a sign
                if *self == 0.0 {
                    out.push('0');
                } else {
                    out.push_str(&self.to_string());
                }
                Ok(())
            }
        })*
    };
}

float_scalar!(f32, f64);
unsigned_scalar!(u8, u16, u32, u64, u128, usize);
signed_scalar!(i8, i16, i32, i64, i128, isize);

/// Incremental CLON writer.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    out: String,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a whole document whose root list is `name`.
    pub fn document<F>(name: &str, fill: F) -> Result<Tree, BuildError>
    where
        F: FnOnce(&mut Builder) -> Result<(), BuildError>,
    {
        let mut builder = Builder::new();
        builder.list(name, fill)?;
        builder.build()
    }

    /// Write `(name value)`.
    ///
    /// On error nothing is written.
    pub fn scalar(&mut self, name: &str, value: impl Scalar) -> Result<&mut Self, BuildError> {
        let mark = self.out.len();
        let written = self.write_scalar_node(name, value);
        self.settle(mark, written)
    }

    /// Write one `(name item)` node per item, all or nothing.
    pub fn sequence<I>(&mut self, name: &str, items: I) -> Result<&mut Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Scalar,
    {
        let mark = self.out.len();
        let written = items
            .into_iter()
            .try_for_each(|item| self.write_scalar_node(name, item));
        self.settle(mark, written)
    }

    /// Write a list node whose children are produced by `fill`.
    ///
    /// If `fill` fails, the whole list is taken back out.
    pub fn list<F>(&mut self, name: &str, fill: F) -> Result<&mut Self, BuildError>
    where
        F: FnOnce(&mut Builder) -> Result<(), BuildError>,
    {
        let mark = self.out.len();
        let written = self.write_list_node(name, fill);
        self.settle(mark, written)
    }

    fn write_scalar_node<S: Scalar>(&mut self, name: &str, value: S) -> Result<(), BuildError> {
        self.open(name)?;
        self.out.push(' ');
        value.write_scalar(&mut self.out)?;
        self.out.push(')');
        Ok(())
    }

    fn write_list_node<F>(&mut self, name: &str, fill: F) -> Result<(), BuildError>
    where
        F: FnOnce(&mut Builder) -> Result<(), BuildError>,
    {
        self.open(name)?;
        self.out.push(' ');
        fill(self)?;
        self.out.push(')');
        Ok(())
    }

    /// Drop everything written after `mark` when `written` failed.
    fn settle(&mut self, mark: usize, written: Result<(), BuildError>) -> Result<&mut Self, BuildError> {
        if let Err(e) = written {
            self.out.truncate(mark);
            return Err(e);
        }
        Ok(self)
    }

    fn open(&mut self, name: &str) -> Result<(), BuildError> {
        if !is_name(name) {
            return Err(BuildError::InvalidName(name.to_string()));
        }
        self.out.push('(');
        self.out.push_str(name);
        Ok(())
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// Parse the written text. Fails when it is not exactly one node, or when
    /// a list was left without children.
    pub fn build(self) -> Result<Tree, BuildError> {
        Ok(parser::parse(&self.out)?)
    }
}
