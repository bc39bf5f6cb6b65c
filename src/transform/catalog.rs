//! Transform catalog data model
//!
//! A catalog is an authored, ordered table of every argument a provider
//! understands and how each one is written onto the wire. Catalogs are
//! `'static` data; render styles walk them in declaration order.

use std::fmt;

use serde::Serialize;

/// Literal wire token carried by an enum value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnumLiteral {
    Text(&'static str),
    Int(i64),
}

impl fmt::Display for EnumLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumLiteral::Text(s) => f.write_str(s),
            EnumLiteral::Int(n) => write!(f, "{}", n),
        }
    }
}

/// One member of an enumerated value set: schema label plus wire literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub label: &'static str,
    pub literal: EnumLiteral,
}

impl EnumValue {
    pub const fn text(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            literal: EnumLiteral::Text(value),
        }
    }

    pub const fn int(label: &'static str, value: i64) -> Self {
        Self {
            label,
            literal: EnumLiteral::Int(value),
        }
    }
}

/// Named, ordered set of allowed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumSpec {
    pub name: &'static str,
    pub values: &'static [EnumValue],
}

impl EnumSpec {
    /// Owned schema declaration for the host
    pub fn to_type(&self) -> EnumType {
        EnumType {
            name: self.name.to_string(),
            values: self
                .values
                .iter()
                .map(|v| EnumTypeValue {
                    label: v.label.to_string(),
                    value: v.literal.to_string(),
                    numeric: matches!(v.literal, EnumLiteral::Int(_)),
                })
                .collect(),
        }
    }

    /// Find the value whose literal is the text token `token`
    pub fn find_text(&self, token: &str) -> Option<&EnumValue> {
        self.values
            .iter()
            .find(|v| matches!(v.literal, EnumLiteral::Text(t) if t == token))
    }

    /// Find the value whose literal is the integer `n`
    pub fn find_int(&self, n: i64) -> Option<&EnumValue> {
        self.values
            .iter()
            .find(|v| v.literal == EnumLiteral::Int(n))
    }
}

/// Enum type declaration handed to the host schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<EnumTypeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumTypeValue {
    pub label: String,
    pub value: String,
    /// Literal is an integer rather than a string token
    pub numeric: bool,
}

/// Shape of value an argument accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    String,
    Boolean,
    Enum(&'static EnumSpec),
}

impl ValueKind {
    /// Schema type name exposed for resolver arguments
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::Boolean => "Boolean",
            ValueKind::Enum(spec) => spec.name,
        }
    }
}

/// Sub-group of a segmented transform string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Group {
    /// Bundled together under one `tr:` token
    Primary,
    /// Appended as individual pieces after the bundle
    Secondary,
    #[default]
    None,
}

/// How a present argument is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// `prefix` + separator + value
    #[default]
    Pair,
    /// Bare prefix token; presence alone triggers it, the value is ignored
    Flag,
}

/// Catalog entry for one transform argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub wire_prefix: &'static str,
    pub kind: ValueKind,
    pub group: Group,
    pub encoding: Encoding,
}

impl ArgSpec {
    pub const fn new(name: &'static str, wire_prefix: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            wire_prefix,
            kind,
            group: Group::None,
            encoding: Encoding::Pair,
        }
    }

    pub const fn primary(mut self) -> Self {
        self.group = Group::Primary;
        self
    }

    pub const fn secondary(mut self) -> Self {
        self.group = Group::Secondary;
        self
    }

    pub const fn flag(mut self) -> Self {
        self.encoding = Encoding::Flag;
        self
    }
}

/// A provider's ordered argument table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub provider: &'static str,
    args: &'static [ArgSpec],
}

impl Catalog {
    pub const fn new(provider: &'static str, args: &'static [ArgSpec]) -> Self {
        Self { provider, args }
    }

    /// Every argument, in declaration order
    pub fn list_args(&self) -> &'static [ArgSpec] {
        self.args
    }

    pub fn lookup(&self, name: &str) -> Option<&'static ArgSpec> {
        self.args.iter().find(|spec| spec.name == name)
    }

    /// Position of `name` in declaration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.args.iter().position(|spec| spec.name == name)
    }

    /// Distinct enum specs referenced by this catalog, first use first
    pub fn enum_specs(&self) -> Vec<&'static EnumSpec> {
        let mut specs: Vec<&'static EnumSpec> = Vec::new();
        for spec in self.args {
            if let ValueKind::Enum(e) = spec.kind {
                if !specs.iter().any(|seen| seen.name == e.name) {
                    specs.push(e);
                }
            }
        }
        specs
    }

    /// Check that argument names and wire prefixes are unique
    pub fn check_unique(&self) -> Result<(), String> {
        for (i, spec) in self.args.iter().enumerate() {
            for other in &self.args[i + 1..] {
                if spec.name == other.name {
                    return Err(format!(
                        "{}: duplicate argument name '{}'",
                        self.provider, spec.name
                    ));
                }
                if spec.wire_prefix == other.wire_prefix {
                    return Err(format!(
                        "{}: arguments '{}' and '{}' share wire prefix '{}'",
                        self.provider, spec.name, other.name, spec.wire_prefix
                    ));
                }
            }
        }
        Ok(())
    }
}
