use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Write as _;

/// The language of the generated source file.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TargetLanguage {
    /// A Rust module exposing `DATA` and an optional `http` handler.
    #[default]
    Rust,
    /// A Go package exposing `Data` and an optional `net/http` handler.
    Go,
}

impl TargetLanguage {
    /// Extension of the generated file, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetLanguage::Rust => "rs",
            TargetLanguage::Go => "go",
        }
    }

    /// Leading whitespace of every line of an encoded fragment.
    pub fn fragment_indent(self) -> &'static str {
        match self {
            TargetLanguage::Rust => "            ",
            TargetLanguage::Go => "\t\t",
        }
    }

    /// Quotes `value` as a string literal of this language.
    pub fn string_literal(self, value: &str) -> String {
        let mut literal = String::with_capacity(value.len() + 2);
        literal.push('"');
        for c in value.chars() {
            match c {
                '"' => literal.push_str("\\\""),
                '\\' => literal.push_str("\\\\"),
                '\n' => literal.push_str("\\n"),
                '\r' => literal.push_str("\\r"),
                '\t' => literal.push_str("\\t"),
                c if c.is_control() => match self {
                    TargetLanguage::Rust => {
                        let _ = write!(literal, "\\u{{{:x}}}", u32::from(c));
                    },
                    TargetLanguage::Go => {
                        let _ = write!(literal, "\\u{:04x}", u32::from(c));
                    },
                },
                c => literal.push(c),
            }
        }
        literal.push('"');
        literal
    }
}
