use crate::latex::escape::escape_latex;
use serde::Serialize;
use std::fmt;

/// A single macro argument, marked raw or escaped at construction.
///
/// Raw arguments are rendered verbatim; escaped arguments go through
/// `escape_latex` when the command is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Escaped(String),
    Raw(String),
}

impl Argument {
    pub fn render(&self) -> String {
        match self {
            Argument::Escaped(text) => escape_latex(text),
            Argument::Raw(text) => text.clone(),
        }
    }
}

/// One entry of an option list: a bare flag or a `key=value` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionItem {
    Flag(String),
    KeyValue(String, String),
}

/// Ordered macro options, rendered as `[k1=v1,k2]` before the arguments.
///
/// Options are always rendered verbatim: the siunitx option syntax uses `-`
/// and `=` as operators, which `escape_latex` would mangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    items: Vec<OptionItem>,
}

impl Options {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a `key=value` pair, keeping insertion order.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(OptionItem::KeyValue(key.into(), value.into()));
        self
    }

    /// Append a bare flag.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.items.push(OptionItem::Flag(name.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
        self.items.iter()
    }

    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .items
            .iter()
            .map(|item| match item {
                OptionItem::Flag(name) => name.clone(),
                OptionItem::KeyValue(key, value) => format!("{}={}", key, value),
            })
            .collect();
        rendered.join(",")
    }
}

/// A macro invocation: command name, ordered arguments, optional options.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub options: Option<Options>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            options: None,
        }
    }

    /// Append an argument rendered verbatim.
    pub fn raw_argument(mut self, text: impl Into<String>) -> Self {
        self.arguments.push(Argument::Raw(text.into()));
        self
    }

    /// Append an argument escaped at render time.
    pub fn escaped_argument(mut self, text: impl Into<String>) -> Self {
        self.arguments.push(Argument::Escaped(text.into()));
        self
    }

    pub fn with_options(mut self, options: Option<Options>) -> Self {
        self.options = options.filter(|o| !o.is_empty());
        self
    }

    /// Serialize to LaTeX source: `\name[options]{arg1}{arg2}`.
    pub fn dumps(&self) -> String {
        let mut out = String::new();
        out.push('\\');
        out.push_str(&self.name);
        if let Some(options) = &self.options {
            if !options.is_empty() {
                out.push('[');
                out.push_str(&options.render());
                out.push(']');
            }
        }
        for argument in &self.arguments {
            out.push('{');
            out.push_str(&argument.render());
            out.push('}');
        }
        out
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dumps())
    }
}

// Serialized with rendered fields so downstream pipelines see the final
// argument text, not the raw/escaped wrappers.
impl Serialize for Command {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Command", 3)?;
        state.serialize_field("command", &self.name)?;
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.render()).collect();
        state.serialize_field("arguments", &arguments)?;
        let options = self.options.as_ref().map(|o| o.render());
        state.serialize_field("options", &options)?;
        state.end()
    }
}
