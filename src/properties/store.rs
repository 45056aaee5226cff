//! The per-element property store and its DOT renderings

use std::fmt;

use indexmap::IndexMap;

use crate::error::DotweaveError;
use crate::properties::kinds::{ArrowType, Direction, PropertyKind, RankDir, RankType, Shape};
use crate::utils::string::{escape, is_plain_name};

/// A single property value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Symbol(String),
    Flag(bool),
}

impl PropertyValue {
    /// The raw value, without DOT quoting
    pub fn as_str(&self) -> &str {
        match self {
            PropertyValue::Text(s) | PropertyValue::Symbol(s) => s,
            PropertyValue::Flag(true) => "true",
            PropertyValue::Flag(false) => "false",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(&escape(s)),
            PropertyValue::Symbol(s) => f.write_str(s),
            PropertyValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Flag(value)
    }
}

macro_rules! impl_symbol_value {
    ($($kind:ty),* $(,)?) => {
        $(
            impl From<$kind> for PropertyValue {
                fn from(value: $kind) -> Self {
                    let keyword: &'static str = value.into();
                    PropertyValue::Symbol(keyword.to_string())
                }
            }
        )*
    };
}

impl_symbol_value!(Shape, RankType, RankDir, ArrowType, Direction);

/// How a store is rendered, depending on the element that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// ` [a=b, c=d]`, appended to node and edge statements
    AttributeList,
    /// `a=b;` per line, inside a graph or subgraph body
    Statements,
    /// `node [a=b];` or `edge [a=b];`
    Defaults(DefaultsTarget),
}

/// The statement keyword used for scope-wide defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultsTarget {
    Node,
    Edge,
}

impl DefaultsTarget {
    fn keyword(self) -> &'static str {
        match self {
            DefaultsTarget::Node => "node",
            DefaultsTarget::Edge => "edge",
        }
    }
}

/// An insertion-ordered property map.
///
/// Holds one value per name; setting a name again replaces the value in
/// place. Enumerated and boolean properties are validated when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: IndexMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, validating the value against the property's kind.
    ///
    /// Enumerated properties such as `shape` or `rank` only accept their
    /// keywords and boolean properties only accept `true`/`false`; both are
    /// rejected here rather than at render time.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<&mut Self, DotweaveError> {
        let name = name.trim();
        if !is_plain_name(name) {
            return Err(DotweaveError::InvalidPropertyName {
                name: name.to_string(),
            });
        }
        let value = validate(name, value.into())?;
        Ok(self.insert(name, value))
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name.trim())
    }

    /// The raw text of a property, if set
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).map(PropertyValue::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.values.shift_remove(name.trim())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn set_shape(&mut self, shape: Shape) -> &mut Self {
        self.insert("shape", shape.into())
    }

    pub fn set_rank(&mut self, rank: RankType) -> &mut Self {
        self.insert("rank", rank.into())
    }

    pub fn set_rankdir(&mut self, rankdir: RankDir) -> &mut Self {
        self.insert("rankdir", rankdir.into())
    }

    pub fn set_arrowhead(&mut self, arrow: ArrowType) -> &mut Self {
        self.insert("arrowhead", arrow.into())
    }

    pub fn set_arrowtail(&mut self, arrow: ArrowType) -> &mut Self {
        self.insert("arrowtail", arrow.into())
    }

    pub fn set_dir(&mut self, dir: Direction) -> &mut Self {
        self.insert("dir", dir.into())
    }

    pub fn set_label(&mut self, label: &str) -> &mut Self {
        self.insert("label", label.into())
    }

    pub fn set_color(&mut self, color: &str) -> &mut Self {
        self.insert("color", color.into())
    }

    pub fn set_fillcolor(&mut self, color: &str) -> &mut Self {
        self.insert("fillcolor", color.into())
    }

    pub fn set_fontname(&mut self, font: &str) -> &mut Self {
        self.insert("fontname", font.into())
    }

    pub fn set_fontsize(&mut self, size: &str) -> &mut Self {
        self.insert("fontsize", size.into())
    }

    pub fn set_style(&mut self, style: &str) -> &mut Self {
        self.insert("style", style.into())
    }

    /// Render the store in the given style; an empty store renders as ""
    pub fn render(&self, style: RenderStyle) -> String {
        if self.is_empty() {
            return String::new();
        }
        match style {
            RenderStyle::AttributeList => format!(" [{}]", self.pairs().join(", ")),
            RenderStyle::Statements => self.statements().collect::<Vec<_>>().join("\n"),
            RenderStyle::Defaults(target) => {
                format!(
                    "{}{};",
                    target.keyword(),
                    self.render(RenderStyle::AttributeList)
                )
            }
        }
    }

    /// One `name=value;` statement per property, in insertion order
    pub(crate) fn statements(&self) -> impl Iterator<Item = String> + '_ {
        self.values.iter().map(|(k, v)| format!("{k}={v};"))
    }

    fn pairs(&self) -> Vec<String> {
        self.values.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }

    fn insert(&mut self, name: &str, value: PropertyValue) -> &mut Self {
        self.values.insert(name.to_string(), value);
        self
    }
}

fn validate(name: &str, value: PropertyValue) -> Result<PropertyValue, DotweaveError> {
    match PropertyKind::of(name) {
        PropertyKind::Text => Ok(value),
        PropertyKind::Flag => match value {
            PropertyValue::Flag(_) => Ok(value),
            PropertyValue::Text(s) | PropertyValue::Symbol(s) => {
                let flag = match s.trim() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                };
                flag.map(PropertyValue::Flag)
                    .ok_or_else(|| DotweaveError::InvalidBoolValue {
                        property: name.to_string(),
                        value: s,
                    })
            }
        },
        PropertyKind::Symbol(set) => {
            let raw = value.as_str().trim();
            if !matches!(value, PropertyValue::Flag(_)) && set.contains(raw) {
                Ok(PropertyValue::Symbol(raw.to_string()))
            } else {
                Err(DotweaveError::InvalidEnumValue {
                    property: name.to_string(),
                    value: raw.to_string(),
                    expected: set.variants().join(", "),
                })
            }
        }
    }
}

macro_rules! impl_global_properties {
    ($(#[$meta:meta])* $name:ident => $target:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            properties: Properties,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn properties(&self) -> &Properties {
                &self.properties
            }

            pub fn properties_mut(&mut self) -> &mut Properties {
                &mut self.properties
            }

            pub fn render(&self) -> String {
                self.properties.render(RenderStyle::Defaults($target))
            }
        }

        impl From<Properties> for $name {
            fn from(properties: Properties) -> Self {
                Self { properties }
            }
        }
    };
}

impl_global_properties! {
    /// Node defaults for every node rendered in a scope (`node [...]`)
    GlobalNodeProperties => DefaultsTarget::Node
}

impl_global_properties! {
    /// Edge defaults for every edge rendered in a scope (`edge [...]`)
    GlobalEdgeProperties => DefaultsTarget::Edge
}

impl GlobalNodeProperties {
    pub fn with_shape(shape: Shape) -> Self {
        let mut defaults = Self::new();
        defaults.properties.set_shape(shape);
        defaults
    }
}
