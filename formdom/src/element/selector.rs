use super::Element;

/// A small subset of CSS selectors, enough for widgets to find their parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Tag(String),
    Class(String),
    /// Presence of a `data-*` attribute (name without the prefix).
    Data(String),
    /// Attribute equality, e.g. `type="text"`.
    Attr(String, String),
    /// Every inner selector must match (compound selector).
    All(Vec<Selector>),
    /// Any inner selector may match (selector list).
    Any(Vec<Selector>),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn data(key: impl Into<String>) -> Self {
        Self::Data(key.into())
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attr(name.into(), value.into())
    }

    /// `tag.class`
    pub fn tag_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self::All(vec![Self::tag(tag), Self::class(class)])
    }

    /// `input[type="<kind>"]`
    pub fn input(kind: impl Into<String>) -> Self {
        Self::All(vec![Self::tag("input"), Self::attr("type", kind)])
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Tag(tag) => element.tag == *tag,
            Self::Class(class) => element.has_class(class),
            Self::Data(key) => element.data.contains_key(key),
            Self::Attr(name, value) => element.get_attr(name) == Some(value),
            Self::All(all) => all.iter().all(|s| s.matches(element)),
            Self::Any(any) => any.iter().any(|s| s.matches(element)),
        }
    }
}
