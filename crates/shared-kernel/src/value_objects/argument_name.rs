// crates/shared-kernel/src/value_objects/argument_name.rs
use std::{borrow::Cow, fmt};

/// Optional diagnostic label for the argument a guard inspects.
///
/// Any label is accepted, including absent, empty or whitespace-only ones; the
/// label only shapes error text and never decides whether a guard passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArgumentName<'a>(Option<Cow<'a, str>>);

impl<'a> ArgumentName<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self(Some(label.into()))
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.0.is_none()
    }

    /// Label for the element at `index` of the collection this name refers to.
    #[must_use]
    pub fn element(&self, index: usize) -> ArgumentName<'static> {
        let label = match self.as_str() {
            Some(name) => format!("{name}[{index}]"),
            None => format!("[{index}]"),
        };
        ArgumentName(Some(Cow::Owned(label)))
    }

    #[must_use]
    pub fn to_label(&self) -> Option<String> {
        self.0.as_ref().map(|label| label.to_string())
    }

    #[must_use]
    pub fn into_owned(self) -> ArgumentName<'static> {
        ArgumentName(self.0.map(|label| Cow::Owned(label.into_owned())))
    }
}

impl<'a> From<&'a str> for ArgumentName<'a> {
    fn from(label: &'a str) -> Self {
        Self::new(label)
    }
}

impl<'a> From<&'a String> for ArgumentName<'a> {
    fn from(label: &'a String) -> Self {
        Self::new(label.as_str())
    }
}

impl From<String> for ArgumentName<'_> {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl<'a> From<Cow<'a, str>> for ArgumentName<'a> {
    fn from(label: Cow<'a, str>) -> Self {
        Self(Some(label))
    }
}

impl<'a> From<Option<&'a str>> for ArgumentName<'a> {
    fn from(label: Option<&'a str>) -> Self {
        Self(label.map(Cow::Borrowed))
    }
}

impl From<Option<String>> for ArgumentName<'_> {
    fn from(label: Option<String>) -> Self {
        Self(label.map(Cow::Owned))
    }
}

impl<'a> From<&ArgumentName<'a>> for ArgumentName<'a> {
    fn from(name: &ArgumentName<'a>) -> Self {
        name.clone()
    }
}

impl fmt::Display for ArgumentName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(label) => write!(f, "'{label}'"),
            None => f.write_str("<anonymous>"),
        }
    }
}
