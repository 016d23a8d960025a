use crate::ports::LocaleSource;

/// Locale source returning a fixed tag.
pub struct StaticLocale(Option<String>);

impl StaticLocale {
    pub fn tag(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LocaleSource for StaticLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}
