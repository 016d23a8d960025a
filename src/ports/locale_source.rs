/// Port for reading the ambient locale.
///
/// Returns a tag such as `en-US`, `de_DE`, or `de`; `None` when no usable
/// locale is configured.
pub trait LocaleSource {
    fn locale(&self) -> Option<String>;
}
