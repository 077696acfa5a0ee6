/// The host-owned label that shows the quote.
///
/// Calls arrive from the refresher's runtime; implementations must not call
/// back into the refresher while holding their own locks.
pub trait DisplaySink: Send + Sync + 'static {
    /// Replace the displayed text.
    fn set_text(&self, text: &str);

    /// Replace the label's inline CSS.
    fn set_style(&self, css: &str);
}
