use printfarm_core::config::DEFAULT_STREAM_URL_TEMPLATE;
use printfarm_core::PrinterRecord;

const ADDRESS_PLACEHOLDER: &str = "{address}";
const PRINTER_ID_PLACEHOLDER: &str = "{printer_id}";

/// Builds per-printer camera feed URLs from a `{address}` / `{printer_id}` template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamUrlTemplate {
    template: String,
}

impl StreamUrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// `None` when the template needs an address the printer does not have.
    pub fn url_for(&self, printer: &PrinterRecord) -> Option<String> {
        let mut url = self.template.replace(PRINTER_ID_PLACEHOLDER, printer.id.as_str());
        if url.contains(ADDRESS_PLACEHOLDER) {
            let address = printer.network_address.as_deref()?;
            url = url.replace(ADDRESS_PLACEHOLDER, address);
        }
        Some(url)
    }
}

impl Default for StreamUrlTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_STREAM_URL_TEMPLATE)
    }
}
