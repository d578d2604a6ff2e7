/// Import configuration.
///
/// Neither option changes what gets dispatched. Attribute binding is always
/// positional.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Compare each attribute name against the schema's reference ordering
    /// and report mismatches as diagnostics.
    pub validate_attribute_names: bool,
    /// Emit every diagnostic through `log::warn!` as it is recorded.
    pub log_diagnostics: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            validate_attribute_names: false,
            log_diagnostics: true,
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_attribute_names(mut self, on: bool) -> Self {
        self.validate_attribute_names = on;
        self
    }

    pub fn log_diagnostics(mut self, on: bool) -> Self {
        self.log_diagnostics = on;
        self
    }
}
