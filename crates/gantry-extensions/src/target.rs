use crate::scope::LoadedExtension;

/// Anything the build model can hand to the extension machinery for
/// configuration.
pub trait ConfigurationTarget {
    fn target_name(&self) -> &str;

    /// The extensibility check: `None` means extensions can never be
    /// applied to this target.
    fn as_extensible(&mut self) -> Option<&mut dyn ExtensibleTarget>;
}

/// A target extensions can be applied to.
///
/// The target owns validation and retention: rejecting an extension is its
/// call, and keeping the [`LoadedExtension`] keeps the extension's code
/// mapped.
pub trait ExtensibleTarget: ConfigurationTarget {
    fn apply_extension(&mut self, extension: LoadedExtension) -> anyhow::Result<()>;
}
