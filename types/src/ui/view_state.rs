/// UI configuration options derived from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip the coin sweep and dialog effects.
    pub reduced_motion: bool,
}
