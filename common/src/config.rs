pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Leaves the terminal contents alone on startup.
    pub no_clear: bool,
    /// Replaces the simulated pauses with no-ops.
    ///
    /// Only affects timing, never the contents of the artifact files.
    pub no_delay: bool,
    /// Aborts the real pipeline as soon as a tool exits non-zero.
    pub strict: bool,
}
