/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while the listing is read and the SBOM is built.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a condition the build recovered from
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_warning(&self, message: &str);

    /// Reports an error message
    ///
    /// # Arguments
    /// * `message` - The error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
