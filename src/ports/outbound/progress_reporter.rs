/// ProgressReporter port for user feedback during operations
///
/// Messages go to stderr so they never mix with rendered output on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Shows an activity indicator while waiting on the service
    ///
    /// # Arguments
    /// * `message` - Text displayed next to the indicator
    fn start_waiting(&self, message: &str);

    /// Reports an error or warning message, clearing any activity indicator
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, clearing any activity indicator
    fn report_completion(&self, message: &str);
}
