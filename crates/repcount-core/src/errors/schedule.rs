// ABOUTME: Workout schedule error types
// ABOUTME: Rejections raised before any schedule mutation takes place

/// Errors raised while installing a workout schedule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The exercise list and duration list have different lengths
    #[error("Time intervals and exercises lists must be the same length (exercises: {exercises}, durations: {durations})")]
    LengthMismatch {
        /// Number of exercise names supplied
        exercises: usize,
        /// Number of durations supplied
        durations: usize,
    },
}
