// ABOUTME: Frame payload error types for keypoint submissions
// ABOUTME: Covers malformed transport payloads, never missing landmarks

/// Errors raised while decoding a submitted frame
///
/// A joint that is simply absent is not an error; detectors treat it as
/// insufficient data. These variants only cover payloads that cannot be
/// interpreted at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// Neither a keypoint map nor a landmark list was supplied
    #[error("Frame must contain either `keypoints` or `landmarks`")]
    Empty,

    /// Both representations were supplied at once
    #[error("Frame must not contain both `keypoints` and `landmarks`")]
    Ambiguous,

    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate for joint '{joint}'")]
    NonFiniteCoordinate {
        /// Wire name of the offending joint
        joint: &'static str,
    },
}
