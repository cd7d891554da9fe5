use thiserror::Error;

/// Errors produced when decoding string-encoded toast values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
	/// Unrecognised position name.
	#[error("unknown toast position: {0}")]
	Position(String),
	/// Unrecognised stacking mode.
	#[error("unknown stacking mode: {0} (expected 'vertical' or 'depth')")]
	Stacking(String),
	/// Unrecognised toast kind.
	#[error("unknown toast kind: {0}")]
	Kind(String),
	/// Animation name that is not one of the generated toast keyframes.
	#[error("not a toast keyframe name: {0}")]
	Keyframes(String),
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
