//! Contains the errors that can arise within spctag
//!
//! The primary error is [`SpcTagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

pub use crate::util::text::TextEncodingError;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, SpcTagError>`
pub type Result<T> = std::result::Result<T, SpcTagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Extended tag errors
	/// The extended chunk does not start with the `xid6` magic
	///
	/// Holds the four bytes found in its place.
	MagicMismatch([u8; 4]),
	/// The extended chunk payload ended in the middle of a sub-chunk, or declared an invalid size
	MalformedChunk(&'static str),

	// Field errors
	/// A value is too large for the fixed-width field it is written to
	OversizedField {
		/// The name of the field
		field: &'static str,
		/// The number of bytes (or the largest value) the field can hold
		max: usize,
		/// The number of bytes (or the value) that was provided
		actual: usize,
	},
	/// A value cannot be represented in the field it is written to
	InvalidFieldValue {
		/// The name of the field
		field: &'static str,
		/// Why the value was rejected
		reason: &'static str,
	},
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while encoding text
	TextEncode(TextEncodingError),

	// Store related errors
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,
	/// The store is too small to hold the data being written
	SizeMismatch,

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
	/// This should **never** be encountered
	Infallible(std::convert::Infallible),
}

/// Errors that could occur within spctag
pub struct SpcTagError {
	pub(crate) kind: ErrorKind,
}

impl SpcTagError {
	/// Create a `SpcTagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::error::{ErrorKind, SpcTagError};
	///
	/// let truncated = SpcTagError::new(ErrorKind::MalformedChunk("sub-chunk header is truncated"));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::error::{ErrorKind, SpcTagError};
	///
	/// let mismatch = SpcTagError::new(ErrorKind::MagicMismatch(*b"RIFF"));
	/// if let ErrorKind::MagicMismatch(found) = mismatch.kind() {
	/// 	println!("Expected an extended tag, found {found:?}");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for SpcTagError {}

impl Debug for SpcTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<TextEncodingError> for SpcTagError {
	fn from(input: TextEncodingError) -> Self {
		Self {
			kind: ErrorKind::TextEncode(input),
		}
	}
}

impl From<std::io::Error> for SpcTagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for SpcTagError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl From<std::convert::Infallible> for SpcTagError {
	fn from(input: std::convert::Infallible) -> Self {
		Self {
			kind: ErrorKind::Infallible(input),
		}
	}
}

impl Display for SpcTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::MagicMismatch(found) => write!(
				f,
				"XID6: Expected an extended chunk, found the identifier {found:?}"
			),
			ErrorKind::MalformedChunk(message) => write!(f, "XID6: {message}"),
			ErrorKind::OversizedField { field, max, actual } => write!(
				f,
				"Field `{field}` cannot hold the provided value (max: {max}, provided: {actual})"
			),
			ErrorKind::InvalidFieldValue { field, reason } => {
				write!(f, "Field `{field}` has an invalid value: {reason}")
			},
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::TextEncode(message) => write!(f, "Text encoding: {message}"),

			// Stores
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
			ErrorKind::SizeMismatch => write!(
				f,
				"The store is too small to hold an extended tag at its fixed offset"
			),

			ErrorKind::Infallible(_) => write!(f, "A expected condition was not upheld"),
		}
	}
}
