/// Options to control how spctag writes a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) lossy_text_encoding: bool,
	pub(crate) write_extended_tag: bool,
}

impl WriteOptions {
	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			lossy_text_encoding: false,
			write_extended_tag: true,
		}
	}

	/// Whether to allow lossy text encoding
	///
	/// Every text field in an SPC file is stored as Latin-1. If this is set to `true`, any
	/// characters outside of that range will be replaced with `?`. Otherwise, writing will fail.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::WriteOptions;
	///
	/// // I don't care if my titles lose a few characters
	/// let options = WriteOptions::new().lossy_text_encoding(true);
	/// ```
	pub fn lossy_text_encoding(mut self, lossy_text_encoding: bool) -> Self {
		self.lossy_text_encoding = lossy_text_encoding;
		self
	}

	/// Whether to write the extended (XID6) tag
	///
	/// If set to `false`, only the base tag is written, and whatever follows the SPC data
	/// is left untouched.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::WriteOptions;
	///
	/// // Leave the extended chunk alone
	/// let options = WriteOptions::new().write_extended_tag(false);
	/// ```
	pub fn write_extended_tag(mut self, write_extended_tag: bool) -> Self {
		self.write_extended_tag = write_extended_tag;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	/// 	lossy_text_encoding: false,
	/// 	write_extended_tag: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
