/// Options to control how spctag parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) prefer_binary_on_ambiguity: bool,
	pub(crate) read_extended_tag: bool,
	pub(crate) allocation_limit: usize,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	prefer_binary_on_ambiguity: false,
	/// 	read_extended_tag: true,
	/// 	allocation_limit: 16 * 1024 * 1024,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default allocation limit for the extended chunk payload
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			prefer_binary_on_ambiguity: false,
			read_extended_tag: true,
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Which layout to assume when the base tag's encoding cannot be determined
	///
	/// The base (ID666) tag can be stored as either binary or text, and nothing in the file says which.
	/// When the bytes fit both encodings equally well (for example, all of the time and date
	/// fields are empty), this decides the outcome.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::ParseOptions;
	///
	/// // My collection was dumped with tools writing binary tags
	/// let parsing_options = ParseOptions::new().prefer_binary_on_ambiguity(true);
	/// ```
	pub fn prefer_binary_on_ambiguity(&mut self, prefer_binary_on_ambiguity: bool) -> Self {
		self.prefer_binary_on_ambiguity = prefer_binary_on_ambiguity;
		*self
	}

	/// Whether or not to read the extended (XID6) tag
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::ParseOptions;
	///
	/// // I only care about the base tag
	/// let parsing_options = ParseOptions::new().read_extended_tag(false);
	/// ```
	pub fn read_extended_tag(&mut self, read_extended_tag: bool) -> Self {
		self.read_extended_tag = read_extended_tag;
		*self
	}

	/// The maximum number of bytes to allocate for the extended chunk payload
	///
	/// The chunk declares its own size, so a corrupt file could otherwise request up to 2 GiB.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::ParseOptions;
	///
	/// // No extended tag I know of comes close to 64 KiB
	/// let parsing_options = ParseOptions::new().allocation_limit(64 * 1024);
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use spctag::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> spctag::error::Result<()> {
/// // We only want to read well-formed inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let tag = spctag::read_from_path("foo.spc", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * A text-encoded length that isn't a number - The parser will error
	/// * A malformed extended tag - The parser will error, and the base tag is discarded along with it
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * A text-encoded length that isn't a number - The length will be 0
	/// * A malformed extended tag - The extended tag is discarded, the base tag is kept
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * A text-encoded length that isn't a number - The length will be 0
	/// * A truncated extended tag - The items before the truncation are kept
	Relaxed,
}
