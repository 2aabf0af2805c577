macro_rules! try_vec {
	($elem:expr; $size:expr, $limit:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size, $limit)? }};
}

// Shorthand for return Err(SpcTagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(SpcTagError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(SpcTagError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::SpcTagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::SpcTagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for SpcTagError::new(ErrorKind::MalformedChunk("Message"))
//
// Usage:
//
// - malformed_err!(Message)
//
// or bail:
//
// - malformed_err!(@BAIL Message)
macro_rules! malformed_err {
	($reason:literal) => {
		crate::error::SpcTagError::new(crate::error::ErrorKind::MalformedChunk($reason))
	};
	(@BAIL $reason:literal) => {
		return Err(malformed_err!($reason))
	};
}

// Shorthand for SpcTagError::new(ErrorKind::OversizedField { .. })
//
// Usage:
//
// - oversized_err!(@BAIL field_name, max, actual)
macro_rules! oversized_err {
	(@BAIL $field:expr, $max:expr, $actual:expr) => {
		return Err(crate::error::SpcTagError::new(
			crate::error::ErrorKind::OversizedField {
				field: $field,
				max: $max,
				actual: $actual,
			},
		))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, malformed_err, oversized_err, parse_mode_choice, try_vec};
