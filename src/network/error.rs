/// Errors raised by the node network generator.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NetworkError {
	/// An input parameter is outside its allowed range.
	#[error("invalid parameter {name}: {value}")]
	InvalidParameter {
		/// Parameter name as it appears in [`super::NetworkParams`].
		name: &'static str,
		/// The rejected value, rendered for display.
		value: String,
	},
}

impl NetworkError {
	pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
		Self::InvalidParameter {
			name,
			value: value.to_string(),
		}
	}
}
