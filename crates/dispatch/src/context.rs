use crate::error::DispatchError;

/// Decoded unit of work handed from the transport layer into dispatch.
///
/// The payload is borrowed from the transport's receive buffer, never copied.
/// The transport must keep those bytes valid and unmodified for the full
/// duration of the `dispatch` call; the context is consumed synchronously by
/// exactly one handler invocation and then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext<'a> {
	/// Opcode selecting the command behavior.
	pub op: u8,
	/// Payload byte count, excluding the opcode byte.
	pub len: u8,
	/// Borrowed view over `len` payload bytes.
	pub payload: &'a [u8],
}

impl<'a> CommandContext<'a> {
	/// Builds a context from already-split fields, checking that `len`
	/// matches the bytes actually backing `payload`.
	///
	/// A handler trusts `len`; letting a mismatched length through would
	/// invite reads past the real payload.
	pub fn new(op: u8, len: u8, payload: &'a [u8]) -> Result<Self, DispatchError> {
		if usize::from(len) != payload.len() {
			return Err(DispatchError::MalformedContext {
				len,
				actual: payload.len(),
			});
		}
		Ok(Self { op, len, payload })
	}

	/// Decodes a raw received frame: first byte is the opcode, the remainder
	/// is the payload (borrowed, not copied).
	pub fn from_frame(frame: &'a [u8]) -> Result<Self, DispatchError> {
		let (&op, payload) = frame.split_first().ok_or(DispatchError::EmptyFrame)?;
		let len = u8::try_from(payload.len())
			.map_err(|_| DispatchError::OversizedFrame(payload.len()))?;
		Ok(Self { op, len, payload })
	}
}
