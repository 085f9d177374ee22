use thiserror::Error;

/// Errors returned by [`dispatch`](crate::CommandTable::dispatch) and by
/// [`CommandContext`](crate::CommandContext) construction.
///
/// All variants are recoverable: the caller (the transport loop) decides
/// whether to log, count, or ignore the failure. Dispatch never halts the
/// device on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
	/// No table entry matches the context's opcode.
	#[error("unknown opcode: {0:#04x}")]
	UnknownOpcode(u8),
	/// The length byte does not match the bytes actually backing the payload.
	#[error("length byte {len} does not match payload size {actual}")]
	MalformedContext {
		/// Length claimed by the frame.
		len: u8,
		/// Bytes actually present.
		actual: usize,
	},
	/// A frame must carry at least the opcode byte.
	#[error("empty frame")]
	EmptyFrame,
	/// The payload does not fit the 8-bit length field.
	#[error("payload of {0} bytes exceeds the 8-bit length field")]
	OversizedFrame(usize),
}

/// Errors detected while constructing a [`CommandTable`](crate::CommandTable).
///
/// Construction failures are fatal: initialization must abort rather than run
/// with a broken table. Tables declared in `const`/`static` position report
/// the same condition as a compile-time panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Two entries claim the same opcode.
	#[error("duplicate opcode: {0:#04x}")]
	DuplicateOpcode(u8),
}
