use crate::context::CommandContext;
use crate::error::{DispatchError, RegistryError};

/// Function bound to one opcode. Side effects only; runs to completion on the
/// caller's execution context.
pub type Handler = fn(&CommandContext<'_>);

/// One opcode-to-handler binding.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
	/// Opcode this entry answers to. Unique within a table.
	pub op: u8,
	/// Handler invoked for matching commands.
	pub handler: Handler,
}

/// Immutable opcode-to-handler table.
///
/// Built once before any dispatch occurs and never mutated afterwards, so it
/// needs no locking even when shared process-wide. Entries are kept sorted by
/// opcode; lookup is a binary search, bounded and independent of payload size.
///
/// [`CommandTable::new`] is `const`, so a table declared in `static` position
/// is checked for duplicate opcodes at compile time. Tables assembled at run
/// time go through [`CommandTable::try_new`], which reports the same condition
/// as [`RegistryError::DuplicateOpcode`] before the table can serve a single
/// dispatch.
pub struct CommandTable<const N: usize> {
	entries: [CommandEntry; N],
}

/// Insertion sort by opcode. Callable in `const` context; N stays small
/// (typically under 32 entries) so quadratic cost is irrelevant.
const fn sort_by_opcode<const N: usize>(mut entries: [CommandEntry; N]) -> [CommandEntry; N] {
	let mut i = 1;
	while i < N {
		let mut j = i;
		while j > 0 && entries[j - 1].op > entries[j].op {
			let tmp = entries[j - 1];
			entries[j - 1] = entries[j];
			entries[j] = tmp;
			j -= 1;
		}
		i += 1;
	}
	entries
}

/// Returns the first opcode claimed by two adjacent sorted entries, if any.
const fn find_duplicate<const N: usize>(entries: &[CommandEntry; N]) -> Option<u8> {
	let mut i = 1;
	while i < N {
		if entries[i - 1].op == entries[i].op {
			return Some(entries[i].op);
		}
		i += 1;
	}
	None
}

impl<const N: usize> CommandTable<N> {
	/// Builds a table from a declarative entry list, sorting by opcode.
	///
	/// # Panics
	///
	/// Panics if two entries share an opcode. In `const`/`static` position
	/// this is a compile-time error, which is the intended way to declare the
	/// command set.
	pub const fn new(entries: [CommandEntry; N]) -> Self {
		let entries = sort_by_opcode(entries);
		if find_duplicate(&entries).is_some() {
			panic!("duplicate opcode in command table");
		}
		Self { entries }
	}

	/// Fallible construction for tables assembled outside `const` context.
	///
	/// Rejects duplicate opcodes before the table exists, so a broken
	/// declaration can never serve a dispatch.
	pub fn try_new(entries: [CommandEntry; N]) -> Result<Self, RegistryError> {
		let entries = sort_by_opcode(entries);
		if let Some(op) = find_duplicate(&entries) {
			return Err(RegistryError::DuplicateOpcode(op));
		}
		Ok(Self { entries })
	}

	/// Finds the entry bound to `op`.
	pub fn lookup(&self, op: u8) -> Option<&CommandEntry> {
		self.entries
			.binary_search_by_key(&op, |entry| entry.op)
			.ok()
			.map(|idx| &self.entries[idx])
	}

	/// Resolves the context's opcode and invokes the bound handler
	/// synchronously on the calling execution context.
	///
	/// The context's `len`/`payload` invariant is the transport layer's
	/// contract (upheld by the [`CommandContext`] constructors); dispatch does
	/// not re-validate it. Aside from the single handler invocation, dispatch
	/// has no side effects and keeps no state between calls.
	pub fn dispatch(&self, ctx: &CommandContext<'_>) -> Result<(), DispatchError> {
		match self.lookup(ctx.op) {
			Some(entry) => {
				tracing::trace!(op = ctx.op, len = ctx.len, "dispatching command");
				(entry.handler)(ctx);
				Ok(())
			}
			None => {
				tracing::debug!(op = ctx.op, "unknown opcode");
				Err(DispatchError::UnknownOpcode(ctx.op))
			}
		}
	}

	/// Entries in opcode order.
	pub fn entries(&self) -> &[CommandEntry] {
		&self.entries
	}

	/// Number of registered commands.
	pub const fn len(&self) -> usize {
		N
	}

	/// Whether the table registers no commands.
	pub const fn is_empty(&self) -> bool {
		N == 0
	}
}
