/// Declares the command set from a single list of `name = opcode` rows.
///
/// Each row expands into an `OP_<NAME>` opcode constant and one entry in the
/// generated [`CommandTable`](crate::CommandTable) static, bound to the
/// handler function named `cmd_<name>` at the call site. Declaring a command
/// whose handler does not exist is a compile error, so the declaration list
/// and the handler set cannot drift apart. Adding a command means adding one
/// row here plus one `cmd_*` function; nothing else changes.
///
/// Duplicate opcodes fail at compile time via the table's `const`
/// construction.
///
/// ```
/// use hexrow_dispatch::{CommandContext, command_table};
///
/// fn cmd_reset(_ctx: &CommandContext) {}
///
/// command_table! {
/// 	pub static COMMANDS = {
/// 		reset = 0x00,
/// 	}
/// }
///
/// assert_eq!(OP_RESET, 0x00);
/// assert_eq!(COMMANDS.len(), 1);
/// ```
#[macro_export]
macro_rules! command_table {
	($(#[$meta:meta])* $vis:vis static $table:ident = {
		$($name:ident = $op:expr),+ $(,)?
	}) => {
		$crate::__paste! {
			$(
				#[allow(dead_code)]
				$vis const [<OP_ $name:upper>]: u8 = $op;
			)+

			$(#[$meta])*
			$vis static $table: $crate::CommandTable<{ [$($op),+].len() }> =
				$crate::CommandTable::new([
					$(
						$crate::CommandEntry {
							op: $op,
							handler: [<cmd_ $name>],
						},
					)+
				]);
		}
	};
}
