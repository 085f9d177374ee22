//! Opcode-to-handler command dispatch for row controller nodes.
//!
//! A row controller receives short binary command packets (one opcode byte
//! followed by a length-prefixed payload) over a bus and routes each packet to
//! the handler bound to its opcode. This crate is the routing core only: it
//! defines the decoded [`CommandContext`], the immutable [`CommandTable`]
//! mapping opcodes to handlers, and the dispatch entry point. Bus framing,
//! pin configuration, and handler behavior live outside this crate.
//!
//! The dispatch path performs no allocation and no copying: the payload stays
//! borrowed from the transport's receive buffer for the duration of the call.
//!
//! # Declaring commands
//!
//! The [`command_table!`] macro is the single source of truth for the command
//! set. Each row names a command and its opcode; the handler is bound by name
//! (`cmd_<name>`), so declaring a command without defining its handler fails
//! to compile:
//!
//! ```
//! use hexrow_dispatch::{CommandContext, command_table};
//!
//! fn cmd_ping(_ctx: &CommandContext) {}
//! fn cmd_set_led(ctx: &CommandContext) {
//! 	let _brightness = ctx.payload.first();
//! }
//!
//! command_table! {
//! 	pub static COMMANDS = {
//! 		ping = 0x01,
//! 		set_led = 0x10,
//! 	}
//! }
//!
//! let frame = [0x10, 0x7F];
//! let ctx = CommandContext::from_frame(&frame).unwrap();
//! COMMANDS.dispatch(&ctx).unwrap();
//! ```

mod context;
mod error;
mod macros;
mod table;

pub use context::CommandContext;
pub use error::{DispatchError, RegistryError};
pub use table::{CommandEntry, CommandTable, Handler};

// Re-exported for use inside `command_table!` expansions.
#[doc(hidden)]
pub use paste::paste as __paste;
