//! End-to-end dispatch behavior over a declaratively built command table.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use hexrow_dispatch::{CommandContext, CommandEntry, CommandTable, DispatchError, command_table};
use pretty_assertions::assert_eq;

/// What a recording handler saw, captured for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Observed {
	op: u8,
	len: u8,
	payload: Vec<u8>,
}

static PING_SEEN: Mutex<Vec<Observed>> = Mutex::new(Vec::new());
static LED_SEEN: Mutex<Vec<Observed>> = Mutex::new(Vec::new());

fn record(sink: &Mutex<Vec<Observed>>, ctx: &CommandContext) {
	sink.lock().unwrap().push(Observed {
		op: ctx.op,
		len: ctx.len,
		payload: ctx.payload.to_vec(),
	});
}

fn cmd_ping(ctx: &CommandContext) {
	record(&PING_SEEN, ctx);
}

fn cmd_set_led(ctx: &CommandContext) {
	record(&LED_SEEN, ctx);
}

fn cmd_reset(_ctx: &CommandContext) {}

command_table! {
	static COMMANDS = {
		ping = 0x01,
		set_led = 0x10,
		reset = 0x7F,
	}
}

#[test]
fn test_registered_opcode_routes_to_its_own_handler() {
	let payload = [0x42];
	let ctx = CommandContext::new(OP_SET_LED, 1, &payload).unwrap();
	let led_before = LED_SEEN.lock().unwrap().len();
	let ping_before = PING_SEEN.lock().unwrap().len();

	COMMANDS.dispatch(&ctx).unwrap();

	let led = LED_SEEN.lock().unwrap();
	assert_eq!(led.len(), led_before + 1);
	assert_eq!(
		led[led_before],
		Observed { op: 0x10, len: 1, payload: vec![0x42] }
	);
	// The ping handler was not invoked on the side.
	assert_eq!(PING_SEEN.lock().unwrap().len(), ping_before);
}

#[test]
fn test_handler_observes_zero_length_payload() {
	let ctx = CommandContext::new(OP_PING, 0, &[]).unwrap();
	let before = PING_SEEN.lock().unwrap().len();

	COMMANDS.dispatch(&ctx).unwrap();

	let ping = PING_SEEN.lock().unwrap();
	assert_eq!(ping.len(), before + 1);
	assert_eq!(ping[before].len, 0);
	assert!(ping[before].payload.is_empty());
}

#[test]
fn test_unknown_opcode_reported_and_payload_untouched() {
	let payload = [0xAA, 0xBB, 0xCC];
	let ctx = CommandContext::new(0xFF, 3, &payload).unwrap();

	assert_eq!(COMMANDS.dispatch(&ctx), Err(DispatchError::UnknownOpcode(0xFF)));
	assert_eq!(payload, [0xAA, 0xBB, 0xCC]);
}

#[test]
fn test_dispatch_is_idempotent_across_identical_contexts() {
	static CALLS: AtomicUsize = AtomicUsize::new(0);
	static SEEN: Mutex<Vec<Observed>> = Mutex::new(Vec::new());
	fn cmd_probe(ctx: &CommandContext) {
		CALLS.fetch_add(1, Ordering::SeqCst);
		record(&SEEN, ctx);
	}

	command_table! {
		static TABLE = {
			probe = 0x21,
		}
	}

	let payload = [0x0F, 0xF0];
	let first = CommandContext::new(OP_PROBE, 2, &payload).unwrap();
	let second = CommandContext::new(OP_PROBE, 2, &payload).unwrap();

	TABLE.dispatch(&first).unwrap();
	TABLE.dispatch(&second).unwrap();

	assert_eq!(CALLS.load(Ordering::SeqCst), 2);
	let seen = SEEN.lock().unwrap();
	assert_eq!(seen[0], seen[1]);
	assert_eq!(seen[0].payload, vec![0x0F, 0xF0]);
}

#[test]
fn test_frame_decode_feeds_dispatch() {
	let frame = [0x10, 0x80];
	let ctx = CommandContext::from_frame(&frame).unwrap();
	let before = LED_SEEN.lock().unwrap().len();

	COMMANDS.dispatch(&ctx).unwrap();

	let led = LED_SEEN.lock().unwrap();
	assert_eq!(led[before].payload, vec![0x80]);
}

// Extending the command set is one new row plus one new handler; existing
// entries and the lookup logic are untouched.
#[test]
fn test_adding_a_command_leaves_existing_routing_intact() {
	fn cmd_ident(_ctx: &CommandContext) {}

	command_table! {
		static EXTENDED = {
			ping = 0x01,
			set_led = 0x10,
			reset = 0x7F,
			ident = 0x02,
		}
	}

	assert_eq!(EXTENDED.len(), COMMANDS.len() + 1);
	for entry in COMMANDS.entries() {
		assert!(EXTENDED.lookup(entry.op).is_some());
	}
	assert!(EXTENDED.lookup(OP_IDENT).is_some());
}

#[test]
fn test_runtime_construction_rejects_duplicates_before_dispatch() {
	fn nop(_ctx: &CommandContext) {}

	let result = CommandTable::try_new([
		CommandEntry { op: 0x01, handler: nop },
		CommandEntry { op: 0x01, handler: nop },
	]);
	assert!(result.is_err());
}
