//! Pin assignments for the supported row controller board variants.
//!
//! Each chip variant routes the bus and indicator lines to different pins.
//! The variant is fixed at build time through mutually exclusive cargo
//! features (`attiny85` is the default; pass `--no-default-features
//! --features attiny84` for the alternate board), so pin selection costs no
//! run-time branch. This crate only declares the assignments; bus and LED
//! driving live in the surrounding firmware.

#[cfg(all(feature = "attiny84", feature = "attiny85"))]
compile_error!(
	"chip variant features `attiny84` and `attiny85` are mutually exclusive; \
	 enable exactly one (use --no-default-features to drop the default)"
);

#[cfg(not(any(feature = "attiny84", feature = "attiny85")))]
compile_error!("no chip variant selected; enable feature `attiny84` or `attiny85`");

/// Pin numbers for one board variant, in Arduino-core numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
	/// I2C data line (USI).
	pub i2c_sda: u8,
	/// I2C clock line (USI).
	pub i2c_scl: u8,
	/// Status LED.
	pub led: u8,
}

impl PinMap {
	/// ATtiny84 routing: SDA on PA6, SCL on PA4.
	pub const ATTINY84: PinMap = PinMap {
		i2c_sda: 6,
		i2c_scl: 4,
		led: 3,
	};

	/// ATtiny85 routing: SDA on PB0, SCL on PB2. PB5 is reset, so the LED
	/// stays on PB3.
	pub const ATTINY85: PinMap = PinMap {
		i2c_sda: 0,
		i2c_scl: 2,
		led: 3,
	};

	/// Pin map for the variant selected at build time.
	#[cfg(all(feature = "attiny84", not(feature = "attiny85")))]
	pub const ACTIVE: PinMap = PinMap::ATTINY84;

	/// Pin map for the variant selected at build time.
	#[cfg(all(feature = "attiny85", not(feature = "attiny84")))]
	pub const ACTIVE: PinMap = PinMap::ATTINY85;
}
