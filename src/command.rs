//! The command set for the MAX7219.
//!
//! Every command is a single 16-bit packet: a register opcode followed by one data byte. Devices
//! in a chain forward the previous packet out of DOUT as a new one is shifted in, so a packet
//! reaches the n-th device only after n-1 further packets have been shifted behind it. A command
//! meant for every device is therefore repeated once per device within a single latch cycle.

use core::iter;

use crate::error::Error;
use crate::interface::{DisplayInterface, Packet};

pub mod consts {
    //! Limits of the MAX7219 and of this driver.

    /// Rows (digit registers) per device.
    pub const NUM_ROWS: u8 = 8;
    /// Pixel columns per device.
    pub const NUM_COLS: u8 = 8;
    /// Most devices the frame buffer can hold.
    pub const MAX_DEVICES: u8 = 8;
    /// Bytes in a full frame buffer.
    pub const MAX_FRAME_BYTES: usize = NUM_ROWS as usize * MAX_DEVICES as usize;
    /// Highest intensity register value.
    pub const MAX_INTENSITY: u8 = 0x0F;
    /// Lowest brightness the animations use.
    pub const MIN_BRIGHTNESS: u8 = 1;
    pub const ROW_MAX: u8 = NUM_ROWS - 1;
}

/// Register addresses as listed in the datasheet.
pub mod opcode {
    pub const NOOP: u8 = 0x00;
    pub const DIGIT0: u8 = 0x01;
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;
}

use self::consts::*;

/// Setting of the BCD "Code B" decoder per digit. Dot matrices need `NoDecode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// Every digit register drives its eight segment lines directly.
    NoDecode,
    /// Code B decode for digit 0 only.
    CodeBDigit0,
    /// Code B decode for digits 0-3.
    CodeBDigits3To0,
    /// Code B decode for all digits.
    CodeBDigits7To0,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// No operation. Shifted into devices which should keep their registers unchanged.
    NoOp,
    /// Write the pattern for one row (digit register). Row range is 0-7.
    WriteRow(u8, u8),
    /// Set the decode mode. See enum for details.
    SetDecodeMode(DecodeMode),
    /// Set the LED intensity. Range 0 (minimum, not off) to 15.
    SetIntensity(u8),
    /// Set the index of the last scanned row. Range 0-7; 7 scans all eight rows.
    SetScanLimit(u8),
    /// Control shutdown mode. In shutdown the LEDs are off but registers keep their contents.
    SetShutdown(bool),
    /// Control display test mode, which lights every LED at full intensity.
    SetDisplayTest(bool),
}

impl Command {
    /// Encode this command as a `(opcode, data)` packet, rejecting arguments outside the register
    /// range.
    pub fn packet(self) -> Result<Packet, ()> {
        match self {
            Command::NoOp => Ok((opcode::NOOP, 0x00)),
            Command::WriteRow(row, pattern) => match row {
                0..=ROW_MAX => Ok((opcode::DIGIT0 + row, pattern)),
                _ => Err(()),
            },
            Command::SetDecodeMode(mode) => Ok((
                opcode::DECODE_MODE,
                match mode {
                    DecodeMode::NoDecode => 0x00,
                    DecodeMode::CodeBDigit0 => 0x01,
                    DecodeMode::CodeBDigits3To0 => 0x0F,
                    DecodeMode::CodeBDigits7To0 => 0xFF,
                },
            )),
            Command::SetIntensity(level) => match level {
                0..=MAX_INTENSITY => Ok((opcode::INTENSITY, level)),
                _ => Err(()),
            },
            Command::SetScanLimit(limit) => match limit {
                0..=ROW_MAX => Ok((opcode::SCAN_LIMIT, limit)),
                _ => Err(()),
            },
            // The register holds 0 for shutdown and 1 for normal operation.
            Command::SetShutdown(ena) => Ok((opcode::SHUTDOWN, !ena as u8)),
            Command::SetDisplayTest(ena) => Ok((opcode::DISPLAY_TEST, ena as u8)),
        }
    }

    /// Send this command to every one of the `devices` chained devices in one latch cycle.
    pub fn broadcast<DI>(self, iface: &mut DI, devices: u8) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let packet = self.packet().map_err(|_| Error::InvalidCommand)?;
        iface
            .write_packets(iter::repeat(packet).take(devices as usize))
            .map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn write_row() {
        assert_eq!(Command::WriteRow(0, 0xAA).packet(), Ok((0x01, 0xAA)));
        assert_eq!(Command::WriteRow(7, 0x55).packet(), Ok((0x08, 0x55)));
        assert_eq!(Command::WriteRow(8, 0x55).packet(), Err(()));
    }

    #[test]
    fn set_decode_mode() {
        assert_eq!(
            Command::SetDecodeMode(DecodeMode::NoDecode).packet(),
            Ok((0x09, 0x00))
        );
        assert_eq!(
            Command::SetDecodeMode(DecodeMode::CodeBDigit0).packet(),
            Ok((0x09, 0x01))
        );
        assert_eq!(
            Command::SetDecodeMode(DecodeMode::CodeBDigits3To0).packet(),
            Ok((0x09, 0x0F))
        );
        assert_eq!(
            Command::SetDecodeMode(DecodeMode::CodeBDigits7To0).packet(),
            Ok((0x09, 0xFF))
        );
    }

    #[test]
    fn set_intensity() {
        assert_eq!(Command::SetIntensity(0).packet(), Ok((0x0A, 0)));
        assert_eq!(Command::SetIntensity(15).packet(), Ok((0x0A, 15)));
        assert_eq!(Command::SetIntensity(16).packet(), Err(()));
    }

    #[test]
    fn set_scan_limit() {
        assert_eq!(Command::SetScanLimit(7).packet(), Ok((0x0B, 7)));
        assert_eq!(Command::SetScanLimit(8).packet(), Err(()));
    }

    #[test]
    fn shutdown_and_test() {
        assert_eq!(Command::SetShutdown(true).packet(), Ok((0x0C, 0)));
        assert_eq!(Command::SetShutdown(false).packet(), Ok((0x0C, 1)));
        assert_eq!(Command::SetDisplayTest(true).packet(), Ok((0x0F, 1)));
        assert_eq!(Command::SetDisplayTest(false).packet(), Ok((0x0F, 0)));
        assert_eq!(Command::NoOp.packet(), Ok((0x00, 0)));
    }

    #[test]
    fn broadcast_repeats_per_device() {
        let di = TestSpyInterface::new();
        let mut iface = di.split();
        Command::SetIntensity(9).broadcast(&mut iface, 4).unwrap();
        di.check_multi(&[&[(0x0A, 9), (0x0A, 9), (0x0A, 9), (0x0A, 9)]]);
    }

    #[test]
    fn broadcast_single_device() {
        let di = TestSpyInterface::new();
        let mut iface = di.split();
        Command::SetShutdown(false).broadcast(&mut iface, 1).unwrap();
        di.check_multi(&[&[(0x0C, 1)]]);
    }

    #[test]
    fn broadcast_rejects_before_sending() {
        let di = TestSpyInterface::new();
        let mut iface = di.split();
        assert_eq!(
            Command::SetIntensity(16).broadcast(&mut iface, 2),
            Err(Error::InvalidCommand)
        );
        assert!(di.cycles().is_empty());
    }

    #[test]
    fn broadcast_interface_error() {
        let di = TestSpyInterface::new();
        let mut iface = di.split();
        iface.set_failing(true);
        assert_eq!(
            Command::NoOp.broadcast(&mut iface, 2),
            Err(Error::Interface(()))
        );
    }
}
