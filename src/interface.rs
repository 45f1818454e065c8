//! The bus interface to a chain of MAX7219 devices. Every transfer is a single latch cycle: chip
//! select goes low, a sequence of 16-bit packets is shifted into the chain, and chip select going
//! high latches whatever packet each device holds at that moment.

/// A 16-bit MAX7219 packet: the register opcode, then its data byte.
pub type Packet = (u8, u8);

pub trait DisplayInterface {
    type Error;

    /// Shift `packets` into the chain in one uninterrupted latch cycle. The first packet shifted
    /// ends up in the device furthest from the host once chip select rises.
    fn write_packets<I>(&mut self, packets: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Packet>;
}

pub mod bitbang {
    //! Drives the bus by toggling three GPIO lines directly, the way the MAX7219's serial interface
    //! expects: data is sampled on the rising clock edge and chip select latches on its rising
    //! edge. No hardware SPI peripheral is required, so any three output pins will do.

    use embedded_hal::digital::v2::OutputPin;

    use super::{DisplayInterface, Packet};

    pub struct BitBangInterface<DATA, CLK, CS> {
        /// Serial data line (DIN on the first module of the chain).
        data: DATA,
        /// Serial clock line (CLK).
        clk: CLK,
        /// Chip select / load line (CS).
        cs: CS,
    }

    impl<DATA, CLK, CS, E> BitBangInterface<DATA, CLK, CS>
    where
        DATA: OutputPin<Error = E>,
        CLK: OutputPin<Error = E>,
        CS: OutputPin<Error = E>,
    {
        /// Create a new bit-banged interface from the data, clock and chip-select output pins.
        pub fn new(data: DATA, clk: CLK, cs: CS) -> Self {
            Self { data, clk, cs }
        }

        /// Give back the pins.
        pub fn release(self) -> (DATA, CLK, CS) {
            (self.data, self.clk, self.cs)
        }
    }

    /// Shift one byte out on `data`, most significant bit first, pulsing `clk` once per bit.
    pub fn shift_out<DATA, CLK, E>(data: &mut DATA, clk: &mut CLK, byte: u8) -> Result<(), E>
    where
        DATA: OutputPin<Error = E>,
        CLK: OutputPin<Error = E>,
    {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                data.set_high()?;
            } else {
                data.set_low()?;
            }
            clk.set_high()?;
            clk.set_low()?;
        }
        Ok(())
    }

    impl<DATA, CLK, CS, E> DisplayInterface for BitBangInterface<DATA, CLK, CS>
    where
        DATA: OutputPin<Error = E>,
        CLK: OutputPin<Error = E>,
        CS: OutputPin<Error = E>,
    {
        type Error = E;

        fn write_packets<I>(&mut self, packets: I) -> Result<(), E>
        where
            I: IntoIterator<Item = Packet>,
        {
            self.cs.set_low()?;
            self.clk.set_low()?;
            for (opcode, data) in packets {
                shift_out(&mut self.data, &mut self.clk, opcode)?;
                shift_out(&mut self.data, &mut self.clk, data)?;
            }
            self.cs.set_high()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::vec::Vec;

        #[derive(Clone, Copy, Debug, PartialEq)]
        enum Line {
            Data,
            Clk,
            Cs,
        }

        type Log = Rc<RefCell<Vec<(Line, bool)>>>;

        /// Mock GPIO pin appending every level change to a log shared by all three lines.
        struct MockPin {
            line: Line,
            log: Log,
            fail: bool,
        }

        impl OutputPin for MockPin {
            type Error = Line;

            fn set_high(&mut self) -> Result<(), Line> {
                if self.fail {
                    return Err(self.line);
                }
                self.log.borrow_mut().push((self.line, true));
                Ok(())
            }

            fn set_low(&mut self) -> Result<(), Line> {
                if self.fail {
                    return Err(self.line);
                }
                self.log.borrow_mut().push((self.line, false));
                Ok(())
            }
        }

        fn pins(log: &Log) -> (MockPin, MockPin, MockPin) {
            let pin = |line| MockPin {
                line,
                log: log.clone(),
                fail: false,
            };
            (pin(Line::Data), pin(Line::Clk), pin(Line::Cs))
        }

        /// Replay the log and collect the bytes the chain would have sampled on each rising clock
        /// edge while chip select was low.
        fn decode(log: &[(Line, bool)]) -> Vec<u8> {
            let mut data = false;
            let mut selected = false;
            let mut bits = 0u8;
            let mut byte = 0u8;
            let mut out = Vec::new();
            for &(line, level) in log {
                match line {
                    Line::Data => data = level,
                    Line::Cs => selected = !level,
                    Line::Clk if level => {
                        assert!(selected, "clock edge outside of a latch cycle");
                        byte = (byte << 1) | data as u8;
                        bits += 1;
                        if bits == 8 {
                            out.push(byte);
                            bits = 0;
                            byte = 0;
                        }
                    }
                    Line::Clk => {}
                }
            }
            assert_eq!(bits, 0, "partial byte shifted");
            out
        }

        #[test]
        fn shift_out_msb_first() {
            let log = Log::default();
            let (mut data, mut clk, _) = pins(&log);
            shift_out(&mut data, &mut clk, 0b1000_0001).unwrap();
            let levels: Vec<_> = log
                .borrow()
                .iter()
                .filter(|(line, _)| *line == Line::Data)
                .map(|(_, level)| *level)
                .collect();
            assert_eq!(
                levels,
                [true, false, false, false, false, false, false, true]
            );
            // Every bit is one high/low clock pulse.
            let clk_edges = log.borrow().iter().filter(|(l, _)| *l == Line::Clk).count();
            assert_eq!(clk_edges, 16);
        }

        #[test]
        fn latch_cycle_framing() {
            let log = Log::default();
            let (data, clk, cs) = pins(&log);
            let mut iface = BitBangInterface::new(data, clk, cs);
            iface.write_packets([(0x0B, 0x07), (0x0B, 0x07)].iter().cloned()).unwrap();

            let log = log.borrow();
            assert_eq!(log[0], (Line::Cs, false));
            assert_eq!(log[1], (Line::Clk, false));
            assert_eq!(*log.last().unwrap(), (Line::Cs, true));
            assert_eq!(log.iter().filter(|(l, _)| *l == Line::Cs).count(), 2);
            assert_eq!(decode(&log), [0x0B, 0x07, 0x0B, 0x07]);
        }

        #[test]
        fn empty_cycle_still_latches() {
            let log = Log::default();
            let (data, clk, cs) = pins(&log);
            let mut iface = BitBangInterface::new(data, clk, cs);
            iface.write_packets(core::iter::empty()).unwrap();
            assert_eq!(
                *log.borrow(),
                [(Line::Cs, false), (Line::Clk, false), (Line::Cs, true)]
            );
        }

        #[test]
        fn pin_error_propagates() {
            let log = Log::default();
            let (mut data, clk, cs) = pins(&log);
            data.fail = true;
            let mut iface = BitBangInterface::new(data, clk, cs);
            assert_eq!(iface.write_packets([(0x0A, 0x01)].iter().cloned()), Err(Line::Data));
            let (data, _, _) = iface.release();
            assert!(data.fail);
        }
    }
}
