//! Error type shared by the command, configuration and display layers.

/// Errors returned by the driver. `E` is the error type of the bus interface, which for the
/// bit-banged interface is the error type of the GPIO pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A command argument was outside the range accepted by the MAX7219 register it targets.
    InvalidCommand,
    /// The bus interface failed to drive one of its lines.
    Interface(E),
}
