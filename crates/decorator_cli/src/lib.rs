/// Arguments for the `decorate` binary.
pub mod args;

/// Main logic of the `decorate` binary.
pub mod binary_logic;
