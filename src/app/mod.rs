// Application layer: wires settings, adapters and the service together for the CLI.

pub mod commands;
