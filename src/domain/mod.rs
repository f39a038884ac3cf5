// Domain layer: commands, outcomes and output formats.

pub mod model;
