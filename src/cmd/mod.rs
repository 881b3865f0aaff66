/*!
Command module for `slash-register`.

Layout:
  src/cmd/
    mod.rs          (this file)
    option.rs       (OptionType / CommandOption + `--option` parser)
    payload.rs      (CommandPayload + options file loading)
    register.rs     (RegisterArgs + prepare / execute_register)
    submit.rs       (HTTP PUT, dry run, outcome -> exit code)

Conventions:
  - Argument structs derive `clap::Args` and are flattened into `Cli`.
  - Glue code returns `anyhow::Result`; typed errors live next to their module.
*/

pub mod option;
pub mod payload;
pub mod register;
pub mod submit;

pub use register::{RegisterArgs, execute_register, prepare};
