// SPDX-License-Identifier: MPL-2.0
use fluid_nav::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        no_effects: args.contains("--no-effects"),
        scale: args.opt_value_from_str("--scale").unwrap(),
    };

    app::run(flags)
}
