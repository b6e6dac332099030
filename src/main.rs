// SPDX-License-Identifier: MPL-2.0
use iced_marquee::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        assets_dir: args.opt_value_from_str("--assets").unwrap(),
        clip: args.opt_value_from_str("--clip").unwrap(),
        muted: args.contains("--muted"),
    };

    app::run(flags)
}
