mod command;
mod lesson;
mod sample;
mod tui;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    command::run()
}
