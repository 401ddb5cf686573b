mod args;
mod command_line;
mod contracts;
mod deploy;
mod migrate;

use std::env;

use anyhow::Result;
use command_line::CommandLine;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cmd = CommandLine::parse_from(env::args().skip(1));
    cmd.execute().await
}
