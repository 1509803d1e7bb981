#![forbid(unsafe_code)]

use clap::Parser;
use resistorr::config::Cli;
use resistorr::simulator::Simulator;

fn main() -> Result<(), resistorr::Error> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let simulator = Simulator::new(&cli);
    resistorr::mainloop(simulator, cli.scale)
}
