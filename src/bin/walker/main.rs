use anyhow::{Context, Error};
use getopts::Options;
use log::*;
use logosaurus::{self, Logger, L_LEVEL, L_TIME};
use std::env;
use std::process;
use walker::{Walker, WalkerConfig};

fn main() {
    let args = env::args().collect::<Vec<String>>();

    let mut opts = Options::new();
    opts.optflag("v", "verbose", "log each request and response");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprint!("{}\n\n", e);
            print_help(&args[0], &opts);
            process::exit(2);
        }
    };
    if matches.opt_present("h") {
        print_help(&args[0], &opts);
        return;
    }
    if matches.free.len() != 3 {
        print_help(&args[0], &opts);
        process::exit(2);
    }

    let level = if matches.opt_present("v") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = Logger::builder(std::io::stderr())
        .set_prefix("walker: ")
        .set_flags(L_LEVEL | L_TIME)
        .set_level(level)
        .build();
    logosaurus::init(logger).unwrap();

    let cfg = WalkerConfig::new(&matches.free[0], &matches.free[1], &matches.free[2]);
    if let Err(e) = run(cfg) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cfg: WalkerConfig) -> Result<(), Error> {
    let step = cfg.step.clone();
    let rsp = Walker::new(cfg).run().context("set step count")?;
    info!("{} steps: {} ({})", step, rsp.message, rsp.code);
    Ok(())
}

fn print_help(prog: &str, opts: &Options) {
    let brief = format!("usage: {} [-v] <USER> <PASSWORD> <STEP>", prog);
    eprint!("{}\n", opts.usage(&brief));
    eprint!("USER is a phone number (sent with the +86 prefix) or an email address.\n");
}
