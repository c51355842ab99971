use clap::Parser;
use std::io::{self, Write};
use std::process;

use docker_image_info::errors::{Error, Result, ResultExt};
use docker_image_info::{execute, Args, Docker};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // `--help` and bad flags exit inside `parse`.
    let args = Args::parse();

    match try_main(&args) {
        Ok(()) => process::exit(0),
        Err(err) => {
            report(&err);
            process::exit(err.exit_code());
        }
    }
}

fn try_main(args: &Args) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .chain_err(|| "could not start the async runtime")?;
    let output = runtime.block_on(execute(args, Docker::connect))?;

    write_output(&output).chain_err(|| "could not write to standard output")
}

/// Emit the whole result with a single write.
fn write_output(output: &str) -> io::Result<()> {
    let mut buf = output.to_owned();
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(buf.as_bytes())?;
    handle.flush()
}

fn report(err: &Error) {
    eprint!("{}", err.describe());
}
