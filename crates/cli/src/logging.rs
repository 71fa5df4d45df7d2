use crate::flags::Verbosity;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Copies every log record to stderr and the log file
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

pub(crate) fn init(verbosity: Verbosity, log_file: &Path) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match verbosity {
        Verbosity::Quiet => {
            builder.filter_level(log::LevelFilter::Warn);
        }
        Verbosity::Debug => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        Verbosity::Screen | Verbosity::File | Verbosity::Both => {}
    }

    let target = if verbosity.writes_file() {
        let file = open_log(log_file)?;
        if verbosity.writes_screen() {
            env_logger::Target::Pipe(Box::new(Tee { file }))
        } else {
            env_logger::Target::Pipe(Box::new(file))
        }
    } else {
        env_logger::Target::Stderr
    };

    builder.target(target).try_init().context("Logger already initialized")?;
    Ok(())
}
