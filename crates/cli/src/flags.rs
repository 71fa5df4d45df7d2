use clap::ValueEnum;
use thesaurus_graph::{InputFormat, OutputFormat};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum OutputFormatFlag {
    Xml,
    Turtle,
    N3,
    Nt,
    PrettyXml,
    Trix,
}

impl OutputFormatFlag {
    pub(crate) const fn as_domain(self) -> OutputFormat {
        match self {
            OutputFormatFlag::Xml => OutputFormat::Xml,
            OutputFormatFlag::Turtle => OutputFormat::Turtle,
            OutputFormatFlag::N3 => OutputFormat::N3,
            OutputFormatFlag::Nt => OutputFormat::Nt,
            OutputFormatFlag::PrettyXml => OutputFormat::PrettyXml,
            OutputFormatFlag::Trix => OutputFormat::Trix,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum InputFormatFlag {
    Xml,
    Turtle,
    Nt,
    N3,
    Nquads,
    Trig,
}

impl InputFormatFlag {
    pub(crate) const fn as_domain(self) -> InputFormat {
        match self {
            InputFormatFlag::Xml => InputFormat::Xml,
            InputFormatFlag::Turtle => InputFormat::Turtle,
            InputFormatFlag::Nt => InputFormat::Nt,
            InputFormatFlag::N3 => InputFormat::N3,
            InputFormatFlag::Nquads => InputFormat::Nquads,
            InputFormatFlag::Trig => InputFormat::Trig,
        }
    }
}

/// Where log records go and how many of them
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Verbosity {
    /// INFO to stderr
    #[default]
    Screen,
    /// INFO to the log file only
    File,
    /// INFO to stderr and the log file
    Both,
    /// Warnings and errors only
    #[value(name = "none")]
    Quiet,
    /// DEBUG to stderr and the log file
    Debug,
}

impl Verbosity {
    pub(crate) const fn writes_file(self) -> bool {
        matches!(self, Verbosity::File | Verbosity::Both | Verbosity::Debug)
    }

    pub(crate) const fn writes_screen(self) -> bool {
        !matches!(self, Verbosity::File)
    }
}
