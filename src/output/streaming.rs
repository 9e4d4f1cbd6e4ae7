//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as `TreeRenderer` produces it.

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeOutput, connector};

use super::config::OutputConfig;

/// Streaming output formatter - outputs directly to the writer without buffering.
/// Implements the TreeOutput trait for use with TreeRenderer.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = config.color_choice();
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        if self.config.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", name)?;
            self.out.reset()?;
            writeln!(self.out)
        } else {
            writeln!(self.out, "{}", name)
        }
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_dir_name(name)
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.write_dir_name(name)
        } else {
            writeln!(self.out, "{}", name)
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
