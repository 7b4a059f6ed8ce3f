use super::setup::OutputMode;
use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::commands::CmdResult;
use phonebook::error::Result;
use phonebook::model::Record;
use std::io::Write;

pub(super) struct Renderer {
    pub mode: OutputMode,
    pub color: bool,
}

impl Renderer {
    pub fn new(mode: OutputMode, color: bool) -> Self {
        Self { mode, color }
    }

    /// Records first, then messages, each on its own line.
    pub fn render<W: Write>(&self, out: &mut W, result: &CmdResult) -> Result<()> {
        for record in &result.listed_records {
            self.render_record(out, record)?;
        }
        for message in &result.messages {
            writeln!(out, "{}", self.paint(message))?;
        }
        Ok(())
    }

    fn render_record<W: Write>(&self, out: &mut W, record: &Record) -> Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(out, "{}", record)?,
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn paint(&self, message: &CmdMessage) -> String {
        if !self.color {
            return message.content.clone();
        }
        match message.level {
            MessageLevel::Info => message.content.normal().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        }
    }
}
