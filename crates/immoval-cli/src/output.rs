use console::{style, StyledObject};
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn success(&self, message: impl Display) {
        self.status_line("success", style("✓").green().bold(), message, false);
    }

    pub fn info(&self, message: impl Display) {
        self.status_line("info", style("ℹ").blue().bold(), message, false);
    }

    /// Warnings and errors go to stderr so stdout stays parseable.
    pub fn warning(&self, message: impl Display) {
        self.status_line("warning", style("⚠").yellow().bold(), message, true);
    }

    pub fn error(&self, message: impl Display) {
        self.status_line("error", style("✗").red().bold(), message, true);
    }

    fn status_line(
        &self,
        status: &str,
        symbol: StyledObject<&str>,
        message: impl Display,
        to_stderr: bool,
    ) {
        let line = match self.format {
            OutputFormat::Human => format!("{} {}", symbol, message),
            OutputFormat::Json => {
                let body = serde_json::json!({
                    "status": status,
                    "message": message.to_string(),
                });
                serde_json::to_string_pretty(&body).unwrap()
            }
        };
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>)
    where
        T: Serialize,
    {
        match self.format {
            OutputFormat::Human => {
                if data.is_empty() {
                    println!("{}", style("(no data)").dim());
                } else {
                    let mut table = Table::new(&data);
                    table.with(Style::rounded());
                    println!("{}", table);
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "data": data })).unwrap()
                );
            }
        }
    }

    pub fn result<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}
