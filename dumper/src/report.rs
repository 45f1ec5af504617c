//! Report rendering for generated command text.

use colored::Colorize;
use dumper_commands::CommandSpec;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal colors, plain text).
pub trait Output {
    /// Render the label preceding the dump command block.
    fn dump_label(&mut self);

    /// Render the label preceding the restore command block.
    fn restore_label(&mut self);

    /// Render a generated command block.
    fn command(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn dump_label(&mut self) {
        println!("{}", "Dump:".green());
    }

    fn restore_label(&mut self) {
        println!("{}", "Restore:".red());
    }

    fn command(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Command text generated for one environment.
#[derive(Debug)]
pub struct DumpReport {
    /// Raw adapter string from configuration, for diagnostics.
    pub adapter: String,

    /// Rendered commands; `None` when the adapter was not recognized.
    pub commands: Option<CommandSpec>,
}

impl Report for DumpReport {
    fn render(&self, out: &mut dyn Output) {
        let Some(commands) = &self.commands else {
            out.warning(&format!(
                "no dump command for adapter '{}'",
                self.adapter
            ));
            return;
        };

        out.dump_label();
        out.newline();
        out.command(&commands.dump);

        if let Some(restore) = &commands.restore {
            out.newline();
            out.restore_label();
            out.newline();
            out.command(restore);
        }
    }
}

#[cfg(test)]
mod tests {
    use dumper_commands::CommandSpec;

    use super::{DumpReport, Output, Report};

    /// Records semantic rendering calls for assertions.
    #[derive(Default)]
    struct RecordingOutput {
        events: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn dump_label(&mut self) {
            self.events.push("dump_label".to_string());
        }

        fn restore_label(&mut self) {
            self.events.push("restore_label".to_string());
        }

        fn command(&mut self, text: &str) {
            self.events.push(format!("command: {text}"));
        }

        fn warning(&mut self, msg: &str) {
            self.events.push(format!("warning: {msg}"));
        }

        fn newline(&mut self) {}
    }

    #[test]
    fn test_render_without_restore_never_mentions_restore() {
        let report = DumpReport {
            adapter: "postgresql".to_string(),
            commands: Some(CommandSpec {
                dump: "pg_dump ...".to_string(),
                restore: None,
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.events, vec!["dump_label", "command: pg_dump ..."]);
    }

    #[test]
    fn test_render_with_restore() {
        let report = DumpReport {
            adapter: "postgresql".to_string(),
            commands: Some(CommandSpec {
                dump: "pg_dump ...".to_string(),
                restore: Some("pg_restore ...".to_string()),
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.events,
            vec![
                "dump_label",
                "command: pg_dump ...",
                "restore_label",
                "command: pg_restore ...",
            ]
        );
    }

    #[test]
    fn test_render_unknown_adapter_warns_and_emits_no_commands() {
        let report = DumpReport {
            adapter: "oracle".to_string(),
            commands: None,
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.events, vec!["warning: no dump command for adapter 'oracle'"]);
    }
}
