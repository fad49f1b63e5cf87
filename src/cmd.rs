use crate::error::Error;
use crate::result::Result;
use std::path::Path;
use std::process::Command;

/// Result of a finished child process
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,

    /// Combined stdout followed by stderr
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a command line in a working directory and captures its output
pub trait CommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput>;
}

/// Spawns real child processes
pub struct SystemRunner {
    verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some((program, args)) = parts.split_first() else {
            return Err(Error::custom("empty command"));
        };

        if self.verbose {
            cliclack::log::info(format!("Executing: {} (in {})", command, cwd.display()))?;
        }

        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            code: output.status.code(),
            output: combined,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_success_requires_zero() {
        let ok = CommandOutput { code: Some(0), output: String::new() };
        let failed = CommandOutput { code: Some(2), output: String::new() };
        let killed = CommandOutput { code: None, output: String::new() };

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_system_runner_rejects_empty_command() {
        let tmp = TempDir::new().unwrap();
        let runner = SystemRunner::new(false);
        assert!(matches!(runner.run("   ", tmp.path()), Err(Error::Custom(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_combined_output() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("hello.txt"), "hello").unwrap();

        let runner = SystemRunner::new(false);
        let out = runner.run("cat hello.txt missing.txt", tmp.path()).unwrap();

        assert!(!out.success());
        assert!(out.output.starts_with("hello"));
        assert!(out.output.contains("missing.txt"));
    }
}
