//! Style compilation
//!
//! The CSS toolchain is an opaque collaborator behind the [`StyleCompiler`]
//! trait so the pipeline can be tested without invoking a real subprocess.
//! The production implementation shells out to the Tailwind standalone CLI.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{BuildError, BuildResult};

/// Abstract CSS compiler interface.
///
/// Implementations read `input` and write a minified stylesheet to
/// `output`, creating the file if necessary.
pub trait StyleCompiler {
    /// Human-readable tool name for progress/error messages.
    fn name(&self) -> &'static str;

    /// Compile `input` into a minified stylesheet at `output`.
    fn compile(&self, input: &Path, output: &Path) -> BuildResult<()>;
}

/// Compiles CSS by invoking the `tailwindcss` standalone binary.
///
/// Equivalent command line: `tailwindcss -i <input> -o <output> --minify`.
pub struct TailwindCli {
    program: String,
}

impl TailwindCli {
    pub fn new() -> Self {
        Self {
            program: "tailwindcss".to_string(),
        }
    }

    /// Use a different program name or path for the Tailwind binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the Tailwind binary is installed and runnable.
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--help")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Default for TailwindCli {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCompiler for TailwindCli {
    fn name(&self) -> &'static str {
        "tailwindcss"
    }

    fn compile(&self, input: &Path, output: &Path) -> BuildResult<()> {
        let status = Command::new(&self.program)
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg("--minify")
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BuildError::StyleCompiler {
                message: format!("failed to launch '{}': {}", self.program, e),
            })?;

        if !status.success() {
            return Err(BuildError::StyleCompiler {
                message: format!(
                    "'{}' exited with code: {:?}",
                    self.program,
                    status.code()
                ),
            });
        }

        Ok(())
    }
}
