use clap::Parser;
use std::path::PathBuf;
use vbconv_converter::ConvertOptions;

/// CLI arguments for the vbconv binary.
#[derive(Parser, Debug)]
#[command(
    name = "vbconv",
    version,
    about = "Convert serialized VB.NET translation units to C#"
)]
pub struct CliArgs {
    /// Serialized units (`.vbjson`) or directories searched recursively for them.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Root directory for converted files. Defaults to the directory of each input.
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Replace FROM with TO in each unit's recorded path before choosing its output location.
    #[arg(long = "replace-path", num_args = 2, value_names = ["FROM", "TO"])]
    pub replace_path: Option<Vec<String>>,

    /// Print converted code to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Number of worker threads. Defaults to one per core.
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Spaces per indentation level in the output.
    #[arg(long = "indent-width", default_value_t = 4)]
    pub indent_width: usize,

    /// Drop modifiers silently instead of leaving TODO comments.
    #[arg(long = "no-todo-comments")]
    pub no_todo_comments: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl CliArgs {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            indent_width: self.indent_width,
            emit_todo_comments: !self.no_todo_comments,
        }
    }

    /// `(from, to)` of `--replace-path`.
    pub fn path_replacement(&self) -> Option<(&str, &str)> {
        match self.replace_path.as_deref() {
            Some([from, to]) => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }
}
