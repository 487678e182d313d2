//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FitshiftError;

const BIN: &str = "fitshift";

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, FitshiftError> {
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), BIN, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| FitshiftError::Config(format!("Completion script is not UTF-8: {e}")))
}

/// How to install the completion script for `shell`.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => format!(
            "# Add to ~/.bashrc:\nsource <({BIN} completions bash)\n\n\
             # Or save to a file:\n{BIN} completions bash > ~/.local/share/bash-completion/completions/{BIN}\n"
        ),
        Shell::Zsh => format!(
            "# Save to a directory on your fpath:\n{BIN} completions zsh > ~/.zsh/completions/_{BIN}\n\n\
             # Then in ~/.zshrc (before compinit):\nfpath=(~/.zsh/completions $fpath)\n"
        ),
        Shell::Fish => format!(
            "# Save to the fish completions directory:\n{BIN} completions fish > ~/.config/fish/completions/{BIN}.fish\n"
        ),
        Shell::PowerShell => format!(
            "# Add to your PowerShell profile ($PROFILE):\n{BIN} completions powershell | Out-String | Invoke-Expression\n"
        ),
        Shell::Elvish => format!(
            "# Save to the elvish lib directory:\n{BIN} completions elvish > ~/.elvish/lib/{BIN}.elv\n\n\
             # Then in ~/.elvish/rc.elv:\nuse {BIN}\n"
        ),
        _ => format!("# Run `{BIN} completions <shell>` and load the output in your shell\n"),
    }
}
