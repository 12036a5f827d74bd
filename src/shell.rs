//! Shell wrapper emission.
//!
//! The binary cannot change its parent shell's directory, so integration
//! works through a wrapper function: run `devjump`, and on a committed
//! selection (exit 0) `cd` to the path stored in the selection artifact.

use clap::ValueEnum;

/// Shells a wrapper function can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WrapperShell {
    Bash,
    Zsh,
}

/// Generate the `dj` wrapper function for the given shell.
///
/// The artifact path expression mirrors the sink's resolution rule:
/// `$DEVJUMP_STATE` when set, else `/tmp/.devjump_$USER`.
pub fn wrapper_script(shell: WrapperShell) -> String {
    // bash and zsh share the same POSIX-style function body.
    match shell {
        WrapperShell::Bash | WrapperShell::Zsh => r#"function dj() {
    \command devjump "$@"
    if [ $? -eq 0 ]; then
        \builtin cd -- "$(\command cat "${DEVJUMP_STATE:-/tmp/.devjump_${USER}}")"
    fi
}
"#
        .to_string(),
    }
}
