use serde::{Deserialize, Serialize};
use std::fmt;

/// Shell used by [`Command::shell`]
pub const SHELL: &str = "/bin/bash";

/// External program invocation, argv style
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Command(Vec<String>);

impl Command {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Command(argv.into_iter().map(Into::into).collect())
    }

    /// Run `cmd` through the shell, e.g. `Command::shell("mpc next")`
    pub fn shell(cmd: &str) -> Self {
        Command::new([SHELL, "-c", cmd])
    }

    pub fn argv(&self) -> &[String] {
        &self.0
    }

    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self
            .0
            .iter()
            .map(|arg| {
                if arg.is_empty() || arg.contains(char::is_whitespace) {
                    format!("{:?}", arg)
                } else {
                    arg.clone()
                }
            })
            .collect();
        write!(f, "{}", quoted.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command() {
        let cmd = Command::shell("pamixer -i 5");
        assert_eq!(cmd.argv(), ["/bin/bash", "-c", "pamixer -i 5"]);
        assert_eq!(cmd.program(), Some("/bin/bash"));
        assert_eq!(cmd.to_string(), r#"/bin/bash -c "pamixer -i 5""#);
    }

    #[test]
    fn test_empty_command() {
        let cmd = Command::new(Vec::<String>::new());
        assert!(cmd.is_empty());
        assert_eq!(cmd.program(), None);
    }
}
