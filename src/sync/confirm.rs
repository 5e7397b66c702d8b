use anyhow::{Context, Result};
use std::io::{self, Write};

/// Yes/no gate in front of every destructive action. The reconciler only
/// sees this trait, so it runs unchanged under tests and `--force`.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// `-f` / `--force`: every prompt is answered yes without asking.
pub struct AlwaysYes;

impl Confirm for AlwaysYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Interactive prompt. Only a literal `Y` confirms; anything else declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{prompt} [Y/n] ");
        io::stdout().flush().context("failed to flush stdout")?;
        let mut answer = String::new();
        io::stdin()
            .read_line(&mut answer)
            .context("failed to read confirmation")?;
        Ok(answer.trim() == "Y")
    }
}

#[cfg(test)]
mod tests {
    use super::{AlwaysYes, Confirm};

    #[test]
    fn forced_mode_confirms_everything() {
        let mut confirm = AlwaysYes;
        assert!(confirm.confirm("REMOVE /data/ks1/cf1-id1?").expect("confirm"));
    }
}
