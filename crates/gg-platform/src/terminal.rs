//! Line-oriented terminal input shared by the prompts and the CLI loop.

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line from stdin without blocking the runtime.
///
/// Returns `Ok(None)` at end of input. All readers go through the process
/// stdin buffer, so prompts and the command loop never steal each other's
/// input.
pub async fn read_line(prompt: String) -> io::Result<Option<String>> {
    tokio::task::spawn_blocking(move || {
        let mut stderr = io::stderr().lock();
        stderr.write_all(prompt.as_bytes())?;
        stderr.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    })
    .await
    .map_err(io::Error::other)?
}

/// Yes/no answer; anything that is not an explicit yes is a no.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_counts() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("later"));
        assert!(!is_yes("no"));
    }
}
