//! CLI Command Handlers
//!
//! Each handler takes CLI args and Output, returns ExitCode.

use crate::api::{DictionaryClient, DictionaryError};
use crate::cli::{DefineCmd, ExitCode, Output};

pub async fn define_cmd(cmd: DefineCmd, output: &Output) -> ExitCode {
    if cmd.word.trim().is_empty() {
        return output.error("Please enter a word", ExitCode::InvalidArgs);
    }

    let client = DictionaryClient::new();
    output.info(format!("Looking up: {}", cmd.word));

    match client.lookup(cmd.word.trim()).await {
        Ok(mut entry) => {
            entry.meanings.truncate(cmd.limit);

            if output.json {
                if let Err(e) = output.print(&entry) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.print_text(&entry);
                for meaning in &entry.meanings {
                    output.print_text(format!("  {}", meaning));
                    if let Some(example) = &meaning.example {
                        output.print_text(format!("    “{}”", example));
                    }
                }
                if let Some(url) = &entry.audio_url {
                    output.print_text(format!("  audio: {}", url));
                }
            }
            ExitCode::Success
        }
        Err(DictionaryError::NotFound) => output.error("Word not found", ExitCode::NotFound),
        Err(e @ DictionaryError::RequestFailed(_)) => {
            output.error(format!("Lookup failed: {}", e), ExitCode::NetworkError)
        }
        Err(e) => output.error(format!("Lookup failed: {}", e), ExitCode::Error),
    }
}
