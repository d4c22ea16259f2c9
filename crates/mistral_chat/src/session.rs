//! One question, one answer

use std::io::Write;

use tracing::debug;

use crate::config::{ChatConfig, BANNER, DEFAULT_QUESTION};
use crate::error::Result;
use crate::model::ChatClient;

/// Ask `question` (or the default question) and write the banner and answer to `out`.
///
/// `out` is untouched unless the call succeeds.
pub async fn run<W: Write>(
    config: ChatConfig,
    question: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let question = question.unwrap_or(DEFAULT_QUESTION);
    debug!("Using configuration: {:?}", config);

    let client = ChatClient::new(config);
    let request = client.build_request(question)?;
    let answer = client.complete(request).await?;

    writeln!(out, "{}\n", BANNER)?;
    writeln!(out, "{}", answer)?;
    out.flush()?;

    Ok(())
}
