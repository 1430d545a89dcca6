use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use getdpd_api::ApiResponse;

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The body byte for byte
    Raw,
    /// The body re-indented as JSON
    Pretty,
}

/// Prints a response body. `Pretty` re-indents it as JSON; a body that is not
/// JSON is an error rather than silently printed raw.
pub fn print_response(response: &ApiResponse, format: &OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&render(response, format)?)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn render(response: &ApiResponse, format: &OutputFormat) -> Result<Vec<u8>> {
    Ok(match format {
        OutputFormat::Raw => response.bytes().to_vec(),
        OutputFormat::Pretty => serde_json::to_vec_pretty(&response.value()?)?,
    })
}
