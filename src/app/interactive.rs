//! Prompt loop reading one phone number per line.

use std::io::Write;

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::output::format_result;
use super::session::Session;
use super::statistics::print_error_statistics;
use crate::config::LookupOptionsArgs;
use crate::geocode::GeoResolver;
use crate::ip_location::IpLocator;
use crate::phone::PhoneMetadataProvider;

const PROMPT: &str = "Enter phone number (or 'quit'): ";

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Reads numbers from `input` until EOF or `quit`/`exit`, writing each result
/// or error to `out`. Blank lines are skipped.
///
/// Returns the number of lines looked up.
pub async fn run_interactive<R, W, P, G, I>(
    session: &mut Session<P, G, I>,
    args: &LookupOptionsArgs,
    input: R,
    out: &mut W,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    P: PhoneMetadataProvider,
    G: GeoResolver,
    I: IpLocator,
{
    let mut lines = input.lines();
    let mut attempted = 0;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            break;
        }

        attempted += 1;
        match session.track(line, args).await {
            Ok(tracked) => {
                writeln!(
                    out,
                    "{}\n",
                    format_result(&tracked.result, tracked.map_file.as_deref())
                )?;
            }
            Err(e) => writeln!(out, "Error: {}\n", e)?,
        }
    }

    info!("Interactive session ended after {} lookup(s)", attempted);
    print_error_statistics(session.stats());
    Ok(attempted)
}
