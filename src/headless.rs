//! Non-interactive listing: one activation, print the matching names, exit.

use std::io::Write;

use anyhow::{bail, Context, Result};

use crate::catalog::CatalogSource;
use crate::session::SearchSession;
use crate::view_model::ViewModel;

/// Fetch the catalog, apply `query`, write one display name per line.
///
/// Fails with the short fetch error message when the catalog cannot be
/// loaded. Returns the number of lines written.
pub async fn run_list<S, W>(
    session: &mut SearchSession<S>,
    query: Option<&str>,
    out: &mut W,
) -> Result<usize>
where
    S: CatalogSource,
    W: Write,
{
    if let Some(term) = query {
        session.set_search_term(term);
    }
    session.activate();
    session.resolve().await;

    let written = match session.view_model() {
        ViewModel::Ready { items } => {
            for record in items {
                writeln!(out, "{}", record.display_name).context("Failed to write listing")?;
            }
            items.len()
        }
        ViewModel::Error { message } => bail!("{}", message),
        other => bail!("catalog not loaded ({})", other.kind()),
    };

    out.flush().context("Failed to flush listing")?;
    session.teardown();
    Ok(written)
}
