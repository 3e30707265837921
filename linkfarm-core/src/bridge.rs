//! The bridge: stdin path list → link directory → new working location.
//!
//! Strictly sequential: read, tokenize, build, switch. Any abort either
//! did nothing or cleaned up what it built.

use std::path::PathBuf;

use tokio::io::AsyncRead;

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::reader;
use crate::session::{Session, SessionHost};
use crate::switch;
use crate::tokenizer;
use crate::view::{self, Manifest, SyntheticDirectory};

/// Result of a bridge run that did not abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// Nothing was piped in. No directory was created.
    Empty,
    /// The session now lives in `report.dir`.
    Linked(BridgeReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeReport {
    pub dir: PathBuf,
    pub bytes_read: usize,
    pub manifest: Manifest,
}

/// Run the whole bridge against `source`.
///
/// Relative records resolve against `session.current_path` as it was on
/// entry. `restore_last_path` is cleared whatever the result.
pub async fn run<R, H>(
    source: &mut R,
    session: &mut Session,
    host: &mut H,
    config: &BridgeConfig,
) -> Result<BridgeOutcome, BridgeError>
where
    R: AsyncRead + Unpin,
    H: SessionHost + ?Sized,
{
    session.restore_last_path = false;
    config.validate()?;

    let base = session.current_path.clone();
    let buf = reader::read_bounded(source, &config.read_limits()).await?;
    if buf.is_empty() {
        tracing::info!("no paths on input, staying in {}", base.display());
        return Ok(BridgeOutcome::Empty);
    }

    let dir = SyntheticDirectory::create(&config.resolved_temp_root(), &config.program_tag)?;
    let manifest = view::build(&dir, &buf, tokenizer::records(&buf), &base);
    let bytes_read = buf.len();
    drop(buf);

    let dir = switch::enter(session, host, dir)?;

    Ok(BridgeOutcome::Linked(BridgeReport {
        dir,
        bytes_read,
        manifest,
    }))
}
