pub mod catalog;
pub mod labels;
pub mod reload;
pub mod simulate;
pub mod tag;

use anyhow::{Context, Result};
use nametags_engine::Composition;
use nametags_runtime::{NameTags, SessionFile, SimulatedServer};
use nametags_types::PlayerRef;
use rand::rngs::StdRng;
use std::path::Path;

/// A session file brought up on a simulated server with the plugin enabled
/// and every listed player joined.
pub(crate) struct LoadedSession {
    pub session: SessionFile,
    pub server: SimulatedServer,
    pub plugin: NameTags,
    pub joined: Vec<(PlayerRef, Option<Composition>)>,
}

pub(crate) fn load_session(
    config_path: &Path,
    session_path: &Path,
    rng: StdRng,
) -> Result<LoadedSession> {
    let session = SessionFile::load_from(session_path)
        .with_context(|| format!("failed to read session {}", session_path.display()))?;

    let mut server = session.server();
    let mut plugin = NameTags::enable_with_rng(&mut server, config_path, rng)?;

    let joined = session
        .join_all(&mut server)
        .into_iter()
        .map(|player| {
            let composition = plugin.on_join(&mut server, &player);
            (player, composition)
        })
        .collect();

    Ok(LoadedSession {
        session,
        server,
        plugin,
        joined,
    })
}
