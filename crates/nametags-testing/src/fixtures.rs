//! Session files built in code.

use anyhow::Result;
use nametags_runtime::COMPANION_PLUGIN;
use nametags_runtime::sim::{PermissionChange, SessionFile, SessionPlayer};

/// Builder for a simulated session. Starts with the companion plugin
/// installed.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    session: SessionFile,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            session: SessionFile {
                plugins: vec![COMPANION_PLUGIN.to_string()],
                ..SessionFile::default()
            },
        }
    }

    /// Same as [`SessionBuilder::new`] minus the companion plugin.
    pub fn without_companion() -> Self {
        Self {
            session: SessionFile::default(),
        }
    }

    pub fn player(mut self, name: &str, permissions: &[&str]) -> Self {
        self.session.players.push(SessionPlayer {
            name: name.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn grant_at(mut self, tick: u64, player: &str, nodes: &[&str]) -> Self {
        self.session.changes.push(PermissionChange {
            tick,
            player: player.to_string(),
            grant: nodes.iter().map(|n| n.to_string()).collect(),
            revoke: Vec::new(),
        });
        self
    }

    pub fn revoke_at(mut self, tick: u64, player: &str, nodes: &[&str]) -> Self {
        self.session.changes.push(PermissionChange {
            tick,
            player: player.to_string(),
            grant: Vec::new(),
            revoke: nodes.iter().map(|n| n.to_string()).collect(),
        });
        self
    }

    pub fn build(&self) -> &SessionFile {
        &self.session
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&self.session)?)
    }
}
