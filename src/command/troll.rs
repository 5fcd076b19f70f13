//! Troll-command interception.
//!
//! [`TrollFilter`] wraps any [`CommandHandler`] and answers a fixed set of
//! commands itself while troll commands are disabled by policy. Everything
//! else is passed through untouched.

use super::{CommandHandler, Response};
use crate::config::SharedPolicy;
use std::collections::HashMap;
use tracing::debug;

/// Lookup form of a command: lower-case with all whitespace removed.
pub fn normalize(command: &str) -> String {
    command
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Normalized command to canned response. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrollCommandTable {
    entries: HashMap<String, String>,
}

impl TrollCommandTable {
    /// Build from explicit command/response pairs.
    ///
    /// Keys are normalized on the way in, so `"Press All"` and `"pressall"`
    /// name the same entry.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (normalize(k.as_ref()), v.into()))
                .collect(),
        }
    }

    /// Map every command in `commands` to the same response.
    pub fn shared_response<I>(commands: I, response: &str) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_pairs(commands.into_iter().map(|c| (c, response.to_string())))
    }

    /// The canned response for `command`, if it is a troll command.
    pub fn lookup(&self, command: &str) -> Option<&str> {
        self.entries.get(&normalize(command)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Middleware that intercepts troll commands before they reach `inner`.
#[derive(Debug)]
pub struct TrollFilter<H> {
    inner: H,
    table: TrollCommandTable,
    policy: SharedPolicy,
}

impl<H> TrollFilter<H> {
    pub fn new(inner: H, table: TrollCommandTable, policy: SharedPolicy) -> Self {
        Self {
            inner,
            table,
            policy,
        }
    }

    /// Intercept `commands` with one shared `response`.
    pub fn with_shared_response<I>(
        inner: H,
        commands: I,
        response: &str,
        policy: SharedPolicy,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(inner, TrollCommandTable::shared_response(commands, response), policy)
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn table(&self) -> &TrollCommandTable {
        &self.table
    }
}

impl<E: ?Sized, H: CommandHandler<E>> CommandHandler<E> for TrollFilter<H> {
    fn respond(&mut self, command: &str, env: &mut E) -> Vec<Response> {
        // The toggle is read per command so owners can flip it at runtime.
        if !self.policy.snapshot().enable_troll_commands {
            if let Some(response) = self.table.lookup(command) {
                debug!(command, "troll command intercepted");
                return vec![Response::ChatError(response.to_string())];
            }
        }
        self.inner.respond(command, env)
    }
}
