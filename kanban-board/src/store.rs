//! KanbanStore - the single owner of the current board.
//!
//! Every change goes through [`KanbanStore::dispatch`], which runs to completion
//! before returning: compute the next board, replace the held one, persist it
//! (once hydrated), then notify observers. Persistence is best effort; a failed
//! save is logged and the in-memory board stays committed.

use crate::actions::BoardActions;
use crate::board::RestoreBoard;
use crate::config::BoardConfig;
use crate::defaults::default_board_with;
use crate::operation::Operation;
use crate::persist::{self, STORAGE_KEY};
use crate::storage::Storage;
use crate::transition::{self, BoardOperation};
use crate::types::Board;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Handle returned by [`KanbanStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Board)>;

/// Where the board came from when the store hydrated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    /// A persisted snapshot was decoded
    Persisted,
    /// Nothing was stored under the key
    Empty,
    /// The snapshot could not be read or decoded; the default board is used
    Unreadable,
}

/// The board store
pub struct KanbanStore<S: Storage> {
    board: Board,
    storage: S,
    storage_key: String,
    new_column_title: String,
    hydration: Option<HydrationSource>,
    observers: BTreeMap<SubscriptionId, Observer>,
    next_subscription: u64,
}

impl<S: Storage> KanbanStore<S> {
    /// Create a store holding the default board. Nothing is loaded or saved
    /// until [`hydrate`](Self::hydrate) runs.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, &BoardConfig::default())
    }

    /// Create an unhydrated store using `config`
    pub fn with_config(storage: S, config: &BoardConfig) -> Self {
        Self {
            board: default_board_with(config.seed_sample_tasks),
            storage,
            storage_key: config.storage_key.clone(),
            new_column_title: config.new_column_title.clone(),
            hydration: None,
            observers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Create a store and hydrate it from storage
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    /// Create a store with `config` and hydrate it from storage
    pub fn open_with_config(storage: S, config: &BoardConfig) -> Self {
        let mut store = Self::with_config(storage, config);
        store.hydrate();
        store
    }

    /// Load the persisted board, if any, and start persisting changes.
    ///
    /// Unreadable or unparseable snapshots are logged and the default board is
    /// kept. Calling this again after the first time does nothing and returns
    /// the source of the first hydration.
    pub fn hydrate(&mut self) -> HydrationSource {
        if let Some(source) = self.hydration {
            return source;
        }

        let source = match self.storage.load(&self.storage_key) {
            Ok(Some(raw)) => match persist::decode(&raw) {
                Ok(board) => {
                    self.commit(RestoreBoard::new(board).into());
                    HydrationSource::Persisted
                }
                Err(e) => {
                    warn!(
                        key = %self.storage_key,
                        "Failed to parse saved board, using default: {}", e
                    );
                    HydrationSource::Unreadable
                }
            },
            Ok(None) => HydrationSource::Empty,
            Err(e) => {
                warn!(
                    key = %self.storage_key,
                    "Failed to read saved board, using default: {}", e
                );
                HydrationSource::Unreadable
            }
        };

        self.hydration = Some(source);
        self.persist();
        if source != HydrationSource::Persisted {
            self.notify();
        }

        info!(
            ?source,
            columns = self.board.columns.len(),
            tasks = self.board.task_count(),
            "Board hydrated"
        );
        source
    }

    /// Whether [`hydrate`](Self::hydrate) has completed
    pub fn is_hydrated(&self) -> bool {
        self.hydration.is_some()
    }

    /// Source of the board loaded by [`hydrate`](Self::hydrate), if it ran
    pub fn hydration(&self) -> Option<HydrationSource> {
        self.hydration
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The storage collaborator
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key the board is saved under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Title used for columns added without one
    pub fn new_column_title(&self) -> &str {
        &self.new_column_title
    }

    /// Facade producing operations from user-level arguments
    pub fn actions(&mut self) -> BoardActions<'_, S> {
        BoardActions::new(self)
    }

    /// Apply `op`, persist the result and notify observers
    pub fn dispatch(&mut self, op: impl Into<BoardOperation>) -> &Board {
        let op = op.into();
        debug!(
            op = %op.op_string(),
            description = op.description(),
            "Dispatching board operation"
        );

        self.board = transition::apply(std::mem::take(&mut self.board), &op);
        if self.is_hydrated() {
            self.persist();
        }
        self.notify();
        &self.board
    }

    /// Compute the result of `op` without committing, saving or notifying
    pub fn preview(&self, op: &BoardOperation) -> Board {
        transition::apply(self.board.clone(), op)
    }

    /// Register an observer called with the new board after every dispatch
    pub fn subscribe(&mut self, observer: impl FnMut(&Board) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Apply and notify without the pre-hydration persistence guard
    fn commit(&mut self, op: BoardOperation) {
        debug!(op = %op.op_string(), "Committing board operation");
        self.board = transition::apply(std::mem::take(&mut self.board), &op);
        self.notify();
    }

    fn persist(&self) {
        let raw = match persist::encode(&self.board) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize board: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(&self.storage_key, &raw) {
            warn!(key = %self.storage_key, "Failed to save board: {}", e);
        }
    }

    fn notify(&mut self) {
        for observer in self.observers.values_mut() {
            observer(&self.board);
        }
    }
}

impl<S: Storage> fmt::Debug for KanbanStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KanbanStore")
            .field("storage_key", &self.storage_key)
            .field("hydration", &self.hydration)
            .field("columns", &self.board.columns.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: Storage + Default> Default for KanbanStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
