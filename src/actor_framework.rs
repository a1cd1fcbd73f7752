use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Get the ID of the entity. Must equal the key it is stored under.
    fn id(&self) -> &Self::Id;
}

/// Failures reported by a [`ResourceActor`] or while talking to it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item id {found} does not match key {expected}")]
    IdMismatch { expected: String, found: String },
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Replace {
        id: T::Id,
        item: T,
        respond_to: Response<()>,
    },
    /// Restores the seed set. Only reachable from tests.
    #[cfg(test)]
    Reset {
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns the store exclusively. Requests are handled one at a time, so every
/// operation is atomic with respect to every other one.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    #[cfg_attr(not(test), allow(dead_code))]
    seed_fn: Box<dyn Fn() -> Vec<T> + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        seed_fn: impl Fn() -> Vec<T> + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = index(seed_fn());
        let actor = Self {
            receiver,
            store,
            seed_fn: Box::new(seed_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!(items = self.store.len(), "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(%id, found = item.is_some(), "Handled get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Replace { id, item, respond_to } => {
                    let _ = respond_to.send(self.handle_replace(id, item));
                }
                #[cfg(test)]
                ResourceRequest::Reset { respond_to } => {
                    self.store = index((self.seed_fn)());
                    info!(items = self.store.len(), "Store reset to seed");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
        info!("ResourceActor stopped");
    }

    fn handle_replace(&mut self, id: T::Id, item: T) -> Result<(), FrameworkError> {
        if item.id() != &id {
            warn!(%id, item_id = %item.id(), "Rejected replace with mismatched id");
            return Err(FrameworkError::IdMismatch {
                expected: id.to_string(),
                found: item.id().to_string(),
            });
        }
        match self.store.get_mut(&id) {
            Some(slot) => {
                *slot = item;
                info!(%id, "Item replaced");
                Ok(())
            }
            None => {
                debug!(%id, "Replace target missing");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }
}

fn index<T: Entity>(items: Vec<T>) -> HashMap<T::Id, T> {
    items.into_iter().map(|item| (item.id().clone(), item)).collect()
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn replace(&self, id: T::Id, item: T) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Replace { id, item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    #[cfg(test)]
    pub async fn reset(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Reset { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: u32,
        label: String,
    }

    impl Entity for Widget {
        type Id = u32;

        fn id(&self) -> &u32 { &self.id }
    }

    fn widget(id: u32, label: &str) -> Widget {
        Widget { id, label: label.to_string() }
    }

    fn seeds() -> Vec<Widget> {
        vec![widget(1, "one"), widget(2, "two")]
    }

    fn start() -> ResourceClient<Widget> {
        let (actor, client) = ResourceActor::new(10, seeds);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_get_returns_seeded_items() {
        let client = start();

        let one = client.get(1).await.unwrap();
        assert_eq!(one, Some(widget(1, "one")));
        assert_eq!(client.get(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_overwrites_whole_item() {
        let client = start();

        client.replace(2, widget(2, "deux")).await.unwrap();
        assert_eq!(client.get(2).await.unwrap(), Some(widget(2, "deux")));
        // Untouched neighbour
        assert_eq!(client.get(1).await.unwrap(), Some(widget(1, "one")));
    }

    #[tokio::test]
    async fn test_replace_missing_key_leaves_store_unchanged() {
        let client = start();

        let err = client.replace(9, widget(9, "nine")).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("9".to_string()));
        assert_eq!(client.get(9).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_rejects_id_mismatch() {
        let client = start();

        let err = client.replace(1, widget(2, "imposter")).await.unwrap_err();
        assert_eq!(
            err,
            FrameworkError::IdMismatch { expected: "1".to_string(), found: "2".to_string() }
        );
        assert_eq!(client.get(1).await.unwrap(), Some(widget(1, "one")));
        assert_eq!(client.get(2).await.unwrap(), Some(widget(2, "two")));
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let client = start();

        client.replace(1, widget(1, "changed")).await.unwrap();
        client.reset().await.unwrap();
        assert_eq!(client.get(1).await.unwrap(), Some(widget(1, "one")));
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::new(10, seeds);
        drop(actor);

        assert_eq!(client.get(1).await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
