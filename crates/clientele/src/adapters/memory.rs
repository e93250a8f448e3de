//! In-memory implementation of ClientRepository
//!
//! Clients live in a `BTreeMap` keyed by id. The name check and the write
//! happen under the same write guard, so uniqueness holds across tasks.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Client, DomainError, PageRequest, Sort, SortDirection, SortField};
use crate::models::Page;
use crate::ports::ClientRepository;

#[derive(Default)]
struct Store {
    next_id: i64,
    clients: BTreeMap<i64, Client>,
}

/// In-memory implementation of ClientRepository
#[derive(Default)]
pub struct InMemoryClientRepository {
    store: RwLock<Store>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_clients(clients: &mut [Client], sort: Sort) {
    clients.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError> {
        Ok(self.store.read().await.clients.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        Ok(self.store.read().await.clients.values().cloned().collect())
    }

    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<Client>, DomainError> {
        request.validate()?;
        let skip = request.skip()?;

        let mut clients: Vec<Client> = self.store.read().await.clients.values().cloned().collect();
        let total_count = clients.len() as i64;

        sort_clients(&mut clients, request.sort.unwrap_or_default());

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(request.page_size).unwrap_or(usize::MAX);
        let items = clients.into_iter().skip(skip).take(take).collect();

        Ok(Page::new(items, request, total_count))
    }

    async fn save(&self, client: &Client) -> Result<Client, DomainError> {
        let mut store = self.store.write().await;

        let taken = store
            .clients
            .values()
            .any(|other| other.id != client.id && other.name == client.name);
        if taken {
            return Err(DomainError::DuplicateName(client.name.clone()));
        }

        let id = match client.id {
            Some(id) => {
                if !store.clients.contains_key(&id) {
                    return Err(DomainError::not_found(id));
                }
                id
            }
            None => {
                store.next_id += 1;
                store.next_id
            }
        };

        let saved = Client {
            id: Some(id),
            ..client.clone()
        };
        store.clients.insert(id, saved.clone());

        Ok(saved)
    }

    async fn delete(&self, client: &Client) -> Result<(), DomainError> {
        if let Some(id) = client.id {
            self.store.write().await.clients.remove(&id);
        }
        Ok(())
    }
}
