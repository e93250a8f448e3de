//! Client Application Service (Use Case)
//!
//! Orchestrates repository and mapper for Client management.

use std::sync::Arc;

use crate::application::ClientMapper;
use crate::domain::{Client, DomainError, PageRequest};
use crate::models::{validate_name, ClientCreateRequest, ClientResponse, Page};
use crate::ports::ClientRepository;

/// Application service for Client operations
pub struct ClientService<R: ClientRepository + ?Sized> {
    repo: Arc<R>,
    mapper: ClientMapper,
}

impl<R: ClientRepository + ?Sized> ClientService<R> {
    pub fn new(repo: Arc<R>, mapper: ClientMapper) -> Self {
        Self { repo, mapper }
    }

    /// Page of abbreviated client views
    pub async fn get_all_abbreviated(
        &self,
        page_offset: i64,
        page_size: i64,
    ) -> Result<Page<ClientResponse>, DomainError> {
        let request = PageRequest::new(page_offset, page_size)?;
        let page = self.repo.find_all_paged(&request).await?;

        Ok(page.map(|client| self.mapper.to_response(&client)))
    }

    /// Get a Client by ID, `NotFound` when it does not exist
    pub async fn get(&self, id: i64) -> Result<Client, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Page of full clients in id order
    pub async fn get_page(
        &self,
        page_offset: i64,
        page_size: i64,
    ) -> Result<Page<Client>, DomainError> {
        let request = PageRequest::new(page_offset, page_size)?;
        self.get_page_sorted(&request).await
    }

    /// Page of full clients with explicit ordering
    pub async fn get_page_sorted(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Client>, DomainError> {
        let page = self.repo.find_all_paged(request).await?;
        tracing::debug!(
            "Loaded client page {} ({} of {})",
            page.page_number,
            page.items.len(),
            page.total_count
        );
        Ok(page)
    }

    /// Every client, unpaginated
    pub async fn get_all(&self) -> Result<Vec<Client>, DomainError> {
        self.repo.find_all().await
    }

    /// Delete a Client, `NotFound` rather than a silent no-op
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let client = self.get(id).await?;
        self.repo.delete(&client).await?;
        self.repo.flush().await?;

        tracing::info!("Deleted client: {}", id);
        Ok(())
    }

    /// Create a new Client
    pub async fn create(&self, request: ClientCreateRequest) -> Result<Client, DomainError> {
        request.validate()?;

        let client = self.mapper.to_entity(request);
        let saved = self.save_logged(&client).await?;
        self.repo.flush().await?;

        tracing::info!("Created client: {} ({:?})", saved.name, saved.id);
        Ok(saved)
    }

    /// Replace name, mail and the whole address of an existing Client
    pub async fn edit(&self, request: ClientCreateRequest, id: i64) -> Result<Client, DomainError> {
        let mut client = self.get(id).await?;
        request.validate()?;

        self.mapper.apply(request, &mut client);
        let saved = self.save_logged(&client).await?;
        self.repo.flush().await?;

        tracing::info!("Edited client: {} ({})", saved.name, id);
        Ok(saved)
    }

    /// Rename an existing Client; saved without a flush
    pub async fn update_name(&self, name: String, id: i64) -> Result<Client, DomainError> {
        let mut client = self.get(id).await?;
        validate_name(&name)?;

        client.name = name;
        let saved = self.save_logged(&client).await?;

        tracing::info!("Renamed client {} to {}", id, saved.name);
        Ok(saved)
    }

    async fn save_logged(&self, client: &Client) -> Result<Client, DomainError> {
        self.repo.save(client).await.inspect_err(|e| {
            if let DomainError::DuplicateName(name) = e {
                tracing::warn!("Rejected duplicate client name: {}", name);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryClientRepository;

    fn request(name: &str) -> ClientCreateRequest {
        ClientCreateRequest {
            name: name.to_string(),
            mail: "bbc@abc.com".to_string(),
            street: Some("ulica".to_string()),
            building_number: 1,
            apartment_number: None,
            city: "Warszawa".to_string(),
            postal_code: "01-222".to_string(),
        }
    }

    /// Service seeded with client "abc"
    async fn setup() -> (ClientService<InMemoryClientRepository>, i64) {
        let service = ClientService::new(Arc::new(InMemoryClientRepository::new()), ClientMapper);
        let created = service.create(request("abc")).await.unwrap();
        (service, created.id.unwrap())
    }

    #[tokio::test]
    async fn test_create_two_valid_clients() {
        let (service, _) = setup().await;
        let initial = service.get_all().await.unwrap().len();

        let second = ClientCreateRequest {
            postal_code: "01-000".to_string(),
            ..request("abc2")
        };
        service.create(second).await.unwrap();

        assert_eq!(service.get_all().await.unwrap().len(), initial + 1);
    }

    #[tokio::test]
    async fn test_create_two_clients_with_same_name() {
        let (service, _) = setup().await;
        assert_eq!(service.get_all().await.unwrap().len(), 1);

        let other = ClientCreateRequest {
            mail: "other@abc.com".to_string(),
            postal_code: "01-000".to_string(),
            ..request("abc")
        };
        let err = service.create(other).await.unwrap_err();

        assert_eq!(err, DomainError::DuplicateName("abc".to_string()));
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_request_writes_nothing() {
        let (service, _) = setup().await;
        let bad = ClientCreateRequest {
            postal_code: "01222".to_string(),
            ..request("new")
        };
        assert!(matches!(
            service.create(bad).await,
            Err(DomainError::ValidationFailed { .. })
        ));
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing_client() {
        let (service, id) = setup().await;
        service.delete(id).await.unwrap();
        assert!(service.get_all().await.unwrap().is_empty());
        assert_eq!(service.get(id).await.unwrap_err(), DomainError::not_found(id));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_everywhere() {
        let (service, _) = setup().await;
        let missing = 404;

        assert_eq!(service.get(missing).await.unwrap_err(), DomainError::not_found(missing));
        assert_eq!(service.delete(missing).await.unwrap_err(), DomainError::not_found(missing));
        assert_eq!(
            service.edit(request("x"), missing).await.unwrap_err(),
            DomainError::not_found(missing)
        );
        assert_eq!(
            service.update_name("x".to_string(), missing).await.unwrap_err(),
            DomainError::not_found(missing)
        );
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_name_with_valid_name() {
        let (service, id) = setup().await;
        let initial = service.get_all().await.unwrap().len();
        let name = "abc - new valid name".to_string();

        service.update_name(name.clone(), id).await.unwrap();

        assert_eq!(service.get_all().await.unwrap().len(), initial);
        assert_eq!(service.get(id).await.unwrap().name, name);
    }

    #[tokio::test]
    async fn test_update_name_blank_rejected() {
        let (service, id) = setup().await;
        assert!(matches!(
            service.update_name("  ".to_string(), id).await,
            Err(DomainError::ValidationFailed { .. })
        ));
        assert_eq!(service.get(id).await.unwrap().name, "abc");
    }

    #[tokio::test]
    async fn test_update_name_to_taken_name() {
        let (service, id) = setup().await;
        service.create(request("other")).await.unwrap();

        let err = service.update_name("other".to_string(), id).await.unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("other".to_string()));
        assert_eq!(service.get(id).await.unwrap().name, "abc");
    }

    #[tokio::test]
    async fn test_edit_replaces_every_field() {
        let (service, id) = setup().await;

        let replacement = ClientCreateRequest {
            name: "renamed".to_string(),
            mail: "new@example.com".to_string(),
            street: None,
            building_number: 12,
            apartment_number: Some(3),
            city: "Gdańsk".to_string(),
            postal_code: "80-001".to_string(),
        };
        service.edit(replacement.clone(), id).await.unwrap();

        let client = service.get(id).await.unwrap();
        assert_eq!(client.id, Some(id));
        assert_eq!(client.name, replacement.name);
        assert_eq!(client.mail, replacement.mail);
        assert_eq!(client.address.street, None);
        assert_eq!(client.address.building_number, 12);
        assert_eq!(client.address.apartment_number, Some(3));
        assert_eq!(client.address.city, replacement.city);
        assert_eq!(client.address.postal_code, replacement.postal_code);
    }

    #[tokio::test]
    async fn test_edit_keeping_own_name_is_allowed() {
        let (service, id) = setup().await;
        let same_name = ClientCreateRequest {
            city: "Łódź".to_string(),
            ..request("abc")
        };
        let saved = service.edit(same_name, id).await.unwrap();
        assert_eq!(saved.address.city, "Łódź");
    }

    #[tokio::test]
    async fn test_edit_to_taken_name_leaves_state_unchanged() {
        let (service, id) = setup().await;
        service.create(request("taken")).await.unwrap();

        let err = service.edit(request("taken"), id).await.unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("taken".to_string()));

        let client = service.get(id).await.unwrap();
        assert_eq!(client.name, "abc");
    }

    #[tokio::test]
    async fn test_edit_invalid_request_rejected() {
        let (service, id) = setup().await;
        let bad = ClientCreateRequest {
            mail: "not-a-mail".to_string(),
            ..request("abc")
        };
        assert!(matches!(
            service.edit(bad, id).await,
            Err(DomainError::ValidationFailed { .. })
        ));
        assert_eq!(service.get(id).await.unwrap().mail, "bbc@abc.com");
    }

    #[tokio::test]
    async fn test_pagination_bounds() {
        let (service, _) = setup().await;
        for i in 0..6 {
            service.create(request(&format!("client-{i}"))).await.unwrap();
        }
        let total = service.get_all().await.unwrap().len() as i64;

        for (offset, size) in [(0, 0), (0, -1), (-1, 5)] {
            assert!(matches!(
                service.get_page(offset, size).await,
                Err(DomainError::InvalidPagination(_))
            ));
            assert!(matches!(
                service.get_all_abbreviated(offset, size).await,
                Err(DomainError::InvalidPagination(_))
            ));
        }

        for size in 1..=8 {
            for offset in 0..4 {
                let page = service.get_page(offset, size).await.unwrap();
                assert!((page.items.len() as i64) <= size);
                assert_eq!(page.total_count, total);
            }
        }
    }

    #[tokio::test]
    async fn test_abbreviated_page_projects_response() {
        let (service, id) = setup().await;
        let page = service.get_all_abbreviated(0, 10).await.unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(
            page.items,
            vec![ClientResponse {
                id: Some(id),
                name: "abc".to_string(),
                mail: "bbc@abc.com".to_string(),
                city: "Warszawa".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_service_over_trait_object() {
        let repo: Arc<dyn ClientRepository> = Arc::new(InMemoryClientRepository::new());
        let service = ClientService::new(repo, ClientMapper);
        let created = service.create(request("dyn")).await.unwrap();
        assert_eq!(service.get(created.id.unwrap()).await.unwrap().name, "dyn");
    }
}
