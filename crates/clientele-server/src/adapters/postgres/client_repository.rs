//! PostgreSQL implementation of ClientRepository
//!
//! Name uniqueness is enforced by the `clients_name_key` constraint; a
//! unique violation coming back from `save` becomes `DuplicateName`.

use async_trait::async_trait;
use sqlx::PgPool;

use clientele::{
    Address, Client, ClientRepository, DomainError, Page, PageRequest, SortDirection, SortField,
};

/// PostgreSQL implementation of ClientRepository
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    mail: String,
    street: Option<String>,
    building_number: i32,
    apartment_number: Option<i32>,
    city: String,
    postal_code: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            mail: row.mail,
            address: Address {
                street: row.street,
                building_number: row.building_number,
                apartment_number: row.apartment_number,
                city: row.city,
                postal_code: row.postal_code,
            },
        }
    }
}

fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

fn save_error(e: sqlx::Error, name: &str) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::DuplicateName(name.to_string())
        }
        _ => repository_error(e),
    }
}

/// ORDER BY clause; only fixed column names ever reach the SQL text
fn order_by(request: &PageRequest) -> &'static str {
    let sort = request.sort.unwrap_or_default();
    match (sort.field, sort.direction) {
        (SortField::Id, SortDirection::Asc) => "ORDER BY id ASC",
        (SortField::Id, SortDirection::Desc) => "ORDER BY id DESC",
        (SortField::Name, SortDirection::Asc) => "ORDER BY name ASC, id ASC",
        (SortField::Name, SortDirection::Desc) => "ORDER BY name DESC, id DESC",
    }
}

/// Makes the COUNT and the slice of one page agree on the same rows
const PAGE_SNAPSHOT: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY";

fn page_query(request: &PageRequest) -> String {
    format!("SELECT * FROM clients {} LIMIT $1 OFFSET $2", order_by(request))
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query_as::<_, ClientRow>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let rows = sqlx::query_as::<_, ClientRow>("SELECT * FROM clients ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<Client>, DomainError> {
        request.validate()?;
        let skip = request.skip()?;

        let mut tx = self.pool.begin().await.map_err(repository_error)?;
        sqlx::query(PAGE_SNAPSHOT)
            .execute(&mut *tx)
            .await
            .map_err(repository_error)?;

        let total_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(&mut *tx)
            .await
            .map_err(repository_error)?;

        let rows = sqlx::query_as::<_, ClientRow>(&page_query(request))
            .bind(request.page_size)
            .bind(skip)
            .fetch_all(&mut *tx)
            .await
            .map_err(repository_error)?;

        tx.commit().await.map_err(repository_error)?;

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            request,
            total_count,
        ))
    }

    async fn save(&self, client: &Client) -> Result<Client, DomainError> {
        let address = &client.address;

        let row = match client.id {
            Some(id) => {
                // Update
                sqlx::query_as::<_, ClientRow>(
                    r#"
                    UPDATE clients
                    SET name = $2, mail = $3, street = $4, building_number = $5,
                        apartment_number = $6, city = $7, postal_code = $8
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&client.name)
                .bind(&client.mail)
                .bind(&address.street)
                .bind(address.building_number)
                .bind(address.apartment_number)
                .bind(&address.city)
                .bind(&address.postal_code)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| save_error(e, &client.name))?
                .ok_or_else(|| DomainError::not_found(id))?
            }
            None => {
                // Insert
                sqlx::query_as::<_, ClientRow>(
                    r#"
                    INSERT INTO clients
                        (name, mail, street, building_number, apartment_number, city, postal_code)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING *
                    "#,
                )
                .bind(&client.name)
                .bind(&client.mail)
                .bind(&address.street)
                .bind(address.building_number)
                .bind(address.apartment_number)
                .bind(&address.city)
                .bind(&address.postal_code)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| save_error(e, &client.name))?
            }
        };

        Ok(row.into())
    }

    async fn delete(&self, client: &Client) -> Result<(), DomainError> {
        let Some(id) = client.id else {
            return Ok(());
        };

        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele::Sort;

    #[test]
    fn test_default_order_is_ascending_id() {
        let request = PageRequest::new(0, 10).unwrap();
        assert_eq!(order_by(&request), "ORDER BY id ASC");
    }

    #[test]
    fn test_name_order_breaks_ties_by_id() {
        let request = PageRequest::new(0, 10)
            .unwrap()
            .with_sort(Sort::new(SortField::Name, SortDirection::Desc));
        assert_eq!(order_by(&request), "ORDER BY name DESC, id DESC");
    }

    #[test]
    fn test_page_reads_one_snapshot() {
        assert!(PAGE_SNAPSHOT.contains("REPEATABLE READ"));
        let request = PageRequest::new(2, 5).unwrap();
        assert_eq!(
            page_query(&request),
            "SELECT * FROM clients ORDER BY id ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_non_database_error_is_repository_error() {
        let err = save_error(sqlx::Error::RowNotFound, "abc");
        assert!(matches!(err, DomainError::Repository(_)));
    }
}
