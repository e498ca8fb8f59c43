//! Properties service and repository contract.

use std::sync::Arc;

use async_trait::async_trait;

use paypack_core::{DomainResult, OwnerId, Page, PropertyId};

use crate::property::Property;

/// Data-store contract for the property register.
#[async_trait]
pub trait PropertiesRepository: Send + Sync {
    /// Persist a new property; fails with `Conflict` on a duplicate id.
    async fn save(&self, property: Property) -> DomainResult<()>;

    /// Update the mutable fields of an existing property.
    async fn update(&self, property: Property) -> DomainResult<()>;

    async fn retrieve_by_id(&self, id: PropertyId) -> DomainResult<Property>;

    async fn retrieve_by_owner(
        &self,
        owner: OwnerId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>>;

    async fn retrieve_by_sector(
        &self,
        sector: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>>;

    async fn retrieve_by_cell(
        &self,
        cell: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>>;

    async fn retrieve_by_village(
        &self,
        village: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>>;
}

/// The properties (houses) API.
pub struct PropertiesService {
    repo: Arc<dyn PropertiesRepository>,
}

impl PropertiesService {
    pub fn new(repo: Arc<dyn PropertiesRepository>) -> Self {
        Self { repo }
    }

    /// Register a unique property, assigning it a fresh id.
    pub async fn register(&self, mut property: Property) -> DomainResult<Property> {
        property.validate()?;
        property.id = PropertyId::new();
        self.repo.save(property.clone()).await?;
        tracing::info!(id = %property.id, village = %property.address.village, "property registered");
        Ok(property)
    }

    /// Modify the mutable fields of an existing property.
    pub async fn update(&self, property: Property) -> DomainResult<()> {
        property.validate()?;
        self.repo.update(property).await
    }

    pub async fn retrieve(&self, id: PropertyId) -> DomainResult<Property> {
        self.repo.retrieve_by_id(id).await
    }

    pub async fn list_by_owner(
        &self,
        owner: OwnerId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>> {
        self.repo.retrieve_by_owner(owner, offset, limit).await
    }

    pub async fn list_by_sector(
        &self,
        sector: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>> {
        self.repo.retrieve_by_sector(sector, offset, limit).await
    }

    pub async fn list_by_cell(
        &self,
        cell: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>> {
        self.repo.retrieve_by_cell(cell, offset, limit).await
    }

    pub async fn list_by_village(
        &self,
        village: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Property>> {
        self.repo.retrieve_by_village(village, offset, limit).await
    }
}
