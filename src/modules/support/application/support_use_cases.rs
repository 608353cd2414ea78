use std::sync::Arc;

use crate::support::application::ports::incoming::use_cases::{
    CreateSupportEntityTypeUseCase, CreateSupportUseCase, DeleteSupportEntityTypeUseCase,
    DeleteSupportUseCase, GetSupportUseCase, ListOrganizationSupportsUseCase,
    ListSupportEntityTypesUseCase,
};

#[derive(Clone)]
pub struct SupportUseCases {
    pub create_type: Arc<dyn CreateSupportEntityTypeUseCase + Send + Sync>,
    pub list_types: Arc<dyn ListSupportEntityTypesUseCase + Send + Sync>,
    pub delete_type: Arc<dyn DeleteSupportEntityTypeUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSupportUseCase + Send + Sync>,
    pub get: Arc<dyn GetSupportUseCase + Send + Sync>,
    pub list_for_organization: Arc<dyn ListOrganizationSupportsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSupportUseCase + Send + Sync>,
}
