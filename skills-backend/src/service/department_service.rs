// src/service/department_service.rs
use crate::api::dto::department_dto::{CreateDepartmentRequest, DepartmentDetailResponse};
use crate::domain::department_model;
use crate::error::AppResult;
use crate::repository::department_repository::{DepartmentNameRow, DepartmentRepository};
use crate::utils::error_helper::{map_unique_violation, not_found_error};
use std::sync::Arc;
use tracing::info;

pub struct DepartmentService {
    department_repo: Arc<DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(department_repo: Arc<DepartmentRepository>) -> Self {
        Self { department_repo }
    }

    pub async fn list_names(&self) -> AppResult<Vec<DepartmentNameRow>> {
        Ok(self.department_repo.find_all_names().await?)
    }

    pub async fn details(&self) -> AppResult<Vec<DepartmentDetailResponse>> {
        let rows = self.department_repo.find_details().await?;

        if rows.is_empty() {
            return Err(not_found_error("No results found", "department details"));
        }

        Ok(rows.into_iter().map(DepartmentDetailResponse::from).collect())
    }

    pub async fn create(
        &self,
        request: CreateDepartmentRequest,
    ) -> AppResult<department_model::Model> {
        let description = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let department = self
            .department_repo
            .create(request.dept_name.trim().to_string(), description)
            .await
            .map_err(|e| {
                map_unique_violation(e, "Department already exists", "department create")
            })?;

        info!(dept_id = department.dept_id, dept_name = %department.dept_name, "Department created");

        Ok(department)
    }
}
