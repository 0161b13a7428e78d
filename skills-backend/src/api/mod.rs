// src/api/mod.rs
use crate::db::DbPool;
use crate::repository::{
    analytics_repository::AnalyticsRepository, department_repository::DepartmentRepository,
    employee_repository::EmployeeRepository, evaluation_repository::EvaluationRepository,
    skill_repository::SkillRepository, user_repository::UserRepository,
};
use crate::service::{
    analytics_service::AnalyticsService, auth_service::AuthService,
    department_service::DepartmentService, employee_service::EmployeeService,
    evaluation_service::EvaluationService, skill_service::SkillService,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub employee_service: Arc<EmployeeService>,
    pub department_service: Arc<DepartmentService>,
    pub skill_service: Arc<SkillService>,
    pub evaluation_service: Arc<EvaluationService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub jwt_manager: Arc<JwtManager>,
}

impl AppState {
    /// 接続プールからリポジトリとサービスを組み立てる
    pub fn new(
        db: DbPool,
        jwt_manager: Arc<JwtManager>,
        password_manager: Arc<PasswordManager>,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let employee_repo = Arc::new(EmployeeRepository::new(db.clone()));
        let department_repo = Arc::new(DepartmentRepository::new(db.clone()));
        let skill_repo = Arc::new(SkillRepository::new(db.clone()));
        let evaluation_repo = Arc::new(EvaluationRepository::new(db.clone()));
        let analytics_repo = Arc::new(AnalyticsRepository::new(db.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(
                user_repo,
                password_manager,
                jwt_manager.clone(),
            )),
            employee_service: Arc::new(EmployeeService::new(
                employee_repo.clone(),
                department_repo.clone(),
            )),
            department_service: Arc::new(DepartmentService::new(department_repo)),
            skill_service: Arc::new(SkillService::new(db, skill_repo.clone())),
            evaluation_service: Arc::new(EvaluationService::new(
                evaluation_repo,
                employee_repo.clone(),
                skill_repo,
            )),
            analytics_service: Arc::new(AnalyticsService::new(analytics_repo, employee_repo)),
            jwt_manager,
        }
    }
}
