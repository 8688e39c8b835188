use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Autonomous Asset Platform API",
        version = "1.0.0",
        description = "CRUD backend for the autonomous asset platform demo.\n\n**Features:**\n- Self-healing document store (collection + seed bootstrap)\n- User and contact management\n- Deterministic mock backtests\n- Templated video script drafts",
    ),
    paths(
        // Health & self-heal
        crate::api::health::health,
        crate::api::heal::heal,

        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,

        // Mock computations
        crate::api::trades::backtest,
        crate::api::youtube::generate_script,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::Strategy,
            crate::models::ContactMessage,
            crate::api::trades::BacktestRequest,
            crate::api::youtube::ScriptRequest,
            crate::services::backtest_service::BacktestResult,
            crate::services::backtest_service::BacktestStats,
            crate::services::backtest_service::EquityPoint,
        )
    ),
    tags(
        (name = "Health", description = "Health check, diagnostics and the idempotent self-heal routine."),
        (name = "Users", description = "User records; email uniqueness is by convention only."),
        (name = "Trading", description = "Mock trading endpoints producing deterministic synthetic data."),
        (name = "Videos", description = "Templated video script generation."),
    )
)]
pub struct ApiDoc;
