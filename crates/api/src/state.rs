use clientele_db::DbPool;

/// State handed to every handler through `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
