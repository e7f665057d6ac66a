use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use r2d2::Pool;

use repos::error::RepoError;

/// Repos layer Result
pub type RepoResult<T> = Result<T, RepoError>;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
