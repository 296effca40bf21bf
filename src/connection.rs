//! Opens the single `PostgreSQL` connection each binary works with.

use crate::config::ConnectionSettings;
use diesel::pg::PgConnection;
use diesel::{Connection, ConnectionError};
use tracing::debug;

/// Establishes one connection for the given settings.
///
/// The returned connection is closed when it is dropped, so callers release
/// it on every exit path simply by letting it go out of scope.
///
/// # Errors
///
/// Returns [`ConnectionError`] when the server is unreachable or rejects the
/// login.
pub fn establish(settings: &ConnectionSettings) -> Result<PgConnection, ConnectionError> {
    debug!(
        host = settings.host(),
        port = settings.port(),
        database = settings.database(),
        user = settings.user(),
        "connecting to PostgreSQL"
    );
    PgConnection::establish(&settings.conninfo())
}
