//! Shared test utilities for audito-db unit tests.

pub(crate) mod helpers {
    use crate::service::AuditoService;

    /// A service over a fresh temp data directory. Keep the `TempDir` alive.
    pub fn test_service() -> (tempfile::TempDir, AuditoService) {
        let dir = tempfile::tempdir().unwrap();
        let svc = AuditoService::open(dir.path().join("data")).unwrap();
        (dir, svc)
    }
}
