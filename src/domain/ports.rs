use crate::utils::error::Result;

/// Byte-level storage used by the CLI to load answers and profiles and to
/// write results. The engine itself never touches storage.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
