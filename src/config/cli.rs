use crate::core::Storage;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub async fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.read_file(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn write_json<T: Serialize + Sync>(&self, path: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_file(path, &bytes).await
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SurveyAnswers;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_json_round_trip_through_storage() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().to_string());

        storage
            .write_file("in/answers.json", br#"{"A1": 7, "B1a": "Y"}"#)
            .await
            .unwrap();
        let answers: SurveyAnswers = storage.read_json("in/answers.json").await.unwrap();
        assert_eq!(answers.len(), 2);

        storage.write_json("out/copy.json", &answers).await.unwrap();
        let written = tokio::fs::read_to_string(dir.path().join("out/copy.json"))
            .await
            .unwrap();
        // 巢狀目錄自動建立, 輸出為 pretty JSON
        assert!(written.contains('\n'));
        let back: SurveyAnswers = serde_json::from_str(&written).unwrap();
        assert_eq!(back, answers);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().to_string());
        let err = storage.read_file("nope.json").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::EngineError::IoError(_)));
    }
}
