use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let contents = fs::read_to_string(full_path).await?;
        Ok(contents)
    }

    async fn append_file(&self, path: &str, text: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        // Append mode with create: the file comes into existence on first
        // append, but a missing containing directory stays an error.
        let mut file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(full_path)
            .await?;

        file.write_all(format!("\n{}", text).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
