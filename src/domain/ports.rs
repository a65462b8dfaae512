use crate::domain::model::GuestList;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Reads the whole file at `path` as one text value.
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Appends a newline followed by `text` to the file at `path`, leaving
    /// prior bytes untouched. Creates the file when absent.
    fn append_file(
        &self,
        path: &str,
        text: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn guest_file(&self) -> &str;
}

#[async_trait]
pub trait GuestRegistry: Send + Sync {
    async fn add_guest(&self, name: &str) -> Result<()>;
    async fn guest_list(&self) -> Result<GuestList>;
}
