use crate::core::{GuestList, GuestRegistry, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The two operations the binaries are built from: append one guest,
/// read the whole list back.
pub struct GuestBook<S: Storage> {
    storage: S,
    guest_file: String,
}

impl<S: Storage> GuestBook<S> {
    pub fn new(storage: S, guest_file: String) -> Self {
        Self {
            storage,
            guest_file,
        }
    }

    pub fn guest_file(&self) -> &str {
        &self.guest_file
    }
}

#[async_trait]
impl<S: Storage> GuestRegistry for GuestBook<S> {
    async fn add_guest(&self, name: &str) -> Result<()> {
        tracing::debug!("Appending guest {:?} to {}", name, self.guest_file);
        self.storage.append_file(&self.guest_file, name).await?;
        tracing::info!("Added new guest: {}", name);
        Ok(())
    }

    async fn guest_list(&self) -> Result<GuestList> {
        tracing::debug!("Reading guest list from {}", self.guest_file);
        let contents = self.storage.read_file(&self.guest_file).await?;
        Ok(GuestList::from_contents(contents))
    }
}
