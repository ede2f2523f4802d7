//! Folder API methods for [`CheckmkClient`].

use crate::client::CheckmkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Folder, FolderPath};

impl CheckmkClient {
    /// Fetch a folder by path. A missing folder is an `ApiError` with status 404.
    pub async fn get_folder(&self, path: &FolderPath) -> Result<Folder> {
        endpoints::get_folder(&self.http, &self.base_url, path).await
    }

    /// Create folder `name` below `parent`, returning the success status.
    pub async fn create_folder(&self, parent: &FolderPath, name: &str) -> Result<u16> {
        endpoints::create_folder(&self.http, &self.base_url, parent, name).await
    }
}
