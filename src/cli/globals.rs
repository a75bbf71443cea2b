use std::path::PathBuf;

/// Options shared by every CLI action.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub data_dir: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, data_dir: PathBuf) -> Self {
        Self { api_url, data_dir }
    }
}
