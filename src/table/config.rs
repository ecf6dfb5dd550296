use aws_sdk_dynamodb::Config;

/// Construction options for a [`TableClient`](super::TableClient).
///
/// `client_config` is handed to the store client as is; the table name never
/// becomes part of it.
#[derive(Debug, Clone)]
pub struct TableClientOptions {
    pub table_name: String,
    pub client_config: Config,
}

impl TableClientOptions {
    pub fn new(table_name: impl Into<String>, client_config: Config) -> Self {
        Self {
            table_name: table_name.into(),
            client_config,
        }
    }

    /// Derives the store configuration from a shared SDK configuration
    /// (region, credentials, endpoint, retry and timeout settings).
    pub fn from_sdk_config(table_name: impl Into<String>, sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(table_name, Config::from(sdk_config))
    }

    pub(crate) fn into_parts(self) -> (String, Config) {
        (self.table_name, self.client_config)
    }
}
