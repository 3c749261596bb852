use url::form_urlencoded;

/// Sub-URI of the snapshot management service
pub const SERVICE_PATH: &str = "/SnapshotCloneService";

/// Action requesting the snapshot listing for one file
pub const ACTION_LIST_FILE_SNAPSHOT: &str = "GetFileSnapshotList";

/// Protocol version understood by the service
pub const API_VERSION: &str = "0.0.6";

/// Records requested per page, constant across one listing
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Wildcard snapshot id meaning "no uuid filter"
pub const UUID_WILDCARD: &str = "*";

/// Parameters for one page of the snapshot listing query
///
/// Immutable; advancing to the next page produces a fresh value via
/// [`QueryParams::next_page`] rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    user: String,
    file: String,
    uuid: String,
    limit: u64,
    offset: u64,
}

impl QueryParams {
    /// Build the first-page parameters (offset 0)
    ///
    /// A `uuid` equal to `*` disables the snapshot id filter; the
    /// parameter is then omitted from the request entirely.
    pub fn new(file: impl Into<String>, user: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            file: file.into(),
            uuid: uuid.into(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }

    /// Override the page size (still constant across the listing)
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Pure pagination step: same query, offset advanced by one page
    pub fn next_page(&self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self.clone()
        }
    }

    /// URL-encode the parameters into the service sub-URI
    pub fn to_sub_uri(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("Action", ACTION_LIST_FILE_SNAPSHOT)
            .append_pair("Version", API_VERSION)
            .append_pair("User", &self.user)
            .append_pair("File", &self.file)
            .append_pair("Limit", &self.limit.to_string())
            .append_pair("Offset", &self.offset.to_string());
        if self.uuid != UUID_WILDCARD {
            query.append_pair("UUID", &self.uuid);
        }
        format!("{}?{}", SERVICE_PATH, query.finish())
    }
}
