use serde::Serialize;

use super::types::Transaction;

pub const CSV_MEDIA_TYPE: &str = "text/csv";

pub const MSG_INVALID_FILE: &str = "Please select a valid CSV file";
pub const MSG_NO_FILE: &str = "Please select a CSV file to upload";
pub const MSG_GENERIC_FAILURE: &str = "An error occurred while processing the data";

/// A user-chosen local file with its declared media type. Held in memory
/// only for the lifetime of the selection; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Raw HTTP settlement of one scoring request: status plus unparsed body.
/// Interpreting the body (including whether it parses at all) is the
/// state machine's job, so parse failures still settle the submission.
#[derive(Debug, Clone)]
pub struct ScoreResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A transport-level failure before any HTTP status was obtained.
/// `message` is `None` when the failure carries no useful description,
/// in which case the UI falls back to a generic message.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Network seam for submissions. The production implementation posts the
/// file to the relay; tests substitute a stub to drive state transitions
/// deterministically.
pub trait ScoreBackend {
    async fn score(&self, file: &SelectedFile) -> Result<ScoreResponse, TransportError>;
}

/// The whole of the upload client's view state. Mutated only by
/// `select_file` and `submit`; everything shown to the user beyond these
/// four fields is derived per render (see `client::view`).
#[derive(Debug, Default, Serialize)]
pub struct UploadState {
    pub file: Option<SelectedFile>,
    pub loading: bool,
    pub results: Vec<Transaction>,
    pub error: Option<String>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept or reject a candidate file based on its declared media type.
    /// Anything other than exactly `text/csv` clears the selection.
    /// The documented 10MB size guidance is not enforced here.
    pub fn select_file(&mut self, candidate: SelectedFile) {
        if candidate.media_type == CSV_MEDIA_TYPE {
            self.file = Some(candidate);
            self.error = None;
        } else {
            self.error = Some(MSG_INVALID_FILE.to_string());
            self.file = None;
        }
    }

    /// Submit the selected file for scoring and settle the outcome into
    /// `results` or `error`. `loading` is raised at the start and dropped
    /// exactly once after settlement, whichever way the request ends.
    pub async fn submit<B: ScoreBackend>(&mut self, backend: &B) {
        let file = match &self.file {
            Some(file) => file.clone(),
            None => {
                self.error = Some(MSG_NO_FILE.to_string());
                return;
            }
        };

        self.loading = true;
        self.error = None;
        self.results.clear();

        let outcome = run_submission(backend, &file).await;

        self.loading = false;
        match outcome {
            Ok(results) => self.results = results,
            Err(message) => self.error = Some(message),
        }
    }
}

async fn run_submission<B: ScoreBackend>(
    backend: &B,
    file: &SelectedFile,
) -> Result<Vec<Transaction>, String> {
    let response = backend
        .score(file)
        .await
        .map_err(|e| e.message.unwrap_or_else(|| MSG_GENERIC_FAILURE.to_string()))?;

    if !(200..300).contains(&response.status) {
        return Err(format!("HTTP error! status: {}", response.status));
    }

    serde_json::from_slice(&response.body).map_err(|e| e.to_string())
}

/// Production `ScoreBackend`: posts the file as one multipart `file` field
/// to the relay endpoint.
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl ScoreBackend for RelayClient {
    async fn score(&self, file: &SelectedFile) -> Result<ScoreResponse, TransportError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|e| TransportError::new(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?
            .to_vec();

        Ok(ScoreResponse { status, body })
    }
}
