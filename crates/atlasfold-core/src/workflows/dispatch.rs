use crate::core::decode::{decode_f16_array, decode_json, decode_text};
use crate::core::io::pdb::PdbStructure;
use crate::core::models::embedding::EmbeddingVector;
use crate::core::models::sequence::{ProteinId, Sequence};
use crate::core::models::structure::{ConfidenceSummary, StructurePayload};
use crate::engine::client::{RawResponse, Transport};
use crate::engine::endpoints::{ACCEPT_OCTET_STREAM, ApiRequest, Endpoints};
use crate::engine::error::{DispatchError, HttpError};
use crate::engine::progress::{Progress, ProgressReporter};
use serde_json::Value;
use std::fmt;
use tracing::{error, info, instrument, warn};

pub const PREDICTED_FILE_NAME: &str = "predicted.pdb";
pub const STRUCTURE_MIME_TYPE: &str = "text/plain";
pub const PLDDT_NOTE: &str =
    "plDDT is a per-residue estimate of the confidence in prediction on a scale from 0-100.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Predict,
    FetchStructure,
    FetchConfidence,
    FetchSequence,
    FetchEmbeddingJson,
    FetchEmbeddingBinary,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Predict => "predict",
            Action::FetchStructure => "fetch-structure",
            Action::FetchConfidence => "fetch-confidence",
            Action::FetchSequence => "fetch-sequence",
            Action::FetchEmbeddingJson => "fetch-embedding-json",
            Action::FetchEmbeddingBinary => "fetch-embedding-binary",
        };
        f.write_str(label)
    }
}

/// One user action together with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Predict { sequence: Sequence },
    FetchStructure { id: ProteinId },
    FetchConfidence { id: ProteinId },
    FetchSequence { id: ProteinId },
    FetchEmbeddingJson { id: ProteinId },
    FetchEmbeddingBinary { id: ProteinId },
}

impl Request {
    pub fn action(&self) -> Action {
        match self {
            Request::Predict { .. } => Action::Predict,
            Request::FetchStructure { .. } => Action::FetchStructure,
            Request::FetchConfidence { .. } => Action::FetchConfidence,
            Request::FetchSequence { .. } => Action::FetchSequence,
            Request::FetchEmbeddingJson { .. } => Action::FetchEmbeddingJson,
            Request::FetchEmbeddingBinary { .. } => Action::FetchEmbeddingBinary,
        }
    }
}

/// A file the user may save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl Download {
    fn structure(file_name: String, contents: &str) -> Self {
        Self {
            file_name,
            mime_type: STRUCTURE_MIME_TYPE,
            contents: contents.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionMetrics {
    pub confidence: ConfidenceSummary,
    pub structure: PdbStructure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureView {
    pub heading: String,
    pub payload: StructurePayload,
    /// Present for fresh predictions, which are always analysed.
    pub prediction: Option<PredictionMetrics>,
    pub download: Download,
}

/// The complete, decoded result of one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Structure(StructureView),
    Json { heading: String, value: Value },
    Array {
        heading: String,
        values: EmbeddingVector,
    },
}

/// The externally owned output target.
///
/// The dispatcher writes to a surface only after an action has fully succeeded,
/// or writes a single error banner when it has not.
pub trait DisplaySurface {
    type Error;

    fn show_structure(&mut self, view: &StructureView) -> Result<(), Self::Error>;

    fn show_json(&mut self, heading: &str, value: &Value) -> Result<(), Self::Error>;

    fn show_array(&mut self, heading: &str, values: &EmbeddingVector) -> Result<(), Self::Error>;

    fn show_error(&mut self, message: &str) -> Result<(), Self::Error>;
}

pub fn render<S: DisplaySurface>(outcome: &Outcome, surface: &mut S) -> Result<(), S::Error> {
    match outcome {
        Outcome::Structure(view) => surface.show_structure(view),
        Outcome::Json { heading, value } => surface.show_json(heading, value),
        Outcome::Array { heading, values } => surface.show_array(heading, values),
    }
}

pub fn error_banner(err: &DispatchError) -> String {
    format!("An error occurred: {}", err)
}

pub struct Dispatcher<'a, T> {
    transport: T,
    endpoints: Endpoints,
    reporter: ProgressReporter<'a>,
}

impl<'a, T: Transport> Dispatcher<'a, T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
            reporter: ProgressReporter::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: ProgressReporter<'a>) -> Self {
        self.reporter = reporter;
        self
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the request/decode sequence for `request` without rendering anything.
    #[instrument(skip_all, name = "dispatch", fields(action = %request.action()))]
    pub async fn execute(&self, request: &Request) -> Result<Outcome, DispatchError> {
        info!("Executing action.");
        match request {
            Request::Predict { sequence } => self.predict(sequence).await,
            Request::FetchStructure { id } => self.fetch_structure(id).await,
            Request::FetchConfidence { id } => {
                self.fetch_json(
                    self.endpoints.confidence_prediction(id),
                    format!("Confidence Prediction for {}", id),
                )
                .await
            }
            Request::FetchSequence { id } => {
                self.fetch_json(self.endpoints.sequence(id), format!("Sequence for {}", id))
                    .await
            }
            Request::FetchEmbeddingJson { id } => {
                self.fetch_json(
                    self.endpoints.embedding_json(id),
                    format!("Embedding (JSON) for {}", id),
                )
                .await
            }
            Request::FetchEmbeddingBinary { id } => self.fetch_embedding_binary(id).await,
        }
    }

    /// Executes `request` and renders its outcome, or an error banner on failure.
    ///
    /// Action failures are absorbed here; only errors raised by the surface itself
    /// are returned.
    pub async fn dispatch<S: DisplaySurface>(
        &self,
        request: &Request,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        match self.execute(request).await {
            Ok(outcome) => render(&outcome, surface),
            Err(err) => {
                error!("Action '{}' failed: {}", request.action(), err);
                surface.show_error(&error_banner(&err))
            }
        }
    }

    async fn predict(&self, sequence: &Sequence) -> Result<Outcome, DispatchError> {
        if sequence.is_empty() {
            warn!("Submitting an empty sequence for prediction.");
        }
        info!("Folding a sequence of {} residues.", sequence.len());

        let response = self.send(self.endpoints.fold_sequence(sequence)).await?;
        let (text, structure) = self.phase("Analysing predicted structure", || {
            let text = decode_text(&response.body)?;
            let structure = PdbStructure::parse(&text)?;
            Ok::<_, DispatchError>((text, structure))
        })?;

        let confidence = structure.confidence_summary();
        info!(
            "Prediction returned {} residues with mean plDDT {}.",
            confidence.residue_count, confidence
        );
        self.reporter.report(Progress::Message(format!(
            "{} residues, mean plDDT {}",
            confidence.residue_count, confidence
        )));

        Ok(Outcome::Structure(StructureView {
            heading: "Visualization of predicted protein structure".to_string(),
            download: Download::structure(PREDICTED_FILE_NAME.to_string(), &text),
            payload: StructurePayload::new(text),
            prediction: Some(PredictionMetrics {
                confidence,
                structure,
            }),
        }))
    }

    async fn fetch_structure(&self, id: &ProteinId) -> Result<Outcome, DispatchError> {
        let response = self.send(self.endpoints.predicted_structure(id)).await?;
        let text = self.phase("Decoding structure", || decode_text(&response.body))?;

        Ok(Outcome::Structure(StructureView {
            heading: format!("Visualization of predicted protein structure for {}", id),
            download: Download::structure(format!("{}.pdb", id), &text),
            payload: StructurePayload::new(text),
            prediction: None,
        }))
    }

    async fn fetch_json(
        &self,
        api_request: ApiRequest,
        heading: String,
    ) -> Result<Outcome, DispatchError> {
        let response = self.send(api_request).await?;
        let value = self.phase("Decoding JSON", || decode_json(&response.body))?;
        Ok(Outcome::Json { heading, value })
    }

    async fn fetch_embedding_binary(&self, id: &ProteinId) -> Result<Outcome, DispatchError> {
        let response = self.send(self.endpoints.embedding_binary(id)).await?;
        if let Some(content_type) = response
            .content_type
            .as_deref()
            .filter(|ct| !ct.starts_with(ACCEPT_OCTET_STREAM))
        {
            warn!(
                "Expected {} for a binary embedding but got '{}'; decoding anyway.",
                ACCEPT_OCTET_STREAM, content_type
            );
        }
        let values = self.phase("Decoding float16 embedding", || {
            decode_f16_array(&response.body)
        })?;
        info!("Decoded an embedding of {} values.", values.len());
        self.reporter.report(Progress::Message(format!(
            "Decoded {} float16 values",
            values.len()
        )));

        Ok(Outcome::Array {
            heading: format!("Embedding (Binary) for {}", id),
            values,
        })
    }

    async fn send(&self, api_request: ApiRequest) -> Result<RawResponse, HttpError> {
        self.reporter.report(Progress::PhaseStart {
            name: "Contacting ESM Atlas",
        });
        let result = self.transport.send(api_request).await;
        self.reporter.report(Progress::PhaseFinish);
        result
    }

    fn phase<R>(&self, name: &'static str, work: impl FnOnce() -> R) -> R {
        self.reporter.report(Progress::PhaseStart { name });
        let result = work();
        self.reporter.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode::DecodeError;
    use crate::core::io::pdb::ParseError;
    use crate::core::io::pdb::test_utils::structure_with_confidences;
    use crate::engine::config::DEFAULT_BASE_URL;
    use crate::engine::endpoints::Method;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::convert::Infallible;
    use std::sync::Mutex;

    struct MockTransport {
        responses: Mutex<VecDeque<Result<RawResponse, HttpError>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn replying(responses: Vec<Result<RawResponse, HttpError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, HttpError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(HttpError::transport("no scripted response")))
        }
    }

    #[derive(Debug, PartialEq)]
    enum Shown {
        Structure(StructureView),
        Json(String, Value),
        Array(String, Vec<f32>),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        shown: Vec<Shown>,
    }

    impl DisplaySurface for RecordingSurface {
        type Error = Infallible;

        fn show_structure(&mut self, view: &StructureView) -> Result<(), Infallible> {
            self.shown.push(Shown::Structure(view.clone()));
            Ok(())
        }

        fn show_json(&mut self, heading: &str, value: &Value) -> Result<(), Infallible> {
            self.shown.push(Shown::Json(heading.to_string(), value.clone()));
            Ok(())
        }

        fn show_array(&mut self, heading: &str, values: &EmbeddingVector) -> Result<(), Infallible> {
            self.shown
                .push(Shown::Array(heading.to_string(), values.values().to_vec()));
            Ok(())
        }

        fn show_error(&mut self, message: &str) -> Result<(), Infallible> {
            self.shown.push(Shown::Error(message.to_string()));
            Ok(())
        }
    }

    fn dispatcher(responses: Vec<Result<RawResponse, HttpError>>) -> Dispatcher<'static, MockTransport> {
        Dispatcher::new(
            MockTransport::replying(responses),
            Endpoints::new(DEFAULT_BASE_URL),
        )
    }

    fn server_error() -> Result<RawResponse, HttpError> {
        Err(HttpError::from_status(
            500,
            Some("Internal Server Error"),
            "https://api.esmatlas.com",
            b"internal error",
        ))
    }

    fn id() -> ProteinId {
        ProteinId::new("MGYP000000000001")
    }

    fn all_requests() -> Vec<Request> {
        vec![
            Request::Predict {
                sequence: Sequence::new("AAAA"),
            },
            Request::FetchStructure { id: id() },
            Request::FetchConfidence { id: id() },
            Request::FetchSequence { id: id() },
            Request::FetchEmbeddingJson { id: id() },
            Request::FetchEmbeddingBinary { id: id() },
        ]
    }

    #[tokio::test]
    async fn predict_reports_mean_confidence_of_returned_structure() {
        let pdb = structure_with_confidences(&[10.0, 20.0, 30.0, 40.0]);
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok(pdb.clone()))]);
        let request = Request::Predict {
            sequence: Sequence::new("AAAA"),
        };

        let outcome = dispatcher.execute(&request).await.unwrap();

        let Outcome::Structure(view) = outcome else {
            panic!("expected a structure outcome");
        };
        let metrics = view.prediction.expect("predictions are analysed");
        assert_eq!(metrics.confidence.mean, 25.0);
        assert_eq!(metrics.confidence.residue_count, 4);
        assert_eq!(metrics.structure.sequence(), "AAAA");
        assert_eq!(view.payload.as_str(), pdb);
        assert_eq!(view.download.file_name, "predicted.pdb");
        assert_eq!(view.download.mime_type, "text/plain");
        assert_eq!(view.download.contents, pdb);

        let sent = dispatcher.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "https://api.esmatlas.com/foldSequence/v1/pdb/");
        assert_eq!(sent[0].body.as_deref(), Some("AAAA"));
        assert_eq!(
            sent[0].header_value("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[tokio::test]
    async fn fetch_sequence_displays_json_unchanged() {
        let body = json!({"sequence": "MGS"});
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok(body.to_string()))]);
        let mut surface = RecordingSurface::default();

        dispatcher
            .dispatch(&Request::FetchSequence { id: id() }, &mut surface)
            .await
            .unwrap();

        assert_eq!(
            surface.shown,
            vec![Shown::Json("Sequence for MGYP000000000001".to_string(), body)]
        );
        assert_eq!(
            dispatcher.transport().requests()[0].url,
            "https://api.esmatlas.com/fetchSequence/MGYP000000000001"
        );
    }

    #[tokio::test]
    async fn server_error_shows_only_an_error_banner_for_every_action() {
        for request in all_requests() {
            let dispatcher = dispatcher(vec![server_error()]);
            let mut surface = RecordingSurface::default();

            let err = dispatcher.execute(&request).await.unwrap_err();
            assert!(
                matches!(&err, DispatchError::Http(e) if e.status == Some(500)),
                "{} should fail with an HTTP error",
                request.action()
            );

            let dispatcher = self::dispatcher(vec![server_error()]);
            dispatcher.dispatch(&request, &mut surface).await.unwrap();
            assert_eq!(surface.shown.len(), 1);
            let Shown::Error(message) = &surface.shown[0] else {
                panic!("{} rendered output on failure", request.action());
            };
            assert!(message.starts_with("An error occurred: HTTP request failed: 500"));
        }
    }

    #[tokio::test]
    async fn binary_embedding_of_six_bytes_has_three_values() {
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok(vec![
            0x00, 0x3C, 0x00, 0x38, 0x00, 0x00,
        ]))]);

        let outcome = dispatcher
            .execute(&Request::FetchEmbeddingBinary { id: id() })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Array {
                heading: "Embedding (Binary) for MGYP000000000001".to_string(),
                values: EmbeddingVector::new(vec![1.0, 0.5, 0.0]),
            }
        );
        assert_eq!(
            dispatcher.transport().requests()[0].header_value("Accept"),
            Some("application/octet-stream")
        );
    }

    #[tokio::test]
    async fn odd_length_binary_embedding_is_a_decode_failure() {
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok(vec![0u8; 7]))]);
        let mut surface = RecordingSurface::default();

        dispatcher
            .dispatch(&Request::FetchEmbeddingBinary { id: id() }, &mut surface)
            .await
            .unwrap();

        assert_eq!(surface.shown.len(), 1);
        assert!(matches!(&surface.shown[0], Shown::Error(m) if m.contains("7 bytes")));
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_failure() {
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok("{\"plddt\": [9"))]);

        let err = dispatcher
            .execute(&Request::FetchConfidence { id: id() })
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Decode(DecodeError::Json(_))));
    }

    #[tokio::test]
    async fn predict_with_unrecognizable_payload_renders_nothing_but_the_error() {
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok("<html>Maintenance</html>"))]);
        let mut surface = RecordingSurface::default();
        let request = Request::Predict {
            sequence: Sequence::new("AAAA"),
        };

        let err = dispatcher.execute(&request).await;
        assert!(matches!(
            err,
            Err(DispatchError::Parse(ParseError::NoAtomRecords))
        ));

        let dispatcher = self::dispatcher(vec![Ok(RawResponse::ok("<html>Maintenance</html>"))]);
        dispatcher.dispatch(&request, &mut surface).await.unwrap();
        assert!(matches!(surface.shown.as_slice(), [Shown::Error(_)]));
    }

    #[tokio::test]
    async fn fetched_structure_is_offered_under_the_protein_id() {
        let pdb = structure_with_confidences(&[70.0]);
        let dispatcher = dispatcher(vec![Ok(RawResponse::ok(pdb.clone()))]);

        let outcome = dispatcher
            .execute(&Request::FetchStructure { id: id() })
            .await
            .unwrap();

        let Outcome::Structure(view) = outcome else {
            panic!("expected a structure outcome");
        };
        assert_eq!(
            view.heading,
            "Visualization of predicted protein structure for MGYP000000000001"
        );
        assert_eq!(view.download.file_name, "MGYP000000000001.pdb");
        assert!(view.prediction.is_none());
        assert_eq!(
            dispatcher.transport().requests()[0].url,
            "https://api.esmatlas.com/fetchPredictedStructure/MGYP000000000001"
        );
    }

    #[tokio::test]
    async fn json_lookups_use_their_own_endpoints_and_headings() {
        let cases = [
            (
                Request::FetchConfidence { id: id() },
                "https://api.esmatlas.com/fetchConfidencePrediction/MGYP000000000001",
                "Confidence Prediction for MGYP000000000001",
            ),
            (
                Request::FetchEmbeddingJson { id: id() },
                "https://api.esmatlas.com/fetchEmbedding/ESM2/MGYP000000000001.json",
                "Embedding (JSON) for MGYP000000000001",
            ),
        ];

        for (request, url, heading) in cases {
            let dispatcher = dispatcher(vec![Ok(RawResponse::ok("[1, 2, 3]"))]);
            let outcome = dispatcher.execute(&request).await.unwrap();
            assert_eq!(
                outcome,
                Outcome::Json {
                    heading: heading.to_string(),
                    value: json!([1, 2, 3]),
                }
            );
            assert_eq!(dispatcher.transport().requests()[0].url, url);
        }
    }

    #[tokio::test]
    async fn repeated_actions_are_independent() {
        let body = json!({"sequence": "MGS"}).to_string();
        let dispatcher = dispatcher(vec![
            server_error(),
            Ok(RawResponse::ok(body.clone())),
            Ok(RawResponse::ok(body)),
        ]);
        let request = Request::FetchSequence { id: id() };

        assert!(dispatcher.execute(&request).await.is_err());
        let first = dispatcher.execute(&request).await.unwrap();
        let second = dispatcher.execute(&request).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(dispatcher.transport().requests().len(), 3);
    }

    #[tokio::test]
    async fn progress_phases_are_balanced_even_on_failure() {
        let events = Mutex::new(Vec::new());
        let dispatcher = Dispatcher::new(
            MockTransport::replying(vec![Ok(RawResponse::ok("not json"))]),
            Endpoints::new(DEFAULT_BASE_URL),
        )
        .with_reporter(ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(p);
        })));

        let _ = dispatcher
            .execute(&Request::FetchSequence { id: id() })
            .await;
        drop(dispatcher);

        let events = events.into_inner().unwrap();
        let starts = events
            .iter()
            .filter(|e| matches!(e, Progress::PhaseStart { .. }))
            .count();
        let finishes = events
            .iter()
            .filter(|e| matches!(e, Progress::PhaseFinish))
            .count();
        assert_eq!(starts, 2);
        assert_eq!(finishes, 2);
    }

    fn recording_dispatcher<'a>(
        responses: Vec<Result<RawResponse, HttpError>>,
        events: &'a Mutex<Vec<Progress>>,
    ) -> Dispatcher<'a, MockTransport> {
        Dispatcher::new(
            MockTransport::replying(responses),
            Endpoints::new(DEFAULT_BASE_URL),
        )
        .with_reporter(ProgressReporter::with_callback(Box::new(move |p| {
            events.lock().unwrap().push(p);
        })))
    }

    fn messages(events: Mutex<Vec<Progress>>) -> Vec<String> {
        events
            .into_inner()
            .unwrap()
            .into_iter()
            .filter_map(|e| match e {
                Progress::Message(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn binary_embedding_reports_its_value_count() {
        let events = Mutex::new(Vec::new());
        let dispatcher = recording_dispatcher(vec![Ok(RawResponse::ok(vec![0u8; 8]))], &events);

        dispatcher
            .execute(&Request::FetchEmbeddingBinary { id: id() })
            .await
            .unwrap();
        drop(dispatcher);

        assert_eq!(messages(events), vec!["Decoded 4 float16 values".to_string()]);
    }

    #[tokio::test]
    async fn prediction_reports_its_summary() {
        let events = Mutex::new(Vec::new());
        let pdb = structure_with_confidences(&[10.0, 20.0, 30.0, 40.0]);
        let dispatcher = recording_dispatcher(vec![Ok(RawResponse::ok(pdb))], &events);

        dispatcher
            .execute(&Request::Predict {
                sequence: Sequence::new("AAAA"),
            })
            .await
            .unwrap();
        drop(dispatcher);

        assert_eq!(
            messages(events),
            vec!["4 residues, mean plDDT 25.0".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_actions_report_no_messages() {
        let events = Mutex::new(Vec::new());
        let dispatcher = recording_dispatcher(vec![server_error()], &events);

        let _ = dispatcher
            .execute(&Request::FetchEmbeddingBinary { id: id() })
            .await;
        drop(dispatcher);

        assert!(messages(events).is_empty());
    }

    #[tokio::test]
    async fn binary_embedding_with_unexpected_content_type_still_decodes() {
        let response = RawResponse {
            status: 200,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: bytes::Bytes::from_static(&[0x00, 0x3C]),
        };
        let dispatcher = dispatcher(vec![Ok(response)]);

        let outcome = dispatcher
            .execute(&Request::FetchEmbeddingBinary { id: id() })
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Array { values, .. } if values.values() == [1.0]));
    }

    #[test]
    fn requests_map_to_their_actions() {
        let actions: Vec<Action> = all_requests().iter().map(Request::action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Predict,
                Action::FetchStructure,
                Action::FetchConfidence,
                Action::FetchSequence,
                Action::FetchEmbeddingJson,
                Action::FetchEmbeddingBinary,
            ]
        );
        assert_eq!(Action::FetchEmbeddingBinary.to_string(), "fetch-embedding-binary");
    }
}
