use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::ApiError;
use crate::store::PostsOutcome;

use super::action::{ActionKind, Pending, PostAction};

/// Receives outcomes in resolution order.
pub type OutcomeSink = Arc<dyn Fn(PostsOutcome) + Send + Sync>;

/// Receives request failures, tagged with the kind of action that failed.
pub type ErrorReporter = Arc<dyn Fn(ActionKind, &ApiError) + Send + Sync>;

/// Errors surfaced through a [`Completion`].
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request task was dropped before it reported (runtime shut down).
    #[error("Request task ended before reporting a result")]
    Abandoned,
}

/// Resolves once the request behind a dispatched action finished.
///
/// Await it to run follow-up work (navigation) only after the service
/// confirmed the request.
pub struct Completion {
    receiver: oneshot::Receiver<Result<(), ApiError>>,
}

impl Future for Completion {
    type Output = Result<(), DispatchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|received| match received {
            Ok(result) => result.map_err(DispatchError::Api),
            Err(_) => Err(DispatchError::Abandoned),
        })
    }
}

/// Resolves pending requests and hands their outcomes to the store.
///
/// Requests run as tasks on the given runtime. Outcomes are pushed into the
/// sink as each request resolves; nothing is de-duplicated or cancelled.
#[derive(Clone)]
pub struct Dispatcher {
    runtime: Handle,
    sink: OutcomeSink,
    reporter: Option<ErrorReporter>,
}

impl Dispatcher {
    pub fn new(runtime: Handle, sink: impl Fn(PostsOutcome) + Send + Sync + 'static) -> Self {
        Self {
            runtime,
            sink: Arc::new(sink),
            reporter: None,
        }
    }

    /// Report every failed request to `reporter` in addition to the
    /// completion.
    pub fn with_error_reporter(
        mut self,
        reporter: impl Fn(ActionKind, &ApiError) + Send + Sync + 'static,
    ) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Dispatch an action. Dropping the returned completion does not cancel
    /// the request.
    pub fn dispatch(&self, action: PostAction) -> Completion {
        let (sender, receiver) = oneshot::channel();
        self.spawn(action, move |result| {
            let _ = sender.send(result);
        });
        Completion { receiver }
    }

    /// Dispatch an action and run `on_success` once the service confirmed it.
    /// Never runs on failure.
    pub fn dispatch_then(&self, action: PostAction, on_success: impl FnOnce() + Send + 'static) {
        self.spawn(action, move |result| {
            if result.is_ok() {
                on_success();
            }
        });
    }

    fn spawn(
        &self,
        action: PostAction,
        finish: impl FnOnce(Result<(), ApiError>) + Send + 'static,
    ) {
        let request_id = Uuid::new_v4();
        let kind = action.kind();
        let span = tracing::info_span!("post_request", %request_id, kind = kind.as_str());

        let (immediate, request) = match action {
            PostAction::ListPosts(request) => (
                None,
                resolve(async move {
                    request.await.map(|posts| Some(PostsOutcome::PostsLoaded(posts)))
                }),
            ),
            PostAction::GetPost(request) => (
                None,
                resolve(async move { request.await.map(|post| Some(PostsOutcome::PostLoaded(post))) }),
            ),
            PostAction::CreatePost(request) => (
                None,
                resolve(async move { request.await.map(|()| Some(PostsOutcome::PostCreated)) }),
            ),
            // The id is already resolved, so the store drops it right away.
            PostAction::DeletePost { id, request } => (
                Some(PostsOutcome::PostDeleted(id)),
                resolve(async move { request.await.map(|()| None) }),
            ),
        };

        if let Some(outcome) = immediate {
            span.in_scope(|| tracing::debug!("Applying outcome at dispatch"));
            (self.sink)(outcome);
        }

        let sink = Arc::clone(&self.sink);
        let reporter = self.reporter.clone();
        self.runtime.spawn(
            async move {
                tracing::debug!("Request dispatched");
                match request.await {
                    Ok(outcome) => {
                        tracing::debug!("Request resolved");
                        if let Some(outcome) = outcome {
                            sink(outcome);
                        }
                        finish(Ok(()));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Request failed");
                        if let Some(reporter) = &reporter {
                            reporter(kind, &err);
                        }
                        finish(Err(err));
                    }
                }
            }
            .instrument(span),
        );
    }
}

fn resolve<F>(request: F) -> Pending<Option<PostsOutcome>>
where
    F: Future<Output = Result<Option<PostsOutcome>, ApiError>> + Send + 'static,
{
    Box::pin(request)
}
