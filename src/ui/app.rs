use crate::actions::{ActionCreators, ActionKind, Dispatcher};
use crate::api::{ApiClient, NewPost, Post};
use crate::mvi::Reducer;
use crate::store::{PostStore, PostsOutcome};
use crate::ui::events::AppEvent;
use crate::ui::form::{validate, FormIntent, FormReducer, FormState};
use crate::ui::route::Route;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// Post cache (MVI pattern, fed by resolved requests).
    store: PostStore,
    actions: ActionCreators,
    dispatcher: Dispatcher,
    /// Used by success continuations to request navigation.
    events: Sender<AppEvent>,
    /// Highlighted row on the list screen.
    selection: usize,
    /// Detail screen is waiting for the user to confirm a delete.
    confirm_delete: bool,
    /// State of the create form (MVI pattern).
    form: FormState,
    last_error: Option<String>,
}

impl App {
    pub fn new(api: ApiClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        let outcomes = events.clone();
        let failures = events.clone();
        let dispatcher = Dispatcher::new(runtime, move |outcome| {
            let _ = outcomes.send(AppEvent::Resolved(outcome));
        })
        .with_error_reporter(move |kind, err| {
            let _ = failures.send(AppEvent::RequestFailed(kind, err.user_message()));
        });

        Self {
            should_quit: false,
            route: Route::Index,
            store: PostStore::init(),
            actions: ActionCreators::new(api),
            dispatcher,
            events,
            selection: 0,
            confirm_delete: false,
            form: FormState::default(),
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Post shown on the detail screen, once it is in the store.
    pub fn current_post(&self) -> Option<&Post> {
        match &self.route {
            Route::Show(id) => self.store.post(id),
            _ => None,
        }
    }

    /// Switch screens and run the new screen's mount work.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "Navigating");
        self.route = route.clone();
        self.confirm_delete = false;
        self.last_error = None;

        match route {
            Route::Index => {
                self.clamp_selection();
                self.dispatcher.dispatch(self.actions.fetch_posts());
            }
            Route::Show(id) => {
                if !self.store.posts().contains(&id) {
                    self.dispatcher.dispatch(self.actions.fetch_post(id));
                }
            }
            Route::New => self.dispatch_form(FormIntent::Reset),
        }
    }

    /// Apply a resolved outcome to the store.
    pub fn on_outcome(&mut self, outcome: PostsOutcome) {
        if self.store.apply(outcome) {
            self.clamp_selection();
        }
    }

    /// Show a failed request in the footer.
    ///
    /// Only a failed create re-enables the form; other requests still in
    /// flight from earlier screens leave a pending submit alone. A failed
    /// delete has already dropped the post, so the detail screen fetches it
    /// again.
    pub fn on_request_failed(&mut self, kind: ActionKind, message: String) {
        match kind {
            ActionKind::CreatePost if self.form.submitting => {
                self.dispatch_form(FormIntent::SubmitFailed);
            }
            ActionKind::DeletePost => {
                if let Route::Show(id) = &self.route {
                    if !self.store.posts().contains(id) {
                        self.dispatcher.dispatch(self.actions.fetch_post(id.clone()));
                    }
                }
            }
            _ => {}
        }
        self.last_error = Some(message);
    }

    pub fn on_tick(&mut self) {}

    // ========================================================================
    // List screen
    // ========================================================================

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.store.posts().len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn open_selected(&mut self) {
        let Some(id) = self
            .store
            .posts()
            .iter()
            .nth(self.selection)
            .map(|post| post.id.clone())
        else {
            return;
        };
        self.navigate(Route::Show(id));
    }

    pub fn reload_posts(&mut self) {
        self.dispatcher.dispatch(self.actions.fetch_posts());
    }

    // ========================================================================
    // Detail screen
    // ========================================================================

    pub fn request_delete(&mut self) {
        if matches!(self.route, Route::Show(_)) {
            self.confirm_delete = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Delete the shown post. Returns to the list once the service confirmed.
    pub fn confirm_delete(&mut self) {
        let Route::Show(id) = &self.route else {
            return;
        };
        if !self.confirm_delete {
            return;
        }
        self.confirm_delete = false;

        let events = self.events.clone();
        self.dispatcher
            .dispatch_then(self.actions.delete_post(id.clone()), move || {
                let _ = events.send(AppEvent::Navigate(Route::Index));
            });
    }

    // ========================================================================
    // Create screen (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the form reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Validate and, when the form is complete, create the post. Returns to
    /// the list once the service confirmed.
    pub fn submit_form(&mut self) {
        if self.form.submitting {
            return;
        }
        self.dispatch_form(FormIntent::TouchAll);

        let errors = validate(&self.form.values);
        if let Some(first) = errors.keys().next() {
            self.dispatch_form(FormIntent::Focus(*first));
            return;
        }

        self.dispatch_form(FormIntent::SubmitStarted);
        let post = NewPost::from(self.form.values.clone());
        let events = self.events.clone();
        self.dispatcher
            .dispatch_then(self.actions.create_post(post), move || {
                let _ = events.send(AppEvent::Navigate(Route::Index));
            });
    }

    fn clamp_selection(&mut self) {
        let len = self.store.posts().len();
        if len == 0 {
            self.selection = 0;
        } else if self.selection >= len {
            self.selection = len - 1;
        }
    }
}
