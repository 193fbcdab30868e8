use crate::*;
use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};
use tokio::{sync::watch, task::JoinHandle, time::sleep};
use walkmap_core::usecases;

/// Quiet period after the last keystroke before a lookup is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Drives the suggestions of one address input field.
///
/// Keystrokes are debounced and every lookup is tagged so that a
/// superseded response never overwrites a more recent list. The
/// controller must be used from within a tokio runtime.
pub struct SuggestionController<G: ?Sized> {
    field_id: String,
    gateway: Arc<G>,
    debounce: Duration,
    field: Arc<Mutex<SuggestionField>>,
    lookup_task: Option<JoinHandle<()>>,
    updates: Arc<watch::Sender<Vec<AddressSuggestion>>>,
}

impl<G> SuggestionController<G>
where
    G: GeoCodingGateway + ?Sized + 'static,
{
    pub fn new(field_id: impl Into<String>, gateway: Arc<G>, debounce: Duration) -> Self {
        let (updates, _) = watch::channel(Vec::new());
        Self {
            field_id: field_id.into(),
            gateway,
            debounce,
            field: Default::default(),
            lookup_task: None,
            updates: Arc::new(updates),
        }
    }

    /// Receives the suggestion list whenever it changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<AddressSuggestion>> {
        self.updates.subscribe()
    }

    pub fn suggestions(&self) -> Vec<AddressSuggestion> {
        self.field.lock().suggestions().to_vec()
    }

    pub fn resolved(&self) -> Option<ResolvedAddress> {
        self.field.lock().resolved().cloned()
    }

    pub fn value(&self) -> String {
        self.field.lock().value().to_owned()
    }

    pub fn state(&self) -> FieldState {
        self.field.lock().state()
    }

    pub fn input(&mut self, value: &str) {
        self.cancel_lookup();
        let mut field = self.field.lock();
        let Some(Lookup { seq, query }) = field.input(value) else {
            publish(&self.updates, &field);
            return;
        };
        drop(field);
        let field = Arc::clone(&self.field);
        let gateway = Arc::clone(&self.gateway);
        let updates = Arc::clone(&self.updates);
        let field_id = self.field_id.clone();
        let debounce = self.debounce;
        let task = tokio::spawn(async move {
            sleep(debounce).await;
            if !field.lock().is_current(seq) {
                return;
            }
            debug!("Looking up suggestions for '{query}' ({field_id})");
            let suggestions = usecases::suggest_addresses(&*gateway, &query)
                .await
                .unwrap_or_else(|err| {
                    warn!("Unable to fetch suggestions for '{query}' ({field_id}): {err}");
                    vec![]
                });
            let mut field = field.lock();
            if field.show_suggestions(seq, suggestions) {
                publish(&updates, &field);
            }
        });
        self.lookup_task = Some(task);
    }

    /// Selects a displayed suggestion as the resolved address of the field.
    ///
    /// Returns `None` if the suggestion is not displayed anymore.
    pub fn select(&mut self, suggestion: &AddressSuggestion) -> Option<ResolvedAddress> {
        let mut field = self.field.lock();
        let resolved = field.select(suggestion).cloned()?;
        publish(&self.updates, &field);
        drop(field);
        self.cancel_lookup();
        info!(
            "Resolved '{}' to {},{} ({})",
            resolved.name,
            resolved.pos.lat(),
            resolved.pos.lng(),
            self.field_id
        );
        Some(resolved)
    }

    pub fn dismiss(&mut self) {
        self.cancel_lookup();
        let mut field = self.field.lock();
        field.dismiss();
        publish(&self.updates, &field);
    }

    fn cancel_lookup(&mut self) {
        if let Some(task) = self.lookup_task.take() {
            task.abort();
        }
    }
}

impl<G: ?Sized> Drop for SuggestionController<G> {
    fn drop(&mut self) {
        if let Some(task) = self.lookup_task.take() {
            task.abort();
        }
    }
}

fn publish(updates: &watch::Sender<Vec<AddressSuggestion>>, field: &SuggestionField) {
    updates.send_if_modified(|current| {
        if current.as_slice() == field.suggestions() {
            return false;
        }
        *current = field.suggestions().to_vec();
        true
    });
}
