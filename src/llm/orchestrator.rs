//! llm/orchestrator.rs
//!
//! Runs the remote generation call on a worker thread so the draw loop
//! never blocks. Results come back over the channel tagged with the
//! session they were spawned for; the drain loop drops stale ones.

use std::sync::mpsc::Sender;
use std::thread;

use crate::llm::client::GeminiClient;
use crate::llm::GenerateError;
use crate::state::{AgentProfile, UserResponses};

pub enum GenEvent {
    Finished {
        session: u64,
        result: Result<AgentProfile, GenerateError>,
    },
}

pub fn spawn_generation(
    tx: Sender<GenEvent>,
    session: u64,
    client: GeminiClient,
    api_key: Option<String>,
    data: UserResponses,
) {
    thread::spawn(move || {
        let result = match api_key {
            Some(key) => client.generate_identity(&key, &data),
            None => Err(GenerateError::CredentialRequired),
        };

        // receiver gone means the app exited; nothing to do
        let _ = tx.send(GenEvent::Finished { session, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::DEFAULT_MODEL;
    use std::sync::mpsc;

    #[test]
    fn missing_key_reports_credential_required() {
        let (tx, rx) = mpsc::channel();
        let data = UserResponses {
            favorite_color: "blue".into(),
            favorite_animal: "shark".into(),
            favorite_snack: "popcorn".into(),
            birth_month: "May".into(),
        };

        spawn_generation(tx, 7, GeminiClient::new(DEFAULT_MODEL), None, data);

        match rx.recv().unwrap() {
            GenEvent::Finished { session, result } => {
                assert_eq!(session, 7);
                assert!(matches!(result, Err(GenerateError::CredentialRequired)));
            }
        }
    }
}
