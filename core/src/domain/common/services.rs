use crate::domain::{
    chat::{composer::MedicationResponder, ports::CompletionClient},
    common::StreamConfig,
    user::ports::UserProfileRepository,
};

/// Aggregate service the API layer talks to. Generic over the profile store
/// and the completion client so tests can swap in mocks.
pub struct Service<P, L>
where
    P: UserProfileRepository,
    L: CompletionClient,
{
    pub(crate) user_repository: P,
    pub(crate) completion_client: Option<L>,
    pub(crate) responder: MedicationResponder,
    pub(crate) stream: StreamConfig,
}

impl<P, L> Service<P, L>
where
    P: UserProfileRepository,
    L: CompletionClient,
{
    pub fn new(
        user_repository: P,
        completion_client: Option<L>,
        responder: MedicationResponder,
        stream: StreamConfig,
    ) -> Self {
        Self {
            user_repository,
            completion_client,
            responder,
            stream,
        }
    }
}
