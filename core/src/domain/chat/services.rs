use std::future::Future;

use futures::StreamExt;

use crate::domain::{
    chat::{
        entities::{ChatMessage, CompletionParams},
        ports::{CompletionClient, TokenStream},
        stream::ReplyStream,
    },
    common::{entities::app_errors::CoreError, services::Service},
    user::{ports::UserProfileRepository, value_objects::SaveConversationInput},
};

pub trait ChatService: Send + Sync {
    /// Runs the full rule pipeline for the last message and returns the
    /// paced fragment stream. When a known profile is attached the exchange
    /// is persisted before the stream starts.
    fn respond(
        &self,
        messages: Vec<ChatMessage>,
        user_id: Option<String>,
    ) -> impl Future<Output = Result<ReplyStream, CoreError>> + Send;

    /// Raw completion passthrough. Streams from the configured LLM when one
    /// is set up, otherwise echoes a paced demo stream.
    fn generate(
        &self,
        params: CompletionParams,
    ) -> impl Future<Output = Result<TokenStream, CoreError>> + Send;
}

impl<P, L> ChatService for Service<P, L>
where
    P: UserProfileRepository,
    L: CompletionClient,
{
    async fn respond(
        &self,
        messages: Vec<ChatMessage>,
        user_id: Option<String>,
    ) -> Result<ReplyStream, CoreError> {
        let user_message = messages
            .last()
            .map(|m| m.content.clone())
            .ok_or_else(|| CoreError::Invalid("messages must not be empty".into()))?;

        let profile = match &user_id {
            Some(id) => self.user_repository.get_profile(id).await?,
            None => None,
        };

        let reply = self.responder.respond(&user_message, profile.as_ref());

        if let Some(id) = &user_id
            && profile.is_some()
        {
            self.user_repository
                .save_conversation(
                    id,
                    SaveConversationInput {
                        user_message,
                        assistant_message: reply.text.clone(),
                        symptoms: reply.symptoms.clone(),
                        recommended_medications: reply.recommended_medications.clone(),
                    },
                )
                .await?;
            self.user_repository.update_characteristics(id).await?;
        }

        Ok(ReplyStream::from_text(&reply.text, self.stream.reply_delay))
    }

    async fn generate(&self, params: CompletionParams) -> Result<TokenStream, CoreError> {
        if let Some(client) = &self.completion_client {
            return client.stream_chat(params).await;
        }

        let reply = match params.last_user_content().map(str::trim) {
            Some(base) if !base.is_empty() => {
                format!("당신의 입력: \"{base}\" 를 잘 받았습니다. 이것은 데모 스트림입니다.")
            }
            _ => "안녕하세요! 이것은 데모 스트림 응답입니다.".to_string(),
        };
        let stream = ReplyStream::from_text(&reply, self.stream.completion_delay).into_stream();
        Ok(Box::pin(stream.map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::TryStreamExt;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        chat::{
            composer::MedicationResponder,
            entities::{ChatMessage, Role},
            ports::MockCompletionClient,
        },
        common::StreamConfig,
        user::{entities::UserProfile, ports::MockUserProfileRepository},
    };

    fn zero_delay() -> StreamConfig {
        StreamConfig {
            reply_delay: Duration::ZERO,
            completion_delay: Duration::ZERO,
        }
    }

    fn service(
        repository: MockUserProfileRepository,
        client: Option<MockCompletionClient>,
    ) -> Service<MockUserProfileRepository, MockCompletionClient> {
        Service::new(
            repository,
            client,
            MedicationResponder::bundled(),
            zero_delay(),
        )
    }

    fn user_message(content: &str) -> Vec<ChatMessage> {
        vec![ChatMessage {
            role: Role::User,
            content: content.to_string(),
        }]
    }

    #[tokio::test]
    async fn empty_messages_are_rejected() {
        let service = service(MockUserProfileRepository::new(), None);
        let err = service.respond(Vec::new(), None).await.unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn anonymous_chat_skips_persistence() {
        let mut repository = MockUserProfileRepository::new();
        repository.expect_get_profile().never();
        repository.expect_save_conversation().never();

        let service = service(repository, None);
        let reply = service
            .respond(user_message("두통이 있어요"), None)
            .await
            .unwrap();
        assert!(reply.text().contains("타이레놀정"));
    }

    #[tokio::test]
    async fn known_user_chat_is_persisted() {
        let mut repository = MockUserProfileRepository::new();
        repository
            .expect_get_profile()
            .with(eq("user001"))
            .returning(|_| Box::pin(async { Ok(Some(UserProfile::new("user001", "홍길동"))) }));
        repository
            .expect_save_conversation()
            .withf(|id, input| {
                id == "user001"
                    && input.symptoms == vec!["두통".to_string()]
                    && input.recommended_medications.contains(&"타이레놀정".to_string())
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        repository
            .expect_update_characteristics()
            .with(eq("user001"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = service(repository, None);
        let reply = service
            .respond(user_message("두통이 있어요"), Some("user001".to_string()))
            .await
            .unwrap();
        assert!(reply.text().contains("홍길동님의 체질"));
    }

    #[tokio::test]
    async fn unknown_user_id_still_replies_without_persisting() {
        let mut repository = MockUserProfileRepository::new();
        repository
            .expect_get_profile()
            .returning(|_| Box::pin(async { Ok(None) }));
        repository.expect_save_conversation().never();

        let service = service(repository, None);
        let reply = service
            .respond(user_message("두통이 있어요"), Some("ghost".to_string()))
            .await
            .unwrap();
        assert!(reply.text().contains("타이레놀정"));
    }

    #[tokio::test]
    async fn generate_without_client_echoes_demo_stream() {
        let service = service(MockUserProfileRepository::new(), None);
        let params = CompletionParams {
            messages: user_message("테스트"),
            ..Default::default()
        };
        let tokens: Vec<String> = service
            .generate(params)
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(
            tokens.concat(),
            "당신의 입력: \"테스트\" 를 잘 받았습니다. 이것은 데모 스트림입니다."
        );
    }

    #[tokio::test]
    async fn generate_surfaces_mid_stream_client_errors_in_band() {
        let mut client = MockCompletionClient::new();
        client.expect_stream_chat().times(1).returning(|_| {
            Box::pin(async {
                let stream = futures::stream::iter(vec![
                    Ok("부분".to_string()),
                    Err(CoreError::ExternalServiceError("upstream closed".to_string())),
                ]);
                Ok(Box::pin(stream) as TokenStream)
            })
        });

        let service = service(MockUserProfileRepository::new(), Some(client));
        let params = CompletionParams {
            messages: user_message("무엇이든"),
            ..Default::default()
        };
        let items: Vec<Result<String, CoreError>> = service
            .generate(params)
            .await
            .unwrap()
            .collect()
            .await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_deref(), Ok("부분"));
        assert!(matches!(
            items[1],
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn generate_prefers_configured_client() {
        let mut client = MockCompletionClient::new();
        client.expect_stream_chat().times(1).returning(|_| {
            Box::pin(async {
                let stream = futures::stream::iter(vec![Ok("llm".to_string())]);
                Ok(Box::pin(stream) as TokenStream)
            })
        });

        let service = service(MockUserProfileRepository::new(), Some(client));
        let params = CompletionParams {
            messages: user_message("무엇이든"),
            ..Default::default()
        };
        let tokens: Vec<String> = service
            .generate(params)
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(tokens, vec!["llm".to_string()]);
    }
}
