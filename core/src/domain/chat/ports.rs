use std::future::Future;
use std::pin::Pin;

use futures::Stream;

use crate::domain::{
    chat::entities::CompletionParams, common::entities::app_errors::CoreError,
};

/// Token fragments from an upstream model. An `Err` item surfaces in-band
/// and ends the stream.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, CoreError>> + Send>>;

/// Streaming client for the optional upstream language model.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn stream_chat(
        &self,
        params: CompletionParams,
    ) -> impl Future<Output = Result<TokenStream, CoreError>> + Send;
}
