use std::sync::Arc;

use yakjangsu_core::{
    application::YakjangsuService,
    infrastructure::{
        conversations::proxy_client::ConversationsProxyClient,
        drug_info::data_go_client::DataGoKrClient,
    },
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<YakjangsuService>,
    /// Present only when a data.go.kr service key is configured.
    pub drug_info_client: Option<Arc<DataGoKrClient>>,
    pub conversations_client: Arc<ConversationsProxyClient>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: YakjangsuService,
        drug_info_client: Option<DataGoKrClient>,
        conversations_client: ConversationsProxyClient,
    ) -> Self {
        Self {
            args,
            service: Arc::new(service),
            drug_info_client: drug_info_client.map(Arc::new),
            conversations_client: Arc::new(conversations_client),
        }
    }
}
