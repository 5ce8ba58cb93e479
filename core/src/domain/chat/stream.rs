use std::time::Duration;

use futures::{Stream, stream};

/// Character-wise producer for a precomposed reply. The inter-fragment
/// delay paces the client-side typing animation; `Duration::ZERO` disables
/// sleeping entirely so tests run without real time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyStream {
    fragments: Vec<String>,
    delay: Duration,
}

impl ReplyStream {
    pub fn from_text(text: &str, delay: Duration) -> Self {
        Self {
            fragments: text.chars().map(|c| c.to_string()).collect(),
            delay,
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The reply reassembled, mostly for tests and persistence.
    pub fn text(&self) -> String {
        self.fragments.concat()
    }

    pub fn into_stream(self) -> impl Stream<Item = String> + Send {
        let delay = self.delay;
        stream::unfold(self.fragments.into_iter(), move |mut iter| async move {
            let fragment = iter.next()?;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Some((fragment, iter))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn zero_delay_stream_reassembles_text() {
        let reply = ReplyStream::from_text("안녕 hello", Duration::ZERO);
        let collected: Vec<String> = reply.into_stream().collect().await;
        assert_eq!(collected.concat(), "안녕 hello");
        // One fragment per character, multi-byte characters intact.
        assert_eq!(collected.len(), "안녕 hello".chars().count());
    }

    #[test]
    fn empty_text_has_no_fragments() {
        let reply = ReplyStream::from_text("", Duration::ZERO);
        assert!(reply.fragments().is_empty());
    }
}
