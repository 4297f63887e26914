//! NDJSON decoding for `/api/pull` progress.
//!
//! The server writes one JSON object per line as the download advances.
//! Chunks from the body do not line up with lines, so bytes are buffered
//! until a newline arrives and each complete line is decoded on its own.

use bytes::{Bytes, BytesMut};
use futures_util::stream::BoxStream;
use futures_util::{Stream, StreamExt};
use lite_llm_core::PullProgressEvent;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{OllamaError, OllamaResult};

/// Progress events of one pull, in arrival order.
///
/// Ends after the `success` event, at end of body, or after the first
/// error. Dropping it releases the connection.
pub type PullStream = BoxStream<'static, OllamaResult<PullProgressEvent>>;

/// State threaded through the `unfold` stream.
struct PullState {
    body: BoxStream<'static, Result<Bytes, String>>,
    buf: BytesMut,
    url: String,
    cancel: CancellationToken,
    done: bool,
}

impl PullState {
    /// Hand out one decoded line, ending the stream after success or an
    /// error.
    fn emit(
        mut self,
        item: OllamaResult<PullProgressEvent>,
    ) -> (OllamaResult<PullProgressEvent>, Self) {
        match &item {
            Ok(event) if event.is_success() => self.done = true,
            Ok(_) => {}
            Err(e) => {
                warn!(url = %self.url, error = %e, "Pull stream aborted");
                self.done = true;
            }
        }
        (item, self)
    }
}

/// Decode a pull response body into progress events.
pub fn decode_pull_stream<S, E>(body: S, url: String, cancel: CancellationToken) -> PullStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + 'static,
{
    let state = PullState {
        body: body.map(|chunk| chunk.map_err(|e| e.to_string())).boxed(),
        buf: BytesMut::new(),
        url,
        cancel,
        done: false,
    };

    futures_util::stream::unfold(state, |mut st| async move {
        if st.done {
            return None;
        }

        loop {
            // Try to extract a complete line from the buffer.
            if let Some(line_end) = find_newline(&st.buf) {
                let line = st.buf.split_to(line_end);
                match decode_line(&line) {
                    Some(item) => return Some(st.emit(item)),
                    None => continue,
                }
            }

            // Need more data from the body.
            let next = tokio::select! {
                biased;
                () = st.cancel.cancelled() => None,
                chunk = st.body.next() => Some(chunk),
            };

            match next {
                None => {
                    st.done = true;
                    return Some((Err(OllamaError::cancelled(st.url.clone())), st));
                }
                Some(Some(Ok(chunk))) => st.buf.extend_from_slice(&chunk),
                Some(Some(Err(reason))) => {
                    st.done = true;
                    let error = OllamaError::unreachable(st.url.clone(), reason);
                    return Some((Err(error), st));
                }
                Some(None) => {
                    // End of body: a final line may lack its newline.
                    st.done = true;
                    let rest = st.buf.split();
                    return match decode_line(&rest) {
                        Some(item) => Some(st.emit(item)),
                        None => {
                            debug!(url = %st.url, "Pull stream ended without success event");
                            None
                        }
                    };
                }
            }
        }
    })
    .boxed()
}

/// Decode one NDJSON line. Blank lines yield `None`.
fn decode_line(line: &[u8]) -> Option<OllamaResult<PullProgressEvent>> {
    let text = String::from_utf8_lossy(line);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let event = match serde_json::from_str::<PullProgressEvent>(trimmed) {
        Ok(event) => event,
        Err(e) => return Some(Err(OllamaError::decode("pull progress line", e))),
    };

    Some(match event.error {
        Some(message) => Err(OllamaError::Remote { message }),
        None => Ok(event),
    })
}

/// Find the first `\n` in `buf`, returning the index *after* it.
fn find_newline(buf: &BytesMut) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n').map(|pos| pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use std::convert::Infallible;

    const URL: &str = "http://localhost:11434/api/pull";

    fn body(chunks: &[&str]) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
        let chunks: Vec<Result<Bytes, Infallible>> = chunks
            .iter()
            .map(|c| Ok(Bytes::from(c.to_string())))
            .collect();
        stream::iter(chunks)
    }

    async fn collect(chunks: &[&str]) -> Vec<OllamaResult<PullProgressEvent>> {
        decode_pull_stream(body(chunks), URL.to_string(), CancellationToken::new())
            .collect()
            .await
    }

    fn statuses(items: &[OllamaResult<PullProgressEvent>]) -> Vec<String> {
        items
            .iter()
            .map(|item| item.as_ref().unwrap().status.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_stops_at_success() {
        let items = collect(&[
            "{\"status\":\"pulling manifest\"}\n{\"status\":\"pulling 6a0746a1ec1a\",\"digest\":\"sha256:6a07\",\"total\":4661211424,\"completed\":1048576}\n",
            "{\"status\":\"verifying sha256 digest\"}\n{\"status\":\"success\"}\n{\"status\":\"after success\"}\n",
        ])
        .await;

        assert_eq!(
            statuses(&items),
            vec![
                "pulling manifest",
                "pulling 6a0746a1ec1a",
                "verifying sha256 digest",
                "success"
            ]
        );
    }

    #[tokio::test]
    async fn test_lines_split_across_chunks() {
        let items = collect(&["{\"stat", "us\":\"pulling manifest\"}", "\n{\"status\":\"succ", "ess\"}\n"]).await;
        assert_eq!(statuses(&items), vec!["pulling manifest", "success"]);
    }

    #[tokio::test]
    async fn test_truncated_stream_ends_cleanly() {
        let items = collect(&["{\"status\":\"pulling manifest\"}\n", "\n  \n"]).await;
        assert_eq!(statuses(&items), vec!["pulling manifest"]);
    }

    #[tokio::test]
    async fn test_final_line_without_newline_is_decoded() {
        let items = collect(&["{\"status\":\"pulling manifest\"}\n{\"status\":\"success\"}"]).await;
        assert_eq!(statuses(&items), vec!["pulling manifest", "success"]);
    }

    #[tokio::test]
    async fn test_malformed_line_aborts() {
        let items = collect(&[
            "{\"status\":\"pulling manifest\"}\n",
            "not json\n{\"status\":\"success\"}\n",
        ])
        .await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(OllamaError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_remote_error_line_aborts() {
        let items = collect(&["{\"error\":\"pull model manifest: file does not exist\"}\n"]).await;
        assert_eq!(items.len(), 1);
        match &items[0] {
            Err(OllamaError::Remote { message }) => assert!(message.contains("file does not exist")),
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_is_unreachable() {
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from_static(b"{\"status\":\"pulling manifest\"}\n")),
            Err("connection reset".to_string()),
        ];
        let items: Vec<_> =
            decode_pull_stream(stream::iter(chunks), URL.to_string(), CancellationToken::new())
                .collect()
                .await;

        assert_eq!(items.len(), 2);
        assert!(items[1].as_ref().unwrap_err().is_unreachable());
    }

    #[tokio::test]
    async fn test_cancellation_surfaces_as_unreachable() {
        let token = CancellationToken::new();
        let pending = stream::pending::<Result<Bytes, Infallible>>();
        let mut events = decode_pull_stream(pending, URL.to_string(), token.clone());

        token.cancel();
        let first = events.next().await.unwrap();
        assert!(first.unwrap_err().is_unreachable());
        assert!(events.next().await.is_none());
    }

    #[test]
    fn test_find_newline() {
        assert_eq!(find_newline(&BytesMut::from("ab\ncd")), Some(3));
        assert_eq!(find_newline(&BytesMut::from("abcd")), None);
    }
}
