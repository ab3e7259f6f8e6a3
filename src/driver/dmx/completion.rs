use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use crate::common::error::DriverError;

/// completion of one queued write
///
/// Resolves once, with `Ok(())` when the bytes reached the port or with the
/// transport error. Dropping the handle discards the result.
#[derive(Debug)]
pub struct WriteHandle {
    rx: oneshot::Receiver<Result<(), DriverError>>,
}

impl WriteHandle {
    pub(crate) fn new(rx: oneshot::Receiver<Result<(), DriverError>>) -> Self {
        WriteHandle { rx }
    }

    /// a handle that is already resolved
    pub fn completed(result: Result<(), DriverError>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        WriteHandle { rx }
    }

    /// call `callback` with the result once the write finishes
    ///
    /// Must be called inside a tokio runtime.
    pub fn on_complete<F>(self, callback: F)
    where
        F: FnOnce(Result<(), DriverError>) + Send + 'static,
    {
        tokio::spawn(async move {
            callback(self.await);
        });
    }
}

impl Future for WriteHandle {
    type Output = Result<(), DriverError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(result) => result,
            Err(_) => Err(DriverError::transport("serial worker stopped before the write finished")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ErrorCode;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_completed() {
        assert_eq!(WriteHandle::completed(Ok(())).await, Ok(()));
    }

    #[tokio::test]
    async fn test_worker_gone() {
        let (tx, rx) = oneshot::channel();
        drop(tx);
        let err = WriteHandle::new(rx).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TransportError);
    }

    #[tokio::test]
    async fn test_on_complete_called_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        WriteHandle::completed(Err(DriverError::transport("boom"))).on_complete(move |result| {
            let _ = tx.send(result);
        });
        let result = rx.recv().await.unwrap();
        assert_eq!(result.unwrap_err().msg, "boom");
        assert!(rx.recv().await.is_none());
    }
}
