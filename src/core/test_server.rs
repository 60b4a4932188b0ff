use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 测试用的本地http服务，按请求到达顺序轮流返回给定的状态行
pub(crate) struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub(crate) async fn start(status_line: &'static str) -> Self {
        TestServer::start_cycle(&[status_line]).await
    }

    pub(crate) async fn start_cycle(status_lines: &[&'static str]) -> Self {
        let status_lines: Arc<Vec<&'static str>> = Arc::new(status_lines.to_vec());
        let served = Arc::new(AtomicUsize::new(0));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            loop {
                let (mut stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                let status_lines = status_lines.clone();
                let served = served.clone();
                tokio::spawn(async move {
                    // 读到请求头结束即可，GET没有请求体
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    let index = served.fetch_add(1, Ordering::SeqCst) % status_lines.len();
                    let status_line = status_lines[index];
                    let response = format!(
                        "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                        status_line
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });
        TestServer { addr, handle }
    }

    pub(crate) fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    // 绑定后立即释放的端口，连接会被拒绝
    pub(crate) async fn unused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/", addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
