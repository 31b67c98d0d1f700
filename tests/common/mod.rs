//! Common test utilities and helpers

#![allow(dead_code)]

use async_trait::async_trait;
use social_icons_core::{
    config::CdnSettings, IconLocator, IconProbe, IconRef, ProbeFailure, Resolver,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const ICONS: &str = "https://cdn.jsdelivr.net/npm/simple-icons@latest/icons";

/// Probe that knows a fixed set of icon names and records every locator
#[derive(Default)]
pub struct FakeProbe {
    known: HashSet<String>,
    offline: bool,
    pub probed: Mutex<Vec<String>>,
}

impl FakeProbe {
    pub fn knowing(names: &[&str]) -> Self {
        Self {
            known: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Probe that fails every request as a network error
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl IconProbe for FakeProbe {
    async fn probe(&self, locator: &IconRef) -> Result<(), ProbeFailure> {
        self.probed.lock().unwrap().push(locator.to_string());

        if self.offline {
            return Err(ProbeFailure::Transport {
                reason: "connection refused".to_string(),
            });
        }

        let known = self
            .known
            .iter()
            .any(|name| locator.as_str() == format!("{}/{}.svg", ICONS, name));
        if known {
            Ok(())
        } else {
            Err(ProbeFailure::Absent { status: 404 })
        }
    }
}

/// Resolver over the default CDN template backed by `probe`
pub fn fake_resolver(probe: Arc<FakeProbe>) -> Resolver {
    let locator = IconLocator::new(&CdnSettings::default()).expect("default CDN settings");
    Resolver::new(locator, probe)
}

/// Minimal HTTP/1.1 server standing in for the icon CDN
pub struct IconServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Start a server that answers 200 for `/npm/simple-icons@latest/icons/<name>.svg`
/// when `<name>` is in `known`, 404 otherwise. Paths under `/slow/` never answer
/// within `stall`.
pub async fn start_icon_server(known: &[&str], stall: Duration) -> IconServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let requests = Arc::new(Mutex::new(Vec::new()));

    let known: HashSet<String> = known
        .iter()
        .map(|n| format!("/npm/simple-icons@latest/icons/{}.svg", n))
        .collect();
    let log = requests.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let known = known.clone();
            let log = log.clone();

            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                    if read == buf.len() {
                        return;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("")
                    .to_string();
                log.lock().unwrap().push(path.clone());

                if path.starts_with("/slow/") {
                    tokio::time::sleep(stall).await;
                    return;
                }

                let response = if known.contains(&path) {
                    let body = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
                    format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    )
                } else {
                    "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string()
                };
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    IconServer {
        base_url: format!("http://{}", addr),
        requests,
    }
}
