//! Benchmark: request handling, direct file reads vs preloaded cache

use criterion::{criterion_group, criterion_main, Criterion};
use hyper::Request;
use memserve::config::{AppState, Config, ServingMode};
use memserve::handler::handle_request;
use std::hint::black_box;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>home</h1>".repeat(256)).unwrap();
    std::fs::write(dir.path().join("styles.css"), "body { margin: 0 }".repeat(128)).unwrap();
    dir
}

fn state_for(mode: ServingMode, root: &Path) -> Arc<AppState> {
    let config_dir = TempDir::new().unwrap();
    let path = config_dir.path().join("absent").to_string_lossy().into_owned();
    let mut config = Config::load_from(&path).unwrap();
    config.content.mode = mode;
    config.content.root = root.to_path_buf();
    config.logging.access_log = false;
    Arc::new(AppState::from_config(config).unwrap())
}

fn benchmark_handler(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = fixture();
    let addr: SocketAddr = "127.0.0.1:40000".parse().unwrap();

    let mut group = c.benchmark_group("handle_request");
    for mode in [ServingMode::DirectFile, ServingMode::MemCached] {
        let state = state_for(mode, dir.path());
        group.bench_function(mode.as_str(), |b| {
            b.to_async(&rt).iter(|| {
                let state = Arc::clone(&state);
                async move {
                    let req = Request::builder().uri("/").body(()).unwrap();
                    black_box(handle_request(req, state, addr).await.unwrap())
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_handler);
criterion_main!(benches);
