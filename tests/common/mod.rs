#![allow(dead_code)]

use showcase::configuration::Settings;
use showcase::telemetry::{get_subscriber, init_subscriber};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink so tests can assert on what the server logged.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        if std::env::var("TEST_LOG").is_ok() {
            std::io::stdout().write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

static LOGS: OnceLock<CapturedLogs> = OnceLock::new();

pub fn logs() -> &'static CapturedLogs {
    LOGS.get_or_init(|| {
        let logs = CapturedLogs::default();
        let subscriber = get_subscriber("test".into(), "debug".into(), logs.clone());
        init_subscriber(subscriber);
        logs
    })
}

pub struct TestApp {
    pub address: String,
    pub data_file: PathBuf,
    pub client: reqwest::Client,
    // removed with the app
    _data_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Start the server on a random port with a fresh data directory;
/// `configure` can point connectors at mock servers.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Settings)) -> TestApp {
    logs();

    let data_dir = TempDir::new().expect("Failed to create data dir");
    let mut configuration = Settings {
        data_file: data_dir.path().join("data/projects.json"),
        static_dir: data_dir.path().join("no-front-end"),
        http_timeout_secs: 2,
        ..Settings::default()
    };
    configure(&mut configuration);
    let data_file = configuration.data_file.clone();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = showcase::startup::run(listener, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        data_file,
        client: reqwest::Client::new(),
        _data_dir: data_dir,
    }
}

/// A local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
