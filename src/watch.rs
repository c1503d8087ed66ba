// ABOUTME: Watch module for re-rendering a page whenever its source changes
// ABOUTME: Optionally serves the latest rendering over a local HTTP server

use log::{debug, error, info};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;
use tiny_http::{Header, Response, Server, StatusCode};

use crate::config::BootstrapOptions;
use crate::errors::{Result, SliderError};
use crate::render;

/// Configuration for watch mode
pub struct WatchConfig {
    /// Page source to watch
    pub input: PathBuf,

    /// Where each rendering is written
    pub output: PathBuf,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,

    /// Whether to serve the rendering using a local web server
    pub serve: bool,

    /// Port for local web server
    pub port: u16,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            debounce_ms: 500,
            serve: false,
            port: 8080,
        }
    }
}

type SharedPage = Arc<RwLock<String>>;

fn content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("html") | Some("xhtml") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn respond_with(request: tiny_http::Request, body: Vec<u8>, mime: &str) {
    let mut response = Response::from_data(body);
    if let Ok(header) = Header::from_bytes("Content-Type", mime) {
        response = response.with_header(header);
    }
    if let Err(e) = request.respond(response) {
        error!("Failed to send response: {}", e);
    }
}

/// Serve the shared rendering at `/` and other files from `root`.
fn start_server(page: SharedPage, root: PathBuf, port: u16) -> Result<()> {
    let server = Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| SliderError::WatchError(format!("Failed to start HTTP server: {}", e)))?;

    thread::spawn(move || {
        info!("HTTP server listening on http://localhost:{}", port);
        println!("HTTP server listening on http://localhost:{}", port);

        for request in server.incoming_requests() {
            let url_path = request.url().to_string();
            debug!("Request for {:?}", url_path);

            if url_path == "/" {
                let body = page.read().clone().into_bytes();
                respond_with(request, body, "text/html");
                continue;
            }

            let clean_path = url_path.trim_start_matches('/');
            if clean_path.split('/').any(|part| part == "..") {
                let _ = request.respond(
                    Response::from_string("403 Forbidden").with_status_code(StatusCode(403)),
                );
                continue;
            }

            let file_path = root.join(clean_path);
            match fs::read(&file_path) {
                Ok(content) => respond_with(request, content, content_type(&file_path)),
                Err(_) => {
                    let _ = request.respond(
                        Response::from_string("404 Not Found").with_status_code(StatusCode(404)),
                    );
                }
            }
        }
    });

    Ok(())
}

fn regenerate(config: &WatchConfig, options: &BootstrapOptions, page: &SharedPage) -> Result<()> {
    let rendered = render::render_file(&config.input, &config.output, options)?;
    *page.write() = rendered;
    info!("Rendered {:?}", config.output);
    Ok(())
}

/// Render `config.input` now and again on every change until interrupted.
pub fn watch_markup(config: WatchConfig, options: &BootstrapOptions) -> Result<()> {
    if !config.input.is_file() {
        return Err(SliderError::PathNotFoundError(config.input.clone()));
    }

    let page: SharedPage = Arc::new(RwLock::new(String::new()));
    regenerate(&config, options, &page)?;

    if config.serve {
        let root = match config.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        start_server(page.clone(), root, config.port)?;
    }

    let (tx, rx) = mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| SliderError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    let input_abs = fs::canonicalize(&config.input).map_err(SliderError::FileReadError)?;
    let watch_dir = input_abs
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .map_err(|e| {
            SliderError::WatchError(format!("Failed to watch {:?}: {}", watch_dir, e))
        })?;

    info!("Watching {:?}", input_abs);
    println!("Watching {:?} (Press Ctrl+C to stop)", input_abs);

    let mut last_processed = Instant::now();
    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events.iter().any(|event| {
                    event
                        .paths
                        .iter()
                        .any(|path| fs::canonicalize(path).map(|p| p == input_abs).unwrap_or(false))
                });

                let now = Instant::now();
                if relevant
                    && now.duration_since(last_processed) > Duration::from_millis(config.debounce_ms)
                {
                    match regenerate(&config, options, &page) {
                        Ok(()) => last_processed = now,
                        Err(e) => error!("Failed to re-render: {}", e),
                    }
                }
            }
            Err(errors) => error!("Watch error: {:?}", errors),
        }
    }

    Ok(())
}
