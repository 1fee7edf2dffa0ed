//! Single-stream HTTP GET to a local file.
//!
//! Uses a libcurl easy handle on the calling thread. The response body is
//! streamed through a buffered writer; it is never held in memory as a whole.

mod parse;

pub use parse::{parse_status_line, StatusLine};

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const COPY_BUF_SIZE: usize = 64 * 1024;

/// Transfer limits applied to the GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Limit for establishing the connection (TCP + TLS).
    pub connect_timeout: Duration,
    /// Whole-transfer limit; `None` lets a slow download run as long as it needs.
    pub timeout: Option<Duration>,
    /// Redirect hops followed before libcurl gives up.
    pub max_redirections: u32,
    /// libcurl receive buffer size; `None` keeps the library default.
    pub buffer_size: Option<usize>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
            max_redirections: 10,
            buffer_size: None,
        }
    }
}

/// Failure while downloading.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Final response status was not `200`; carries the status text, e.g. `404 Not Found`.
    #[error("bad status: {0}")]
    BadStatus(String),
    /// Creating or writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// libcurl failed (DNS, connect, TLS, timeout, truncated body...).
    #[error(transparent)]
    Transport(#[from] curl::Error),
}

/// Creates (or truncates) `path`, then downloads `url` into it.
///
/// The file is created before any network activity, so a path that cannot be
/// created never results in a request. A partially written file is left in
/// place on failure. Returns the number of body bytes written.
pub fn download_to_path(url: &str, path: &Path, opts: &FetchOptions) -> Result<u64, FetchError> {
    let file = File::create(path)?;
    tracing::debug!("created output file {}", path.display());
    download_to_writer(url, file, opts)
}

/// Downloads `url` into `writer`. Body bytes are only written once the final
/// response (after redirects) is known to be `200`.
pub fn download_to_writer<W: Write>(
    url: &str,
    writer: W,
    opts: &FetchOptions,
) -> Result<u64, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    if let Some(timeout) = opts.timeout {
        easy.timeout(timeout)?;
    }
    if let Some(sz) = opts.buffer_size {
        easy.buffer_size(sz)?;
    }

    tracing::info!("GET {}", url);

    // Latest status line seen; redirects overwrite it.
    let status: RefCell<Option<StatusLine>> = RefCell::new(None);
    let mut out = BufWriter::with_capacity(COPY_BUF_SIZE, writer);
    let mut written: u64 = 0;
    let mut write_err: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Some(line) = parse_status_line(data) {
                tracing::debug!("response status: {}", line);
                *status.borrow_mut() = Some(line);
            }
            true
        })?;
        transfer.write_function(|data| {
            let ok = status.borrow().as_ref().is_some_and(StatusLine::is_ok);
            if !ok {
                return Ok(0); // abort: body of a non-200 response is discarded
            }
            match out.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0)
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(err) = write_err {
        tracing::warn!("write failed after {} bytes: {}", written, err);
        return Err(FetchError::Io(err));
    }
    if let Some(line) = status.into_inner() {
        if !line.is_ok() {
            tracing::warn!("GET {} returned {}", url, line);
            return Err(FetchError::BadStatus(line.to_string()));
        }
    }
    if let Err(err) = performed {
        tracing::warn!("transfer failed after {} bytes: {}", written, err);
        return Err(FetchError::Transport(err));
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::BadStatus(code.to_string()));
    }

    out.flush()?;
    tracing::info!("downloaded {} bytes", written);
    Ok(written)
}
