use crate::error::{Result, SetupError};
use crate::utils::{console::say, fs};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const CHUNK_SIZE: usize = 8192;

/// An open response body plus its declared length.
pub struct FetchResponse {
    pub content_length: Option<u64>,
    pub body: Box<dyn Read>,
}

/// Performs the GET behind a fetch.
pub trait Transport {
    fn get(&self, url: &str) -> Result<FetchResponse>;
}

#[derive(Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        // built per request so client setup errors stay inside the fetch
        let client = reqwest::blocking::Client::builder().build()?;
        let response = client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SetupError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(FetchResponse {
            content_length: response.content_length(),
            body: Box::new(response),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub succeeded: bool,
    pub message: Option<String>,
    pub bytes: u64,
}

impl DownloadOutcome {
    fn success(bytes: u64) -> Self {
        Self {
            succeeded: true,
            message: None,
            bytes,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            succeeded: false,
            message: Some(message),
            bytes: 0,
        }
    }
}

pub struct Downloader<T: Transport> {
    transport: T,
}

impl<T: Transport> Downloader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Streams `url` into `destination`, reporting progress to `out`.
    ///
    /// Never fails: network and IO errors are printed and returned as an
    /// unsuccessful outcome.
    pub fn fetch(&self, url: &str, destination: &Path, out: &mut dyn Write) -> DownloadOutcome {
        say(out, format_args!("Downloading {url}..."));

        match self.stream_to_file(url, destination, out) {
            Ok(bytes) => {
                say(out, format_args!("\nDownloaded to {}", destination.display()));
                DownloadOutcome::success(bytes)
            }
            Err(e) => {
                say(out, format_args!("Download failed: {e}"));
                DownloadOutcome::failure(e.to_string())
            }
        }
    }

    fn stream_to_file(&self, url: &str, destination: &Path, out: &mut dyn Write) -> Result<u64> {
        let mut response = self.transport.get(url)?;
        let total = response.content_length.filter(|len| *len > 0);

        fs::ensure_parent_exists(destination)?;
        let mut file = File::create(destination)?;

        let mut buffer = [0u8; CHUNK_SIZE];
        let mut downloaded: u64 = 0;
        loop {
            let read = match response.body.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            file.write_all(&buffer[..read])?;
            downloaded += read as u64;

            if let Some(total) = total {
                let percent = downloaded as f64 / total as f64 * 100.0;
                write!(out, "Progress: {percent:.1}%\r")?;
                out.flush()?;
            }
        }
        file.flush()?;

        Ok(downloaded)
    }
}
