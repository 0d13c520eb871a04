//! Dimension and size probes
//!
//! Both probes settle to a best-effort value: a failed image load reads
//! as `0 x 0`, a failed size probe as `"Unknown"`.

use std::fmt;

use image::GenericImageView;
use imgsize_net::{Fetcher, NetError};

/// File size shown when the size probe yields nothing usable
pub const UNKNOWN_SIZE: &str = "Unknown";

const SIZE_UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];

/// Pixel width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub const ZERO: ImageDimensions = ImageDimensions { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Elementwise maximum
    pub fn max(self, other: ImageDimensions) -> ImageDimensions {
        ImageDimensions {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} px", self.width, self.height)
    }
}

/// Why a probe degraded
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    Net(#[from] NetError),

    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Missing content-length header")]
    MissingLength,

    #[error("Unparsable content-length: {0:?}")]
    BadLength(String),
}

/// Loads images off-document to measure them
pub struct DimensionProbe<F> {
    fetcher: F,
}

impl<F: Fetcher> DimensionProbe<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Natural size of the image at `url`, `0 x 0` if it cannot be loaded
    pub async fn measure_intrinsic(&self, url: &str) -> ImageDimensions {
        match self.try_measure(url).await {
            Ok(dims) => {
                tracing::debug!("Measured {}: {}x{}", url, dims.width, dims.height);
                dims
            }
            Err(e) => {
                tracing::debug!("Could not measure {}: {}", url, e);
                ImageDimensions::ZERO
            }
        }
    }

    /// Approximate byte size of `url` from a HEAD request, or `"Unknown"`
    pub async fn probe_byte_size(&self, url: &str) -> String {
        match self.try_byte_size(url).await {
            Ok(bytes) => format_file_size(bytes),
            Err(e) => {
                tracing::debug!("No size for {}: {}", url, e);
                UNKNOWN_SIZE.to_string()
            }
        }
    }

    async fn try_measure(&self, url: &str) -> Result<ImageDimensions, ProbeError> {
        let response = self.fetcher.get(url).await?;
        if !response.ok() {
            return Err(NetError::HttpError { status: response.status }.into());
        }

        // Decoding is CPU bound; keep it off the page thread.
        let body = response.body;
        let (width, height) =
            smol::unblock(move || image::load_from_memory(&body).map(|img| img.dimensions())).await?;
        Ok(ImageDimensions { width, height })
    }

    async fn try_byte_size(&self, url: &str) -> Result<u64, ProbeError> {
        let response = self.fetcher.head(url).await?;
        let value = response
            .header("content-length")
            .ok_or(ProbeError::MissingLength)?;
        parse_content_length(value)
    }
}

fn parse_content_length(value: &str) -> Result<u64, ProbeError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ProbeError::BadLength(value.to_string()))
}

/// Human readable byte count, e.g. `1536` → `"1.5 kB"`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut threshold = 1024u64;
    while unit < SIZE_UNITS.len() - 1 && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    format!("{:.1} {}", scaled, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;
    use std::time::Duration;

    use smol::LocalExecutor;

    use image::{DynamicImage, ImageFormat, RgbaImage};
    use imgsize_net::{MemoryFetcher, Method, Response};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(RgbaImage::new(width, height))
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1), "1.0 B");
        assert_eq!(format_file_size(1023), "1023.0 B");
        assert_eq!(format_file_size(1024), "1.0 kB");
        assert_eq!(format_file_size(1536), "1.5 kB");
        assert_eq!(format_file_size(1048576), "1.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_format_caps_at_gb() {
        assert_eq!(format_file_size(2 * 1024u64.pow(4)), "2048.0 GB");
    }

    #[test]
    fn test_parse_content_length() {
        assert_eq!(parse_content_length("2048").unwrap(), 2048);
        assert_eq!(parse_content_length(" 10 ").unwrap(), 10);
        assert!(matches!(parse_content_length("abc"), Err(ProbeError::BadLength(_))));
        assert!(matches!(parse_content_length("-5"), Err(ProbeError::BadLength(_))));
    }

    #[test]
    fn test_measure_intrinsic() {
        let fetcher = MemoryFetcher::new();
        fetcher.insert("https://a.test/img.png", Response::new(png(64, 48)));
        let probe = DimensionProbe::new(fetcher);

        let dims = smol::block_on(probe.measure_intrinsic("https://a.test/img.png"));
        assert_eq!(dims, ImageDimensions::new(64, 48));
    }

    #[test]
    fn test_decode_leaves_executor_free() {
        let fetcher = MemoryFetcher::new();
        fetcher.insert("https://a.test/large.png", Response::new(png(1024, 1024)));
        let probe = DimensionProbe::new(fetcher);

        let executor = LocalExecutor::new();
        let done = Rc::new(Cell::new(false));
        let ticks = Rc::new(Cell::new(0u32));

        let ticker = executor.spawn({
            let (done, ticks) = (Rc::clone(&done), Rc::clone(&ticks));
            async move {
                while !done.get() {
                    ticks.set(ticks.get() + 1);
                    smol::Timer::after(Duration::from_millis(1)).await;
                }
            }
        });

        let dims = smol::block_on(executor.run(async {
            let dims = probe.measure_intrinsic("https://a.test/large.png").await;
            done.set(true);
            dims
        }));
        smol::block_on(executor.run(ticker));

        assert_eq!(dims, ImageDimensions::new(1024, 1024));
        // The other task ran while the image was decoding.
        assert!(ticks.get() > 0);
    }

    #[test]
    fn test_measure_failure_is_zero() {
        let fetcher = MemoryFetcher::new();
        fetcher.insert("https://a.test/text", Response::new(b"not an image".to_vec()));
        fetcher.insert("https://a.test/gone.png", Response::with_status(404));
        let probe = DimensionProbe::new(fetcher);

        smol::block_on(async {
            assert_eq!(probe.measure_intrinsic("https://a.test/text").await, ImageDimensions::ZERO);
            assert_eq!(probe.measure_intrinsic("https://a.test/gone.png").await, ImageDimensions::ZERO);
            assert_eq!(probe.measure_intrinsic("https://unreachable.test/").await, ImageDimensions::ZERO);
        });
    }

    #[test]
    fn test_probe_byte_size() {
        let fetcher = MemoryFetcher::new();
        fetcher.insert(
            "https://a.test/big.jpg",
            Response::new(Vec::new()).with_header("Content-Length", "1536"),
        );
        fetcher.insert("https://a.test/nolen.jpg", Response::new(vec![0; 10]));
        fetcher.insert(
            "https://a.test/bad.jpg",
            Response::new(Vec::new()).with_header("content-length", "lots"),
        );
        let probe = DimensionProbe::new(fetcher.clone());

        smol::block_on(async {
            assert_eq!(probe.probe_byte_size("https://a.test/big.jpg").await, "1.5 kB");
            assert_eq!(probe.probe_byte_size("https://a.test/nolen.jpg").await, UNKNOWN_SIZE);
            assert_eq!(probe.probe_byte_size("https://a.test/bad.jpg").await, UNKNOWN_SIZE);
            assert_eq!(probe.probe_byte_size("https://cors.test/x.jpg").await, UNKNOWN_SIZE);
        });

        assert_eq!(fetcher.request_count(Method::Head, "https://a.test/big.jpg"), 1);
    }

    #[test]
    fn test_dimensions_max() {
        let a = ImageDimensions::new(800, 300);
        let b = ImageDimensions::new(400, 600);
        assert_eq!(a.max(b), ImageDimensions::new(800, 600));
        assert_eq!(ImageDimensions::ZERO.max(a), a);
    }
}
