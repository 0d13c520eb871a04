//! Lookup Orchestrator
//!
//! Finds the image a request refers to, resolves its original source and
//! measures it. The synchronous part (element lookup, rendered size,
//! source resolution) runs immediately; the probes run in a future that
//! borrows nothing from the page.

use std::rc::Rc;

use imgsize_dom::{DOMRect, DocumentImageSource};
use imgsize_net::Fetcher;
use smol::future;

use crate::aspect::aspect_ratio;
use crate::probe::{DimensionProbe, ImageDimensions};
use crate::source;

/// Sequence number of a lookup request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Lookup error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Image not found: {0}")]
    ImageNotFound(String),
}

/// Everything the overlay shows about one image
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImageInfo {
    pub intrinsic: ImageDimensions,
    pub rendered: ImageDimensions,
    /// `None` when the rendered height is 0
    pub rendered_aspect_ratio: Option<f64>,
    /// `None` when the intrinsic height is 0
    pub intrinsic_aspect_ratio: Option<f64>,
    pub file_size: String,
    pub current_source: String,
    /// Present only when it differs from `current_source`
    pub original_source: Option<String>,
}

impl ResolvedImageInfo {
    pub fn new(
        rendered: ImageDimensions,
        intrinsic: ImageDimensions,
        file_size: String,
        current_source: String,
        original_source: String,
    ) -> Self {
        let original_source = (original_source != current_source).then_some(original_source);
        Self {
            intrinsic,
            rendered,
            rendered_aspect_ratio: aspect_ratio(rendered.width, rendered.height),
            intrinsic_aspect_ratio: aspect_ratio(intrinsic.width, intrinsic.height),
            file_size,
            current_source,
            original_source,
        }
    }
}

/// A located image whose probes have not run yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLookup {
    pub generation: Generation,
    /// The URL the request named, the one currently displayed
    pub image_url: String,
    /// Best-known original
    pub original_url: String,
    pub rendered: ImageDimensions,
    /// Element bounding rect when the request arrived
    pub anchor: DOMRect,
}

impl PendingLookup {
    /// Run the probes
    ///
    /// Both images are measured concurrently and joined before the size
    /// probe starts. Never fails: probe failures degrade in the result.
    pub async fn resolve<F: Fetcher>(self, probe: &DimensionProbe<F>) -> CompletedLookup {
        let (current, original) = future::zip(
            probe.measure_intrinsic(&self.image_url),
            probe.measure_intrinsic(&self.original_url),
        )
        .await;
        let intrinsic = current.max(original);

        let file_size = probe.probe_byte_size(&self.original_url).await;

        tracing::info!(
            "Lookup {} resolved: {}x{} ({})",
            self.generation.get(),
            intrinsic.width,
            intrinsic.height,
            file_size
        );

        CompletedLookup {
            generation: self.generation,
            anchor: self.anchor,
            info: ResolvedImageInfo::new(
                self.rendered,
                intrinsic,
                file_size,
                self.image_url,
                self.original_url,
            ),
        }
    }
}

/// A finished lookup waiting to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedLookup {
    pub generation: Generation,
    pub anchor: DOMRect,
    pub info: ResolvedImageInfo,
}

/// Issues lookups and numbers them
pub struct LookupOrchestrator<F> {
    probe: Rc<DimensionProbe<F>>,
    issued: u64,
}

impl<F: Fetcher + 'static> LookupOrchestrator<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            probe: Rc::new(DimensionProbe::new(fetcher)),
            issued: 0,
        }
    }

    /// Shared handle for futures that outlive a borrow of the orchestrator
    pub fn probe_handle(&self) -> Rc<DimensionProbe<F>> {
        Rc::clone(&self.probe)
    }

    /// Generation of the most recent request
    pub fn latest_generation(&self) -> Option<Generation> {
        (self.issued > 0).then_some(Generation(self.issued))
    }

    /// Whether `generation` is the most recent request
    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest_generation() == Some(generation)
    }

    /// Locate the image for `image_url` and capture what can be read now
    ///
    /// Every call takes a generation, found or not, so a request for a
    /// missing image still supersedes earlier ones.
    pub fn begin<D: DocumentImageSource>(
        &mut self,
        document: &D,
        image_url: &str,
    ) -> Result<PendingLookup, LookupError> {
        self.issued += 1;
        let generation = Generation(self.issued);

        let element = document
            .find_image(image_url)
            .ok_or_else(|| LookupError::ImageNotFound(image_url.to_string()))?;

        let original_url = source::resolve(image_url, &element);
        if original_url != image_url {
            tracing::debug!("Lookup {}: original source {}", generation.get(), original_url);
        }

        Ok(PendingLookup {
            generation,
            image_url: image_url.to_string(),
            original_url,
            rendered: ImageDimensions::new(element.offset_width, element.offset_height),
            anchor: element.bounding_rect,
        })
    }

    /// Locate and resolve in one step
    pub async fn lookup<D: DocumentImageSource>(
        &mut self,
        document: &D,
        image_url: &str,
    ) -> Result<CompletedLookup, LookupError> {
        let pending = self.begin(document, image_url)?;
        Ok(pending.resolve(&*self.probe).await)
    }
}
