//! Exporter factories — pair a video codec with an audio codec per quality tier.
//!
//! Three built-in tiers mirror the usual speed/quality trade-off:
//!
//! | tier     | video          | audio |
//! |----------|----------------|-------|
//! | `low`    | H.264 Baseline | AAC   |
//! | `high`   | H.264 Hi422P   | AAC   |
//! | `master` | Lossless       | WAV   |
//!
//! A factory keeps no reference to what it builds: every `build()` returns two
//! freshly constructed parts. Choosing the tier is the only step that can fail.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, StratlabError};
use crate::registry::Registry;

use super::export::{
    Aac, AudioExporter, DestinationStore, ExportArtifact, H264Baseline, H264Hi422P, Lossless,
    VideoExporter, Wav,
};

// ─── ExportBundle ────────────────────────────────────────────────────

/// A video part and an audio part from the same tier.
///
/// Parts are only reachable through the bundle, so they are never used unpaired.
pub struct ExportBundle {
    tier: String,
    video: Box<dyn VideoExporter>,
    audio: Box<dyn AudioExporter>,
}

/// Artifacts produced by one bundle export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub tier: String,
    pub video: ExportArtifact,
    pub audio: ExportArtifact,
}

impl ExportBundle {
    pub fn new(
        tier: impl Into<String>,
        video: Box<dyn VideoExporter>,
        audio: Box<dyn AudioExporter>,
    ) -> Self {
        Self {
            tier: tier.into(),
            video,
            audio,
        }
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }

    pub fn video(&self) -> &dyn VideoExporter {
        self.video.as_ref()
    }

    pub fn audio(&self) -> &dyn AudioExporter {
        self.audio.as_ref()
    }

    /// True once both parts have been prepared.
    pub fn is_prepared(&self) -> bool {
        self.video.prepared().is_some() && self.audio.prepared().is_some()
    }

    pub fn prepare(&mut self, video_data: &[u8], audio_data: &[u8]) {
        tracing::debug!(tier = %self.tier, "preparing export");
        self.video.prepare(video_data);
        self.audio.prepare(audio_data);
    }

    /// Export video then audio into `folder`.
    ///
    /// Calling this before [`prepare`](Self::prepare) is not rejected; the
    /// resulting artifacts carry `prepared: false`.
    pub fn export(&self, folder: &Path, store: &mut dyn DestinationStore) -> Result<ExportReport> {
        let video = self.video.export(folder, store)?;
        let audio = self.audio.export(folder, store)?;
        Ok(ExportReport {
            tier: self.tier.clone(),
            video,
            audio,
        })
    }
}

// ─── Factory trait ───────────────────────────────────────────────────

/// Trait for exporter factories: one factory per quality tier.
pub trait ExporterFactory: Send + Sync {
    /// Tier key (e.g., "low").
    fn tier(&self) -> &str;

    /// Build a bundle of two fresh parts. Never cached, never fails.
    fn build(&self) -> ExportBundle;
}

/// High speed, lower quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastExporter;

impl ExporterFactory for FastExporter {
    fn tier(&self) -> &str {
        "low"
    }

    fn build(&self) -> ExportBundle {
        ExportBundle::new(
            self.tier(),
            Box::new(H264Baseline::default()),
            Box::new(Aac::default()),
        )
    }
}

/// Slower speed, high quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighQualityExporter;

impl ExporterFactory for HighQualityExporter {
    fn tier(&self) -> &str {
        "high"
    }

    fn build(&self) -> ExportBundle {
        ExportBundle::new(
            self.tier(),
            Box::new(H264Hi422P::default()),
            Box::new(Aac::default()),
        )
    }
}

/// Master quality: lossless video and audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct MasterQualityExporter;

impl ExporterFactory for MasterQualityExporter {
    fn tier(&self) -> &str {
        "master"
    }

    fn build(&self) -> ExportBundle {
        ExportBundle::new(
            self.tier(),
            Box::new(Lossless::default()),
            Box::new(Wav::default()),
        )
    }
}

// ─── Tier selection ──────────────────────────────────────────────────

/// Tier key → exporter factory.
#[derive(Debug)]
pub struct ExportTiers {
    factories: Registry<dyn ExporterFactory>,
}

impl Default for ExportTiers {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportTiers {
    /// Empty tier table.
    pub fn empty() -> Self {
        Self {
            factories: Registry::new("export tier"),
        }
    }

    /// The built-in `low`, `high`, and `master` tiers.
    pub fn new() -> Self {
        let mut tiers = Self::empty();
        tiers.register(Arc::new(FastExporter));
        tiers.register(Arc::new(HighQualityExporter));
        tiers.register(Arc::new(MasterQualityExporter));
        tiers
    }

    /// Register a factory under its own tier key, replacing any previous one.
    pub fn register(&mut self, factory: Arc<dyn ExporterFactory>) -> bool {
        let tier = factory.tier().to_string();
        self.factories.register_instance(tier, factory)
    }

    /// Look up the factory for `tier`.
    pub fn select(&self, tier: &str) -> Result<Arc<dyn ExporterFactory>> {
        self.factories.resolve(tier).map_err(|err| match err {
            StratlabError::UnknownKey { key, available, .. } => StratlabError::UnknownTier {
                tier: key,
                available,
            },
            other => other,
        })
    }

    pub fn tiers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys()
    }
}

// ─── Export job ──────────────────────────────────────────────────────

/// Input for a full select → build → prepare → export run.
#[derive(Debug, Clone)]
pub struct ExportJob<'a> {
    pub video_data: &'a [u8],
    pub audio_data: &'a [u8],
    pub folder: &'a Path,
}

/// Select `tier`, build a bundle, prepare both parts, and export them.
pub fn run_export(
    tiers: &ExportTiers,
    tier: &str,
    job: &ExportJob<'_>,
    store: &mut dyn DestinationStore,
) -> Result<ExportReport> {
    let factory = tiers.select(tier)?;
    let mut bundle = factory.build();
    bundle.prepare(job.video_data, job.audio_data);
    let report = bundle.export(job.folder, store)?;
    tracing::info!(
        tier,
        video = %report.video.codec,
        audio = %report.audio.codec,
        "export complete"
    );
    Ok(report)
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::export::MemoryStore;

    fn part_addr<T: ?Sized>(part: &T) -> *const () {
        part as *const T as *const ()
    }

    // ── Tier builds ─────────────────────────────────────────────

    #[test]
    fn tier_low_builds() {
        let bundle = FastExporter.build();
        assert_eq!(bundle.tier(), "low");
        assert_eq!(bundle.video().codec(), "h264_bp");
        assert_eq!(bundle.audio().codec(), "aac");
    }

    #[test]
    fn tier_high_builds() {
        let bundle = HighQualityExporter.build();
        assert_eq!(bundle.tier(), "high");
        assert_eq!(bundle.video().codec(), "h264_hi422p");
        assert_eq!(bundle.audio().codec(), "aac");
    }

    #[test]
    fn tier_master_builds() {
        let bundle = MasterQualityExporter.build();
        assert_eq!(bundle.tier(), "master");
        assert_eq!(bundle.video().codec(), "lossless");
        assert_eq!(bundle.audio().codec(), "wav");
    }

    // ── Purity ──────────────────────────────────────────────────

    #[test]
    fn successive_builds_yield_distinct_parts() {
        let factory = FastExporter;
        let a = factory.build();
        let b = factory.build();
        assert_ne!(part_addr(a.video()), part_addr(b.video()));
        assert_ne!(part_addr(a.audio()), part_addr(b.audio()));
    }

    #[test]
    fn preparing_one_bundle_leaves_the_other_untouched() {
        let factory = MasterQualityExporter;
        let mut a = factory.build();
        let b = factory.build();
        a.prepare(b"video", b"audio");
        assert!(a.is_prepared());
        assert!(!b.is_prepared());
    }

    // ── Selection ───────────────────────────────────────────────

    #[test]
    fn builtin_tiers_are_listed_sorted() {
        let tiers = ExportTiers::new();
        assert_eq!(tiers.tiers().collect::<Vec<_>>(), vec!["high", "low", "master"]);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = ExportTiers::new().select("ultra").err().unwrap();
        match err {
            StratlabError::UnknownTier { tier, available } => {
                assert_eq!(tier, "ultra");
                assert_eq!(available, vec!["high", "low", "master"]);
            }
            other => panic!("expected UnknownTier, got {other:?}"),
        }
    }

    #[test]
    fn tier_lookup_is_case_sensitive() {
        assert!(ExportTiers::new().select("LOW").is_err());
    }

    #[test]
    fn custom_tier_overrides_builtin() {
        struct AllLossless;
        impl ExporterFactory for AllLossless {
            fn tier(&self) -> &str {
                "high"
            }
            fn build(&self) -> ExportBundle {
                ExportBundle::new("high", Box::new(Lossless::default()), Box::new(Wav::default()))
            }
        }

        let mut tiers = ExportTiers::new();
        assert!(tiers.register(Arc::new(AllLossless)));
        let bundle = tiers.select("high").unwrap().build();
        assert_eq!(bundle.video().codec(), "lossless");
    }

    // ── Export ──────────────────────────────────────────────────

    #[test]
    fn run_export_prepares_then_exports_both_parts() {
        let mut store = MemoryStore::default();
        let job = ExportJob {
            video_data: b"placeholder_for_video_data",
            audio_data: b"placeholder_for_audio_data",
            folder: Path::new("/usr/tmp/video"),
        };
        let report = run_export(&ExportTiers::new(), "master", &job, &mut store).unwrap();
        assert_eq!(report.tier, "master");
        assert!(report.video.prepared && report.audio.prepared);
        assert_eq!(store.artifacts().len(), 2);
        assert_eq!(store.artifacts()[0].codec, "lossless");
        assert_eq!(store.artifacts()[1].codec, "wav");
    }

    #[test]
    fn export_without_prepare_is_permitted_but_unprepared() {
        let mut store = MemoryStore::default();
        let report = FastExporter
            .build()
            .export(Path::new("/tmp"), &mut store)
            .unwrap();
        assert!(!report.video.prepared);
        assert!(!report.audio.prepared);
    }
}
