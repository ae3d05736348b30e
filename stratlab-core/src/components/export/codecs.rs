//! Built-in codecs: three video profiles, two audio formats.

use super::{AudioExporter, PreparedMedia, VideoExporter};

/// Lossless video.
#[derive(Debug, Clone, Default)]
pub struct Lossless {
    prepared: Option<PreparedMedia>,
}

impl VideoExporter for Lossless {
    fn codec(&self) -> &str {
        "lossless"
    }

    fn prepare(&mut self, video_data: &[u8]) {
        self.prepared = Some(PreparedMedia::from_data(video_data));
    }

    fn prepared(&self) -> Option<&PreparedMedia> {
        self.prepared.as_ref()
    }
}

/// H.264, Baseline profile.
#[derive(Debug, Clone, Default)]
pub struct H264Baseline {
    prepared: Option<PreparedMedia>,
}

impl VideoExporter for H264Baseline {
    fn codec(&self) -> &str {
        "h264_bp"
    }

    fn prepare(&mut self, video_data: &[u8]) {
        self.prepared = Some(PreparedMedia::from_data(video_data));
    }

    fn prepared(&self) -> Option<&PreparedMedia> {
        self.prepared.as_ref()
    }
}

/// H.264, Hi422P profile (10-bit, 4:2:2 chroma sampling).
#[derive(Debug, Clone, Default)]
pub struct H264Hi422P {
    prepared: Option<PreparedMedia>,
}

impl VideoExporter for H264Hi422P {
    fn codec(&self) -> &str {
        "h264_hi422p"
    }

    fn prepare(&mut self, video_data: &[u8]) {
        self.prepared = Some(PreparedMedia::from_data(video_data));
    }

    fn prepared(&self) -> Option<&PreparedMedia> {
        self.prepared.as_ref()
    }
}

/// AAC audio.
#[derive(Debug, Clone, Default)]
pub struct Aac {
    prepared: Option<PreparedMedia>,
}

impl AudioExporter for Aac {
    fn codec(&self) -> &str {
        "aac"
    }

    fn prepare(&mut self, audio_data: &[u8]) {
        self.prepared = Some(PreparedMedia::from_data(audio_data));
    }

    fn prepared(&self) -> Option<&PreparedMedia> {
        self.prepared.as_ref()
    }
}

/// WAV (lossless) audio.
#[derive(Debug, Clone, Default)]
pub struct Wav {
    prepared: Option<PreparedMedia>,
}

impl AudioExporter for Wav {
    fn codec(&self) -> &str {
        "wav"
    }

    fn prepare(&mut self, audio_data: &[u8]) {
        self.prepared = Some(PreparedMedia::from_data(audio_data));
    }

    fn prepared(&self) -> Option<&PreparedMedia> {
        self.prepared.as_ref()
    }
}
