use std::fs;
use std::path::Path;

/// Write a mono 22050 Hz 16-bit reference WAV of the given length.
pub fn write_reference_wav(path: &Path, seconds: f64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    let samples = (seconds * 22050.0) as usize;
    for i in 0..samples {
        // Quiet sine so the fixture is a plausible voice clip
        let t = i as f32 / 22050.0;
        let value = (t * 220.0 * 2.0 * std::f32::consts::PI).sin() * 0.1;
        writer.write_sample((value * 32767.0) as i16).unwrap();
    }
    writer.finalize().unwrap();
}

/// Write a placeholder non-WAV audio file (listing only checks extensions).
pub fn write_placeholder(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"audio").unwrap();
}
