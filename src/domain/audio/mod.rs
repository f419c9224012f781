use std::io::Cursor;
use std::path::Path;

/// Output format required by downstream consumers of the synthesized audio:
/// WAV, mono, 22050 Hz, 16-bit linear PCM.
pub const SAMPLE_RATE: u32 = 22050;
pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

fn to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}

/// Encode raw float samples from the model into an in-memory WAV buffer.
pub fn encode_wav(samples: &[f32]) -> Result<Vec<u8>, hound::Error> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, wav_spec())?;
        for &sample in samples {
            writer.write_sample(to_i16(sample))?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Write raw float samples to a WAV file on disk.
pub fn write_wav_file(path: &Path, samples: &[f32]) -> Result<(), hound::Error> {
    let mut writer = hound::WavWriter::create(path, wav_spec())?;
    for &sample in samples {
        writer.write_sample(to_i16(sample))?;
    }
    writer.finalize()
}
