//! Directory packager: writes a sample set to disk.
//!
//! Samples land at `DIR/samples/{midi}.wav`, matching their keys, and a
//! `DIR/manifest.json` lists them. SF2/SFZ writers can consume the directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use swaragen_backend_audio::{SamplePackager, SampleSet};
use swaragen_spec::midi_to_note;

use super::json_output::{Manifest, ManifestSample};

/// Name of the manifest file inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes sample sets into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryPackager {
    out_dir: PathBuf,
    template: Manifest,
}

impl DirectoryPackager {
    /// Creates a packager. `template` supplies every manifest field except
    /// the sample list.
    pub fn new(out_dir: impl Into<PathBuf>, template: Manifest) -> Self {
        Self {
            out_dir: out_dir.into(),
            template,
        }
    }

    /// Output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl SamplePackager for DirectoryPackager {
    type Output = Manifest;
    type Error = io::Error;

    fn package(&mut self, samples: &SampleSet) -> io::Result<Manifest> {
        let mut manifest = self.template.clone();
        manifest.samples.clear();

        for entry in samples {
            let key = entry.key.to_string();
            let path = self.out_dir.join(&key);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &entry.wav.wav_data)?;

            manifest.samples.push(ManifestSample {
                key,
                midi: entry.key.midi(),
                note: midi_to_note(entry.key.midi()),
                frequency_hz: entry.frequency,
                pcm_hash: entry.wav.pcm_hash.clone(),
                num_samples: entry.wav.num_samples,
            });
        }

        fs::create_dir_all(&self.out_dir)?;
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.out_dir.join(MANIFEST_FILE), json)?;

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaragen_backend_audio::{build_sample_set, package, FrequencyStream, Harmonium};
    use swaragen_spec::{NoteRange, TuningReference};

    fn template() -> Manifest {
        Manifest {
            tuning: "equal_temperament".to_string(),
            base_midi: 60,
            base_freq: 261.626,
            note_range: [60, 62],
            sample_rate: 44100,
            note_duration_seconds: 0.01,
            samples: Vec::new(),
        }
    }

    fn small_set() -> SampleSet {
        let stream = FrequencyStream::equal_temperament(
            TuningReference::new(60, 261.626).unwrap(),
            NoteRange::new(60, 62).unwrap(),
        );
        build_sample_set(stream, &Harmonium::default(), 0.01).unwrap()
    }

    #[test]
    fn test_writes_samples_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut packager = DirectoryPackager::new(dir.path(), template());

        let manifest = package(small_set(), &mut packager).unwrap();

        assert_eq!(manifest.samples.len(), 2);
        assert_eq!(manifest.samples[0].key, "samples/60.wav");
        assert_eq!(manifest.samples[0].note, "C4");
        assert_eq!(manifest.samples[1].note, "C#4");
        assert!(dir.path().join("samples/60.wav").is_file());
        assert!(dir.path().join("samples/61.wav").is_file());

        let written = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let parsed: Manifest = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_unwritable_directory_fails_with_package_stage() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let mut packager = DirectoryPackager::new(&blocker, template());
        let err = package(small_set(), &mut packager).unwrap_err();
        assert_eq!(err.stage_name(), Some("package"));
    }
}
