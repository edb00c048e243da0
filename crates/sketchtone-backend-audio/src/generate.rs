//! Main entry point for melody generation.
//!
//! Takes the submitted strokes and a mood name, composes one voice per
//! playable stroke, mixes them, and encodes the result.

use serde::Serialize;
use sketchtone_spec::{EngineConfig, Mood, Report, Scale, Stroke, VoiceReport};

use crate::error::{AudioError, AudioResult};
use crate::geometry::{self, StrokeMetrics};
use crate::mixer::Mixer;
use crate::voice::{self, compose_voice, Voice};
use crate::wav::WavResult;

/// Engine identifier recorded in reports.
pub const BACKEND_VERSION: &str = concat!("sketchtone-backend-audio v", env!("CARGO_PKG_VERSION"));

/// Result of a generation request.
#[derive(Debug)]
pub struct GenerateResult {
    /// Mixed 16-bit samples.
    pub samples: Vec<i16>,
    /// Encoded WAV of the mixed samples.
    pub wav: WavResult,
    /// Per-voice analysis and output metadata.
    pub report: Report,
}

/// Geometry-only analysis of a stroke (no synthesis).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeAnalysis {
    /// 1-based position in the submitted list.
    pub stroke_index: usize,
    /// Number of points in the stroke.
    pub points: usize,
    /// Length and sharpness.
    pub metrics: StrokeMetrics,
    /// Scale the stroke would use.
    pub scale: Scale,
    /// Notes the stroke would produce (0 = skipped).
    pub note_count: usize,
}

/// Generates a mixed melody, resolving the mood by name.
///
/// # Errors
/// - [`AudioError::Spec`] if the mood is unknown or the config is invalid
/// - [`AudioError::NoValidInput`] if no stroke is long enough to play
pub fn generate(
    strokes: &[Stroke],
    mood_name: &str,
    config: &EngineConfig,
) -> AudioResult<GenerateResult> {
    let mood = Mood::from_name(mood_name)?;
    generate_with_mood(strokes, mood, config)
}

/// Generates a mixed melody for an already resolved mood.
pub fn generate_with_mood(
    strokes: &[Stroke],
    mood: Mood,
    config: &EngineConfig,
) -> AudioResult<GenerateResult> {
    config.validate()?;

    let voices = compose_voices(strokes, mood, config);
    if voices.is_empty() {
        return Err(AudioError::NoValidInput {
            strokes: strokes.len(),
        });
    }

    let mut mixer = Mixer::new();
    let mut builder = Report::builder(mood, BACKEND_VERSION);
    for (stroke_index, voice) in voices {
        builder = builder.voice(VoiceReport {
            stroke_index,
            length_px: voice.metrics.total_length,
            sharpness: voice.metrics.sharpness,
            scale: voice.scale,
            note_count: voice.notes.len(),
        });
        mixer.add_voice(voice.samples);
    }

    let samples = mixer.mix()?;
    let wav = WavResult::from_mono(&samples, config.sample_rate);
    let report = builder
        .output(config.sample_rate, wav.num_samples, wav.pcm_hash.clone())
        .build();

    tracing::info!(
        mood = %mood,
        voices = report.voice_count,
        strokes = strokes.len(),
        samples = samples.len(),
        "generated melody"
    );

    Ok(GenerateResult {
        samples,
        wav,
        report,
    })
}

/// Composes a voice for every playable stroke.
///
/// Returns `(stroke_index, voice)` pairs in submission order, with 1-based
/// indices into `strokes`. Skipped strokes leave gaps in the numbering.
pub fn compose_voices(strokes: &[Stroke], mood: Mood, config: &EngineConfig) -> Vec<(usize, Voice)> {
    let profile = mood.profile();
    strokes
        .iter()
        .enumerate()
        .filter_map(|(i, stroke)| compose_voice(stroke, &profile, config).map(|v| (i + 1, v)))
        .collect()
}

/// Analyzes strokes without synthesizing audio.
pub fn analyze_strokes(strokes: &[Stroke], config: &EngineConfig) -> Vec<StrokeAnalysis> {
    strokes
        .iter()
        .enumerate()
        .map(|(i, stroke)| {
            let metrics = geometry::analyze(stroke.points());
            let note_count = if stroke.len() < 2 {
                0
            } else {
                voice::note_count(metrics.total_length, config)
            };
            StrokeAnalysis {
                stroke_index: i + 1,
                points: stroke.len(),
                metrics,
                scale: Scale::for_sharpness(
                    metrics.sharpness,
                    config.sharpness_mid,
                    config.sharpness_high,
                ),
                note_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sketchtone_spec::SpecError;

    fn line(x0: f64, x1: f64, y: f64) -> Stroke {
        Stroke::from_coords([(x0, y), (x1, y)])
    }

    #[test]
    fn test_unknown_mood_fails_before_work() {
        let err = generate(&[line(0.0, 500.0, 100.0)], "bored", &EngineConfig::default())
            .unwrap_err();
        assert!(matches!(err, AudioError::Spec(SpecError::UnknownMood { .. })));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            pixels_per_note: 0.0,
            ..EngineConfig::default()
        };
        let err = generate(&[line(0.0, 500.0, 100.0)], "joy", &config).unwrap_err();
        assert!(matches!(err, AudioError::Spec(SpecError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unbounded_note_duration_rejected_before_synthesis() {
        let config = EngineConfig {
            base_note_duration: 1e300,
            ..EngineConfig::default()
        };
        let err = generate(&[line(0.0, 500.0, 100.0)], "sorrow", &config).unwrap_err();
        match err {
            AudioError::Spec(SpecError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "base_note_duration")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_stroke_list_is_no_valid_input() {
        let err = generate(&[], "joy", &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, AudioError::NoValidInput { strokes: 0 }));
    }

    #[test]
    fn test_all_short_strokes_is_no_valid_input() {
        let strokes = [line(0.0, 10.0, 5.0), Stroke::default(), line(0.0, 49.0, 5.0)];
        let err = generate(&strokes, "joy", &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, AudioError::NoValidInput { strokes: 3 }));
    }

    #[test]
    fn test_report_keeps_submission_order_and_skips_short() {
        let strokes = [
            line(0.0, 300.0, 100.0),
            line(0.0, 20.0, 100.0),
            line(0.0, 600.0, 400.0),
        ];
        let result = generate(&strokes, "hope", &EngineConfig::default()).unwrap();
        let indices: Vec<usize> = result.report.voices.iter().map(|v| v.stroke_index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(result.report.voice_count, 2);
        assert_eq!(result.report.voices[0].note_count, 6);
        assert_eq!(result.report.voices[1].note_count, 12);
    }

    #[test]
    fn test_mixed_length_is_longest_voice() {
        let config = EngineConfig::default();
        let strokes = [line(0.0, 300.0, 100.0), line(0.0, 600.0, 400.0)];
        let voices = compose_voices(&strokes, Mood::Hope, &config);
        let longest = voices.iter().map(|(_, v)| v.samples.len()).max().unwrap();

        let result = generate_with_mood(&strokes, Mood::Hope, &config).unwrap();
        assert_eq!(result.samples.len(), longest);
        assert_eq!(result.report.num_samples, longest);
        assert_eq!(result.wav.pcm_hash, result.report.pcm_hash);
    }

    #[test]
    fn test_analyze_strokes_matches_composition() {
        let config = EngineConfig::default();
        let strokes = [line(0.0, 260.0, 50.0), Stroke::from_coords([(1.0, 1.0)])];
        let analysis = analyze_strokes(&strokes, &config);
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].note_count, 5);
        assert_eq!(analysis[0].scale, Scale::Pentatonic);
        assert_eq!(analysis[1].note_count, 0);
        assert_eq!(analysis[1].points, 1);
    }
}
