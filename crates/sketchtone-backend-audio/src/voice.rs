//! Voice composition: one stroke becomes one continuous melody.
//!
//! The stroke is analyzed, a scale is picked from its sharpness, a number of
//! points proportional to its length is sampled evenly along it, and each
//! sampled point becomes one sine note. The notes are concatenated in stroke
//! order.

use sketchtone_spec::{EngineConfig, MoodProfile, Scale, Stroke, MAX_LENGTH_RATIO};

use crate::geometry::{self, StrokeMetrics};
use crate::note::{self, NoteEvent};
use crate::synthesis;

/// Synthesized melody for one stroke, with its analysis.
#[derive(Debug, Clone)]
pub struct Voice {
    /// Concatenated note samples.
    pub samples: Vec<i16>,
    /// Stroke geometry.
    pub metrics: StrokeMetrics,
    /// Scale chosen from the stroke's sharpness.
    pub scale: Scale,
    /// Notes in playback order.
    pub notes: Vec<NoteEvent>,
}

/// Notes generated for a stroke of `total_length` pixels.
///
/// One note per `pixels_per_note`, capped at `max_notes_per_stroke`.
pub fn note_count(total_length: f64, config: &EngineConfig) -> usize {
    let notes = (total_length / config.pixels_per_note).floor();
    if notes.is_finite() && notes > 0.0 {
        (notes as usize).min(config.max_notes_per_stroke)
    } else {
        0
    }
}

/// Duration in seconds of every note in a stroke's voice.
///
/// Longer strokes and slower moods produce longer notes; the length ratio is
/// capped at [`MAX_LENGTH_RATIO`].
pub fn note_duration(total_length: f64, duration_ratio: f64, config: &EngineConfig) -> f64 {
    let length_ratio = (total_length / config.max_expected_length).min(MAX_LENGTH_RATIO);
    config.base_note_duration * length_ratio * duration_ratio
}

/// Evenly spaced point indices, first and last included, rounded to the
/// nearest index.
pub fn sample_indices(num_points: usize, count: usize) -> Vec<usize> {
    if num_points == 0 || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }

    let last = (num_points - 1) as f64;
    let step = last / (count - 1) as f64;
    (0..count)
        .map(|i| ((i as f64 * step).round() as usize).min(num_points - 1))
        .collect()
}

/// Composes the voice for one stroke.
///
/// Returns `None` when the stroke is too short to hold a single note
/// (including strokes with fewer than two points). That is not an error;
/// the caller skips the stroke.
pub fn compose_voice(stroke: &Stroke, mood: &MoodProfile, config: &EngineConfig) -> Option<Voice> {
    let points = stroke.points();
    if points.len() < 2 {
        tracing::debug!(points = points.len(), "skipping empty stroke");
        return None;
    }

    let metrics = geometry::analyze(points);
    let count = note_count(metrics.total_length, config);
    if count == 0 {
        tracing::debug!(
            length = metrics.total_length,
            "skipping stroke too short to render"
        );
        return None;
    }

    let duration = note_duration(metrics.total_length, mood.duration_ratio, config);
    let scale = Scale::for_sharpness(
        metrics.sharpness,
        config.sharpness_mid,
        config.sharpness_high,
    );

    let notes: Vec<NoteEvent> = sample_indices(points.len(), count)
        .into_iter()
        .map(|i| {
            let (pitch, octave) = note::map_point(&points[i], config, scale, mood.base_octave);
            NoteEvent {
                pitch,
                octave,
                frequency: note::frequency(pitch, octave),
                duration,
            }
        })
        .collect();

    let per_note = synthesis::num_samples(config.sample_rate, duration);
    let mut samples = Vec::with_capacity(per_note.checked_mul(notes.len()).unwrap_or(0));
    for event in &notes {
        samples.extend(synthesis::render_note(event, config.amplitude, config.sample_rate));
    }

    tracing::debug!(
        length = metrics.total_length,
        sharpness = metrics.sharpness,
        scale = scale.label(),
        notes = notes.len(),
        samples = samples.len(),
        "composed voice"
    );

    Some(Voice {
        samples,
        metrics,
        scale,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sketchtone_spec::{Mood, PitchClass};

    fn horizontal(length: f64, y: f64) -> Stroke {
        Stroke::from_coords([(0.0, y), (length, y)])
    }

    #[test]
    fn test_note_count_per_50px() {
        let config = EngineConfig::default();
        assert_eq!(note_count(0.0, &config), 0);
        assert_eq!(note_count(49.999, &config), 0);
        assert_eq!(note_count(50.0, &config), 1);
        assert_eq!(note_count(149.0, &config), 2);
        assert_eq!(note_count(50.0 * 31.0 + 49.0, &config), 31);
        assert_eq!(note_count(50.0 * 32.0, &config), 32);
        assert_eq!(note_count(50.0 * 33.0, &config), 32);
        assert_eq!(note_count(1e12, &config), 32);
        assert_eq!(note_count(f64::NAN, &config), 0);
    }

    #[test]
    fn test_note_duration_scaling() {
        let config = EngineConfig::default();
        // 2500px at ratio 1.0 -> base duration
        assert!((note_duration(2500.0, 1.0, &config) - 0.3).abs() < 1e-12);
        // ratio capped at 1.5
        assert!((note_duration(10_000.0, 1.0, &config) - 0.45).abs() < 1e-12);
        // mood scales linearly
        assert!((note_duration(1250.0, 2.0, &config) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sample_indices_include_endpoints() {
        assert_eq!(sample_indices(5, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(sample_indices(5, 3), vec![0, 2, 4]);
        assert_eq!(sample_indices(2, 4), vec![0, 0, 1, 1]);
        assert_eq!(sample_indices(10, 1), vec![0]);
        assert_eq!(sample_indices(4, 3), vec![0, 2, 3]);
        assert!(sample_indices(0, 3).is_empty());
        assert!(sample_indices(3, 0).is_empty());
    }

    #[test]
    fn test_longest_valid_voice_size_fits() {
        use sketchtone_spec::{MAX_NOTES_PER_STROKE, MAX_NOTE_SECONDS, MAX_SAMPLE_RATE};

        let per_note = synthesis::num_samples(MAX_SAMPLE_RATE, MAX_NOTE_SECONDS);
        let total = per_note.checked_mul(MAX_NOTES_PER_STROKE).unwrap();
        // 16-bit PCM must still fit the WAV data chunk size field.
        assert!(total * 2 <= u32::MAX as usize);
    }

    #[test]
    fn test_short_stroke_yields_no_voice() {
        let config = EngineConfig::default();
        let mood = Mood::Joy.profile();
        assert!(compose_voice(&horizontal(49.0, 100.0), &mood, &config).is_none());
        assert!(compose_voice(&Stroke::default(), &mood, &config).is_none());
        assert!(compose_voice(&Stroke::from_coords([(3.0, 3.0)]), &mood, &config).is_none());
    }

    #[test]
    fn test_voice_length_is_notes_times_note_samples() {
        let config = EngineConfig::default();
        let mood = Mood::Hope.profile();
        let voice = compose_voice(&horizontal(500.0, 400.0), &mood, &config).unwrap();

        assert_eq!(voice.notes.len(), 10);
        let per_note = synthesis::num_samples(config.sample_rate, voice.notes[0].duration);
        assert_eq!(voice.samples.len(), 10 * per_note);
    }

    #[test]
    fn test_two_point_horizontal_stroke() {
        let config = EngineConfig::default();
        let mood = Mood::Joy.profile();
        // 700px at the bottom: pentatonic, base octave, first and last points
        let voice = compose_voice(&horizontal(700.0, 500.0), &mood, &config).unwrap();

        assert_eq!(voice.scale, Scale::Pentatonic);
        assert_eq!(voice.metrics.sharpness, 0.0);
        assert_eq!(voice.notes.len(), 14);
        assert_eq!(voice.notes[0].pitch, PitchClass::C);
        assert_eq!(voice.notes[13].pitch, PitchClass::A);
        assert!(voice.notes.iter().all(|n| n.octave == 4));
    }

    #[test]
    fn test_jagged_stroke_uses_chromatic_scale() {
        let config = EngineConfig::default();
        let mood = Mood::Angry.profile();
        let coords: Vec<(f64, f64)> = (0..40)
            .map(|i| (i as f64 * 10.0, if i % 2 == 0 { 100.0 } else { 200.0 }))
            .collect();
        let voice = compose_voice(&Stroke::from_coords(coords), &mood, &config).unwrap();
        assert_eq!(voice.scale, Scale::Chromatic);
        assert!(voice.metrics.sharpness >= config.sharpness_high);
    }

    #[test]
    fn test_input_stroke_untouched() {
        let config = EngineConfig::default();
        let stroke = horizontal(300.0, 10.0);
        let before = stroke.clone();
        let _ = compose_voice(&stroke, &Mood::Serene.profile(), &config);
        assert_eq!(stroke, before);
    }
}
