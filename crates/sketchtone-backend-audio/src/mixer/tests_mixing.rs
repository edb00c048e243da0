//! Tests for voice mixing.

use super::*;
use crate::error::AudioError;
use pretty_assertions::assert_eq;

// ============================================================================
// Basic Mixing Tests
// ============================================================================

#[test]
fn test_mix_single_voice_is_identity() {
    let voice = vec![0, 100, -200, 32767, -32768];
    let output = mix_voices(&[voice.clone()]).unwrap();
    assert_eq!(output, voice);
}

#[test]
fn test_mix_identical_voices_does_not_grow() {
    for n in 1..=8 {
        let voices = vec![vec![1234_i16; 64]; n];
        let output = mix_voices(&voices).unwrap();
        assert!(output.iter().all(|&s| s == 1234), "n = {n}");
    }
}

#[test]
fn test_mix_full_scale_identical_voices_stays_in_range() {
    let voices = vec![vec![i16::MAX; 10], vec![i16::MAX; 10], vec![i16::MAX; 10]];
    assert_eq!(mix_voices(&voices).unwrap(), vec![i16::MAX; 10]);

    let voices = vec![vec![i16::MIN; 10], vec![i16::MIN; 10]];
    assert_eq!(mix_voices(&voices).unwrap(), vec![i16::MIN; 10]);
}

#[test]
fn test_mix_averages() {
    let output = mix_voices(&[vec![100, 300], vec![300, -301]]).unwrap();
    assert_eq!(output, vec![200, -1]);
}

// ============================================================================
// Length and Padding Tests
// ============================================================================

#[test]
fn test_mix_length_is_longest_voice() {
    let output = mix_voices(&[vec![10; 3], vec![10; 7], vec![10; 5]]).unwrap();
    assert_eq!(output.len(), 7);
}

#[test]
fn test_shorter_voices_are_zero_padded() {
    let output = mix_voices(&[vec![600, 600], vec![600, 600, 600, 600]]).unwrap();
    // Both voices present, then only the longer one divided by 2.
    assert_eq!(output, vec![600, 600, 300, 300]);
}

#[test]
fn test_mixer_tracks_voices() {
    let mut mixer = Mixer::new();
    assert_eq!(mixer.num_samples(), 0);
    mixer.add_voice(vec![1; 4]);
    mixer.add_voice(vec![1; 9]);
    assert_eq!(mixer.voice_count(), 2);
    assert_eq!(mixer.num_samples(), 9);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_mix_empty_is_no_valid_input() {
    let voices: Vec<Vec<i16>> = Vec::new();
    let err = mix_voices(&voices).unwrap_err();
    assert!(matches!(err, AudioError::NoValidInput { .. }));
}

#[test]
fn test_mix_is_order_independent() {
    let a = vec![1000, -50, 7];
    let b = vec![-3, 2000];
    let c = vec![15, 15, 15, 15];
    let forward = mix_voices(&[a.clone(), b.clone(), c.clone()]).unwrap();
    let reverse = mix_voices(&[c, b, a]).unwrap();
    assert_eq!(forward, reverse);
}
