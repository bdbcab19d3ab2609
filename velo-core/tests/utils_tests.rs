// velo-core/tests/utils_tests.rs

use std::path::Path;
use velo_core::error::CoreError;
use velo_core::utils::output_path_for;

#[test]
fn test_output_path_basic() {
    let output = output_path_for(Path::new("/videos/holiday.mp4"), 5).unwrap();
    assert_eq!(output, Path::new("/videos/holiday_5x.mp4"));
}

#[test]
fn test_output_path_preserves_extension_case() {
    let output = output_path_for(Path::new("/videos/CLIP.MP4"), 5).unwrap();
    assert_eq!(output, Path::new("/videos/CLIP_5x.MP4"));
}

#[test]
fn test_output_path_dotted_stem() {
    let output = output_path_for(Path::new("/videos/my.holiday.video.mp4"), 5).unwrap();
    assert_eq!(output, Path::new("/videos/my.holiday.video_5x.mp4"));
}

#[test]
fn test_output_path_uses_speed_factor() {
    let output = output_path_for(Path::new("a.mp4"), 10).unwrap();
    assert_eq!(output, Path::new("a_10x.mp4"));
}

#[test]
fn test_output_path_without_extension_fails() {
    let result = output_path_for(Path::new("/videos/noext"), 5);
    match result {
        Err(CoreError::PathError(msg)) => assert!(msg.contains("noext")),
        other => panic!("Expected PathError, got {:?}", other),
    }
}
