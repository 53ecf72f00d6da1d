// tests/animation_integration_test.rs

use std::fs;
use std::path::{Path, PathBuf};

use gps_log_animator::config::FrameFormat;
use gps_log_animator::data_analysis::interpolation::InterpolationKind;
use gps_log_animator::{make_animation, AnimationConfig, AnimationError, Animator};

const EXAMPLE_LOG: &str = "\
index,date,time,lat,lon,altitude,groundspeed
0,2017-09-08,0,35.1,-106.6,100,5
1,2017-09-08,10,35.2,-106.6,150,6
2,2017-09-08,20,35.3,-106.6,120,4
";

struct Scratch {
    root: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "gps_log_animator_it_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    fn write_log(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Small frames without text keep the runs fast and independent of installed fonts.
fn small_config(input: &Path, output_root: &Path) -> AnimationConfig {
    let mut config = AnimationConfig::new(input);
    config.output_root = output_root.to_path_buf();
    config.render.width = 320;
    config.render.height = 180;
    config.render.plot_padding_top = 20;
    config.render.axis_labels = false;
    config
}

fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_example_log_renders_600_frames() {
    let scratch = Scratch::new("example");
    let input = scratch.write_log("flight.csv", EXAMPLE_LOG);
    let output_root = scratch.root.join("animations");

    let summary = make_animation(small_config(&input, &output_root)).unwrap();

    assert_eq!(summary.frame_count, 600);
    assert_eq!(summary.output_dir, output_root.join("flight.csv0"));

    let names = sorted_file_names(&summary.output_dir);
    assert_eq!(names.len(), 600);
    assert_eq!(names.first().map(String::as_str), Some("image00000.jpg"));
    assert_eq!(names.last().map(String::as_str), Some("image00599.jpg"));

    let frame = image::open(summary.output_dir.join("image00000.jpg"))
        .unwrap()
        .to_rgb8();
    assert_eq!(frame.dimensions(), (320, 180));
    let corner = frame.get_pixel(2, 2);
    assert!(corner[1] > 200 && corner[0] < 60 && corner[2] < 60, "{:?}", corner);
}

#[test]
fn test_jpeg_frames_carry_pixel_density() {
    let scratch = Scratch::new("density");
    let input = scratch.write_log("flight.csv", EXAMPLE_LOG);

    let mut config = small_config(&input, &scratch.root.join("out"));
    config.fps = 1.0;
    let summary = make_animation(config).unwrap();

    // SOI, then the JFIF APP0 segment: units at byte 13, densities at 14..18
    let bytes = fs::read(summary.output_dir.join("image00000.jpg")).unwrap();
    assert_eq!(&bytes[0..4], &[0xFF, 0xD8, 0xFF, 0xE0]);
    assert_eq!(&bytes[6..11], b"JFIF\0");
    assert_eq!(bytes[13], 1, "density unit should be dots per inch");
    assert_eq!(u16::from_be_bytes([bytes[14], bytes[15]]), 150);
    assert_eq!(u16::from_be_bytes([bytes[16], bytes[17]]), 150);
}

#[test]
fn test_run_steps_through_setup_and_loop() {
    let scratch = Scratch::new("stepped");
    let input = scratch.write_log("flight.csv", EXAMPLE_LOG);
    let output_root = scratch.root.join("out");

    let mut config = small_config(&input, &output_root);
    config.fps = 0.5;
    config.render.format = FrameFormat::Png;

    let animator = Animator::new(config).unwrap();
    assert_eq!(animator.config().fps, 0.5);
    assert!(!output_root.exists());

    let frame_loop = animator.setup().unwrap();
    assert_eq!(frame_loop.output_dir(), output_root.join("flight.csv0").as_path());
    assert!(frame_loop.output_dir().is_dir());
    assert_eq!(frame_loop.remaining_frames(), 30);
    assert!(sorted_file_names(frame_loop.output_dir()).is_empty());

    let summary = frame_loop.run().unwrap();
    assert_eq!(summary.frame_count, 30);
    assert_eq!(sorted_file_names(&summary.output_dir).len(), 30);
}

#[test]
fn test_second_run_gets_next_directory() {
    let scratch = Scratch::new("second_run");
    let input = scratch.write_log("logs", EXAMPLE_LOG);
    let output_root = scratch.root.join("out");

    let mut config = small_config(&input, &output_root);
    config.fps = 1.0;
    config.render.format = FrameFormat::Png;

    let first = make_animation(config.clone()).unwrap();
    let second = make_animation(config).unwrap();

    assert_eq!(first.output_dir, output_root.join("logs0"));
    assert_eq!(second.output_dir, output_root.join("logs1"));
    assert_eq!(second.frame_count, 60);

    let names = sorted_file_names(&second.output_dir);
    assert_eq!(names.len(), 60);
    assert_eq!(names[0], "image00000.png");
    assert_eq!(names[59], "image00059.png");
}

#[test]
fn test_cubic_with_three_samples_fails() {
    let scratch = Scratch::new("cubic");
    let input = scratch.write_log("flight.csv", EXAMPLE_LOG);

    let mut config = small_config(&input, &scratch.root.join("out"));
    config.interpolation_kind = InterpolationKind::Cubic;

    match make_animation(config) {
        Err(AnimationError::InsufficientPoints { kind, required, found }) => {
            assert_eq!(kind, InterpolationKind::Cubic);
            assert_eq!(required, 4);
            assert_eq!(found, 3);
        }
        other => panic!("expected InsufficientPoints, got {:?}", other),
    }
}

#[test]
fn test_every_kind_renders_with_enough_samples() {
    let scratch = Scratch::new("kinds");
    let input = scratch.write_log(
        "five.csv",
        "h0,h1,time,h3,h4,alt,gs\n\
         0,0,0,0,0,100,5\n\
         0,0,1,0,0,104,6.5\n\
         0,0,2,0,0,101,7\n\
         0,0,3,0,0,99,6\n\
         0,0,4,0,0,103,4\n",
    );

    for kind in InterpolationKind::ALL {
        let mut config = small_config(&input, &scratch.root.join(kind.as_str()));
        config.interpolation_kind = kind;
        config.fps = 1.0;
        let summary = make_animation(config).unwrap();
        assert_eq!(summary.frame_count, 12, "{kind}");
    }
}

#[test]
fn test_malformed_row_aborts_run() {
    let scratch = Scratch::new("malformed");
    let input = scratch.write_log(
        "bad.csv",
        "h0,h1,time,h3,h4,alt,gs\n0,0,0,0,0,100,5\n0,0,1,0,0,n/a,6\n",
    );

    let result = make_animation(small_config(&input, &scratch.root.join("out")));
    assert!(matches!(
        result,
        Err(AnimationError::InvalidNumber { line: 3, column: 5, .. })
    ));
}

#[test]
fn test_missing_input_file_is_io_error() {
    let scratch = Scratch::new("missing");
    let input = scratch.root.join("does_not_exist.csv");

    let result = make_animation(small_config(&input, &scratch.root.join("out")));
    assert!(matches!(result, Err(AnimationError::Io { .. })));
}

#[test]
fn test_invalid_config_is_rejected_before_touching_disk() {
    let scratch = Scratch::new("invalid_config");
    let input = scratch.write_log("flight.csv", EXAMPLE_LOG);
    let output_root = scratch.root.join("out");

    let mut config = small_config(&input, &output_root);
    config.fps = -1.0;

    assert!(matches!(
        make_animation(config),
        Err(AnimationError::InvalidConfig(_))
    ));
    assert!(!output_root.exists());
}
