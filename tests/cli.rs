extern crate assert_cmd;
extern crate mandelbrot;
extern crate num_cpus;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use mandelbrot::raster::{HEADER_LEN, PALETTE_LEN};
use mandelbrot::RasterHeader;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn renders_the_small_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.ras");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .arg("-o")
        .arg(&path)
        .args(&["3", "2", "-1", "-1", "1", "1", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Depth: 10"));

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), HEADER_LEN + PALETTE_LEN + 6);
    assert_eq!(&bytes[HEADER_LEN + PALETTE_LEN..], &[3u8, 255, 2, 3, 255, 2][..]);
}

#[test]
fn missing_arguments_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("default.ras");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .arg("--output")
        .arg(&path)
        .args(&["--threads", "1", "120", "90"])
        .assert()
        .success();

    let bytes = fs::read(&path).unwrap();
    let header = RasterHeader::from_bytes(&bytes).unwrap();
    assert_eq!((header.width, header.height), (120, 90));
    assert_eq!(bytes.len(), HEADER_LEN + PALETTE_LEN + 120 * 90);
}

#[test]
fn thread_count_does_not_change_the_file() {
    // The thread count is capped at the number of CPUs.
    let threads = num_cpus::get();
    if threads < 2 {
        return;
    }
    let dir = tempdir().unwrap();
    let one = dir.path().join("one.ras");
    let many = dir.path().join("many.ras");
    let args = ["64", "48", "-1.5", "-0.1", "-1.3", "0.1", "500"];
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["-t", "1", "-o"])
        .arg(&one)
        .args(&args)
        .assert()
        .success();
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .arg("-t")
        .arg(threads.to_string())
        .arg("-o")
        .arg(&many)
        .args(&args)
        .assert()
        .success();
    assert_eq!(fs::read(&one).unwrap(), fs::read(&many).unwrap());
}

#[test]
fn single_pixel_width_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.ras");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .arg("-o")
        .arg(&path)
        .args(&["1", "800"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2x2"));
    assert!(!path.exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.ras");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .arg("-o")
        .arg(&path)
        .args(&["8", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not create file"));
}

#[test]
fn rejects_non_numeric_arguments() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["wide", "800"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse image dimension"));
}
