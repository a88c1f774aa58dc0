use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use xcframework_packager::archive::{ArchiveSettingsBuilder, Archiver, build_archive};
use zip::{CompressionMethod, ZipArchive};

/// Lays out a small multi-platform framework bundle under `root`.
fn create_xcframework(root: &Path) -> PathBuf {
    let bundle = root.join("Kit.xcframework");
    let ios = bundle.join("ios-arm64/Kit.framework");
    let sim = bundle.join("ios-arm64_x86_64-simulator/Kit.framework");
    fs::create_dir_all(ios.join("Headers")).unwrap();
    fs::create_dir_all(&sim).unwrap();

    fs::write(bundle.join("Info.plist"), b"<plist><dict/></plist>").unwrap();
    fs::write(ios.join("Kit"), vec![0xFE; 10_000]).unwrap();
    fs::write(ios.join("Info.plist"), b"<plist/>").unwrap();
    fs::write(ios.join("Headers/Kit.h"), b"#import <Foundation/Foundation.h>\n").unwrap();
    fs::write(sim.join("Kit"), vec![0xCA; 12_000]).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        for binary in [ios.join("Kit"), sim.join("Kit")] {
            fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
        }
        fs::set_permissions(ios.join("Info.plist"), fs::Permissions::from_mode(0o644)).unwrap();
    }

    bundle
}

fn entry_names(archive_path: &Path) -> Vec<String> {
    let mut archive = ZipArchive::new(File::open(archive_path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn test_scenario_two_files() {
    let temp_dir = TempDir::new().unwrap();
    let framework = temp_dir.path().join("bundle/A.framework");
    fs::create_dir_all(&framework).unwrap();
    fs::write(framework.join("a.bin"), b"\x7fELF-ish").unwrap();
    fs::write(framework.join("Info.plist"), b"<plist/>").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(framework.join("a.bin"), fs::Permissions::from_mode(0o755)).unwrap();
        fs::set_permissions(framework.join("Info.plist"), fs::Permissions::from_mode(0o644))
            .unwrap();
    }

    let output = temp_dir.path().join("out/bundle.zip");
    let archived = build_archive(temp_dir.path().join("bundle"), &output).unwrap();
    assert_eq!(archived.entries, 2);
    assert_eq!(archived.path, output.canonicalize().unwrap());

    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    assert_eq!(archive.len(), 2);

    for (index, expected) in ["bundle/A.framework/Info.plist", "bundle/A.framework/a.bin"]
        .iter()
        .enumerate()
    {
        let entry = archive.by_index(index).unwrap();
        assert_eq!(entry.name(), *expected);
        assert_eq!(entry.compression(), CompressionMethod::Deflated);

        let ts = entry.last_modified().unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (1980, 1, 1));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (0, 0, 0));
    }

    #[cfg(unix)]
    {
        let plist = archive.by_index(0).unwrap();
        assert_eq!(plist.unix_mode(), Some(0o100644));
        drop(plist);
        let bin = archive.by_index(1).unwrap();
        assert_eq!(bin.unix_mode().map(|m| m & 0o7777), Some(0o755));
    }
}

#[test]
fn test_deterministic_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = create_xcframework(temp_dir.path());

    let first = temp_dir.path().join("first/Kit.xcframework.zip");
    build_archive(&bundle, &first).unwrap();

    // Touch every file so modification times differ between builds.
    let later = SystemTime::now() + Duration::from_secs(3600);
    for entry in walkdir::WalkDir::new(&bundle) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            File::options()
                .write(true)
                .open(entry.path())
                .unwrap()
                .set_modified(later)
                .unwrap();
        }
    }

    let second = temp_dir.path().join("second/Kit.xcframework.zip");
    build_archive(&bundle, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_completeness_and_order() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = create_xcframework(temp_dir.path());
    fs::create_dir_all(bundle.join("ios-arm64/Kit.framework/Modules")).unwrap();
    let output = temp_dir.path().join("Kit.zip");

    build_archive(&bundle, &output).unwrap();

    let names = entry_names(&output);
    assert_eq!(
        names,
        vec![
            "Kit.xcframework/Info.plist",
            "Kit.xcframework/ios-arm64/Kit.framework/Headers/Kit.h",
            "Kit.xcframework/ios-arm64/Kit.framework/Info.plist",
            "Kit.xcframework/ios-arm64/Kit.framework/Kit",
            "Kit.xcframework/ios-arm64_x86_64-simulator/Kit.framework/Kit",
        ]
    );
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(names.iter().all(|n| !n.ends_with('/') && !n.contains('\\')));
}

#[test]
#[cfg(unix)]
fn test_permission_round_trip() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let bundle = create_xcframework(temp_dir.path());
    let script = bundle.join("strip.sh");
    fs::write(&script, b"#!/bin/sh\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o700)).unwrap();
    let output = temp_dir.path().join("Kit.zip");

    build_archive(&bundle, &output).unwrap();

    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).unwrap();
        let on_disk = temp_dir.path().join(entry.name());
        let expected = fs::metadata(&on_disk).unwrap().permissions().mode() & 0o777;
        let mode = entry.unix_mode().unwrap();
        assert_eq!(mode & 0o170000, 0o100000, "{} is not a regular file", entry.name());
        assert_eq!(mode & 0o777, expected, "mode mismatch for {}", entry.name());
    }
}

#[test]
#[cfg(unix)]
fn test_symlinks_are_not_archived() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let framework = temp_dir.path().join("Kit.framework");
    fs::create_dir_all(framework.join("Versions/A/Resources")).unwrap();
    fs::write(framework.join("Versions/A/Kit"), b"binary").unwrap();
    fs::write(framework.join("Versions/A/Resources/Info.plist"), b"<plist/>").unwrap();
    symlink("A", framework.join("Versions/Current")).unwrap();
    symlink("Versions/Current/Kit", framework.join("Kit")).unwrap();
    symlink("Versions/Current/Resources", framework.join("Resources")).unwrap();
    let output = temp_dir.path().join("Kit.framework.zip");

    build_archive(&framework, &output).unwrap();

    assert_eq!(
        entry_names(&output),
        vec![
            "Kit.framework/Versions/A/Kit",
            "Kit.framework/Versions/A/Resources/Info.plist",
        ]
    );
}

#[test]
#[cfg(unix)]
fn test_fifos_are_not_archived() {
    use nix::{sys::stat::Mode, unistd::mkfifo};

    let temp_dir = TempDir::new().unwrap();
    let bundle = create_xcframework(temp_dir.path());
    mkfifo(&bundle.join("ios-arm64/pipe"), Mode::S_IRWXU).unwrap();
    let output = temp_dir.path().join("Kit.zip");

    let archived = build_archive(&bundle, &output).unwrap();

    let names = entry_names(&output);
    assert_eq!(archived.entries, 5);
    assert!(!names.iter().any(|name| name.ends_with("/pipe")));
}

#[test]
fn test_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = create_xcframework(temp_dir.path());
    let output = temp_dir.path().join("Kit.zip");
    fs::write(&output, vec![0u8; 1 << 20]).unwrap();

    let archived = build_archive(&bundle, &output).unwrap();

    assert_eq!(archived.size, fs::metadata(&output).unwrap().len());
    assert_eq!(entry_names(&output).len(), 5);
}

#[test]
fn test_missing_source_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("dist/Kit.zip");

    let err = build_archive(temp_dir.path().join("Nope.xcframework"), &output).unwrap_err();

    assert!(err.is_not_found());
    assert!(!output.exists());
    assert!(!temp_dir.path().join("dist").exists());
}

#[test]
fn test_single_file_source() {
    let temp_dir = TempDir::new().unwrap();
    let lib = temp_dir.path().join("libkit.a");
    fs::write(&lib, b"!<arch>\n").unwrap();
    let output = temp_dir.path().join("libkit.zip");

    let archived = build_archive(&lib, &output).unwrap();

    assert_eq!(archived.entries, 0);
    assert!(entry_names(&output).is_empty());
}

#[test]
fn test_archiver_with_custom_level() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = create_xcframework(temp_dir.path());
    let stored = temp_dir.path().join("stored.zip");
    let deflated = temp_dir.path().join("deflated.zip");

    let settings = ArchiveSettingsBuilder::new()
        .source(&bundle)
        .output(&stored)
        .compression_level(0)
        .build()
        .unwrap();
    let stored_bundle = Archiver::new(settings).build().unwrap();
    let deflated_bundle = build_archive(&bundle, &deflated).unwrap();

    assert_eq!(stored_bundle.entries, deflated_bundle.entries);
    assert_eq!(stored_bundle.uncompressed_size, deflated_bundle.uncompressed_size);
    assert!(deflated_bundle.size < stored_bundle.size);

    let mut archive = ZipArchive::new(File::open(&stored).unwrap()).unwrap();
    assert_eq!(archive.by_index(0).unwrap().compression(), CompressionMethod::Stored);
}
