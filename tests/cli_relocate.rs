use assert_cmd::cargo;
use std::fs;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run<I, S>(cfg: &Path, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let me = cargo::cargo_bin!("fastlink");
    Command::new(me)
        .env("FASTLINK_CONFIG", cfg)
        .args(args)
        .output()
        .expect("spawn binary")
}

#[cfg(unix)]
#[test]
fn file_is_copied_and_replaced_by_symlink() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("a.txt");
    fs::write(&src, "hi").unwrap();
    let out_dir = base.join("out");

    let out = run(&cfg, [&src, &out_dir]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let dest = out_dir.join("a.txt");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.trim(),
        format!("Moved {} to {} and created symlink", src.display(), dest.display())
    );
    assert_eq!(fs::read_to_string(&dest).unwrap(), "hi");
    assert!(fs::symlink_metadata(&src).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&src).unwrap(), dest);
}

#[test]
fn keep_flag_copies_directory_and_leaves_original() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("proj");
    fs::create_dir_all(src.join("src")).unwrap();
    fs::write(src.join("readme.md"), "r").unwrap();
    fs::write(src.join("src/main.x"), "m").unwrap();
    let out_dir = base.join("out");

    let me = cargo::cargo_bin!("fastlink");
    let out = Command::new(me)
        .env("FASTLINK_CONFIG", &cfg)
        .arg("-k")
        .arg(&src)
        .arg(&out_dir)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("(keeping original)"), "stdout: {stdout}");
    assert_eq!(fs::read_to_string(out_dir.join("proj/readme.md")).unwrap(), "r");
    assert_eq!(fs::read_to_string(out_dir.join("proj/src/main.x")).unwrap(), "m");
    assert!(fs::symlink_metadata(&src).unwrap().file_type().is_dir());
}

#[test]
fn recursive_destination_is_refused() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("data");
    fs::create_dir_all(&src).unwrap();
    let nested = src.join("sub");

    let out = run(&cfg, [&src, &nested]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.to_lowercase().contains("recursive"), "stderr: {stderr}");
    assert!(!nested.exists());
}

#[test]
fn existing_destination_entry_is_refused() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("a.txt");
    fs::write(&src, "new").unwrap();
    let out_dir = base.join("out");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("a.txt"), "old").unwrap();

    let out = run(&cfg, [&src, &out_dir]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(out_dir.join("a.txt")).unwrap(), "old");
    assert_eq!(fs::read_to_string(&src).unwrap(), "new");
}

#[test]
fn missing_source_fails() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();

    let out = run(&cfg, [base.join("ghost"), base.join("out")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!base.join("out").exists());
}

#[test]
fn usage_errors_exit_with_one() {
    let me = cargo::cargo_bin!("fastlink");
    let out = Command::new(me).output().expect("spawn binary");
    assert_eq!(out.status.code(), Some(1));

    let me = cargo::cargo_bin!("fastlink");
    let out = Command::new(me)
        .args(["a", "b", "c"])
        .output()
        .expect("spawn binary");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn dry_run_touches_nothing() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("a.txt");
    fs::write(&src, "hi").unwrap();
    let out_dir = base.join("out");

    let me = cargo::cargo_bin!("fastlink");
    let out = Command::new(me)
        .env("FASTLINK_CONFIG", &cfg)
        .arg("--dry-run")
        .arg("-m")
        .arg(&src)
        .arg(&out_dir)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Dry-run"), "stdout: {stdout}");
    assert!(stdout.contains("remove source"), "stdout: {stdout}");
    assert!(stdout.contains("link"), "stdout: {stdout}");
    assert!(!out_dir.exists());
    assert!(fs::symlink_metadata(&src).unwrap().file_type().is_file());
}

#[test]
fn failure_is_reported_once_at_default_level() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("a.txt");
    fs::write(&src, "new").unwrap();
    let out_dir = base.join("out");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("a.txt"), "old").unwrap();

    let out = run(&cfg, [&src, &out_dir]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "stderr: {stderr}");
    assert!(lines[0].starts_with("error: replicate failed:"), "stderr: {stderr}");
}

#[test]
fn piped_logs_carry_no_ansi_escapes() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("config.yaml");
    fs::write(&cfg, "").unwrap();
    let src = base.join("a.txt");
    fs::write(&src, "a").unwrap();

    let me = cargo::cargo_bin!("fastlink");
    let out = Command::new(me)
        .env("FASTLINK_CONFIG", &cfg)
        .args(["--log-level", "debug", "-k"])
        .arg(&src)
        .arg(base.join("out"))
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("relocation complete"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr: {stderr}");
}
